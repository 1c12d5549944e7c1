//! Random bordered grids: the outer band holds `border_value`, interior
//! cells draw uniformly from `[min_value, max_value)`.

use config::constants::GeneratorConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stepgrid_mesh::{GridField, MeshError};

/// Seeded RNG when `seed` is given, OS-seeded otherwise.
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Fails only for extents too large to allocate.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<GridField, MeshError> {
    GridField::from_fn(config.columns, config.rows, |column, row| {
        if config.in_border(column, row) {
            config.border_value
        } else {
            rng.random_range(config.min_value..config.max_value)
        }
    })
}
