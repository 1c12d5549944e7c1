//! CLI command implementations.

use crate::generator;
use crate::grid_file::GridFile;
use crate::settings::Settings;
use crate::Format;
use anyhow::{Context, Result};
use config::constants::DEFAULT_EXPORT_STEM;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};
use stepgrid_mesh::export::{json, stl};
use stepgrid_mesh::{build_mesh, validate_faces, GridField, GridTransform, StepMesh};
use tracing::info;

/// Write a random grid file.
pub fn generate(output: &Path, seed: Option<u64>, settings: Option<&Path>) -> Result<()> {
    let config = Settings::load(settings)?.generator_config()?;
    let field = generator::generate(&config, &mut generator::rng_for(seed))
        .context("Failed to generate grid")?;
    GridFile::from_field(&field, config.base).save(output)?;
    info!(
        columns = config.columns,
        rows = config.rows,
        path = %output.display(),
        "wrote grid"
    );
    Ok(())
}

/// Mesh a grid and write it as STL or JSON.
pub fn export(
    input: Option<&Path>,
    output: Option<PathBuf>,
    format: Format,
    settings: Option<&Path>,
    seed: Option<u64>,
) -> Result<()> {
    let settings = Settings::load(settings)?;
    let export_config = settings.export_config()?;
    let (field, base) = load_grid(input, &settings, seed)?;
    let mesh = build_mesh(&field, base);
    let transform = GridTransform::from(&export_config);

    let output = output
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_STEM).with_extension(format.extension()));
    write_replacing(&output, |out| {
        match format {
            Format::Stl => stl::write_stl(&mesh, &export_config.solid_name, &transform, out)?,
            Format::Json => json::write_json(&mesh, &transform, out)?,
        }
        Ok(())
    })?;

    info!(
        faces = mesh.face_count(),
        triangles = mesh.triangle_count(),
        path = %output.display(),
        "exported mesh"
    );
    Ok(())
}

/// Print face counts, bounds and closure of a grid's mesh.
pub fn inspect(input: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let (field, base) = load_grid(input, &Settings::default(), seed)?;
    let mesh = build_mesh(&field, base);
    print!("{}", describe(&field, &mesh)?);
    Ok(())
}

/// Writes through a sibling `.partial` file and renames it over `output`
/// once complete. A failed write removes the partial file and leaves any
/// existing `output` untouched.
fn write_replacing(
    output: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> Result<()>,
) -> Result<()> {
    let mut partial = output.as_os_str().to_owned();
    partial.push(".partial");
    let partial = PathBuf::from(partial);

    let file = File::create(&partial)
        .with_context(|| format!("Failed to create output file: {}", partial.display()))?;
    let mut out = BufWriter::new(file);
    let written = write(&mut out).and_then(|()| out.flush().context("Failed to flush output"));
    drop(out);

    if let Err(err) = written {
        std::fs::remove_file(&partial).ok();
        return Err(err.context(format!("Failed to write mesh: {}", output.display())));
    }
    std::fs::rename(&partial, output)
        .with_context(|| format!("Failed to move output into place: {}", output.display()))
}

/// Reads `input`, or generates a grid from `settings` when no file is given.
fn load_grid(input: Option<&Path>, settings: &Settings, seed: Option<u64>) -> Result<(GridField, f64)> {
    match input {
        Some(path) => {
            let grid = GridFile::load(path)?;
            Ok((grid.to_field()?, grid.base))
        }
        None => {
            let config = settings.generator_config()?;
            info!(?seed, "no grid file given, generating one");
            let field = generator::generate(&config, &mut generator::rng_for(seed))
                .context("Failed to generate grid")?;
            Ok((field, config.base))
        }
    }
}

/// Human-readable mesh report.
fn describe(field: &GridField, mesh: &StepMesh) -> Result<String> {
    let stats = mesh.stats();
    let report = validate_faces(mesh.faces());
    let (min, max) = mesh.bounding_box();

    let mut text = String::new();
    writeln!(text, "Grid")?;
    writeln!(text, "────")?;
    writeln!(text, "  extent:      {} x {}", mesh.columns(), mesh.rows())?;
    writeln!(text, "  values:      [{}, {}]", field.min_value(), field.max_value())?;
    writeln!(text, "  base:        {}", mesh.base())?;
    writeln!(text)?;
    writeln!(text, "Mesh")?;
    writeln!(text, "────")?;
    writeln!(text, "  top caps:    {}", stats.top_caps)?;
    writeln!(text, "  bottom caps: {}", stats.bottom_caps)?;
    writeln!(text, "  column walls: {}", stats.column_walls)?;
    writeln!(text, "  row walls:   {}", stats.row_walls)?;
    writeln!(text, "  faces:       {}", mesh.face_count())?;
    writeln!(text, "  triangles:   {}", mesh.triangle_count())?;
    writeln!(
        text,
        "  bounds:      ({}, {}, {}) .. ({}, {}, {})",
        min.x, min.y, min.z, max.x, max.y, max.z
    )?;
    writeln!(text, "  panel cases (n1 x n2):")?;
    for (n1, row) in stats.panel_cases.iter().enumerate() {
        writeln!(text, "    {n1}: {:>5} {:>5} {:>5}", row[0], row[1], row[2])?;
    }
    writeln!(text)?;
    writeln!(text, "Closure")?;
    writeln!(text, "───────")?;
    writeln!(text, "  edges:       {}", report.edge_count)?;
    writeln!(text, "  unbalanced:  {}", report.unbalanced_edges)?;
    writeln!(text, "  non-manifold: {}", report.non_manifold_edges)?;
    writeln!(text, "  degenerate:  {}", report.degenerate_faces)?;
    writeln!(text, "  watertight:  {}", report.is_watertight())?;
    Ok(text)
}
