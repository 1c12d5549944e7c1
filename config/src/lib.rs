//! # Config Crate
//!
//! Centralized configuration constants for the stepped grid mesh pipeline.
//! Tolerances, generator defaults and export defaults live here so the mesh
//! library and the command-line tool agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_BASE_VALUE, DEFAULT_SOLID_NAME, EPSILON};
//!
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! assert!(DEFAULT_BASE_VALUE < 0.0);
//! assert_eq!(DEFAULT_SOLID_NAME, "StepGrid");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Settings**: Composite settings are only built through
//!   constructors that reject impossible values

pub mod constants;
