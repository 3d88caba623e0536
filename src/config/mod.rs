//! Configuration loading, parsing, and validation.
//!
//! - [`schema`] - Typed config structs with built-in defaults
//! - [`loader`] - Optional `.dnspy-setup.yml` discovery and parsing
//! - [`validator`] - Sanity checks run after loading
//! - [`interpolation`] - `${var}` templates shared by installer and report

pub mod interpolation;
pub mod loader;
pub mod schema;
pub mod validator;

pub use interpolation::{
    extract_variables, parse_interpolation, resolve_string, InterpolationContext,
};
pub use loader::{
    find_project_config, load_config, load_config_file, parse_config, ConfigSource,
    CONFIG_FILE_NAME,
};
pub use schema::{
    InstallConfig, LatestConfig, ReportConfig, RepositoryConfig, SetupConfig, ToolchainConfig,
};
pub use validator::{ensure_valid, validate_config, ValidationError};
