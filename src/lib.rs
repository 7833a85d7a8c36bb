pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use crate::core::{engine::VariantEngine, pipeline::VariantPipeline};
pub use utils::error::{Result, VariantError};
