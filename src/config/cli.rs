use crate::domain::model::VariantSpec;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "asset-variants")]
#[command(about = "A small tool for deriving recolored SVG asset variants")]
pub struct CliConfig {
    /// Path to the source SVG file
    #[arg(long)]
    pub source: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Write a JSON run report with this filename next to the outputs
    #[arg(long)]
    pub report: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn source_path(&self) -> &str {
        &self.source
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    // 命令列模式固定使用內建的白／黑變體組
    fn variants(&self) -> Vec<VariantSpec> {
        VariantSpec::builtin()
    }

    fn report_filename(&self) -> Option<&str> {
        self.report.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("source", &self.source)?;
        validation::validate_file_extensions(
            "source",
            std::slice::from_ref(&self.source),
            &["svg"],
        )?;
        validation::validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
