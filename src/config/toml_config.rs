use crate::domain::model::VariantSpec;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, VariantError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub variants: Vec<VariantEntry>,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantEntry {
    pub name: String,
    pub target: String,
    pub replacement: String,
    pub dest: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub report_filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(VariantError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| VariantError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ASSET_ROOT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("source.path", &self.source.path)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;

        if self.variants.is_empty() {
            return Err(VariantError::MissingConfigError {
                field: "variants".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for variant in &self.variants {
            validation::validate_non_empty_string("variants.name", &variant.name)?;
            validation::validate_non_empty_string("variants.dest", &variant.dest)?;

            // 空的 target 會讓取代邏輯在每個字元之間插入 replacement
            if variant.target.is_empty() {
                return Err(VariantError::InvalidConfigValueError {
                    field: format!("variants.{}.target", variant.name),
                    value: String::new(),
                    reason: "Target literal cannot be empty".to_string(),
                });
            }

            if !seen.insert(variant.name.as_str()) {
                return Err(VariantError::InvalidConfigValueError {
                    field: "variants.name".to_string(),
                    value: variant.name.clone(),
                    reason: "Variant names must be unique".to_string(),
                });
            }
        }

        Ok(())
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn source_path(&self) -> &str {
        &self.source.path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn variants(&self) -> Vec<VariantSpec> {
        self.variants
            .iter()
            .map(|v| VariantSpec {
                name: v.name.clone(),
                target: v.target.clone(),
                replacement: v.replacement.clone(),
                dest: v.dest.clone(),
            })
            .collect()
    }

    fn report_filename(&self) -> Option<&str> {
        self.load.report_filename.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r##"
[pipeline]
name = "piece-variants"
description = "Test pipeline"
version = "1.0.0"

[source]
path = "assets/mage.svg"

[[variants]]
name = "white"
target = 'fill="#000000" stroke="none"'
replacement = 'fill="#ffffff" stroke="#000000" stroke-width="10"'
dest = "white.svg"

[load]
output_path = "./test-output"
"##;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.pipeline.name, "piece-variants");
        assert_eq!(config.source.path, "assets/mage.svg");
        assert_eq!(config.variants.len(), 1);
        assert_eq!(config.variants[0].dest, "white.svg");
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_ASSET_SOURCE", "assets/from-env.svg");

        let toml_content = r#"
[pipeline]
name = "test"
description = "test"
version = "1.0"

[source]
path = "${TEST_ASSET_SOURCE}"

[[variants]]
name = "white"
target = "stroke"
replacement = "outline"
dest = "white.svg"

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.path, "assets/from-env.svg");

        std::env::remove_var("TEST_ASSET_SOURCE");
    }

    #[test]
    fn test_unknown_env_var_left_intact() {
        let substituted =
            TomlConfig::substitute_env_vars("path = \"${NO_SUCH_VARIANT_VAR}\"").unwrap();
        assert_eq!(substituted, "path = \"${NO_SUCH_VARIANT_VAR}\"");
    }

    #[test]
    fn test_validation_rejects_empty_variant_list() {
        let toml_content = r#"
variants = []

[pipeline]
name = "test"
description = "test"
version = "1.0"

[source]
path = "assets/mage.svg"

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(VariantError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_empty_target() {
        let toml_content = r#"
[pipeline]
name = "test"
description = "test"
version = "1.0"

[source]
path = "assets/mage.svg"

[[variants]]
name = "white"
target = ""
replacement = "something"
dest = "white.svg"

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_variant_names() {
        let toml_content = r#"
[pipeline]
name = "test"
description = "test"
version = "1.0"

[source]
path = "assets/mage.svg"

[[variants]]
name = "white"
target = "a"
replacement = "b"
dest = "white.svg"

[[variants]]
name = "white"
target = "a"
replacement = "c"
dest = "white2.svg"

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[pipeline]
name = "file-test"
description = "File test"
version = "1.0"

[source]
path = "assets/mage.svg"

[[variants]]
name = "white"
target = "a"
replacement = "b"
dest = "white.svg"

[load]
output_path = "./output"
report_filename = "report.json"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pipeline.name, "file-test");
        assert_eq!(config.load.report_filename.as_deref(), Some("report.json"));
    }
}
