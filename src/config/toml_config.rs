use crate::core::factory::FactorySettings;
use crate::core::ConfigProvider;
use crate::domain::model::StatusFormat;
use crate::utils::error::{DepotError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub factory: FactoryConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactoryConfig {
    pub id_prefix: Option<String>,
    pub min_stability: Option<f64>,
    pub max_stability: Option<f64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub format: Option<StatusFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DepotError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DepotError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DEPOT_SEED})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static regex is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn factory_settings(&self) -> FactorySettings {
        FactorySettings::from_provider(self)
    }
}

impl ConfigProvider for TomlConfig {
    fn id_prefix(&self) -> &str {
        self.factory.id_prefix.as_deref().unwrap_or("QN-")
    }

    fn min_stability(&self) -> f64 {
        self.factory.min_stability.unwrap_or(60.0)
    }

    fn max_stability(&self) -> f64 {
        self.factory.max_stability.unwrap_or(100.0)
    }

    fn seed(&self) -> Option<u64> {
        self.factory.seed
    }

    fn status_format(&self) -> StatusFormat {
        self.display.format.unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.factory_settings().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[factory]
id_prefix = "LAB-"
min_stability = 70.0
max_stability = 90.0
seed = 42

[display]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.id_prefix(), "LAB-");
        assert_eq!(config.min_stability(), 70.0);
        assert_eq!(config.max_stability(), 90.0);
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.status_format(), StatusFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.factory_settings(), FactorySettings::default());
        assert_eq!(config.status_format(), StatusFormat::Text);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("QUANTUM_DEPOT_TEST_SEED", "777");

        let toml_content = r#"
[factory]
seed = ${QUANTUM_DEPOT_TEST_SEED}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.seed(), Some(777));

        std::env::remove_var("QUANTUM_DEPOT_TEST_SEED");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[factory]
min_stability = 95.0
max_stability = 40.0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_format_is_a_parse_error() {
        let result = TomlConfig::from_toml_str("[display]\nformat = \"xml\"\n");
        assert!(matches!(result, Err(DepotError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[factory]\nid_prefix = \"FILE-\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.id_prefix(), "FILE-");
    }
}
