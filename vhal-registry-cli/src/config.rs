//! Configuration loading and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vhal_registry::RegistryConfig;

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use vhal_registry::{ChangeMode, PropertyId};

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [registry]
            include_builtin = false

            [[registry.vendor_properties]]
            id = 0x21400101
            change_mode = "ON_CHANGE"
            name = "VENDOR_SEAT_MASSAGE"

            [[registry.vendor_properties]]
            id = 559939842
            change_mode = "CONTINUOUS"

            [output]
            format = "json"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert!(!config.registry.include_builtin);
        assert_eq!(config.registry.vendor_properties.len(), 2);

        let first = &config.registry.vendor_properties[0];
        assert_eq!(first.id, PropertyId::new(0x2140_0101));
        assert_eq!(first.change_mode, ChangeMode::OnChange);
        assert_eq!(first.name.as_deref(), Some("VENDOR_SEAT_MASSAGE"));

        let second = &config.registry.vendor_properties[1];
        assert_eq!(second.id, PropertyId::new(0x2160_0102));
        assert_eq!(second.name, None);

        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.registry.include_builtin);
        assert!(config.registry.vendor_properties.is_empty());
        assert_eq!(config.output.format, OutputFormat::Txt);
    }

    #[test]
    fn test_unknown_change_mode_rejected() {
        let toml_content = r#"
            [[registry.vendor_properties]]
            id = 0x21400101
            change_mode = "SOMETIMES"
        "#;

        assert!(toml::from_str::<AppConfig>(toml_content).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[registry.vendor_properties]]\nid = 0x21400101\nchange_mode = \"STATIC\""
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.registry.vendor_properties.len(), 1);
        assert_eq!(config.registry.vendor_properties[0].change_mode, ChangeMode::Static);
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/vhal-registry.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
