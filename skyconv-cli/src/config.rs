use anyhow::Context;
use serde::Deserialize;
use skyconv_core::FormatOptions;
use std::path::Path;

/// Contents of a `--config` file.
///
/// ```toml
/// [format]
/// precision = 3
/// separator = ":"
/// pad = true
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub format: FormatOptions,
}

impl CliConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyconv_core::angle::AngleUnit;
    use skyconv_core::Separator;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config.format, FormatOptions::default());
    }

    #[test]
    fn test_format_table() {
        let config = CliConfig::from_toml_str(
            r#"
[format]
precision = 3
separator = ":"
pad = true
"#,
        )
        .unwrap();
        assert_eq!(config.format.precision, 3);
        assert_eq!(config.format.separator, Separator::colon());
        assert!(config.format.pad);
        assert_eq!(config.format.unit, AngleUnit::Hours);
    }

    #[test]
    fn test_separator_parts() {
        let config = CliConfig::from_toml_str("[format]\nseparator = [\"h\", \"m\", \"s\"]\n").unwrap();
        assert_eq!(config.format.separator, Separator::hms());
    }

    #[test]
    fn test_bad_separator_is_an_error() {
        assert!(CliConfig::from_toml_str("[format]\nseparator = \"abcd\"\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[format]\nprecision = 1\n").unwrap();
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.format.precision, 1);

        assert!(CliConfig::from_file("/nonexistent/skyconv.toml").is_err());
    }
}
