//! Config and lookup-table files, format picked by extension
//!
//! The tool reads `patchbot.toml` and JSON lookup tables, and writes the
//! JSON dist outputs. YAML is accepted for any of the input tables.

use std::fmt;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// Serialization format of a config or output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Format for `path`, from its extension (case-insensitive).
    pub fn of(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> std::result::Result<T, String> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    fn render<T: Serialize>(self, value: &T) -> std::result::Result<String, String> {
        match self {
            Self::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
            Self::Json => to_json_pretty(value).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        })
    }
}

/// Loads and saves serde values, dispatching on [`ConfigFormat::of`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let format = ConfigFormat::of(path)?;
        let content = io::read_text(path)?;

        format.parse(&content).map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            format,
            message,
        })
    }

    /// Write `value` atomically. JSON uses four-space indentation.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let format = ConfigFormat::of(path)?;
        let content = format
            .render(value)
            .map_err(|message| Error::ConfigSerialize {
                path: path.to_path_buf(),
                format,
                message,
            })?;

        tracing::debug!(path = %path.display(), %format, "Saving");
        io::write_atomic(path, content.as_bytes())
    }
}

fn to_json_pretty<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::of(Path::new("patchbot.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::of(Path::new("a/LICENSES.JSON")).unwrap(), ConfigFormat::Json);
        assert_eq!(ConfigFormat::of(Path::new("tables.yml")).unwrap(), ConfigFormat::Yaml);
    }

    #[test]
    fn test_unknown_extension() {
        let err = ConfigFormat::of(&PathBuf::from("tables.ini")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { extension } if extension == "ini"));
    }
}
