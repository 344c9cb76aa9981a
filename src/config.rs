use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::adapter::Format;

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Verple configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct VerpleConfig {
    pub formats: FormatsConfig,
    /// Format hint applied when the caller gives none
    pub default_format: Option<Format>,
    pub output: OutputConfig,
}

/// Per-format adapter configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FormatsConfig {
    pub pep440: FormatConfig,
    pub semver: FormatConfig,
    pub calver: FormatConfig,
    pub canonical: FormatConfig,
}

impl FormatsConfig {
    pub fn is_enabled(&self, format: Format) -> bool {
        match format {
            Format::Pep440 => self.pep440.enabled,
            Format::SemVer => self.semver.enabled,
            Format::CalVer => self.calver.enabled,
            Format::Canonical => self.canonical.enabled,
        }
    }
}

/// Individual format configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormatConfig {
    pub enabled: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print semantic documents
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Error raised while loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl VerpleConfig {
    /// Load the configuration at `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Directory holding `config.json`: `$XDG_CONFIG_HOME/verple`, then
/// `~/.config/verple`. With neither available the path is relative.
pub fn config_dir() -> PathBuf {
    resolve_config_dir(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir())
}

pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

// An empty XDG_CONFIG_HOME counts as unset.
fn resolve_config_dir(xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    let base = match (xdg_config_home, home) {
        (Some(xdg), _) if !xdg.is_empty() => PathBuf::from(xdg),
        (_, Some(home)) => home.join(".config"),
        _ => PathBuf::new(),
    };
    base.join("verple")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn verple_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<VerpleConfig>(json!({
            "formats": {
                "calver": { "enabled": false }
            }
        }))
        .unwrap();

        assert!(!result.formats.calver.enabled);
        assert!(result.formats.pep440.enabled);
        assert_eq!(result.default_format, None);
        assert_eq!(result.output, OutputConfig::default());
    }

    #[test]
    fn verple_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<VerpleConfig>(json!({
            "formats": {
                "pep440": { "enabled": false },
                "semver": { "enabled": true },
                "calver": { "enabled": false },
                "canonical": { "enabled": true }
            },
            "defaultFormat": "semver",
            "output": { "pretty": false }
        }))
        .unwrap();

        assert_eq!(
            result,
            VerpleConfig {
                formats: FormatsConfig {
                    pep440: FormatConfig { enabled: false },
                    semver: FormatConfig { enabled: true },
                    calver: FormatConfig { enabled: false },
                    canonical: FormatConfig { enabled: true },
                },
                default_format: Some(Format::SemVer),
                output: OutputConfig { pretty: false },
            }
        );
    }

    #[test]
    fn is_enabled_reflects_each_format() {
        let formats = FormatsConfig {
            semver: FormatConfig { enabled: false },
            ..FormatsConfig::default()
        };

        assert!(formats.is_enabled(Format::Pep440));
        assert!(!formats.is_enabled(Format::SemVer));
        assert!(formats.is_enabled(Format::CalVer));
        assert!(formats.is_enabled(Format::Canonical));
    }

    #[test]
    fn load_returns_defaults_when_file_is_missing() {
        let temp_dir = TempDir::new().unwrap();

        let config = VerpleConfig::load(&temp_dir.path().join("missing.json")).unwrap();

        assert_eq!(config, VerpleConfig::default());
    }

    #[test]
    fn load_reads_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"defaultFormat": "calver"}"#).unwrap();

        let config = VerpleConfig::load(&path).unwrap();

        assert_eq!(config.default_format, Some(Format::CalVer));
    }

    #[test]
    fn load_rejects_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            VerpleConfig::load(&path),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[rstest]
    #[case(Some("/srv/xdg"), Some("/home/dev"), "/srv/xdg/verple")]
    #[case(Some("/srv/xdg"), None, "/srv/xdg/verple")]
    #[case(None, Some("/home/dev"), "/home/dev/.config/verple")]
    #[case(Some(""), Some("/home/dev"), "/home/dev/.config/verple")]
    #[case(Some(""), None, "verple")]
    #[case(None, None, "verple")]
    fn resolve_config_dir_picks_first_usable_base(
        #[case] xdg: Option<&str>,
        #[case] home: Option<&str>,
        #[case] expected: &str,
    ) {
        let dir = resolve_config_dir(xdg.map(OsString::from), home.map(PathBuf::from));

        assert_eq!(dir, PathBuf::from(expected));
    }

    #[test]
    fn config_path_ends_with_config_file_name() {
        assert!(config_path().ends_with(Path::new("verple").join(CONFIG_FILE_NAME)));
    }
}
