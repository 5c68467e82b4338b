use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use toml::Value;

use crate::cli::CliArgs;
use crate::client::configured_token;
use crate::theme::{ThemeArg, choose_theme};

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const KNOWN_KEYS: [&str; 5] = ["server", "theme", "export_dir", "csrf_token", "timeout_secs"];

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub server: Option<String>,
    pub theme: Option<String>,
    pub export_dir: Option<PathBuf>,
    pub csrf_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLoadOutcome {
    pub config: Option<AppConfig>,
    pub warnings: Vec<String>,
}

/// Effective settings after merging CLI, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server: String,
    pub export_dir: PathBuf,
    pub csrf_token: Option<String>,
    pub timeout: Duration,
    pub theme: ThemeArg,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            export_dir: PathBuf::from("."),
            csrf_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            theme: ThemeArg::Dark,
        }
    }
}

impl Settings {
    /// Precedence: CLI > config file > defaults.
    pub fn resolve(cli: &CliArgs, config: Option<&AppConfig>) -> (Self, Vec<String>) {
        let defaults = Settings::default();

        let (theme, warnings) =
            choose_theme(cli.theme, config.and_then(|c| c.theme.as_deref()));

        let settings = Settings {
            server: cli
                .server
                .clone()
                .or_else(|| config.and_then(|c| c.server.clone()))
                .unwrap_or(defaults.server),
            export_dir: cli
                .export_dir
                .clone()
                .or_else(|| config.and_then(|c| c.export_dir.clone()))
                .unwrap_or(defaults.export_dir),
            csrf_token: config
                .and_then(|c| c.csrf_token.as_deref())
                .and_then(configured_token),
            timeout: config
                .and_then(|c| c.timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            theme,
        };

        (settings, warnings)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let appdata = std::env::var_os("APPDATA").map(PathBuf::from);

    config_path_from_parts(xdg_config_home, home, appdata)
}

pub fn config_path_hint() -> &'static str {
    #[cfg(windows)]
    {
        r"%APPDATA%\doccmp\config.toml"
    }

    #[cfg(not(windows))]
    {
        "$XDG_CONFIG_HOME/doccmp/config.toml (default: ~/.config/doccmp/config.toml)"
    }
}

fn config_path_from_parts(
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
    _appdata: Option<PathBuf>,
) -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let base = _appdata
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| anyhow!("Could not determine APPDATA for config directory"))?;
        return Ok(base.join("doccmp").join("config.toml"));
    }

    #[cfg(not(windows))]
    {
        if let Some(base) = xdg_config_home.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(base.join("doccmp").join("config.toml"));
        }

        let home = home
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| anyhow!("Could not determine HOME for config directory"))?;
        Ok(home.join(".config").join("doccmp").join("config.toml"))
    }
}

pub fn load_config() -> Result<ConfigLoadOutcome> {
    let path = config_path()?;
    load_config_from_path(&path)
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoadOutcome> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ConfigLoadOutcome::default()),
        Err(err) => return Err(err.into()),
    };

    let value: Value = toml::from_str(&contents)?;
    let table = value
        .as_table()
        .ok_or_else(|| anyhow!("Config root must be a TOML table"))?;

    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    let string_key = |key: &str, warnings: &mut Vec<String>| -> Option<String> {
        let value = table.get(key)?;
        match value.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                warnings.push(format!(
                    "Warning: Config key '{key}' must be a string; ignoring value"
                ));
                None
            }
        }
    };

    config.server = string_key("server", &mut warnings);
    config.theme = string_key("theme", &mut warnings);
    config.export_dir = string_key("export_dir", &mut warnings).map(PathBuf::from);
    config.csrf_token = string_key("csrf_token", &mut warnings);

    if let Some(timeout) = table.get("timeout_secs") {
        match timeout.as_integer() {
            Some(secs) if secs > 0 => config.timeout_secs = Some(secs as u64),
            _ => warnings.push(
                "Warning: Config key 'timeout_secs' must be a positive integer; ignoring value"
                    .to_string(),
            ),
        }
    }

    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warnings.push(format!("Warning: Unknown config key '{key}', ignoring"));
        }
    }

    Ok(ConfigLoadOutcome {
        config: Some(config),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn load(contents: &str) -> Result<ConfigLoadOutcome> {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).expect("failed to write config");
        load_config_from_path(&path)
    }

    #[test]
    fn should_return_none_when_config_file_missing() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        let outcome = load_config_from_path(&path).expect("missing config should not fail");
        assert_eq!(outcome.config, None);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn should_load_all_known_keys() {
        let outcome = load(
            "server = \"http://docs.internal:9000\"\n\
             theme = \"light\"\n\
             export_dir = \"/tmp/reports\"\n\
             csrf_token = \"abc\"\n\
             timeout_secs = 15\n",
        )
        .expect("valid config should parse");

        let config = outcome.config.expect("config present");
        assert_eq!(config.server.as_deref(), Some("http://docs.internal:9000"));
        assert_eq!(config.theme.as_deref(), Some("light"));
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/reports")));
        assert_eq!(config.csrf_token.as_deref(), Some("abc"));
        assert_eq!(config.timeout_secs, Some(15));
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn should_parse_empty_config_as_defaults() {
        let outcome = load("").expect("empty config should parse");
        assert_eq!(outcome.config, Some(AppConfig::default()));
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn should_error_on_invalid_toml() {
        assert!(load("server =\n").is_err(), "invalid TOML should return error");
    }

    #[test]
    fn should_warn_on_unknown_keys_and_keep_known_values() {
        let outcome = load("server = \"http://h\"\nservr = \"typo\"\n").expect("config should parse");
        assert_eq!(
            outcome.config.as_ref().and_then(|cfg| cfg.server.as_deref()),
            Some("http://h")
        );
        assert_eq!(
            outcome.warnings,
            vec!["Warning: Unknown config key 'servr', ignoring".to_string()]
        );
    }

    #[test]
    fn should_warn_and_ignore_values_with_invalid_type() {
        let outcome = load("theme = 123\ntimeout_secs = \"soon\"\n").expect("config should parse");
        assert_eq!(outcome.config, Some(AppConfig::default()));
        assert_eq!(
            outcome.warnings,
            vec![
                "Warning: Config key 'theme' must be a string; ignoring value".to_string(),
                "Warning: Config key 'timeout_secs' must be a positive integer; ignoring value"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn should_prefer_cli_over_config_over_defaults() {
        let config = AppConfig {
            server: Some("http://from-config".to_string()),
            export_dir: Some(PathBuf::from("/cfg")),
            theme: Some("light".to_string()),
            csrf_token: Some("sessionid=1; csrftoken=fromcookie".to_string()),
            timeout_secs: Some(5),
        };
        let cli = CliArgs {
            server: Some("http://from-cli".to_string()),
            ..CliArgs::default()
        };

        let (settings, warnings) = Settings::resolve(&cli, Some(&config));

        assert!(warnings.is_empty());
        assert_eq!(settings.server, "http://from-cli");
        assert_eq!(settings.export_dir, PathBuf::from("/cfg"));
        assert_eq!(settings.theme, ThemeArg::Light);
        assert_eq!(settings.csrf_token.as_deref(), Some("fromcookie"));
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[test]
    fn should_use_defaults_without_config() {
        let (settings, _) = Settings::resolve(&CliArgs::default(), None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.server, DEFAULT_SERVER);
    }

    #[cfg(not(windows))]
    #[test]
    fn should_use_xdg_config_home_when_set() {
        let path = config_path_from_parts(
            Some(PathBuf::from("/tmp/xdg-config")),
            Some(PathBuf::from("/tmp/home")),
            None,
        )
        .expect("config path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/xdg-config/doccmp/config.toml"));
    }

    #[cfg(not(windows))]
    #[test]
    fn should_fallback_to_home_dot_config_when_xdg_unset_or_empty() {
        let path = config_path_from_parts(None, Some(PathBuf::from("/home/tester")), None)
            .expect("config path should resolve");
        assert_eq!(path, PathBuf::from("/home/tester/.config/doccmp/config.toml"));

        let path = config_path_from_parts(
            Some(PathBuf::from("")),
            Some(PathBuf::from("/home/tester")),
            None,
        )
        .expect("config path should resolve");
        assert_eq!(path, PathBuf::from("/home/tester/.config/doccmp/config.toml"));
    }

    #[cfg(windows)]
    #[test]
    fn should_use_windows_appdata_base_dir() {
        let path = config_path_from_parts(
            None,
            None,
            Some(PathBuf::from(r"C:\Users\tester\AppData\Roaming")),
        )
        .expect("config path should resolve");

        assert_eq!(
            path,
            PathBuf::from(r"C:\Users\tester\AppData\Roaming\doccmp\config.toml")
        );
    }
}
