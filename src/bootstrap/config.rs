//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Locate and read `rsvp.toml` / 定位并读取 `rsvp.toml`
//! - ✅ Parse TOML into the `FlowConfig` DTO / 将 TOML 解析为 `FlowConfig` DTO
//! - ✅ Fill zero values with host defaults / 用宿主默认值填充零值
//!
//! Loading and defaulting are separate steps: `load_config` accepts whatever
//! is in the file, `resolve_settings` decides what an empty value means.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use rsvp_app::FlowSettings;
use rsvp_core::config::FlowConfig;
use rsvp_infra::submission::DEFAULT_FORM_ENDPOINT;
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "rsvp.toml";
pub const CONFIG_PATH_ENV: &str = "RSVP_CONFIG";
/// Directory under the platform data dir holding host state.
pub const APP_DIR_NAME: &str = "wedding-rsvp";

const DEFAULT_FADE_DELAY_MS: u64 = 180;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Settings the host wires the flow with, after defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSettings {
    pub endpoint_url: String,
    pub request_timeout: Duration,
    pub flow: FlowSettings,
    /// `None` keeps preferences in memory only.
    pub preferences_path: Option<PathBuf>,
    pub locale_override: Option<String>,
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Pure data loading, no validation. Missing keys become empty values.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<FlowConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    FlowConfig::from_toml(&toml_value)
}

/// Config file location: first CLI argument, then `RSVP_CONFIG`, then
/// `rsvp.toml` in the working directory.
pub fn config_path(cli_arg: Option<String>, env_value: Option<String>) -> PathBuf {
    cli_arg
        .into_iter()
        .chain(env_value)
        .find(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Load `config_path` if it exists, otherwise fall back to system defaults
/// under `data_dir`.
pub fn load_or_default(config_path: &Path, data_dir: Option<PathBuf>) -> anyhow::Result<FlowConfig> {
    if config_path.exists() {
        info!(path = %config_path.display(), "loading config");
        return load_config(config_path.to_path_buf());
    }

    info!(path = %config_path.display(), "config file not found, using system defaults");
    Ok(match data_dir {
        Some(dir) => FlowConfig::with_system_defaults(dir.join(APP_DIR_NAME)),
        None => {
            warn!("no platform data directory, preferences will not persist");
            FlowConfig::empty()
        }
    })
}

/// Replace every empty or zero config value with its default.
pub fn resolve_settings(config: &FlowConfig, data_dir: Option<PathBuf>) -> HostSettings {
    let endpoint_url = match config.endpoint_url.trim() {
        "" => DEFAULT_FORM_ENDPOINT.to_string(),
        url => url.to_string(),
    };
    let request_timeout = Duration::from_secs(match config.request_timeout_secs {
        0 => DEFAULT_REQUEST_TIMEOUT_SECS,
        secs => secs,
    });
    let fade_delay = Duration::from_millis(match config.fade_delay_ms {
        0 => DEFAULT_FADE_DELAY_MS,
        ms => ms,
    });
    let preferences_path = if config.preferences_path.as_os_str().is_empty() {
        data_dir.map(|dir| {
            FlowConfig::with_system_defaults(dir.join(APP_DIR_NAME)).preferences_path
        })
    } else {
        Some(config.preferences_path.clone())
    };
    let locale_override = Some(config.locale_override.trim())
        .filter(|locale| !locale.is_empty())
        .map(str::to_string);

    HostSettings {
        endpoint_url,
        request_timeout,
        flow: FlowSettings { fade_delay },
        preferences_path,
        locale_override,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [submission]
            endpoint_url = "https://forms.example/f/abc"

            [flow]
            fade_delay_ms = 300
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.endpoint_url, "https://forms.example/f/abc");
        assert_eq!(config.fade_delay_ms, 300);
        assert_eq!(config.request_timeout_secs, 0);
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[submission\nendpoint_url = ").unwrap();

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config(temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_or_default_uses_data_dir_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_or_default(
            &temp_dir.path().join("absent.toml"),
            Some(temp_dir.path().to_path_buf()),
        )
        .unwrap();

        assert_eq!(
            config.preferences_path,
            temp_dir.path().join(APP_DIR_NAME).join("preferences.json")
        );
        assert!(config.endpoint_url.is_empty());
    }

    #[test]
    fn test_resolve_settings_fills_defaults() {
        let settings = resolve_settings(&FlowConfig::empty(), None);

        assert_eq!(settings.endpoint_url, DEFAULT_FORM_ENDPOINT);
        assert_eq!(settings.request_timeout, Duration::from_secs(10));
        assert_eq!(settings.flow.fade_delay, Duration::from_millis(180));
        assert_eq!(settings.preferences_path, None);
        assert_eq!(settings.locale_override, None);
    }

    #[test]
    fn test_resolve_settings_keeps_configured_values() {
        let config = FlowConfig {
            endpoint_url: " https://forms.example/f/abc ".to_string(),
            request_timeout_secs: 3,
            fade_delay_ms: 50,
            preferences_path: PathBuf::from("/tmp/prefs.json"),
            locale_override: "ko-KR".to_string(),
        };

        let settings = resolve_settings(&config, Some(PathBuf::from("/data")));

        assert_eq!(settings.endpoint_url, "https://forms.example/f/abc");
        assert_eq!(settings.request_timeout, Duration::from_secs(3));
        assert_eq!(settings.flow.fade_delay, Duration::from_millis(50));
        assert_eq!(settings.preferences_path, Some(PathBuf::from("/tmp/prefs.json")));
        assert_eq!(settings.locale_override.as_deref(), Some("ko-KR"));
    }

    #[test]
    fn test_config_path_precedence() {
        assert_eq!(
            config_path(Some("a.toml".into()), Some("b.toml".into())),
            PathBuf::from("a.toml")
        );
        assert_eq!(config_path(None, Some("b.toml".into())), PathBuf::from("b.toml"));
        assert_eq!(config_path(Some(" ".into()), None), PathBuf::from(CONFIG_FILE_NAME));
    }
}
