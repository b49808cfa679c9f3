//! # Pure Data Module / 纯数据模块
//!
//! Configuration DTO for the RSVP host. TOML → DTO mapping only.
//!
//! > **This module contains data only, no policy, no validation.**
//! > **此模块只包含数据结构定义，禁止业务逻辑、验证逻辑、默认值计算。**
//!
//! Filling in zero values is the host's job (see the bootstrap config loader).

use std::path::PathBuf;

/// Flow configuration DTO (pure data, no logic)
/// 流程配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    /// Form endpoint URL (may be empty - this is a fact, not an error)
    /// 表单提交地址（可能为空 - 这是事实，不是错误）
    pub endpoint_url: String,

    /// Request timeout in seconds, 0 when not configured
    pub request_timeout_secs: u64,

    /// Fade delay before a step change commits, 0 when not configured
    pub fade_delay_ms: u64,

    /// Preference file path (path info only, no existence check)
    /// 偏好文件路径（仅路径信息，不检查文件是否存在）
    pub preferences_path: PathBuf,

    /// Locale override; empty means "ask the environment"
    pub locale_override: String,
}

impl FlowConfig {
    /// Create FlowConfig from TOML value
    /// 从 TOML 值创建 FlowConfig
    ///
    /// Missing keys become empty strings / zero, which are valid facts.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let int_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64
        };

        Ok(Self {
            endpoint_url: str_at("submission", "endpoint_url"),
            request_timeout_secs: int_at("submission", "request_timeout_secs"),
            fade_delay_ms: int_at("flow", "fade_delay_ms"),
            preferences_path: PathBuf::from(str_at("storage", "preferences_path")),
            locale_override: str_at("locale", "override"),
        })
    }

    /// Create empty FlowConfig (all empty/zero values)
    /// 创建空的 FlowConfig（所有字段为空/零值）
    pub fn empty() -> Self {
        Self {
            endpoint_url: String::new(),
            request_timeout_secs: 0,
            fade_delay_ms: 0,
            preferences_path: PathBuf::new(),
            locale_override: String::new(),
        }
    }

    /// Create FlowConfig with paths under `data_dir`
    /// 生产环境使用：从提供的基础目录构建路径
    ///
    /// The base directory is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            preferences_path: data_dir.join("preferences.json"),
            ..Self::empty()
        }
    }
}
