use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
    /// 单个请求的处理超时（秒）
    pub request_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            request_timeout: 30,
        }
    }
}

/// Edamam recipe search API configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EdamamConfig {
    /// Recipe search endpoint
    pub base_url: String,
    pub app_id: Option<String>,
    pub app_key: Option<String>,
    /// Value of the `Edamam-Account-User` header
    pub account_user: Option<String>,
    /// Outbound request timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for EdamamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.edamam.com/api/recipes/v2".into(),
            app_id: None,
            app_key: None,
            account_user: None,
            timeout_secs: 15,
        }
    }
}

impl EdamamConfig {
    /// Returns the credentials only when all three values are present and not blank.
    pub fn credentials(&self) -> Option<EdamamCredentials> {
        fn present(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }

        Some(EdamamCredentials {
            app_id: present(&self.app_id)?,
            app_key: present(&self.app_key)?,
            account_user: present(&self.account_user)?,
        })
    }
}

impl fmt::Debug for EdamamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdamamConfig")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("app_key", &self.app_key.as_ref().map(|_| "***"))
            .field("account_user", &self.account_user)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Credentials sent with every Edamam request.
#[derive(Clone, PartialEq, Eq)]
pub struct EdamamCredentials {
    pub app_id: String,
    pub app_key: String,
    pub account_user: String,
}

impl fmt::Debug for EdamamCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdamamCredentials")
            .field("app_id", &self.app_id)
            .field("app_key", &"***")
            .field("account_user", &self.account_user)
            .finish()
    }
}

/// 翻译服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// Base URL of the translate service
    pub base_url: String,
    /// 请求超时（秒）
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            base_url: "https://translate.googleapis.com".into(),
            timeout_secs: 10,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
    /// 日志文件路径
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            structured: false,
            log_dir: None,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// Edamam 配置
    pub edamam: EdamamConfig,
    /// 翻译服务配置
    pub translation: TranslationConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        let mut config = Self::default();
        config.server.host = "127.0.0.1".into();
        config.logging.level = "debug".into();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edamam(app_id: Option<&str>, app_key: Option<&str>, user: Option<&str>) -> EdamamConfig {
        EdamamConfig {
            app_id: app_id.map(str::to_string),
            app_key: app_key.map(str::to_string),
            account_user: user.map(str::to_string),
            ..EdamamConfig::default()
        }
    }

    #[test]
    fn test_credentials_require_all_three_values() {
        assert!(edamam(Some("id"), Some("key"), Some("user")).credentials().is_some());
        assert!(edamam(None, Some("key"), Some("user")).credentials().is_none());
        assert!(edamam(Some("id"), None, Some("user")).credentials().is_none());
        assert!(edamam(Some("id"), Some("key"), None).credentials().is_none());
    }

    #[test]
    fn test_blank_credentials_count_as_missing() {
        assert!(edamam(Some("id"), Some("  "), Some("user")).credentials().is_none());
    }

    #[test]
    fn test_debug_output_redacts_app_key() {
        let config = edamam(Some("id"), Some("super-secret"), Some("user"));
        let credentials = config.credentials().unwrap();

        assert!(!format!("{:?}", config).contains("super-secret"));
        assert!(!format!("{:?}", credentials).contains("super-secret"));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.request_timeout, 30);
        assert_eq!(config.edamam.base_url, "https://api.edamam.com/api/recipes/v2");
        assert!(config.edamam.credentials().is_none());
    }
}
