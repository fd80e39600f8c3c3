//! 설정 관리.
//!
//! 서버, 로깅, 내보내기, 화면 문구 설정을 정의합니다.
//! 마디 간격 테이블은 설정 대상이 아닙니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 엑셀 내보내기 설정
    #[serde(default)]
    pub export: ExportConfig,
    /// 화면 문구 설정
    #[serde(default)]
    pub ui: UiConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 엑셀 내보내기 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// 다운로드 파일 이름 (확장자 제외)
    pub file_stem: String,
    /// 시트 이름
    pub sheet_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_stem: "마디_계산".to_string(),
            sheet_name: "마디 계산".to_string(),
        }
    }
}

impl ExportConfig {
    /// `.xlsx` 확장자를 붙인 파일 이름.
    pub fn file_name(&self) -> String {
        format!("{}.xlsx", self.file_stem)
    }
}

/// 화면 문구 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// 페이지 제목
    pub title: String,
    /// 안내 문구
    pub description: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "해외선물 마디 계산기".to_string(),
            description: "시가를 입력하면 위로 24마디, 아래로 24마디를 자동 계산합니다."
                .to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수(`MADI__SERVER__PORT` 등)만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let defaults = AppConfig::default();
        let builder = config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default(
                "server.request_timeout_secs",
                defaults.server.request_timeout_secs as i64,
            )?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            .set_default("export.file_stem", defaults.export.file_stem)?
            .set_default("export.sheet_name", defaults.export.sheet_name)?
            .set_default("ui.title", defaults.ui.title)?
            .set_default("ui.description", defaults.ui.description)?
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("MADI")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로(`config/default.toml`)에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.export.file_name(), "마디_계산.xlsx");
        assert_eq!(config.export.sheet_name, "마디 계산");
        assert_eq!(config.ui.title, "해외선물 마디 계산기");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.export.file_stem, "마디_계산");
    }
}
