//! 엑셀 파일 저장 기능.

use std::path::PathBuf;

use anyhow::{Context, Result};
use madi_core::ExportConfig;
use madi_export::XlsxExporter;
use tracing::info;

use super::compute_table;

/// 내보내기 설정.
#[derive(Debug)]
pub struct ExportCommandConfig {
    /// 시가 입력
    pub price: String,
    /// 출력 파일 경로 (기본: `<file_stem>.xlsx`)
    pub output: Option<PathBuf>,
}

/// 저장 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// 저장 경로
    pub path: PathBuf,
    /// 파일 크기(바이트)
    pub bytes: usize,
}

/// 사다리 표를 .xlsx 파일로 저장합니다.
///
/// 시가가 0이거나 비어 있으면 파일을 만들지 않고 `Ok(None)`.
pub fn export_workbook(
    config: &ExportCommandConfig,
    settings: &ExportConfig,
) -> Result<Option<ExportSummary>> {
    let Some(table) = compute_table(&config.price)? else {
        return Ok(None);
    };

    let exporter = XlsxExporter::from_config(settings);
    let path = config
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(exporter.file_name()));

    let bytes = exporter
        .export_to_path(&table, &path)
        .with_context(|| format!("Failed to write workbook: {}", path.display()))?;

    info!(path = %path.display(), bytes, "Export complete");
    Ok(Some(ExportSummary { path, bytes }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("madi-{}-{}.xlsx", name, std::process::id()))
    }

    #[test]
    fn test_export_writes_file() {
        let path = temp_path("unit");
        let config = ExportCommandConfig {
            price: "100".to_string(),
            output: Some(path.clone()),
        };

        let summary = export_workbook(&config, &ExportConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(summary.path, path);

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), summary.bytes);
        assert!(bytes.starts_with(b"PK"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_zero_price_writes_nothing() {
        let path = temp_path("zero");
        let config = ExportCommandConfig {
            price: "0".to_string(),
            output: Some(path.clone()),
        };

        assert!(export_workbook(&config, &ExportConfig::default())
            .unwrap()
            .is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_directory_is_error() {
        let config = ExportCommandConfig {
            price: "100".to_string(),
            output: Some(std::env::temp_dir().join("madi-no-such-dir").join("out.xlsx")),
        };
        let err = export_workbook(&config, &ExportConfig::default()).unwrap_err();
        assert!(err.to_string().contains("out.xlsx"));
    }
}
