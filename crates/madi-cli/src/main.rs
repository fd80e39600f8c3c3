//! 마디 계산기 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 시가 100.00 기준 색상 표
//! madi table -p 100
//!
//! # JSON 출력
//! madi table -p 4321.5 -f json
//!
//! # 엑셀 파일 저장 (기본: 마디_계산.xlsx)
//! madi export -p 100 -o ladder.xlsx
//!
//! # 표준 마디 간격 보기
//! madi steps
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use madi_core::{init_logging, AppConfig, LogConfig};
use tracing::info;

use madi_cli::commands::export::{export_workbook, ExportCommandConfig};
use madi_cli::commands::steps::print_steps;
use madi_cli::commands::table::{print_table, OutputFormat, TableConfig};
use madi_cli::commands::EMPTY_PRICE_NOTICE;

#[derive(Parser)]
#[command(name = "madi")]
#[command(about = "해외선물 마디 계산기 - 시가 기준 위아래 24마디 계산", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 사다리 표 출력
    Table {
        /// 시가 (0이면 계산하지 않음)
        #[arg(short, long)]
        price: String,

        /// 출력 형식 (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// 구간 배경색 끄기
        #[arg(long, default_value = "false")]
        no_color: bool,
    },

    /// 엑셀(.xlsx) 파일로 저장
    Export {
        /// 시가 (0이면 저장하지 않음)
        #[arg(short, long)]
        price: String,

        /// 출력 파일 경로 (기본: 설정의 file_stem + .xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 표준 마디 간격 보기
    Steps,
}

fn main() -> anyhow::Result<()> {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config: {}", cli.config.display()))?;
    init_logging(LogConfig::from_settings(&config.logging).with_env_overrides())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    match cli.command {
        Commands::Table {
            price,
            format,
            no_color,
        } => {
            let config = TableConfig {
                price,
                format: OutputFormat::parse(&format)?,
                color: !no_color,
            };
            print_table(&config)?;
        }

        Commands::Export { price, output } => {
            let command = ExportCommandConfig { price, output };
            match export_workbook(&command, &config.export)? {
                Some(summary) => {
                    info!("✅ Workbook saved");
                    println!("\n엑셀 저장 완료: {} bytes", summary.bytes);
                    println!("저장 위치: {}", summary.path.display());
                }
                None => println!("{}", EMPTY_PRICE_NOTICE),
            }
        }

        Commands::Steps => print_steps(),
    }

    Ok(())
}
