//! 사다리 표 출력 기능.

use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize};
use madi_core::{LadderTable, TableRow, Zone};

use super::{compute_table, EMPTY_PRICE_NOTICE};

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Invalid format: {}. Use: table, json", s)),
        }
    }
}

/// 표 출력 설정.
#[derive(Debug)]
pub struct TableConfig {
    /// 시가 입력
    pub price: String,
    /// 출력 형식
    pub format: OutputFormat,
    /// 구간 배경색 사용 여부
    pub color: bool,
}

/// 사다리 표를 stdout에 출력합니다.
pub fn print_table(config: &TableConfig) -> Result<()> {
    let Some(table) = compute_table(&config.price)? else {
        println!("{}", EMPTY_PRICE_NOTICE);
        return Ok(());
    };

    println!("{}", render(&table, config.format, config.color)?);
    Ok(())
}

/// 표를 지정한 형식의 문자열로 변환합니다.
pub fn render(table: &LadderTable, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(table, color)),
        OutputFormat::Json => format_json(table),
    }
}

/// 테이블 형식 출력.
fn format_table(table: &LadderTable, color: bool) -> String {
    let mut output = String::new();

    let [label, price, step] = table.headers();
    output.push_str(&format!(
        "{} {} {}\n",
        pad(label, 10),
        pad(price, 12),
        pad(step, 10)
    ));
    output.push_str(&"-".repeat(34));
    output.push('\n');

    for row in &table.rows {
        let line = format_row(row);
        if color {
            output.push_str(&tint(&line, row.zone));
        } else {
            output.push_str(&line);
        }
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format!("시가: {}", table.opening_price));
    output
}

fn format_row(row: &TableRow) -> String {
    let [label, price, step] = row.cells();
    format!("{} {:>12} {:>10}", pad(&label, 10), price, step)
}

/// 구간 색상을 배경으로 적용합니다.
fn tint(line: &str, zone: Zone) -> String {
    let (r, g, b) = zone.tint_rgb();
    line.with(Color::Black)
        .on(Color::Rgb { r, g, b })
        .to_string()
}

/// 한글은 두 칸으로 계산해 오른쪽 정렬합니다.
fn pad(s: &str, width: usize) -> String {
    let display_width: usize = s
        .chars()
        .map(|c| if c.is_ascii() { 1 } else { 2 })
        .sum();
    format!("{}{}", " ".repeat(width.saturating_sub(display_width)), s)
}

/// JSON 형식 출력.
fn format_json(table: &LadderTable) -> Result<String> {
    serde_json::to_string_pretty(table).context("Failed to serialize to JSON")
}
