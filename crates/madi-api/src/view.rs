//! HTML 렌더링.
//!
//! 외부 템플릿 없이 한 장짜리 페이지를 문자열로 조립합니다.
//! 행 번호 열은 표시하지 않습니다.

use madi_core::{LadderTable, UiConfig, Zone};

/// 페이지에 표시할 계산 결과.
#[derive(Debug, Clone)]
pub enum PageOutcome {
    /// 시가 입력 전 (또는 0)
    Empty {
        /// 입력 칸에 되돌려 줄 값
        input: String,
    },
    /// 계산된 표
    Table {
        /// 사다리 표
        table: LadderTable,
        /// 다운로드 링크
        download_href: String,
        /// 다운로드 파일 이름
        file_name: String,
    },
    /// 입력 오류 또는 불변식 위반. 이번 요청만 중단합니다.
    Error {
        /// 입력 칸에 되돌려 줄 값
        input: String,
        /// 사용자에게 보여줄 메시지
        message: String,
    },
}

/// 전체 페이지를 렌더링합니다.
pub fn render_page(ui: &UiConfig, outcome: &PageOutcome) -> String {
    let input = match outcome {
        PageOutcome::Empty { input } | PageOutcome::Error { input, .. } => input.clone(),
        PageOutcome::Table { table, .. } => table.opening_price.to_string(),
    };

    let body = match outcome {
        PageOutcome::Empty { .. } => String::new(),
        PageOutcome::Table {
            table,
            download_href,
            file_name,
        } => format!(
            "{table}\n{download}",
            table = render_table(table),
            download = render_download(download_href, file_name),
        ),
        PageOutcome::Error { message, .. } => render_error(message),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <h1>📈 {title}</h1>
        <p>📌 {description}</p>
        {form}
        {body}
    </div>
</body>
</html>"#,
        title = html_escape(&ui.title),
        description = html_escape(&ui.description),
        css = inline_css(),
        form = render_form(&input),
        body = body,
    )
}

fn render_form(input: &str) -> String {
    format!(
        r#"<form method="get" action="/">
            <label for="price">💰 시가 입력</label>
            <input id="price" name="price" type="number" min="0" step="0.01" value="{value}">
            <button type="submit">계산</button>
        </form>"#,
        value = html_escape(input),
    )
}

/// 구간별 배경색이 적용된 표를 렌더링합니다.
pub fn render_table(table: &LadderTable) -> String {
    let headers: String = table
        .headers()
        .iter()
        .map(|h| format!("<th>{}</th>", html_escape(h)))
        .collect();

    let rows: String = table
        .rows
        .iter()
        .map(|row| {
            let [label, price, step] = row.cells();
            format!(
                r#"<tr class="{class}" style="background-color: {tint}"><td>{label}</td><td>{price}</td><td>{step}</td></tr>"#,
                class = zone_class(row.zone),
                tint = row.zone.tint(),
                label = html_escape(&label),
                price = html_escape(&price),
                step = html_escape(&step),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<table class="ladder">
<thead><tr>{headers}</tr></thead>
<tbody>
{rows}
</tbody>
</table>"#
    )
}

fn render_download(href: &str, file_name: &str) -> String {
    format!(
        r#"<p><a class="download" href="{href}" download="{name}">📥 엑셀 다운로드</a></p>"#,
        href = html_escape(href),
        name = html_escape(file_name),
    )
}

fn render_error(message: &str) -> String {
    format!(
        r#"<div class="error" role="alert">⚠️ {}</div>"#,
        html_escape(message)
    )
}

fn zone_class(zone: Zone) -> &'static str {
    match zone {
        Zone::Upper => "zone-upper",
        Zone::Opening => "zone-opening",
        Zone::Lower => "zone-lower",
    }
}

fn inline_css() -> &'static str {
    r#"
        body { font-family: -apple-system, "Malgun Gothic", sans-serif; margin: 2rem; }
        .container { max-width: 640px; margin: 0 auto; }
        form { margin-bottom: 1.5rem; }
        input { padding: 0.3rem; width: 10rem; }
        table.ladder { border-collapse: collapse; width: 100%; }
        table.ladder th, table.ladder td { border: 1px solid #ccc; padding: 0.25rem 0.75rem; text-align: right; }
        table.ladder th { background: #f4f4f4; text-align: center; }
        .error { background: #fdecea; border: 1px solid #f5c2c0; color: #b3261e; padding: 0.75rem; }
        a.download { display: inline-block; margin-top: 1rem; }
    "#
}

/// HTML 특수 문자를 이스케이프합니다.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
