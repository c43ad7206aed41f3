//! 最小限の Markdown → HTML 変換
//!
//! 構文木は作らず、置換パスを順番に適用する。各パスは前のパスの出力に対して動く。
//! そのため見出し・太字・コードはリスト項目の中でも変換される（ブロック種別の境界はない）。

use regex::{Captures, Regex};
use std::sync::OnceLock;

use super::escape::escape_html;

/// 本文が空のときに返す固定の断片
pub const EMPTY_MARKDOWN: &str = r#"<p class="empty-state">No content available</p>"#;

struct Passes {
    h3: Regex,
    h2: Regex,
    h1: Regex,
    bold: Regex,
    code: Regex,
    list_item: Regex,
    list_run: Regex,
}

fn passes() -> &'static Passes {
    static PASSES: OnceLock<Passes> = OnceLock::new();
    PASSES.get_or_init(|| {
        let re = |pattern: &str| Regex::new(pattern).expect("markdown pattern must compile");
        Passes {
            h3: re(r"(?mR)^### (.+)$"),
            h2: re(r"(?mR)^## (.+)$"),
            h1: re(r"(?mR)^# (.+)$"),
            bold: re(r"\*\*(.+?)\*\*"),
            code: re(r"`([^`]+)`"),
            list_item: re(r"(?mR)^- (.+)$"),
            // 改行 1 つ（CRLF 可、または <br>）だけで隣り合う <li> の連なり
            list_run: re(r"<li>.*?</li>(?:(?:\r?\n|<br>)<li>.*?</li>)*"),
        }
    })
}

/// Markdown の部分集合を HTML 断片に変換する。
///
/// 対応するのは見出し（`#` `##` `###`）、`**太字**`、`` `コード` ``、`- ` リスト、
/// 空行による段落区切りと改行のみ。入力は最初にエスケープされる。
pub fn render_markdown(text: Option<&str>) -> String {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return EMPTY_MARKDOWN.to_string(),
    };
    let p = passes();

    let html = escape_html(text);
    let html = p.h3.replace_all(&html, "<h3>${1}</h3>");
    let html = p.h2.replace_all(&html, "<h2>${1}</h2>");
    let html = p.h1.replace_all(&html, "<h1>${1}</h1>");
    let html = p.bold.replace_all(&html, "<strong>${1}</strong>");
    let html = p.code.replace_all(&html, "<code>${1}</code>");
    let html = p.list_item.replace_all(&html, "<li>${1}</li>");
    let html = p.list_run.replace_all(&html, |caps: &Captures| {
        let items = caps[0].replace(|c: char| c == '\r' || c == '\n', "").replace("<br>", "");
        format!("<ul>{}</ul>", items)
    });
    html.replace("\n\n", "</p><p>").replace('\n', "<br>")
}
