//! HTML 埋め込み用のエスケープ

/// `&` `<` `>` `"` を実体参照に置き換える。
///
/// `&` を最初に置き換えるので、後段で生成した実体参照を二重に壊さない。
/// デコードはしない（エスケープ済みの文字列をもう一度通すと `&` がさらにエスケープされる）。
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
