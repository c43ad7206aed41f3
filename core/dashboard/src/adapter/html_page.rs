//! メモリ上の HTML ページ（RenderTarget 実装）
//!
//! 領域ごとの中身と各グループの active 要素を保持し、to_document で
//! サイドバー・3 セクション・詳細パネル・フッターを持つ 1 枚の HTML に組み立てる。

use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use crate::domain::escape::escape_html;
use crate::domain::{DetailTab, Section};
use crate::ports::outbound::{Group, PageTarget, Region, RenderTarget};

const PAGE_TITLE: &str = "Agent Dashboard";

const PAGE_CSS: &str = "*{box-sizing:border-box;margin:0;padding:0;}\
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#0f1117;color:#e4e4e7;display:flex;min-height:100vh;}\
.sidebar{width:220px;background:#161a23;border-right:1px solid #262b36;padding:20px 12px;}\
.sidebar h1{font-size:16px;margin-bottom:16px;}\
.sidebar nav a{display:block;padding:8px 10px;border-radius:6px;color:#a1a1aa;text-decoration:none;}\
.sidebar nav a.active{background:#262b36;color:#f4f4f5;}\
.main{flex:1;display:flex;flex-direction:column;}\
.content{flex:1;padding:24px;}\
.section{display:none;}\
.section.active{display:block;}\
.section h2{font-size:20px;margin-bottom:16px;}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(280px,1fr));gap:16px;}\
.card{background:#161a23;border:1px solid #262b36;border-radius:10px;padding:16px;}\
.card-header{display:flex;gap:12px;align-items:center;margin-bottom:12px;}\
.card-emoji{font-size:28px;}\
.card-title{font-weight:600;}\
.card-subtitle{font-size:12px;color:#a1a1aa;}\
.badge{background:#262b36;border-radius:4px;padding:1px 6px;font-size:11px;}\
.badge-green{background:#14532d;color:#bbf7d0;}\
.meta-grid{display:grid;grid-template-columns:auto 1fr;gap:4px 12px;font-size:13px;}\
.meta-label{color:#71717a;}\
.detail-panel{display:none;margin-top:24px;background:#161a23;border:1px solid #262b36;border-radius:10px;padding:16px;}\
.detail-panel.active{display:block;}\
.tab-bar{display:flex;gap:8px;margin:12px 0;}\
.tab-bar button{background:none;border:1px solid #262b36;border-radius:6px;color:#a1a1aa;padding:4px 10px;}\
.tab-bar button.active{background:#262b36;color:#f4f4f5;}\
.md-content h1,.md-content h2,.md-content h3{margin:0.75em 0 0.4em;}\
.md-content ul{padding-left:1.5em;}\
.md-content code{background:#262b36;padding:0.1em 0.35em;border-radius:4px;}\
.memory-item{border-left:3px solid #3b82f6;padding:6px 12px;margin-bottom:10px;}\
.memory-date{font-size:12px;color:#71717a;}\
.memory-content{white-space:pre-wrap;}\
.project-row{display:grid;grid-template-columns:32px 1fr auto auto;gap:12px;padding:8px 0;border-bottom:1px solid #262b36;}\
.empty-state{color:#71717a;}\
footer{padding:12px 24px;font-size:12px;color:#71717a;border-top:1px solid #262b36;}";

/// 組み立て中の HTML ページ
#[derive(Debug, Clone, Default)]
pub struct HtmlPage {
    regions: HashMap<Region, String>,
    active: HashMap<Group, String>,
    revealed: HashSet<Region>,
    scrolls: Vec<Region>,
}

impl HtmlPage {
    /// 領域の現在の中身（HTML）
    pub fn html(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// グループ内で active な要素のキー
    pub fn active(&self, group: Group) -> Option<&str> {
        self.active.get(&group).map(String::as_str)
    }

    pub fn is_revealed(&self, region: Region) -> bool {
        self.revealed.contains(&region)
    }

    /// scroll_into_view が呼ばれた回数
    pub fn scroll_count(&self, region: Region) -> usize {
        self.scrolls.iter().filter(|r| **r == region).count()
    }

    fn region(&self, region: Region) -> &str {
        self.html(region).unwrap_or("")
    }

    fn active_class(&self, group: Group, key: &str) -> &'static str {
        if self.active(group) == Some(key) {
            " active"
        } else {
            ""
        }
    }

    fn write_sidebar(&self, out: &mut String) {
        let _ = write!(
            out,
            "<aside class=\"sidebar\">\n<h1>🤖 {}</h1>\n<nav>\n",
            PAGE_TITLE
        );
        for section in Section::ALL {
            let active = self.active_class(Group::NavLinks, section.key());
            let _ = writeln!(
                out,
                "<a href=\"#{key}\" data-section=\"{key}\" class=\"nav-link{active}\">{label}</a>",
                key = section.key(),
                active = active,
                label = section.label(),
            );
        }
        out.push_str("</nav>\n</aside>\n");
    }

    fn write_sections(&self, out: &mut String) {
        for section in Section::ALL {
            let _ = writeln!(
                out,
                "<section id=\"{key}\" class=\"section{active}\">\n<h2>{label}</h2>",
                key = section.key(),
                active = self.active_class(Group::Sections, section.key()),
                label = section.label(),
            );
            match section {
                Section::Agents => self.write_agents_body(out),
                Section::Projects => {
                    let _ = writeln!(
                        out,
                        "<div id=\"project-list\">{}</div>",
                        self.region(Region::ProjectList)
                    );
                }
                Section::Logs => {
                    let _ = writeln!(
                        out,
                        "<div id=\"logs-content\">{}</div>",
                        self.region(Region::LogsContent)
                    );
                }
            }
            out.push_str("</section>\n");
        }
    }

    fn write_agents_body(&self, out: &mut String) {
        let _ = writeln!(
            out,
            "<div id=\"agent-grid\" class=\"grid\">{}</div>",
            self.region(Region::AgentGrid)
        );
        let panel_active = if self.is_revealed(Region::DetailPanel) {
            " active"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<div id=\"agent-detail\" class=\"detail-panel{}\">\n<h3>{}</h3>\n<div class=\"tab-bar\">",
            panel_active,
            self.region(Region::DetailTitle)
        );
        for tab in DetailTab::ALL {
            let _ = writeln!(
                out,
                "<button data-tab=\"{key}\" class=\"tab{active}\">{label}</button>",
                key = tab.key(),
                active = self.active_class(Group::DetailTabs, tab.key()),
                label = tab.label(),
            );
        }
        let _ = writeln!(
            out,
            "</div>\n<div id=\"detail-content\">{}</div>\n</div>",
            self.region(Region::DetailContent)
        );
    }
}

impl RenderTarget for HtmlPage {
    fn replace_html(&mut self, region: Region, html: &str) {
        self.regions.insert(region, html.to_string());
    }

    fn set_text(&mut self, region: Region, text: &str) {
        self.regions.insert(region, escape_html(text));
    }

    fn set_active(&mut self, group: Group, key: &str) {
        self.active.insert(group, key.to_string());
    }

    fn reveal(&mut self, region: Region) {
        self.revealed.insert(region);
    }

    fn scroll_into_view(&mut self, region: Region) {
        self.scrolls.push(region);
    }
}

impl PageTarget for HtmlPage {
    fn to_document(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>{}</title>\n<style>{}</style>\n</head>\n",
            PAGE_TITLE, PAGE_CSS
        );
        // 詳細パネルへのスクロール要求は body の属性として残す
        if self.scroll_count(Region::DetailPanel) > 0 {
            out.push_str("<body data-scroll-to=\"agent-detail\">\n");
        } else {
            out.push_str("<body>\n");
        }
        self.write_sidebar(&mut out);
        out.push_str("<div class=\"main\">\n<main class=\"content\">\n");
        match self.html(Region::Content) {
            // 読み込み失敗: 表示領域全体を置き換え、セクションは出さない
            Some(content) => {
                out.push_str(content);
                out.push('\n');
            }
            None => self.write_sections(&mut out),
        }
        let _ = write!(
            out,
            "</main>\n<footer>Built at <span id=\"built-at\">{}</span></footer>\n</div>\n</body>\n</html>\n",
            self.region(Region::BuiltAt)
        );
        out
    }
}
