//! ビューモデル → HTML 断片の純粋関数群
//!
//! 差し込むフィールドはすべて escape_html を通す（絵文字も含む）。
//! 空のコレクションは空のコンテナではなく固定の案内文を返す。

use std::fmt::Write;

use super::escape::escape_html as esc;
use super::markdown::render_markdown;
use super::model::{Agent, AgentStatus, MemoryEntry};
use super::navigation::DetailTab;
use super::view_model::ViewModel;

pub const NO_AGENTS: &str = r#"<p class="empty-state">No agents found</p>"#;
pub const NO_MEMORY: &str = r#"<p class="empty-state">No memory entries yet</p>"#;
pub const NO_PROJECTS: &str = r#"<p class="empty-state">No projects found</p>"#;
pub const NO_LOGS: &str = r#"<p class="empty-state">No log entries yet. Agents will generate memory files as they work.</p>"#;

/// エージェントカード 1 枚
pub fn render_agent_card(agent: &Agent, status: Option<&AgentStatus>) -> String {
    let subagents = if agent.subagents.is_empty() {
        "none"
    } else {
        agent.subagents.as_str()
    };
    let memory_count = status.map(|s| s.recent_memory.len()).unwrap_or(0);
    format!(
        r#"<div class="card" data-agent="{id}" style="cursor:pointer">
  <div class="card-header">
    <div class="card-emoji">{emoji}</div>
    <div>
      <div class="card-title">{name}</div>
      <div class="card-subtitle">{id} · <span class="badge">{model}</span></div>
    </div>
  </div>
  <div class="card-body">
    <div class="meta-grid">
      <span class="meta-label">Workspace</span>
      <span class="meta-value" style="font-size:11px;word-break:break-all">{workspace}</span>
      <span class="meta-label">Subagents</span>
      <span class="meta-value">{subagents}</span>
      <span class="meta-label">Memory</span>
      <span class="meta-value">{memory_count} entries</span>
    </div>
  </div>
</div>
"#,
        id = esc(&agent.id),
        emoji = esc(&agent.emoji),
        name = esc(&agent.name),
        model = esc(&agent.model),
        workspace = esc(&agent.workspace),
        subagents = esc(subagents),
        memory_count = memory_count,
    )
}

/// カードグリッド（エージェント順）
pub fn render_agent_grid(vm: &ViewModel) -> String {
    if vm.agents().is_empty() {
        return NO_AGENTS.to_string();
    }
    vm.agents()
        .iter()
        .map(|a| render_agent_card(a, vm.status(&a.id)))
        .collect()
}

/// 詳細パネルの見出し（テキストとして設定する想定なので未エスケープ）
pub fn detail_title(agent: &Agent) -> String {
    format!("{} {}", agent.emoji, agent.name)
}

/// 詳細パネルのタブ内容
pub fn render_detail_tab(agent: &Agent, status: Option<&AgentStatus>, tab: DetailTab) -> String {
    match tab {
        DetailTab::AgentsMd => md_content(&agent.agents_md),
        DetailTab::SoulMd => md_content(&agent.soul_md),
        DetailTab::Memory => {
            let entries = status.map(|s| s.recent_memory.as_slice()).unwrap_or(&[]);
            render_memory_entries(entries)
        }
    }
}

fn md_content(text: &str) -> String {
    format!(
        r#"<div class="md-content">{}</div>"#,
        render_markdown(Some(text))
    )
}

fn render_memory_entries(entries: &[MemoryEntry]) -> String {
    if entries.is_empty() {
        return NO_MEMORY.to_string();
    }
    let mut out = String::new();
    for m in entries {
        memory_item(&mut out, &esc(&m.date), &m.content);
    }
    out
}

fn memory_item(out: &mut String, escaped_header: &str, content: &str) {
    let _ = write!(
        out,
        r#"<div class="memory-item">
  <div class="memory-date">{}</div>
  <div class="memory-content">{}</div>
</div>
"#,
        escaped_header,
        esc(content)
    );
}

/// プロジェクト行の一覧。未知のエージェントはフォールバックアイコンで描く。
pub fn render_project_list(vm: &ViewModel) -> String {
    if vm.projects().is_empty() {
        return NO_PROJECTS.to_string();
    }
    let mut out = String::new();
    for p in vm.projects() {
        let _ = write!(
            out,
            r#"<div class="project-row">
  <span>{icon}</span>
  <span class="project-name">{name}</span>
  <span class="project-agent"><span class="badge badge-green">{agent}</span></span>
  <span class="project-files">{files} files</span>
</div>
"#,
            icon = esc(vm.emoji_for(&p.agent)),
            name = esc(&p.name),
            agent = esc(&p.agent),
            files = p.file_count,
        );
    }
    out
}

/// 全エージェント横断のログ一覧（日付の降順）
pub fn render_log_list(vm: &ViewModel) -> String {
    if vm.logs().is_empty() {
        return NO_LOGS.to_string();
    }
    let mut out = String::new();
    for entry in vm.logs() {
        let header = format!(
            "{} {} · {}",
            esc(&entry.emoji),
            esc(&entry.agent),
            esc(&entry.date)
        );
        memory_item(&mut out, &header, &entry.content);
    }
    out
}

/// 読み込み失敗時に表示領域全体を置き換える断片
pub fn render_load_error(message: &str) -> String {
    format!(
        r#"<div class="empty-state" style="padding:2rem;color:#e74c3c;">⚠️ Failed to load dashboard data: {}</div>"#,
        esc(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Documents, Project};
    use crate::domain::view_model::FALLBACK_ICON;

    fn sample_agent() -> Agent {
        Agent {
            id: "main".to_string(),
            name: "Main <Agent>".to_string(),
            emoji: "🤖".to_string(),
            model: "opus".to_string(),
            workspace: "/ws/main".to_string(),
            subagents: String::new(),
            agents_md: "# Profile\n- **fast**".to_string(),
            soul_md: String::new(),
        }
    }

    fn sample_status() -> AgentStatus {
        AgentStatus {
            id: "main".to_string(),
            built_at: "2024-01-01".to_string(),
            recent_memory: vec![
                MemoryEntry {
                    date: "2024-01-02".to_string(),
                    content: "fixed <bug>".to_string(),
                },
                MemoryEntry {
                    date: "2024-01-01".to_string(),
                    content: "started".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_agent_card_escapes_and_defaults() {
        let html = render_agent_card(&sample_agent(), None);
        assert!(html.contains(r#"data-agent="main""#));
        assert!(html.contains("Main &lt;Agent&gt;"));
        assert!(!html.contains("<Agent>"));
        assert!(html.contains(r#"<span class="meta-value">none</span>"#));
        assert!(html.contains("0 entries"));

        let html = render_agent_card(&sample_agent(), Some(&sample_status()));
        assert!(html.contains("2 entries"));
    }

    #[test]
    fn test_detail_tabs() {
        let agent = sample_agent();
        let status = sample_status();

        let html = render_detail_tab(&agent, Some(&status), DetailTab::AgentsMd);
        assert_eq!(
            html,
            r#"<div class="md-content"><h1>Profile</h1><br><ul><li><strong>fast</strong></li></ul></div>"#
        );

        let html = render_detail_tab(&agent, Some(&status), DetailTab::SoulMd);
        assert!(html.contains("No content available"));

        let html = render_detail_tab(&agent, Some(&status), DetailTab::Memory);
        assert_eq!(html.matches(r#"class="memory-item""#).count(), 2);
        assert!(html.contains("fixed &lt;bug&gt;"));

        let html = render_detail_tab(&agent, None, DetailTab::Memory);
        assert_eq!(html, NO_MEMORY);
    }

    #[test]
    fn test_project_with_unknown_agent_uses_fallback_icon() {
        let vm = ViewModel::build(Documents {
            agents: vec![sample_agent()],
            status: vec![],
            projects: vec![Project {
                name: "orphan".to_string(),
                agent: "ghost".to_string(),
                file_count: 7.0,
            }],
        });
        let html = render_project_list(&vm);
        assert!(html.contains("<span>📁</span>"));
        assert!(html.contains("7 files"));
        assert!(html.contains(r#"badge-green">ghost</span>"#));
        assert_eq!(vm.emoji_for("ghost"), FALLBACK_ICON);
        assert_eq!(vm.emoji_for("main"), "🤖");
    }

    #[test]
    fn test_empty_collections_render_placeholders() {
        let vm = ViewModel::build(Documents::default());
        assert_eq!(render_agent_grid(&vm), NO_AGENTS);
        assert_eq!(render_project_list(&vm), NO_PROJECTS);
        assert_eq!(render_log_list(&vm), NO_LOGS);
    }

    #[test]
    fn test_log_list_header() {
        let vm = ViewModel::build(Documents {
            agents: vec![sample_agent()],
            status: vec![sample_status()],
            projects: vec![],
        });
        let html = render_log_list(&vm);
        assert!(html.contains("🤖 main · 2024-01-02"));
        let first = html.find("2024-01-02").unwrap();
        let second = html.find("2024-01-01").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_load_error_is_escaped() {
        let html = render_load_error("projects.json: <404>");
        assert!(html.contains("Failed to load dashboard data: projects.json: &lt;404&gt;"));
    }

    #[test]
    fn test_detail_title() {
        assert_eq!(detail_title(&sample_agent()), "🤖 Main <Agent>");
    }
}
