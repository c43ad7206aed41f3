//! ダッシュボードのコントローラ
//!
//! ビューモデル・ナビゲーション状態・描画先を 1 つの値として所有する。
//! 各操作は状態を更新してから、その結果を描画先へ反映して戻る。

use common::error::Error;

use crate::domain::render::{
    detail_title, render_agent_grid, render_detail_tab, render_load_error, render_log_list,
    render_project_list,
};
use crate::domain::{DetailTab, LoadError, NavState, Section, ViewModel};
use crate::ports::outbound::{Group, Region, RenderTarget};

pub struct Dashboard<T: RenderTarget> {
    view: ViewModel,
    nav: NavState,
    target: T,
}

impl<T: RenderTarget> Dashboard<T> {
    /// 一覧系（カード・プロジェクト・ログ・builtAt）を 1 回だけ描き、初期セクションを表示する
    pub fn mount(view: ViewModel, mut target: T) -> Self {
        target.replace_html(Region::AgentGrid, &render_agent_grid(&view));
        target.replace_html(Region::ProjectList, &render_project_list(&view));
        target.replace_html(Region::LogsContent, &render_log_list(&view));
        target.set_text(Region::BuiltAt, view.built_at());

        let mut dashboard = Self {
            view,
            nav: NavState::new(),
            target,
        };
        dashboard.show_section();
        dashboard
    }

    /// 読み込み失敗: 表示領域全体をエラー 1 件で置き換える。以後の描画はしない。
    pub fn fail(mut target: T, err: &LoadError) -> T {
        target.replace_html(Region::Content, &render_load_error(&err.to_string()));
        target
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// ナビゲーションのリンク選択。同じセクションなら何もしない。
    pub fn select_section(&mut self, section: Section) -> bool {
        if !self.nav.select_section(section) {
            return false;
        }
        self.show_section();
        true
    }

    /// カード選択: パネルを表示し、既定タブを描いてからスクロールする
    pub fn open_agent(&mut self, agent_id: &str) -> Result<(), Error> {
        let title = self
            .view
            .agent(agent_id)
            .map(detail_title)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown agent '{}'", agent_id)))?;

        self.nav.open(agent_id);
        self.target.reveal(Region::DetailPanel);
        self.target.set_text(Region::DetailTitle, &title);
        self.show_tab();
        self.target.scroll_into_view(Region::DetailPanel);
        Ok(())
    }

    /// 詳細タブの選択。詳細内容の領域だけを描き直す（スクロールしない）。
    pub fn select_tab(&mut self, tab: DetailTab) -> bool {
        if !self.nav.select_tab(tab) {
            return false;
        }
        self.show_tab();
        true
    }

    fn show_section(&mut self) {
        let key = self.nav.section().key();
        self.target.set_active(Group::NavLinks, key);
        self.target.set_active(Group::Sections, key);
    }

    fn show_tab(&mut self) {
        let Some(agent_id) = self.nav.open_agent() else {
            return;
        };
        let Some(agent) = self.view.agent(agent_id) else {
            return;
        };
        let tab = self.nav.detail_tab();
        let html = render_detail_tab(agent, self.view.status(agent_id), tab);
        self.target.set_active(Group::DetailTabs, tab.key());
        self.target.replace_html(Region::DetailContent, &html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Agent, AgentStatus, Documents, MemoryEntry};
    use std::collections::HashMap;

    /// 呼び出しを記録するだけの描画先
    #[derive(Default)]
    struct RecordingTarget {
        html: HashMap<Region, String>,
        text: HashMap<Region, String>,
        active: HashMap<Group, String>,
        revealed: Vec<Region>,
        scrolls: Vec<Region>,
        writes: Vec<Region>,
    }

    impl RenderTarget for RecordingTarget {
        fn replace_html(&mut self, region: Region, html: &str) {
            self.writes.push(region);
            self.html.insert(region, html.to_string());
        }
        fn set_text(&mut self, region: Region, text: &str) {
            self.writes.push(region);
            self.text.insert(region, text.to_string());
        }
        fn set_active(&mut self, group: Group, key: &str) {
            self.active.insert(group, key.to_string());
        }
        fn reveal(&mut self, region: Region) {
            self.revealed.push(region);
        }
        fn scroll_into_view(&mut self, region: Region) {
            self.scrolls.push(region);
        }
    }

    fn view() -> ViewModel {
        ViewModel::build(Documents {
            agents: vec![
                Agent {
                    id: "main".to_string(),
                    name: "Main".to_string(),
                    emoji: "🤖".to_string(),
                    agents_md: "# Main profile".to_string(),
                    soul_md: "calm".to_string(),
                    ..Default::default()
                },
                Agent {
                    id: "coder".to_string(),
                    name: "Coder".to_string(),
                    emoji: "🛠".to_string(),
                    agents_md: "# Coder profile".to_string(),
                    ..Default::default()
                },
            ],
            status: vec![AgentStatus {
                id: "main".to_string(),
                built_at: "2024-06-01".to_string(),
                recent_memory: vec![MemoryEntry {
                    date: "2024-05-31".to_string(),
                    content: "shipped".to_string(),
                }],
            }],
            projects: vec![],
        })
    }

    fn mounted() -> Dashboard<RecordingTarget> {
        Dashboard::mount(view(), RecordingTarget::default())
    }

    #[test]
    fn test_mount_renders_lists_and_defaults_to_agents() {
        let d = mounted();
        let t = d.target();
        assert!(t.html[&Region::AgentGrid].contains("data-agent=\"main\""));
        assert!(t.html[&Region::LogsContent].contains("shipped"));
        assert!(t.html[&Region::ProjectList].contains("No projects found"));
        assert_eq!(t.text[&Region::BuiltAt], "2024-06-01");
        assert_eq!(t.active[&Group::NavLinks], "agents");
        assert_eq!(t.active[&Group::Sections], "agents");
        assert!(t.revealed.is_empty());
        assert_eq!(d.nav().open_agent(), None);
    }

    #[test]
    fn test_select_section() {
        let mut d = mounted();
        assert!(d.select_section(Section::Logs));
        assert_eq!(d.target().active[&Group::Sections], "logs");
        assert_eq!(d.target().active[&Group::NavLinks], "logs");
        assert!(!d.select_section(Section::Logs));
    }

    #[test]
    fn test_open_agent_shows_default_tab_and_scrolls() {
        let mut d = mounted();
        d.open_agent("main").unwrap();
        let t = d.target();
        assert_eq!(t.revealed, vec![Region::DetailPanel]);
        assert_eq!(t.text[&Region::DetailTitle], "🤖 Main");
        assert_eq!(t.active[&Group::DetailTabs], "agents-md");
        assert!(t.html[&Region::DetailContent].contains("<h1>Main profile</h1>"));
        assert_eq!(t.scrolls, vec![Region::DetailPanel]);
    }

    #[test]
    fn test_open_always_resets_to_first_tab() {
        let mut d = mounted();
        d.open_agent("main").unwrap();
        assert!(d.select_tab(DetailTab::Memory));
        assert_eq!(d.target().active[&Group::DetailTabs], "memory");

        d.open_agent("coder").unwrap();
        assert_eq!(d.nav().detail_tab(), DetailTab::AgentsMd);
        assert_eq!(d.target().active[&Group::DetailTabs], "agents-md");
        assert!(d.target().html[&Region::DetailContent].contains("Coder profile"));
    }

    #[test]
    fn test_select_tab_rewrites_only_detail_content() {
        let mut d = mounted();
        d.open_agent("main").unwrap();
        let writes_before = d.target().writes.len();
        let scrolls_before = d.target().scrolls.len();

        assert!(d.select_tab(DetailTab::SoulMd));
        let t = d.target();
        assert_eq!(&t.writes[writes_before..], &[Region::DetailContent]);
        assert_eq!(t.scrolls.len(), scrolls_before);
        assert!(t.html[&Region::DetailContent].contains("calm"));
    }

    #[test]
    fn test_select_tab_before_open_is_noop() {
        let mut d = mounted();
        assert!(!d.select_tab(DetailTab::Memory));
        assert!(!d.target().html.contains_key(&Region::DetailContent));
    }

    #[test]
    fn test_open_unknown_agent_is_error_and_keeps_state() {
        let mut d = mounted();
        let err = d.open_agent("ghost").unwrap_err();
        assert!(err.is_usage());
        assert_eq!(d.nav().open_agent(), None);
        assert!(d.target().revealed.is_empty());
    }

    #[test]
    fn test_memory_tab_for_agent_without_status() {
        let mut d = mounted();
        d.open_agent("coder").unwrap();
        d.select_tab(DetailTab::Memory);
        assert!(d.target().html[&Region::DetailContent].contains("No memory entries yet"));
    }

    #[test]
    fn test_fail_replaces_content_only() {
        let t = Dashboard::fail(
            RecordingTarget::default(),
            &LoadError::Status {
                resource: crate::domain::Resource::Projects,
                status: 404,
            },
        );
        assert_eq!(t.writes, vec![Region::Content]);
        let msg = &t.html[&Region::Content];
        assert!(msg.contains("projects.json"));
        assert!(msg.contains("404"));
    }
}
