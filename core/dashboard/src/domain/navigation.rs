//! 画面遷移の状態機械（セクション・詳細タブ・開いているエージェント）
//!
//! 状態の更新だけを受け持ち、描画先への反映は usecase::Dashboard が行う。
//! 各遷移は「見える状態が変わったか」を返す。

use std::fmt;
use std::str::FromStr;

use common::error::Error;

/// トップレベルのセクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Agents,
    Projects,
    Logs,
}

impl Section {
    /// ナビゲーションの並び順
    pub const ALL: [Section; 3] = [Section::Agents, Section::Projects, Section::Logs];

    /// `data-section` / 要素 id に使うキー
    pub fn key(&self) -> &'static str {
        match self {
            Self::Agents => "agents",
            Self::Projects => "projects",
            Self::Logs => "logs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Agents => "Agents",
            Self::Projects => "Projects",
            Self::Logs => "Logs",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|sec| sec.key() == s)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "Unknown section '{}' (expected one of: agents, projects, logs)",
                    s
                ))
            })
    }
}

/// 詳細パネル内のタブ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DetailTab {
    /// エージェントのプロフィール（AGENTS.md）。パネルを開いたときは必ずこれ
    #[default]
    AgentsMd,
    SoulMd,
    Memory,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::AgentsMd, DetailTab::SoulMd, DetailTab::Memory];

    /// `data-tab` に使うキー
    pub fn key(&self) -> &'static str {
        match self {
            Self::AgentsMd => "agents-md",
            Self::SoulMd => "soul-md",
            Self::Memory => "memory",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AgentsMd => "AGENTS.md",
            Self::SoulMd => "SOUL.md",
            Self::Memory => "Memory",
        }
    }
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DetailTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DetailTab::ALL
            .into_iter()
            .find(|tab| tab.key() == s)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "Unknown tab '{}' (expected one of: agents-md, soul-md, memory)",
                    s
                ))
            })
    }
}

/// ナビゲーション状態。初期値はセクション agents・パネル未表示。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    section: Section,
    detail_tab: DetailTab,
    open_agent: Option<String>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn detail_tab(&self) -> DetailTab {
        self.detail_tab
    }

    pub fn open_agent(&self) -> Option<&str> {
        self.open_agent.as_deref()
    }

    /// セクションを切り替える。同じセクションの再選択は変化なし（false）。
    pub fn select_section(&mut self, section: Section) -> bool {
        if self.section == section {
            return false;
        }
        self.section = section;
        true
    }

    /// エージェントの詳細を開く。タブは前回の状態に関わらず既定に戻る。
    /// 同じエージェントを開き直しても再描画とスクロールは起きるので常に変化あり。
    pub fn open(&mut self, agent_id: impl Into<String>) {
        self.open_agent = Some(agent_id.into());
        self.detail_tab = DetailTab::default();
    }

    /// 詳細タブを切り替える。パネル未表示なら何もしない（false）。
    pub fn select_tab(&mut self, tab: DetailTab) -> bool {
        if self.open_agent.is_none() {
            return false;
        }
        self.detail_tab = tab;
        true
    }
}
