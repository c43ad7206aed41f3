//! 読み込んだ 3 ドキュメントを結合したビューモデル
//!
//! 読み込み時に 1 回だけ組み立て、以後は変更しない。

use std::collections::HashMap;

use super::model::{Agent, AgentStatus, Documents, Project};

/// エージェントが見つからない・絵文字が空のときのアイコン
pub const FALLBACK_ICON: &str = "📁";

/// builtAt が取れないときの表示
pub const UNKNOWN_BUILT_AT: &str = "unknown";

/// 全エージェントのメモを平坦化したログ 1 件
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub date: String,
    pub content: String,
    pub agent: String,
    pub emoji: String,
}

/// 結合済みのビューモデル
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    agents: Vec<Agent>,
    projects: Vec<Project>,
    status_by_id: HashMap<String, AgentStatus>,
    agent_index: HashMap<String, usize>,
    built_at: String,
    logs: Vec<LogEntry>,
}

impl ViewModel {
    pub fn build(docs: Documents) -> Self {
        let Documents {
            agents,
            status,
            projects,
        } = docs;

        // 同じ id が複数あれば後勝ち
        let agent_index: HashMap<String, usize> = agents
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.clone(), i))
            .collect();

        let built_at = status
            .first()
            .map(|s| s.built_at.as_str())
            .filter(|b| !b.is_empty())
            .unwrap_or(UNKNOWN_BUILT_AT)
            .to_string();

        let mut logs: Vec<LogEntry> = status
            .iter()
            .flat_map(|s| {
                let emoji = emoji_for(&agents, &agent_index, &s.id);
                s.recent_memory.iter().map(move |m| LogEntry {
                    date: m.date.clone(),
                    content: m.content.clone(),
                    agent: s.id.clone(),
                    emoji: emoji.to_string(),
                })
            })
            .collect();
        // 安定ソート: 同じ日付は入力順を保つ
        logs.sort_by(|a, b| b.date.cmp(&a.date));

        let status_by_id = status.into_iter().map(|s| (s.id.clone(), s)).collect();

        Self {
            agents,
            projects,
            status_by_id,
            agent_index,
            built_at,
            logs,
        }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    pub fn built_at(&self) -> &str {
        &self.built_at
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agent_index.get(id).map(|&i| &self.agents[i])
    }

    pub fn status(&self, id: &str) -> Option<&AgentStatus> {
        self.status_by_id.get(id)
    }

    pub fn status_count(&self) -> usize {
        self.status_by_id.len()
    }

    /// id からアイコンを引く。見つからない・空なら FALLBACK_ICON
    pub fn emoji_for(&self, id: &str) -> &str {
        emoji_for(&self.agents, &self.agent_index, id)
    }

    /// 存在しないエージェントを指すプロジェクト（警告用、エラーではない）
    pub fn dangling_projects(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| !self.agent_index.contains_key(&p.agent))
            .collect()
    }
}

fn emoji_for<'a>(agents: &'a [Agent], index: &HashMap<String, usize>, id: &str) -> &'a str {
    index
        .get(id)
        .map(|&i| agents[i].emoji.as_str())
        .filter(|e| !e.is_empty())
        .unwrap_or(FALLBACK_ICON)
}
