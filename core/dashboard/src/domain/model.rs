//! 入力 JSON（agents.json / status.json / projects.json）のドメイン型
//!
//! フィールドはすべて省略可能で、型が違っても読み込みは失敗させない。
//! 文字列欄: 数値・真偽値はその表記、配列は要素を "," で連結、それ以外は空文字。
//! 件数欄: 数値（または数値として読める文字列）以外は 0。
//! デコード失敗になるのはトップレベルの形が違う場合と JSON 自体が壊れている場合だけ。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// JSON 値を表示用の文字列に落とす
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items.iter().map(value_to_text).collect::<Vec<_>>().join(","),
        Value::Null | Value::Object(_) => String::new(),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(&Value::deserialize(deserializer)?))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(count.filter(|c| c.is_finite()).unwrap_or_default())
}

/// 配列でなければ空、オブジェクトでない要素は読み飛ばす
fn lenient_entries<'de, D>(deserializer: D) -> Result<Vec<MemoryEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// エージェント 1 件（カードと詳細パネルの元データ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// 一意キー。status / projects との結合に使う
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub emoji: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub model: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub workspace: String,
    /// サブエージェントの説明。空なら "none" と表示する
    #[serde(default, deserialize_with = "lenient_text")]
    pub subagents: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub agents_md: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub soul_md: String,
}

/// エージェントごとの実行スナップショット
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStatus {
    /// Agent.id への外部キー
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub built_at: String,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub recent_memory: Vec<MemoryEntry>,
}

/// 日付付きのメモ 1 件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// ISO 形式の日付文字列。文字列比較で並べる
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
}

/// プロジェクト 1 件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    /// Agent.id への外部キー（存在しない id でもよい）
    #[serde(default, deserialize_with = "lenient_text")]
    pub agent: String,
    /// ファイル数（小数もそのまま表示する）
    #[serde(default, deserialize_with = "lenient_count")]
    pub file_count: f64,
}

/// 読み込み済みの 3 ドキュメント（全部揃ったときだけ作られる）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Documents {
    pub agents: Vec<Agent>,
    pub status: Vec<AgentStatus>,
    pub projects: Vec<Project>,
}
