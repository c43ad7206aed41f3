//! dashboard コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、main の match でディスパッチする。

use super::location::{DataLocation, OutputTarget};
use super::navigation::{DetailTab, Section};

/// render で適用する操作（パネルを開く → タブ → セクションの順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavRequest {
    pub agent: Option<String>,
    pub tab: Option<DetailTab>,
    pub section: Option<Section>,
}

/// dashboard のサブコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// ヘルプ表示
    Help,
    /// データを読み込み HTML ページを書き出す（既定）
    Render {
        source: DataLocation,
        out: OutputTarget,
        nav: NavRequest,
    },
    /// データを読み込み件数と参照切れを表示する
    Check { source: DataLocation },
}

impl Command {
    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Render { .. } => "render",
            Self::Check { .. } => "check",
        }
    }
}
