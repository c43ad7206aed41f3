//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・ログファイル・データ取得元を環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. DASHBOARD_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/agent-dashboard（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/agent-dashboard
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// ホームから state ディレクトリを導く
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        Ok(Dirs::from_home(&self.resolve_home_dir()?))
    }

    /// 構造化ログのファイルパス
    /// DASHBOARD_LOG_FILE があればそれ、なければ <home>/state/logs/dashboard.jsonl
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error>;

    /// データ取得元（DASHBOARD_DATA）。ディレクトリまたは http(s) のベース URL。
    fn data_location_from_env(&self) -> Option<String>;
}
