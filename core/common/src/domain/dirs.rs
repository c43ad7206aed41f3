//! 実行時ディレクトリ（DASHBOARD_HOME 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、ログファイルのパス計算に使う。

use std::path::PathBuf;

use super::HomeDir;

/// 解決済みの state ディレクトリ
#[derive(Debug, Clone)]
pub struct Dirs {
    pub state_dir: PathBuf,
}

impl Dirs {
    /// ホーム直下に state を置く
    pub fn from_home(home: &HomeDir) -> Self {
        Self {
            state_dir: home.join("state"),
        }
    }

    /// ログ格納ディレクトリ（state/logs）
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    /// 構造化ログ（JSONL）のファイルパス
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join("dashboard.jsonl")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_from_home() {
        let dirs = Dirs::from_home(&HomeDir::new("/tmp/dash"));
        assert_eq!(dirs.state_dir, PathBuf::from("/tmp/dash/state"));
        assert_eq!(
            dirs.log_file(),
            PathBuf::from("/tmp/dash/state/logs/dashboard.jsonl")
        );
    }
}
