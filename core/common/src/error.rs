//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。終了コードは sysexits.h に揃える。

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（使い方の誤り）
    #[error("{0}")]
    InvalidArgument(String),
    /// ファイル・標準出力などの I/O エラー
    #[error("{0}")]
    Io(String),
    /// JSON のシリアライズ／デシリアライズ失敗
    #[error("JSON error: {0}")]
    Json(String),
    /// 環境変数の解決失敗
    #[error("{0}")]
    Env(String),
    /// ダッシュボード用データの読み込み失敗（どのリソースかをメッセージに含める）
    #[error("Failed to load dashboard data: {0}")]
    Load(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// 使い方の誤りか（main で usage を表示するかの判定に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Json(_) => 65,
            Self::Io(_) | Self::Load(_) => 74,
            Self::Env(_) => 78,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
