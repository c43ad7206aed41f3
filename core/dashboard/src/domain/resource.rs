//! 読み込む 3 リソースと読み込みエラー

use common::error::Error;
use std::fmt;

/// ダッシュボードが読む固定名のリソース
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Agents,
    Status,
    Projects,
}

impl Resource {
    /// 報告順（複数失敗時はこの順で最初のものを返す）
    pub const ALL: [Resource; 3] = [Resource::Agents, Resource::Status, Resource::Projects];

    /// データディレクトリ / ベース URL からの相対名
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Agents => "agents.json",
            Self::Status => "status.json",
            Self::Projects => "projects.json",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// リソース読み込みの失敗。どのリソースで失敗したかを必ず持つ。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// 2xx 以外の HTTP ステータス
    #[error("{resource}: {status}")]
    Status { resource: Resource, status: u16 },
    /// 接続失敗・ファイルが読めない等
    #[error("{resource}: {message}")]
    Fetch { resource: Resource, message: String },
    /// JSON として、または期待する形として読めない
    #[error("{resource}: invalid JSON: {message}")]
    Decode { resource: Resource, message: String },
}

impl LoadError {
    pub fn resource(&self) -> Resource {
        match self {
            Self::Status { resource, .. }
            | Self::Fetch { resource, .. }
            | Self::Decode { resource, .. } => *resource,
        }
    }
}

impl From<LoadError> for Error {
    fn from(e: LoadError) -> Self {
        Error::Load(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_names_resource_and_code() {
        let err = LoadError::Status {
            resource: Resource::Projects,
            status: 404,
        };
        assert_eq!(err.to_string(), "projects.json: 404");
        assert_eq!(err.resource(), Resource::Projects);
    }

    #[test]
    fn test_into_common_error() {
        let err: Error = LoadError::Decode {
            resource: Resource::Status,
            message: "expected a sequence".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 74);
        assert!(err.to_string().contains("status.json: invalid JSON"));
    }
}
