//! データ取得元と出力先

use std::path::PathBuf;

/// データ取得元の既定（カレントディレクトリの data/）
pub const DEFAULT_DATA_DIR: &str = "data";

/// 3 リソースを読む場所
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLocation {
    /// ローカルディレクトリ（<dir>/agents.json など）
    Dir(PathBuf),
    /// HTTP(S) のベース URL（<url>/agents.json など）
    Url(String),
}

impl DataLocation {
    /// 設定値を解釈する。http:// / https:// で始まれば URL、それ以外はディレクトリ。
    pub fn from_setting(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value.to_string())
        } else {
            Self::Dir(PathBuf::from(value))
        }
    }

    /// ログ用の表示
    pub fn describe(&self) -> String {
        match self {
            Self::Dir(dir) => dir.display().to_string(),
            Self::Url(url) => url.clone(),
        }
    }
}

impl Default for DataLocation {
    fn default() -> Self {
        Self::Dir(PathBuf::from(DEFAULT_DATA_DIR))
    }
}

/// 生成した HTML の書き出し先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// "-" は標準出力
    pub fn from_setting(value: &str) -> Self {
        if value == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self::File(PathBuf::from("index.html"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_location_from_setting() {
        assert_eq!(
            DataLocation::from_setting("https://example.com/dash/data"),
            DataLocation::Url("https://example.com/dash/data".to_string())
        );
        assert_eq!(
            DataLocation::from_setting("./site/data"),
            DataLocation::Dir(PathBuf::from("./site/data"))
        );
        assert_eq!(DataLocation::default(), DataLocation::Dir(PathBuf::from("data")));
    }

    #[test]
    fn test_output_target_from_setting() {
        assert_eq!(OutputTarget::from_setting("-"), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_setting("out/index.html"),
            OutputTarget::File(PathBuf::from("out/index.html"))
        );
    }
}
