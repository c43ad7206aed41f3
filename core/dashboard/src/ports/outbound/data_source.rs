//! データ取得 Outbound ポート
//!
//! リソース名を受け取り、未デコードの本文を返す。実装はローカル FS と HTTP。

use std::sync::Arc;

use crate::domain::{DataLocation, LoadError, Resource};

/// 3 リソースの本文を取得する能力
///
/// ローダーは 3 つを別スレッドから同時に呼ぶので Send + Sync。
pub trait DataSource: Send + Sync {
    /// 本文を返す。失敗は必ず `resource` を含む LoadError（HTTP ならステータス付き）。
    fn fetch(&self, resource: Resource) -> Result<String, LoadError>;

    /// ログ用の取得元表示（ディレクトリや URL）
    fn describe(&self) -> String;
}

/// DataLocation から DataSource を作る（取得元はコマンドごとに決まるため）
pub trait DataSourceFactory: Send + Sync {
    fn open(&self, location: &DataLocation) -> Arc<dyn DataSource>;
}
