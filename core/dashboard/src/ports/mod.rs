//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: データ取得・描画先の trait（common の FileSystem / Log も利用）

pub mod inbound;
pub mod outbound;
