//! ダッシュボード共通ライブラリ
//!
//! `dashboard` コマンドが使うエラー型・ポート・標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート（FS・ログ・環境変数）
pub mod ports;

/// ポートの標準実装
pub mod adapter;
