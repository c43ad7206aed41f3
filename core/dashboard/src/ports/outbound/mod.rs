//! Outbound ポート: アプリが外界（データ取得元・描画先）を使うための trait

pub mod data_source;
pub mod render_target;

pub use data_source::{DataSource, DataSourceFactory};
pub use render_target::{Group, PageTarget, Region, RenderTarget};
