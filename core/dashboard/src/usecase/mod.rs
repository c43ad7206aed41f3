//! ユースケース層（ポート経由でのみ外界に触れる）

pub mod app;
pub mod dashboard;
pub mod loader;

pub use app::{CheckReport, DashboardUseCase, RenderedPage};
pub use dashboard::Dashboard;
pub use loader::DataLoader;
