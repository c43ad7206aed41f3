//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    EnvResolver, FileJsonLog, FileSystem, Log, NoopLog, StdEnvResolver, StdFileSystem,
};

use crate::adapter::{HtmlPage, StdDataSourceFactory};
use crate::usecase::DashboardUseCase;

/// main が使う依存一式
pub struct App {
    pub env_resolver: Arc<dyn EnvResolver>,
    pub logger: Arc<dyn Log>,
    pub dashboard_use_case: DashboardUseCase<HtmlPage>,
}

/// ログの出力先が解決できなければ NoopLog にする
fn wire_logger(env_resolver: &dyn EnvResolver, fs: &Arc<dyn FileSystem>) -> Arc<dyn Log> {
    match env_resolver.resolve_log_file_path() {
        Ok(path) => Arc::new(FileJsonLog::new(Arc::clone(fs), path)),
        Err(_) => Arc::new(NoopLog),
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_dashboard() -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger = wire_logger(env_resolver.as_ref(), &fs);
    let sources = Arc::new(StdDataSourceFactory::new(Arc::clone(&fs)));
    let dashboard_use_case = DashboardUseCase::new(sources, fs, Arc::clone(&logger));
    App {
        env_resolver,
        logger,
        dashboard_use_case,
    }
}
