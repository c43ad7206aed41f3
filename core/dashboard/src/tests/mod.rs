//! シナリオテスト（標準アダプタ + 一時ディレクトリ / フェイクの取得元）


use std::path::Path;
use std::sync::Arc;

use common::adapter::{FileSystem, Log, NoopLog, StdFileSystem};

use crate::adapter::{HtmlPage, StdDataSourceFactory};
use crate::usecase::DashboardUseCase;

pub(crate) const AGENTS_JSON: &str = r##"[
  {"id":"main","name":"Main","emoji":"🤖","model":"opus","workspace":"/srv/main",
   "subagents":"coder","agentsMd":"# Main\n- plan\n- review","soulMd":"**calm**"},
  {"id":"coder","name":"Coder <dev>","emoji":"🛠","model":"sonnet","workspace":"/srv/coder",
   "subagents":"","agentsMd":"","soulMd":null}
]"##;

pub(crate) const STATUS_JSON: &str = r#"[
  {"id":"main","builtAt":"2024-06-01T10:00:00Z","recentMemory":[
    {"date":"2024-05-30","content":"wrote plan"},
    {"date":"2024-06-01","content":"reviewed <PR>"}
  ]},
  {"id":"coder","builtAt":"2024-06-01T09:00:00Z","recentMemory":[
    {"date":"2024-05-31","content":"fixed bug"}
  ]}
]"#;

pub(crate) const PROJECTS_JSON: &str = r#"[
  {"name":"site","agent":"main","fileCount":12},
  {"name":"legacy","agent":"ghost","fileCount":3}
]"#;

/// data/ 相当のディレクトリに 3 ファイルを書く
pub(crate) fn write_data_dir(dir: &Path, agents: &str, status: &str, projects: &str) {
    std::fs::write(dir.join("agents.json"), agents).unwrap();
    std::fs::write(dir.join("status.json"), status).unwrap();
    std::fs::write(dir.join("projects.json"), projects).unwrap();
}

/// ログを捨てる標準構成のユースケース
pub(crate) fn use_case() -> DashboardUseCase<HtmlPage> {
    use_case_with_logger(Arc::new(NoopLog))
}

/// 指定の logger を使う標準構成のユースケース
pub(crate) fn use_case_with_logger(logger: Arc<dyn Log>) -> DashboardUseCase<HtmlPage> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    DashboardUseCase::new(
        Arc::new(StdDataSourceFactory::new(Arc::clone(&fs))),
        fs,
        logger,
    )
}
