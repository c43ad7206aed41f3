//! render / check のユースケース
//!
//! 取得元の選択・読み込み・ビューモデル構築・ナビゲーション適用・書き出しをまとめる。

use std::io::Write;
use std::marker::PhantomData;
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};

use super::dashboard::Dashboard;
use super::loader::DataLoader;
use crate::domain::{DataLocation, LoadError, NavRequest, OutputTarget, Resource, ViewModel};
use crate::ports::outbound::{DataSourceFactory, PageTarget};

/// render の結果。読み込みに失敗してもエラーページは作られる。
#[derive(Debug)]
pub struct RenderedPage {
    pub document: String,
    pub load_error: Option<LoadError>,
}

/// check の結果
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub source: String,
    pub agents: usize,
    pub statuses: usize,
    pub projects: usize,
    pub logs: usize,
    pub built_at: String,
    /// (プロジェクト名, 参照しているエージェント id)
    pub dangling: Vec<(String, String)>,
}

/// dashboard のユースケース。P は書き出す描画先（標準は HtmlPage）。
pub struct DashboardUseCase<P: PageTarget> {
    sources: Arc<dyn DataSourceFactory>,
    fs: Arc<dyn FileSystem>,
    logger: Arc<dyn Log>,
    loader: DataLoader,
    _page: PhantomData<P>,
}

impl<P: PageTarget> DashboardUseCase<P> {
    pub fn new(
        sources: Arc<dyn DataSourceFactory>,
        fs: Arc<dyn FileSystem>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            sources,
            fs,
            loader: DataLoader::new(Arc::clone(&logger)),
            logger,
            _page: PhantomData,
        }
    }

    /// データを読み込み、ナビゲーションを適用したページを組み立てる。
    ///
    /// 読み込み失敗はエラーページ（load_error 付き）として返す。
    /// 不正なナビゲーション指定（エージェントなしのタブ、未知のエージェント）は Err。
    /// エージェントなしのタブは読み込み前に弾く。
    pub fn render(&self, source: &DataLocation, nav: &NavRequest) -> Result<RenderedPage, Error> {
        if nav.tab.is_some() && nav.agent.is_none() {
            return Err(Error::invalid_argument(
                "--tab requires --agent (no detail panel is open)",
            ));
        }
        let view = match self.load_view(source) {
            Ok(view) => view,
            Err(e) => {
                let page = Dashboard::fail(P::default(), &e);
                return Ok(RenderedPage {
                    document: page.to_document(),
                    load_error: Some(e),
                });
            }
        };

        let mut dashboard = Dashboard::mount(view, P::default());
        if let Some(agent) = &nav.agent {
            dashboard.open_agent(agent)?;
        }
        if let Some(tab) = nav.tab {
            dashboard.select_tab(tab);
        }
        if let Some(section) = nav.section {
            dashboard.select_section(section);
        }
        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Info, "page rendered")
                .layer("usecase")
                .kind("render")
                .field("section", dashboard.nav().section().key())
                .field("agent", dashboard.nav().open_agent().unwrap_or_default())
                .field("tab", dashboard.nav().detail_tab().key()),
        );
        Ok(RenderedPage {
            document: dashboard.into_target().to_document(),
            load_error: None,
        })
    }

    /// データを読み込み、件数と参照切れを報告する
    pub fn check(&self, source: &DataLocation) -> Result<CheckReport, Error> {
        let view = self.load_view(source)?;
        Ok(CheckReport {
            source: source.describe(),
            agents: view.agents().len(),
            statuses: view.status_count(),
            projects: view.projects().len(),
            logs: view.logs().len(),
            built_at: view.built_at().to_string(),
            dangling: view
                .dangling_projects()
                .into_iter()
                .map(|p| (p.name.clone(), p.agent.clone()))
                .collect(),
        })
    }

    /// 組み立てた文書を書き出す（ファイルなら親ディレクトリも作る）
    pub fn write_document(&self, out: &OutputTarget, document: &str) -> Result<(), Error> {
        match out {
            OutputTarget::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(document.as_bytes())?;
                stdout.flush()?;
            }
            OutputTarget::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    self.fs.create_dir_all(parent)?;
                }
                self.fs.write(path, document)?;
                let _ = self.logger.log(
                    &LogRecord::new(LogLevel::Info, "page written")
                        .layer("usecase")
                        .kind("render")
                        .field("path", path.display().to_string())
                        .field("bytes", document.len()),
                );
            }
        }
        Ok(())
    }

    fn load_view(&self, location: &DataLocation) -> Result<ViewModel, LoadError> {
        let source = self.sources.open(location);
        let docs = match self.loader.load(source.as_ref()) {
            Ok(docs) => docs,
            Err(e) => {
                let _ = self.logger.log(
                    &LogRecord::new(LogLevel::Error, e.to_string())
                        .layer("usecase")
                        .kind("error")
                        .field("source", source.describe())
                        .field("resource", e.resource().file_name()),
                );
                return Err(e);
            }
        };

        let view = ViewModel::build(docs);
        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Info, "data loaded")
                .layer("usecase")
                .kind("fetch")
                .field("source", source.describe())
                .field(
                    "resources",
                    Resource::ALL.iter().map(|r| r.file_name()).collect::<Vec<_>>(),
                )
                .field("agents", view.agents().len())
                .field("logs", view.logs().len()),
        );
        for project in view.dangling_projects() {
            let _ = self.logger.log(
                &LogRecord::new(LogLevel::Warn, "project references unknown agent")
                    .layer("usecase")
                    .kind("data")
                    .field("project", project.name.as_str())
                    .field("agent", project.agent.as_str()),
            );
        }
        Ok(view)
    }
}
