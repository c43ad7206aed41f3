//! 3 リソースの同時取得とデコード（全部成功か、1 つの失敗か）

use std::sync::Arc;
use std::thread;

use common::ports::outbound::{Log, LogLevel, LogRecord};
use serde::de::DeserializeOwned;

use crate::domain::{Agent, AgentStatus, Documents, LoadError, Project, Resource};
use crate::ports::outbound::DataSource;

/// 3 リソースを別スレッドで同時に取得し、全部揃ってから結果を決める。
///
/// 失敗が複数あれば Resource::ALL の順で最初のものを返す。失敗しても他の取得は止めない。
pub struct DataLoader {
    logger: Arc<dyn Log>,
}

impl DataLoader {
    pub fn new(logger: Arc<dyn Log>) -> Self {
        Self { logger }
    }

    pub fn load(&self, source: &dyn DataSource) -> Result<Documents, LoadError> {
        let (agents, status, projects) = thread::scope(|s| {
            let agents = s.spawn(|| self.fetch_decode::<Vec<Agent>>(source, Resource::Agents));
            let status = s.spawn(|| self.fetch_decode::<Vec<AgentStatus>>(source, Resource::Status));
            let projects = s.spawn(|| self.fetch_decode::<Vec<Project>>(source, Resource::Projects));
            (
                join(agents, Resource::Agents),
                join(status, Resource::Status),
                join(projects, Resource::Projects),
            )
        });
        Ok(Documents {
            agents: agents?,
            status: status?,
            projects: projects?,
        })
    }

    fn fetch_decode<T: DeserializeOwned>(
        &self,
        source: &dyn DataSource,
        resource: Resource,
    ) -> Result<T, LoadError> {
        let body = source.fetch(resource)?;
        let decoded = serde_json::from_str(&body).map_err(|e| LoadError::Decode {
            resource,
            message: e.to_string(),
        })?;
        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Debug, "resource fetched")
                .layer("usecase")
                .kind("fetch")
                .field("resource", resource.file_name())
                .field("bytes", body.len()),
        );
        Ok(decoded)
    }
}

fn join<T>(
    handle: thread::ScopedJoinHandle<'_, Result<T, LoadError>>,
    resource: Resource,
) -> Result<T, LoadError> {
    handle.join().unwrap_or_else(|_| {
        Err(LoadError::Fetch {
            resource,
            message: "fetch worker panicked".to_string(),
        })
    })
}
