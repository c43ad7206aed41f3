//! ローカルディレクトリから 3 リソースを読む DataSource

use std::path::PathBuf;
use std::sync::Arc;

use common::ports::outbound::FileSystem;

use crate::domain::{LoadError, Resource};
use crate::ports::outbound::DataSource;

/// `<dir>/agents.json` などを FileSystem 経由で読む
pub struct FsDataSource {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
}

impl FsDataSource {
    pub fn new(fs: Arc<dyn FileSystem>, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
        }
    }
}

impl DataSource for FsDataSource {
    fn fetch(&self, resource: Resource) -> Result<String, LoadError> {
        let path = self.dir.join(resource.file_name());
        self.fs
            .read_to_string(&path)
            .map_err(|e| LoadError::Fetch {
                resource,
                message: e.to_string(),
            })
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;
    use tempfile::tempdir;

    #[test]
    fn test_reads_resource_by_file_name() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("agents.json"), "[]").unwrap();
        let source = FsDataSource::new(Arc::new(StdFileSystem), dir.path());
        assert_eq!(source.fetch(Resource::Agents).unwrap(), "[]");
    }

    #[test]
    fn test_missing_file_is_fetch_error_naming_resource() {
        let dir = tempdir().unwrap();
        let source = FsDataSource::new(Arc::new(StdFileSystem), dir.path());
        let err = source.fetch(Resource::Status).unwrap_err();
        assert!(matches!(err, LoadError::Fetch { resource: Resource::Status, .. }));
        assert!(err.to_string().starts_with("status.json: "));
    }
}
