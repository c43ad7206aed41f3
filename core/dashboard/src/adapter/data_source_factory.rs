//! DataLocation に応じて FS / HTTP の DataSource を選ぶ

use std::sync::Arc;

use common::ports::outbound::FileSystem;

use super::{FsDataSource, HttpDataSource};
use crate::domain::DataLocation;
use crate::ports::outbound::{DataSource, DataSourceFactory};

/// 標準の DataSourceFactory
pub struct StdDataSourceFactory {
    fs: Arc<dyn FileSystem>,
}

impl StdDataSourceFactory {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl DataSourceFactory for StdDataSourceFactory {
    fn open(&self, location: &DataLocation) -> Arc<dyn DataSource> {
        match location {
            DataLocation::Dir(dir) => Arc::new(FsDataSource::new(Arc::clone(&self.fs), dir)),
            DataLocation::Url(url) => Arc::new(HttpDataSource::new(url.as_str())),
        }
    }
}
