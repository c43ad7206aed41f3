//! dashboard 用アダプター（Outbound ポートの標準実装）

pub mod data_source_factory;
pub mod fs_data_source;
pub mod html_page;
pub mod http_data_source;

pub use data_source_factory::StdDataSourceFactory;
pub use fs_data_source::FsDataSource;
pub use html_page::HtmlPage;
pub use http_data_source::HttpDataSource;
