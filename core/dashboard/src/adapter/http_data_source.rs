//! HTTP(S) のベース URL から 3 リソースを取得する DataSource（reqwest blocking）

use crate::domain::{LoadError, Resource};
use crate::ports::outbound::DataSource;

/// `GET <base_url>/agents.json` などを発行する
pub struct HttpDataSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpDataSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::blocking::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::blocking::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// ベース URL の末尾スラッシュの有無に関わらず 1 つだけ挟む
    pub fn url_for(&self, resource: Resource) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            resource.file_name()
        )
    }
}

impl DataSource for HttpDataSource {
    fn fetch(&self, resource: Resource) -> Result<String, LoadError> {
        let fetch_error = move |e: reqwest::Error| LoadError::Fetch {
            resource,
            message: e.to_string(),
        };
        let response = self
            .client
            .get(self.url_for(resource))
            .send()
            .map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                resource,
                status: status.as_u16(),
            });
        }
        response.text().map_err(fetch_error)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
