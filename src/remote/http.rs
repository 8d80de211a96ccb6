//! HTTP implementation of the board client.

use std::time::Duration;

use super::{BoardClient, BoardConfig, Preview, RemoteError};

/// Blocking HTTP client for the board service.
pub struct HttpBoardClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl HttpBoardClient {
    /// Create a client for the service at `base_url` with a per-request
    /// transport timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn check_status(
        resp: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, RemoteError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(RemoteError::Status {
                status: resp.status().as_u16(),
            })
        }
    }
}

impl BoardClient for HttpBoardClient {
    fn get_config(&self) -> Result<BoardConfig, RemoteError> {
        let resp = self.http.get(self.url("api/config")).send()?;
        Ok(Self::check_status(resp)?.json()?)
    }

    fn get_preview(&self, full: bool) -> Result<Preview, RemoteError> {
        let resp = self
            .http
            .get(self.url("api/preview"))
            .query(&[("full", full)])
            .send()?;
        Ok(Self::check_status(resp)?.json()?)
    }
}
