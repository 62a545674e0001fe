use crate::yahoo::errors::{Error, Result};
use log::debug;
use reqwest::header::USER_AGENT;
use reqwest::Client;

// Quote endpoints reject requests without a browser-like user agent.
const AGENT: &str = "Mozilla/5.0 (compatible; quotelab/0.1)";

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: Client,
    pub base_url: String,
}

impl HttpClient {
    pub async fn get(&self, url_path: &str, params: &[(&str, String)]) -> Result<String> {
        let url = format!("{}{url_path}", self.base_url);
        debug!("GET {url} {params:?}");

        let response = self
            .client
            .get(&url)
            .query(params)
            .header(USER_AGENT, AGENT)
            .send()
            .await
            .map_err(|e| Error::GenericRequest(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::GenericRequest(e.to_string()))?;

        if status.is_client_error() {
            return Err(Error::ClientRequest {
                status: status.as_u16(),
                message: body,
            });
        }
        if status.is_server_error() {
            return Err(Error::ServerRequest(status.as_u16()));
        }
        Ok(body)
    }
}
