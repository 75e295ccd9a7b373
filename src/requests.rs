use anyhow::Context;
use log::{debug, warn};
use reqwest::{Client, ClientBuilder, Response};

use crate::config::ScrapingConfig;

/// One cookie-carrying browsing session against the catalog.
///
/// The `_token` handed out by the landing page is only honored inside the
/// session that fetched it, so the GET and the POST of a search must share
/// one of these. Build a fresh one per search.
pub struct CourseListSession {
    client: Client,
}

impl CourseListSession {
    pub fn new(config: &ScrapingConfig) -> anyhow::Result<Self> {
        let mut builder = ClientBuilder::new()
            .cookie_store(true)
            .user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .context("failed to build catalog HTTP client")?;
        Ok(Self { client })
    }

    pub async fn get_body(&self, url: &str) -> anyhow::Result<String> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;
        read_body(response).await
    }

    pub async fn post_form_body(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> anyhow::Result<String> {
        debug!("POST {url} with {} form fields", fields.len());
        let response = self
            .client
            .post(url)
            .form(fields)
            .send()
            .await
            .with_context(|| format!("POST {url} failed"))?;
        read_body(response).await
    }
}

// The body is kept whatever the status; error pages are saved like results.
async fn read_body(response: Response) -> anyhow::Result<String> {
    let status = response.status();
    let url = response.url().to_string();
    if !status.is_success() {
        warn!("{url} answered with {status}, keeping the body anyway");
    }
    let body = response
        .text()
        .await
        .with_context(|| format!("failed to read response body from {url}"))?;
    Ok(body)
}
