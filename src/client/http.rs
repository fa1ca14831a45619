use super::AnalysisClient;
use crate::{
    Result,
    config::AnalysisConfig,
    protocol::{AnalysisRequest, AnalysisResponse},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

pub struct HttpAnalysisClient {
    url: String,
    client: reqwest::Client,
}

impl HttpAnalysisClient {
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            url: config.url(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        debug!("POST {} ({} chars of symptoms)", self.url, request.symptoms().len());

        // `json` sets Content-Type: application/json
        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            // The body is still classified; error payloads fall through to the unknown result.
            warn!("Analysis endpoint answered with HTTP {}", status);
        }

        let body = response.bytes().await?;
        let response: AnalysisResponse = serde_json::from_slice(&body)?;
        debug!("Analysis response status: {:?}", response.status());

        Ok(response)
    }
}
