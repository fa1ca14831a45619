mod http;

pub use http::HttpAnalysisClient;

use crate::{
    Result,
    protocol::{AnalysisRequest, AnalysisResponse},
};
use async_trait::async_trait;

/// Remote symptom analyzer.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse>;
}
