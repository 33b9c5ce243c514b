#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CarbonRequest;
use crate::domain::models::CarbonResult;
use crate::domain::models::ChatApi;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatResponse;
use crate::domain::models::CrowdStatus;
use crate::domain::models::PoseAnalysis;
use crate::domain::models::PoseApi;
use crate::domain::models::PoseRequest;
use crate::domain::models::Product;

const CHAT_QUERY_PATH: &str = "/api/v1/chat/query";
const VISION_ANALYZE_PATH: &str = "/api/v1/vision/analyze";
const CROWD_STATUS_PATH: &str = "/api/v1/tourism/crowd-status";
const CALCULATE_CARBON_PATH: &str = "/api/v1/tourism/calculate-carbon";
const PRODUCTS_PATH: &str = "/api/v1/culture/products";

/// Client for the Deep-Shiva HTTP API. No retries or client side timeouts.
pub struct HttpApi {
    url: String,
    client: reqwest::Client,
}

impl Default for HttpApi {
    fn default() -> HttpApi {
        return HttpApi::with_url(&Config::get(ConfigKey::ApiURL));
    }
}

impl HttpApi {
    pub fn with_url(url: &str) -> HttpApi {
        return HttpApi {
            url: url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        };
    }

    async fn read_json<T: DeserializeOwned>(res: reqwest::Response, path: &str) -> Result<T> {
        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), path, "Request failed");
            bail!(format!(
                "Request to {path} failed with status {}",
                res.status().as_u16()
            ));
        }

        let body = res.json::<T>().await?;
        return Ok(body);
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let res = self
            .client
            .get(format!("{url}{path}", url = self.url))
            .send()
            .await?;

        return HttpApi::read_json(res, path).await;
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let res = self
            .client
            .post(format!("{url}{path}", url = self.url))
            .json(body)
            .send()
            .await?;

        return HttpApi::read_json(res, path).await;
    }

    pub async fn crowd_status(&self) -> Result<Vec<CrowdStatus>> {
        return self.get(CROWD_STATUS_PATH).await;
    }

    pub async fn calculate_carbon(&self, req: &CarbonRequest) -> Result<CarbonResult> {
        return self.post(CALCULATE_CARBON_PATH, req).await;
    }

    pub async fn products(&self) -> Result<Vec<Product>> {
        return self.get(PRODUCTS_PATH).await;
    }
}

#[async_trait]
impl ChatApi for HttpApi {
    #[allow(clippy::implicit_return)]
    async fn query(&self, req: &ChatRequest) -> Result<ChatResponse> {
        return self.post(CHAT_QUERY_PATH, req).await;
    }
}

#[async_trait]
impl PoseApi for HttpApi {
    #[allow(clippy::implicit_return)]
    async fn analyze_pose(&self, req: &PoseRequest) -> Result<PoseAnalysis> {
        return self.post(VISION_ANALYZE_PATH, req).await;
    }
}
