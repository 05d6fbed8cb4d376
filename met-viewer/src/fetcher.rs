use crate::traits::ArtworkSource;
use crate::types::{
    FetchedRecord, ObjectId, ObjectRecord, ObjectsResponse, Result, ViewerConfig, ViewerError,
};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

/// HTTP client for the Met Collection API.
pub struct Fetcher {
    client: Client,
    base_url: Url,
}

impl Fetcher {
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .gzip(true)
            .deflate(true)
            .brotli(true);

        // No timeout unless asked for: a hung request just keeps the viewer loading.
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let client = builder.build()?;
        let base_url = Self::normalize_base(&config.base_url)?;

        Ok(Self { client, base_url })
    }

    // Url::join drops the last path segment unless the base ends with '/'.
    fn normalize_base(base: &str) -> Result<Url> {
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Url::parse(&base)?)
    }

    pub fn objects_url(&self) -> Result<Url> {
        Ok(self.base_url.join("objects")?)
    }

    pub fn object_url(&self, id: ObjectId) -> Result<Url> {
        Ok(self.base_url.join(&format!("objects/{}", id))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Request to {} failed with HTTP {}", url, status);
            return Err(ViewerError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn fetch_object_ids(&self) -> Result<Vec<ObjectId>> {
        let url = self.objects_url()?;
        let response: ObjectsResponse = self.get_json(url).await?;

        let ids = response.object_ids.ok_or(ViewerError::MissingObjectIds)?;
        match response.total {
            Some(total) => info!("Fetched {} object IDs (catalog reports {})", ids.len(), total),
            None => info!("Fetched {} object IDs", ids.len()),
        }
        Ok(ids)
    }

    pub async fn fetch_record(&self, id: ObjectId) -> Result<FetchedRecord> {
        let start_time = Instant::now();
        let fetch_time = Utc::now();

        let url = self.object_url(id)?;
        let record: ObjectRecord = self.get_json(url).await?;
        let response_time_ms = start_time.elapsed().as_millis() as u64;

        debug!("Fetched object {} in {}ms", id, response_time_ms);

        Ok(FetchedRecord {
            record: record.into_artwork(id),
            fetch_time,
            response_time_ms,
        })
    }
}

#[async_trait]
impl ArtworkSource for Fetcher {
    fn source_name(&self) -> String {
        match self.base_url.domain() {
            Some(domain) => format!("Met Collection API ({})", domain),
            None => format!("Met Collection API ({})", self.base_url),
        }
    }

    async fn object_ids(&self) -> Result<Vec<ObjectId>> {
        self.fetch_object_ids().await
    }

    async fn object(&self, id: ObjectId) -> Result<FetchedRecord> {
        self.fetch_record(id).await
    }
}
