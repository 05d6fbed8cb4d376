#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use met_viewer::{
    ArtworkSource, FetchedRecord, ObjectId, ObjectRecord, Result, ViewerConfig, ViewerError,
};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, Once};
use std::time::Duration;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Seeded config so runs are repeatable.
pub fn test_config(max_attempts: u32) -> ViewerConfig {
    ViewerConfig {
        base_url: "http://fake.invalid".to_string(),
        pool_range: 0..usize::MAX,
        max_attempts,
        seed: Some(7),
        ..ViewerConfig::default()
    }
}

pub fn record(image: Option<&str>, artist: Option<&str>) -> ObjectRecord {
    ObjectRecord {
        primary_image_small: image.map(str::to_string),
        title: Some("Untitled".to_string()),
        department: Some("Drawings and Prints".to_string()),
        artist_display_name: artist.map(str::to_string),
        object_date: Some("1890".to_string()),
        ..ObjectRecord::default()
    }
}

/// One canned reply, consumed in call order before falling back to the by-id map.
pub struct Scripted {
    pub delay: Duration,
    pub reply: std::result::Result<ObjectRecord, String>,
}

/// In-memory catalog standing in for the Met API.
#[derive(Default)]
pub struct FakeSource {
    ids: Option<Vec<ObjectId>>,
    records: HashMap<ObjectId, ObjectRecord>,
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<ObjectId>>,
}

impl FakeSource {
    pub fn new(ids: Vec<ObjectId>) -> Self {
        Self {
            ids: Some(ids),
            ..Self::default()
        }
    }

    /// `object_ids` fails, like a missing `objectIDs` field.
    pub fn broken_catalog() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, id: ObjectId, record: ObjectRecord) -> Self {
        self.records.insert(id, record);
        self
    }

    pub fn with_script(self, delay_ms: u64, reply: std::result::Result<ObjectRecord, String>) -> Self {
        self.script.lock().unwrap().push_back(Scripted {
            delay: Duration::from_millis(delay_ms),
            reply,
        });
        self
    }

    pub fn calls(&self) -> Vec<ObjectId> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtworkSource for FakeSource {
    fn source_name(&self) -> String {
        "fake catalog".to_string()
    }

    async fn object_ids(&self) -> Result<Vec<ObjectId>> {
        self.ids.clone().ok_or(ViewerError::MissingObjectIds)
    }

    async fn object(&self, id: ObjectId) -> Result<FetchedRecord> {
        self.calls.lock().unwrap().push(id);

        let scripted = self.script.lock().unwrap().pop_front();
        let reply = match scripted {
            Some(scripted) => {
                if !scripted.delay.is_zero() {
                    tokio::time::sleep(scripted.delay).await;
                }
                scripted.reply
            }
            None => self
                .records
                .get(&id)
                .cloned()
                .ok_or_else(|| format!("no record for {}", id)),
        };

        match reply {
            Ok(record) => Ok(FetchedRecord {
                record: record.into_artwork(id),
                fetch_time: Utc::now(),
                response_time_ms: 1,
            }),
            Err(message) => Err(ViewerError::Status {
                status: 404,
                url: format!("{}: {}", id, message),
            }),
        }
    }
}
