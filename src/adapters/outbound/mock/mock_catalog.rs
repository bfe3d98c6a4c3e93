use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::time::Duration;
use tracing::debug;

use crate::{
    domain::{errors::GatewayResult, models::ImageRecord},
    ports::catalog::ImageCatalog,
};

/// Base URL the demo records point at; shaped like a real bucket endpoint so
/// record URLs stay decodable back to their filenames.
const DEMO_BUCKET_URL: &str = "https://camwatch-demo.s3.us-east-1.amazonaws.com";

const DEFAULT_LATENCY: Duration = Duration::from_millis(400);

/// Fixed in-memory image catalog for development without a bucket.
///
/// The six sample records are static: listing always returns them in the
/// same order, and deleting never removes anything from the source. The
/// illusion of deletion lives entirely in the caller's working copy.
pub struct MockImageCatalog {
    latency: Duration,
}

impl MockImageCatalog {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
        }
    }

    /// Same catalog without the simulated network delay; used by tests.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for MockImageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_url(filename: &str) -> String {
    format!("{}/{}", DEMO_BUCKET_URL, urlencoding::encode(filename))
}

fn sample_records() -> Vec<ImageRecord> {
    let samples = [
        (
            "1",
            "intrusion_20240601_153042.jpg",
            (2024, 6, 1, 15, 30, 42),
            "3.2 MB",
            "Front Door Camera",
        ),
        (
            "2",
            "intrusion_20240601_153445.jpg",
            (2024, 6, 1, 15, 34, 45),
            "2.8 MB",
            "Back Door Camera",
        ),
        (
            "3",
            "intrusion_20240602_021534.jpg",
            (2024, 6, 2, 2, 15, 34),
            "4.1 MB",
            "Side Window Camera",
        ),
        (
            "4",
            "intrusion_20240603_134512.jpg",
            (2024, 6, 3, 13, 45, 12),
            "2.5 MB",
            "Garage Camera",
        ),
        (
            "5",
            "intrusion_20240603_180023.jpg",
            (2024, 6, 3, 18, 0, 23),
            "3.7 MB",
            "Front Door Camera",
        ),
        (
            "6",
            "intrusion_20240604_093212.jpg",
            (2024, 6, 4, 9, 32, 12),
            "2.9 MB",
            "Backyard Camera",
        ),
    ];

    samples
        .into_iter()
        .map(|(id, filename, (y, mo, d, h, mi, s), size, source)| ImageRecord {
            id: id.to_string(),
            filename: filename.to_string(),
            timestamp: Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap(),
            url: demo_url(filename),
            size: size.to_string(),
            source: source.to_string(),
        })
        .collect()
}

#[async_trait]
impl ImageCatalog for MockImageCatalog {
    async fn list_images(&self) -> GatewayResult<Vec<ImageRecord>> {
        tokio::time::sleep(self.latency).await;
        Ok(sample_records())
    }

    async fn delete_image(&self, id: &str) -> GatewayResult<()> {
        tokio::time::sleep(self.latency).await;
        debug!(%id, "mock delete, catalog unchanged");
        Ok(())
    }
}
