use std::path::PathBuf;
use std::time::Duration;

use crate::{
    DOWNLOAD_DELAY_MS, DOWNLOAD_TIMEOUT_SECS, ENDPOINT, IMAGE_KEY, INDEX_KEY, NAME_KEY,
    OUTPUT_DIR, PAGE_DELAY_MS, PAGE_SIZE, PAGE_TIMEOUT_SECS,
};

/// Everything a run needs to know, passed explicitly to both stages.
/// `Config::default()` carries the compiled-in constants.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog API endpoint, queried with `limit` and `page`.
    pub endpoint: String,
    pub page_size: u32,
    /// JSON keys of the three required fields of a catalog entry.
    pub image_key: String,
    pub index_key: String,
    pub name_key: String,
    pub output_dir: PathBuf,
    /// Pause between consecutive catalog page requests.
    pub page_delay: Duration,
    /// Pause between consecutive image downloads.
    pub download_delay: Duration,
    pub page_timeout: Duration,
    pub download_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: ENDPOINT.into(),
            page_size: PAGE_SIZE,
            image_key: IMAGE_KEY.into(),
            index_key: INDEX_KEY.into(),
            name_key: NAME_KEY.into(),
            output_dir: PathBuf::from(OUTPUT_DIR),
            page_delay: Duration::from_millis(PAGE_DELAY_MS),
            download_delay: Duration::from_millis(DOWNLOAD_DELAY_MS),
            page_timeout: Duration::from_secs(PAGE_TIMEOUT_SECS),
            download_timeout: Duration::from_secs(DOWNLOAD_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_image_key(mut self, image_key: impl Into<String>) -> Self {
        self.image_key = image_key.into();
        self
    }

    /// Sets both throttling delays. Tests use `Duration::ZERO`.
    pub fn with_delays(mut self, page_delay: Duration, download_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self.download_delay = download_delay;
        self
    }

    /// Sets the per-request timeouts of catalog pages and image downloads.
    pub fn with_timeouts(mut self, page_timeout: Duration, download_timeout: Duration) -> Self {
        self.page_timeout = page_timeout;
        self.download_timeout = download_timeout;
        self
    }
}
