//! Per-entry sprite cache with idempotent asynchronous loading
//!
//! Each roster entry owns a bucket holding one slot per [`Variant`]. A slot is
//! moved to `Loading` under the cache lock before any await point, so
//! concurrent [`ImageCache::ensure_loaded`] calls for the same entry share a
//! single in-flight fetch per variant. Failures are recorded in the slot and
//! never returned to the caller.

use async_trait::async_trait;
use futures::future::{join_all, BoxFuture, FutureExt, Shared};
use image::RgbaImage;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;

use crate::models::{TeamEntry, Variant};

/// Error while fetching or decoding one sprite
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageLoadError {
    #[error("request for {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("request for {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode image from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Where sprite bytes come from.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch the encoded image stored at `url`.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageLoadError>;
}

/// Downloads sprites over HTTP.
#[derive(Debug, Clone)]
pub struct HttpImageSource {
    client: reqwest::Client,
}

impl HttpImageSource {
    pub fn new(timeout_ms: u64) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(Duration::from_millis(timeout_ms)).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageLoadError> {
        let network = |e: reqwest::Error| ImageLoadError::Network {
            url: url.to_string(),
            message: e.to_string(),
        };
        let response = self.client.get(url).send().await.map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageLoadError::Status { url: url.to_string(), status: status.as_u16() });
        }
        let bytes = response.bytes().await.map_err(network)?;
        Ok(bytes.to_vec())
    }
}

/// Observable state of one (entry, variant) slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotRequested,
    Loading,
    Loaded,
    Failed,
}

type PendingLoad = Shared<BoxFuture<'static, Option<Arc<RgbaImage>>>>;

enum Slot {
    Loading(PendingLoad),
    Loaded(Arc<RgbaImage>),
    Failed,
}

type Bucket = HashMap<Variant, Slot>;

/// Loaded sprites keyed by entry id and variant.
pub struct ImageCache {
    source: Arc<dyn ImageSource>,
    buckets: Mutex<HashMap<u32, Bucket>>,
}

impl ImageCache {
    pub fn new(source: Arc<dyn ImageSource>) -> Self {
        Self { source, buckets: Mutex::new(HashMap::new()) }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<u32, Bucket>> {
        self.buckets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load every variant of `entry` that has not been loaded or failed yet.
    ///
    /// Resolves once all three variants have settled. Variants already in
    /// flight from an earlier call are awaited rather than fetched again.
    pub async fn ensure_loaded(&self, entry: &TeamEntry) {
        let pending: Vec<(Variant, PendingLoad)> = {
            let mut buckets = self.lock();
            let bucket = buckets.entry(entry.id).or_default();
            let mut pending = Vec::new();

            for variant in Variant::ALL {
                match bucket.get(&variant) {
                    Some(Slot::Loaded(_)) | Some(Slot::Failed) => {}
                    Some(Slot::Loading(load)) => pending.push((variant, load.clone())),
                    None => match entry.sprites.url(variant) {
                        Some(url) => {
                            let load = self.start_load(entry.id, variant, url);
                            bucket.insert(variant, Slot::Loading(load.clone()));
                            pending.push((variant, load));
                        }
                        None => {
                            tracing::debug!(id = entry.id, %variant, "no sprite url, marking failed");
                            bucket.insert(variant, Slot::Failed);
                        }
                    },
                }
            }
            pending
        };

        if pending.is_empty() {
            return;
        }

        let settled = join_all(pending.into_iter().map(|(variant, load)| async move {
            let result = load.clone().await;
            (variant, load, result)
        }))
        .await;

        let mut buckets = self.lock();
        // The bucket may have been evicted while we were waiting; late results are dropped
        let Some(bucket) = buckets.get_mut(&entry.id) else {
            tracing::debug!(id = entry.id, "bucket evicted before loads settled");
            return;
        };
        for (variant, load, result) in settled {
            if let Some(slot) = bucket.get_mut(&variant) {
                // Only settle the load we awaited, not a newer one started after an eviction
                if matches!(slot, Slot::Loading(current) if current.ptr_eq(&load)) {
                    *slot = match result {
                        Some(image) => Slot::Loaded(image),
                        None => Slot::Failed,
                    };
                }
            }
        }
    }

    fn start_load(&self, id: u32, variant: Variant, url: &str) -> PendingLoad {
        let source = Arc::clone(&self.source);
        let url = url.to_string();
        tracing::debug!(id, %variant, %url, "loading sprite");
        async move {
            let decoded = match source.fetch(&url).await {
                Ok(bytes) => image::load_from_memory(&bytes)
                    .map(|img| Arc::new(img.to_rgba8()))
                    .map_err(|e| ImageLoadError::Decode { url: url.clone(), message: e.to_string() }),
                Err(e) => Err(e),
            };
            match decoded {
                Ok(image) => Some(image),
                Err(e) => {
                    tracing::warn!(id, %variant, "sprite unavailable: {}", e);
                    None
                }
            }
        }
        .boxed()
        .shared()
    }

    /// The decoded sprite, if that variant finished loading successfully.
    pub fn get(&self, id: u32, variant: Variant) -> Option<Arc<RgbaImage>> {
        match self.lock().get(&id)?.get(&variant)? {
            Slot::Loaded(image) => Some(Arc::clone(image)),
            _ => None,
        }
    }

    pub fn state(&self, id: u32, variant: Variant) -> LoadState {
        match self.lock().get(&id).and_then(|bucket| bucket.get(&variant)) {
            None => LoadState::NotRequested,
            Some(Slot::Loading(_)) => LoadState::Loading,
            Some(Slot::Loaded(_)) => LoadState::Loaded,
            Some(Slot::Failed) => LoadState::Failed,
        }
    }

    /// Drop everything cached for `id`.
    pub fn evict(&self, id: u32) {
        if self.lock().remove(&id).is_some() {
            tracing::debug!(id, "evicted sprite bucket");
        }
    }

    /// Number of entries with a bucket.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache").field("buckets", &self.len()).finish()
    }
}
