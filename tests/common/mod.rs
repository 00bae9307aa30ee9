//! Shared fixtures for integration tests
//!
//! In-memory stand-ins for the data service and the sprite host, with call
//! counters so tests can check that work is not repeated.

#![allow(dead_code)]

use async_trait::async_trait;
use image::{ImageOutputFormat, Rgba, RgbaImage};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use teamsprite::image_cache::{ImageCache, ImageLoadError, ImageSource};
use teamsprite::models::{SpriteUrls, TeamEntry};
use teamsprite::repository::{NamedRef, PokemonRepository, RepositoryError};

pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub const GOLD: Rgba<u8> = Rgba([255, 200, 0, 255]);

/// Encode a solid square as PNG bytes.
pub fn png_bytes(size: u32, color: Rgba<u8>) -> Vec<u8> {
    let img = RgbaImage::from_pixel(size, size, color);
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .expect("PNG encoding should succeed");
    bytes
}

/// Entry whose sprite URLs point into the fake sprite host.
pub fn entry(id: u32, name: &str) -> TeamEntry {
    TeamEntry {
        id,
        name: name.to_string(),
        sprites: SpriteUrls {
            default: Some(format!("mem://{}/default", id)),
            shiny: Some(format!("mem://{}/shiny", id)),
            artwork: Some(format!("mem://{}/artwork", id)),
        },
        types: vec!["normal".to_string()],
    }
}

/// Sprite host backed by a URL map. Unknown URLs answer with HTTP 404.
#[derive(Default)]
pub struct MemoryImageSource {
    images: Mutex<HashMap<String, Vec<u8>>>,
    calls: Mutex<HashMap<String, usize>>,
    total: AtomicUsize,
}

impl MemoryImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve every variant of `entry` as a solid square of `color`.
    pub fn with_entry(self, entry: &TeamEntry, color: Rgba<u8>) -> Self {
        for url in [&entry.sprites.default, &entry.sprites.shiny, &entry.sprites.artwork]
            .into_iter()
            .flatten()
        {
            self.insert(url, png_bytes(96, color));
        }
        self
    }

    pub fn insert(&self, url: &str, bytes: Vec<u8>) {
        self.images.lock().unwrap().insert(url.to_string(), bytes);
    }

    pub fn remove(&self, url: &str) {
        self.images.lock().unwrap().remove(url);
    }

    pub fn calls_for(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageSource for MemoryImageSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageLoadError> {
        self.total.fetch_add(1, Ordering::SeqCst);
        *self.calls.lock().unwrap().entry(url.to_string()).or_default() += 1;
        // Give other tasks a chance to observe the in-flight load
        tokio::task::yield_now().await;

        let found = self.images.lock().unwrap().get(url).cloned();
        found.ok_or_else(|| ImageLoadError::Status { url: url.to_string(), status: 404 })
    }
}

/// Data service backed by a fixed list of entries.
pub struct MemoryRepository {
    entries: Vec<TeamEntry>,
    lookups: AtomicUsize,
}

impl MemoryRepository {
    pub fn new(entries: Vec<TeamEntry>) -> Self {
        Self { entries, lookups: AtomicUsize::new(0) }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PokemonRepository for MemoryRepository {
    async fn list_names(&self, page_limit: u32) -> Result<Vec<NamedRef>, RepositoryError> {
        Ok(self
            .entries
            .iter()
            .take(page_limit as usize)
            .map(|e| NamedRef { name: e.name.clone(), ref_url: format!("mem://pokemon/{}/", e.id) })
            .collect())
    }

    async fn fetch_by_name_or_id(&self, key: &str) -> Result<TeamEntry, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.entries
            .iter()
            .find(|e| e.matches_key(key))
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(key.trim().to_lowercase()))
    }
}

/// Six distinct entries, each with all variants served in its own color.
pub fn kanto_team() -> (Vec<TeamEntry>, Arc<MemoryImageSource>) {
    let names = ["bulbasaur", "charmander", "squirtle", "pikachu", "eevee", "snorlax"];
    let ids = [1, 4, 7, 25, 133, 143];
    let entries: Vec<TeamEntry> = ids.iter().zip(names).map(|(&id, name)| entry(id, name)).collect();

    let mut source = MemoryImageSource::new();
    for e in &entries {
        source = source.with_entry(e, RED);
    }
    (entries, Arc::new(source))
}

pub fn cache_for(source: &Arc<MemoryImageSource>) -> ImageCache {
    ImageCache::new(source.clone())
}
