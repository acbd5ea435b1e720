//! One-shot acquisition of the picture on a background thread.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;

use crate::ui::events::AppEvent;

use super::raster::Raster;

/// The picture the app renders. Fetched exactly once at startup.
pub const PICTURE_URL: &str = "https://picsum.photos/seed/spinfade/256/256";

/// Where the picture comes from.
#[derive(Debug, Clone)]
pub enum PictureSource {
    Url(String),
    File(PathBuf),
}

impl Default for PictureSource {
    fn default() -> Self {
        Self::Url(PICTURE_URL.to_string())
    }
}

/// Errors for the single fallible operation in the app.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch picture: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read picture file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode picture: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to start fetch runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Fetch progress as seen by the UI thread.
#[derive(Debug, Clone, Default)]
pub enum PictureState {
    #[default]
    Loading,
    Ready(Raster),
    Failed(String),
}

/// Lightweight view of [`PictureState`] for status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureStatus {
    Loading,
    Ready,
    Failed,
}

impl PictureState {
    pub fn status(&self) -> PictureStatus {
        match self {
            PictureState::Loading => PictureStatus::Loading,
            PictureState::Ready(_) => PictureStatus::Ready,
            PictureState::Failed(_) => PictureStatus::Failed,
        }
    }
}

/// Shared slot the fetch thread fills and the renderer reads.
pub type PictureSlot = Arc<Mutex<PictureState>>;

/// Spawn the fetch thread.
///
/// The returned slot starts out `Loading`; the thread fills it with the
/// outcome and signals through the event channel so the UI redraws
/// without waiting for the next tick.
pub fn spawn_fetch(
    source: PictureSource,
    timeout: Duration,
    events: Sender<AppEvent>,
) -> PictureSlot {
    let slot: PictureSlot = Arc::new(Mutex::new(PictureState::Loading));
    let writer = Arc::clone(&slot);

    thread::spawn(move || match acquire(&source, timeout) {
        Ok(raster) => {
            tracing::info!(width = raster.width(), height = raster.height(), "picture ready");
            *writer.lock() = PictureState::Ready(raster);
            let _ = events.send(AppEvent::PictureReady);
        }
        Err(err) => {
            tracing::warn!(error = %err, "picture fetch failed");
            let message = err.to_string();
            *writer.lock() = PictureState::Failed(message.clone());
            let _ = events.send(AppEvent::PictureError(message));
        }
    });

    slot
}

fn acquire(source: &PictureSource, timeout: Duration) -> Result<Raster, FetchError> {
    let bytes = match source {
        PictureSource::Url(url) => fetch_bytes(url, timeout)?,
        PictureSource::File(path) => fs::read(path).map_err(|e| FetchError::Io {
            path: path.clone(),
            source: e,
        })?,
    };
    Ok(Raster::decode(&bytes)?)
}

/// Single GET on a throwaway current-thread runtime. The app has exactly
/// one network interaction, so no client or runtime outlives it.
fn fetch_bytes(url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(FetchError::Runtime)?;

    runtime.block_on(async {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let response = client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    })
}
