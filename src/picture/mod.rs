//! One-shot picture acquisition and pixel access.

mod fetch;
mod raster;

pub use fetch::{
    spawn_fetch, FetchError, PictureSlot, PictureSource, PictureState, PictureStatus, PICTURE_URL,
};
pub use raster::Raster;
