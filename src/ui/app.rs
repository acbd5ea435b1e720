use std::time::{Duration, Instant};

use crate::config::Config;
use crate::mvi::Store;
use crate::picture::{PictureSlot, PictureStatus};
use crate::transform::{TransformIntent, TransformReducer, TransformState};

/// Top-level UI state: the transform store plus presentation-only bits.
pub struct App {
    should_quit: bool,
    /// The single source of truth for the picture transform.
    store: Store<TransformReducer>,
    /// Shared slot the fetch thread fills (resource, managed outside MVI).
    picture: Option<PictureSlot>,
    /// Most recent intent with its press time, for the controls highlight.
    last_pressed: Option<(TransformIntent, Instant)>,
    highlight_for: Duration,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut store = Store::default();
        store.subscribe(|state: &TransformState| {
            tracing::debug!(
                rotation = state.rotation_degrees,
                alpha = state.alpha,
                "state replaced"
            );
        });

        Self {
            should_quit: false,
            store,
            picture: None,
            last_pressed: None,
            highlight_for: config.tick_rate(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Current transform snapshot.
    pub fn transform(&self) -> &TransformState {
        self.store.state()
    }

    /// Route an intent through the store.
    pub fn dispatch(&mut self, intent: TransformIntent) {
        self.store.dispatch(intent);
        self.last_pressed = Some((intent, Instant::now()));
    }

    /// Attach the shared picture slot. Called once at startup.
    pub fn attach_picture(&mut self, slot: PictureSlot) {
        self.picture = Some(slot);
    }

    pub fn picture(&self) -> Option<&PictureSlot> {
        self.picture.as_ref()
    }

    pub fn picture_status(&self) -> PictureStatus {
        match &self.picture {
            Some(slot) => slot.lock().status(),
            None => PictureStatus::Loading,
        }
    }

    /// Button highlighted in the controls row, if a press is fresh enough.
    pub fn active_button(&self) -> Option<TransformIntent> {
        let (intent, at) = self.last_pressed?;
        (at.elapsed() < self.highlight_for).then_some(intent)
    }

    pub fn on_tick(&mut self) {
        if let Some((_, at)) = self.last_pressed {
            if at.elapsed() >= self.highlight_for {
                self.last_pressed = None;
            }
        }
    }
}
