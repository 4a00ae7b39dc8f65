// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: the collection rendered as a three-column grid.
//!
//! # Synchronization modes
//!
//! The gallery observes the collection in one of two explicit modes:
//!
//! - [`SyncMode::Live`] (default): the gallery renders straight from the
//!   collection owned by the application. Appends and deletions are visible
//!   immediately; there is nothing to reconcile.
//! - [`SyncMode::Snapshot`]: the gallery copies the collection when the
//!   screen gains focus and renders the copy. Confirmed deletions are
//!   applied to the copy optimistically *and* forwarded to the owner via
//!   [`Event::Delete`]. Images appended after the snapshot was taken stay
//!   invisible until the next focus - that staleness is the documented
//!   cost of the mode, not a bug.
//!
//! # Deletion
//!
//! A cell must be pressed and held for [`LONG_PRESS`] before the
//! confirmation prompt opens; the prompt offers exactly cancel and delete.
//! The confirmed index was frozen when the prompt was built, so the owner
//! treats an out-of-range index as a stale no-op.

mod view;

pub use view::{view, ViewContext};

use crate::collection::{ImageCollection, ImageRef};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Number of grid columns. Fixed; the cell size absorbs viewport changes.
pub const COLUMNS: usize = 3;

/// Margin on each side of a cell.
pub const CELL_MARGIN: f32 = 5.0;

/// Padding around the whole grid.
pub const GRID_PADDING: f32 = 15.0;

/// Hold duration that turns a press into a delete request.
pub const LONG_PRESS: Duration = Duration::from_millis(500);

/// Cell edge length for a given viewport width.
///
/// Pure function of the width; computed once when the screen is mounted.
#[must_use]
pub fn cell_size(viewport_width: f32) -> f32 {
    let total_margin = 2.0 * GRID_PADDING + COLUMNS as f32 * 2.0 * CELL_MARGIN;
    ((viewport_width - total_margin) / COLUMNS as f32).max(0.0)
}

/// How the gallery observes the collection. See the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    #[default]
    Live,
    Snapshot,
}

#[derive(Debug, Clone, Copy)]
struct PressedCell {
    index: usize,
    at: Instant,
}

/// Gallery screen state.
#[derive(Debug)]
pub struct State {
    mode: SyncMode,
    /// Local copy, only populated in snapshot mode.
    snapshot: Option<Vec<ImageRef>>,
    /// Cell edge length, frozen at mount time.
    cell_size: f32,
    pressed: Option<PressedCell>,
    /// Index awaiting confirmation, frozen at prompt-build time.
    confirm: Option<usize>,
}

/// Messages emitted by the gallery widgets.
#[derive(Debug, Clone)]
pub enum Message {
    CellPressed(usize),
    CellReleased(usize),
    /// Gesture-independent prompt request (assistive input paths).
    DeleteRequested(usize),
    DeleteConfirmed,
    DeleteCancelled,
    BackRequested,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Delete the element that was at `index` when the prompt opened.
    /// The owner swallows out-of-range indices.
    Delete(usize),
    /// Navigate back to the capture screen.
    Back,
}

impl Default for State {
    fn default() -> Self {
        Self::new(SyncMode::default())
    }
}

impl State {
    #[must_use]
    pub fn new(mode: SyncMode) -> Self {
        Self {
            mode,
            snapshot: None,
            cell_size: 0.0,
            pressed: None,
            confirm: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> SyncMode {
        self.mode
    }

    /// Prepares the screen for display: freezes the cell size for this
    /// visit and drops any leftover interaction state.
    pub fn mount(&mut self, viewport_width: f32) {
        self.cell_size = cell_size(viewport_width);
        self.pressed = None;
        self.confirm = None;
    }

    /// Hook fired when the screen regains visibility.
    ///
    /// Snapshot mode refreshes its copy here; live mode has nothing to do.
    pub fn on_focus(&mut self, collection: &ImageCollection) {
        if self.mode == SyncMode::Snapshot {
            self.snapshot = Some(collection.snapshot());
        }
    }

    /// The images this gallery currently shows.
    #[must_use]
    pub fn items<'a>(&'a self, collection: &'a ImageCollection) -> &'a [ImageRef] {
        match self.mode {
            SyncMode::Live => collection.list(),
            SyncMode::Snapshot => self.snapshot.as_deref().unwrap_or(&[]),
        }
    }

    /// Number of images this gallery currently shows.
    #[must_use]
    pub fn count(&self, collection: &ImageCollection) -> usize {
        self.items(collection).len()
    }

    #[must_use]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Index currently awaiting delete confirmation, if any.
    #[must_use]
    pub fn pending_delete(&self) -> Option<usize> {
        self.confirm
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CellPressed(index) => {
                self.pressed = Some(PressedCell {
                    index,
                    at: Instant::now(),
                });
                Event::None
            }
            Message::CellReleased(index) => {
                if let Some(pressed) = self.pressed.take() {
                    if pressed.index == index && pressed.at.elapsed() >= LONG_PRESS {
                        self.confirm = Some(index);
                    }
                }
                Event::None
            }
            Message::DeleteRequested(index) => {
                self.pressed = None;
                self.confirm = Some(index);
                Event::None
            }
            Message::DeleteCancelled => {
                self.confirm = None;
                Event::None
            }
            Message::DeleteConfirmed => match self.confirm.take() {
                None => Event::None,
                Some(index) => {
                    if self.mode == SyncMode::Snapshot {
                        // Optimistic local removal; the owner hears about it
                        // through the event below.
                        if let Some(snapshot) = self.snapshot.as_mut() {
                            if index < snapshot.len() {
                                snapshot.remove(index);
                            }
                        }
                    }
                    Event::Delete(index)
                }
            },
            Message::BackRequested => {
                self.pressed = None;
                self.confirm = None;
                Event::Back
            }
        }
    }
}
