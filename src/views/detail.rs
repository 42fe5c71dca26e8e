//! Detail view of a single beer
//!
//! The view is a small state machine keyed by the bound beer id:
//!
//! ```text
//! Uninitialized ──set_beer_id──▶ Loading ──ok──▶ Loaded
//!                                   │
//!                                   └──err──▶ Failed
//! ```
//!
//! Every `set_beer_id` re-enters `Loading` and fetches again. Only the most
//! recent id may complete: a fetch that resolves after a newer `set_beer_id`
//! is dropped.

use crate::core::beer::Beer;
use crate::core::source::BeerSource;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// State of the detail view
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// No beer bound yet
    Uninitialized,

    /// Fetch in flight for `beer_id`
    Loading { beer_id: String },

    /// Record fetched; `current_image` is the image shown large
    Loaded { beer: Beer, current_image: String },

    /// Fetch for `beer_id` failed, nothing is shown
    Failed { beer_id: String },
}

impl DetailState {
    /// Id the view is bound to, if any
    pub fn beer_id(&self) -> Option<&str> {
        match self {
            DetailState::Uninitialized => None,
            DetailState::Loading { beer_id } | DetailState::Failed { beer_id } => Some(beer_id),
            DetailState::Loaded { beer, .. } => Some(&beer.id),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, DetailState::Loaded { .. })
    }
}

/// Which thumbnail was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageChoice {
    Main,
    Secondary,
}

/// Everything needed to draw a loaded detail page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailSnapshot {
    pub id: String,
    pub name: String,
    pub description: String,
    pub alcohol_content: f64,
    pub brewery: Option<String>,
    pub availability: Option<String>,
    pub style: Option<String>,
    pub serving_notes: Option<String>,
    pub current_image_url: String,
    pub main_image_url: String,
    pub secondary_image_url: Option<String>,
}

/// The detail view
pub struct DetailView {
    source: Arc<dyn BeerSource>,
    generation: AtomicU64,
    state: watch::Sender<DetailState>,
}

impl DetailView {
    pub fn new(source: Arc<dyn BeerSource>) -> Self {
        let (state, _) = watch::channel(DetailState::Uninitialized);
        Self {
            source,
            generation: AtomicU64::new(0),
            state,
        }
    }

    /// Current state
    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    /// Watch state transitions, e.g. to re-render on change
    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    /// Bind the view to `beer_id` and fetch its record
    ///
    /// Resolves once the fetch completes and returns the state at that point,
    /// which belongs to a newer id if another `set_beer_id` overtook this one.
    pub async fn set_beer_id(&self, beer_id: impl Into<String>) -> DetailState {
        let beer_id = beer_id.into();

        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = DetailState::Loading {
                beer_id: beer_id.clone(),
            };
        });
        tracing::debug!(beer_id = %beer_id, generation, "Loading beer details");

        let result = self.source.fetch_details(&beer_id).await;

        let next = match result {
            Ok(beer) => {
                let current_image = beer.image_ref.clone();
                DetailState::Loaded {
                    beer,
                    current_image,
                }
            }
            Err(e) => {
                tracing::warn!(
                    beer_id = %beer_id,
                    source = %self.source.describe(),
                    error = %e,
                    "Beer details fetch failed"
                );
                DetailState::Failed {
                    beer_id: beer_id.clone(),
                }
            }
        };

        // The generation is checked under the channel's lock, the same lock
        // a newer set_beer_id takes to bump it
        let applied = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *state = next;
            true
        });
        if !applied {
            tracing::debug!(beer_id = %beer_id, generation, "Discarding stale beer details");
        }

        self.state()
    }

    /// Unbind the view; any fetch in flight is discarded
    pub fn clear(&self) {
        self.state.send_modify(|state| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            *state = DetailState::Uninitialized;
        });
    }

    /// A thumbnail was clicked
    ///
    /// Returns whether the large image changed. Does nothing unless a record
    /// is loaded and has the requested image.
    pub fn select_image(&self, choice: ImageChoice) -> bool {
        self.state.send_if_modified(|state| {
            let DetailState::Loaded {
                beer,
                current_image,
            } = state
            else {
                return false;
            };

            let wanted = match choice {
                ImageChoice::Main => Some(&beer.image_ref),
                ImageChoice::Secondary => beer.secondary_image_ref.as_ref(),
            };
            match wanted {
                Some(image) if image != current_image => {
                    *current_image = image.clone();
                    true
                }
                _ => false,
            }
        })
    }

    /// Snapshot of the loaded record, `None` while nothing is shown
    pub fn render(&self) -> Option<DetailSnapshot> {
        let state = self.state.borrow();
        let DetailState::Loaded {
            beer,
            current_image,
        } = &*state
        else {
            return None;
        };

        Some(DetailSnapshot {
            id: beer.id.clone(),
            name: beer.display_name().to_string(),
            description: beer.description.clone(),
            alcohol_content: beer.alcohol_content,
            brewery: beer.brewery.clone(),
            availability: beer.availability.clone(),
            style: beer.style.clone(),
            serving_notes: beer.serving_notes.clone(),
            current_image_url: super::data_url("/data/", current_image),
            main_image_url: super::data_url("/data/", &beer.image_ref),
            secondary_image_url: beer
                .secondary_image_ref
                .as_deref()
                .map(|image| super::data_url("/data/", image)),
        })
    }
}

impl std::fmt::Debug for DetailView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailView")
            .field("source", &self.source.describe())
            .field("state", &*self.state.borrow())
            .finish()
    }
}
