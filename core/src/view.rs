//! List view: a three-state lifecycle around a single fetch.
//!
//! # Design
//! `ViewState` is a tagged union, so a view can never be loading and failed
//! at once. The state lives in a `tokio::sync::watch` channel: the fetch task
//! writes the one transition out of `Pending`, hosts read it with `render()`
//! and learn about the transition through `subscribe()`.
//!
//! `stop()` flips the active flag while holding the channel's write lock, and
//! the fetch task checks the flag under that same lock. Teardown and
//! resolution are therefore ordered: once `stop()` returns, a late result
//! can neither change the state nor wake a subscriber.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::adapter::FundraiserSource;
use crate::config::CURRENCY_SYMBOL;
use crate::error::ApiError;
use crate::types::FundraiserRecord;

pub const LOADING_TEXT: &str = "Loading…";
pub const UNAVAILABLE_TEXT: &str = "Data Unavailable";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Pending,
    Loaded(Vec<FundraiserRecord>),
    /// The reason is intentionally not kept.
    Failed,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Pending)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Failed)
    }

    pub fn records(&self) -> Option<&[FundraiserRecord]> {
        match self {
            ViewState::Loaded(records) => Some(records),
            _ => None,
        }
    }

    /// Pure projection of the state into what should be on screen.
    pub fn render(&self) -> Rendered {
        match self {
            ViewState::Pending => Rendered::Loading,
            ViewState::Failed => Rendered::Unavailable,
            ViewState::Loaded(records) => Rendered::List(
                records
                    .iter()
                    .enumerate()
                    .map(|(key, record)| ListItem {
                        key,
                        text: format!("{CURRENCY_SYMBOL}{} - {}", record.amount, record.name),
                    })
                    .collect(),
            ),
        }
    }
}

/// One rendered row. `key` is the row's position, never its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub key: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Loading,
    Unavailable,
    List(Vec<ListItem>),
}

impl Rendered {
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Loading => f.write_str(LOADING_TEXT),
            Rendered::Unavailable => f.write_str(UNAVAILABLE_TEXT),
            Rendered::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    f.write_str(&item.text)?;
                }
                Ok(())
            }
        }
    }
}

struct Shared {
    state: watch::Sender<ViewState>,
    // Written only while holding `state`'s write lock.
    active: AtomicBool,
}

/// A mounted leaderboard view.
///
/// Created active by [`ListView::start`], which must run inside a tokio
/// runtime. Dropping the view tears it down.
pub struct ListView {
    shared: Arc<Shared>,
    fetch: Option<JoinHandle<()>>,
}

impl ListView {
    /// Mount the view in `Pending` and issue the single fetch.
    pub fn start<S>(source: Arc<S>) -> Self
    where
        S: FundraiserSource + ?Sized + 'static,
    {
        let (state, _) = watch::channel(ViewState::Pending);
        let shared = Arc::new(Shared {
            state,
            active: AtomicBool::new(true),
        });

        let task_shared = Arc::clone(&shared);
        let fetch = tokio::spawn(async move {
            let outcome = source.fetch_fundraisers().await;
            resolve(&task_shared, outcome);
        });

        Self {
            shared,
            fetch: Some(fetch),
        }
    }

    /// Tear the view down. Any result still in flight is discarded.
    pub fn stop(&self) {
        self.shared.state.send_if_modified(|_| {
            self.shared.active.store(false, Ordering::SeqCst);
            false
        });
    }

    pub fn is_active(&self) -> bool {
        self.shared.active.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> ViewState {
        self.shared.state.borrow().clone()
    }

    pub fn render(&self) -> Rendered {
        self.shared.state.borrow().render()
    }

    /// Receiver that is notified when the view leaves `Pending`.
    ///
    /// The current state counts as already seen, so check `borrow()` (or
    /// use `wait_for`) rather than relying on `changed()` alone.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.shared.state.subscribe()
    }

    /// Wait for the fetch task to finish, whether or not its result applied.
    pub async fn settled(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            if let Err(e) = fetch.await {
                tracing::warn!(error = %e, "fetch task ended abnormally");
            }
        }
    }
}

impl Drop for ListView {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("state", &*self.shared.state.borrow())
            .field("active", &self.is_active())
            .finish()
    }
}

fn resolve(shared: &Shared, outcome: Result<Vec<FundraiserRecord>, ApiError>) {
    if let Err(e) = &outcome {
        tracing::warn!(error = %e, "fundraiser fetch failed");
    }
    let applied = shared.state.send_if_modified(|state| {
        if !shared.active.load(Ordering::SeqCst) || !state.is_loading() {
            return false;
        }
        *state = match outcome {
            Ok(records) => ViewState::Loaded(records),
            Err(_) => ViewState::Failed,
        };
        true
    });
    if !applied {
        tracing::debug!("view no longer active, discarding fetch result");
    }
}
