//! Client-side sync controller for the item list.
//!
//! # Design
//! `ItemController` owns an `ItemState` and an `ItemClient`. Every network
//! operation is split in two synchronous steps: `begin_*` updates the flags
//! and returns the `HttpRequest` to execute, `finish_*` consumes the host's
//! `Exchange` and settles the state. A successful mutation hands back the
//! follow-up refresh request instead of patching the list locally, so the
//! list always mirrors the last successful fetch.
//!
//! Nothing is queued or cancelled. Two refreshes may be in flight at once;
//! whichever finishes last overwrites the list.

use tracing::{debug, error, warn};

use crate::client::ItemClient;
use crate::error::{ApiError, Failure};
use crate::http::{Exchange, HttpRequest};
use crate::types::{Item, ItemName, NewItem};

/// Which request a submission issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    Create,
    Update,
}

impl SubmitKind {
    fn failure(self) -> Failure {
        match self {
            SubmitKind::Create => Failure::Create,
            SubmitKind::Update => Failure::Update,
        }
    }
}

/// Everything the UI renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemState {
    /// Items from the last successful fetch.
    pub items: Vec<Item>,
    /// Contents of the name input.
    pub input: String,
    /// Id of the item being edited, if any.
    pub edit_target: Option<String>,
    pub loading: bool,
    /// Set while a create or update is in flight.
    pub submitting: Option<SubmitKind>,
    pub error: Option<Failure>,
}

impl ItemState {
    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.input.trim().is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Item"
        } else {
            "Add Item"
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(Failure::message)
    }
}

#[derive(Debug, Clone)]
pub struct ItemController {
    client: ItemClient,
    state: ItemState,
}

impl ItemController {
    pub fn new(client: ItemClient) -> Self {
        Self {
            client,
            state: ItemState::default(),
        }
    }

    pub fn state(&self) -> &ItemState {
        &self.state
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.input = text.into();
    }

    pub fn begin_refresh(&mut self) -> HttpRequest {
        self.state.loading = true;
        self.state.error = None;
        self.client.build_list_items()
    }

    /// Replace the list on success; keep it and flag `Failure::Fetch`
    /// otherwise. `loading` is cleared either way.
    pub fn finish_refresh(&mut self, exchange: Exchange) {
        self.state.loading = false;
        match exchange.and_then(|response| self.client.parse_list_items(response)) {
            Ok(items) => {
                debug!(count = items.len(), "item list refreshed");
                self.state.items = items;
                self.state.error = None;
            }
            Err(e) => self.fail(Failure::Fetch, &e),
        }
    }

    /// Start a create, or an update when an edit target is set.
    ///
    /// Returns `None` without touching the state when the trimmed input is
    /// empty or another submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<HttpRequest> {
        if self.state.is_submitting() {
            debug!("submit ignored: a submission is already in flight");
            return None;
        }
        let name = ItemName::new(&self.state.input).ok()?;
        let payload = NewItem::from(name);

        let (kind, built) = match self.state.edit_target.as_deref() {
            Some(id) => (SubmitKind::Update, self.client.build_update_item(id, &payload)),
            None => (SubmitKind::Create, self.client.build_create_item(&payload)),
        };
        self.state.error = None;
        match built {
            Ok(request) => {
                self.state.submitting = Some(kind);
                Some(request)
            }
            Err(e) => {
                self.fail(kind.failure(), &e);
                None
            }
        }
    }

    /// Settle a submission. On success the input and edit target are cleared
    /// and the refresh request to execute next is returned.
    pub fn finish_submit(&mut self, exchange: Exchange) -> Option<HttpRequest> {
        let Some(kind) = self.state.submitting.take() else {
            warn!("finish_submit called with no submission in flight");
            return None;
        };
        let parsed = exchange.and_then(|response| match kind {
            SubmitKind::Create => self.client.parse_create_item(response),
            SubmitKind::Update => self.client.parse_update_item(response),
        });
        match parsed {
            Ok(()) => {
                self.state.input.clear();
                self.state.edit_target = None;
                Some(self.begin_refresh())
            }
            Err(e) => {
                self.fail(kind.failure(), &e);
                None
            }
        }
    }

    pub fn begin_edit(&mut self, item: &Item) {
        self.state.edit_target = Some(item.id.clone());
        self.state.input = item.name.clone();
    }

    pub fn cancel_edit(&mut self) {
        self.state.edit_target = None;
        self.state.input.clear();
    }

    pub fn begin_delete(&mut self, id: &str) -> HttpRequest {
        self.state.error = None;
        self.client.build_delete_item(id)
    }

    /// Settle a delete. On success the refresh request is returned.
    pub fn finish_delete(&mut self, exchange: Exchange) -> Option<HttpRequest> {
        match exchange.and_then(|response| self.client.parse_delete_item(response)) {
            Ok(()) => Some(self.begin_refresh()),
            Err(e) => {
                self.fail(Failure::Delete, &e);
                None
            }
        }
    }

    fn fail(&mut self, failure: Failure, cause: &ApiError) {
        error!(error = %cause, "{}", failure.message());
        self.state.error = Some(failure);
    }
}
