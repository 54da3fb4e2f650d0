//! Drives the `ItemController` through a `Transport`.
//!
//! Every action runs begin → execute → finish on the controller, then
//! executes the refresh a successful mutation asks for. Requests go out one
//! at a time, so the submit guard never trips here; it only matters for
//! hosts that overlap round-trips.

use item_core::{HttpRequest, Item, ItemClient, ItemController, ItemState};
use tracing::info;

use crate::command::Command;
use crate::transport::Transport;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no item at position {0}")]
    NoSuchItem(usize),
}

pub struct Session<T> {
    controller: ItemController,
    transport: T,
}

impl<T: Transport> Session<T> {
    pub fn new(client: ItemClient, transport: T) -> Self {
        Self {
            controller: ItemController::new(client),
            transport,
        }
    }

    pub fn state(&self) -> &ItemState {
        self.controller.state()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run one parsed command. `Help` and `Quit` belong to the caller and
    /// are ignored here.
    pub fn apply(&mut self, command: Command) -> Result<(), SessionError> {
        match command {
            Command::Set(text) => self.controller.set_input(text),
            Command::Submit => self.submit(),
            Command::Add(text) => {
                self.controller.set_input(text);
                self.submit();
            }
            Command::Edit(position) => self.edit(position)?,
            Command::Cancel => self.controller.cancel_edit(),
            Command::Delete(position) => self.delete(position)?,
            Command::Refresh => self.refresh(),
            Command::Help | Command::Quit => {}
        }
        Ok(())
    }

    pub fn refresh(&mut self) {
        let request = self.controller.begin_refresh();
        self.complete_refresh(request);
    }

    pub fn submit(&mut self) {
        let Some(request) = self.controller.begin_submit() else {
            return;
        };
        let exchange = self.transport.execute(request);
        if let Some(next) = self.controller.finish_submit(exchange) {
            info!("item saved");
            self.complete_refresh(next);
        }
    }

    pub fn edit(&mut self, position: usize) -> Result<(), SessionError> {
        let item = self.item_at(position)?.clone();
        self.controller.begin_edit(&item);
        Ok(())
    }

    pub fn delete(&mut self, position: usize) -> Result<(), SessionError> {
        let id = self.item_at(position)?.id.clone();
        let request = self.controller.begin_delete(&id);
        let exchange = self.transport.execute(request);
        if let Some(next) = self.controller.finish_delete(exchange) {
            info!(%id, "item deleted");
            self.complete_refresh(next);
        }
        Ok(())
    }

    fn complete_refresh(&mut self, request: HttpRequest) {
        let exchange = self.transport.execute(request);
        self.controller.finish_refresh(exchange);
    }

    fn item_at(&self, position: usize) -> Result<&Item, SessionError> {
        position
            .checked_sub(1)
            .and_then(|index| self.state().items.get(index))
            .ok_or(SessionError::NoSuchItem(position))
    }
}
