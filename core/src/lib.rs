//! Synchronous API client core for the item manager.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The `ItemController` on top
//! keeps the UI state (list, input, edit target, loading/submitting flags,
//! error) and turns user actions into requests for the host to execute.
//!
//! # Design
//! - `ItemClient` is stateless — it holds only the collection URL.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - The controller's `begin_*` / `finish_*` pairs are deterministic, so
//!   every state transition is testable without a server.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod types;

pub use client::ItemClient;
pub use controller::{ItemController, ItemState, SubmitKind};
pub use error::{ApiError, Failure};
pub use http::{Exchange, HttpMethod, HttpRequest, HttpResponse};
pub use types::{Item, ItemError, ItemName, NameError, NewItem};
