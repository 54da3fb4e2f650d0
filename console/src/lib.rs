//! Terminal host for the item manager.
//!
//! The core never touches the network; this crate executes its requests
//! with `ureq`, renders the state as text and maps typed commands onto
//! controller operations.

pub mod command;
pub mod session;
pub mod transport;
pub mod view;

pub use command::{Command, CommandError};
pub use session::{Session, SessionError};
pub use transport::{Transport, UreqTransport};

/// Collection URL used when neither `--base-url` nor `ITEM_API_URL` is set.
/// Matches the mock server's defaults.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/api/items";
