//! Critique API Types
//!
//! Typed models of the REST payloads the review UI consumes: accounts,
//! changes, server configuration, and plugin-contributed top menus. The
//! view-model crate projects these into renderable state; the HTTP layer
//! that fetches them is an external collaborator.
//!
//! All wire fields are optional-with-defaults: a partial payload
//! deserializes to a usable model rather than failing.

pub mod account;
pub mod change;
pub mod config;
pub mod error;
pub mod menu;

pub use account::{Account, AccountKey};
pub use change::{Change, Revision, ReviewerState};
pub use config::ServerConfig;
pub use error::PayloadError;
pub use menu::{TopMenuEntry, TopMenuItem};
