//! Core update model + decoding logic for the Bale Bot API.
//!
//! This crate is intentionally transport-agnostic. It turns raw JSON payloads
//! (already parsed into [`serde_json::Value`]) into typed, immutable entities;
//! the outward API client lives behind a port (trait) implemented by adapter
//! crates or the embedding application.
//!
//! ```no_run
//! use bale_core::{ApiHandle, FromPayload, Update};
//!
//! # fn demo(api: ApiHandle, raw: serde_json::Value) -> bale_core::Result<()> {
//! match Update::decode(Some(raw), &api)? {
//!     Some(update) => println!("got update {:?}", update.update_id),
//!     None => println!("empty payload, nothing to dispatch"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod errors;
pub mod logging;
pub mod payload;
pub mod port;
pub mod sequence;
pub mod types;
pub mod update;

pub use errors::{Error, Result};
pub use payload::FromPayload;
pub use port::{ApiHandle, ApiPort};
pub use sequence::UpdateSequencer;
pub use types::{CallbackQuery, Chat, Message, PreCheckoutQuery, User};
pub use update::{Update, UpdateKind};
