// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits describe the external collaborators of the pulse viewer.
//! They use only domain types so the viewer can be driven by tests with
//! in-memory substitutes.
//!
//! # Available Ports
//!
//! - [`identity`]: Who the current viewer is
//! - [`pulse_store`]: The delete operation on the pulse sequence owner
//!
//! # Design Notes
//!
//! - No `async fn` - callers wrap the blocking call in an Iced `Task`
//! - Methods return `Result` with domain error types
//! - Traits are `Send + Sync` so they can move into background tasks

pub mod identity;
pub mod pulse_store;

pub use identity::{IdentityProvider, StaticIdentity};
pub use pulse_store::{DeleteOutcome, PulseStore};
