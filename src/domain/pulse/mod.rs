// SPDX-License-Identifier: MPL-2.0
//! Pulse domain types.
//!
//! A pulse is a short-lived media post. The viewer never mutates one; it only
//! reads it and reports deletion intent back to the owner of the sequence.

pub mod media_kind;
pub mod types;

pub use media_kind::{MediaKind, VIDEO_EXTENSIONS};
pub use types::{AuthorInfo, Pulse, PulseId, Timestamp, UserId};
