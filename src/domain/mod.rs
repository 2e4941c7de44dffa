// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core pulse types.
//!
//! Pure value objects and business rules. Nothing here touches the UI or the
//! file system; the only external crate used is `chrono`, for timestamps.
//!
//! # Modules
//!
//! - [`pulse`]: Pulse types ([`Pulse`](pulse::Pulse), [`PulseId`](pulse::PulseId),
//!   [`UserId`](pulse::UserId), [`AuthorInfo`](pulse::AuthorInfo),
//!   [`MediaKind`](pulse::MediaKind), [`Timestamp`](pulse::Timestamp))

pub mod pulse;
