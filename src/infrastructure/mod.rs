// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! - [`feed`]: TOML feed file, and [`FeedStore`] implementing [`PulseStore`]
//!   on top of it
//!
//! [`PulseStore`]: crate::application::port::PulseStore

pub mod feed;

pub use feed::{Feed, FeedStore};
