// SPDX-License-Identifier: MPL-2.0
//! Application layer - Capabilities the viewer depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure (the feed store, the identity source) implements the ports
//! - Presentation layer (the viewer overlay) only sees the traits
//!
//! # Example
//!
//! ```
//! use pulse_viewer::application::port::{IdentityProvider, StaticIdentity};
//! use pulse_viewer::domain::pulse::UserId;
//!
//! let identity = StaticIdentity::signed_in(UserId::new("alice"));
//! assert_eq!(identity.current_viewer(), Some(UserId::new("alice")));
//! ```

pub mod port;
