// SPDX-License-Identifier: MPL-2.0
//! Toast notifications shown by the host window.
//!
//! The viewer overlay never reports failures itself; the host turns store and
//! config errors into notifications here.
//!
//! - [`notification`] - `Notification` and `Severity`
//! - [`manager`] - queue with a cap on visible toasts and timed expiry
//! - [`toast`] - rendering

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
