// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: components own
//! their state, handle their own messages, and return effects for the
//! application to carry out.
//!
//! - [`pulse_viewer`] - the full-window pulse overlay
//! - [`notifications`] - toasts shown by the host window
//! - [`styles`] - centralized widget styles (buttons, containers)
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod pulse_viewer;
pub mod styles;
pub mod theming;
