// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Videos start playing as soon as they are shown.
pub const DEFAULT_AUTOPLAY_VIDEO: bool = true;

/// Captions are drawn over the bottom of the media surface.
pub const DEFAULT_SHOW_CAPTIONS: bool = true;

/// Clicking the dimmed backdrop dismisses the overlay.
pub const DEFAULT_CLOSE_ON_BACKDROP: bool = true;

/// Arrow keys, Escape and Delete drive the overlay.
pub const DEFAULT_KEYBOARD_NAVIGATION: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
