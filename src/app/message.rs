// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::DeleteOutcome;
use crate::domain::pulse::PulseId;
use crate::ui::notifications;
use crate::ui::pulse_viewer;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(pulse_viewer::Message),
    /// Open the viewer on the feed, starting at this position.
    OpenViewer(usize),
    /// The store finished a delete requested by the viewer.
    DeleteCompleted {
        pulse: PulseId,
        outcome: DeleteOutcome,
    },
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Feed file to show.
    pub feed_path: Option<String>,
    /// Viewer identity; overrides `[identity] viewer_id` from the config.
    pub viewer_id: Option<String>,
    /// Open the viewer at this position on startup.
    pub index: Option<usize>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PULSE_VIEWER_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
