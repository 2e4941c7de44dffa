// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use crate::ui::pulse_viewer;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Routes key presses to the viewer while it is open.
///
/// Only events no widget captured are forwarded.
pub fn create_keyboard_subscription(viewer_open: bool) -> Subscription<Message> {
    if !viewer_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => Some(Message::Viewer(pulse_viewer::Message::KeyPressed(key))),
        _ => None,
    })
}

/// Ticks while notifications are on screen so they can expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(250))
            .map(|now| Message::Notification(NotificationMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}
