// SPDX-License-Identifier: MPL-2.0
//! Update logic: routes messages and executes viewer effects.

use super::{App, Message};
use crate::application::port::{DeleteOutcome, PulseStore};
use crate::domain::pulse::{Pulse, PulseId};
use crate::error::DeleteError;
use crate::ui::notifications::Notification;
use crate::ui::pulse_viewer::{self, Effect};
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Viewer(viewer_message) => {
            let Some(viewer) = app.viewer.as_mut() else {
                return Task::none();
            };
            let effect = viewer.handle(viewer_message, app.identity.as_ref());
            app.apply_effect(effect)
        }
        Message::OpenViewer(index) => app.open_viewer(index),
        Message::DeleteCompleted { pulse, outcome } => {
            app.handle_delete_completed(&pulse, outcome)
        }
        Message::Notification(notification_message) => {
            app.notifications.handle_message(notification_message);
            Task::none()
        }
    }
}

impl App {
    pub(super) fn open_viewer(&mut self, index: usize) -> Task<Message> {
        let (state, effect) = pulse_viewer::State::open(&self.pulses, index, self.preferences);
        self.viewer = Some(state);
        self.apply_effect(effect)
    }

    /// Carries out what the viewer asked for.
    pub(super) fn apply_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::Close => {
                tracing::debug!("viewer closed");
                self.viewer = None;
                Task::none()
            }
            Effect::RequestDelete(pulse) => self.spawn_delete(pulse),
        }
    }

    fn spawn_delete(&mut self, pulse: Pulse) -> Task<Message> {
        let id = pulse.id().clone();
        // The viewer stays in flight and settles when the earlier request
        // for the same pulse completes.
        if !self.pending_deletes.insert(id.clone()) {
            tracing::debug!(pulse = %id, "delete already outstanding, not resubmitting");
            return Task::none();
        }
        let Some(store) = self.store.clone() else {
            return Task::done(Message::DeleteCompleted {
                pulse: id,
                outcome: Err(DeleteError::Storage("no feed is open".to_string())),
            });
        };
        let requested_by = self.identity.current_viewer();

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || store.delete(&pulse, requested_by.as_ref()))
                    .await
                    .unwrap_or_else(|err| Err(DeleteError::Storage(err.to_string())))
            },
            move |outcome: DeleteOutcome| Message::DeleteCompleted { pulse: id, outcome },
        )
    }

    /// Settles the viewer's delete, then publishes the updated feed to it.
    ///
    /// Runs even after the viewer closed: the store already applied the change.
    /// The viewer open now may not be the one that asked; it only settles
    /// when `pulse` is its own outstanding request, but it always reconciles.
    fn handle_delete_completed(
        &mut self,
        pulse: &PulseId,
        outcome: DeleteOutcome,
    ) -> Task<Message> {
        self.pending_deletes.remove(pulse);
        match &outcome {
            Ok(()) => {
                self.pulses.retain(|p| p.id() != pulse);
                self.notifications
                    .push(Notification::success("notification-delete-success"));
            }
            Err(err) => {
                self.notifications.push(
                    Notification::error(err.i18n_key()).with_arg("reason", err.to_string()),
                );
            }
        }

        let Some(viewer) = self.viewer.as_mut() else {
            return Task::none();
        };
        let settled = viewer.handle(
            pulse_viewer::Message::DeleteSettled {
                pulse: pulse.clone(),
                outcome,
            },
            self.identity.as_ref(),
        );
        let reconciled = viewer.reconcile(&self.pulses);

        let first = self.apply_effect(settled);
        let second = self.apply_effect(reconciled);
        Task::batch([first, second])
    }
}
