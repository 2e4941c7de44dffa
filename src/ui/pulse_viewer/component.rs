// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component owns the navigation index, the local snapshot and the
//! deletion phase. It never performs side effects itself: closing the overlay
//! and deleting a pulse are returned as [`Effect`]s for the host to carry out.

use super::deletion::DeletionPhase;
use super::state::{Segment, ViewState};
use crate::application::port::{DeleteOutcome, IdentityProvider};
use crate::domain::pulse::{Pulse, PulseId};
use iced::keyboard;
use iced::keyboard::key::Named;

/// Messages emitted by the overlay widgets and routed input events.
#[derive(Debug, Clone)]
pub enum Message {
    NavigateNext,
    NavigatePrevious,
    /// Delete affordance pressed (owner only).
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
    /// The external delete operation for `pulse` settled.
    DeleteSettled { pulse: PulseId, outcome: DeleteOutcome },
    /// Close button pressed.
    Close,
    /// Click on the dimmed area around the content.
    BackdropPressed,
    /// Key press routed from the application subscription.
    KeyPressed(keyboard::Key),
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Dismiss the overlay and drop this state.
    Close,
    /// Run the external delete operation for this pulse and report back with
    /// [`Message::DeleteSettled`].
    RequestDelete(Pulse),
}

/// Behaviour switches read from the user configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub autoplay_video: bool,
    pub show_captions: bool,
    pub close_on_backdrop: bool,
    pub keyboard_navigation: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            autoplay_video: true,
            show_captions: true,
            close_on_backdrop: true,
            keyboard_navigation: true,
        }
    }
}

/// Everything the stateless view needs, derived fresh for every render.
#[derive(Debug, Clone)]
pub struct ViewModel<'a> {
    pub pulse: &'a Pulse,
    pub index: usize,
    pub len: usize,
    pub progress: Vec<Segment>,
    pub can_go_next: bool,
    pub can_go_prev: bool,
    pub is_owner: bool,
    pub confirm_pending: bool,
    pub delete_in_flight: bool,
}

#[derive(Debug, Clone)]
pub struct State {
    view: ViewState,
    deletion: DeletionPhase,
    preferences: Preferences,
    closed: bool,
}

impl State {
    /// Opens the viewer on a copy of `pulses`, starting at `initial_index`.
    ///
    /// The returned effect is [`Effect::Close`] when there is nothing to show.
    pub fn open(pulses: &[Pulse], initial_index: usize, preferences: Preferences) -> (Self, Effect) {
        if initial_index >= pulses.len() && !pulses.is_empty() {
            tracing::debug!(
                initial_index,
                len = pulses.len(),
                "initial pulse index out of range, clamping"
            );
        }

        let mut state = Self {
            view: ViewState::new(pulses, initial_index),
            deletion: DeletionPhase::Idle,
            preferences,
            closed: false,
        };
        let effect = state.render_guard();
        (state, effect)
    }

    /// Refreshes the snapshot from the latest external sequence.
    ///
    /// Runs on every update, including an empty one, and re-runs the render
    /// guard afterwards.
    pub fn reconcile(&mut self, pulses: &[Pulse]) -> Effect {
        let previous = self.view.index();
        if self.view.replace_snapshot(pulses) {
            tracing::debug!(
                previous,
                index = self.view.index(),
                len = self.view.len(),
                "pulse sequence shrank, index clamped"
            );
        }
        self.drop_stale_confirmation();
        self.render_guard()
    }

    /// Dismisses the dialog when the pulse it asks about is no longer shown.
    fn drop_stale_confirmation(&mut self) {
        let DeletionPhase::ConfirmPending { target } = &self.deletion else {
            return;
        };
        if self.view.current().map(Pulse::id) != Some(target) {
            tracing::debug!(pulse = %target, "confirmed pulse moved away, dismissing dialog");
            self.deletion.cancel();
        }
    }

    /// Closes the viewer when no current pulse exists. Fires at most once.
    fn render_guard(&mut self) -> Effect {
        if self.view.current().is_some() || self.closed {
            return Effect::None;
        }
        tracing::info!("pulse sequence is empty, closing viewer");
        self.close()
    }

    fn close(&mut self) -> Effect {
        if self.closed {
            return Effect::None;
        }
        self.closed = true;
        // An outstanding delete keeps running; its settlement is ignored.
        self.deletion.reset();
        Effect::Close
    }

    /// Handles a viewer message.
    pub fn handle(&mut self, message: Message, identity: &dyn IdentityProvider) -> Effect {
        if self.closed {
            return Effect::None;
        }

        match message {
            Message::NavigateNext => {
                self.navigate_next();
                Effect::None
            }
            Message::NavigatePrevious => {
                self.navigate_previous();
                Effect::None
            }
            Message::RequestDelete => {
                if !self.is_owner(identity) {
                    return Effect::None;
                }
                if let Some(pulse) = self.view.current() {
                    if self.deletion.open_confirmation(pulse.id().clone()) {
                        tracing::debug!(pulse = %pulse.id(), "delete confirmation opened");
                    }
                }
                Effect::None
            }
            Message::ConfirmDelete => self.confirm_delete(),
            Message::CancelDelete => {
                self.deletion.cancel();
                Effect::None
            }
            Message::DeleteSettled { pulse, outcome } => {
                self.settle_delete(&pulse, &outcome);
                Effect::None
            }
            Message::Close => self.close(),
            Message::BackdropPressed => {
                if self.preferences.close_on_backdrop && !self.deletion.confirm_pending() {
                    self.close()
                } else {
                    Effect::None
                }
            }
            Message::KeyPressed(key) => self.handle_key(&key, identity),
        }
    }

    fn navigate_next(&mut self) {
        // The dialog is modal.
        if self.deletion.confirm_pending() {
            return;
        }
        if self.view.go_next() {
            tracing::debug!(index = self.view.index(), "navigated to next pulse");
        }
    }

    fn navigate_previous(&mut self) {
        if self.deletion.confirm_pending() {
            return;
        }
        if self.view.go_prev() {
            tracing::debug!(index = self.view.index(), "navigated to previous pulse");
        }
    }

    fn confirm_delete(&mut self) -> Effect {
        let Some(target) = self.deletion.confirm() else {
            return Effect::None;
        };

        match self.view.current() {
            Some(pulse) if pulse.id() == &target => {
                tracing::info!(pulse = %target, "delete requested");
                Effect::RequestDelete(pulse.clone())
            }
            _ => {
                self.deletion.reset();
                Effect::None
            }
        }
    }

    /// Only the settlement of this viewer's own outstanding request clears
    /// the in-flight flag.
    fn settle_delete(&mut self, pulse: &PulseId, outcome: &DeleteOutcome) {
        if !self.deletion.settle(pulse) {
            tracing::debug!(pulse = %pulse, "ignoring settlement of a request this viewer is not waiting on");
            return;
        }
        match outcome {
            Ok(()) => tracing::info!(pulse = %pulse, "delete settled"),
            Err(err) => tracing::warn!(pulse = %pulse, error = %err, "delete failed"),
        }
    }

    fn handle_key(&mut self, key: &keyboard::Key, identity: &dyn IdentityProvider) -> Effect {
        if !self.preferences.keyboard_navigation {
            return Effect::None;
        }

        match key {
            keyboard::Key::Named(Named::ArrowRight) => {
                self.navigate_next();
                Effect::None
            }
            keyboard::Key::Named(Named::ArrowLeft) => {
                self.navigate_previous();
                Effect::None
            }
            keyboard::Key::Named(Named::Escape) => match self.deletion {
                DeletionPhase::Idle => self.close(),
                DeletionPhase::ConfirmPending { .. } => {
                    self.deletion.cancel();
                    Effect::None
                }
                DeletionPhase::Deleting { .. } => Effect::None,
            },
            keyboard::Key::Named(Named::Delete) => {
                self.handle(Message::RequestDelete, identity)
            }
            _ => Effect::None,
        }
    }

    /// Recomputed on every call: identity and index change independently.
    #[must_use]
    pub fn is_owner(&self, identity: &dyn IdentityProvider) -> bool {
        match (identity.current_viewer(), self.view.current()) {
            (Some(viewer), Some(pulse)) => pulse.is_authored_by(&viewer),
            _ => false,
        }
    }

    /// Builds the render input, or `None` when there is nothing to render.
    #[must_use]
    pub fn view_model(&self, identity: &dyn IdentityProvider) -> Option<ViewModel<'_>> {
        if self.closed {
            return None;
        }
        let pulse = self.view.current()?;
        Some(ViewModel {
            pulse,
            index: self.view.index(),
            len: self.view.len(),
            progress: self.view.progress(),
            can_go_next: self.view.can_go_next(),
            can_go_prev: self.view.can_go_prev(),
            is_owner: self.is_owner(identity),
            confirm_pending: self.deletion.confirm_pending(),
            delete_in_flight: self.deletion.delete_in_flight(),
        })
    }

    #[must_use]
    pub fn current(&self) -> Option<&Pulse> {
        self.view.current()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.view.index()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.view.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.view.can_go_next()
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.view.can_go_prev()
    }

    #[must_use]
    pub fn progress(&self) -> Vec<Segment> {
        self.view.progress()
    }

    #[must_use]
    pub fn confirm_pending(&self) -> bool {
        self.deletion.confirm_pending()
    }

    #[must_use]
    pub fn delete_in_flight(&self) -> bool {
        self.deletion.delete_in_flight()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        self.preferences
    }
}
