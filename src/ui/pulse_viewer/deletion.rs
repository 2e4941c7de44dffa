// SPDX-License-Identifier: MPL-2.0
//! Delete confirmation state machine.
//!
//! `Idle -> ConfirmPending -> Deleting -> Idle`, with `ConfirmPending -> Idle`
//! on cancel. The snapshot is never touched here: a successful delete only
//! becomes visible once the sequence owner publishes a new sequence.

use crate::domain::pulse::PulseId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeletionPhase {
    #[default]
    Idle,
    /// Confirmation dialog is shown for `target`.
    ConfirmPending { target: PulseId },
    /// A delete request for `target` is outstanding; the dialog stays open
    /// with both actions disabled.
    Deleting { target: PulseId },
}

impl DeletionPhase {
    /// `Idle -> ConfirmPending`. Returns false from any other phase.
    pub fn open_confirmation(&mut self, target: PulseId) -> bool {
        match self {
            DeletionPhase::Idle => {
                *self = DeletionPhase::ConfirmPending { target };
                true
            }
            _ => false,
        }
    }

    /// `ConfirmPending -> Deleting`, returning the confirmed pulse.
    ///
    /// `None` from any other phase, which is what blocks duplicate
    /// submissions.
    pub fn confirm(&mut self) -> Option<PulseId> {
        match std::mem::take(self) {
            DeletionPhase::ConfirmPending { target } => {
                *self = DeletionPhase::Deleting {
                    target: target.clone(),
                };
                Some(target)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// `ConfirmPending -> Idle`. Ignored while a request is in flight.
    pub fn cancel(&mut self) -> bool {
        match self {
            DeletionPhase::ConfirmPending { .. } => {
                *self = DeletionPhase::Idle;
                true
            }
            _ => false,
        }
    }

    /// `Deleting -> Idle` when `pulse` is the outstanding target, whatever
    /// the outcome.
    ///
    /// Returns false for a settlement of any other request, which leaves the
    /// phase untouched.
    pub fn settle(&mut self, pulse: &PulseId) -> bool {
        if matches!(self, DeletionPhase::Deleting { target } if target == pulse) {
            *self = DeletionPhase::Idle;
            true
        } else {
            false
        }
    }

    /// The pulse the dialog or the outstanding request is about.
    #[must_use]
    pub fn target(&self) -> Option<&PulseId> {
        match self {
            DeletionPhase::Idle => None,
            DeletionPhase::ConfirmPending { target } | DeletionPhase::Deleting { target } => {
                Some(target)
            }
        }
    }

    pub fn reset(&mut self) {
        *self = DeletionPhase::Idle;
    }

    /// True while the confirmation dialog is shown (including in flight).
    #[must_use]
    pub fn confirm_pending(&self) -> bool {
        !matches!(self, DeletionPhase::Idle)
    }

    #[must_use]
    pub fn delete_in_flight(&self) -> bool {
        matches!(self, DeletionPhase::Deleting { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> PulseId {
        PulseId::new("p1")
    }

    #[test]
    fn full_cycle_returns_to_idle() {
        let mut phase = DeletionPhase::default();
        assert!(phase.open_confirmation(id()));
        assert!(phase.confirm_pending());
        assert!(!phase.delete_in_flight());
        assert_eq!(phase.target(), Some(&id()));

        assert_eq!(phase.confirm(), Some(id()));
        assert!(phase.confirm_pending());
        assert!(phase.delete_in_flight());

        assert!(phase.settle(&id()));
        assert_eq!(phase, DeletionPhase::Idle);
        assert!(!phase.confirm_pending());
        assert_eq!(phase.target(), None);
    }

    #[test]
    fn confirm_while_in_flight_is_rejected() {
        let mut phase = DeletionPhase::default();
        phase.open_confirmation(id());
        phase.confirm();

        assert_eq!(phase.confirm(), None);
        assert_eq!(phase, DeletionPhase::Deleting { target: id() });
    }

    #[test]
    fn confirm_without_dialog_is_rejected() {
        let mut phase = DeletionPhase::default();
        assert_eq!(phase.confirm(), None);
        assert_eq!(phase, DeletionPhase::Idle);
    }

    #[test]
    fn cancel_only_works_before_submission() {
        let mut phase = DeletionPhase::default();
        phase.open_confirmation(id());
        assert!(phase.cancel());
        assert_eq!(phase, DeletionPhase::Idle);

        phase.open_confirmation(id());
        phase.confirm();
        assert!(!phase.cancel());
        assert!(phase.delete_in_flight());
    }

    #[test]
    fn settlement_without_request_keeps_phase() {
        let mut phase = DeletionPhase::default();
        phase.open_confirmation(id());
        assert!(!phase.settle(&id()));
        assert_eq!(phase, DeletionPhase::ConfirmPending { target: id() });
    }

    #[test]
    fn settlement_for_another_pulse_keeps_request_in_flight() {
        let mut phase = DeletionPhase::default();
        phase.open_confirmation(PulseId::new("p2"));
        phase.confirm();

        assert!(!phase.settle(&id()));
        assert!(phase.delete_in_flight());
        assert_eq!(phase.target(), Some(&PulseId::new("p2")));

        assert!(phase.settle(&PulseId::new("p2")));
        assert_eq!(phase, DeletionPhase::Idle);
    }

    #[test]
    fn open_confirmation_is_not_reentrant() {
        let mut phase = DeletionPhase::default();
        assert!(phase.open_confirmation(id()));
        assert!(!phase.open_confirmation(PulseId::new("p2")));
        assert_eq!(phase.target(), Some(&id()));
    }
}
