// SPDX-License-Identifier: MPL-2.0
//! Identity port: resolves the currently signed-in viewer.

use crate::domain::pulse::UserId;

/// Source of the current viewer identity.
///
/// Injected into the viewer instead of being read from a global, so
/// ownership checks can be exercised with any identity in tests.
pub trait IdentityProvider: Send + Sync {
    /// Returns the signed-in user, or `None` for anonymous viewers.
    fn current_viewer(&self) -> Option<UserId>;
}

/// Fixed identity, resolved once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIdentity(Option<UserId>);

impl StaticIdentity {
    #[must_use]
    pub fn signed_in(user: UserId) -> Self {
        Self(Some(user))
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_viewer(&self) -> Option<UserId> {
        self.0.clone()
    }
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for std::sync::Arc<T> {
    fn current_viewer(&self) -> Option<UserId> {
        (**self).current_viewer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn anonymous_identity_has_no_viewer() {
        assert_eq!(StaticIdentity::anonymous().current_viewer(), None);
    }

    #[test]
    fn shared_identity_delegates() {
        let shared: Arc<dyn IdentityProvider> =
            Arc::new(StaticIdentity::signed_in(UserId::new("carol")));
        assert_eq!(shared.current_viewer(), Some(UserId::new("carol")));
    }
}
