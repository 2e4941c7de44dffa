// SPDX-License-Identifier: MPL-2.0
//! Fixtures shared by unit tests.

use crate::application::port::StaticIdentity;
use crate::domain::pulse::{Pulse, PulseId, Timestamp, UserId};

/// Author of every pulse built by [`pulses`].
pub const AUTHOR: &str = "alice";

/// Builds one pulse authored by [`AUTHOR`].
pub fn pulse(id: &str, media_url: &str) -> Pulse {
    Pulse::new(
        PulseId::new(id),
        media_url,
        Some(format!("caption {id}")),
        Timestamp::new(1_700_000_000, 0),
        UserId::new(AUTHOR),
    )
}

/// Builds `n` image pulses with ids `p0..p{n-1}`.
pub fn pulses(n: usize) -> Vec<Pulse> {
    (0..n)
        .map(|i| pulse(&format!("p{i}"), &format!("media/p{i}.jpg")))
        .collect()
}

/// Identity of the author of [`pulses`].
pub fn owner() -> StaticIdentity {
    StaticIdentity::signed_in(UserId::new(AUTHOR))
}

/// Identity of someone who authored nothing in [`pulses`].
pub fn stranger() -> StaticIdentity {
    StaticIdentity::signed_in(UserId::new("mallory"))
}
