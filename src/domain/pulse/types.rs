// SPDX-License-Identifier: MPL-2.0
//! Core pulse value types.

use super::media_kind::MediaKind;
use chrono::{DateTime, Utc};
use std::fmt;

/// Unique identifier of a pulse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PulseId(String);

impl PulseId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PulseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a user (pulse author or current viewer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Creation time as seconds and nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    seconds: i64,
    nanoseconds: u32,
}

impl Timestamp {
    /// Creates a timestamp, carrying whole seconds out of `nanoseconds`.
    #[must_use]
    pub fn new(seconds: i64, nanoseconds: u32) -> Self {
        let carry = i64::from(nanoseconds / 1_000_000_000);
        Self {
            seconds: seconds.saturating_add(carry),
            nanoseconds: nanoseconds % 1_000_000_000,
        }
    }

    #[must_use]
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    #[must_use]
    pub fn nanoseconds(&self) -> u32 {
        self.nanoseconds
    }

    /// Converts to a UTC date-time; `None` when outside chrono's range.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanoseconds)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::new(value.timestamp(), value.timestamp_subsec_nanos())
    }
}

/// A single ephemeral media post.
///
/// Immutable from the viewer's point of view: the viewer clones pulses into
/// its own snapshot and never writes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pulse {
    id: PulseId,
    media_url: String,
    caption: Option<String>,
    created_at: Timestamp,
    author_id: UserId,
}

impl Pulse {
    /// Creates a pulse. Blank captions are stored as `None`.
    #[must_use]
    pub fn new(
        id: PulseId,
        media_url: impl Into<String>,
        caption: Option<String>,
        created_at: Timestamp,
        author_id: UserId,
    ) -> Self {
        Self {
            id,
            media_url: media_url.into(),
            caption: caption.filter(|text| !text.trim().is_empty()),
            created_at,
            author_id,
        }
    }

    #[must_use]
    pub fn id(&self) -> &PulseId {
        &self.id
    }

    #[must_use]
    pub fn media_url(&self) -> &str {
        &self.media_url
    }

    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    #[must_use]
    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }

    /// Rendering surface derived from the media reference.
    #[must_use]
    pub fn media_kind(&self) -> MediaKind {
        MediaKind::classify(&self.media_url)
    }

    /// Returns true if `user` authored this pulse.
    #[must_use]
    pub fn is_authored_by(&self, user: &UserId) -> bool {
        self.author_id == *user
    }
}

/// Display-only author identity shown in the viewer header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthorInfo {
    pub username: String,
    pub avatar: String,
}

impl AuthorInfo {
    #[must_use]
    pub fn new(username: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            avatar: avatar.into(),
        }
    }
}
