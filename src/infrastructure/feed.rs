// SPDX-License-Identifier: MPL-2.0
//! TOML feed file holding one author's pulses.
//!
//! ```toml
//! [author]
//! username = "alice"
//! avatar = "avatars/alice.png"
//!
//! [[pulses]]
//! id = "p1"
//! media_url = "media/sunset.jpg"
//! caption = "Golden hour"
//! author_id = "alice"
//! created_at = { seconds = 1700000000, nanoseconds = 0 }
//! ```
//!
//! Relative media and avatar paths are resolved against the feed's directory
//! when loading. [`FeedStore`] edits the raw document, so rewriting the file
//! keeps the paths as the user wrote them.

use crate::application::port::{DeleteOutcome, PulseStore};
use crate::domain::pulse::{AuthorInfo, Pulse, PulseId, Timestamp, UserId};
use crate::error::{DeleteError, Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct FeedDocument {
    author: AuthorEntry,
    #[serde(default)]
    pulses: Vec<PulseEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct AuthorEntry {
    username: String,
    #[serde(default)]
    avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct PulseEntry {
    id: String,
    media_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    author_id: String,
    created_at: TimestampEntry,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
struct TimestampEntry {
    seconds: i64,
    #[serde(default)]
    nanoseconds: u32,
}

impl FeedDocument {
    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| feed_error(path, &err))?;
        toml::from_str(&content).map_err(|err| feed_error(path, &err))
    }

    fn write(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        // Write next to the target, then swap it in.
        let staging = path.with_extension("toml.tmp");
        fs::write(&staging, content)?;
        if let Err(err) = fs::rename(&staging, path) {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }
        Ok(())
    }
}

fn feed_error(path: &Path, err: &dyn std::fmt::Display) -> Error {
    Error::Feed {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Makes a relative local reference absolute; URLs and absolute paths pass through.
fn resolve_reference(base: &Path, reference: &str) -> String {
    if reference.is_empty() || reference.contains("://") {
        return reference.to_string();
    }
    let path = Path::new(reference);
    if path.is_absolute() {
        reference.to_string()
    } else {
        base.join(path).to_string_lossy().into_owned()
    }
}

/// A loaded feed, ready to hand to the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub author: AuthorInfo,
    pub pulses: Vec<Pulse>,
}

impl Feed {
    /// Loads and validates the feed at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Feed`] if the file cannot be read or parsed, or if two
    /// pulses share an id.
    pub fn load(path: &Path) -> Result<Self> {
        let document = FeedDocument::read(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));

        let mut seen = std::collections::HashSet::new();
        for entry in &document.pulses {
            if !seen.insert(entry.id.as_str()) {
                return Err(feed_error(path, &format!("duplicate pulse id '{}'", entry.id)));
            }
        }

        let pulses = document
            .pulses
            .iter()
            .map(|entry| {
                Pulse::new(
                    PulseId::new(entry.id.clone()),
                    resolve_reference(base, &entry.media_url),
                    entry.caption.clone(),
                    Timestamp::new(entry.created_at.seconds, entry.created_at.nanoseconds),
                    UserId::new(entry.author_id.clone()),
                )
            })
            .collect();

        tracing::debug!(path = %path.display(), "feed loaded");

        Ok(Self {
            author: AuthorInfo::new(
                document.author.username.clone(),
                resolve_reference(base, &document.author.avatar),
            ),
            pulses,
        })
    }
}

/// File-backed [`PulseStore`]: deleting rewrites the feed without the pulse.
#[derive(Debug)]
pub struct FeedStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file.
    lock: Mutex<()>,
}

impl FeedStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reloads the feed from disk.
    ///
    /// # Errors
    ///
    /// See [`Feed::load`].
    pub fn load(&self) -> Result<Feed> {
        Feed::load(&self.path)
    }
}

impl PulseStore for FeedStore {
    fn delete(&self, pulse: &Pulse, requested_by: Option<&UserId>) -> DeleteOutcome {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut document =
            FeedDocument::read(&self.path).map_err(|err| DeleteError::Storage(err.to_string()))?;

        let position = document
            .pulses
            .iter()
            .position(|entry| entry.id == pulse.id().as_str())
            .ok_or_else(|| DeleteError::NotFound(pulse.id().to_string()))?;

        let author = &document.pulses[position].author_id;
        if requested_by.map(UserId::as_str) != Some(author.as_str()) {
            return Err(DeleteError::NotOwner {
                user: requested_by.map_or_else(|| "anonymous".to_string(), UserId::to_string),
                pulse: pulse.id().to_string(),
            });
        }

        document.pulses.remove(position);
        document
            .write(&self.path)
            .map_err(|err| DeleteError::Storage(err.to_string()))?;

        tracing::info!(pulse = %pulse.id(), remaining = document.pulses.len(), "pulse deleted from feed");
        Ok(())
    }
}
