//! Share-link state: the `starting`/`current` pair of encoded boards.
//!
//! A share link carries up to two encoded boards: the manually-edited
//! starting pattern and the latest evolved state. [`ShareState`] models the
//! pair as raw notation strings and round-trips them through a query-string
//! fragment (`starting=B2_B1_B0&current=A1_B1_C1`).
//!
//! Parsing is deliberately lenient: unknown keys are ignored and malformed
//! segments are skipped, because a share link is collaborator-controlled
//! input. Notation validation belongs to the codec, at decode time.

use serde::{Deserialize, Serialize};

/// Which of the two share slots a board string occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareKey {
    /// The manually-edited starting pattern.
    Starting,
    /// The latest evolved board.
    Current,
}

impl ShareKey {
    /// The key's wire name in a query string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Current => "current",
        }
    }
}

impl core::fmt::Display for ShareKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two optional encoded boards carried by a share link.
///
/// Values are raw notation strings, stored verbatim: the notation alphabet
/// (`A`..=`Z`, digits, `_`) needs no escaping inside a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareState {
    /// Encoded starting pattern, if any.
    starting: Option<String>,
    /// Encoded current board, if any.
    current: Option<String>,
}

impl ShareState {
    /// Create a share state with both slots empty.
    pub const fn new() -> Self {
        Self {
            starting: None,
            current: None,
        }
    }

    /// Parse a query-string fragment such as `starting=B2_B1_B0&current=A1`.
    ///
    /// Lenient by design: segments without `=`, segments with an empty
    /// value, and unknown keys are all skipped. When a key repeats, the
    /// first occurrence wins.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut state = Self::new();
        for segment in query.split('&') {
            let Some((key, value)) = segment.split_once('=') else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            let slot = match key {
                "starting" => &mut state.starting,
                "current" => &mut state.current,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.to_owned());
            }
        }
        state
    }

    /// Read one slot.
    pub fn get(&self, key: ShareKey) -> Option<&str> {
        match key {
            ShareKey::Starting => self.starting.as_deref(),
            ShareKey::Current => self.current.as_deref(),
        }
    }

    /// Write one slot. An empty value clears the slot instead, which is how
    /// an emptied board drops out of the share link.
    pub fn set(&mut self, key: ShareKey, value: &str) {
        let slot = match key {
            ShareKey::Starting => &mut self.starting,
            ShareKey::Current => &mut self.current,
        };
        if value.is_empty() {
            *slot = None;
        } else {
            *slot = Some(value.to_owned());
        }
    }

    /// Clear one slot.
    pub fn clear(&mut self, key: ShareKey) {
        match key {
            ShareKey::Starting => self.starting = None,
            ShareKey::Current => self.current = None,
        }
    }

    /// The board a loader should use: the evolved state when present,
    /// otherwise the starting pattern.
    pub fn effective(&self) -> Option<&str> {
        self.current.as_deref().or(self.starting.as_deref())
    }

    /// Check whether both slots are empty.
    pub const fn is_empty(&self) -> bool {
        self.starting.is_none() && self.current.is_none()
    }

    /// Render the state as a query-string fragment, `starting` first.
    ///
    /// Empty slots are omitted; an entirely empty state renders as `""`.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut segments = Vec::with_capacity(2);
        if let Some(starting) = &self.starting {
            segments.push(format!("{}={starting}", ShareKey::Starting));
        }
        if let Some(current) = &self.current {
            segments.push(format!("{}={current}", ShareKey::Current));
        }
        segments.join("&")
    }
}
