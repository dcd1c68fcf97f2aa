use std::fmt;

use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;

/// Where in a conversation the query was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLocation {
    Title,
    Summary,
    Message,
    Content,
}

impl MatchLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchLocation::Title => "title",
            MatchLocation::Summary => "summary",
            MatchLocation::Message => "message",
            MatchLocation::Content => "content",
        }
    }
}

impl fmt::Display for MatchLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered set of match locations
///
/// Serializes as a plain JSON array. Consumers must not rely on the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<MatchLocation>", into = "Vec<MatchLocation>")]
pub struct MatchLocations(Vec<MatchLocation>);

impl MatchLocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert if absent; returns whether the location was newly added
    pub fn insert(&mut self, location: MatchLocation) -> bool {
        if self.0.contains(&location) {
            return false;
        }
        self.0.push(location);
        true
    }

    pub fn contains(&self, location: MatchLocation) -> bool {
        self.0.contains(&location)
    }

    pub fn iter(&self) -> impl Iterator<Item = MatchLocation> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<MatchLocation>> for MatchLocations {
    fn from(locations: Vec<MatchLocation>) -> Self {
        let mut set = Self::new();
        for location in locations {
            set.insert(location);
        }
        set
    }
}

impl From<MatchLocations> for Vec<MatchLocation> {
    fn from(set: MatchLocations) -> Self {
        set.0
    }
}

/// Shaped search hit; never borrows from or mutates the source conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub uuid: String,
    pub name: String,
    pub summary: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub message_count: usize,
    pub match_locations: MatchLocations,
}
