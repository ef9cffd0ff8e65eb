//! Application state for the web server.

use core_types::{Announcement, AnnouncementId, newest_first};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Sample announcements used when no seed file is configured.
const BUILTIN_SEED: &str = include_str!("../data/seed.json");

/// Errors from loading announcement seed data.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate announcement id {id} for company {handle}")]
    DuplicateId { handle: String, id: AnnouncementId },
}

/// Result type for seed operations.
pub type Result<T> = std::result::Result<T, SeedError>;

/// Shared application state.
///
/// Announcements are loaded once at startup and never change afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Announcements by company handle, each list newest first.
    pub companies: Arc<BTreeMap<String, Vec<Announcement>>>,
}

impl AppState {
    /// Create a new app state, validating ids and ordering each company's
    /// announcements newest first.
    pub fn new(companies: BTreeMap<String, Vec<Announcement>>) -> Result<Self> {
        let mut sorted = BTreeMap::new();

        for (handle, announcements) in companies {
            // Ids are compared by their rendered form, which is the card key
            let mut seen = HashSet::new();
            for a in &announcements {
                if !seen.insert(a.id.to_string()) {
                    return Err(SeedError::DuplicateId {
                        handle,
                        id: a.id.clone(),
                    });
                }
            }

            let ordered: Vec<Announcement> = newest_first(&announcements)
                .into_iter()
                .cloned()
                .collect();
            sorted.insert(handle, ordered);
        }

        Ok(Self {
            companies: Arc::new(sorted),
        })
    }

    /// Load state from a JSON object mapping handle to announcements.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Load state from a JSON seed file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load the bundled sample announcements.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SEED)
    }

    /// Announcements for a company, newest first.
    pub fn announcements(&self, handle: &str) -> Option<&[Announcement]> {
        self.companies.get(handle).map(Vec::as_slice)
    }

    /// All known company handles, sorted.
    pub fn handles(&self) -> Vec<String> {
        self.companies.keys().cloned().collect()
    }

    /// Total number of announcements across companies.
    pub fn total_announcements(&self) -> usize {
        self.companies.values().map(Vec::len).sum()
    }
}
