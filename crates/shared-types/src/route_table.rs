//! Classification of route paths into dashboard views.
//!
//! The table is an explicit list of `prefix -> view` entries. Lookup is
//! segment-aware and the longest matching prefix wins, so a nested entry
//! such as `/admin/reservations` may override `/reservations`. Paths matching
//! no entry are view-agnostic and classify as `None`.

use std::collections::HashSet;
use std::fmt;

use crate::view::View;

/// A single prefix entry of a route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePrefix {
    pub prefix: &'static str,
    pub view: View,
}

impl RoutePrefix {
    pub const fn new(prefix: &'static str, view: View) -> Self {
        Self { prefix, view }
    }
}

/// Prefixes of the hotel dashboard. Everything else (`/`, `/profile`,
/// `/login`, ...) is shared by both views.
pub const DASHBOARD_ROUTES: &[RoutePrefix] = &[
    RoutePrefix::new("/admin", View::Admin),
    RoutePrefix::new("/reservations", View::User),
    RoutePrefix::new("/payments", View::User),
    RoutePrefix::new("/rooms", View::User),
];

/// Reasons a route table can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    EmptyPrefix,
    /// The prefix is not in normalized form; carries the normalized spelling.
    NotNormalized {
        prefix: &'static str,
        expected: String,
    },
    DuplicatePrefix(&'static str),
}

impl fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTableError::EmptyPrefix => write!(f, "route prefix must not be empty"),
            RouteTableError::NotNormalized { prefix, expected } => {
                write!(f, "route prefix {prefix:?} is not normalized (expected {expected:?})")
            }
            RouteTableError::DuplicatePrefix(prefix) => {
                write!(f, "route prefix {prefix:?} is declared more than once")
            }
        }
    }
}

impl std::error::Error for RouteTableError {}

#[derive(Debug, Clone)]
struct CompiledPrefix {
    entry: RoutePrefix,
    segments: Vec<&'static str>,
}

/// Immutable prefix table mapping route paths to views.
#[derive(Debug, Clone)]
pub struct RouteTable {
    // Sorted by segment count, longest first.
    entries: Vec<CompiledPrefix>,
}

impl RouteTable {
    /// Validate and build a table. Every prefix must be non-empty, already
    /// normalized and declared once.
    pub fn new(entries: &[RoutePrefix]) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::new();
        for entry in entries {
            let expected = normalize_path(entry.prefix).ok_or(RouteTableError::EmptyPrefix)?;
            if expected != entry.prefix {
                return Err(RouteTableError::NotNormalized {
                    prefix: entry.prefix,
                    expected,
                });
            }
            if !seen.insert(entry.prefix) {
                return Err(RouteTableError::DuplicatePrefix(entry.prefix));
            }
        }
        Ok(Self::compile(entries))
    }

    /// The built-in dashboard table.
    pub fn dashboard() -> Self {
        Self::compile(DASHBOARD_ROUTES)
    }

    fn compile(entries: &[RoutePrefix]) -> Self {
        let mut compiled: Vec<CompiledPrefix> = entries
            .iter()
            .map(|entry| CompiledPrefix {
                entry: *entry,
                segments: segments(entry.prefix).collect(),
            })
            .collect();
        // Stable sort keeps declaration order among equal lengths; validated
        // tables can never have two equal-length prefixes matching one path.
        compiled.sort_by(|a, b| b.segments.len().cmp(&a.segments.len()));
        Self { entries: compiled }
    }

    /// Classify a path. Total: any input, including malformed or empty
    /// strings, yields a value and never panics.
    pub fn classify(&self, path: &str) -> Option<View> {
        self.matching_prefix(path).map(|entry| entry.view)
    }

    /// The entry that decides the classification of `path`, if any.
    pub fn matching_prefix(&self, path: &str) -> Option<RoutePrefix> {
        let normalized = normalize_path(path)?;
        let path_segments: Vec<&str> = segments(&normalized).collect();

        self.entries
            .iter()
            .find(|compiled| {
                compiled.segments.len() <= path_segments.len()
                    && compiled
                        .segments
                        .iter()
                        .zip(&path_segments)
                        .all(|(a, b)| a == b)
            })
            .map(|compiled| compiled.entry)
    }

    /// Declared prefixes belonging to `view`, longest first.
    pub fn prefixes_for(&self, view: View) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .filter(move |compiled| compiled.entry.view == view)
            .map(|compiled| compiled.entry.prefix)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::dashboard()
    }
}

/// Normalize a route path: drop query string and fragment, ensure a leading
/// slash, collapse repeated slashes and strip the trailing slash.
///
/// Returns `None` for empty or whitespace-only input.
pub fn normalize_path(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let path = trimmed
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    if path.is_empty() {
        return None;
    }

    let joined = segments(path).collect::<Vec<_>>().join("/");
    Some(format!("/{joined}"))
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
