use crate::error::CatalogError;

/// A single course record as read from the data file.
///
/// Plain immutable data: formatting is handled by the menu layer, never by
/// the record itself. The identifier is unique by convention only; nothing
/// here enforces it, and prerequisite identifiers are not checked for
/// existence against the rest of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Course code used as the sort and lookup key, e.g. "CS201".
    pub identifier: String,
    /// Human-readable course title. May be empty for degenerate input rows.
    pub title: String,
    /// Identifiers of required prior courses, in file order. May be empty.
    pub prerequisites: Vec<String>,
}

/// The in-memory course catalog for the current session.
///
/// The catalog contains:
/// - `courses`: the loaded records, sorted ascending by identifier.
/// - `loaded`: whether any load has succeeded yet; queries are rejected
///   with [`CatalogError::NotLoaded`] until it is set.
/// - `should_exit`: a flag the interactive loop checks to know when to
///   terminate.
///
/// Note: fields are public for simplicity to keep the crate small.
/// Production code would prefer accessor methods over public fields.
#[derive(Debug, Default)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub loaded: bool,
    pub should_exit: bool,
}

impl Catalog {
    /// An empty, not-yet-loaded catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly loaded set of records, discarding the old one.
    ///
    /// Marks the catalog as loaded even when `courses` is empty: opening the
    /// file counts as success regardless of what was in it.
    pub fn replace(&mut self, courses: Vec<Course>) {
        self.courses = courses;
        self.loaded = true;
    }

    /// Iterate over `(identifier, title)` pairs in stored (sorted) order.
    ///
    /// The iterator is lazy, finite and restartable; call again for a fresh
    /// pass. Rejected with [`CatalogError::NotLoaded`] before the first load.
    pub fn list_all(&self) -> Result<impl Iterator<Item = (&str, &str)>, CatalogError> {
        if !self.loaded {
            return Err(CatalogError::NotLoaded);
        }
        Ok(self
            .courses
            .iter()
            .map(|c| (c.identifier.as_str(), c.title.as_str())))
    }

    /// Linear scan for the first course whose identifier matches exactly.
    ///
    /// `Ok(None)` is the normal negative outcome the caller branches on;
    /// only querying before any load is an error. When duplicate identifiers
    /// were loaded, the first one in sorted order wins, which for ties is
    /// file order.
    pub fn find(&self, identifier: &str) -> Result<Option<&Course>, CatalogError> {
        if !self.loaded {
            return Err(CatalogError::NotLoaded);
        }
        Ok(self.courses.iter().find(|c| c.identifier == identifier))
    }
}
