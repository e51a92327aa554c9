use thiserror::Error;

/// Everything that can go wrong while loading or querying the catalog.
///
/// None of these are fatal: the interactive loop reports the message and
/// keeps running. The `Display` strings double as the user-visible text, so
/// the command layer can print an error without rewording it.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The course file could not be opened or read.
    #[error("cannot open course file: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited reader failed mid-stream. With quoting disabled and
    /// flexible record lengths this only surfaces underlying I/O trouble;
    /// malformed rows are never rejected.
    #[error("error reading course data: {0}")]
    Csv(#[from] csv::Error),

    /// A query arrived before any successful load.
    #[error("Please load the course data first.")]
    NotLoaded,

    /// The menu line did not parse as a numeric choice.
    #[error("Invalid input: {0:?} is not a menu option.")]
    InvalidChoice(String),
}
