use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while extracting card sorts.
#[derive(Error, Debug)]
pub enum SortError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be listed.
    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A board export is not valid JSON or lacks a required field.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A card references a list id that is not on the board.
    #[error("Card \"{card}\" references unknown list {list_id}")]
    UnknownList { card: String, list_id: String },

    /// A card mapping was supplied but does not contain this card name.
    #[error("Card \"{0}\" is missing from the card mapping")]
    UnmappedCard(String),

    /// The board history contains no list creation, so the session has no start.
    #[error("No list creation action found in board \"{0}\"")]
    MissingListCreation(String),

    /// An action date could not be parsed.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// A failure while processing one export in a directory batch.
    #[error("Failed to extract sort from {path}: {source}")]
    Board {
        path: PathBuf,
        #[source]
        source: Box<SortError>,
    },
}

impl SortError {
    /// Attach the export file path to an error raised while processing it.
    ///
    /// Errors that already carry a path are returned unchanged.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            err @ (SortError::FileRead { .. } | SortError::Board { .. }) => err,
            other => SortError::Board {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}

/// Convenience alias used throughout the cardsort crates.
pub type Result<T> = std::result::Result<T, SortError>;
