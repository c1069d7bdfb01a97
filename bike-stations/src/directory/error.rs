//! Station directory error types.

/// Errors reading or writing the cached station directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The backing store could not be read
    #[error("failed to read station directory: {message}")]
    Read { message: String },

    /// The stored document is not a valid station list
    #[error("failed to parse station directory: {message}")]
    Parse { message: String },

    /// The backing store could not be written
    #[error("failed to write station directory: {message}")]
    Write { message: String },
}
