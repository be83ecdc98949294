use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubfitError {
    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The downloaded package holds no file with a subtitle extension.
    #[error("archive contains no subtitle files")]
    NoSubtitleEntries,

    /// The manual selection prompt was dismissed without a choice.
    #[error("subtitle selection cancelled")]
    SelectionCancelled,
}
