pub mod archive;
pub mod config;
pub mod detect;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod models;
pub mod rank;
pub mod score;

pub use config::{AppConfig, MatchConfig, MultiFilePolicy};
pub use error::SubfitError;
pub use models::{Candidate, MatchDetails, MatchScore, ScoredCandidate};
pub use rank::rank;
pub use score::score;
