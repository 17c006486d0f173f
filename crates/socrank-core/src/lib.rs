//! Venue tables and eligibility rules for social computing venue rankings.
//!
//! Decides whether a publication record counts toward the rankings, using
//! a global year window plus per-year volume whitelists for journals that
//! are tracked as if they were conferences. Page parsing lives in
//! `socrank-pages` and is re-exported here.

use thiserror::Error;

pub mod config_file;
pub mod eligibility;
pub mod journals;
pub mod venues;

// Re-export for convenience
pub use eligibility::{
    DEFAULT_END_YEAR, DEFAULT_START_YEAR, Eligibility, EligibilityConfig, Publication,
    VolumeMatch, YearRange, count_paper,
};
pub use journals::{AllowedVolumes, TrackedJournal};
pub use socrank_pages::{PAGE_COUNT_THRESHOLD, meets_page_threshold, page_count, start_page};
pub use venues::{Area, AreaTable};

#[derive(Error, Debug)]
pub enum VenueError {
    #[error("venue {venue:?} listed under both {first} and {second}")]
    DuplicateVenue {
        venue: String,
        first: String,
        second: String,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid year range: start {start} is after end {end}")]
    InvalidYearRange { start: i32, end: i32 },
    #[error("unknown volume match mode: {0:?} (expected \"strict\" or \"legacy\")")]
    UnknownVolumeMatch(String),
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build an [`Eligibility`] from the cascaded on-disk config.
pub fn load_eligibility() -> Result<Eligibility, ConfigError> {
    let file = config_file::load_config();
    let config = EligibilityConfig::from_file(&file)?;
    tracing::debug!(
        start_year = config.years.start,
        end_year = config.years.end,
        volume_match = %config.volume_match,
        "loaded eligibility config"
    );
    Ok(Eligibility::new(config))
}
