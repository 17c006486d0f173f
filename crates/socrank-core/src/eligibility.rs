//! The eligibility predicate.
//!
//! A year window applies to every venue; tracked journals additionally
//! need an allowed volume for the publication year.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::ConfigError;
use crate::journals::{AllowedVolumes, TrackedJournal};

/// Earliest publication year considered.
pub const DEFAULT_START_YEAR: i32 = 1970;
/// Latest publication year considered.
pub const DEFAULT_END_YEAR: i32 = 2269;

/// One publication record as supplied by the caller's corpus loader.
///
/// `number`, `pages`, `start_page`, `page_count`, `url` and `title` are
/// carried for callers and current rules do not consult them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Publication<'a> {
    pub venue: &'a str,
    pub year: i32,
    pub volume: &'a str,
    pub number: &'a str,
    pub pages: &'a str,
    pub start_page: i64,
    pub page_count: i64,
    pub url: &'a str,
    pub title: &'a str,
}

impl<'a> Publication<'a> {
    pub fn new(venue: &'a str, year: i32, volume: &'a str) -> Self {
        Self {
            venue,
            year,
            volume,
            ..Default::default()
        }
    }

    /// Set the page string and derive `start_page`/`page_count` from it.
    pub fn with_pages(mut self, pages: &'a str) -> Self {
        self.pages = pages;
        self.start_page = socrank_pages::start_page(Some(pages));
        self.page_count = socrank_pages::page_count(Some(pages));
        self
    }

    pub fn with_number(mut self, number: &'a str) -> Self {
        self.number = number;
        self
    }

    pub fn with_url(mut self, url: &'a str) -> Self {
        self.url = url;
        self
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Whether the page count reaches the caller-side minimum length.
    pub fn meets_page_threshold(&self) -> bool {
        socrank_pages::meets_page_threshold(self.page_count)
    }
}

/// Inclusive publication-year window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_YEAR,
            end: DEFAULT_END_YEAR,
        }
    }
}

/// How a record's volume string is compared with a journal's allowed volumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VolumeMatch {
    /// The trimmed volume is all ASCII digits and names a number in the
    /// allowed set.
    #[default]
    Strict,
    /// The volume occurs anywhere in the rendered set text (`"{12, 13}"`).
    ///
    /// Accepts spurious substrings such as `"1"` or `""`. Kept for
    /// reproducing rankings computed with the historical rules.
    Legacy,
}

impl VolumeMatch {
    pub fn matches(&self, allowed: &AllowedVolumes, volume: &str) -> bool {
        match self {
            Self::Strict => {
                let volume = volume.trim();
                !volume.is_empty()
                    && volume.bytes().all(|b| b.is_ascii_digit())
                    && volume.parse::<u32>().is_ok_and(|v| allowed.contains(v))
            }
            Self::Legacy => allowed.render().contains(volume),
        }
    }
}

impl FromStr for VolumeMatch {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "legacy" => Ok(Self::Legacy),
            _ => Err(ConfigError::UnknownVolumeMatch(s.to_string())),
        }
    }
}

impl fmt::Display for VolumeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Strict => "strict",
            Self::Legacy => "legacy",
        })
    }
}

/// Resolved settings for [`Eligibility`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EligibilityConfig {
    pub years: YearRange,
    pub volume_match: VolumeMatch,
}

/// Decides whether a publication counts toward the rankings.
///
/// Holds no mutable state; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Eligibility {
    config: EligibilityConfig,
}

static DEFAULT_ELIGIBILITY: Lazy<Eligibility> = Lazy::new(Eligibility::default);

impl Eligibility {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    /// Returns true iff this paper will be included in the rankings.
    ///
    /// Papers outside the year window never count. Papers in a
    /// [`TrackedJournal`] count only when the year appears in that journal's
    /// table and the volume is allowed for it. Every other venue counts.
    pub fn count_paper(&self, paper: &Publication<'_>) -> bool {
        if !self.config.years.contains(paper.year) {
            tracing::debug!(
                venue = paper.venue,
                year = paper.year,
                "rejected: year out of range"
            );
            return false;
        }

        let Some(journal) = TrackedJournal::from_canonical(paper.venue) else {
            tracing::trace!(venue = paper.venue, year = paper.year, "untracked venue");
            return true;
        };

        let Some(allowed) = journal.allowed_volumes(paper.year) else {
            tracing::debug!(
                journal = %journal,
                year = paper.year,
                "rejected: no eligible issues this year"
            );
            return false;
        };

        if !self.config.volume_match.matches(allowed, paper.volume) {
            tracing::debug!(
                journal = %journal,
                year = paper.year,
                volume = paper.volume,
                allowed = %allowed,
                "rejected: volume not allowed"
            );
            return false;
        }

        true
    }
}

/// [`Eligibility::count_paper`] with the default year window and strict
/// volume matching.
pub fn count_paper(paper: &Publication<'_>) -> bool {
    DEFAULT_ELIGIBILITY.count_paper(paper)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy() -> Eligibility {
        Eligibility::new(EligibilityConfig {
            volume_match: VolumeMatch::Legacy,
            ..Default::default()
        })
    }

    #[test]
    fn year_window_applies_to_every_venue() {
        for venue in ["CVPR", "Soc. Networks", "IEEE Trans. Comput. Soc. Syst."] {
            assert!(!count_paper(&Publication::new(venue, 1969, "1")));
            assert!(!count_paper(&Publication::new(venue, 2270, "1")));
        }
        assert!(count_paper(&Publication::new("CVPR", 1970, "")));
        assert!(count_paper(&Publication::new("CVPR", 2269, "")));
    }

    #[test]
    fn custom_year_window() {
        let elig = Eligibility::new(EligibilityConfig {
            years: YearRange {
                start: 2000,
                end: 2010,
            },
            ..Default::default()
        });
        assert!(!elig.count_paper(&Publication::new("CVPR", 1999, "")));
        assert!(elig.count_paper(&Publication::new("CVPR", 2005, "")));
        assert!(!elig.count_paper(&Publication::new("CVPR", 2011, "")));
    }

    #[test]
    fn tcss_single_volume() {
        let venue = "IEEE Trans. Comput. Soc. Syst.";
        assert!(count_paper(&Publication::new(venue, 2021, "8")));
        assert!(!count_paper(&Publication::new(venue, 2021, "7")));
        assert!(!count_paper(&Publication::new(venue, 2022, "8")));
    }

    #[test]
    fn tsc_multi_volume_year() {
        let venue = "ACM Trans. Soc. Comput.";
        assert!(count_paper(&Publication::new(venue, 2020, "2")));
        assert!(count_paper(&Publication::new(venue, 2020, "3")));
        assert!(!count_paper(&Publication::new(venue, 2020, "4")));
        assert!(!count_paper(&Publication::new(venue, 2017, "1")));
    }

    #[test]
    fn strict_trims_whitespace() {
        assert!(count_paper(&Publication::new("J. Soc. Comput.", 2021, " 2 ")));
    }

    #[test]
    fn strict_rejects_partial_and_empty_volumes() {
        let venue = "Soc. Networks";
        assert!(!count_paper(&Publication::new(venue, 2021, "6")));
        assert!(!count_paper(&Publication::new(venue, 2021, "")));
        assert!(!count_paper(&Publication::new(venue, 2021, "64a")));
        assert!(!count_paper(&Publication::new(venue, 2021, "+64")));
        assert!(!count_paper(&Publication::new(venue, 2021, "-64")));
        assert!(count_paper(&Publication::new(venue, 2021, "064")));
    }

    #[test]
    fn legacy_accepts_substrings() {
        let elig = legacy();
        let venue = "Soc. Networks";
        assert!(elig.count_paper(&Publication::new(venue, 2021, "64")));
        assert!(elig.count_paper(&Publication::new(venue, 2021, "6")));
        assert!(elig.count_paper(&Publication::new(venue, 2021, "4, 6")));
        assert!(elig.count_paper(&Publication::new(venue, 2021, "")));
        assert!(!elig.count_paper(&Publication::new(venue, 2021, "99")));
        // Still needs the year in the table.
        assert!(!elig.count_paper(&Publication::new(venue, 1998, "")));
    }

    #[test]
    fn legacy_single_volume_has_no_braces() {
        let elig = legacy();
        let venue = "IEEE Trans. Comput. Soc. Syst.";
        assert!(elig.count_paper(&Publication::new(venue, 2021, "8")));
        assert!(!elig.count_paper(&Publication::new(venue, 2021, "{")));
    }

    #[test]
    fn volume_match_from_str() {
        assert_eq!("strict".parse::<VolumeMatch>().unwrap(), VolumeMatch::Strict);
        assert_eq!(" Legacy ".parse::<VolumeMatch>().unwrap(), VolumeMatch::Legacy);
        assert!(matches!(
            "fuzzy".parse::<VolumeMatch>(),
            Err(ConfigError::UnknownVolumeMatch(_))
        ));
    }

    #[test]
    fn non_canonical_alias_is_not_filtered() {
        assert!(count_paper(&Publication::new("Social Networks", 2030, "1")));
    }

    #[test]
    fn with_pages_fills_derived_fields() {
        let paper = Publication::new("CVPR", 2021, "1").with_pages("12:140-12:150");
        assert_eq!(paper.start_page, 140);
        assert_eq!(paper.page_count, 11);
        assert!(paper.meets_page_threshold());

        let short = Publication::new("CVPR", 2021, "1").with_pages("17");
        assert_eq!(short.page_count, 0);
        assert!(!short.meets_page_threshold());
        // Page data never affects the predicate.
        assert!(count_paper(&short));
    }
}
