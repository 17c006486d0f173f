use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Citation page formats recognized by [`PageRange::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageFormat {
    /// Ordinary page numbers, as in `10-17`.
    Simple,
    /// Volume-qualified pages, as in `12:140-12:150`.
    Colon,
}

impl PageFormat {
    /// Formats in the order they are tried. The first match wins.
    pub const ORDER: [PageFormat; 2] = [PageFormat::Simple, PageFormat::Colon];

    fn regex(&self) -> &'static Regex {
        static SIMPLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)-([0-9]+)").unwrap());
        // Volume numbers are discarded; pages may not carry a leading zero.
        static COLON_RE: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^[0-9]+:([1-9][0-9]*)-[0-9]+:([1-9][0-9]*)").unwrap());

        match self {
            Self::Simple => &*SIMPLE_RE,
            Self::Colon => &*COLON_RE,
        }
    }

    /// Match this format against the start of `pages`.
    ///
    /// Trailing text after a valid prefix is ignored.
    pub fn match_prefix(&self, pages: &str) -> Option<PageRange> {
        let caps = self.regex().captures(pages)?;
        PageRange::from_captures(&caps, *self)
    }
}

/// A first/last page pair extracted from a page string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: i64,
    pub end: i64,
    pub format: PageFormat,
}

impl PageRange {
    /// Parse a page string, trying each [`PageFormat`] in order.
    ///
    /// Returns `None` for empty strings, single pages, text, digit runs too
    /// long to fit an `i64`, and ranges whose page count would not fit one.
    pub fn parse(pages: &str) -> Option<PageRange> {
        PageFormat::ORDER
            .iter()
            .find_map(|format| format.match_prefix(pages))
    }

    /// Number of pages covered, `end - start + 1`.
    ///
    /// Reversed ranges yield zero or a negative count; the value is not
    /// clamped so bad source data stays visible to callers. Ranges from
    /// [`PageRange::parse`] never overflow; hand-built ones saturate.
    pub fn count(&self) -> i64 {
        Self::checked_count(self.start, self.end)
            .unwrap_or_else(|| self.end.saturating_sub(self.start).saturating_add(1))
    }

    fn checked_count(start: i64, end: i64) -> Option<i64> {
        end.checked_sub(start)?.checked_add(1)
    }

    fn from_captures(caps: &Captures<'_>, format: PageFormat) -> Option<PageRange> {
        let start = caps.get(1)?.as_str().parse().ok()?;
        let end = caps.get(2)?.as_str().parse().ok()?;
        Self::checked_count(start, end)?;
        Some(PageRange { start, end, format })
    }
}

/// Parse ISMB proceedings pages of the form `i120-i128`.
///
/// Bioinformatics supplement issues prefix every page with `i`. This format
/// is not part of [`PageFormat::ORDER`].
pub fn parse_ismb(pages: &str) -> Option<(i64, i64)> {
    static ISMB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^i([0-9]+)-i([0-9]+)").unwrap());

    let caps = ISMB_RE.captures(pages)?;
    let start = caps[1].parse().ok()?;
    let end = caps[2].parse().ok()?;
    Some((start, end))
}

/// Extract the two volume numbers from a colon range such as `12:140-13:150`.
///
/// Some journals (TECS, for example) put a per-paper number in the volume
/// slot, so the leading numbers identify the paper rather than its pages.
pub fn colon_volumes(pages: &str) -> Option<(i64, i64)> {
    static VOLUME_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^([0-9]+):[1-9][0-9]*-([0-9]+):[1-9][0-9]*").unwrap());

    let caps = VOLUME_RE.captures(pages)?;
    let first = caps[1].parse().ok()?;
    let second = caps[2].parse().ok()?;
    Some((first, second))
}
