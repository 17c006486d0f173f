//! Area and venue tables.
//!
//! Every venue alias belongs to exactly one area. The reverse index is
//! derived once when the table is built.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::VenueError;

/// Short identifier for a research sub-area, e.g. `tcss`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Area(String);

impl Area {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Built-in area table: area id followed by every alias of its venue.
const AREA_VENUES: &[(&str, &[&str])] = &[
    (
        "tcss",
        &[
            "TCSS",
            "IEEE Transactions on Computational Social Systems",
            "IEEE TCSS",
            "IEEE Trans. Comput. Soc. Syst.",
        ],
    ),
    (
        "tsc",
        &[
            "TSC",
            "tsoco",
            "ACM Transactions on Social Computing",
            "ACM Trans. Soc. Comput.",
        ],
    ),
    ("socnet", &["SocNets", "Social Networks", "Soc. Networks"]),
    (
        "jsc",
        &["JSC", "Journal of Social Computing", "J. Soc. Comput."],
    ),
    (
        "snam",
        &[
            "Social Network Analysis and Mining",
            "Soc. Netw. Anal. Min.",
        ],
    ),
];

static DEFAULT_TABLE: Lazy<AreaTable> = Lazy::new(|| {
    AreaTable::new(AREA_VENUES.iter().map(|(area, venues)| {
        (
            Area::new(*area),
            venues.iter().map(|v| v.to_string()).collect::<Vec<_>>(),
        )
    }))
    .expect("built-in area table has unique venue aliases")
});

/// Ordered Area → venue aliases mapping with its Venue → Area reverse index.
#[derive(Debug, Clone)]
pub struct AreaTable {
    entries: Vec<(Area, Vec<String>)>,
    by_venue: HashMap<String, usize>,
}

impl AreaTable {
    /// Build a table from `(area, aliases)` entries, preserving their order.
    ///
    /// Fails if any alias appears more than once anywhere in the table.
    pub fn new<I, V>(entries: I) -> Result<Self, VenueError>
    where
        I: IntoIterator<Item = (Area, V)>,
        V: IntoIterator<Item = String>,
    {
        let mut table = AreaTable {
            entries: Vec::new(),
            by_venue: HashMap::new(),
        };

        for (area, venues) in entries {
            let index = table.entries.len();
            let venues: Vec<String> = venues.into_iter().collect();
            for venue in &venues {
                if let Some(&prev) = table.by_venue.get(venue) {
                    // `prev == index` when the alias repeats inside this area.
                    let first = table.entries.get(prev).map_or(&area, |(a, _)| a);
                    return Err(VenueError::DuplicateVenue {
                        venue: venue.clone(),
                        first: first.to_string(),
                        second: area.to_string(),
                    });
                }
                table.by_venue.insert(venue.clone(), index);
            }
            table.entries.push((area, venues));
        }

        Ok(table)
    }

    /// The built-in social computing table.
    pub fn builtin() -> &'static AreaTable {
        &DEFAULT_TABLE
    }

    /// Area that owns `venue`, if the venue is known.
    pub fn area_of(&self, venue: &str) -> Option<&Area> {
        self.by_venue.get(venue).map(|&i| &self.entries[i].0)
    }

    /// Aliases listed for `area`, in table order.
    pub fn venues_in(&self, area: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(a, _)| a.as_str() == area)
            .map(|(_, venues)| venues.as_slice())
    }

    /// All areas in table order.
    pub fn areas(&self) -> impl Iterator<Item = &Area> {
        self.entries.iter().map(|(area, _)| area)
    }

    /// All venue aliases in table order.
    pub fn venues(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, venues)| venues.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
