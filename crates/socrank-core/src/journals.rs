//! Journals tracked as if they were conferences.
//!
//! Only selected issues of each journal count. Each journal carries a
//! year → allowed volumes table; a year missing from the table has no
//! eligible issues.

use std::fmt;

use crate::venues::Area;
use AllowedVolumes::{Set, Single};

/// Volumes (or issues) of a journal that count for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedVolumes {
    /// One volume per year, stored as a bare number.
    Single(u32),
    /// Several volumes per year, in ascending order.
    Set(&'static [u32]),
}

impl AllowedVolumes {
    pub fn contains(&self, volume: u32) -> bool {
        match self {
            Self::Single(v) => *v == volume,
            Self::Set(vs) => vs.contains(&volume),
        }
    }

    /// Legacy text form of the allowed volumes: `8` or `{2, 3}`.
    ///
    /// Substring matching against this text is what
    /// [`VolumeMatch::Legacy`](crate::VolumeMatch::Legacy) checks.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AllowedVolumes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(v) => write!(f, "{v}"),
            Self::Set(vs) => {
                f.write_str("{")?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

type YearTable = &'static [(i32, AllowedVolumes)];

const TCSS_VOLUMES: YearTable = &[
    (2021, Single(8)),
    (2020, Single(7)),
    (2019, Single(6)),
    (2018, Single(5)),
    (2017, Single(4)),
    (2016, Single(3)),
    (2015, Single(2)),
    (2014, Single(1)),
];

const TSC_VOLUMES: YearTable = &[
    (2021, Set(&[4])),
    (2020, Set(&[2, 3])),
    (2019, Set(&[2])),
    (2018, Set(&[1])),
];

const SOCIAL_NETWORKS_VOLUMES: YearTable = &[
    (2021, Set(&[64, 65, 66])),
    (2020, Set(&[60, 61, 62, 63])),
    (2019, Set(&[56, 57, 58, 59])),
    (2018, Set(&[52, 53, 54, 55])),
    (2017, Set(&[48, 49, 50, 51])),
    (2016, Set(&[44, 45, 46, 47])),
    (2015, Set(&[40, 41, 42, 43])),
    (2014, Set(&[36, 37, 38, 39])),
    (2013, Set(&[35])),
    (2012, Set(&[34])),
    (2011, Set(&[33])),
    (2010, Set(&[32])),
    (2009, Set(&[31])),
    (2008, Set(&[30])),
    (2007, Set(&[29])),
    (2006, Set(&[28])),
    (2005, Set(&[27])),
    (2004, Set(&[26])),
    (2003, Set(&[25])),
    (2002, Set(&[24])),
    (2001, Set(&[23])),
    (2000, Set(&[22])),
    (1999, Set(&[21])),
];

const JSC_VOLUMES: YearTable = &[(2021, Set(&[2])), (2020, Set(&[1]))];

const SNAM_VOLUMES: YearTable = &[
    (2021, Set(&[11])),
    (2020, Set(&[10])),
    (2019, Set(&[9])),
    (2018, Set(&[8])),
    (2017, Set(&[7])),
    (2016, Set(&[6])),
    (2015, Set(&[5])),
    (2014, Set(&[4])),
    (2013, Set(&[3])),
    (2012, Set(&[2])),
    (2011, Set(&[1])),
];

/// A journal whose issues are filtered by volume before they count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedJournal {
    /// IEEE Transactions on Computational Social Systems
    Tcss,
    /// ACM Transactions on Social Computing
    Tsc,
    /// Social Networks (Elsevier)
    SocialNetworks,
    /// Journal of Social Computing
    Jsc,
    /// Social Network Analysis and Mining
    Snam,
}

impl TrackedJournal {
    pub const ALL: [TrackedJournal; 5] = [
        Self::Tcss,
        Self::Tsc,
        Self::SocialNetworks,
        Self::Jsc,
        Self::Snam,
    ];

    /// Resolve an exact canonical venue name. Other aliases do not match.
    pub fn from_canonical(venue: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|journal| journal.canonical_name() == venue)
    }

    /// The abbreviated name records carry for this journal.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::Tcss => "IEEE Trans. Comput. Soc. Syst.",
            Self::Tsc => "ACM Trans. Soc. Comput.",
            Self::SocialNetworks => "Soc. Networks",
            Self::Jsc => "J. Soc. Comput.",
            Self::Snam => "Soc. Netw. Anal. Min.",
        }
    }

    pub fn area(&self) -> Area {
        Area::new(match self {
            Self::Tcss => "tcss",
            Self::Tsc => "tsc",
            Self::SocialNetworks => "socnet",
            Self::Jsc => "jsc",
            Self::Snam => "snam",
        })
    }

    fn year_table(&self) -> YearTable {
        match self {
            Self::Tcss => TCSS_VOLUMES,
            Self::Tsc => TSC_VOLUMES,
            Self::SocialNetworks => SOCIAL_NETWORKS_VOLUMES,
            Self::Jsc => JSC_VOLUMES,
            Self::Snam => SNAM_VOLUMES,
        }
    }

    /// Volumes that count in `year`, or `None` if no issue that year counts.
    pub fn allowed_volumes(&self, year: i32) -> Option<&'static AllowedVolumes> {
        self.year_table()
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, volumes)| volumes)
    }

    /// Years with at least one eligible issue, newest first.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.year_table().iter().map(|(year, _)| *year)
    }
}

impl fmt::Display for TrackedJournal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}
