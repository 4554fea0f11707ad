//! Argument checks run before a call is built

use std::fmt;
use std::str::FromStr;

use crate::auth::Session;
use crate::error::{LastfmError, LastfmResult};

/// Maximum number of tags accepted by `addTags`
pub const MAX_TAGS: usize = 10;

/// The value unchanged, or `None` when it is missing or blank
pub(crate) fn provided(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Require a non-blank scalar argument, returned as given
pub fn require<'a>(name: &str, value: &'a str) -> LastfmResult<&'a str> {
    provided(Some(value)).ok_or_else(|| LastfmError::MissingRequiredParameter(name.to_string()))
}

/// Require either every natural-key field or an opaque MusicBrainz id
///
/// `natural` holds `(name, value)` pairs such as `("artist", ..)` and
/// `("album", ..)`. Empty strings count as missing.
pub fn require_identity(
    natural: &[(&str, Option<&str>)],
    mbid: Option<&str>,
) -> LastfmResult<()> {
    if provided(mbid).is_some() {
        return Ok(());
    }
    if natural.iter().all(|(_, value)| provided(*value).is_some()) {
        return Ok(());
    }
    let names: Vec<&str> = natural.iter().map(|(name, _)| *name).collect();
    Err(LastfmError::MissingRequiredParameter(format!(
        "{} or mbid",
        names.join(" and ")
    )))
}

/// Require a username when the client holds no session
pub fn require_user_unless_authenticated(
    user: Option<&str>,
    session: &Session,
) -> LastfmResult<()> {
    if session.is_authenticated() || provided(user).is_some() {
        Ok(())
    } else {
        Err(LastfmError::UserRequiredUnlessAuth)
    }
}

/// Tags as given by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagList {
    /// Already comma-joined, e.g. `"rock,alternative"`
    Delimited(String),
    /// One entry per tag
    List(Vec<String>),
}

impl TagList {
    /// Number of tags, counting comma-separated pieces for the delimited form
    pub fn count(&self) -> usize {
        match self {
            TagList::Delimited(s) => s.split(',').count(),
            TagList::List(tags) => tags.len(),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            TagList::Delimited(s) => s.split(',').all(|t| t.trim().is_empty()),
            TagList::List(tags) => tags.iter().all(|t| t.trim().is_empty()),
        }
    }

    fn joined(self) -> String {
        match self {
            TagList::Delimited(s) => s,
            TagList::List(tags) => tags.join(","),
        }
    }
}

impl From<&str> for TagList {
    fn from(s: &str) -> Self {
        TagList::Delimited(s.to_string())
    }
}

impl From<String> for TagList {
    fn from(s: String) -> Self {
        TagList::Delimited(s)
    }
}

impl From<Vec<String>> for TagList {
    fn from(tags: Vec<String>) -> Self {
        TagList::List(tags)
    }
}

impl From<Vec<&str>> for TagList {
    fn from(tags: Vec<&str>) -> Self {
        TagList::List(tags.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for TagList {
    fn from(tags: &[&str]) -> Self {
        TagList::List(tags.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TagList {
    fn from(tags: [&str; N]) -> Self {
        TagList::List(tags.iter().map(|t| t.to_string()).collect())
    }
}

/// Enforce the tag bound and serialize to the single comma-joined value that
/// gets sent (and signed)
pub fn check_tags(tags: TagList) -> LastfmResult<String> {
    let count = tags.count();
    if count > MAX_TAGS {
        return Err(LastfmError::TooManyTags { count });
    }
    if tags.is_blank() {
        return Err(LastfmError::MissingRequiredParameter("tags".to_string()));
    }
    Ok(tags.joined())
}

/// Time range for `user.getTop*`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Period {
    #[default]
    Overall,
    SevenDays,
    OneMonth,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl Period {
    pub const ALL: [Period; 6] = [
        Period::Overall,
        Period::SevenDays,
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::TwelveMonths,
    ];

    /// Wire token
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Overall => "overall",
            Period::SevenDays => "7day",
            Period::OneMonth => "1month",
            Period::ThreeMonths => "3month",
            Period::SixMonths => "6month",
            Period::TwelveMonths => "12month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = LastfmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| LastfmError::InvalidPeriod(s.to_string()))
    }
}

/// Parse a period token; matching is exact and case-sensitive
pub fn check_period(period: &str) -> LastfmResult<Period> {
    period.parse()
}
