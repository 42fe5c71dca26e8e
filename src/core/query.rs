//! Search patterns and sort criteria for the beer list
//!
//! Both halves are pure: filtering never reorders, sorting never drops.

use crate::core::beer::Beer;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How the search box text is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Case-insensitive substring of the beer name
    #[default]
    Substring,

    /// Case-insensitive regular expression over the beer name
    ///
    /// An expression that does not compile is matched as a literal substring.
    Regex,
}

#[derive(Debug, Clone)]
enum Matcher {
    All,
    Pattern(Regex),
    // Only reached when the escaped literal exceeds the regex size limit
    Lowercase(String),
}

/// The current content of the search box
///
/// # Example
///
/// ```
/// use beers::core::query::SearchPattern;
/// use beers::core::beer::bundled_beers;
///
/// let pattern = SearchPattern::new("dubbel");
/// let hits: Vec<_> = bundled_beers()
///     .into_iter()
///     .filter(|beer| pattern.matches(beer))
///     .collect();
/// assert_eq!(hits.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SearchPattern {
    raw: String,
    mode: SearchMode,
    matcher: Matcher,
}

impl SearchPattern {
    /// Substring pattern
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_mode(raw, SearchMode::Substring)
    }

    pub fn with_mode(raw: impl Into<String>, mode: SearchMode) -> Self {
        let raw = raw.into();
        let matcher = compile(&raw, mode);
        Self { raw, mode, matcher }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// True when the pattern is empty or the beer's name matches it.
    /// A beer without a name never matches, not even the empty pattern.
    pub fn matches(&self, beer: &Beer) -> bool {
        match &self.matcher {
            Matcher::All => beer.name.is_some(),
            Matcher::Pattern(regex) => beer.name.as_deref().is_some_and(|n| regex.is_match(n)),
            Matcher::Lowercase(needle) => beer
                .name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(needle.as_str())),
        }
    }
}

impl Default for SearchPattern {
    fn default() -> Self {
        Self::new("")
    }
}

impl PartialEq for SearchPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.mode == other.mode
    }
}

fn compile(raw: &str, mode: SearchMode) -> Matcher {
    if raw.is_empty() {
        return Matcher::All;
    }

    if mode == SearchMode::Regex {
        match RegexBuilder::new(raw).case_insensitive(true).build() {
            Ok(regex) => return Matcher::Pattern(regex),
            Err(e) => {
                tracing::warn!(pattern = %raw, error = %e, "Invalid search expression, matching literally");
            }
        }
    }

    match RegexBuilder::new(&regex::escape(raw))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => Matcher::Pattern(regex),
        Err(_) => Matcher::Lowercase(raw.to_lowercase()),
    }
}

/// Shorthand for a one-off substring match
pub fn matches(beer: &Beer, pattern: &str) -> bool {
    SearchPattern::new(pattern).matches(beer)
}

/// Keep the beers matching `pattern`, in their original order
pub fn filter(beers: &[Beer], pattern: &SearchPattern) -> Vec<Beer> {
    beers
        .iter()
        .filter(|beer| pattern.matches(beer))
        .cloned()
        .collect()
}

// =============================================================================
// Sorting
// =============================================================================

/// Field of a [`Beer`] the list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Alcohol,
}

impl SortKey {
    /// Value used in the sort `<select>` options and in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Alcohol => "alcohol",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortKey::Name),
            "alcohol" => Ok(SortKey::Alcohol),
            other => Err(format!("unknown sort key '{}'", other)),
        }
    }
}

/// A selectable sort order: the field plus the label shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion {
    pub key: SortKey,
    pub label: String,
}

impl SortCriterion {
    pub fn new(key: SortKey, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }

    /// Look up one of the fixed criteria by its key
    pub fn find(key: SortKey) -> Self {
        sorting_criteria()
            .into_iter()
            .find(|c| c.key == key)
            .unwrap_or_default()
    }
}

impl Default for SortCriterion {
    fn default() -> Self {
        Self::new(SortKey::Name, "Alphabetical")
    }
}

/// The fixed set of criteria, in the order the select box shows them
pub fn sorting_criteria() -> Vec<SortCriterion> {
    vec![
        SortCriterion::new(SortKey::Name, "Alphabetical"),
        SortCriterion::new(SortKey::Alcohol, "Alcohol content"),
    ]
}

/// Compare two beers on `key`, reversed when `descending`
///
/// Equal fields compare `Equal` regardless of direction. Names order
/// lexicographically with a missing name first; alcohol content orders
/// numerically.
pub fn compare(a: &Beer, b: &Beer, key: SortKey, descending: bool) -> Ordering {
    let ordering = match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Alcohol => a
            .alcohol_content
            .partial_cmp(&b.alcohol_content)
            .unwrap_or(Ordering::Equal),
    };

    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Sort `beers` by `criterion`. Ties keep their incoming order.
pub fn sort(mut beers: Vec<Beer>, criterion: &SortCriterion, descending: bool) -> Vec<Beer> {
    beers.sort_by(|a, b| compare(a, b, criterion.key, descending));
    beers
}
