//! # Display Indexes
//!
//! Items are addressed on the command line by short indexes instead of their ids:
//!
//! - `f1`, `f2`, ...: featured items
//! - `1`, `2`, ...: every other item
//!
//! Indexes are assigned over the whole collection sorted newest first, before any
//! filter is applied. Narrowing a listing with `--search` or `--category` therefore
//! never renumbers what remains: `3` in a filtered listing is the same item as `3` in
//! the unfiltered one, and can be passed to `view`, `feature`, `delete`, ... directly.
//!
//! Inputs accept ranges (`2-4`, `f1-f3`) and explicit ids (`id:<value>`) for scripts
//! that want to bypass indexes altogether.

use crate::model::{CatalogItem, Featured};
use std::fmt;
use std::str::FromStr;

/// Prefix selecting an item by id instead of by index.
pub const ID_PREFIX: &str = "id:";

/// Largest number of indexes a single range may expand to.
pub const MAX_RANGE_LEN: usize = 1000;

/// A user-facing index for a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    Featured(usize),
    Regular(usize),
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayIndex::Featured(i) => write!(f, "f{}", i),
            DisplayIndex::Regular(i) => write!(f, "{}", i),
        }
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, featured) = match s.strip_prefix('f') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        // Digits only: no sign, no whitespace
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid index format: {}", s));
        }
        let n: usize = digits
            .parse()
            .map_err(|_| format!("Invalid index format: {}", s))?;
        Ok(if featured {
            DisplayIndex::Featured(n)
        } else {
            DisplayIndex::Regular(n)
        })
    }
}

/// A user input that selects one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    Index(DisplayIndex),
    Id(String),
}

impl fmt::Display for ItemSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemSelector::Index(idx) => write!(f, "{}", idx),
            ItemSelector::Id(id) => write!(f, "{}{}", ID_PREFIX, id),
        }
    }
}

/// An item paired with its display index.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem<I> {
    pub item: I,
    pub index: DisplayIndex,
}

impl<I: Featured> Featured for DisplayItem<I> {
    fn is_featured(&self) -> bool {
        self.item.is_featured()
    }
}

/// Assigns canonical display indexes.
///
/// The input is sorted newest first (ties keep their stored order). The output lists
/// the featured items (`f1..`) followed by the others (`1..`), each group newest first.
pub fn index_items<I: CatalogItem>(mut items: Vec<I>) -> Vec<DisplayItem<I>> {
    items.sort_by_key(|item| std::cmp::Reverse(item.timestamp()));

    let (featured, regular): (Vec<I>, Vec<I>) =
        items.into_iter().partition(|item| item.is_featured());

    let featured = featured
        .into_iter()
        .enumerate()
        .map(|(i, item)| DisplayItem {
            item,
            index: DisplayIndex::Featured(i + 1),
        });
    let regular = regular
        .into_iter()
        .enumerate()
        .map(|(i, item)| DisplayItem {
            item,
            index: DisplayIndex::Regular(i + 1),
        });

    featured.chain(regular).collect()
}

/// Parses a single input that may be either one index or a range of them.
///
/// - Single index: `"3"`, `"f1"`
/// - Range: `"3-5"` (3, 4, 5), `"f1-f3"` (f1, f2, f3)
///
/// Both ends of a range must be of the same kind, start must not exceed end, and the
/// range may cover at most [`MAX_RANGE_LEN`] indexes. Whether the indexes exist is
/// checked later, on resolution.
pub fn parse_index_or_range(s: &str) -> Result<Vec<DisplayIndex>, String> {
    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 {
            let start = DisplayIndex::from_str(&s[..dash_pos])?;
            let end = DisplayIndex::from_str(&s[dash_pos + 1..])?;
            return expand_range(start, end);
        }
    }

    DisplayIndex::from_str(s).map(|idx| vec![idx])
}

fn expand_range(start: DisplayIndex, end: DisplayIndex) -> Result<Vec<DisplayIndex>, String> {
    let too_long = |s: usize, e: usize| e - s >= MAX_RANGE_LEN;
    match (&start, &end) {
        (DisplayIndex::Regular(s), DisplayIndex::Regular(e)) => {
            if s > e {
                return Err(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    s, e
                ));
            }
            if too_long(*s, *e) {
                return Err(format!(
                    "Invalid range: {}-{} covers more than {} items",
                    s, e, MAX_RANGE_LEN
                ));
            }
            Ok((*s..=*e).map(DisplayIndex::Regular).collect())
        }
        (DisplayIndex::Featured(s), DisplayIndex::Featured(e)) => {
            if s > e {
                return Err(format!(
                    "Invalid range: start (f{}) must be <= end (f{})",
                    s, e
                ));
            }
            if too_long(*s, *e) {
                return Err(format!(
                    "Invalid range: f{}-f{} covers more than {} items",
                    s, e, MAX_RANGE_LEN
                ));
            }
            Ok((*s..=*e).map(DisplayIndex::Featured).collect())
        }
        _ => Err(format!(
            "Invalid range: cannot mix index types ({} and {})",
            start, end
        )),
    }
}

/// Parses one selector argument into one or more selectors.
pub fn parse_selector(s: &str) -> Result<Vec<ItemSelector>, String> {
    if let Some(id) = s.strip_prefix(ID_PREFIX) {
        if id.is_empty() {
            return Err("Empty id selector".to_string());
        }
        return Ok(vec![ItemSelector::Id(id.to_string())]);
    }
    parse_index_or_range(s).map(|idxs| idxs.into_iter().map(ItemSelector::Index).collect())
}
