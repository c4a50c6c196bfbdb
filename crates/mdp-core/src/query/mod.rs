//! Filtering and ordering for `issue list` and `milestone list`

pub mod issue;
pub mod milestone;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::bail_invalid;
use crate::entity::computed::parse_date;
use crate::error::{MdpError, Result};

pub use issue::{IssueFilter, IssueSortField};
pub use milestone::{MilestoneFilter, MilestoneSortField};

/// Direction of a list sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = MdpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => bail_invalid!(
                format!("Invalid sort order \"{}\". Valid orders: asc, desc", other),
                "order" => other
            ),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Stable sort by `compare`, then reverse the whole list for descending order.
///
/// Reversing after the sort means equal items also come out in reverse
/// input order when descending.
pub fn sort_with<T>(items: &mut [T], order: SortOrder, compare: impl Fn(&T, &T) -> Ordering) {
    items.sort_by(compare);
    if order == SortOrder::Desc {
        items.reverse();
    }
}

/// Validate a `YYYY-MM-DD` filter value
pub fn validate_date(value: &str) -> Result<String> {
    match parse_date(value) {
        Some(_) => Ok(value.to_string()),
        None => Err(MdpError::InvalidDate(value.to_string())),
    }
}

/// Case-insensitive membership of `value` in `wanted`
fn any_eq_ignore_case(wanted: &[String], value: &str) -> bool {
    wanted.iter().any(|w| w.eq_ignore_ascii_case(value))
}

/// Match an optional reference against a filter where `none` selects unset values
fn matches_ref_or_none(filter: &str, value: Option<&str>) -> bool {
    if filter.eq_ignore_ascii_case("none") {
        value.is_none()
    } else {
        value.is_some_and(|v| v.eq_ignore_ascii_case(filter))
    }
}

fn names_list(names: &[&str]) -> String {
    names.join(", ")
}
