//! Route number tabulation for `.list` files.
//!
//! Each record is `REGION ROUTE [WAYPOINT...]`. The digits embedded in the
//! route name form its number, and routes are grouped under that number:
//!
//! ```
//! use std::io::Cursor;
//! use tm_tools::routes::RouteTable;
//!
//! let input = "US US-1\nUS US-101\n# comment ignored\nCA CA-1\n";
//! let table = RouteTable::from_reader(Cursor::new(input)).unwrap();
//! assert_eq!(table.group(1), Some(&["US-1".to_string(), "CA-1".to_string()][..]));
//! assert_eq!(table.group(101), Some(&["US-101".to_string()][..]));
//! ```

use crate::error::{Result, TmToolsError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::BufRead;
use tracing::{debug, info};

/// Upper end of the missing-number report when none is given
pub const DEFAULT_UPPER_BOUND: u32 = 999;

/// Largest accepted upper end of the missing-number report
pub const MAX_UPPER_BOUND: u32 = 1_000_000;

/// One non-comment `.list` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord<'a> {
    /// Region code; carried for diagnostics only
    pub region: &'a str,
    pub route: &'a str,
}

/// Parse one input line.
///
/// Returns `Ok(None)` for blank lines and comments (first token starts with
/// `#`). Anything else must have at least a region and a route token.
pub fn parse_record(line_number: usize, line: &str) -> Result<Option<RouteRecord<'_>>> {
    let mut tokens = line.split_whitespace();

    let region = match tokens.next() {
        Some(region) => region,
        None => return Ok(None),
    };
    if region.starts_with('#') {
        return Ok(None);
    }

    match tokens.next() {
        Some(route) => Ok(Some(RouteRecord { region, route })),
        None => Err(TmToolsError::malformed(
            line_number,
            line,
            "expected a region and a route",
        )),
    }
}

/// All ASCII digits of `route`, in order of appearance.
///
/// Only `0`-`9` count. Other Unicode decimal digits (Arabic-Indic,
/// fullwidth, ...) are treated like letters, so `R٣` has no number.
pub fn route_digits(route: &str) -> String {
    route.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Number formed by the digits of `route`.
///
/// A route with no digits maps to 0. Returns `None` when the digits do not
/// fit in a `u32`.
pub fn numeric_key(route: &str) -> Option<u32> {
    let digits = route_digits(route);
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse().ok()
}

/// Routes grouped by number, ascending by number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    groups: BTreeMap<u32, Vec<String>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `.list` records until end of input.
    ///
    /// Fails on the first malformed record or out-of-range route number.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = RouteTable::new();
        let mut records = 0usize;
        let mut skipped = 0usize;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;

            let record = match parse_record(line_number, &line)? {
                Some(record) => record,
                None => {
                    skipped += 1;
                    continue;
                }
            };

            let key = numeric_key(record.route).ok_or_else(|| TmToolsError::OutOfRangeKey {
                line: line_number,
                content: line.clone(),
                digits: route_digits(record.route),
            })?;

            if key == 0 && route_digits(record.route).is_empty() {
                debug!(
                    line = line_number,
                    region = record.region,
                    route = record.route,
                    "route has no digits, filed under 0"
                );
            }

            table.insert(key, record.route);
            records += 1;
        }

        info!(
            records,
            skipped,
            numbers = table.len(),
            routes = table.route_count(),
            "finished reading route list"
        );
        Ok(table)
    }

    /// Add `route` under `key` unless that group already holds it.
    ///
    /// Returns `true` if the route was added.
    pub fn insert(&mut self, key: u32, route: &str) -> bool {
        let group = self.groups.entry(key).or_default();
        if group.iter().any(|existing| existing == route) {
            return false;
        }
        group.push(route.to_string());
        true
    }

    pub fn group(&self, key: u32) -> Option<&[String]> {
        self.groups.get(&key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: u32) -> bool {
        self.groups.contains_key(&key)
    }

    /// Groups in ascending number order
    pub fn groups(&self) -> impl Iterator<Item = (u32, &[String])> + '_ {
        self.groups.iter().map(|(key, routes)| (*key, routes.as_slice()))
    }

    /// Number of distinct route numbers
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total distinct (number, route) entries
    pub fn route_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Every number in `1..=upper` that has no group
    pub fn missing(&self, upper: u32) -> Vec<u32> {
        (1..=upper).filter(|n| !self.groups.contains_key(n)).collect()
    }
}

/// One number and its routes, as rendered in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteGroup {
    pub number: u32,
    pub routes: Vec<String>,
}

/// Finished tabulation: the groups plus the missing-number report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub groups: Vec<RouteGroup>,
    pub upper_bound: u32,
    pub missing: Vec<u32>,
}

impl RouteReport {
    /// Build the report for `1..=upper_bound`, clamped to `MAX_UPPER_BOUND`
    pub fn new(table: &RouteTable, upper_bound: u32) -> Self {
        let upper_bound = upper_bound.min(MAX_UPPER_BOUND);
        RouteReport {
            groups: table
                .groups()
                .map(|(number, routes)| RouteGroup {
                    number,
                    routes: routes.to_vec(),
                })
                .collect(),
            upper_bound,
            missing: table.missing(upper_bound),
        }
    }

    /// Header line introducing the missing numbers
    pub fn missing_header(&self) -> String {
        format!(
            "Numbers up to {} for which no entries are found:",
            self.upper_bound
        )
    }
}
