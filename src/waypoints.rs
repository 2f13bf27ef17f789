//! Coordinate precision normalization for `.wpt` files.
//!
//! A waypoint line is `LABEL [ALT_LABEL...] URL`, where the URL carries the
//! position as `...?lat=<lat>&lon=<lon>`. Each line is rewritten with the
//! same labels and an OpenStreetMap URL at exactly six decimal places.

use crate::error::{Result, TmToolsError};
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// URL prefix written in front of the rewritten coordinates
pub const OSM_URL_PREFIX: &str = "http://www.openstreetmap.org/?lat=";

/// Separator between the latitude and longitude parameters
pub const LON_PARAM_SEPARATOR: &str = "&lon";

/// Splitting the URL on `=` leaves the `&lon` separator glued to the end of
/// the latitude value. It is removed by length, not by content.
pub const URL_PARAM_SUFFIX_LEN: usize = LON_PARAM_SEPARATOR.len();

/// Digits written after the decimal point
pub const PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}={}",
            OSM_URL_PREFIX,
            format_fixed(self.lat, PRECISION),
            LON_PARAM_SEPARATOR,
            format_fixed(self.lon, PRECISION)
        )
    }
}

/// Format `value` with exactly `places` decimals, rounding half up.
///
/// Rounding works on the shortest decimal text that round-trips to `value`,
/// not on its exact binary expansion, so `0.0078125` gives `0.007813` and
/// `-75.0000005` gives `-75.000001`.
pub fn format_fixed(value: f64, places: usize) -> String {
    // f64 Display never uses exponent notation
    let shortest = format!("{}", value.abs());
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    let frac = frac_part.as_bytes();
    digits.extend((0..places).map(|i| frac.get(i).copied().unwrap_or(b'0')));

    if frac.get(places).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| *d as char));
    if places > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| *d as char));
    }
    out
}

/// One parsed `.wpt` line
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointRecord {
    pub label: String,
    pub alt_labels: Vec<String>,
    pub coordinates: Coordinates,
}

impl WaypointRecord {
    /// Parse one line. `line_number` is 1-based and only used in errors.
    pub fn parse(line_number: usize, line: &str) -> Result<Self> {
        let mut fields: Vec<&str> = line.split(' ').collect();
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }

        let (url, labels) = match fields.split_last() {
            Some((url, labels)) if !labels.is_empty() => (*url, labels),
            _ => {
                return Err(TmToolsError::malformed(
                    line_number,
                    line,
                    "expected at least a label and a URL",
                ))
            }
        };

        let coordinates = parse_url(line_number, line, url)?;

        Ok(WaypointRecord {
            label: labels[0].to_string(),
            alt_labels: labels[1..].iter().map(|s| s.to_string()).collect(),
            coordinates,
        })
    }
}

impl fmt::Display for WaypointRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        for alt in &self.alt_labels {
            write!(f, " {}", alt)?;
        }
        write!(f, " {}", self.coordinates)
    }
}

fn parse_url(line_number: usize, line: &str, url: &str) -> Result<Coordinates> {
    let parts: Vec<&str> = url.split('=').collect();
    if parts.len() < 3 {
        return Err(TmToolsError::malformed(
            line_number,
            line,
            "URL needs lat= and lon= parameters",
        ));
    }

    let lat_part = parts[1];
    let cut = match lat_part.char_indices().rev().nth(URL_PARAM_SUFFIX_LEN - 1) {
        Some((index, _)) => index,
        None => {
            return Err(TmToolsError::malformed(
                line_number,
                line,
                "latitude parameter is too short",
            ))
        }
    };
    let (lat_text, suffix) = lat_part.split_at(cut);
    if suffix != LON_PARAM_SEPARATOR {
        warn!(
            line = line_number,
            suffix, "unexpected separator after latitude, removed anyway"
        );
    }

    Ok(Coordinates {
        lat: parse_number(line_number, line, lat_text)?,
        lon: parse_number(line_number, line, parts[2])?,
    })
}

fn parse_number(line_number: usize, line: &str, text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TmToolsError::NumericParse {
            line: line_number,
            content: line.to_string(),
            value: text.to_string(),
        }),
    }
}

/// Rewrite every line of `reader` to `writer`.
///
/// Each line is written as soon as it is parsed; on error, everything before
/// the bad line has already been written and flushed. Returns the number of
/// records written.
pub fn normalize<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<usize> {
    let mut count = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record = match WaypointRecord::parse(index + 1, &line) {
            Ok(record) => record,
            Err(e) => {
                writer.flush()?;
                return Err(e);
            }
        };
        writeln!(writer, "{}", record)?;
        count += 1;
    }

    writer.flush()?;
    info!(records = count, "finished normalizing waypoints");
    Ok(count)
}
