//! NAIF leap-second kernel (LSK) text parser.
//!
//! Only the `\begindata` blocks are read. Each assignment has the shape
//! `NAME = value` or `NAME = ( v1 v2 ... )`, and array values may span
//! several lines. Numbers may use Fortran `D` exponents and dates are
//! written as `@1972-JAN-1`.

use std::collections::HashMap;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_tdb_seconds, month_from_abbrev};

/// The `DELTET/*` variables of an LSK.
#[derive(Debug, Clone, PartialEq)]
pub struct LskData {
    /// TT − TAI in seconds (`DELTET/DELTA_T_A`).
    pub delta_t_a: f64,
    /// Amplitude of the periodic TDB − TT term in seconds (`DELTET/K`).
    pub k: f64,
    /// Eccentricity of the heliocentric orbit of the EMB (`DELTET/EB`).
    pub eb: f64,
    /// Mean anomaly at J2000 in radians (`DELTET/M[0]`).
    pub m0: f64,
    /// Mean anomaly rate in rad/s (`DELTET/M[1]`).
    pub m1: f64,
    /// `(ΔAT, utc_seconds_past_j2000)` pairs, ascending by epoch.
    pub leap_seconds: Vec<(f64, f64)>,
}

impl LskData {
    /// ΔAT (TAI − UTC) in effect at a UTC epoch.
    ///
    /// Epochs before the first table entry use the first entry's value.
    pub fn delta_at(&self, utc_s: f64) -> f64 {
        let mut value = self.leap_seconds.first().map_or(0.0, |&(d, _)| d);
        for &(delta, epoch) in &self.leap_seconds {
            if utc_s >= epoch {
                value = delta;
            } else {
                break;
            }
        }
        value
    }
}

type Pool = HashMap<String, Vec<f64>>;

/// Parse LSK text content.
pub fn parse_lsk(content: &str) -> Result<LskData, TimeError> {
    let data = data_blocks(content);
    if data.trim().is_empty() {
        return Err(TimeError::LskParse("no \\begindata section found".into()));
    }
    let pool = parse_pool(&data)?;

    let m = require(&pool, "DELTET/M")?;
    if m.len() < 2 {
        return Err(TimeError::LskParse("DELTET/M needs 2 values".into()));
    }

    let flat = require(&pool, "DELTET/DELTA_AT")?;
    if flat.len() % 2 != 0 {
        return Err(TimeError::LskParse(
            "DELTET/DELTA_AT must hold (delta, epoch) pairs".into(),
        ));
    }
    let mut leap_seconds: Vec<(f64, f64)> = flat.chunks(2).map(|p| (p[0], p[1])).collect();
    leap_seconds.sort_by(|a, b| a.1.total_cmp(&b.1));

    Ok(LskData {
        delta_t_a: scalar(&pool, "DELTET/DELTA_T_A")?,
        k: scalar(&pool, "DELTET/K")?,
        eb: scalar(&pool, "DELTET/EB")?,
        m0: m[0],
        m1: m[1],
        leap_seconds,
    })
}

fn data_blocks(content: &str) -> String {
    let mut out = String::new();
    let mut in_data = false;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("\\begindata") {
            in_data = true;
        } else if trimmed.eq_ignore_ascii_case("\\begintext") {
            in_data = false;
        } else if in_data {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn parse_pool(text: &str) -> Result<Pool, TimeError> {
    let mut pool = Pool::new();
    let mut current: Option<(String, Vec<f64>)> = None;
    let mut open = false;

    for line in text.lines() {
        let mut rest = line.trim();
        if rest.is_empty() {
            continue;
        }

        if !open {
            if let Some((name, values)) = current.take() {
                pool.insert(name, values);
            }
            let Some((name, rhs)) = rest.split_once('=') else {
                return Err(TimeError::LskParse(format!("expected assignment: {rest}")));
            };
            current = Some((name.trim().to_string(), Vec::new()));
            rest = rhs.trim();
            if let Some(stripped) = rest.strip_prefix('(') {
                open = true;
                rest = stripped;
            }
        }

        if let Some(stripped) = rest.strip_suffix(')') {
            open = false;
            rest = stripped;
        }

        if let Some((_, values)) = current.as_mut() {
            parse_values(rest, values)?;
        }
    }

    if let Some((name, values)) = current {
        pool.insert(name, values);
    }
    Ok(pool)
}

fn parse_values(text: &str, out: &mut Vec<f64>) -> Result<(), TimeError> {
    for token in text.split([' ', ',', '\t']).filter(|t| !t.is_empty()) {
        let value = match token.strip_prefix('@') {
            Some(date) => parse_date(date)?,
            None => token
                .replace(['D', 'd'], "E")
                .parse::<f64>()
                .map_err(|e| TimeError::LskParse(format!("bad number '{token}': {e}")))?,
        };
        out.push(value);
    }
    Ok(())
}

/// `1972-JAN-1` → seconds past J2000 (on the UTC scale).
fn parse_date(s: &str) -> Result<f64, TimeError> {
    let bad = || TimeError::LskParse(format!("bad date literal @{s}"));
    let mut parts = s.split('-');
    let (Some(y), Some(mon), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(bad());
    };
    let year: i32 = y.parse().map_err(|_| bad())?;
    let month = month_from_abbrev(mon).ok_or_else(bad)?;
    let day: f64 = d.parse().map_err(|_| bad())?;
    Ok(jd_to_tdb_seconds(calendar_to_jd(year, month, day)))
}

fn require<'a>(pool: &'a Pool, name: &str) -> Result<&'a [f64], TimeError> {
    pool.get(name)
        .map(Vec::as_slice)
        .ok_or_else(|| TimeError::LskParse(format!("missing {name}")))
}

fn scalar(pool: &Pool, name: &str) -> Result<f64, TimeError> {
    require(pool, name)?
        .first()
        .copied()
        .ok_or_else(|| TimeError::LskParse(format!("{name} has no values")))
}
