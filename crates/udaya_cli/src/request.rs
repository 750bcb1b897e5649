//! Request decoding.
//!
//! Numeric fields are lenient: `year`/`month`/`day` accept JSON integers,
//! floats (truncated toward zero) and integer strings; `lat`/`lon`/`tz`
//! accept JSON numbers and numeric strings. `null` counts as missing, so a
//! `null` city or time hint takes its default.

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::error::RequestError;

pub const DEFAULT_CITY: &str = "lusaka";
pub const DEFAULT_TIME_HINT: &str = "morning";

/// A decoded request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Lowercased, echoed back.
    pub city: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub time_hint: String,
    /// Accepted and ignored.
    pub physical_traits: Option<String>,
    pub lat: f64,
    pub lon: f64,
    /// Hours east of UTC.
    pub tz: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Lenient {
    Number(Number),
    Text(String),
    Other(Value),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRequest {
    city: Option<String>,
    year: Option<Lenient>,
    month: Option<Lenient>,
    day: Option<Lenient>,
    time_hint: Option<String>,
    physical_traits: Option<Value>,
    lat: Option<Lenient>,
    lon: Option<Lenient>,
    tz: Option<Lenient>,
}

impl Request {
    /// Decode a request from JSON text.
    pub fn from_json(input: &str) -> Result<Self, RequestError> {
        let raw: RawRequest = serde_json::from_str(input)?;
        Ok(Self {
            city: raw.city.as_deref().unwrap_or(DEFAULT_CITY).to_lowercase(),
            year: int_field("year", raw.year)?,
            month: int_field("month", raw.month)?,
            day: int_field("day", raw.day)?,
            time_hint: raw
                .time_hint
                .unwrap_or_else(|| DEFAULT_TIME_HINT.to_string()),
            physical_traits: raw.physical_traits.map(|v| match v {
                Value::String(s) => s,
                other => other.to_string(),
            }),
            lat: float_field("lat", raw.lat)?,
            lon: float_field("lon", raw.lon)?,
            tz: float_field("tz", raw.tz)?,
        })
    }
}

fn invalid(field: &'static str, expected: &'static str, value: impl ToString) -> RequestError {
    RequestError::InvalidValue {
        field,
        expected,
        value: value.to_string(),
    }
}

fn int_field<T: TryFrom<i64>>(field: &'static str, v: Option<Lenient>) -> Result<T, RequestError> {
    const EXPECTED: &str = "an integer";
    let n: i64 = match v.ok_or(RequestError::MissingField(field))? {
        Lenient::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => match n.as_f64() {
                Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => f.trunc() as i64,
                _ => return Err(invalid(field, EXPECTED, n)),
            },
        },
        Lenient::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| invalid(field, EXPECTED, format!("{s:?}")))?,
        Lenient::Other(Value::Null) => return Err(RequestError::MissingField(field)),
        Lenient::Other(other) => return Err(invalid(field, EXPECTED, other)),
    };
    T::try_from(n).map_err(|_| invalid(field, "in range", n))
}

fn float_field(field: &'static str, v: Option<Lenient>) -> Result<f64, RequestError> {
    const EXPECTED: &str = "a number";
    match v.ok_or(RequestError::MissingField(field))? {
        Lenient::Number(n) => n.as_f64().ok_or_else(|| invalid(field, EXPECTED, n)),
        Lenient::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| invalid(field, EXPECTED, format!("{s:?}"))),
        Lenient::Other(Value::Null) => Err(RequestError::MissingField(field)),
        Lenient::Other(other) => Err(invalid(field, EXPECTED, other)),
    }
}
