//! Response assembly.

use serde::Serialize;

use crate::sampling::Sample;

/// The JSON document written to stdout. Field order is output order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub sunrise: String,
    pub sunset: String,
    pub intervals: Vec<Sample>,
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    pub tz: f64,
    /// `null` when there are no samples.
    pub ruling_ascendant: Option<&'static str>,
}

impl Response {
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Most frequent ascendant sign. Ties go to the sign seen first.
pub fn ruling_ascendant(samples: &[Sample]) -> Option<&'static str> {
    let mut counts: Vec<(&'static str, usize)> = Vec::with_capacity(12);
    for sample in samples {
        match counts.iter_mut().find(|(sign, _)| *sign == sample.ascendant_sign) {
            Some((_, n)) => *n += 1,
            None => counts.push((sample.ascendant_sign, 1)),
        }
    }
    // max_by_key keeps the last maximum, so walk from the back.
    counts
        .iter()
        .rev()
        .max_by_key(|(_, n)| *n)
        .map(|(sign, _)| *sign)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::Planets;

    fn sample(time: &str, sign: &'static str) -> Sample {
        Sample {
            time: time.to_string(),
            ascendant: 0.0,
            ascendant_sign: sign,
            planets: Planets::default(),
        }
    }

    #[test]
    fn mode_wins() {
        let samples = [
            sample("07:00", "Aries"),
            sample("07:30", "Taurus"),
            sample("08:00", "Taurus"),
        ];
        assert_eq!(ruling_ascendant(&samples), Some("Taurus"));
    }

    #[test]
    fn tie_goes_to_first_seen() {
        let samples = [
            sample("07:00", "Gemini"),
            sample("07:30", "Gemini"),
            sample("08:00", "Cancer"),
            sample("08:30", "Cancer"),
            sample("09:00", "Leo"),
        ];
        assert_eq!(ruling_ascendant(&samples), Some("Gemini"));

        let samples = [sample("07:00", "Virgo"), sample("07:30", "Libra")];
        assert_eq!(ruling_ascendant(&samples), Some("Virgo"));
    }

    #[test]
    fn empty_is_none() {
        assert_eq!(ruling_ascendant(&[]), None);
    }

    #[test]
    fn keys_in_order() {
        let response = Response {
            sunrise: "4:30 UTC".into(),
            sunset: "16:05 UTC".into(),
            intervals: vec![sample("07:00", "Aries")],
            city: "lusaka".into(),
            lat: -15.5,
            lon: 28.25,
            tz: 2.0,
            ruling_ascendant: Some("Aries"),
        };
        let json = response.to_json(false).unwrap();
        assert_eq!(
            json,
            r#"{"sunrise":"4:30 UTC","sunset":"16:05 UTC","intervals":[{"time":"07:00","ascendant":0.0,"ascendant_sign":"Aries","planets":{}}],"city":"lusaka","lat":-15.5,"lon":28.25,"tz":2.0,"ruling_ascendant":"Aries"}"#
        );
        assert!(response.to_json(true).unwrap().contains("\n  \"sunrise\""));
    }

    #[test]
    fn null_ruling_ascendant() {
        let response = Response {
            sunrise: String::new(),
            sunset: String::new(),
            intervals: Vec::new(),
            city: "x".into(),
            lat: 0.0,
            lon: 0.0,
            tz: 0.0,
            ruling_ascendant: None,
        };
        assert!(response.to_json(false).unwrap().ends_with(r#""ruling_ascendant":null}"#));
    }
}
