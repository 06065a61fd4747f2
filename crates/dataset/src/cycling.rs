use serde::Deserialize;

use crate::error::Result;
use crate::time::RaceTime;

/// One race result: a rider's ascent time, placement and an optional
/// doping allegation note.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceResult {
    pub time: RaceTime,
    pub place: u32,
    pub seconds: u32,
    pub name: String,
    pub year: i32,
    pub nationality: String,
    pub doping: Option<String>,
}

impl RaceResult {
    pub fn has_doping_allegation(&self) -> bool {
        self.doping.is_some()
    }
}

// The wire body is a JSON array of objects with capitalized keys. The
// `Doping` field is always present and holds an empty string when there
// is no allegation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RaceResultDocument {
    time: String,
    place: u32,
    seconds: u32,
    name: String,
    year: i32,
    nationality: String,
    doping: String,
}

/// Deserializes the cycling document body into race results, preserving
/// the source order of the array.
pub fn parse(body: &str) -> Result<Vec<RaceResult>> {
    let documents: Vec<RaceResultDocument> = serde_json::from_str(body)?;

    documents
        .into_iter()
        .map(|document| {
            let time: RaceTime = document.time.parse()?;
            let doping = match document.doping.is_empty() {
                true => None,
                false => Some(document.doping),
            };

            Ok(RaceResult {
                time,
                place: document.place,
                seconds: document.seconds,
                name: document.name,
                year: document.year,
                nationality: document.nationality,
                doping,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"[
        {
            "Time": "36:50",
            "Place": 1,
            "Seconds": 2210,
            "Name": "Marco Pantani",
            "Year": 1995,
            "Nationality": "ITA",
            "Doping": "Alleged drug use during 1995 due to high hematocrit levels"
        },
        {
            "Time": "36:55",
            "Place": 2,
            "Seconds": 2215,
            "Name": "Marco Pantani",
            "Year": 1997,
            "Nationality": "ITA",
            "Doping": ""
        }
    ]"#;

    #[test]
    fn parse_maps_empty_doping_note_to_none() {
        let results = parse(BODY).unwrap();

        assert_eq!(results.len(), 2);
        assert!(results[0].has_doping_allegation());
        assert_eq!(results[1].doping, None);
    }

    #[test]
    fn parse_reads_the_race_time() {
        let results = parse(BODY).unwrap();

        assert_eq!(results[0].time, RaceTime::from_seconds(2210));
        assert_eq!(results[0].place, 1);
        assert_eq!(results[0].year, 1995);
        assert_eq!(results[0].nationality, "ITA");
    }

    #[test]
    fn parse_rejects_malformed_time() {
        let body = r#"[{
            "Time": "36-50",
            "Place": 1,
            "Seconds": 2210,
            "Name": "Marco Pantani",
            "Year": 1995,
            "Nationality": "ITA",
            "Doping": ""
        }]"#;

        assert!(parse(body).is_err());
    }

    #[test]
    fn parse_empty_body() {
        let results = parse("[]").unwrap();

        assert!(results.is_empty());
    }
}
