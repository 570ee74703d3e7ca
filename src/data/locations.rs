use crate::core::{category::Category, geo::LatLng};
use crate::prelude::HashSet;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// A location element exactly as it appears in the JSON feed, before
/// validation. Unknown extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLocation {
    pub category: String,
    pub lat: f64,
    pub lon: f64,
    pub count: u64,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

/// A validated, immutable location record. The category is guaranteed to
/// be a known [`Category`] and the position a valid WGS84 coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub category: Category,
    pub position: LatLng,
    pub count: u64,
    pub city: String,
    pub country: String,
    pub institution: Option<String>,
    pub display_name: Option<String>,
    pub domain: Option<String>,
}

impl LocationRecord {
    /// Validates a raw feed element.
    pub fn from_raw(raw: RawLocation) -> Result<Self> {
        let category: Category = raw.category.parse()?;
        let position = LatLng::new(raw.lat, raw.lon);
        if !position.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "lat={}, lon={}",
                raw.lat, raw.lon
            )));
        }
        Ok(Self {
            category,
            position,
            count: raw.count,
            city: raw.city,
            country: raw.country,
            institution: raw.institution,
            display_name: raw.display_name,
            domain: raw.domain,
        })
    }

    /// Display name: first non-empty of institution, display name, domain.
    pub fn resolved_name(&self) -> &str {
        [&self.institution, &self.display_name, &self.domain]
            .into_iter()
            .find_map(|field| field.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or_default()
    }
}

/// Parses the locations payload, dropping elements that fail validation.
///
/// Validation is fail-open: a malformed element (unknown category,
/// missing or non-numeric coordinates) is skipped with a debug log, and
/// must never block display of the rest of the dataset. Only a payload
/// that is not a JSON array at all is an error.
pub fn parse_locations(json: &str) -> Result<Vec<LocationRecord>> {
    let elements: Vec<serde_json::Value> = serde_json::from_str(json)?;
    Ok(validate_elements(elements))
}

pub(crate) fn validate_elements(elements: Vec<serde_json::Value>) -> Vec<LocationRecord> {
    let total = elements.len();
    let records: Vec<LocationRecord> = elements
        .into_iter()
        .filter_map(|element| {
            let parsed = serde_json::from_value::<RawLocation>(element)
                .map_err(MapError::from)
                .and_then(LocationRecord::from_raw);
            match parsed {
                Ok(record) => Some(record),
                Err(err) => {
                    log::debug!("skipping location record: {err}");
                    None
                }
            }
        })
        .collect();
    if records.len() < total {
        log::warn!(
            "dropped {} of {} location records during validation",
            total - records.len(),
            total
        );
    }
    records
}

/// Aggregate figures for the stat cards: location count, distinct
/// countries, and total domains. Computed over valid records only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DatasetStats {
    pub locations: usize,
    pub countries: usize,
    pub domains: u64,
}

impl DatasetStats {
    pub fn from_records(records: &[LocationRecord]) -> Self {
        let countries: HashSet<&str> = records.iter().map(|r| r.country.as_str()).collect();
        Self {
            locations: records.len(),
            countries: countries.len(),
            domains: records.iter().map(|r| r.count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn academic_json() -> &'static str {
        r#"[{"category":"Academic","lat":40.0,"lon":-74.0,"count":1,"city":"NYC","country":"US","domain":"nyu.edu"}]"#
    }

    #[test]
    fn test_parse_valid_record() {
        let records = parse_locations(academic_json()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, Category::Academic);
        assert_eq!(records[0].position, LatLng::new(40.0, -74.0));
        assert_eq!(records[0].count, 1);
    }

    #[test]
    fn test_unknown_category_is_skipped() {
        let json = r#"[
            {"category":"Unknown","lat":1.0,"lon":2.0,"count":3,"city":"X","country":"Y","domain":"x.org"},
            {"category":"Academic","lat":40.0,"lon":-74.0,"count":1,"city":"NYC","country":"US","domain":"nyu.edu"}
        ]"#;
        let records = parse_locations(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, Category::Academic);
    }

    #[test]
    fn test_malformed_coordinates_are_skipped() {
        let json = r#"[
            {"category":"Research","lat":"north","lon":2.0,"count":3,"city":"X","country":"Y","domain":"x.org"},
            {"category":"Research","lat":95.0,"lon":2.0,"count":3,"city":"X","country":"Y","domain":"x.org"},
            {"category":"Research","lon":2.0,"count":3,"city":"X","country":"Y","domain":"x.org"}
        ]"#;
        let records = parse_locations(json).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        let records = parse_locations("[]").unwrap();
        assert!(records.is_empty());
        assert_eq!(DatasetStats::from_records(&records), DatasetStats::default());
    }

    #[test]
    fn test_non_array_payload_is_an_error() {
        assert!(matches!(
            parse_locations(r#"{"not":"an array"}"#),
            Err(MapError::Serialization(_))
        ));
    }

    #[test]
    fn test_resolved_name_fallback_chain() {
        let mut records = parse_locations(academic_json()).unwrap();
        let record = &mut records[0];
        assert_eq!(record.resolved_name(), "nyu.edu");

        record.display_name = Some("New York University".to_string());
        assert_eq!(record.resolved_name(), "New York University");

        record.institution = Some(String::new());
        assert_eq!(record.resolved_name(), "New York University");

        record.institution = Some("NYU Langone".to_string());
        assert_eq!(record.resolved_name(), "NYU Langone");
    }

    #[test]
    fn test_stats_over_valid_records() {
        let json = r#"[
            {"category":"Academic","lat":40.0,"lon":-74.0,"count":2,"city":"NYC","country":"US","domain":"a.edu"},
            {"category":"Healthcare","lat":51.5,"lon":-0.1,"count":3,"city":"London","country":"UK","domain":"b.org"},
            {"category":"Research","lat":48.8,"lon":2.3,"count":1,"city":"Paris","country":"FR","domain":"c.fr"},
            {"category":"Bogus","lat":0.0,"lon":0.0,"count":100,"city":"-","country":"ZZ","domain":"d.zz"},
            {"category":"Commercial","lat":35.6,"lon":139.7,"count":4,"city":"Tokyo","country":"JP","domain":"e.jp"},
            {"category":"Government","lat":52.5,"lon":13.4,"count":5,"city":"Berlin","country":"FR","domain":"f.de"}
        ]"#;
        let records = parse_locations(json).unwrap();
        let stats = DatasetStats::from_records(&records);
        assert_eq!(stats.locations, 5);
        assert_eq!(stats.countries, 4);
        assert_eq!(stats.domains, 15);
    }
}
