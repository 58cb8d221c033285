use serde::Deserialize;

/// One location's forecast for one calendar date.
///
/// Built once from a [`FeedEntry`] and never mutated afterwards; the
/// store hands out clones, never mutable references.
#[derive(Debug, Clone)]
pub struct Forecast {
    location_id: String,
    location_name: String,
    date: String,
    morning_forecast: String,
    afternoon_forecast: String,
    night_forecast: String,
    summary_forecast: String,
    summary_when: String,
    min_temp: i32,
    max_temp: i32,
}

impl Forecast {
    /// Opaque feed identifier, e.g. "St001". Shared by every date of the
    /// same location.
    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    /// ISO-8601 date (`YYYY-MM-DD`). Kept as a string on purpose:
    /// lexicographic order on ISO dates is date order, and it matches
    /// the feed's own comparison semantics exactly.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn morning_forecast(&self) -> &str {
        &self.morning_forecast
    }

    pub fn afternoon_forecast(&self) -> &str {
        &self.afternoon_forecast
    }

    pub fn night_forecast(&self) -> &str {
        &self.night_forecast
    }

    pub fn summary_forecast(&self) -> &str {
        &self.summary_forecast
    }

    pub fn summary_when(&self) -> &str {
        &self.summary_when
    }

    /// Minimum temperature in degrees Celsius. The feed promises
    /// `min_temp <= max_temp` but nothing here checks it.
    pub fn min_temp(&self) -> i32 {
        self.min_temp
    }

    pub fn max_temp(&self) -> i32 {
        self.max_temp
    }
}

impl From<FeedEntry> for Forecast {
    fn from(entry: FeedEntry) -> Self {
        Self {
            location_id: entry.location.location_id,
            location_name: entry.location.location_name,
            date: entry.date,
            morning_forecast: entry.morning_forecast,
            afternoon_forecast: entry.afternoon_forecast,
            night_forecast: entry.night_forecast,
            summary_forecast: entry.summary_forecast,
            summary_when: entry.summary_when,
            min_temp: entry.min_temp,
            max_temp: entry.max_temp,
        }
    }
}

/// Wire shape of one element of the feed's JSON array.
///
/// Every key is required; none carries a default, so a missing or
/// mistyped field fails deserialization instead of producing a
/// half-built record.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEntry {
    pub location: FeedLocation,
    pub date: String,
    pub morning_forecast: String,
    pub afternoon_forecast: String,
    pub night_forecast: String,
    pub summary_forecast: String,
    pub summary_when: String,
    pub min_temp: i32,
    pub max_temp: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedLocation {
    pub location_id: String,
    pub location_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry_json() -> &'static str {
        r#"{
            "location": {"location_id": "St001", "location_name": "Kuala Lumpur"},
            "date": "2024-06-01",
            "morning_forecast": "No rain",
            "afternoon_forecast": "Thunderstorms in one or two places",
            "night_forecast": "No rain",
            "summary_forecast": "Thunderstorms in one or two places",
            "summary_when": "Afternoon",
            "min_temp": 24,
            "max_temp": 33
        }"#
    }

    #[test]
    fn all_ten_fields_round_trip_from_feed_entry() {
        let entry: FeedEntry = serde_json::from_str(sample_entry_json()).unwrap();
        let forecast = Forecast::from(entry);

        assert_eq!(forecast.location_id(), "St001");
        assert_eq!(forecast.location_name(), "Kuala Lumpur");
        assert_eq!(forecast.date(), "2024-06-01");
        assert_eq!(forecast.morning_forecast(), "No rain");
        assert_eq!(
            forecast.afternoon_forecast(),
            "Thunderstorms in one or two places"
        );
        assert_eq!(forecast.night_forecast(), "No rain");
        assert_eq!(
            forecast.summary_forecast(),
            "Thunderstorms in one or two places"
        );
        assert_eq!(forecast.summary_when(), "Afternoon");
        assert_eq!(forecast.min_temp(), 24);
        assert_eq!(forecast.max_temp(), 33);
    }

    #[test]
    fn missing_required_key_is_a_deserialization_error() {
        let json = r#"{
            "location": {"location_id": "St001", "location_name": "Kuala Lumpur"},
            "date": "2024-06-01",
            "morning_forecast": "No rain",
            "afternoon_forecast": "No rain",
            "night_forecast": "No rain",
            "summary_forecast": "No rain",
            "summary_when": "Throughout the day",
            "min_temp": 24
        }"#;

        let err = serde_json::from_str::<FeedEntry>(json).unwrap_err();
        assert!(err.to_string().contains("max_temp"));
    }

    #[test]
    fn mistyped_temperature_is_a_deserialization_error() {
        let json = sample_entry_json().replace("33", "\"33\"");
        assert!(serde_json::from_str::<FeedEntry>(&json).is_err());
    }
}
