//! DTOs for click analytics endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::services::DailyClicks;

/// Query parameters for per-link analytics.
///
/// Bounds are ISO 8601 date-times: RFC 3339 (`2026-08-01T00:00:00Z`) or a
/// naive local form (`2026-08-01T00:00:00`) interpreted as UTC. Both are
/// required; the handler rejects requests missing either bound so the
/// error shape matches the rest of the API.
#[derive(Debug, Deserialize)]
pub struct AnalyticsQueryParams {
    #[serde(default, with = "optional_iso_datetime")]
    pub start: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(default, with = "optional_iso_datetime")]
    pub end: Option<chrono::DateTime<chrono::Utc>>,
}

/// Query parameters for owner-scoped totals, as calendar dates.
#[derive(Debug, Deserialize)]
pub struct TotalClicksQueryParams {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Click count for one calendar date.
#[derive(Debug, Serialize)]
pub struct DailyClicksResponse {
    pub date: NaiveDate,
    pub count: i64,
}

impl From<DailyClicks> for DailyClicksResponse {
    fn from(daily: DailyClicks) -> Self {
        Self {
            date: daily.date,
            count: daily.count,
        }
    }
}

/// Serde deserializer for ISO 8601 date-time strings, accepting RFC 3339
/// or a timezone-less form treated as UTC.
mod optional_iso_datetime {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        let Some(s) = opt else {
            return Ok(None);
        };

        if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
            return Ok(Some(dt.with_timezone(&Utc)));
        }

        NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| Some(naive.and_utc()))
            .map_err(serde::de::Error::custom)
    }
}
