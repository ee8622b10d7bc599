use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::null_as_default;

/// Submission timing for one grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalStatistics {
    #[serde(default)]
    pub grid_number: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub submissions_by_hour: HourlyCounts,
    /// Already ordered by the server.
    #[serde(default, deserialize_with = "null_as_default")]
    pub submissions_by_day_of_week: Vec<DayCount>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub daily_timeline: Vec<DailyCount>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub peak_hours: Vec<HourCount>,
    #[serde(default)]
    pub first_submission: Option<String>,
    #[serde(default)]
    pub last_submission: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_submissions: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unique_days: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_submissions_per_day: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayCount {
    #[serde(default, deserialize_with = "null_as_default")]
    pub day: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyCount {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourCount {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hour: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

/// Hour-of-day to submission count, kept in the order the server sent the keys.
///
/// Keys are the raw JSON object keys (normally `"0"` to `"23"`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlyCounts(pub Vec<(String, u64)>);

impl HourlyCounts {
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(hour, count)| (hour.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for HourlyCounts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HourlyCountsVisitor;

        impl<'de> Visitor<'de> for HourlyCountsVisitor {
            type Value = HourlyCounts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of hour to submission count")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((hour, count)) = map.next_entry::<String, Option<u64>>()? {
                    entries.push((hour, count.unwrap_or(0)));
                }
                Ok(HourlyCounts(entries))
            }
        }

        deserializer.deserialize_map(HourlyCountsVisitor)
    }
}

impl Serialize for HourlyCounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (hour, count) in &self.0 {
            map.serialize_entry(hour, count)?;
        }
        map.end()
    }
}
