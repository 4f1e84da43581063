//! Activity Data Model
//!
//! Types decoded from the `GET /activities` endpoint.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A signup-able activity with capacity and a participant roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Server-assigned order, duplicates allowed
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(name: impl Into<String>, max_participants: u32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            schedule: String::new(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = schedule.into();
        self
    }

    pub fn participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }

    /// Capacity minus current participant count. Negative when the server over-allocates.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Per-activity payload as it appears on the wire (the name is the map key).
///
/// A malformed field degrades to its default so one bad entry only affects its own card.
#[derive(Debug, Default, Deserialize)]
struct ActivityDetails {
    #[serde(default, deserialize_with = "crate::client::lenient_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "crate::client::lenient_string")]
    schedule: Option<String>,
    #[serde(default, deserialize_with = "lenient_capacity")]
    max_participants: Option<u32>,
    #[serde(default, deserialize_with = "lenient_roster")]
    participants: Option<Vec<String>>,
}

/// Non-negative integers that fit a `u32`; anything else counts as absent
fn lenient_capacity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|n| u32::try_from(n).ok()))
}

/// Arrays only; non-string entries are dropped
fn lenient_roster<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(email) => Some(email),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}


impl ActivityDetails {
    fn into_activity(self, name: String) -> Activity {
        Activity {
            name,
            description: self.description.unwrap_or_default(),
            schedule: self.schedule.unwrap_or_default(),
            max_participants: self.max_participants.unwrap_or(0),
            participants: self.participants.unwrap_or_default(),
        }
    }
}

/// The full activity set, in the order the server listed it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn into_inner(self) -> Vec<Activity> {
        self.activities
    }
}

/// Entries that are not objects render as an empty card
struct LenientDetails(ActivityDetails);

impl<'de> Deserialize<'de> for LenientDetails {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Ok(LenientDetails(ActivityDetails::default()));
        }
        ActivityDetails::deserialize(value)
            .map(LenientDetails)
            .map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by activity name")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
                let mut activities = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(name) = map.next_key::<String>()? {
                    let LenientDetails(details) = map.next_value()?;
                    activities.push(details.into_activity(name));
                }
                Ok(ActivityCatalog { activities })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        #[derive(Serialize)]
        struct Details<'a> {
            description: &'a str,
            schedule: &'a str,
            max_participants: u32,
            participants: &'a [String],
        }

        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(
                &activity.name,
                &Details {
                    description: &activity.description,
                    schedule: &activity.schedule,
                    max_participants: activity.max_participants,
                    participants: &activity.participants,
                },
            )?;
        }
        map.end()
    }
}

/// Identifies one rendered participant row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantRef {
    pub activity: String,
    pub email: String,
    /// Row position within the activity's participant list at render time
    pub position: usize,
}

impl ParticipantRef {
    pub fn new(activity: impl Into<String>, email: impl Into<String>, position: usize) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spots_left() {
        let chess = Activity::new("Chess Club", 10)
            .participant("michael@mergington.edu")
            .participant("daniel@mergington.edu");
        assert_eq!(chess.spots_left(), 8);
    }

    #[test]
    fn test_spots_left_over_allocated() {
        let tiny = Activity::new("Tiny", 1).participant("a@x.io").participant("b@x.io");
        assert_eq!(tiny.spots_left(), -1);
    }

    #[test]
    fn test_catalog_keeps_server_order() {
        let json = r#"{
            "Programming Class": {"description": "Code", "schedule": "Tue", "max_participants": 20, "participants": []},
            "Chess Club": {"description": "Chess", "schedule": "Fri", "max_participants": 12, "participants": ["a@x.io"]},
            "Art Studio": {"description": "Paint", "schedule": "Mon", "max_participants": 8, "participants": []}
        }"#;

        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();
        let names: Vec<_> = catalog.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Studio"]);
        assert_eq!(catalog.get("Chess Club").unwrap().participants, vec!["a@x.io"]);
    }

    #[test]
    fn test_catalog_missing_fields_default() {
        let catalog: ActivityCatalog = serde_json::from_str(r#"{"Bare": {}}"#).unwrap();
        let bare = catalog.get("Bare").unwrap();
        assert_eq!(bare.description, "");
        assert_eq!(bare.schedule, "");
        assert_eq!(bare.max_participants, 0);
        assert!(bare.participants.is_empty());
    }

    #[test]
    fn test_malformed_entry_degrades_only_its_card() {
        let json = r#"{
            "Chess Club": {"description": "Chess", "schedule": "Fri", "max_participants": 10, "participants": ["a@x.io"]},
            "Broken": {"description": 7, "schedule": null, "max_participants": "lots", "participants": "x"},
            "Mixed": {"max_participants": -3, "participants": ["b@x.io", 42, null]},
            "Scalar": "not an object"
        }"#;

        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("Chess Club").unwrap().spots_left(), 9);

        let broken = catalog.get("Broken").unwrap();
        assert_eq!(broken.description, "");
        assert_eq!(broken.schedule, "");
        assert_eq!(broken.max_participants, 0);
        assert!(broken.participants.is_empty());

        let mixed = catalog.get("Mixed").unwrap();
        assert_eq!(mixed.max_participants, 0);
        assert_eq!(mixed.participants, vec!["b@x.io"]);

        assert_eq!(catalog.get("Scalar").unwrap().spots_left(), 0);
    }

    #[test]
    fn test_catalog_rejects_non_object() {
        assert!(serde_json::from_str::<ActivityCatalog>("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_catalog_serializes_wire_shape() {
        let catalog = ActivityCatalog::new(vec![Activity::new("Gym", 30)
            .schedule("Daily")
            .participant("a@x.io")]);
        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(value["Gym"]["max_participants"], 30);
        assert_eq!(value["Gym"]["participants"][0], "a@x.io");
    }
}
