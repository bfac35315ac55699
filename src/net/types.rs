//! Wire DTOs for the activities API.
//!
//! DESIGN
//! ======
//! The catalog is a JSON object keyed by activity name. It is decoded into
//! an ordered list so cards and select options follow the server's key
//! order instead of a hash or alphabetical order.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One extracurricular activity as returned by `GET /activities`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the server over-fills an activity.
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        i64::from(self.max_participants) - taken
    }
}

/// Full activity catalog keyed by name, in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, Activity)>,
}

impl Catalog {
    /// Insert or replace an activity. A replaced entry keeps its position.
    pub fn insert(&mut self, name: String, activity: Activity) {
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = activity;
        } else {
            self.entries.push((name, activity));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, activity)| activity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl FromIterator<(String, Activity)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut catalog = Self::default();
        for (name, activity) in iter {
            catalog.insert(name, activity);
        }
        catalog
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Catalog, A::Error> {
                let mut catalog = Catalog::default();
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    catalog.insert(name, activity);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Body of a successful `POST /activities/{name}/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SignupAccepted {
    #[serde(default)]
    pub message: String,
}
