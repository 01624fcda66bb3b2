//! Section content snapshot.
//!
//! A `Snapshot` is one complete mapping of section name to section body.
//! Keys are unique and keep insertion order; the serialized form is a JSON
//! object in that same order.

use compact_str::CompactString;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Name of the section that can never be deleted.
pub const PROFILE_SECTION: &str = "profile";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub name: CompactString,
    pub body: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    sections: Vec<Section>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in content used when nothing has been saved yet.
    pub fn builtin() -> Self {
        let mut snapshot = Self::new();
        snapshot.upsert(
            PROFILE_SECTION,
            "Dr. Bhagaban Patra is a distinguished academic with 45 years of experience in teaching and research, specializing in Fluid Dynamics and Numerical Analysis. Born on August 20, 1941, he has made significant contributions to the field of mathematics throughout his career.",
        );
        snapshot.upsert(
            "publications",
            "Research Papers Published: 38\nMathematical Articles: 30\n\nBooks Published:\n- Subrahmanyam Chandrasekhar (2014)\n- Contribution of Hindu Mathematics to World Culture (Volume I and Volume II) (Published in Odia, 2023)",
        );
        snapshot.upsert(
            "research",
            "Dr. Patra's research focuses on Fluid Dynamics and Numerical Analysis. His Ph.D. thesis on Gravitational Thermal Instability has contributed significantly to the field of astrophysics and fluid mechanics.",
        );
        snapshot.upsert(
            "awards",
            "- Ex-Professor and Head of Mathematics Department at a prestigious university\n- 45 years of distinguished teaching and research experience\n- Published two significant books on mathematics and its cultural impact\n- Contributed 38 research papers and 30 mathematical articles to the academic community",
        );
        snapshot.upsert(
            "conferences",
            "Professor Patra has been an active participant in the mathematical community, regularly presenting his research and insights at various academic forums:\n- Presented numerous research papers at national conferences\n- Attended various international conferences across India\n- Contributed to the dissemination of mathematical knowledge through conference presentations",
        );
        snapshot
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.body.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Index of `name` in insertion order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn first_name(&self) -> Option<&str> {
        self.sections.first().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Overwrites the body in place when `name` exists, otherwise appends.
    pub fn upsert(&mut self, name: impl Into<CompactString>, body: impl Into<String>) {
        let name = name.into();
        let body = body.into();
        match self.sections.iter_mut().find(|s| s.name == name) {
            Some(section) => section.body = body,
            None => self.sections.push(Section { name, body }),
        }
    }

    /// Moves `name` to the front, inserting it with `body` when absent.
    pub fn pin_first(&mut self, name: &str, body: impl Into<String>) {
        let section = match self.position(name) {
            Some(idx) => self.sections.remove(idx),
            None => Section {
                name: CompactString::from(name),
                body: body.into(),
            },
        };
        self.sections.insert(0, section);
    }

    pub fn remove(&mut self, name: &str) -> Option<Section> {
        let idx = self.position(name)?;
        Some(self.sections.remove(idx))
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(section.name.as_str(), &section.body)?;
        }
        map.end()
    }
}

struct SnapshotVisitor;

impl<'de> Visitor<'de> for SnapshotVisitor {
    type Value = Snapshot;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of section name to section text")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Snapshot, A::Error> {
        let mut snapshot = Snapshot::new();
        while let Some((name, body)) = access.next_entry::<CompactString, String>()? {
            snapshot.upsert(name, body);
        }
        Ok(snapshot)
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SnapshotVisitor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/snapshot.rs"]
mod tests;
