//! Sprite position tables.
//!
//! A position table maps a sprite key to its size and CSS background
//! position, and remembers the order in which keys were first seen.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Size and offset of one sprite within the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpritePosition {
    pub width: u32,
    pub height: u32,
    pub background_position: String,
}

/// Positions keyed by sprite, iterated in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct PositionTable {
    positions: HashMap<String, SpritePosition>,
    order: Vec<String>,
}

impl PositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a position.
    ///
    /// A repeated key takes the newer value but keeps its original place.
    pub fn insert(&mut self, key: impl Into<String>, position: SpritePosition) {
        let key = key.into();
        if !self.positions.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.positions.insert(key, position);
    }

    pub fn get(&self, key: &str) -> Option<&SpritePosition> {
        self.positions.get(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> &[String] {
        &self.order
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpritePosition)> {
        self.order
            .iter()
            .filter_map(|key| self.positions.get(key).map(|p| (key.as_str(), p)))
    }
}

impl Serialize for PositionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, position) in self.iter() {
            map.serialize_entry(key, position)?;
        }
        map.end()
    }
}
