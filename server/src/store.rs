//! In-memory bird store.
//!
//! # Design
//! Records live in a `HashMap` keyed by id; a separate `Vec` remembers
//! insertion order so listings come back in creation order. Ids are v4
//! UUIDs, never reused. There is no update or delete.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::BirdError;
use crate::types::{Bird, NewBird};

#[derive(Debug, Default)]
pub struct BirdStore {
    birds: HashMap<Uuid, Bird>,
    order: Vec<Uuid>,
}

impl BirdStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a validated bird under a fresh id and return the stored record.
    pub fn create(&mut self, input: NewBird) -> Result<Bird, BirdError> {
        input.check()?;

        let mut id = Uuid::new_v4();
        while self.birds.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let bird = Bird {
            id,
            name: input.name,
            kind: input.kind,
            info: input.info,
        };
        self.birds.insert(id, bird.clone());
        self.order.push(id);
        Ok(bird)
    }

    /// Look up a bird by the exact id string `create` handed out. Other
    /// spellings of the same UUID (braced, urn, simple, upper case) do not match.
    pub fn get(&self, id: &str) -> Result<Bird, BirdError> {
        let parsed = Uuid::parse_str(id).map_err(|_| BirdError::NotFound)?;
        if parsed.hyphenated().to_string() != id {
            return Err(BirdError::NotFound);
        }
        self.birds.get(&parsed).cloned().ok_or(BirdError::NotFound)
    }

    pub fn list_all(&self) -> Vec<Bird> {
        self.order
            .iter()
            .filter_map(|id| self.birds.get(id))
            .cloned()
            .collect()
    }

    pub fn list_ids(&self) -> Vec<String> {
        self.order.iter().map(Uuid::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.birds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.birds.is_empty()
    }
}
