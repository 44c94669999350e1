use serde::{Deserialize, Serialize};

/// One labeled string naming an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub str: String,
}

impl Term {
    pub fn new(s: impl Into<String>) -> Self {
        Self { str: s.into() }
    }
}

/// Auxiliary `z` properties attached to entries and matches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZProps {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
}

impl ZProps {
    pub fn is_empty(&self) -> bool {
        self.entity_type.is_none() && self.species.is_none()
    }
}

/// Normalized dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(rename = "dictID")]
    pub dict_id: String,
    pub descr: String,
    pub terms: Vec<Term>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<ZProps>,
}

/// How a match relates to the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    /// The query string is a prefix of the main term
    #[serde(rename = "S")]
    Prefix,
    /// Any other match
    #[serde(rename = "T")]
    Other,
}

/// Entry plus match information, returned by string search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub id: String,
    #[serde(rename = "dictID")]
    pub dict_id: String,
    pub str: String,
    pub descr: String,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    pub terms: Vec<Term>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<ZProps>,
}

/// Dictionary descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictInfo {
    pub id: String,
    pub abbrev: String,
    pub name: String,
}

/// Result set wrapper shared by all dictionary operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

impl<T> ItemList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Items carrying optional `z` properties, so they can be pruned uniformly
pub trait HasZProps {
    fn z_mut(&mut self) -> &mut Option<ZProps>;
}

impl HasZProps for Entry {
    fn z_mut(&mut self) -> &mut Option<ZProps> {
        &mut self.z
    }
}

impl HasZProps for MatchCandidate {
    fn z_mut(&mut self) -> &mut Option<ZProps> {
        &mut self.z
    }
}
