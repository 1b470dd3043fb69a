// content/mod.rs

mod count_up;
mod skills;
mod typewriter;

use bevy::prelude::*;
use serde::Deserialize;

pub use count_up::{CountUp, group_thousands};
pub use skills::{ProgressFill, Skill, SkillGroup, group_by_category};
pub use typewriter::{Blink, Typewriter};

const CONTENT_JSON: &str = include_str!("../../assets/content.json");

/// One headline number shown in the stats row
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u64,
}

/// A collection that is either still on its way or fully available.
///
/// There is no error state: a collection that never arrives stays `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection<T> {
    Loading,
    Ready(Vec<T>),
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection::Loading
    }
}

impl<T> Collection<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Collection::Loading)
    }

    pub fn items(&self) -> &[T] {
        match self {
            Collection::Loading => &[],
            Collection::Ready(items) => items,
        }
    }
}

/// Stats collection shown in the hero
#[derive(Resource, Debug, Default)]
pub struct StatsFeed(pub Collection<Stat>);

/// Skills collection shown in the skills panel
#[derive(Resource, Debug, Default)]
pub struct SkillsFeed(pub Collection<Skill>);

/// The collections the client renders; the rest of the document is ignored
#[derive(Debug, Deserialize)]
pub struct ContentDocument {
    pub stats: Vec<Stat>,
    pub skills: Vec<Skill>,
}

/// Parse the client's collections out of a content document
pub fn parse_content(json: &str) -> Result<ContentDocument, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse content document: {}", e))
}

/// System: Fill the content feeds from the embedded content document
pub fn load_content_feeds(mut stats: ResMut<StatsFeed>, mut skills: ResMut<SkillsFeed>) {
    match parse_content(CONTENT_JSON) {
        Ok(doc) => {
            info!(
                "✓ Loaded {} stats, {} skills",
                doc.stats.len(),
                doc.skills.len()
            );
            stats.0 = Collection::Ready(doc.stats);
            skills.0 = Collection::Ready(doc.skills);
        }
        Err(e) => {
            // Both feeds stay loading; the page keeps its placeholders
            error!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let doc = parse_content(CONTENT_JSON).unwrap();
        assert_eq!(doc.stats.len(), 4);
        assert_eq!(doc.stats[2].value, 1157);
        assert_eq!(doc.stats[0].label, "Репозитории");

        assert_eq!(doc.skills.len(), 20);
        assert_eq!(doc.skills[0].name, "Python");
        assert_eq!(group_by_category(&doc.skills).len(), 5);
    }

    #[test]
    fn test_other_collections_are_ignored() {
        let json = r#"{
            "stats": [{ "id": "1", "label": "Stars", "value": 3, "icon": "stars" }],
            "skills": [],
            "posts": [{ "whatever": true }]
        }"#;
        let doc = parse_content(json).unwrap();
        assert_eq!(doc.stats[0].label, "Stars");
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let err = parse_content(r#"{ "stats": 5, "skills": [] }"#).unwrap_err();
        assert!(err.contains("content document"));
    }

    #[test]
    fn test_collection_defaults_to_loading() {
        let collection: Collection<Stat> = Collection::default();
        assert!(collection.is_loading());
        assert!(collection.items().is_empty());
    }

    #[test]
    fn test_ready_collection_exposes_items() {
        let collection = Collection::Ready(vec![1, 2, 3]);
        assert!(!collection.is_loading());
        assert_eq!(collection.items(), &[1, 2, 3]);
    }
}
