use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const CONTENT_JSON: &str = include_str!("../../assets/content.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub id: String,
    pub label: String,
    pub value: u64,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub stars: u64,
    pub language: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub proficiency: u8,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub url: String,
    pub date: String,
    pub views: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub views: u64,
    pub url: String,
}

/// Name of one of the fixed collections, as it appears in `/api/{name}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Stats,
    Projects,
    Skills,
    Videos,
    Posts,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Stats,
        Collection::Projects,
        Collection::Skills,
        Collection::Videos,
        Collection::Posts,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Stats => "stats",
            Collection::Projects => "projects",
            Collection::Skills => "skills",
            Collection::Videos => "videos",
            Collection::Posts => "posts",
        }
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| format!("unknown collection `{}`", s))
    }
}

/// Read-only, in-memory content. Loaded once, never mutated.
#[derive(Debug, Deserialize)]
pub struct ContentStore {
    stats: Vec<Stat>,
    projects: Vec<Project>,
    skills: Vec<Skill>,
    videos: Vec<Video>,
    posts: Vec<Post>,
}

impl ContentStore {
    /// Load the embedded content document
    pub fn load() -> Result<Self, String> {
        Self::from_json(CONTENT_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse content: {}", e))
    }

    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Number of items in a collection
    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Stats => self.stats.len(),
            Collection::Projects => self.projects.len(),
            Collection::Skills => self.skills.len(),
            Collection::Videos => self.videos.len(),
            Collection::Posts => self.posts.len(),
        }
    }

    /// Whole collection as a JSON response
    pub fn respond(&self, collection: Collection) -> Response {
        match collection {
            Collection::Stats => Json(self.stats()).into_response(),
            Collection::Projects => Json(self.projects()).into_response(),
            Collection::Skills => Json(self.skills()).into_response(),
            Collection::Videos => Json(self.videos()).into_response(),
            Collection::Posts => Json(self.posts()).into_response(),
        }
    }
}
