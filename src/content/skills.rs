// content/skills.rs

use serde::Deserialize;

/// One skill with its self-rated proficiency (0-100)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: u8,
    pub category: String,
}

/// Skills sharing a category, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// Group skills by category, categories ordered by first appearance
pub fn group_by_category(skills: &[Skill]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill.clone()),
            None => groups.push(SkillGroup {
                category: skill.category.clone(),
                skills: vec![skill.clone()],
            }),
        }
    }
    groups
}

/// Progress bar value that stays empty for a short delay, then fills
#[derive(Debug, Clone)]
pub struct ProgressFill {
    target: u8,
    delay: f32,
    elapsed: f32,
}

impl ProgressFill {
    /// Seconds a bar stays empty after it appears
    pub const DEFAULT_DELAY: f32 = 0.2;

    pub fn new(target: u8, delay: f32) -> Self {
        Self {
            target: target.min(100),
            delay,
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if !self.is_filled() {
            self.elapsed += dt;
        }
    }

    pub fn is_filled(&self) -> bool {
        self.elapsed >= self.delay
    }

    /// Percentage to show right now
    pub fn value(&self) -> u8 {
        if self.is_filled() { self.target } else { 0 }
    }
}
