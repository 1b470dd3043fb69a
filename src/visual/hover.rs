use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::trail::{CursorHint, ElementKind, HoverTarget};

/// A UI element that opens an external URL when pressed
#[derive(Component, Debug, Clone)]
#[require(Interaction)]
pub struct LinkTarget {
    pub url: String,
}

/// Elements that should show a hand cursor
#[derive(Component, Debug, Default)]
#[require(Interaction)]
pub struct PointerCursor;

/// Describes the UI element currently under the pointer
#[derive(SystemParam)]
pub struct HoverProbe<'w, 's> {
    interactions: Query<'w, 's, (Entity, &'static Interaction)>,
    kinds: Query<
        'w,
        's,
        (
            Has<LinkTarget>,
            Has<Button>,
            Has<PointerCursor>,
        ),
    >,
    parents: Query<'w, 's, &'static ChildOf>,
}

impl HoverProbe<'_, '_> {
    /// Innermost hovered element with its enclosing elements
    pub fn target(&self) -> Option<HoverTarget> {
        let hovered = self
            .interactions
            .iter()
            .filter(|(_, interaction)| **interaction != Interaction::None)
            .map(|(entity, _)| (entity, self.ancestors(entity)))
            .max_by_key(|(_, ancestors)| ancestors.len())?;

        let (entity, ancestors) = hovered;
        let (kind, cursor) = self.classify(entity);

        let target = ancestors
            .into_iter()
            .fold(HoverTarget::new(kind).with_cursor(cursor), |target, ancestor| {
                target.inside(self.classify(ancestor).0)
            });
        Some(target)
    }

    fn classify(&self, entity: Entity) -> (ElementKind, CursorHint) {
        let Ok((is_link, is_button, has_pointer)) = self.kinds.get(entity) else {
            return (ElementKind::Other, CursorHint::Default);
        };

        let kind = if is_link {
            ElementKind::Link
        } else if is_button {
            ElementKind::Button
        } else {
            ElementKind::Other
        };
        let cursor = if has_pointer {
            CursorHint::Pointer
        } else {
            CursorHint::Default
        };
        (kind, cursor)
    }

    /// Parent chain, innermost first
    fn ancestors(&self, entity: Entity) -> Vec<Entity> {
        let mut chain = Vec::new();
        let mut current = entity;
        while let Ok(child_of) = self.parents.get(current) {
            current = child_of.parent();
            chain.push(current);
        }
        chain
    }
}
