// trail/tracker.rs

use bevy::math::Vec2;

/// What kind of element sits under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Link,
    Button,
    Other,
}

impl ElementKind {
    pub fn is_clickable(self) -> bool {
        matches!(self, ElementKind::Link | ElementKind::Button)
    }
}

/// Cursor the host would show over an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    Pointer,
}

/// Element under the pointer, as described by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverTarget {
    pub kind: ElementKind,
    pub cursor: CursorHint,
    /// Enclosing elements, innermost first
    pub ancestors: Vec<ElementKind>,
}

impl HoverTarget {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            cursor: CursorHint::Default,
            ancestors: Vec::new(),
        }
    }

    pub fn with_cursor(mut self, cursor: CursorHint) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn inside(mut self, ancestor: ElementKind) -> Self {
        self.ancestors.push(ancestor);
        self
    }
}

/// Decides whether a hover target counts as interactive
pub trait InteractivePredicate: Send + Sync + 'static {
    fn is_interactive(&self, target: Option<&HoverTarget>) -> bool;
}

impl<F> InteractivePredicate for F
where
    F: Fn(Option<&HoverTarget>) -> bool + Send + Sync + 'static,
{
    fn is_interactive(&self, target: Option<&HoverTarget>) -> bool {
        self(target)
    }
}

/// Links, buttons, anything inside them, or anything showing a hand cursor
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickableTarget;

impl InteractivePredicate for ClickableTarget {
    fn is_interactive(&self, target: Option<&HoverTarget>) -> bool {
        let Some(target) = target else {
            return false;
        };

        target.kind.is_clickable()
            || target.ancestors.iter().any(|kind| kind.is_clickable())
            || target.cursor == CursorHint::Pointer
    }
}

/// Where the pointer is and what it is over
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub over_interactive: bool,
}

/// Tracks raw pointer state for the cursor indicator
#[derive(Debug)]
pub struct PointerTracker<P = ClickableTarget> {
    state: PointerState,
    offscreen: Vec2,
    predicate: P,
}

impl<P: InteractivePredicate> PointerTracker<P> {
    /// Starts parked at `offscreen` until the first move
    pub fn new(offscreen: Vec2, predicate: P) -> Self {
        Self {
            state: PointerState {
                position: offscreen,
                over_interactive: false,
            },
            offscreen,
            predicate,
        }
    }

    pub fn state(&self) -> &PointerState {
        &self.state
    }

    /// Record a pointer move and reclassify the hovered element
    pub fn pointer_moved(&mut self, position: Vec2, target: Option<&HoverTarget>) {
        self.state.position = position;
        self.state.over_interactive = self.predicate.is_interactive(target);
    }

    /// Park the pointer off screen so the indicator disappears
    pub fn pointer_left(&mut self) {
        self.state.position = self.offscreen;
        self.state.over_interactive = false;
    }
}
