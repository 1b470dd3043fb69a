use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::WindowEvent;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PointerEvent>()
            .add_systems(PreUpdate, collect_pointer_events);
    }
}

#[derive(Message, Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Window (logical) coordinates: pixels from top-left
    pub position: Vec2,
    pub event_type: PointerEventType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventType {
    /// Pointer moved over the window
    Move,
    /// Pointer left the window (or the finger lifted)
    Leave,
}

/// System: Translate window input into pointer messages, in arrival order
fn collect_pointer_events(
    mut window_events: MessageReader<WindowEvent>,
    mut primary_touch: Local<Option<u64>>,
    mut out: MessageWriter<PointerEvent>,
) {
    for event in window_events.read() {
        if let Some(pointer) = pointer_event(event, &mut primary_touch) {
            out.write(pointer);
        }
    }
}

/// Map one window event to a pointer message.
///
/// Only the first finger down drives the pointer; other touches are ignored
/// until it lifts.
fn pointer_event(event: &WindowEvent, primary_touch: &mut Option<u64>) -> Option<PointerEvent> {
    match event {
        WindowEvent::CursorMoved(e) => Some(PointerEvent {
            position: e.position,
            event_type: PointerEventType::Move,
        }),
        WindowEvent::CursorLeft(_) => Some(PointerEvent {
            position: Vec2::ZERO,
            event_type: PointerEventType::Leave,
        }),
        WindowEvent::TouchInput(touch) => primary_touch_event(touch, primary_touch),
        _ => None,
    }
}

fn primary_touch_event(touch: &TouchInput, primary_touch: &mut Option<u64>) -> Option<PointerEvent> {
    match touch.phase {
        TouchPhase::Started if primary_touch.is_none() => {
            *primary_touch = Some(touch.id);
        }
        _ if *primary_touch != Some(touch.id) => return None,
        _ => {}
    }

    let event_type = match touch.phase {
        TouchPhase::Started | TouchPhase::Moved => PointerEventType::Move,
        TouchPhase::Ended | TouchPhase::Canceled => {
            *primary_touch = None;
            PointerEventType::Leave
        }
    };

    Some(PointerEvent {
        position: touch.position,
        event_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::window::{CursorLeft, CursorMoved};

    fn moved(x: f32, y: f32) -> WindowEvent {
        WindowEvent::CursorMoved(CursorMoved {
            window: Entity::PLACEHOLDER,
            position: Vec2::new(x, y),
            delta: None,
        })
    }

    fn left() -> WindowEvent {
        WindowEvent::CursorLeft(CursorLeft {
            window: Entity::PLACEHOLDER,
        })
    }

    fn touch(id: u64, phase: TouchPhase, x: f32) -> WindowEvent {
        WindowEvent::TouchInput(TouchInput {
            phase,
            position: Vec2::new(x, 0.0),
            window: Entity::PLACEHOLDER,
            force: None,
            id,
        })
    }

    fn translate(events: &[WindowEvent]) -> Vec<PointerEvent> {
        let mut primary_touch = None;
        events
            .iter()
            .filter_map(|event| pointer_event(event, &mut primary_touch))
            .collect()
    }

    #[test]
    fn test_leave_then_reenter_keeps_order() {
        let out = translate(&[moved(10.0, 10.0), left(), moved(30.0, 40.0)]);

        let kinds: Vec<_> = out.iter().map(|e| e.event_type).collect();
        assert_eq!(
            kinds,
            vec![
                PointerEventType::Move,
                PointerEventType::Leave,
                PointerEventType::Move
            ]
        );
        assert_eq!(out[2].position, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_secondary_touches_are_ignored() {
        let out = translate(&[
            touch(1, TouchPhase::Started, 5.0),
            touch(2, TouchPhase::Started, 50.0),
            touch(2, TouchPhase::Moved, 60.0),
            touch(1, TouchPhase::Moved, 15.0),
            touch(2, TouchPhase::Ended, 60.0),
            touch(1, TouchPhase::Ended, 15.0),
        ]);

        let positions: Vec<_> = out.iter().map(|e| e.position.x).collect();
        assert_eq!(positions, vec![5.0, 15.0, 15.0]);
        assert_eq!(out[2].event_type, PointerEventType::Leave);
    }

    #[test]
    fn test_next_finger_takes_over_after_lift() {
        let out = translate(&[
            touch(1, TouchPhase::Started, 5.0),
            touch(1, TouchPhase::Canceled, 5.0),
            touch(2, TouchPhase::Started, 80.0),
        ]);

        assert_eq!(out.len(), 3);
        assert_eq!(out[2].position.x, 80.0);
        assert_eq!(out[2].event_type, PointerEventType::Move);
    }

    #[test]
    fn test_other_window_events_are_skipped() {
        let out = translate(&[WindowEvent::CursorEntered(bevy::window::CursorEntered {
            window: Entity::PLACEHOLDER,
        })]);
        assert!(out.is_empty());
    }
}
