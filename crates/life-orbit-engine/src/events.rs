//! Pointer events, live or replayed from a script.

use life_orbit_core::Position;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::Result;

/// Pointer input in engine space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    /// The pointer left the interaction surface.
    Leave,
}

impl PointerEvent {
    pub fn position(&self) -> Option<Position> {
        match *self {
            PointerEvent::Down { x, y } | PointerEvent::Move { x, y } | PointerEvent::Up { x, y } => {
                Some(Position::new(x, y))
            }
            PointerEvent::Leave => None,
        }
    }
}

/// A pointer event to apply just before the given tick runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    pub tick: u64,
    pub event: PointerEvent,
}

/// Parse a JSON-lines pointer script. Blank lines and `#` comments are
/// skipped; events come back sorted by tick (stable for equal ticks).
pub fn parse_script(source: &str) -> Result<Vec<ScriptedEvent>> {
    let mut events = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event: ScriptedEvent = serde_json::from_str(line).map_err(|source| {
            EngineError::Script {
                line: index + 1,
                source,
            }
        })?;
        events.push(event);
    }
    events.sort_by_key(|e| e.tick);
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_sorts_by_tick() {
        let script = r#"
# grab health and drag it
{"tick": 5, "event": {"kind": "move", "x": 10, "y": 0}}
{"tick": 2, "event": {"kind": "down", "x": 0, "y": 0}}

{"tick": 9, "event": {"kind": "leave"}}
"#;
        let events = parse_script(script).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].tick, 2);
        assert_eq!(events[0].event, PointerEvent::Down { x: 0.0, y: 0.0 });
        assert_eq!(events[2].event, PointerEvent::Leave);
    }

    #[test]
    fn test_parse_script_reports_line() {
        let script = "{\"tick\": 1, \"event\": {\"kind\": \"leave\"}}\nnot json\n";
        match parse_script(script) {
            Err(EngineError::Script { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_event_position() {
        assert_eq!(
            PointerEvent::Up { x: 1.0, y: 2.0 }.position(),
            Some(Position::new(1.0, 2.0))
        );
        assert_eq!(PointerEvent::Leave.position(), None);
    }
}
