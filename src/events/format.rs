//! Compact text format for game event serialization
//!
//! Format: `T:NNNNN|CODE|data...`
//! - T:NNNNN = timestamp in milliseconds (5 digits, wraps at 99999)
//! - CODE = event type code
//! - data = pipe-separated values specific to event type
//!
//! Examples:
//! ```text
//! T:00000|SE|3f2a9c1e-...|2026-08-04T10:00:00Z
//! T:01240|ST|0.60|-0.20
//! T:01240|KD|left
//! T:02250|G|1|0
//! T:05120|SV|1|1
//! ```

use super::types::{GameConfig, GameEvent};

/// Format a float with fixed precision (2 decimals)
fn fmt_f2(v: f32) -> String {
    format!("{:.2}", v)
}

/// Serialize a GameEvent to compact text format
pub fn serialize_event(time_ms: u32, event: &GameEvent) -> String {
    let ts = format!("T:{:05}", time_ms % 100000);
    let code = event.type_code();

    let data = match event {
        GameEvent::SessionStart {
            session_id,
            timestamp,
        } => {
            format!("{}|{}", session_id, timestamp)
        }
        GameEvent::Config(config) => {
            // Serialize config as compact JSON for easy parsing
            serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string())
        }
        GameEvent::ShotTaken { lateral, depth } => {
            format!("{}|{}", fmt_f2(*lateral), fmt_f2(*depth))
        }
        GameEvent::KeeperDive { direction } => direction.clone(),
        GameEvent::Goal { goals, saves } => format!("{}|{}", goals, saves),
        GameEvent::Save { goals, saves } => format!("{}|{}", goals, saves),
    };

    if data.is_empty() {
        format!("{}|{}", ts, code)
    } else {
        format!("{}|{}|{}", ts, code, data)
    }
}

/// Parse a serialized event line back into (time_ms, GameEvent).
/// Returns None for malformed lines.
pub fn parse_event(line: &str) -> Option<(u32, GameEvent)> {
    let mut parts = line.splitn(3, '|');
    let ts = parts.next()?.strip_prefix("T:")?.parse::<u32>().ok()?;
    let code = parts.next()?;
    let data = parts.next().unwrap_or("");

    let event = match code {
        "SE" => {
            let (session_id, timestamp) = data.split_once('|')?;
            GameEvent::SessionStart {
                session_id: session_id.to_string(),
                timestamp: timestamp.to_string(),
            }
        }
        "CF" => GameEvent::Config(serde_json::from_str::<GameConfig>(data).ok()?),
        "ST" => {
            let (lateral, depth) = data.split_once('|')?;
            GameEvent::ShotTaken {
                lateral: lateral.parse().ok()?,
                depth: depth.parse().ok()?,
            }
        }
        "KD" => GameEvent::KeeperDive {
            direction: data.to_string(),
        },
        "G" => {
            let (goals, saves) = data.split_once('|')?;
            GameEvent::Goal {
                goals: goals.parse().ok()?,
                saves: saves.parse().ok()?,
            }
        }
        "SV" => {
            let (goals, saves) = data.split_once('|')?;
            GameEvent::Save {
                goals: goals.parse().ok()?,
                saves: saves.parse().ok()?,
            }
        }
        _ => return None,
    };

    Some((ts, event))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shot_taken_roundtrip() {
        let event = GameEvent::ShotTaken {
            lateral: 0.6,
            depth: -0.2,
        };
        let line = serialize_event(1240, &event);
        assert_eq!(line, "T:01240|ST|0.60|-0.20");

        let (ts, parsed) = parse_event(&line).expect("line should parse");
        assert_eq!(ts, 1240);
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_outcome_roundtrip() {
        for event in [
            GameEvent::Goal { goals: 3, saves: 1 },
            GameEvent::Save { goals: 3, saves: 2 },
        ] {
            let line = serialize_event(500, &event);
            let (_, parsed) = parse_event(&line).expect("line should parse");
            assert_eq!(parsed, event);
        }
    }

    #[test]
    fn test_keeper_dive_roundtrip() {
        let event = GameEvent::KeeperDive {
            direction: "left".to_string(),
        };
        let line = serialize_event(0, &event);
        assert_eq!(line, "T:00000|KD|left");
        let (_, parsed) = parse_event(&line).expect("line should parse");
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_config_roundtrip() {
        let event = GameEvent::Config(GameConfig::default());
        let line = serialize_event(0, &event);
        let (_, parsed) = parse_event(&line).expect("line should parse");
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_timestamp_wraps_at_five_digits() {
        let event = GameEvent::KeeperDive {
            direction: "center".to_string(),
        };
        let line = serialize_event(123_456, &event);
        assert!(line.starts_with("T:23456|"));
    }

    #[test]
    fn test_malformed_lines_parse_to_none() {
        assert!(parse_event("garbage").is_none());
        assert!(parse_event("T:00000|XX|1|2").is_none());
        assert!(parse_event("T:00000|G|not_a_number|0").is_none());
    }
}
