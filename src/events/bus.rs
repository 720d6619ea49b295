//! Event Bus - central hub for cross-module communication
//!
//! Systems emit game events to the bus; the evlog writer drains it once
//! per frame. The bus can be disabled for runs that should not log.

use bevy::prelude::*;

use super::types::GameEvent;

/// Timestamped event for the event bus
#[derive(Debug, Clone)]
pub struct BusEvent {
    /// Time in milliseconds since session start
    pub time_ms: u32,
    /// The event data
    pub event: GameEvent,
}

/// Central event bus for cross-module communication
#[derive(Resource, Default)]
pub struct EventBus {
    /// Events emitted this frame, waiting to be drained
    pending: Vec<BusEvent>,

    /// Events already drained (kept for inspection)
    processed: Vec<BusEvent>,

    /// Current elapsed time in milliseconds (for timestamping)
    elapsed_ms: u32,

    /// Whether the bus is enabled (for testing/simulation)
    enabled: bool,
}

impl EventBus {
    /// Create a new enabled event bus
    pub fn new() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Create a disabled event bus (events are dropped)
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Update the elapsed time (called each frame)
    pub fn update_time(&mut self, elapsed_secs: f32) {
        self.elapsed_ms = (elapsed_secs * 1000.0) as u32;
    }

    /// Emit an event to the bus
    pub fn emit(&mut self, event: GameEvent) {
        if !self.enabled {
            return;
        }
        self.pending.push(BusEvent {
            time_ms: self.elapsed_ms,
            event,
        });
    }

    /// Get pending events without draining
    pub fn peek(&self) -> &[BusEvent] {
        &self.pending
    }

    /// Drain pending events, moving them to processed
    pub fn drain(&mut self) -> Vec<BusEvent> {
        let events = std::mem::take(&mut self.pending);
        self.processed.extend(events.clone());
        events
    }

    /// Get all drained events
    pub fn processed(&self) -> &[BusEvent] {
        &self.processed
    }

    /// Number of pending events
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether any events are waiting
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Check if the bus is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}

/// System to update the event bus time each frame
pub fn update_event_bus_time(mut bus: ResMut<EventBus>, time: Res<Time>) {
    bus.update_time(time.elapsed_secs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_and_drain() {
        let mut bus = EventBus::new();
        bus.update_time(1.5);

        bus.emit(GameEvent::ShotTaken {
            lateral: 0.6,
            depth: -0.2,
        });

        assert_eq!(bus.pending_count(), 1);
        assert!(bus.has_pending());

        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time_ms, 1500);
        assert_eq!(bus.pending_count(), 0);
        assert_eq!(bus.processed().len(), 1);
    }

    #[test]
    fn test_disabled_bus_drops_events() {
        let mut bus = EventBus::disabled();
        bus.emit(GameEvent::Goal { goals: 1, saves: 0 });
        assert_eq!(bus.pending_count(), 0);
    }

    #[test]
    fn test_events_keep_emit_order() {
        let mut bus = EventBus::new();
        bus.emit(GameEvent::ShotTaken {
            lateral: 1.0,
            depth: 0.0,
        });
        bus.emit(GameEvent::KeeperDive {
            direction: "left".to_string(),
        });
        bus.emit(GameEvent::Goal { goals: 1, saves: 0 });

        let codes: Vec<_> = bus.drain().iter().map(|e| e.event.type_code()).collect();
        assert_eq!(codes, vec!["ST", "KD", "G"]);
    }
}
