//! Evlog writer - appends bus events to a per-session log file

use bevy::prelude::*;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use uuid::Uuid;

use super::bus::EventBus;
use super::format::serialize_event;
use super::types::{GameConfig, GameEvent};

/// Configuration for event logging
#[derive(Resource, Clone)]
pub struct EventLogConfig {
    /// Directory for log files
    pub log_dir: PathBuf,
    /// Whether logging is enabled
    pub enabled: bool,
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            enabled: false,
        }
    }
}

/// Active event logger with file handle
#[derive(Resource)]
pub struct EventLogger {
    writer: Option<BufWriter<File>>,
    session_id: String,
    config: EventLogConfig,
}

impl EventLogger {
    /// Create a new event logger (but don't open file yet)
    pub fn new(config: EventLogConfig) -> Self {
        Self {
            writer: None,
            session_id: String::new(),
            config,
        }
    }

    /// Start a new log session: generate a session UUID, open the file,
    /// and log the SessionStart event.
    pub fn start_session(&mut self, timestamp: &str) {
        if !self.config.enabled {
            return;
        }

        self.session_id = Uuid::new_v4().to_string();

        if let Err(e) = std::fs::create_dir_all(&self.config.log_dir) {
            warn!("Failed to create log directory: {}", e);
            return;
        }

        // Use session_id in filename for uniqueness
        let filename = format!("{}_{}.evlog", timestamp, &self.session_id[..8]);
        let path = self.config.log_dir.join(filename);

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
        {
            Ok(file) => {
                self.writer = Some(BufWriter::new(file));
                info!(
                    "Event logging started: {} (session: {})",
                    path.display(),
                    &self.session_id[..8]
                );

                self.log(
                    0,
                    &GameEvent::SessionStart {
                        session_id: self.session_id.clone(),
                        timestamp: timestamp.to_string(),
                    },
                );
            }
            Err(e) => {
                warn!("Failed to open event log: {}", e);
            }
        }
    }

    /// Log the configuration snapshot (call after start_session)
    pub fn log_config(&mut self, config: GameConfig) {
        self.log(0, &GameEvent::Config(config));
    }

    /// Get the current session ID
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// End the current log session
    pub fn end_session(&mut self) {
        if let Some(mut writer) = self.writer.take()
            && let Err(e) = writer.flush()
        {
            warn!("Failed to flush event log: {}", e);
        }
    }

    /// Write one event line
    pub fn log(&mut self, time_ms: u32, event: &GameEvent) {
        let Some(writer) = &mut self.writer else {
            return;
        };
        let line = serialize_event(time_ms, event);
        if let Err(e) = writeln!(writer, "{}", line) {
            warn!("Failed to write event: {}", e);
        }
    }

    /// Check if logging is active
    pub fn is_active(&self) -> bool {
        self.writer.is_some()
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new(EventLogConfig::default())
    }
}

/// Startup system: open the session log and snapshot the configuration.
pub fn begin_session(mut logger: ResMut<EventLogger>) {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string();
    logger.start_session(&timestamp);
    if logger.is_active() {
        logger.log_config(GameConfig::default());
    }
}

/// Drain the event bus into the evlog once per frame.
pub fn flush_bus_to_log(mut bus: ResMut<EventBus>, mut logger: ResMut<EventLogger>) {
    if !bus.has_pending() {
        return;
    }
    for bus_event in bus.drain() {
        logger.log(bus_event.time_ms, &bus_event.event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logger_stays_inactive() {
        let mut logger = EventLogger::default();
        logger.start_session("20260804_120000");
        assert!(!logger.is_active());
    }

    #[test]
    fn test_session_writes_evlog_lines() {
        let log_dir = std::env::temp_dir().join(format!("spotkick_evlog_{}", Uuid::new_v4()));
        let mut logger = EventLogger::new(EventLogConfig {
            log_dir: log_dir.clone(),
            enabled: true,
        });

        logger.start_session("20260804_120000");
        assert!(logger.is_active());
        logger.log(
            150,
            &GameEvent::ShotTaken {
                lateral: 1.0,
                depth: 0.0,
            },
        );
        logger.end_session();

        let entries: Vec<_> = std::fs::read_dir(&log_dir)
            .expect("log dir should exist")
            .collect();
        assert_eq!(entries.len(), 1);
        let content =
            std::fs::read_to_string(entries[0].as_ref().unwrap().path()).expect("evlog readable");
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2); // SessionStart + ShotTaken
        assert!(lines[0].contains("|SE|"));
        assert_eq!(lines[1], "T:00150|ST|1.00|0.00");

        let _ = std::fs::remove_dir_all(&log_dir);
    }
}
