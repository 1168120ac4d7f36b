//! Diagnostics
//!
//! Debug side-channel for the building core: aim rays, impact markers and
//! placement math. Nothing recorded here ever feeds back into gameplay.
//!
//! Producers write through a [`DebugDraw`], which drops everything while the
//! debug flag is off. Consumers implement [`DiagnosticSink`]:
//! - [`LogSink`] writes every primitive to the `log` facade
//! - [`RecordingSink`] keeps them in memory for an overlay or for tests

use glam::Vec3;

/// Line lifetime for a trace that hit something (seconds).
pub const HIT_LINE_LIFETIME: f32 = 2.0;
/// Line lifetime for a trace that missed (seconds).
pub const MISS_LINE_LIFETIME: f32 = 5.0;
/// Impact marker lifetime (seconds).
pub const MARKER_LIFETIME: f32 = 5.0;
/// Half extent of the impact marker box.
pub const MARKER_HALF_EXTENT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugColor {
    /// Trace hit
    Green,
    /// Trace miss
    Red,
}

/// One diagnostic record.
#[derive(Debug, Clone, PartialEq)]
pub enum DebugPrimitive {
    Line {
        start: Vec3,
        end: Vec3,
        color: DebugColor,
        lifetime: f32,
    },
    Box {
        center: Vec3,
        half_extent: Vec3,
        color: DebugColor,
        lifetime: f32,
    },
    Message(String),
}

/// Destination for diagnostic records.
pub trait DiagnosticSink {
    fn record(&mut self, primitive: DebugPrimitive);
}

/// Writes primitives to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&mut self, primitive: DebugPrimitive) {
        match primitive {
            DebugPrimitive::Line {
                start,
                end,
                color,
                lifetime,
            } => log::debug!("debug line {start} -> {end} ({color:?}, {lifetime}s)"),
            DebugPrimitive::Box {
                center,
                half_extent,
                color,
                lifetime,
            } => log::debug!("debug box at {center} half {half_extent} ({color:?}, {lifetime}s)"),
            DebugPrimitive::Message(text) => log::info!("{text}"),
        }
    }
}

/// Keeps every primitive in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub primitives: Vec<DebugPrimitive>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DebugPrimitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, DebugPrimitive::Line { .. }))
    }

    pub fn boxes(&self) -> impl Iterator<Item = &DebugPrimitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, DebugPrimitive::Box { .. }))
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            DebugPrimitive::Message(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&mut self, primitive: DebugPrimitive) {
        self.primitives.push(primitive);
    }
}

/// Gated writer over a sink; a no-op while `enabled` is false.
pub struct DebugDraw<'a> {
    enabled: bool,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> DebugDraw<'a> {
    pub fn new(enabled: bool, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self { enabled, sink }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn line(&mut self, start: Vec3, end: Vec3, color: DebugColor, lifetime: f32) {
        if self.enabled {
            self.sink.record(DebugPrimitive::Line {
                start,
                end,
                color,
                lifetime,
            });
        }
    }

    pub fn marker(&mut self, center: Vec3, color: DebugColor) {
        if self.enabled {
            self.sink.record(DebugPrimitive::Box {
                center,
                half_extent: Vec3::splat(MARKER_HALF_EXTENT),
                color,
                lifetime: MARKER_LIFETIME,
            });
        }
    }

    /// Records a message. The closure only runs while enabled.
    pub fn message(&mut self, text: impl FnOnce() -> String) {
        if self.enabled {
            self.sink.record(DebugPrimitive::Message(text()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_draw_records_nothing() {
        let mut sink = RecordingSink::new();
        {
            let mut draw = DebugDraw::new(false, &mut sink);
            draw.line(Vec3::ZERO, Vec3::X, DebugColor::Red, MISS_LINE_LIFETIME);
            draw.marker(Vec3::ZERO, DebugColor::Green);
            draw.message(|| panic!("message closure must not run while disabled"));
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn test_enabled_draw_records_in_order() {
        let mut sink = RecordingSink::new();
        {
            let mut draw = DebugDraw::new(true, &mut sink);
            draw.line(Vec3::ZERO, Vec3::X, DebugColor::Green, HIT_LINE_LIFETIME);
            draw.marker(Vec3::X, DebugColor::Green);
            draw.message(|| "hello".to_string());
        }
        assert_eq!(sink.primitives.len(), 3);
        assert_eq!(sink.lines().count(), 1);
        assert_eq!(sink.boxes().count(), 1);
        assert_eq!(sink.messages().collect::<Vec<_>>(), vec!["hello"]);
        assert!(matches!(
            sink.primitives[1],
            DebugPrimitive::Box { half_extent, .. } if half_extent == Vec3::splat(2.0)
        ));
    }

    #[test]
    fn test_log_sink_accepts_everything() {
        let mut sink = LogSink;
        sink.record(DebugPrimitive::Message("no logger installed".to_string()));
        sink.record(DebugPrimitive::Line {
            start: Vec3::ZERO,
            end: Vec3::Z,
            color: DebugColor::Red,
            lifetime: 1.0,
        });
    }
}
