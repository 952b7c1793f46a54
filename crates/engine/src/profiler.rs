//! Per-stage frame timings for debug runs

use crate::clock::Clock;

/// Frame stages, in the order the frame executes them
pub const STAGES: [&str; 6] = [
    "clear_canvas",
    "update_objects",
    "check_collisions",
    "resolve_events",
    "update_camera",
    "update_canvas",
];

#[derive(Debug, Clone, Default)]
pub struct Profiler {
    clock: Clock,
    laps: Vec<f64>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.clock.start();
        self.laps.clear();
    }

    /// Close the current stage
    pub fn tick(&mut self) {
        self.laps.push(self.clock.lap());
    }

    pub fn recorded(&self) -> usize {
        self.laps.len()
    }

    /// Format the recorded stages as `name=0.00012s, ...` and reset
    pub fn dump(&mut self) -> String {
        let line = STAGES
            .iter()
            .zip(&self.laps)
            .map(|(name, dt)| format!("{name}={dt:.5}s"))
            .collect::<Vec<_>>()
            .join(", ");
        self.laps.clear();
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_names_each_recorded_stage() {
        let mut profiler = Profiler::new();
        profiler.start();
        profiler.tick();
        profiler.tick();
        let line = profiler.dump();
        assert!(line.starts_with("clear_canvas="));
        assert!(line.contains(", update_objects="));
        assert!(!line.contains("check_collisions"));
        assert_eq!(profiler.recorded(), 0);
    }
}
