use std::time::{Duration, Instant};

/// Wall clock measuring the time between consecutive laps
#[derive(Debug, Clone)]
pub struct Clock {
    last: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Restart measuring from now
    pub fn start(&mut self) {
        self.last = Instant::now();
    }

    /// Seconds since the previous lap (or `start`), then begin a new lap
    pub fn lap(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f64()
    }

    /// Time spent in the current lap so far
    pub fn peek(&self) -> Duration {
        self.last.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laps_are_non_negative_and_restart() {
        let mut clock = Clock::new();
        std::thread::sleep(Duration::from_millis(2));
        let first = clock.lap();
        assert!(first >= 0.002);
        assert!(clock.peek() < Duration::from_secs(1));
    }
}
