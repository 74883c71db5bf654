//! Lightweight render timing.

use std::time::{Duration, Instant};

/// Accumulates time over repeated start/stop laps.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    total: Duration,
    laps: u32,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a lap. Returns false if a lap is already running.
    pub fn start(&mut self) -> bool {
        if self.started.is_some() {
            return false;
        }
        self.started = Some(Instant::now());
        self.laps += 1;
        true
    }

    /// End the running lap. Returns false if nothing was running.
    pub fn stop(&mut self) -> bool {
        match self.started.take() {
            Some(started) => {
                self.total += started.elapsed();
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Time spent in completed laps.
    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn laps(&self) -> u32 {
        self.laps
    }

    pub fn average(&self) -> Option<Duration> {
        (self.laps > 0).then(|| self.total / self.laps)
    }
}

/// Summary of a finished render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    pub pixels: u64,
    pub samples: u64,
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_stop_pairs() {
        let mut watch = Stopwatch::new();
        assert!(!watch.stop());
        assert_eq!(watch.average(), None);

        assert!(watch.start());
        assert!(watch.is_running());
        assert!(!watch.start());
        assert!(watch.stop());
        assert!(!watch.is_running());
        assert!(!watch.stop());

        assert!(watch.start());
        assert!(watch.stop());
        assert_eq!(watch.laps(), 2);
        assert!(watch.average().unwrap() <= watch.total());
    }
}
