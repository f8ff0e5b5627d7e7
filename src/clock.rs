//! Frame timing

/// Turns a stream of frame timestamps into per-tick elapsed times.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    previous: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous call.
    ///
    /// The first tick, a timestamp earlier than the last one, and non-finite
    /// timestamps all yield 0. A rejected timestamp does not replace the last
    /// good one.
    ///
    /// ```
    /// use pixel_room::clock::FrameClock;
    ///
    /// let mut clock = FrameClock::new();
    /// assert_eq!(clock.advance(1000.0), 0.0);
    /// assert_eq!(clock.advance(1016.0), 16.0);
    /// assert_eq!(clock.advance(900.0), 0.0);
    /// assert_eq!(clock.advance(1020.0), 4.0);
    /// ```
    pub fn advance(&mut self, timestamp: f64) -> f64 {
        if !timestamp.is_finite() {
            return 0.0;
        }
        match self.previous {
            Some(previous) if timestamp >= previous => {
                self.previous = Some(timestamp);
                timestamp - previous
            }
            Some(_) => 0.0,
            None => {
                self.previous = Some(timestamp);
                0.0
            }
        }
    }

    /// Timestamp of the last accepted tick.
    pub fn last(&self) -> Option<f64> {
        self.previous
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(5000.0), 0.0);
        assert_eq!(clock.last(), Some(5000.0));
    }

    #[test]
    fn test_first_tick_at_zero_still_counts() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(0.0), 0.0);
        assert_eq!(clock.advance(16.0), 16.0);
    }

    #[test]
    fn test_backwards_time_is_ignored() {
        let mut clock = FrameClock::new();
        clock.advance(100.0);
        assert_eq!(clock.advance(50.0), 0.0);
        assert_eq!(clock.last(), Some(100.0));
        assert_eq!(clock.advance(f64::NAN), 0.0);
        assert_eq!(clock.advance(132.0), 32.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        clock.advance(10.0);
        clock.reset();
        assert_eq!(clock.advance(40.0), 0.0);
    }
}
