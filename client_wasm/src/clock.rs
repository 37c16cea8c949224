//! Fixed-rate tick scheduling for `requestAnimationFrame`

/// Turns frame timestamps into a whole number of physics ticks
#[derive(Debug, Clone)]
pub struct TickClock {
    step_ms: f64,
    max_ticks: u32,
    last: Option<f64>,
    accumulator: f64,
}

impl TickClock {
    pub fn new(tick_rate: f64, max_ticks: u32) -> Self {
        Self {
            step_ms: 1000.0 / tick_rate,
            max_ticks,
            last: None,
            accumulator: 0.0,
        }
    }

    /// Ticks due at `now_ms`. The first call only starts the clock.
    pub fn ticks(&mut self, now_ms: f64) -> u32 {
        let Some(last) = self.last.replace(now_ms) else {
            return 0;
        };

        // Clock going backwards counts as no time
        self.accumulator += (now_ms - last).max(0.0);

        let mut ticks = 0;
        while self.accumulator >= self.step_ms && ticks < self.max_ticks {
            self.accumulator -= self.step_ms;
            ticks += 1;
        }

        // Tab was in the background: drop the backlog instead of fast-forwarding
        if ticks == self.max_ticks && self.accumulator >= self.step_ms {
            tracing::debug!(dropped_ms = self.accumulator, "tick backlog dropped");
            self.accumulator = 0.0;
        }
        ticks
    }
}
