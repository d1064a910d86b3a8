use std::collections::VecDeque;

const WINDOW_MS: f64 = 1000.0;

/// Ticks completed during the last second
#[derive(Default)]
pub(crate) struct TickRate {
    stamps: VecDeque<f64>,
}

impl TickRate {
    pub(crate) fn record(&mut self, now_ms: f64) {
        let cutoff = now_ms - WINDOW_MS;
        while self.stamps.front().is_some_and(|&t| t <= cutoff) {
            self.stamps.pop_front();
        }
        self.stamps.push_back(now_ms);
    }

    pub(crate) fn per_second(&self) -> u32 {
        self.stamps.len() as u32
    }

    pub(crate) fn reset(&mut self) {
        self.stamps.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_drops_old_stamps() {
        let mut rate = TickRate::default();
        for t in [0.0, 100.0, 500.0, 900.0] {
            rate.record(t);
        }
        assert_eq!(rate.per_second(), 4);
        rate.record(1100.0);
        // 0 and 100 fell out of the window
        assert_eq!(rate.per_second(), 3);
    }
}
