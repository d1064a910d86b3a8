//! Engine clock. One millisecond timeline shared by the perf timings and
//! the tick-rate meter, so both read the same source.

#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Stopwatch over `now_ms`
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { started_ms: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_ms).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_never_runs_backwards() {
        let a = now_ms();
        let timer = PerfTimer::start();
        let mut spin = 0u64;
        for k in 0..10_000u64 {
            spin = spin.wrapping_add(k * k);
        }
        assert!(spin > 0);
        assert!(now_ms() >= a);
        assert!(timer.elapsed_ms() >= 0.0);
    }
}
