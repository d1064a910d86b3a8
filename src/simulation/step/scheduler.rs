//! Frame scheduler - converts host frame callbacks into simulation ticks
//!
//! Ticks are owed at `fps` per second of wall time. A frame pays the debt
//! down while its remaining budget still fits another measured tick.

use crate::core::error::EngineResult;

use super::settings::{EngineSettings, DEFAULT_FPS, DEFAULT_LOOP_OVERHEAD_MS, DEFAULT_MAX_FRAME_DEBT};
use super::PerfTimer;

pub(crate) struct FrameScheduler {
    fps: u32,
    ms_per_tick: f64,
    last_ms: Option<f64>,
    debt: f64,
    max_debt: f64,
    overhead_ms: f64,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::with_params(DEFAULT_FPS, DEFAULT_MAX_FRAME_DEBT, DEFAULT_LOOP_OVERHEAD_MS)
    }
}

fn ms_per_tick(fps: u32) -> f64 {
    if fps == 0 {
        f64::INFINITY
    } else {
        1000.0 / fps as f64
    }
}

impl FrameScheduler {
    pub(crate) fn new(settings: &EngineSettings) -> Self {
        Self::with_params(settings.fps, settings.max_frame_debt, settings.loop_overhead_ms)
    }

    fn with_params(fps: u32, max_debt: f64, overhead_ms: f64) -> Self {
        Self { fps, ms_per_tick: ms_per_tick(fps), last_ms: None, debt: 0.0, max_debt, overhead_ms }
    }

    pub(crate) fn fps(&self) -> u32 {
        self.fps
    }

    #[cfg(test)]
    pub(crate) fn debt(&self) -> f64 {
        self.debt
    }

    pub(crate) fn set_fps(&mut self, fps: u32) {
        self.fps = fps;
        self.ms_per_tick = ms_per_tick(fps);
        if fps == 0 {
            self.debt = 0.0;
        }
    }

    /// Account for the time since the previous frame and run the owed
    /// ticks. The first call only records its timestamp.
    pub(crate) fn advance<F>(&mut self, now_ms: f64, mut tick: F) -> EngineResult<u32>
    where
        F: FnMut() -> EngineResult<()>,
    {
        let Some(last) = self.last_ms.replace(now_ms) else {
            return Ok(0);
        };
        let interval = (now_ms - last).max(0.0);
        if self.fps > 0 {
            self.debt = (self.debt + interval / self.ms_per_tick).min(self.max_debt);
        }
        if self.debt < 1.0 {
            return Ok(0);
        }

        let mut ran = 0;
        if self.debt < 2.0 {
            tick()?;
            self.debt -= 1.0;
            return Ok(1);
        }

        let t0 = PerfTimer::start();
        tick()?;
        let tick_ms = t0.elapsed_ms();
        self.debt -= 1.0;
        ran += 1;

        let mut remaining = interval - tick_ms - self.overhead_ms;
        while remaining > tick_ms && self.debt >= 1.0 {
            tick()?;
            self.debt -= 1.0;
            ran += 1;
            remaining -= tick_ms;
        }
        Ok(ran)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(s: &mut FrameScheduler, now: f64) -> u32 {
        s.advance(now, || Ok(())).unwrap()
    }

    #[test]
    fn first_frame_only_records_time() {
        let mut s = FrameScheduler::default();
        assert_eq!(run(&mut s, 1000.0), 0);
        assert_eq!(s.debt(), 0.0);
    }

    #[test]
    fn one_frame_interval_runs_one_tick() {
        let mut s = FrameScheduler::default();
        run(&mut s, 0.0);
        assert_eq!(run(&mut s, 1000.0 / 60.0), 1);
        assert!(s.debt() < 1.0);
    }

    #[test]
    fn stall_debt_is_capped() {
        let mut s = FrameScheduler::default();
        run(&mut s, 0.0);
        // a ten second stall owes 600 ticks; at most 5 are paid
        let ran = run(&mut s, 10_000.0);
        assert!(ran >= 1 && ran <= 5, "ran {ran}");
        assert!(s.debt() <= DEFAULT_MAX_FRAME_DEBT);
    }

    #[test]
    fn paused_scheduler_accrues_nothing() {
        let mut s = FrameScheduler::default();
        s.set_fps(0);
        run(&mut s, 0.0);
        assert_eq!(run(&mut s, 5000.0), 0);
        assert_eq!(s.debt(), 0.0);

        s.set_fps(60);
        assert_eq!(run(&mut s, 5000.0 + 1000.0 / 60.0), 1);
    }

    #[test]
    fn tick_errors_propagate() {
        use crate::core::error::EngineError;
        let mut s = FrameScheduler::default();
        run(&mut s, 0.0);
        let err = s.advance(100.0, || Err(EngineError::UnknownMaterial(1)));
        assert!(matches!(err, Err(EngineError::UnknownMaterial(1))));
    }
}
