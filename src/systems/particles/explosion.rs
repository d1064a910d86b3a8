//! Explosion particles: a filled FIRE disc redrawn every tick.

use super::overlay::Overlay;
use super::Progress;
use crate::core::random::RandStream;

/// How the disc decays once drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decay {
    /// Full size for three ticks, then shrinks by a third per tick.
    Shrink,
    /// Fixed size, retired on its third draw.
    Flash,
}

#[derive(Clone, Debug)]
pub struct Explosion {
    pub radius: f32,
    pub decay: Decay,
}

/// Radius classes for C4: (roll threshold out of 10000, spread)
const C4_RADIUS_CLASSES: [(f64, f64); 3] = [(9000.0, 10.0), (9500.0, 32.0), (9800.0, 64.0)];
const C4_RADIUS_LARGEST: f64 = 128.0;
const C4_RADIUS_MIN: f64 = 3.0;

const SHRINK_AFTER: u32 = 3;
const SHRINK_FACTOR: f32 = 3.0;
const FLASH_TICKS: u32 = 2;

impl Explosion {
    pub fn c4(rng: &mut RandStream) -> Self {
        let class = rng.unit() * 10000.0;
        let spread = C4_RADIUS_CLASSES
            .iter()
            .find(|(limit, _)| class < *limit)
            .map_or(C4_RADIUS_LARGEST, |&(_, spread)| spread);
        Self {
            radius: (rng.unit() * spread + C4_RADIUS_MIN) as f32,
            decay: Decay::Shrink,
        }
    }

    pub fn methane(rng: &mut RandStream) -> Self {
        Self {
            radius: rng.roll() as f32 / 10.0 + 10.0,
            decay: Decay::Flash,
        }
    }

    pub fn act(&mut self, x: f32, y: f32, color: u32, iterations: u32, overlay: &mut Overlay) -> Progress {
        overlay.fill_disc(x, y, self.radius, color);
        match self.decay {
            Decay::Shrink if iterations >= SHRINK_AFTER => {
                self.radius /= SHRINK_FACTOR;
                if self.radius <= 1.0 {
                    return Progress::Finished;
                }
                Progress::Continue
            }
            Decay::Flash if iterations > FLASH_TICKS => Progress::Finished,
            _ => Progress::Continue,
        }
    }
}
