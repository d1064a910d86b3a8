//! Particle pool - fixed-capacity slots for effects the cell rules can't express
//!
//! Slots are recycled through a free list; nothing is allocated per spawn
//! apart from a tree's turtle stack.

pub mod explosion;
pub mod overlay;
pub mod tree;

use crate::core::error::{EngineError, EngineResult};
use crate::core::random::RandStream;
use crate::elements::{MaterialId, EL_BRANCH, EL_FIRE};

use explosion::Explosion;
use overlay::Overlay;
use tree::TreeGrowth;

pub const DEFAULT_PARTICLE_CAPACITY: usize = 8000;

/// Outcome of one particle action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Continue,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    C4Explosion,
    MethaneExplosion,
    Tree,
}

#[derive(Clone, Debug)]
pub enum Effect {
    Explosion(Explosion),
    Tree(TreeGrowth),
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub kind: ParticleKind,
    pub x: f32,
    pub y: f32,
    /// Grid index of the cell that spawned it
    pub origin: usize,
    pub color: MaterialId,
    pub iterations: u32,
    pub effect: Effect,
}

impl Particle {
    /// Fresh particle centred on cell (x, y)
    pub fn spawn(kind: ParticleKind, x: u32, y: u32, origin: usize, rng: &mut RandStream) -> Self {
        let (color, effect) = match kind {
            ParticleKind::C4Explosion => (EL_FIRE, Effect::Explosion(Explosion::c4(rng))),
            ParticleKind::MethaneExplosion => (EL_FIRE, Effect::Explosion(Explosion::methane(rng))),
            ParticleKind::Tree => (EL_BRANCH, Effect::Tree(TreeGrowth::new(rng))),
        };
        Self {
            kind,
            x: x as f32 + 0.5,
            y: y as f32 + 0.5,
            origin,
            color,
            iterations: 0,
            effect,
        }
    }

    pub fn act(&mut self, overlay: &mut Overlay) -> Progress {
        self.iterations += 1;
        match &mut self.effect {
            Effect::Explosion(e) => e.act(self.x, self.y, self.color, self.iterations, overlay),
            Effect::Tree(t) => t.act(&mut self.x, &mut self.y, &mut self.color, overlay),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub enum ParticleSlot {
    #[default]
    Inactive,
    Active(Particle),
}

impl ParticleSlot {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, ParticleSlot::Active(_))
    }
}

pub struct ParticlePool {
    slots: Vec<ParticleSlot>,
    /// Inactive slot indices; the top of the stack is handed out next.
    free: Vec<usize>,
    active: usize,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![ParticleSlot::Inactive; capacity],
            // lowest slot first
            free: (0..capacity).rev().collect(),
            active: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn inactive_count(&self) -> usize {
        self.free.len()
    }

    pub fn get(&self, slot: usize) -> Option<&Particle> {
        match self.slots.get(slot) {
            Some(ParticleSlot::Active(p)) => Some(p),
            _ => None,
        }
    }

    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Particle)> {
        self.slots.iter().enumerate().filter_map(|(i, s)| match s {
            ParticleSlot::Active(p) => Some((i, p)),
            ParticleSlot::Inactive => None,
        })
    }

    /// Claim a slot and initialise a particle of `kind`.
    ///
    /// `None` means the pool is exhausted; the caller applies its simpler
    /// in-grid effect instead. Pool state is untouched in that case.
    pub fn spawn(&mut self, kind: ParticleKind, x: u32, y: u32, origin: usize, rng: &mut RandStream) -> Option<usize> {
        let Some(slot) = self.free.pop() else {
            tracing::trace!(?kind, origin, "particle pool exhausted");
            return None;
        };
        self.slots[slot] = ParticleSlot::Active(Particle::spawn(kind, x, y, origin, rng));
        self.active += 1;
        Some(slot)
    }

    /// Return a slot to the free list. Retiring an inactive slot is a no-op.
    pub fn retire(&mut self, slot: usize) -> bool {
        match self.slots.get_mut(slot) {
            Some(s) if s.is_active() => {
                *s = ParticleSlot::Inactive;
                self.free.push(slot);
                self.active -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn deactivate_all(&mut self) {
        if self.active == 0 {
            return;
        }
        for slot in 0..self.slots.len() {
            self.retire(slot);
        }
    }

    /// Advance every active particle once, in slot order.
    ///
    /// The walk stops as soon as the active count seen at entry has been
    /// visited; a mismatch means the bookkeeping is broken.
    pub fn update(&mut self, overlay: &mut Overlay) -> EngineResult<()> {
        let expected = self.active;
        let mut visited = 0;
        for slot in 0..self.slots.len() {
            if visited == expected {
                break;
            }
            let progress = match &mut self.slots[slot] {
                ParticleSlot::Inactive => continue,
                ParticleSlot::Active(p) => p.act(overlay),
            };
            visited += 1;
            if progress == Progress::Finished {
                self.retire(slot);
            }
        }
        if visited != expected {
            tracing::error!(expected, visited, "particle pool accounting broken");
            return Err(EngineError::PoolAccounting { expected, visited });
        }
        Ok(())
    }
}
