//! Engine errors
//!
//! Everything here is a programming or configuration fault: the host is
//! expected to stop its frame loop when one surfaces. Particle pool
//! exhaustion is NOT an error (see `ParticlePool::spawn`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Two materials were registered with the same cell value.
    #[error("duplicate color: {name} reuses material id {id:#010x} (already taken by {existing})")]
    DuplicateMaterialId {
        name: &'static str,
        existing: &'static str,
        id: u32,
    },

    /// The cellular pass met a cell value with no registered routine.
    #[error("unregistered material {value:#010x} at cell {index}")]
    UnregisteredMaterial { value: u32, index: usize },

    /// A host command referenced a value that is not a material.
    #[error("unknown material {0:#010x}")]
    UnknownMaterial(u32),

    /// Active/inactive bookkeeping of the particle pool went out of sync.
    #[error("particle pool accounting broken: expected {expected} active particles, visited {visited}")]
    PoolAccounting { expected: usize, visited: usize },

    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("settings json: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("manifest json: {0}")]
    Manifest(#[source] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
