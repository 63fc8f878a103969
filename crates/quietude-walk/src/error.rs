//! Error types for the walk mode.

use std::fmt;

use quietude_core::{GridDims, Severity, TypeTag};
use quietude_store::StoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// The three phases of a tick, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Rendering the area.
    Output,
    /// Polling the next command.
    Input,
    /// Applying game rules.
    Logic,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Output => f.write_str("output"),
            Self::Input => f.write_str("input"),
            Self::Logic => f.write_str("logic"),
        }
    }
}

/// Failure reported by a tick collaborator.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{reason}")]
pub struct PhaseError {
    /// Description of what went wrong.
    pub reason: String,
}

impl PhaseError {
    /// Create from a description.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors from the walk mode lifecycle and tick protocol.
#[derive(Error, Debug)]
pub enum WalkError {
    /// `init` was called while a session is running. The running session
    /// is untouched.
    #[error("walk mode already initialized")]
    AlreadyInitialized,
    /// `tick`, `end` or a session query was called with no running session.
    #[error("walk mode not initialized")]
    NotInitialized,
    /// The handoff cell does not hold an area. The mode stays inactive.
    #[error("handoff cell holds {found}, expected area")]
    HandoffMismatch {
        /// Tag of the cell that was handed over.
        found: TypeTag,
    },
    /// The area's dimensions differ from the configured ones.
    #[error("area is {found:?}, config expects {expected:?}")]
    DimsMismatch {
        /// Configured dimensions.
        expected: GridDims,
        /// Dimensions of the area.
        found: GridDims,
    },
    /// A save was requested but the configuration names no save path.
    #[error("no save_path configured")]
    NoSavePath,
    /// A raw command code outside the command range.
    #[error("invalid command code {code}")]
    InvalidCommand {
        /// The rejected code.
        code: i32,
    },
    /// A collaborator failed during a tick.
    #[error("{phase} phase failed: {source}")]
    Phase {
        /// Phase that failed.
        phase: Phase,
        /// What the collaborator reported.
        #[source]
        source: PhaseError,
    },
    /// Saving or loading the area failed.
    #[error("store: {0}")]
    Store(#[from] StoreError),
    /// The configuration is invalid.
    #[error("config: {0}")]
    Config(#[from] ConfigError),
}

impl WalkError {
    /// Tier of this error.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Store(e) => e.severity(),
            Self::Config(e) => e.severity(),
            _ => Severity::Reported,
        }
    }
}
