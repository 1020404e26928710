//! Simulation error types
//!
//! Only broken invariants surface as errors. Numeric edge cases and missing
//! optional components are handled in place and never reach this type.

use crate::ecs::ComponentKind;

/// Error type for simulation operations
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// An actor is missing a component the simulation requires every frame.
    /// The driver should treat this as fatal.
    Precondition { actor: String, missing: ComponentKind },
    /// A waypoint path was built with no points
    EmptyPath,
}

impl SimError {
    pub fn missing(actor: &str, missing: ComponentKind) -> Self {
        SimError::Precondition {
            actor: actor.to_string(),
            missing,
        }
    }
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::Precondition { actor, missing } => {
                write!(f, "Precondition failed: actor '{}' has no {:?} component", actor, missing)
            }
            SimError::EmptyPath => write!(f, "Waypoint path must contain at least one point"),
        }
    }
}

impl std::error::Error for SimError {}
