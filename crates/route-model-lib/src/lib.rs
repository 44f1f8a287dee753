//! Route Model Library - Core Data Structures for Route Preview and Navigation
//!
//! This library holds a route that was computed elsewhere (a dense path plus a
//! sequence of turn instructions), keeps its derived geometry up to date, and
//! classifies every turn into an icon identifier the UI can display.
//!
//! # Architecture
//!
//! - **[`Coordinate`] / [`BoundingBox`]**: WGS84 points and the box enclosing a path
//! - **[`TurnInstruction`]**: A decision point with its kind, wording and derived icon
//! - **[`InstructionAssembler`]**: Turns raw route-source events into instructions
//! - **[`RouteModel`]**: The observable route state (empty → populated → reset)
//!
//! # Units
//!
//! - **Distances**: meters
//! - **Times**: seconds
//! - **Angles**: radians, negative values turning the opposite way

mod assemble;
mod geometry;
mod model;
mod observer;
mod turn;

// Public API exports
pub use assemble::{AssemblerConfig, InstructionAssembler, RawTurnEvent};
pub use geometry::{BoundingBox, Coordinate};
pub use model::{RouteModel, RouteState, RouteUpdate};
pub use observer::{ObserverId, ObserverRegistry, RouteObserver};
pub use turn::{TurnInstruction, TurnInstructionInput, TurnInstructionKind, icon_for};

/// Error types for the route model
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Instruction {instruction} references path index {index}, but the path has {path_len} points")]
    InstructionOutOfRange {
        instruction: usize,
        index: usize,
        path_len: usize,
    },

    #[error("Route has turn events but an empty path")]
    EmptyPath,

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

pub type Result<T> = std::result::Result<T, RouteError>;
