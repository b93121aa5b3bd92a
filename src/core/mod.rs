//! Core data structures of the event-driven hard sphere engine: the
//! particle state store, the cell grid, the event types and the
//! simulation itself.

pub mod event;
pub mod grid;
pub mod particle;
pub mod sim;

pub use event::{Event, EventKind, QueueItem};
pub use grid::CellGrid;
pub use particle::Particle;
pub use sim::{PerfCounters, SimAttrs, Simulation};
