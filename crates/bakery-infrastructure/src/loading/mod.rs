//! Single-flight loading
//!
//! ```text
//! load(key) ──► cache hit? ──yes──► return
//!                   │ no
//!                   ▼
//!           SingleFlightGate::acquire (cancellable)
//!                   │
//!                   ▼
//!             re-check cache ──hit──► return
//!                   │ miss
//!                   ▼
//!           LoadTracker::begin ─► resolve ─► bake ─► verify ─► cache insert
//!                   │
//!                   ▼
//!     tracker entry dropped, gate permit dropped (every exit path)
//! ```

pub mod controller;
pub mod gate;
pub mod tracker;

pub use controller::LoadingController;
pub use gate::{GatePermit, SingleFlightGate};
pub use tracker::{InFlightLoad, LoadTracker, TrackedLoad};
