//! Simulation driver and program loading.
//!
//! Provides the loader that places a program image into banked memory, the
//! [`Simulator`](simulator::Simulator) that runs it, the observer hooks used
//! for logging, and text rendering of machine state.

pub mod loader;
pub mod observer;
pub mod render;
pub mod simulator;

pub use observer::{CycleObserver, NullObserver, TracingObserver};
pub use simulator::{HaltReason, RunSummary, Simulator};
