//! Typewriter effect for the hero phrases.
//!
//! The animation is an explicit finite-state machine ([`TypewriterState`])
//! advanced by an engine that talks to an injectable [`Scheduler`]. Tests
//! step ticks by hand through [`TimerSlot`]; the binary runs the same engine
//! on the Tokio clock via [`drive`].

pub mod driver;
pub mod engine;
pub mod scheduler;
pub mod state;

pub use driver::{TypewriterCommand, drive};
pub use engine::{TypewriterDisplay, TypewriterEngine};
pub use scheduler::{ScheduledTick, Scheduler, TimerSlot, TimerToken};
pub use state::{Phase, TypewriterState, cycle_duration};
