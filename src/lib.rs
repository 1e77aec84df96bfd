//! Vacío State Library
//!
//! This crate provides state management for the Vacío riddle game: a linear
//! narrative quiz played as a simulated chat with a fictional antagonist,
//! "the entity".
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Session State Machine** - Forward-only phases (intro, registering,
//!   playing, finished), guarded transitions, and the scripted, paced
//!   answer/hint exchanges.
//!
//! - **Riddle Catalog** - Four built-in themed sets of ten riddles; one set
//!   is chosen uniformly at random per session. Answers match by exact
//!   equality after normalization (lowercase, diacritics stripped, trimmed).
//!
//! - **Message Log** - The append-only chat history. Riddle questions and
//!   hints are transient: they vanish once the session moves past them,
//!   while answers and feedback persist.
//!
//! # Design Principles
//!
//! 1. **Guards, not errors** - Invalid submissions (wrong phase, empty
//!    input, a sequence already in flight) are silent no-ops. Only broken
//!    content is an error, and only at catalog construction.
//!
//! 2. **Delays are data** - Scripted sequences expose their pacing as
//!    discrete steps with declared delays. The caller sleeps; the session
//!    never does. Tests drive the whole exchange instantly.
//!
//! 3. **Injectable randomness** - Riddle-set and phrase choices go through
//!    a seedable generator, so transcripts are reproducible.
//!
//! 4. **No rendering, no IO** - The presentation layer re-renders from a
//!    JSON snapshot after every transition; audio is a boolean flag here.
//!
//! # Example
//!
//! ```rust
//! use vacio_state::state::{Phase, RiddleCatalog, Session};
//!
//! let catalog = RiddleCatalog::builtin();
//! let mut session = Session::from_seed(&catalog, 7);
//!
//! session.start();
//! session.register("Ana López", "3B", "14");
//! assert_eq!(session.phase(), Phase::Playing);
//!
//! // The answer exchange is staged; a real caller waits out each delay
//! // before applying the step, a headless one applies them back to back.
//! session.submit_answer("sombra");
//! while let Some(_delay_ms) = session.next_delay_ms() {
//!     session.step();
//! }
//! assert_eq!(session.riddle_index(), 1);
//! assert!(!session.awaiting_response());
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
