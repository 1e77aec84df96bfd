//! State management module for the Vacío riddle game.
//!
//! This module provides the core state types:
//!
//! - `session` - The game session state machine (phases, progress, pacing)
//! - `riddle` - Riddle catalog, set selection, answer normalization
//! - `message` - The append-only chat log with transient purging
//! - `content` - Scripted phrases and the built-in riddle sets
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Session                             │
//! │                                                              │
//! │  Phase: Intro ──▶ Registering ──▶ Playing ──▶ Finished       │
//! │                                                              │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐  │
//! │  │  RiddleSet   │   │  MessageLog  │   │  pending steps   │  │
//! │  │ (chosen once │   │ (append-only,│   │ (Feedback →      │  │
//! │  │  per session │   │  transient   │   │  Thinking →      │  │
//! │  │  at random)  │   │  purge)      │   │  Advance)        │  │
//! │  └──────────────┘   └──────────────┘   └──────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The presentation layer calls transition operations (`start`, `register`,
//! `submit_answer`, `request_hint`, `toggle_mute`), drives pending steps
//! with the pacing delays the session reports, and re-renders from
//! `Session::to_json` after each change.

pub mod content;
pub mod message;
pub mod riddle;
pub mod session;

// Re-export commonly used types
pub use content::{
    welcome_line, CLOSING_PHRASE, CORRECT_PHRASES, ENTITY_THINKING_TEXT, HINT_REQUEST_TEXT,
    INCORRECT_PHRASES, OPENING_PHRASE,
};
pub use message::{purge_transient, Message, MessageLog, Sender, Variant};
pub use riddle::{normalize, ContentError, Riddle, RiddleCatalog, RiddleSet};
pub use session::{
    format_elapsed, Phase, PlayerIdentity, Session, ADVANCE_DELAY_MS, FEEDBACK_DELAY_MS,
    HINT_DELAY_MS, THINKING_DELAY_MS,
};
