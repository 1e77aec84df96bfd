//! Game session state machine.
//!
//! One `Session` per player run. Phases move strictly forward:
//!
//! ```text
//! ┌───────┐  start   ┌─────────────┐  register   ┌─────────┐
//! │ Intro │─────────▶│ Registering │────────────▶│ Playing │
//! └───────┘          └─────────────┘             └────┬────┘
//!                                                     │ last riddle
//!                                                     │ answered
//!                                                     ▼
//!                                               ┌──────────┐
//!                                               │ Finished │
//!                                               └──────────┘
//! ```
//!
//! Answering and hint requests run as scripted sequences of discrete steps
//! separated by pacing delays. The delays are data, not sleeps: the caller
//! reads [`Session::next_delay_ms`], waits however it likes (or not at all,
//! in tests), then applies the step with [`Session::step`]. While steps are
//! pending, further submissions are rejected.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::content;
use super::message::{Message, MessageLog, Sender, Variant};
use super::riddle::{Riddle, RiddleCatalog, RiddleSet};

/// Pacing before the feedback message, in milliseconds.
pub const FEEDBACK_DELAY_MS: u64 = 800;

/// Pacing before the "entity is thinking" cue.
pub const THINKING_DELAY_MS: u64 = 1200;

/// Pacing before the next riddle (or the finish).
pub const ADVANCE_DELAY_MS: u64 = 2000;

/// Pacing before a requested hint is revealed.
pub const HINT_DELAY_MS: u64 = 800;

/// Session phases. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// The macabre opening screen
    #[default]
    Intro,
    /// Identity collection
    Registering,
    /// Active riddle solving
    Playing,
    /// Summary screen
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Registering => "registering",
            Self::Playing => "playing",
            Self::Finished => "finished",
        }
    }

    /// Check if the session accepts answers.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Check if the session is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// Player identity, captured once during registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub name: String,
    pub group: String,
    pub list_number: String,
}

impl PlayerIdentity {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "group": self.group,
            "list_number": self.list_number
        })
    }
}

/// A step of an in-flight scripted sequence, applied after its delay.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingStep {
    /// Evaluate the stored answer, append feedback
    Feedback { input: String },
    /// Append the pacing cue
    Thinking,
    /// Purge transients, move to the next riddle or finish
    Advance,
    /// Append the current riddle's hint
    RevealHint,
}

/// A single game session.
///
/// Owns all mutable game state. The presentation layer calls the transition
/// operations and re-renders from [`Session::to_json`] after each one.
/// Guarded operations that don't apply (wrong phase, busy, empty input)
/// return `false` and change nothing; there is no error path for them.
#[derive(Debug)]
pub struct Session {
    phase: Phase,
    player: PlayerIdentity,
    riddles: RiddleSet,
    riddle_index: usize,
    errors: u32,
    started_at: Option<chrono::DateTime<chrono::Utc>>,
    ended_at: Option<chrono::DateTime<chrono::Utc>>,
    log: MessageLog,
    pending: VecDeque<(u64, PendingStep)>,
    muted: bool,
    rng: StdRng,
}

impl Session {
    /// Create a session, choosing a riddle set at random from the catalog.
    pub fn new(catalog: &RiddleCatalog) -> Self {
        Self::with_rng(catalog, StdRng::from_os_rng())
    }

    /// Create a session with a deterministic generator (tests).
    pub fn from_seed(catalog: &RiddleCatalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: &RiddleCatalog, mut rng: StdRng) -> Self {
        let riddles = catalog.choose(&mut rng).clone();
        Self {
            phase: Phase::Intro,
            player: PlayerIdentity::default(),
            riddles,
            riddle_index: 0,
            errors: 0,
            started_at: None,
            ended_at: None,
            log: MessageLog::new(),
            pending: VecDeque::new(),
            muted: false,
            rng,
        }
    }

    // --- Transition operations ---

    /// Intro → Registering.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Intro {
            return false;
        }
        self.phase = Phase::Registering;
        true
    }

    /// Registering → Playing. All three fields must be non-empty after
    /// trimming; otherwise nothing changes.
    pub fn register(&mut self, name: &str, group: &str, list_number: &str) -> bool {
        if self.phase != Phase::Registering {
            return false;
        }
        if name.trim().is_empty() || group.trim().is_empty() || list_number.trim().is_empty() {
            return false;
        }

        self.player = PlayerIdentity {
            name: name.to_string(),
            group: group.to_string(),
            list_number: list_number.to_string(),
        };
        self.phase = Phase::Playing;
        self.started_at = Some(chrono::Utc::now());

        self.log.push(
            Sender::Entity,
            content::welcome_line(&self.player.name),
            Variant::Default,
            false,
        );
        if let Some(first) = self.riddles.get(0) {
            let question = first.question.clone();
            self.log.push(Sender::Entity, question, Variant::Default, true);
        }
        true
    }

    /// Submit an answer, starting the scripted exchange.
    ///
    /// The raw input is appended as a user message untouched; trimming only
    /// applies to the empty check and to matching. Rejected while a
    /// sequence is in flight.
    pub fn submit_answer(&mut self, raw: &str) -> bool {
        if self.phase != Phase::Playing || self.awaiting_response() || raw.trim().is_empty() {
            return false;
        }

        self.log.push(Sender::User, raw, Variant::Default, false);
        self.pending.push_back((
            FEEDBACK_DELAY_MS,
            PendingStep::Feedback {
                input: raw.to_string(),
            },
        ));
        self.pending.push_back((THINKING_DELAY_MS, PendingStep::Thinking));
        self.pending.push_back((ADVANCE_DELAY_MS, PendingStep::Advance));
        true
    }

    /// Ask for the current riddle's hint.
    ///
    /// No-op if the riddle has no hint or a sequence is in flight. Does not
    /// touch the riddle index or the error count.
    pub fn request_hint(&mut self) -> bool {
        if self.phase != Phase::Playing || self.awaiting_response() {
            return false;
        }
        let has_hint = self
            .current_riddle()
            .map(|r| r.has_hint())
            .unwrap_or(false);
        if !has_hint {
            return false;
        }

        self.log
            .push(Sender::User, content::HINT_REQUEST_TEXT, Variant::Default, false);
        self.pending.push_back((HINT_DELAY_MS, PendingStep::RevealHint));
        true
    }

    /// Toggle the ambient-audio flag. Audio is a presentation concern; this
    /// never affects game state.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Force the audio flag, e.g. when the presentation layer's autoplay
    /// attempt is blocked and it falls back to muted.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    // --- Scripted sequence driver ---

    /// Delay to realize before the next pending step, if any.
    pub fn next_delay_ms(&self) -> Option<u64> {
        self.pending.front().map(|(delay, _)| *delay)
    }

    /// Apply the next pending step. Returns `false` if none was pending.
    pub fn step(&mut self) -> bool {
        let Some((_, step)) = self.pending.pop_front() else {
            return false;
        };
        match step {
            PendingStep::Feedback { input } => self.apply_feedback(&input),
            PendingStep::Thinking => {
                self.log.push(
                    Sender::Entity,
                    content::ENTITY_THINKING_TEXT,
                    Variant::System,
                    false,
                );
            }
            PendingStep::Advance => self.apply_advance(),
            PendingStep::RevealHint => self.apply_hint(),
        }
        true
    }

    /// Apply every pending step without pacing (tests, headless runs).
    pub fn run_pending(&mut self) {
        while self.step() {}
    }

    fn apply_feedback(&mut self, input: &str) {
        let correct = self
            .current_riddle()
            .map(|r| r.matches(input))
            .unwrap_or(false);

        if correct {
            let phrase =
                content::CORRECT_PHRASES[self.rng.random_range(0..content::CORRECT_PHRASES.len())];
            self.log.push(Sender::Entity, phrase, Variant::Success, false);
        } else {
            self.errors += 1;
            let phrase = content::INCORRECT_PHRASES
                [self.rng.random_range(0..content::INCORRECT_PHRASES.len())];
            self.log.push(Sender::Entity, phrase, Variant::Error, false);
        }
    }

    fn apply_advance(&mut self) {
        // Past riddle questions and hints vanish from the visible history;
        // answers, feedback and thinking cues persist.
        self.log.purge_transient();
        self.riddle_index += 1;

        if self.riddle_index >= self.riddles.len() {
            self.phase = Phase::Finished;
            self.ended_at = Some(chrono::Utc::now());
        } else if let Some(next) = self.riddles.get(self.riddle_index) {
            let question = next.question.clone();
            self.log.push(Sender::Entity, question, Variant::Default, true);
        }
    }

    fn apply_hint(&mut self) {
        if let Some(hint) = self.current_riddle().and_then(|r| r.hint.clone()) {
            self.log.push(Sender::Entity, hint, Variant::System, true);
        }
    }

    // --- Read API ---

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &PlayerIdentity {
        &self.player
    }

    /// The riddle currently awaiting an answer.
    pub fn current_riddle(&self) -> Option<&Riddle> {
        self.riddles.get(self.riddle_index)
    }

    pub fn riddle_index(&self) -> usize {
        self.riddle_index
    }

    pub fn riddle_total(&self) -> usize {
        self.riddles.len()
    }

    /// Theme of the set chosen for this session.
    pub fn theme(&self) -> &str {
        &self.riddles.theme
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn messages(&self) -> &[Message] {
        self.log.messages()
    }

    pub fn started_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.ended_at
    }

    /// Time played so far, or total time once finished.
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        let started = self.started_at?;
        let end = self.ended_at.unwrap_or_else(chrono::Utc::now);
        Some(end - started)
    }

    /// True while a scripted sequence is in flight; answer and hint
    /// submissions are rejected until it completes.
    pub fn awaiting_response(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Full snapshot for the presentation layer.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "phase": self.phase.as_str(),
            "player": self.player.to_json(),
            "theme": self.riddles.theme,
            "riddle_index": self.riddle_index,
            "riddle_total": self.riddles.len(),
            "errors": self.errors,
            "started_at": self.started_at.map(|t| t.to_rfc3339()),
            "ended_at": self.ended_at.map(|t| t.to_rfc3339()),
            "awaiting_response": self.awaiting_response(),
            "muted": self.muted,
            "messages": self.log.to_json()
        })
    }
}

/// Format a play duration as `mm:ss` for the summary screen.
pub fn format_elapsed(elapsed: chrono::Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::riddle::{Riddle, RiddleCatalog, RiddleSet};
    use pretty_assertions::assert_eq;

    fn test_catalog() -> RiddleCatalog {
        let set = RiddleSet {
            theme: "Prueba".to_string(),
            riddles: vec![
                Riddle {
                    id: 1,
                    question: "¿Qué soy?".to_string(),
                    answer_keywords: vec!["sombra".to_string(), "la sombra".to_string()],
                    hint: Some("Pegada a tus pies.".to_string()),
                },
                Riddle {
                    id: 2,
                    question: "¿Quién soy?".to_string(),
                    answer_keywords: vec!["silencio".to_string()],
                    hint: None,
                },
            ],
        };
        RiddleCatalog::new(vec![set]).unwrap()
    }

    fn playing_session() -> Session {
        let mut session = Session::from_seed(&test_catalog(), 1);
        assert!(session.start());
        assert!(session.register("Ana", "3B", "14"));
        session
    }

    fn texts(session: &Session) -> Vec<&str> {
        session.messages().iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let session = Session::from_seed(&test_catalog(), 1);

        assert_eq!(session.phase(), Phase::Intro);
        assert_eq!(session.riddle_index(), 0);
        assert_eq!(session.errors(), 0);
        assert!(session.messages().is_empty());
        assert!(session.started_at().is_none());
        assert!(!session.awaiting_response());
    }

    #[test]
    fn test_start_only_from_intro() {
        let mut session = Session::from_seed(&test_catalog(), 1);

        assert!(session.start());
        assert_eq!(session.phase(), Phase::Registering);
        // Second start is ignored
        assert!(!session.start());
        assert_eq!(session.phase(), Phase::Registering);
    }

    #[test]
    fn test_register_requires_all_fields() {
        let mut session = Session::from_seed(&test_catalog(), 1);
        session.start();

        assert!(!session.register("Ana", "3B", ""));
        assert!(!session.register("", "3B", "14"));
        assert!(!session.register("Ana", "   ", "14"));
        assert_eq!(session.phase(), Phase::Registering);
        assert!(session.messages().is_empty());

        assert!(session.register("Ana", "3B", "14"));
        assert_eq!(session.phase(), Phase::Playing);
        assert!(session.started_at().is_some());
        assert_eq!(session.player().name, "Ana");
    }

    #[test]
    fn test_register_appends_welcome_and_first_riddle() {
        let session = playing_session();

        assert_eq!(session.messages().len(), 2);
        assert!(session.messages()[0].text.contains("Ana"));
        assert!(!session.messages()[0].is_transient);
        assert_eq!(session.messages()[1].text, "¿Qué soy?");
        assert!(session.messages()[1].is_transient);
    }

    #[test]
    fn test_register_cannot_run_twice() {
        let mut session = playing_session();

        assert!(!session.register("Otra", "1A", "2"));
        assert_eq!(session.player().name, "Ana");
    }

    #[test]
    fn test_submit_answer_stages_three_steps() {
        let mut session = playing_session();

        assert!(session.submit_answer("Sombra"));
        assert!(session.awaiting_response());

        // User message appended immediately, untouched
        assert_eq!(texts(&session).last(), Some(&"Sombra"));

        // Pacing delays surface in order
        assert_eq!(session.next_delay_ms(), Some(FEEDBACK_DELAY_MS));
        assert!(session.step());
        assert_eq!(session.next_delay_ms(), Some(THINKING_DELAY_MS));
        assert!(session.step());
        assert_eq!(session.next_delay_ms(), Some(ADVANCE_DELAY_MS));
        assert!(session.step());
        assert_eq!(session.next_delay_ms(), None);
        assert!(!session.awaiting_response());
    }

    #[test]
    fn test_correct_answer_feedback_and_advance() {
        let mut session = playing_session();

        session.submit_answer(" SÓMBRA ");
        session.run_pending();

        assert_eq!(session.errors(), 0);
        assert_eq!(session.riddle_index(), 1);

        let all = texts(&session);
        assert!(all
            .iter()
            .any(|t| crate::state::content::CORRECT_PHRASES.contains(t)));
        assert!(all.contains(&crate::state::content::ENTITY_THINKING_TEXT));
        // Old question purged, next question present and transient
        assert!(!all.contains(&"¿Qué soy?"));
        assert!(all.contains(&"¿Quién soy?"));
        let transients: Vec<&Message> = session
            .messages()
            .iter()
            .filter(|m| m.is_transient)
            .collect();
        assert_eq!(transients.len(), 1);
        assert_eq!(transients[0].text, "¿Quién soy?");
    }

    #[test]
    fn test_incorrect_answer_counts_error_and_still_advances() {
        let mut session = playing_session();

        session.submit_answer("perro");
        session.run_pending();

        assert_eq!(session.errors(), 1);
        // The sequence is linear: a miss moves on just like a hit
        assert_eq!(session.riddle_index(), 1);
        assert!(texts(&session)
            .iter()
            .any(|t| crate::state::content::INCORRECT_PHRASES.contains(t)));
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn test_final_answer_finishes_session() {
        let mut session = playing_session();

        session.submit_answer("sombra");
        session.run_pending();
        session.submit_answer("silencio");
        session.run_pending();

        assert_eq!(session.phase(), Phase::Finished);
        assert!(session.ended_at().is_some());
        assert!(session.ended_at() >= session.started_at());
        assert_eq!(session.riddle_index(), session.riddle_total());
        // Nothing transient survives and no new question was appended
        assert_eq!(
            session.messages().iter().filter(|m| m.is_transient).count(),
            0
        );
        assert!(session.current_riddle().is_none());
    }

    #[test]
    fn test_no_submissions_after_finish() {
        let mut session = playing_session();
        session.submit_answer("sombra");
        session.run_pending();
        session.submit_answer("silencio");
        session.run_pending();

        let len = session.messages().len();
        assert!(!session.submit_answer("sombra"));
        assert!(!session.request_hint());
        assert_eq!(session.messages().len(), len);
        assert_eq!(session.errors(), 0);
    }

    #[test]
    fn test_submissions_rejected_while_awaiting() {
        let mut session = playing_session();
        session.submit_answer("sombra");

        let len = session.messages().len();
        assert!(!session.submit_answer("otra cosa"));
        assert!(!session.request_hint());
        assert_eq!(session.messages().len(), len);
        assert_eq!(session.errors(), 0);
    }

    #[test]
    fn test_empty_input_is_ignored() {
        let mut session = playing_session();

        assert!(!session.submit_answer(""));
        assert!(!session.submit_answer("   "));
        assert!(!session.awaiting_response());
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_hint_exchange() {
        let mut session = playing_session();

        assert!(session.request_hint());
        assert!(session.awaiting_response());
        assert_eq!(session.next_delay_ms(), Some(HINT_DELAY_MS));
        assert!(session.step());
        assert!(!session.awaiting_response());

        let last = session.messages().last().unwrap();
        assert_eq!(last.text, "Pegada a tus pies.");
        assert_eq!(last.variant, Variant::System);
        assert!(last.is_transient);
        // Hint doesn't touch progress
        assert_eq!(session.riddle_index(), 0);
        assert_eq!(session.errors(), 0);
    }

    #[test]
    fn test_hint_purged_on_advance() {
        let mut session = playing_session();
        session.request_hint();
        session.run_pending();

        session.submit_answer("sombra");
        session.run_pending();

        assert!(!texts(&session).contains(&"Pegada a tus pies."));
    }

    #[test]
    fn test_hint_unavailable_is_noop() {
        let mut session = playing_session();
        session.submit_answer("sombra");
        session.run_pending();

        // Second riddle has no hint
        let len = session.messages().len();
        assert!(!session.request_hint());
        assert!(!session.awaiting_response());
        assert_eq!(session.messages().len(), len);
    }

    #[test]
    fn test_mute_does_not_touch_game_state() {
        let mut session = playing_session();

        assert!(!session.is_muted());
        session.toggle_mute();
        assert!(session.is_muted());
        session.set_muted(true);
        assert!(session.is_muted());
        session.toggle_mute();
        assert!(!session.is_muted());

        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_every_keyword_of_every_builtin_riddle_matches() {
        let catalog = RiddleCatalog::builtin();
        for set in catalog.sets() {
            for riddle in &set.riddles {
                for keyword in &riddle.answer_keywords {
                    assert!(
                        riddle.matches(keyword),
                        "{} #{}: {}",
                        set.theme,
                        riddle.id,
                        keyword
                    );
                }
            }
        }
    }

    #[test]
    fn test_snapshot_shape() {
        let mut session = playing_session();
        session.submit_answer("sombra");
        session.run_pending();

        let json = session.to_json();
        assert_eq!(json["phase"], "playing");
        assert_eq!(json["player"]["name"], "Ana");
        assert_eq!(json["riddle_index"], 1);
        assert_eq!(json["riddle_total"], 2);
        assert_eq!(json["errors"], 0);
        assert_eq!(json["awaiting_response"], false);
        assert!(json["started_at"].is_string());
        assert!(json["ended_at"].is_null());
        assert!(json["messages"].is_array());
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(chrono::Duration::seconds(0)), "00:00");
        assert_eq!(format_elapsed(chrono::Duration::seconds(59)), "00:59");
        assert_eq!(format_elapsed(chrono::Duration::seconds(61)), "01:01");
        assert_eq!(format_elapsed(chrono::Duration::seconds(600)), "10:00");
        // Clock skew clamps at zero
        assert_eq!(format_elapsed(chrono::Duration::seconds(-5)), "00:00");
    }

    #[test]
    fn test_elapsed_tracks_play_time() {
        let mut session = Session::from_seed(&test_catalog(), 1);
        assert!(session.elapsed().is_none());

        session.start();
        session.register("Ana", "3B", "14");
        let elapsed = session.elapsed().unwrap();
        assert!(elapsed >= chrono::Duration::zero());
    }

    #[test]
    fn test_deterministic_sessions_share_a_transcript() {
        let catalog = RiddleCatalog::builtin();
        let mut a = Session::from_seed(&catalog, 99);
        let mut b = Session::from_seed(&catalog, 99);

        for session in [&mut a, &mut b] {
            session.start();
            session.register("Ana", "3B", "14");
            session.submit_answer("cualquier cosa");
            session.run_pending();
        }

        assert_eq!(a.theme(), b.theme());
        assert_eq!(texts(&a), texts(&b));
        assert_eq!(a.errors(), b.errors());
    }
}
