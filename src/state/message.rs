//! Chat message log.
//!
//! The session's visible history is an append-only sequence of messages.
//! Messages are never edited in place; the only removal is the bulk purge
//! of transient messages (riddle questions and hints) when the session
//! advances past the riddle that produced them.

/// Who a message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// The scripted antagonist persona
    Entity,
    /// The player
    User,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::User => "user",
        }
    }
}

/// Presentation variant for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Regular chat bubble
    #[default]
    Default,
    /// Correct-answer feedback
    Success,
    /// Incorrect-answer feedback
    Error,
    /// Centered system text (hints, pacing cues)
    System,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Error => "error",
            Self::System => "system",
        }
    }
}

/// A single chat message.
///
/// `id` is unique within the log for rendering/keying purposes; it carries
/// no other meaning. `is_transient` marks riddle questions and hints that
/// vanish from the history once the session moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub variant: Variant,
    pub is_transient: bool,
}

impl Message {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "sender": self.sender.as_str(),
            "text": self.text,
            "variant": self.variant.as_str(),
            "is_transient": self.is_transient
        })
    }
}

/// The transient-purge rule: drop every transient message, keep the rest
/// in their original relative order.
pub fn purge_transient(messages: Vec<Message>) -> Vec<Message> {
    messages.into_iter().filter(|m| !m.is_transient).collect()
}

/// Append-only message log with unique ids.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
    next_id: u64,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, assigning it the next id.
    pub fn push(
        &mut self,
        sender: Sender,
        text: impl Into<String>,
        variant: Variant,
        is_transient: bool,
    ) {
        self.next_id += 1;
        self.messages.push(Message {
            id: format!("m{}", self.next_id),
            sender,
            text: text.into(),
            variant,
            is_transient,
        });
    }

    /// Remove every transient message. Returns how many were removed.
    pub fn purge_transient(&mut self) -> usize {
        let before = self.messages.len();
        self.messages = purge_transient(std::mem::take(&mut self.messages));
        before - self.messages.len()
    }

    /// All messages in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of transient messages currently in the log.
    pub fn transient_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_transient).count()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.messages.iter().map(|m| m.to_json()).collect())
    }
}
