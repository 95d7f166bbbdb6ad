//! Conversation state for the survey and AI-advice flows.

use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

use crate::store::UserRecord;

/// Position in a conversation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// No flow in progress
    #[default]
    Idle,
    Name,
    Age,
    Gender,
    Symptoms,
    AiSymptoms,
}

/// Per-chat state kept between messages
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatState {
    pub step: Step,
    /// Fields collected so far, cleared when the survey starts
    pub session: UserRecord,
}

/// Type alias for our health dialogue
pub type HealthDialogue = Dialogue<ChatState, InMemStorage<ChatState>>;

/// Bot commands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    AiAdvice,
    Cancel,
    Help,
    Unknown(String),
}

/// An incoming text message, classified
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event<'a> {
    Command(&'a str),
    Text(&'a str),
}

impl<'a> Event<'a> {
    /// Messages starting with `/` and a command word are commands, everything else is text
    pub fn parse(text: &'a str) -> Self {
        match text.strip_prefix('/') {
            Some(rest) if rest.starts_with(|c: char| c.is_ascii_alphanumeric()) => {
                Event::Command(rest)
            }
            _ => Event::Text(text),
        }
    }
}

impl Command {
    /// Parse the part of a command message after the leading `/`
    ///
    /// Arguments and an `@botname` suffix are ignored.
    pub fn parse(raw: &str) -> Self {
        let word = raw.split_whitespace().next().unwrap_or_default();
        let name = word.split('@').next().unwrap_or_default().to_lowercase();

        match name.as_str() {
            "start" => Command::Start,
            "aiadvice" => Command::AiAdvice,
            "cancel" => Command::Cancel,
            "help" => Command::Help,
            _ => Command::Unknown(name),
        }
    }
}
