//! # Conversation Engine
//!
//! Drives the survey and AI-advice flows for one chat. The engine knows
//! nothing about Telegram: replies go out through an [`Outbox`] and the
//! caller keeps the returned [`ChatState`] for the next message.
//!
//! Transitions:
//!
//! - `/start` (any step) clears the session and asks for the name
//! - `/aiadvice` (any step) asks for a detailed symptom description
//! - `/cancel` (any step) ends the flow
//! - text in `Name`, `Age`, `Gender`, `Symptoms`, `AiSymptoms` advances the flow
//! - text while `Idle` and unknown commands are ignored

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::advice::classify_symptoms;
use crate::advisor::Advisor;
use crate::dialogue::{ChatState, Command, Event, Step};
use crate::localization::{t, t_args};
use crate::store::UserStore;

/// Keyboard attached to a reply
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyMarkup {
    /// One-time keyboard with the suggested genders
    GenderChoice,
}

/// One outgoing message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub markup: Option<ReplyMarkup>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: None,
        }
    }

    pub fn with_markup(text: impl Into<String>, markup: ReplyMarkup) -> Self {
        Self {
            text: text.into(),
            markup: Some(markup),
        }
    }
}

/// Where replies are delivered
#[async_trait]
pub trait Outbox: Send + Sync {
    async fn send(&self, reply: Reply) -> Result<()>;
}

/// Survey and AI-advice conversation handler
pub struct Healmate<A> {
    store: UserStore,
    advisor: A,
}

impl<A: Advisor> Healmate<A> {
    pub fn new(store: UserStore, advisor: A) -> Self {
        Self { store, advisor }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn advisor(&self) -> &A {
        &self.advisor
    }

    /// Process one text message and return the state to keep for the chat
    ///
    /// Storage failures are returned as errors; the caller should then keep
    /// the previous state.
    pub async fn handle<O: Outbox>(
        &self,
        user_id: &str,
        state: ChatState,
        text: &str,
        outbox: &O,
    ) -> Result<ChatState> {
        match Event::parse(text) {
            Event::Command(raw) => self.handle_command(state, Command::parse(raw), outbox).await,
            Event::Text(text) => self.handle_text(user_id, state, text, outbox).await,
        }
    }

    async fn handle_command<O: Outbox>(
        &self,
        state: ChatState,
        command: Command,
        outbox: &O,
    ) -> Result<ChatState> {
        debug!(step = ?state.step, command = ?command, "Handling command");

        match command {
            Command::Start => {
                outbox.send(Reply::text(t("welcome"))).await?;
                Ok(ChatState {
                    step: Step::Name,
                    session: Default::default(),
                })
            }
            Command::AiAdvice => {
                outbox.send(Reply::text(t("ai-ask-symptoms"))).await?;
                Ok(ChatState {
                    step: Step::AiSymptoms,
                    ..state
                })
            }
            Command::Cancel => {
                outbox.send(Reply::text(t("cancelled"))).await?;
                Ok(ChatState {
                    step: Step::Idle,
                    ..state
                })
            }
            Command::Help => {
                outbox.send(Reply::text(t("help-text"))).await?;
                Ok(state)
            }
            Command::Unknown(name) => {
                debug!(command = %name, "Ignoring unknown command");
                Ok(state)
            }
        }
    }

    async fn handle_text<O: Outbox>(
        &self,
        user_id: &str,
        mut state: ChatState,
        text: &str,
        outbox: &O,
    ) -> Result<ChatState> {
        debug!(user_id, step = ?state.step, chars = text.len(), "Handling text");

        match state.step {
            Step::Idle => {
                debug!(user_id, "Ignoring text outside of a conversation");
            }
            Step::Name => {
                state.session.name = Some(text.to_string());
                outbox.send(Reply::text(t("ask-age"))).await?;
                state.step = Step::Age;
            }
            Step::Age => {
                state.session.age = Some(text.to_string());
                outbox
                    .send(Reply::with_markup(t("ask-gender"), ReplyMarkup::GenderChoice))
                    .await?;
                state.step = Step::Gender;
            }
            Step::Gender => {
                state.session.gender = Some(text.to_string());
                outbox.send(Reply::text(t("ask-symptoms"))).await?;
                state.step = Step::Symptoms;
            }
            Step::Symptoms => {
                let symptoms = text.to_lowercase();
                state.session.symptoms = Some(symptoms.clone());
                self.store.save(user_id, &state.session).await?;

                let advice = classify_symptoms(&symptoms);
                info!(user_id, advice = ?advice, "Survey completed");
                outbox.send(Reply::text(advice.message())).await?;
                state.step = Step::Idle;
            }
            Step::AiSymptoms => {
                let symptoms = text.trim();
                outbox.send(Reply::text(t("ai-analyzing"))).await?;

                // A rejected advice reply is reported like a failed model call
                let outcome = match self.advisor.advise(symptoms).await {
                    Ok(advice) => {
                        let reply = Reply::text(t_args("ai-advice-result", &[("advice", &advice)]));
                        match outbox.send(reply).await {
                            Ok(()) => Ok(advice),
                            Err(e) => Err(e.to_string()),
                        }
                    }
                    Err(e) => Err(e.to_string()),
                };

                match outcome {
                    Ok(advice) => {
                        state.session.ai_advice = Some(advice);
                        self.store.save(user_id, &state.session).await?;
                        info!(user_id, "AI advice delivered");
                    }
                    Err(error) => {
                        warn!(user_id, error = %error, "AI advice generation failed");
                        outbox
                            .send(Reply::text(t_args("ai-advice-error", &[("error", &error)])))
                            .await?;
                    }
                }
                state.step = Step::Idle;
            }
        }

        Ok(state)
    }
}
