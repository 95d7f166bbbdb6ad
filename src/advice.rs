//! Rule-based health tips.
//!
//! Symptom text is matched against a short, ordered list of substring rules.
//! The first rule that matches decides the advice.

use crate::localization::t;

/// Outcome of the keyword classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    Flu,
    TensionOrDehydration,
    Indigestion,
    ChestInfection,
    Recorded,
}

impl Advice {
    /// Message catalog key for this advice
    pub fn message_key(self) -> &'static str {
        match self {
            Advice::Flu => "advice-flu",
            Advice::TensionOrDehydration => "advice-headache",
            Advice::Indigestion => "advice-indigestion",
            Advice::ChestInfection => "advice-chest-infection",
            Advice::Recorded => "advice-recorded",
        }
    }

    /// Reply text sent to the user
    pub fn message(self) -> String {
        t(self.message_key())
    }
}

/// Classify symptom text, case-insensitively
pub fn classify_symptoms(symptoms: &str) -> Advice {
    let text = symptoms.to_lowercase();
    let has = |keyword: &str| text.contains(keyword);

    if has("fever") && has("cough") {
        Advice::Flu
    } else if has("headache") {
        Advice::TensionOrDehydration
    } else if has("stomach ache") || has("stomach pain") {
        Advice::Indigestion
    } else if has("cough") && has("chest pain") {
        Advice::ChestInfection
    } else {
        Advice::Recorded
    }
}
