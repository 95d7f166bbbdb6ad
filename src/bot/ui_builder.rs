//! UI Builder module for creating keyboards

use teloxide::types::{KeyboardButton, KeyboardMarkup};

// Import localization
use crate::localization::t;

// Import conversation reply types
use crate::conversation::ReplyMarkup;

/// Create the one-time reply keyboard offering Male / Female / Other
pub fn create_gender_keyboard() -> KeyboardMarkup {
    let row = ["gender-male", "gender-female", "gender-other"]
        .into_iter()
        .map(|key| KeyboardButton::new(t(key)))
        .collect::<Vec<_>>();

    KeyboardMarkup::new(vec![row]).one_time_keyboard()
}

/// Telegram keyboard for a conversation reply markup
pub fn keyboard_for(markup: &ReplyMarkup) -> KeyboardMarkup {
    match markup {
        ReplyMarkup::GenderChoice => create_gender_keyboard(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_keyboard_layout() {
        let keyboard = create_gender_keyboard();

        assert_eq!(keyboard.keyboard.len(), 1);
        let labels: Vec<&str> = keyboard.keyboard[0].iter().map(|b| b.text.as_str()).collect();
        assert_eq!(labels, vec!["Male", "Female", "Other"]);
        assert!(keyboard.one_time_keyboard);
    }
}
