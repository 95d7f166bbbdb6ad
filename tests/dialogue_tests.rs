use anyhow::Result;

use healmate::dialogue::{ChatState, Command, Event, Step};
use healmate::store::UserRecord;

/// Dialogue state survives a serde_json round trip mid-survey
#[tokio::test]
async fn test_dialogue_state_serialization() -> Result<()> {
    let state = ChatState {
        step: Step::Gender,
        session: UserRecord {
            name: Some("Ravi".to_string()),
            age: Some("40".to_string()),
            ..Default::default()
        },
    };

    let json = serde_json::to_string(&state)?;
    let restored: ChatState = serde_json::from_str(&json)?;

    assert_eq!(restored, state);
    assert_eq!(restored.session.gender, None);

    Ok(())
}

/// Test default dialogue state
#[test]
fn test_dialogue_default() {
    let state = ChatState::default();
    assert!(matches!(state.step, Step::Idle));
}

/// Test command recognition on raw message text
#[test]
fn test_message_classification() {
    let commands: Vec<Command> = ["/start", "/aiadvice", "/CANCEL", "/help@healmate_bot"]
        .into_iter()
        .map(|text| match Event::parse(text) {
            Event::Command(raw) => Command::parse(raw),
            Event::Text(text) => panic!("{text} parsed as text"),
        })
        .collect();

    assert_eq!(
        commands,
        vec![Command::Start, Command::AiAdvice, Command::Cancel, Command::Help]
    );

    // Survey answers are never commands
    assert_eq!(Event::parse("Male"), Event::Text("Male"));
    assert_eq!(Event::parse("fever / cough"), Event::Text("fever / cough"));
}
