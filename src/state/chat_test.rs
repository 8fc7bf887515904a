use super::*;
use crate::net::error::QueryError;
use crate::net::types::{Analysis, QueryResponse, RainfallRecord};

// =============================================================
// Helpers
// =============================================================

fn make_response(summary: &str) -> QueryResponse {
    QueryResponse {
        summary: summary.to_owned(),
        analysis: None,
        entities: None,
        citations: Vec::new(),
        data_source: None,
    }
}

fn make_response_with_rainfall(summary: &str) -> QueryResponse {
    QueryResponse {
        analysis: Some(Analysis {
            rainfall_analysis: vec![RainfallRecord {
                state: "Punjab".to_owned(),
                average_rainfall: 650.0,
            }],
            ..Analysis::default()
        }),
        ..make_response(summary)
    }
}

// =============================================================
// Default state
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.is_empty());
    assert!(!state.sending);
    assert!(state.error.is_none());
    assert!(!state.show_details);
    assert!(state.current_answer().is_none());
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn begin_submit_appends_one_user_message_and_enters_sending() {
    let mut state = ChatState::default();
    let accepted = state.begin_submit("Compare rainfall in Punjab");
    assert_eq!(accepted.as_deref(), Some("Compare rainfall in Punjab"));
    assert_eq!(state.len(), 1);
    assert!(state.sending);
    assert!(matches!(
        &state.messages[0],
        ChatMessage::User { text, .. } if text == "Compare rainfall in Punjab"
    ));
}

#[test]
fn begin_submit_trims_surrounding_whitespace() {
    let mut state = ChatState::default();
    let accepted = state.begin_submit("  top crops in Karnataka  ");
    assert_eq!(accepted.as_deref(), Some("top crops in Karnataka"));
    assert_eq!(state.messages[0].display_text(), "top crops in Karnataka");
}

#[test]
fn begin_submit_rejects_empty_and_whitespace_input() {
    let mut state = ChatState::default();
    assert!(state.begin_submit("").is_none());
    assert!(state.begin_submit("   ").is_none());
    assert!(state.begin_submit("\t\n").is_none());
    assert!(state.is_empty());
    assert!(!state.sending);
}

#[test]
fn begin_submit_rejects_while_request_outstanding() {
    let mut state = ChatState::default();
    state.begin_submit("first").unwrap();
    assert!(state.begin_submit("second").is_none());
    assert_eq!(state.len(), 1);
}

#[test]
fn begin_submit_clears_previous_error_banner() {
    let mut state = ChatState::default();
    state.begin_submit("first").unwrap();
    state.fail(&QueryError::Protocol(500));
    assert!(state.error.is_some());

    state.begin_submit("second").unwrap();
    assert!(state.error.is_none());
}

// =============================================================
// complete / fail
// =============================================================

#[test]
fn complete_appends_one_assistant_message_and_returns_to_idle() {
    let mut state = ChatState::default();
    state.begin_submit("q").unwrap();
    state.complete(make_response("answer"));
    assert_eq!(state.len(), 2);
    assert!(!state.sending);
    assert_eq!(state.messages[1].display_text(), "answer");
}

#[test]
fn fail_appends_error_message_with_embedded_reason() {
    let mut state = ChatState::default();
    state.begin_submit("q").unwrap();
    state.fail(&QueryError::Protocol(503));
    assert_eq!(state.len(), 2);
    assert!(!state.sending);
    assert_eq!(
        state.messages[1].display_text(),
        "Error: HTTP error! status: 503"
    );
    assert_eq!(state.error.as_deref(), Some(ERROR_BANNER));
}

#[test]
fn fail_keeps_the_user_message_in_the_transcript() {
    let mut state = ChatState::default();
    state.begin_submit("doomed question").unwrap();
    state.fail(&QueryError::Transport("connection refused".to_owned()));
    assert!(matches!(
        &state.messages[0],
        ChatMessage::User { text, .. } if text == "doomed question"
    ));
}

#[test]
fn interface_stays_usable_after_failure() {
    let mut state = ChatState::default();
    state.begin_submit("first").unwrap();
    state.fail(&QueryError::Decode("bad json".to_owned()));
    assert!(state.begin_submit("second").is_some());
    state.complete(make_response("ok"));
    assert_eq!(state.len(), 4);
}

// =============================================================
// current_answer
// =============================================================

#[test]
fn current_answer_is_most_recent_assistant_message() {
    let mut state = ChatState::default();
    state.begin_submit("q1").unwrap();
    state.complete(make_response("first answer"));
    state.begin_submit("q2").unwrap();
    state.complete(make_response_with_rainfall("second answer"));

    let answer = state.current_answer().unwrap();
    assert_eq!(answer.summary, "second answer");
    assert!(answer.analysis.is_some());
}

#[test]
fn current_answer_skips_trailing_error_messages() {
    let mut state = ChatState::default();
    state.begin_submit("q1").unwrap();
    state.complete(make_response("good answer"));
    state.begin_submit("q2").unwrap();
    state.fail(&QueryError::Protocol(500));

    assert_eq!(state.current_answer().unwrap().summary, "good answer");
}

#[test]
fn current_answer_none_for_user_only_transcript() {
    let mut state = ChatState::default();
    state.begin_submit("q").unwrap();
    assert!(state.current_answer().is_none());
}

// =============================================================
// should_auto_submit
// =============================================================

#[test]
fn auto_submit_fires_for_new_non_empty_value() {
    assert!(should_auto_submit("Compare rainfall", ""));
}

#[test]
fn auto_submit_ignores_empty_and_repeated_values() {
    assert!(!should_auto_submit("", ""));
    assert!(!should_auto_submit("   ", "anything"));
    assert!(!should_auto_submit("same query", "same query"));
}

#[test]
fn auto_submit_fires_again_for_a_different_value() {
    assert!(should_auto_submit("second query", "first query"));
}
