use inkpost::api::CATEGORIES;
use inkpost::ui::compose::{ComposeField, ComposeIntent, ComposeReducer, ComposeState};
use inkpost::ui::mvi::Reducer;

fn reduce(state: ComposeState, intent: ComposeIntent) -> ComposeState {
    ComposeReducer::reduce(state, intent)
}

fn editing() -> ComposeState {
    reduce(
        ComposeState::Hidden,
        ComposeIntent::Opened { has_token: true },
    )
}

fn type_text(mut state: ComposeState, text: &str) -> ComposeState {
    for ch in text.chars() {
        state = reduce(state, ComposeIntent::Input(ch));
    }
    state
}

/// A form with every required field filled.
fn filled() -> ComposeState {
    let state = type_text(editing(), "My title");
    let state = reduce(state, ComposeIntent::FocusNext);
    let state = type_text(state, "Body text");
    let state = reduce(state, ComposeIntent::FocusNext);
    let state = reduce(state, ComposeIntent::FocusNext);
    type_text(state, "/tmp/cover.png")
}

// -- gate ---------------------------------------------------------------

#[test]
fn opened_without_token_requires_login() {
    let state = reduce(
        ComposeState::Hidden,
        ComposeIntent::Opened { has_token: false },
    );
    assert_eq!(state, ComposeState::LoginRequired);
    assert!(!state.is_editing());
}

#[test]
fn opened_with_token_starts_blank_form() {
    let state = editing();
    assert!(state.is_editing());
    assert!(!state.is_complete());
    assert!(!state.is_submitting());
}

// -- editing ------------------------------------------------------------

#[test]
fn typing_lands_in_the_focused_field() {
    let state = type_text(editing(), "abc");
    match &state {
        ComposeState::Editing { title, content, .. } => {
            assert_eq!(title, "abc");
            assert!(content.is_empty());
        }
        other => panic!("expected Editing, got {other:?}"),
    }
}

#[test]
fn backspace_removes_from_focused_field() {
    let state = type_text(editing(), "ab");
    let state = reduce(state, ComposeIntent::Backspace);
    match &state {
        ComposeState::Editing { title, .. } => assert_eq!(title, "a"),
        other => panic!("expected Editing, got {other:?}"),
    }
}

#[test]
fn focus_cycles_through_all_fields() {
    let mut state = editing();
    let expected = [
        ComposeField::Content,
        ComposeField::Category,
        ComposeField::ImagePath,
        ComposeField::Title,
    ];
    for field in expected {
        state = reduce(state, ComposeIntent::FocusNext);
        match &state {
            ComposeState::Editing { focused, .. } => assert_eq!(*focused, field),
            other => panic!("expected Editing, got {other:?}"),
        }
    }
}

#[test]
fn focus_prev_wraps_backwards() {
    let state = reduce(editing(), ComposeIntent::FocusPrev);
    match &state {
        ComposeState::Editing { focused, .. } => {
            assert_eq!(*focused, ComposeField::ImagePath);
        }
        other => panic!("expected Editing, got {other:?}"),
    }
}

#[test]
fn category_cycles_only_when_focused() {
    // Focused on Title: no change.
    let state = reduce(editing(), ComposeIntent::CategoryNext);
    assert_eq!(state.category_name(), CATEGORIES[0]);

    // Move focus to Category, then cycle both ways.
    let state = reduce(state, ComposeIntent::FocusNext);
    let state = reduce(state, ComposeIntent::FocusNext);
    let state = reduce(state, ComposeIntent::CategoryNext);
    assert_eq!(state.category_name(), CATEGORIES[1]);
    let state = reduce(state, ComposeIntent::CategoryPrev);
    assert_eq!(state.category_name(), CATEGORIES[0]);
    let state = reduce(state, ComposeIntent::CategoryPrev);
    assert_eq!(state.category_name(), CATEGORIES[CATEGORIES.len() - 1]);
}

// -- submit -------------------------------------------------------------

#[test]
fn incomplete_form_cannot_submit() {
    let state = reduce(editing(), ComposeIntent::SubmitRequested);
    assert!(!state.is_submitting());
}

#[test]
fn whitespace_only_fields_count_as_empty() {
    let state = type_text(editing(), "   ");
    assert!(!state.is_complete());
}

#[test]
fn complete_form_submits_once() {
    let state = reduce(filled(), ComposeIntent::SubmitRequested);
    assert!(state.is_submitting());
    // A second request while pending changes nothing.
    let again = reduce(state.clone(), ComposeIntent::SubmitRequested);
    assert_eq!(again, state);
}

#[test]
fn typing_is_blocked_while_submitting() {
    let state = reduce(filled(), ComposeIntent::SubmitRequested);
    let typed = reduce(state.clone(), ComposeIntent::Input('x'));
    assert_eq!(typed, state);
}

#[test]
fn submit_failure_keeps_the_draft() {
    let state = reduce(filled(), ComposeIntent::SubmitRequested);
    let state = reduce(state, ComposeIntent::SubmitFailed);
    assert!(!state.is_submitting());
    match &state {
        ComposeState::Editing { title, .. } => assert_eq!(title, "My title"),
        other => panic!("expected Editing, got {other:?}"),
    }
}

#[test]
fn submit_success_hides_the_form() {
    let state = reduce(filled(), ComposeIntent::SubmitRequested);
    let state = reduce(state, ComposeIntent::SubmitSucceeded);
    assert_eq!(state, ComposeState::Hidden);
}

#[test]
fn draft_snapshot_carries_category_name() {
    let state = filled();
    let draft = state.to_draft().unwrap();
    assert_eq!(draft.title, "My title");
    assert_eq!(draft.content, "Body text");
    assert_eq!(draft.category, "Technology");
    assert_eq!(draft.image_path, "/tmp/cover.png");
}

#[test]
fn closed_discards_everything() {
    let state = reduce(filled(), ComposeIntent::Closed);
    assert_eq!(state, ComposeState::Hidden);
    assert!(state.to_draft().is_none());
}
