use inkpost::ui::like::{LikeBoardState, LikeIntent, LikeReducer, LikeRequest};
use inkpost::ui::mvi::Reducer;

fn reduce(state: LikeBoardState, intent: LikeIntent) -> LikeBoardState {
    LikeReducer::reduce(state, intent)
}

fn activated(post_id: &str) -> LikeBoardState {
    reduce(
        LikeBoardState::default(),
        LikeIntent::Activated {
            post_id: post_id.to_string(),
        },
    )
}

/// Card with a completed hydrate, ready to toggle.
fn hydrated(post_id: &str, liked: bool) -> LikeBoardState {
    reduce(
        activated(post_id),
        LikeIntent::Hydrated {
            post_id: post_id.to_string(),
            generation: 1,
            liked,
        },
    )
}

// -- hydration ----------------------------------------------------------

#[test]
fn activation_starts_a_hydrate() {
    let state = activated("p1");
    let card = state.card("p1").unwrap();
    assert_eq!(card.in_flight, Some(LikeRequest::Hydrate));
    assert!(!card.hydrated);
    assert_eq!(card.generation, 1);
    assert!(!card.liked);
}

#[test]
fn hydrate_success_adopts_server_value() {
    let state = hydrated("p1", true);
    let card = state.card("p1").unwrap();
    assert!(card.liked);
    assert!(card.hydrated);
    assert!(card.can_toggle());
}

#[test]
fn hydrate_failure_keeps_prior_value() {
    let state = reduce(
        activated("p1"),
        LikeIntent::HydrateFailed {
            post_id: "p1".to_string(),
            generation: 1,
        },
    );
    let card = state.card("p1").unwrap();
    // Initialization default survives; the card is idle again, no retry.
    assert!(!card.liked);
    assert!(!card.hydrated);
    assert!(card.can_toggle());
}

#[test]
fn reactivation_bumps_generation() {
    let state = reduce(
        activated("p1"),
        LikeIntent::Activated {
            post_id: "p1".to_string(),
        },
    );
    assert_eq!(state.generation("p1"), 2);
}

#[test]
fn stale_hydrate_response_is_dropped() {
    // Re-activated while the first response was in flight.
    let state = reduce(
        activated("p1"),
        LikeIntent::Activated {
            post_id: "p1".to_string(),
        },
    );
    let state = reduce(
        state,
        LikeIntent::Hydrated {
            post_id: "p1".to_string(),
            generation: 1,
            liked: true,
        },
    );
    let card = state.card("p1").unwrap();
    assert!(!card.liked);
    assert!(!card.hydrated);
    // The second activation's request is still outstanding.
    assert_eq!(card.in_flight, Some(LikeRequest::Hydrate));
}

#[test]
fn stale_hydrate_failure_is_dropped_too() {
    let state = reduce(
        activated("p1"),
        LikeIntent::Activated {
            post_id: "p1".to_string(),
        },
    );
    let state = reduce(
        state,
        LikeIntent::HydrateFailed {
            post_id: "p1".to_string(),
            generation: 1,
        },
    );
    assert_eq!(
        state.card("p1").unwrap().in_flight,
        Some(LikeRequest::Hydrate)
    );
}

#[test]
fn hydrate_for_unknown_card_is_ignored() {
    let state = reduce(
        LikeBoardState::default(),
        LikeIntent::Hydrated {
            post_id: "ghost".to_string(),
            generation: 1,
            liked: true,
        },
    );
    assert!(state.card("ghost").is_none());
}

// -- toggling -----------------------------------------------------------

#[test]
fn toggle_success_is_its_own_inverse() {
    let state = hydrated("p1", false);

    let state = reduce(
        state,
        LikeIntent::ToggleRequested {
            post_id: "p1".to_string(),
        },
    );
    let state = reduce(
        state,
        LikeIntent::ToggleConfirmed {
            post_id: "p1".to_string(),
            liked: true,
        },
    );
    assert!(state.liked("p1"));

    let state = reduce(
        state,
        LikeIntent::ToggleRequested {
            post_id: "p1".to_string(),
        },
    );
    let state = reduce(
        state,
        LikeIntent::ToggleConfirmed {
            post_id: "p1".to_string(),
            liked: false,
        },
    );
    assert!(!state.liked("p1"));
}

#[test]
fn failed_toggle_is_a_self_loop() {
    let state = hydrated("p1", true);
    let state = reduce(
        state,
        LikeIntent::ToggleRequested {
            post_id: "p1".to_string(),
        },
    );
    let state = reduce(
        state,
        LikeIntent::ToggleFailed {
            post_id: "p1".to_string(),
        },
    );
    let card = state.card("p1").unwrap();
    assert!(card.liked);
    assert!(card.can_toggle());
}

#[test]
fn toggle_while_request_in_flight_is_ignored() {
    let state = hydrated("p1", false);
    let armed = reduce(
        state,
        LikeIntent::ToggleRequested {
            post_id: "p1".to_string(),
        },
    );
    assert_eq!(
        armed.card("p1").unwrap().in_flight,
        Some(LikeRequest::Toggle)
    );

    // Rapid second press before the first resolves: no change at all.
    let pressed_again = reduce(
        armed.clone(),
        LikeIntent::ToggleRequested {
            post_id: "p1".to_string(),
        },
    );
    assert_eq!(pressed_again, armed);
}

#[test]
fn toggle_while_hydrating_is_ignored() {
    let state = activated("p1");
    let state = reduce(
        state,
        LikeIntent::ToggleRequested {
            post_id: "p1".to_string(),
        },
    );
    assert_eq!(
        state.card("p1").unwrap().in_flight,
        Some(LikeRequest::Hydrate)
    );
}

#[test]
fn confirmation_without_outstanding_toggle_is_ignored() {
    let state = hydrated("p1", false);
    let state = reduce(
        state,
        LikeIntent::ToggleConfirmed {
            post_id: "p1".to_string(),
            liked: true,
        },
    );
    assert!(!state.liked("p1"));
}

#[test]
fn toggle_for_unactivated_card_is_ignored() {
    let state = reduce(
        LikeBoardState::default(),
        LikeIntent::ToggleRequested {
            post_id: "p1".to_string(),
        },
    );
    assert!(state.card("p1").is_none());
    assert!(!state.can_toggle("p1"));
}

// -- reset --------------------------------------------------------------

#[test]
fn reset_drops_every_card() {
    let state = hydrated("p1", true);
    let state = reduce(state, LikeIntent::Reset);
    assert!(state.card("p1").is_none());
    assert!(!state.liked("p1"));
}
