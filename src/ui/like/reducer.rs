use crate::ui::like::intent::LikeIntent;
use crate::ui::like::state::{LikeBoardState, LikeRequest};
use crate::ui::mvi::Reducer;

pub struct LikeReducer;

impl Reducer for LikeReducer {
    type State = LikeBoardState;
    type Intent = LikeIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LikeIntent::Activated { post_id } => {
                let card = state.cards.entry(post_id).or_default();
                card.generation += 1;
                card.hydrated = false;
                card.in_flight = Some(LikeRequest::Hydrate);
                // `liked` keeps its previous value until the server answers.
            }
            LikeIntent::Hydrated {
                post_id,
                generation,
                liked,
            } => {
                if let Some(card) = state.cards.get_mut(&post_id) {
                    // A stale generation means the card was re-activated
                    // while this response was in flight; the newer
                    // activation owns the card now.
                    if card.generation == generation {
                        card.liked = liked;
                        card.hydrated = true;
                        card.in_flight = None;
                    }
                }
            }
            LikeIntent::HydrateFailed {
                post_id,
                generation,
            } => {
                if let Some(card) = state.cards.get_mut(&post_id) {
                    if card.generation == generation {
                        card.in_flight = None;
                    }
                }
            }
            LikeIntent::ToggleRequested { post_id } => {
                if let Some(card) = state.cards.get_mut(&post_id) {
                    if card.in_flight.is_none() {
                        card.in_flight = Some(LikeRequest::Toggle);
                    }
                }
            }
            LikeIntent::ToggleConfirmed { post_id, liked } => {
                if let Some(card) = state.cards.get_mut(&post_id) {
                    if card.in_flight == Some(LikeRequest::Toggle) {
                        card.liked = liked;
                        card.hydrated = true;
                        card.in_flight = None;
                    }
                }
            }
            LikeIntent::ToggleFailed { post_id } => {
                if let Some(card) = state.cards.get_mut(&post_id) {
                    if card.in_flight == Some(LikeRequest::Toggle) {
                        card.in_flight = None;
                    }
                }
            }
            LikeIntent::Reset => {
                state.cards.clear();
            }
        }
        state
    }
}
