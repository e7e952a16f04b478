use std::collections::HashMap;

use crate::ui::mvi::UiState;

/// The request a card is currently waiting on, if any. At most one per
/// card: while it is set, further toggles on that card are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeRequest {
    Hydrate,
    Toggle,
}

/// Synchronization state of one card's like flag.
///
/// `liked` is the last server-confirmed value. It starts false and changes
/// only when the server acknowledges a hydrate or a toggle; a failed
/// request leaves it where it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeCard {
    pub liked: bool,
    /// True once a hydrate or toggle for the current activation has been
    /// confirmed by the server.
    pub hydrated: bool,
    pub in_flight: Option<LikeRequest>,
    /// Activation counter. A hydrate response stamped with an older value
    /// arrived after the card was re-activated and is dropped.
    pub generation: u64,
}

impl LikeCard {
    pub fn can_toggle(&self) -> bool {
        self.in_flight.is_none()
    }
}

/// Like state for every card on the board, keyed by post id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeBoardState {
    pub(crate) cards: HashMap<String, LikeCard>,
}

impl UiState for LikeBoardState {}

impl LikeBoardState {
    pub fn card(&self, post_id: &str) -> Option<&LikeCard> {
        self.cards.get(post_id)
    }

    /// The displayed flag for a card; false for a card that was never
    /// activated or not yet hydrated.
    pub fn liked(&self, post_id: &str) -> bool {
        self.cards.get(post_id).map(|card| card.liked).unwrap_or(false)
    }

    pub fn generation(&self, post_id: &str) -> u64 {
        self.cards
            .get(post_id)
            .map(|card| card.generation)
            .unwrap_or(0)
    }

    pub fn can_toggle(&self, post_id: &str) -> bool {
        self.cards
            .get(post_id)
            .map(|card| card.can_toggle())
            .unwrap_or(false)
    }
}
