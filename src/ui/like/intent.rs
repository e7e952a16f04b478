use crate::ui::mvi::Intent;

/// Everything that can happen to a card's like flag.
#[derive(Debug, Clone)]
pub enum LikeIntent {
    /// Card became visible. Starts a fresh hydrate cycle and bumps the
    /// activation generation.
    Activated { post_id: String },
    /// Hydrate response arrived. Applied only if `generation` still
    /// matches the card's current activation.
    Hydrated {
        post_id: String,
        generation: u64,
        liked: bool,
    },
    /// Hydrate failed; the flag keeps its prior value and no retry is
    /// attempted.
    HydrateFailed { post_id: String, generation: u64 },
    /// Viewer pressed the like control. Ignored while a request is in
    /// flight, which serializes mutations per card.
    ToggleRequested { post_id: String },
    /// Server confirmed the mutation; `liked` is the new value.
    ToggleConfirmed { post_id: String, liked: bool },
    /// Server rejected the mutation or the transport failed. Self-loop.
    ToggleFailed { post_id: String },
    /// Board reset (feed reload); drops every card.
    Reset,
}

impl Intent for LikeIntent {}
