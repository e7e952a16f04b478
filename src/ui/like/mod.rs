mod intent;
mod reducer;
mod state;

pub use intent::LikeIntent;
pub use reducer::LikeReducer;
pub use state::{LikeBoardState, LikeCard, LikeRequest};
