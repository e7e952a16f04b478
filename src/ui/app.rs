use std::time::Duration;

use tokio::sync::mpsc;
use tracing::warn;

use crate::api::worker::{ApiCommand, ApiOutcome};
use crate::api::{ApiError, Post};
use crate::config::{ConfigStore, SecureString, SessionStore};
use crate::ui::comments::{CommentFormState, CommentIntent, CommentReducer};
use crate::ui::compose::{ComposeIntent, ComposeReducer, ComposeState};
use crate::ui::feed::{FeedIntent, FeedReducer, FeedState};
use crate::ui::like::{LikeBoardState, LikeIntent, LikeReducer};
use crate::ui::mvi::Reducer;
use crate::ui::notify::Notifications;

/// Which screen owns the body region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Feed,
    Read { post_id: String },
    Compose,
}

pub type ApiCommandSender = mpsc::Sender<ApiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    feed: FeedState,
    likes: LikeBoardState,
    compose: ComposeState,
    comment_form: CommentFormState,
    notifications: Notifications,
    config: ConfigStore,
    session: SessionStore,
    api: Option<ApiCommandSender>,
    /// Snapshot for the header indicator; refreshed on tick so a `login`
    /// in another terminal shows up without restarting.
    auth_present: bool,
}

impl App {
    pub fn new(config: ConfigStore, session: SessionStore) -> Self {
        let toast_ttl = Duration::from_millis(config.get().ui.toast_ms);
        let auth_present = session.token().is_some();
        Self {
            should_quit: false,
            screen: Screen::Feed,
            feed: FeedState::default(),
            likes: LikeBoardState::default(),
            compose: ComposeState::default(),
            comment_form: CommentFormState::default(),
            notifications: Notifications::new(toast_ttl),
            config,
            session,
            api: None,
            auth_present,
        }
    }

    pub fn set_api_sender(&mut self, sender: ApiCommandSender) {
        self.api = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn likes(&self) -> &LikeBoardState {
        &self.likes
    }

    pub fn compose(&self) -> &ComposeState {
        &self.compose
    }

    pub fn comment_form(&self) -> &CommentFormState {
        &self.comment_form
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn server_label(&self) -> String {
        self.config.get().server.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_present
    }

    pub fn on_tick(&mut self) {
        self.notifications.prune();
        self.auth_present = self.session.token().is_some();
    }

    /// Token read at dispatch time, passed along with the command.
    fn current_token(&self) -> Option<SecureString> {
        self.session.token()
    }

    // ========================================================================
    // Feed
    // ========================================================================

    pub fn load_feed(&mut self) {
        if self.feed.is_loading() {
            return;
        }
        dispatch_mvi!(self, feed, FeedReducer, FeedIntent::LoadStarted);
        dispatch_mvi!(self, likes, LikeReducer, LikeIntent::Reset);
        let token = self.current_token();
        self.send_api(ApiCommand::LoadFeed { token });
    }

    pub fn move_selection(&mut self, direction: i32) {
        if direction.is_negative() {
            dispatch_mvi!(self, feed, FeedReducer, FeedIntent::MoveUp);
        } else {
            dispatch_mvi!(self, feed, FeedReducer, FeedIntent::MoveDown);
        }
    }

    fn on_feed_loaded(&mut self, result: Result<Vec<Post>, ApiError>) {
        match result {
            Ok(posts) => {
                let ids: Vec<String> = posts.iter().map(|post| post.id.clone()).collect();
                dispatch_mvi!(self, feed, FeedReducer, FeedIntent::Loaded { posts });
                // One read per card activation: each card hydrates its own
                // like flag.
                for post_id in ids {
                    dispatch_mvi!(
                        self,
                        likes,
                        LikeReducer,
                        LikeIntent::Activated {
                            post_id: post_id.clone(),
                        }
                    );
                    let generation = self.likes.generation(&post_id);
                    let token = self.current_token();
                    self.send_api(ApiCommand::HydrateLike {
                        post_id,
                        generation,
                        token,
                    });
                }
            }
            Err(_) => {
                dispatch_mvi!(self, feed, FeedReducer, FeedIntent::LoadFailed);
                self.notifications.error("Failed to load the feed");
            }
        }
    }

    // ========================================================================
    // Likes
    // ========================================================================

    /// Toggle the like on the selected card. A card with a request already
    /// in flight ignores the press: one mutation at a time per card.
    pub fn toggle_selected_like(&mut self) {
        let Some(post) = self.feed.selected_post() else {
            return;
        };
        let post_id = post.id.clone();
        if !self.likes.can_toggle(&post_id) {
            return;
        }

        // The flag's value at the moment of the action decides add vs remove.
        let currently_liked = self.likes.liked(&post_id);
        dispatch_mvi!(
            self,
            likes,
            LikeReducer,
            LikeIntent::ToggleRequested {
                post_id: post_id.clone(),
            }
        );
        let token = self.current_token();
        self.send_api(ApiCommand::ToggleLike {
            post_id,
            currently_liked,
            token,
        });
    }

    fn on_like_hydrated(
        &mut self,
        post_id: String,
        generation: u64,
        result: Result<bool, ApiError>,
    ) {
        match result {
            Ok(liked) => {
                dispatch_mvi!(
                    self,
                    likes,
                    LikeReducer,
                    LikeIntent::Hydrated {
                        post_id,
                        generation,
                        liked,
                    }
                );
            }
            Err(_) => {
                dispatch_mvi!(
                    self,
                    likes,
                    LikeReducer,
                    LikeIntent::HydrateFailed {
                        post_id,
                        generation,
                    }
                );
                self.notifications.error("Failed to fetch like status");
            }
        }
    }

    fn on_like_toggled(&mut self, post_id: String, result: Result<bool, ApiError>) {
        match result {
            Ok(liked) => {
                dispatch_mvi!(
                    self,
                    likes,
                    LikeReducer,
                    LikeIntent::ToggleConfirmed { post_id, liked }
                );
                if liked {
                    self.notifications.success("Like added");
                } else {
                    self.notifications.success("Like removed");
                }
            }
            Err(_) => {
                dispatch_mvi!(self, likes, LikeReducer, LikeIntent::ToggleFailed { post_id });
                self.notifications.error("Could not update like");
            }
        }
    }

    // ========================================================================
    // Read screen and comments
    // ========================================================================

    pub fn open_selected(&mut self) {
        let Some(post) = self.feed.selected_post() else {
            return;
        };
        let post_id = post.id.clone();
        dispatch_mvi!(self, comment_form, CommentReducer, CommentIntent::Cleared);
        self.screen = Screen::Read { post_id };
    }

    pub fn back_to_feed(&mut self) {
        dispatch_mvi!(self, comment_form, CommentReducer, CommentIntent::Cleared);
        self.screen = Screen::Feed;
    }

    pub fn comment_input(&mut self, ch: char) {
        dispatch_mvi!(self, comment_form, CommentReducer, CommentIntent::Input(ch));
    }

    pub fn comment_backspace(&mut self) {
        dispatch_mvi!(self, comment_form, CommentReducer, CommentIntent::Backspace);
    }

    pub fn submit_comment(&mut self) {
        if !self.comment_form.can_submit() {
            return;
        }
        dispatch_mvi!(self, comment_form, CommentReducer, CommentIntent::Submitted);
    }

    // ========================================================================
    // Compose
    // ========================================================================

    /// Open the compose screen. Without a stored token this routes to the
    /// login-required surface instead of the form.
    pub fn open_compose(&mut self) {
        let has_token = self.session.token().is_some();
        self.auth_present = has_token;
        dispatch_mvi!(self, compose, ComposeReducer, ComposeIntent::Opened { has_token });
        if !has_token {
            self.notifications
                .error("Log in first: run `inkpost login --token <TOKEN>`");
        }
        self.screen = Screen::Compose;
    }

    pub fn close_compose(&mut self) {
        dispatch_mvi!(self, compose, ComposeReducer, ComposeIntent::Closed);
        self.screen = Screen::Feed;
    }

    pub fn compose_dispatch(&mut self, intent: ComposeIntent) {
        dispatch_mvi!(self, compose, ComposeReducer, intent);
    }

    pub fn submit_compose(&mut self) {
        if self.compose.is_submitting() {
            return;
        }
        if !self.compose.is_complete() {
            self.notifications.error("All fields are required");
            return;
        }
        dispatch_mvi!(self, compose, ComposeReducer, ComposeIntent::SubmitRequested);
        if let Some(draft) = self.compose.to_draft() {
            let token = self.current_token();
            self.send_api(ApiCommand::PublishPost { draft, token });
        }
    }

    fn on_post_published(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                dispatch_mvi!(self, compose, ComposeReducer, ComposeIntent::SubmitSucceeded);
                self.screen = Screen::Feed;
                self.notifications.success("Blog created");
                self.load_feed();
            }
            Err(_) => {
                dispatch_mvi!(self, compose, ComposeReducer, ComposeIntent::SubmitFailed);
                self.notifications.error("Could not create the blog");
            }
        }
    }

    // ========================================================================
    // API plumbing
    // ========================================================================

    pub fn on_api(&mut self, outcome: ApiOutcome) {
        match outcome {
            ApiOutcome::FeedLoaded(result) => self.on_feed_loaded(result),
            ApiOutcome::LikeHydrated {
                post_id,
                generation,
                result,
            } => self.on_like_hydrated(post_id, generation, result),
            ApiOutcome::LikeToggled { post_id, result } => self.on_like_toggled(post_id, result),
            ApiOutcome::PostPublished(result) => self.on_post_published(result),
        }
    }

    fn send_api(&mut self, command: ApiCommand) {
        let Some(sender) = &self.api else {
            return;
        };
        if let Err(err) = sender.try_send(command) {
            warn!(error = %err, "api command could not be queued");
            self.notifications.error("Request could not be queued");
        }
    }
}
