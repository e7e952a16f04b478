//! Bridge between the UI loop and the async API client.
//!
//! The UI thread never blocks on the network: it sends a typed command into
//! this worker and hears back through the app event channel. Commands are
//! processed one at a time, in order. The auth token travels inside each
//! command; the worker never consults ambient storage.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc::Receiver;
use tracing::warn;

use crate::api::client::BlogService;
use crate::api::error::ApiError;
use crate::api::types::{Post, PostDraft};
use crate::config::SecureString;
use crate::shutdown::ShutdownHandle;
use crate::ui::events::AppEvent;

/// Requests the UI sends to the worker.
#[derive(Debug)]
pub enum ApiCommand {
    LoadFeed {
        token: Option<SecureString>,
    },
    /// One read per card activation. `generation` is echoed back so the UI
    /// can drop responses that belong to an older activation.
    HydrateLike {
        post_id: String,
        generation: u64,
        token: Option<SecureString>,
    },
    /// `currently_liked` is the flag's value at the moment of the user's
    /// action; it selects between add and remove.
    ToggleLike {
        post_id: String,
        currently_liked: bool,
        token: Option<SecureString>,
    },
    PublishPost {
        draft: PostDraft,
        token: Option<SecureString>,
    },
}

/// Outcomes the worker reports back into the UI event stream.
#[derive(Debug)]
pub enum ApiOutcome {
    FeedLoaded(Result<Vec<Post>, ApiError>),
    LikeHydrated {
        post_id: String,
        generation: u64,
        result: Result<bool, ApiError>,
    },
    /// On success carries the confirmed new value of the flag.
    LikeToggled {
        post_id: String,
        result: Result<bool, ApiError>,
    },
    PostPublished(Result<(), ApiError>),
}

pub async fn run<S>(
    service: S,
    mut commands: Receiver<ApiCommand>,
    events: Sender<AppEvent>,
    shutdown: ShutdownHandle,
) where
    S: BlogService + Send + Sync + 'static,
{
    loop {
        let command = tokio::select! {
            command = commands.recv() => match command {
                Some(command) => command,
                None => break,
            },
            _ = shutdown.wait() => break,
        };

        let outcome = handle(&service, command).await;
        if events.send(AppEvent::Api(outcome)).is_err() {
            break;
        }
    }
}

async fn handle<S: BlogService>(service: &S, command: ApiCommand) -> ApiOutcome {
    match command {
        ApiCommand::LoadFeed { token } => {
            let result = service.list_posts(token.as_ref()).await;
            if let Err(err) = &result {
                warn!(error = %err, "feed load failed");
            }
            ApiOutcome::FeedLoaded(result)
        }
        ApiCommand::HydrateLike {
            post_id,
            generation,
            token,
        } => {
            let result = service
                .get_post(&post_id, token.as_ref())
                .await
                .map(|payload| payload.is_liked);
            if let Err(err) = &result {
                warn!(%post_id, error = %err, "like hydrate failed");
            }
            ApiOutcome::LikeHydrated {
                post_id,
                generation,
                result,
            }
        }
        ApiCommand::ToggleLike {
            post_id,
            currently_liked,
            token,
        } => {
            // Remove when currently liked, add otherwise. The flag flips
            // only once the server confirms; failures leave it alone.
            let result = if currently_liked {
                service
                    .remove_like(&post_id, token.as_ref())
                    .await
                    .map(|()| false)
            } else {
                service
                    .add_like(&post_id, token.as_ref())
                    .await
                    .map(|()| true)
            };
            if let Err(err) = &result {
                warn!(%post_id, error = %err, "like toggle failed");
            }
            ApiOutcome::LikeToggled { post_id, result }
        }
        ApiCommand::PublishPost { draft, token } => {
            let result = service.publish_post(&draft, token.as_ref()).await;
            if let Err(err) = &result {
                warn!(error = %err, "publish failed");
            }
            ApiOutcome::PostPublished(result)
        }
    }
}
