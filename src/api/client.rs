use std::future::Future;
use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::types::{Post, PostDraft, PostList, PostWithLike};
use crate::config::{SecureString, ServerConfig};

/// The one status the backend uses for success, across every endpoint.
/// Anything else, including 200, is a rejection.
pub const SUCCESS_STATUS: StatusCode = StatusCode::CREATED;

/// Read side of the blogging service.
pub trait BlogReadService {
    fn list_posts(
        &self,
        token: Option<&SecureString>,
    ) -> impl Future<Output = Result<Vec<Post>, ApiError>> + Send;

    /// Fetch a post together with whether the viewer has liked it.
    fn get_post(
        &self,
        post_id: &str,
        token: Option<&SecureString>,
    ) -> impl Future<Output = Result<PostWithLike, ApiError>> + Send;
}

/// Mutation side of the like resource.
pub trait LikeService {
    fn add_like(
        &self,
        post_id: &str,
        token: Option<&SecureString>,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn remove_like(
        &self,
        post_id: &str,
        token: Option<&SecureString>,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Full client-side surface of the blogging service.
pub trait BlogService: BlogReadService + LikeService {
    fn publish_post(
        &self,
        draft: &PostDraft,
        token: Option<&SecureString>,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// reqwest-backed client for the blogging REST API.
pub struct BlogClient {
    http: Client,
    base_url: String,
}

impl BlogClient {
    pub fn new(server: &ServerConfig) -> Self {
        let http = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(
                server.connect_timeout_seconds as u64,
            ))
            .timeout(std::time::Duration::from_secs(server.timeout_seconds as u64))
            .build()
            .expect("failed to build http client");

        Self {
            http,
            base_url: server.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Attach the bearer token when one is present. An absent token is passed
/// through: the request simply carries no Authorization header and the
/// server decides.
fn authorize(builder: RequestBuilder, token: Option<&SecureString>) -> RequestBuilder {
    match token {
        Some(token) => builder.bearer_auth(token.expose()),
        None => builder,
    }
}

/// Send the request and demand the backend's single success status.
async fn expect_created(
    endpoint: &'static str,
    builder: RequestBuilder,
) -> Result<reqwest::Response, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|source| ApiError::Transport { endpoint, source })?;

    let status = response.status();
    if status != SUCCESS_STATUS {
        return Err(ApiError::Rejected {
            endpoint,
            status: status.as_u16(),
        });
    }

    debug!(endpoint, %status, "request completed");
    Ok(response)
}

/// Content type for the multipart image part, from the file extension.
/// The backend stores it verbatim and serves it back alongside the image.
fn image_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

impl BlogReadService for BlogClient {
    async fn list_posts(&self, token: Option<&SecureString>) -> Result<Vec<Post>, ApiError> {
        const ENDPOINT: &str = "list_posts";
        let request = authorize(self.http.get(self.url("/api/v1/blogs")), token);
        let response = expect_created(ENDPOINT, request).await?;
        let payload: PostList = response.json().await.map_err(|source| ApiError::Decode {
            endpoint: ENDPOINT,
            source,
        })?;
        Ok(payload.blogs)
    }

    async fn get_post(
        &self,
        post_id: &str,
        token: Option<&SecureString>,
    ) -> Result<PostWithLike, ApiError> {
        const ENDPOINT: &str = "get_post";
        let request = authorize(
            self.http.get(self.url(&format!("/api/v1/blogs/{post_id}"))),
            token,
        );
        let response = expect_created(ENDPOINT, request).await?;
        response.json().await.map_err(|source| ApiError::Decode {
            endpoint: ENDPOINT,
            source,
        })
    }
}

impl LikeService for BlogClient {
    async fn add_like(&self, post_id: &str, token: Option<&SecureString>) -> Result<(), ApiError> {
        const ENDPOINT: &str = "add_like";
        let request = authorize(
            self.http
                .post(self.url(&format!("/api/v1/blogs/{post_id}/like"))),
            token,
        );
        expect_created(ENDPOINT, request).await?;
        Ok(())
    }

    async fn remove_like(
        &self,
        post_id: &str,
        token: Option<&SecureString>,
    ) -> Result<(), ApiError> {
        const ENDPOINT: &str = "remove_like";
        let request = authorize(
            self.http
                .delete(self.url(&format!("/api/v1/blogs/{post_id}/like"))),
            token,
        );
        expect_created(ENDPOINT, request).await?;
        Ok(())
    }
}

impl BlogService for BlogClient {
    async fn publish_post(
        &self,
        draft: &PostDraft,
        token: Option<&SecureString>,
    ) -> Result<(), ApiError> {
        const ENDPOINT: &str = "publish_post";

        let image_path = Path::new(&draft.image_path);
        let bytes = tokio::fs::read(image_path)
            .await
            .map_err(|source| ApiError::ImageRead {
                path: image_path.to_path_buf(),
                source,
            })?;

        let file_name = image_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("image")
            .to_string();
        let image = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(image_content_type(image_path))
            .expect("static mime string is valid");

        // Field names match the form the web client submits.
        let form = Form::new()
            .text("title", draft.title.clone())
            .text("content", draft.content.clone())
            .text("category", draft.category.clone())
            .part("featuredImage", image);

        let request = authorize(self.http.post(self.url("/api/v1/blogs")), token).multipart(form);
        expect_created(ENDPOINT, request).await?;
        Ok(())
    }
}
