use serde_json::Value;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    context::TestContext,
    fixture::backend::{token_error, TokenFixture},
    AUTHORIZE_PATH, TOKEN_PATH, USER_PATH,
};

/// Builder for creating test contexts backed by a mock backend.
///
/// Each `with_*` method registers one endpoint behaviour. Endpoints that are never configured
/// answer with wiremock's default 404, which the application treats like any other backend
/// failure.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture::backend::TokenFixture};
///
/// let test = TestBuilder::new()
///     .with_authorize_redirect("https://discord.com/oauth2/authorize?client_id=1")
///     .with_token_exchange(TokenFixture::default())
///     .build()
///     .await;
/// ```
pub struct TestBuilder {
    /// Mocks to register on the server during `build()`, in insertion order.
    mocks: Vec<Mock>,
}

impl TestBuilder {
    /// Creates a new test builder with no endpoints configured.
    pub fn new() -> Self {
        Self { mocks: Vec::new() }
    }

    /// Authorize endpoint redirects to `location`, as the backend does when it hands the
    /// user off to Discord.
    pub fn with_authorize_redirect(mut self, location: &str) -> Self {
        self.mocks.push(
            Mock::given(method("GET"))
                .and(path(AUTHORIZE_PATH))
                .respond_with(ResponseTemplate::new(302).insert_header("Location", location)),
        );
        self
    }

    /// Authorize endpoint answers with a bare status code and no `Location` header.
    pub fn with_authorize_status(mut self, status: u16) -> Self {
        self.mocks.push(
            Mock::given(method("GET"))
                .and(path(AUTHORIZE_PATH))
                .respond_with(ResponseTemplate::new(status)),
        );
        self
    }

    /// Token endpoint accepts any code and returns the fixture's session.
    pub fn with_token_exchange(self, tokens: TokenFixture) -> Self {
        self.with_token_body(tokens.to_json())
    }

    /// Token endpoint returns an arbitrary 200 JSON body.
    ///
    /// Used for responses that parse as OAuth2 but lack fields the application requires.
    pub fn with_token_body(mut self, body: Value) -> Self {
        self.mocks.push(
            Mock::given(method("POST"))
                .and(path(TOKEN_PATH))
                .respond_with(ResponseTemplate::new(200).set_body_json(body)),
        );
        self
    }

    /// Token endpoint honours the first exchange and rejects every later one with
    /// `invalid_grant`, the way an authorization server treats a replayed code.
    pub fn with_single_use_code(mut self, tokens: TokenFixture) -> Self {
        self.mocks.push(
            Mock::given(method("POST"))
                .and(path(TOKEN_PATH))
                .respond_with(ResponseTemplate::new(200).set_body_json(tokens.to_json()))
                .up_to_n_times(1)
                .with_priority(1),
        );
        self.with_token_error(400, "invalid_grant", "Authorization code already used")
    }

    /// Token endpoint rejects the exchange with an OAuth2 error body.
    pub fn with_token_error(mut self, status: u16, error: &str, description: &str) -> Self {
        self.mocks.push(
            Mock::given(method("POST"))
                .and(path(TOKEN_PATH))
                .respond_with(
                    ResponseTemplate::new(status).set_body_json(token_error(error, description)),
                ),
        );
        self
    }

    /// Current-user endpoint returns `body` when called with `access_token` as bearer.
    pub fn with_user(mut self, access_token: &str, body: Value) -> Self {
        self.mocks.push(
            Mock::given(method("GET"))
                .and(path(USER_PATH))
                .and(header("authorization", format!("Bearer {}", access_token).as_str()))
                .respond_with(ResponseTemplate::new(200).set_body_json(body)),
        );
        self
    }

    /// Starts the mock backend and registers every configured endpoint.
    pub async fn build(self) -> TestContext {
        let backend = MockServer::start().await;

        for mock in self.mocks {
            backend.register(mock).await;
        }

        TestContext::new(backend)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
