use wiremock::MockServer;

/// Test context holding a running mock backend.
///
/// The server shuts down when the context is dropped, so keep the context alive for the
/// whole test.
pub struct TestContext {
    /// Mock backend configured by `TestBuilder`.
    pub backend: MockServer,
}

impl TestContext {
    pub fn new(backend: MockServer) -> Self {
        Self { backend }
    }

    /// Base URL of the mock backend, without a trailing slash.
    pub fn backend_url(&self) -> String {
        self.backend.uri()
    }

    /// Counts requests the backend received on `path`.
    ///
    /// # Returns
    /// - Number of matching requests, `0` when request recording is disabled
    pub async fn requests_to(&self, path: &str) -> usize {
        self.backend
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == path)
            .count()
    }
}
