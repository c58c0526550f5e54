use test_utils::builder::TestBuilder;

use crate::server::{error::auth::AuthError, service::oauth::BackendAuthService, state::AppState};
