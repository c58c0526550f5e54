use crate::server::error::auth::AuthError;

/// Longest identity accepted from an OAuth `state` parameter.
const MAX_IDENTITY_LENGTH: usize = 64;

/// Validates the `state` returned on the OAuth callback as a Discord identity.
///
/// The state is the identity the link was issued for, round-tripped through the
/// authorization provider. It arrives as untrusted query input, so it must be non-empty and
/// limited to ASCII letters, digits, `-` and `_` before it can be used as a session key.
/// Discord user IDs (decimal snowflakes) always pass.
///
/// # Arguments
/// - `state` - Raw `state` query value, if any
///
/// # Returns
/// - `Ok(&str)` - The state, unchanged
/// - `Err(AuthError::MissingState)` - State absent or empty
/// - `Err(AuthError::InvalidState)` - State too long or contains other characters
pub fn parse_identity(state: Option<&str>) -> Result<&str, AuthError> {
    let state = match state {
        Some(state) if !state.is_empty() => state,
        _ => return Err(AuthError::MissingState),
    };

    if state.len() > MAX_IDENTITY_LENGTH {
        return Err(AuthError::InvalidState(format!(
            "longer than {} characters",
            MAX_IDENTITY_LENGTH
        )));
    }

    if !state
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AuthError::InvalidState(
            "contains characters not allowed in an identity".to_string(),
        ));
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_discord_snowflake() {
        assert_eq!(
            parse_identity(Some("175928847299117063")).unwrap(),
            "175928847299117063"
        );
    }

    #[test]
    fn accepts_alphanumeric_identity() {
        assert_eq!(parse_identity(Some("discordUser123")).unwrap(), "discordUser123");
    }

    #[test]
    fn rejects_missing_and_empty() {
        assert!(matches!(parse_identity(None), Err(AuthError::MissingState)));
        assert!(matches!(parse_identity(Some("")), Err(AuthError::MissingState)));
    }

    #[test]
    fn rejects_unexpected_characters() {
        for state in ["123 456", "../etc", "id;drop", "ünicode", " "] {
            assert!(
                matches!(parse_identity(Some(state)), Err(AuthError::InvalidState(_))),
                "{state:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_overlong_identity() {
        let state = "1".repeat(MAX_IDENTITY_LENGTH + 1);

        assert!(matches!(
            parse_identity(Some(&state)),
            Err(AuthError::InvalidState(_))
        ));
    }
}
