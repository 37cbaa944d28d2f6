use auth_contract::{ExtractedToken, IdentityClaims};

/// Request extension set by the session guard once a token checks out.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub claims: IdentityClaims,
    pub token: ExtractedToken,
}

/// Request extension for pages that work with or without a session.
#[derive(Debug, Clone, Default)]
pub struct CurrentSession(pub Option<AuthenticatedSession>);
