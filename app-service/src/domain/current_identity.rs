use auth_contract::IdentityClaims;

/// Request extension for pages that work with or without a verified caller.
#[derive(Debug, Clone, Default)]
pub struct CurrentIdentity(pub Option<IdentityClaims>);
