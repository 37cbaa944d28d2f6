use serde::{Deserialize, Serialize};

/// Identity attributes returned by a successful token verification.
///
/// Built fresh from the credential store on every verification.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    pub user_id: i64,
    pub username: String,
    pub email: String,
}
