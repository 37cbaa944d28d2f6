use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct VerifyTokenRequestBody {
    #[serde(default)]
    pub token: Option<String>,
}

impl VerifyTokenRequestBody {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}
