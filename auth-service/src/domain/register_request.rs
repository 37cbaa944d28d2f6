use serde::{Deserialize, Serialize};

// Fields are optional so a partially filled form maps to a 400, not an
// extractor rejection.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequestBody {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
