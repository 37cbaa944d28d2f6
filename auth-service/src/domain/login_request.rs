use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequestBody {
    pub email: Option<String>,
    pub password: Option<String>,
}
