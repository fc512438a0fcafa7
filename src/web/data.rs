//! Request and response bodies of the activity routes.

use serde::{Deserialize, Serialize};

use crate::web::Error;

/// `?email=...` as sent by the sign-up and unregister routes.
/// Read from the raw pairs so a missing email turns into our own error and a repeated
/// `email` keeps the last value instead of failing as a duplicate field.
#[derive(Debug, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl From<Vec<(String, String)>> for EmailQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let email = pairs
            .into_iter()
            .rev()
            .find_map(|(key, value)| (key == "email").then_some(value));

        Self { email }
    }
}

impl EmailQuery {
    /// Presence check only, any present value (even an empty one) is accepted as is.
    pub fn into_email(self) -> Result<String, Error> {
        self.email.ok_or(Error::MissingQueryParam("email"))
    }
}

/// `{"message": "..."}` confirmation body.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl From<String> for MessageResponse {
    fn from(message: String) -> Self {
        Self { message }
    }
}
