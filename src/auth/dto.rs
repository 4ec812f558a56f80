use serde::{Deserialize, Serialize};

use crate::users::dto::PublicUser;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after register or login: the redacted user plus the
/// bearer token.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: PublicUser,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use uuid::Uuid;

    #[test]
    fn auth_response_wire_shape() {
        let response = AuthResponse {
            user: PublicUser {
                id: Uuid::new_v4(),
                name: "Ann".into(),
                email: "ann@x.com".into(),
                created_at: datetime!(2024-01-01 00:00:00 UTC),
                updated_at: datetime!(2024-01-01 00:00:00 UTC),
            },
            token: "header.payload.signature".into(),
        };
        let value = serde_json::to_value(&response).unwrap();
        let user = value["user"].as_object().unwrap();
        for key in ["id", "name", "email", "createdAt", "updatedAt"] {
            assert!(user.contains_key(key), "missing {key}");
        }
        assert!(!user.contains_key("password"));
        assert!(!user.contains_key("passwordHash"));
        assert!(value["token"].is_string());
    }
}
