use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo::User;

/// The redacted view of a user. This is the only user shape that crosses
/// the API boundary; `password_hash` is absent by construction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Redact a collection, preserving order.
pub fn redact_all(users: Vec<User>) -> Vec<PublicUser> {
    users.into_iter().map(PublicUser::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn user(name: &str, email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".into(),
            created_at: datetime!(2024-01-01 00:00:00 UTC),
            updated_at: datetime!(2024-01-02 00:00:00 UTC),
        }
    }

    #[test]
    fn redacted_user_has_no_password_fields() {
        let public = PublicUser::from(user("Ann", "ann@x.com"));
        let value = serde_json::to_value(&public).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("password"));
        assert!(!obj.contains_key("passwordHash"));
        assert!(!obj.contains_key("password_hash"));
        assert_eq!(obj["name"], "Ann");
        assert_eq!(obj["email"], "ann@x.com");
        assert!(obj.contains_key("createdAt"));
        assert!(obj.contains_key("updatedAt"));
    }

    #[test]
    fn model_serialization_skips_password_hash() {
        // Second fence: even serializing the raw model must not leak the hash.
        let value = serde_json::to_value(user("Bob", "bob@x.com")).unwrap();
        assert!(!value.as_object().unwrap().contains_key("password_hash"));
    }

    #[test]
    fn redact_all_preserves_order() {
        let users = vec![user("A", "a@x.com"), user("B", "b@x.com"), user("C", "c@x.com")];
        let ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();
        let redacted = redact_all(users);
        assert_eq!(redacted.len(), 3);
        assert_eq!(redacted.iter().map(|u| u.id).collect::<Vec<_>>(), ids);
    }
}
