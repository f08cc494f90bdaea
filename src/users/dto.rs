use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::repo::User;

/// Request body for registration.
///
/// Absent fields deserialize to empty strings so the validation layer can
/// report each of them by name instead of the body being rejected outright.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub password: String,
}

/// Public projection of a user, safe to embed in any response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email_address: user.email_address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_empty_strings() {
        let payload: RegisterUser = serde_json::from_str("{}").unwrap();
        assert!(payload.first_name.is_empty());
        assert!(payload.last_name.is_empty());
        assert!(payload.email_address.is_empty());
        assert!(payload.password.is_empty());
    }

    #[test]
    fn camel_case_fields_are_accepted() {
        let payload: RegisterUser = serde_json::from_str(
            r#"{
                "firstName": "Joe",
                "lastName": "Smith",
                "emailAddress": "joe@smith.com",
                "password": "joepassword"
            }"#,
        )
        .unwrap();
        assert_eq!(payload.first_name, "Joe");
        assert_eq!(payload.email_address, "joe@smith.com");
    }

    #[test]
    fn public_user_serializes_without_password_material() {
        let public = PublicUser {
            id: Uuid::new_v4(),
            first_name: "Joe".into(),
            last_name: "Smith".into(),
            email_address: "joe@smith.com".into(),
        };
        let json = serde_json::to_value(&public).unwrap();
        assert_eq!(json["firstName"], "Joe");
        assert_eq!(json["emailAddress"], "joe@smith.com");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }
}
