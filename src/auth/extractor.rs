use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::auth::password::verify_password;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::repo::User;

/// Resolves HTTP Basic credentials to the matching user row.
///
/// Every request is authenticated independently; no session state exists.
/// All credential failures reject with the same 401 so a caller cannot
/// probe which half of the pair was wrong. There is no lockout or rate
/// limiting here.
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::AuthenticationRequired)?;

        let (email, plain) =
            decode_basic(header_value).ok_or(ApiError::AuthenticationRequired)?;

        let user = User::find_by_email(&state.db, &email)
            .await?
            .ok_or(ApiError::AuthenticationRequired)?;

        if !verify_password(&plain, &user.password_hash)? {
            return Err(ApiError::AuthenticationRequired);
        }

        Ok(AuthUser(user))
    }
}

/// Splits an `Authorization: Basic <base64(email:password)>` value into
/// its email and password parts. The password may itself contain colons;
/// only the first one separates the pair.
fn decode_basic(value: &str) -> Option<(String, String)> {
    let encoded = value
        .strip_prefix("Basic ")
        .or_else(|| value.strip_prefix("basic "))?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (email, password) = decoded.split_once(':')?;
    Some((email.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(creds: &str) -> String {
        format!("Basic {}", BASE64.encode(creds))
    }

    #[test]
    fn decodes_wellformed_header() {
        let (email, password) = decode_basic(&basic("joe@smith.com:joepassword")).unwrap();
        assert_eq!(email, "joe@smith.com");
        assert_eq!(password, "joepassword");
    }

    #[test]
    fn scheme_prefix_is_case_tolerant() {
        let value = format!("basic {}", BASE64.encode("joe@smith.com:pw"));
        assert!(decode_basic(&value).is_some());
    }

    #[test]
    fn password_keeps_embedded_colons() {
        let (email, password) = decode_basic(&basic("joe@smith.com:a:b:c")).unwrap();
        assert_eq!(email, "joe@smith.com");
        assert_eq!(password, "a:b:c");
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(decode_basic("Bearer sometoken").is_none());
        assert!(decode_basic("joe@smith.com:pw").is_none());
    }

    #[test]
    fn rejects_bad_base64_and_missing_separator() {
        assert!(decode_basic("Basic %%%not-base64%%%").is_none());
        let no_colon = format!("Basic {}", BASE64.encode("joe-at-smith.com"));
        assert!(decode_basic(&no_colon).is_none());
    }

    #[test]
    fn rejects_non_utf8_payload() {
        let value = format!("Basic {}", BASE64.encode([0xff, 0xfe, b':', b'x']));
        assert!(decode_basic(&value).is_none());
    }
}
