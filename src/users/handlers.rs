use axum::{
    extract::State,
    http::{header, StatusCode},
    Json,
};
use tracing::{info, instrument};

use crate::auth::extractor::AuthUser;
use crate::auth::password::hash_password;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::{PublicUser, RegisterUser};
use crate::users::repo::User;
use crate::validation::validate_registration;

/// GET /users: the authenticated caller's own record, public fields only.
#[instrument(skip_all)]
pub async fn current_user(AuthUser(user): AuthUser) -> Json<PublicUser> {
    Json(PublicUser::from(&user))
}

/// POST /users: registration. The password is hashed exactly once here;
/// the email unique constraint surfaces as a 400 conflict.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUser>,
) -> Result<(StatusCode, [(header::HeaderName, &'static str); 1]), ApiError> {
    validate_registration(
        &payload.first_name,
        &payload.last_name,
        &payload.email_address,
        &payload.password,
    )?;

    let hash = hash_password(&payload.password)?;
    let user = User::create(
        &state.db,
        &payload.first_name,
        &payload.last_name,
        &payload.email_address,
        &hash,
    )
    .await?;

    info!(user_id = %user.id, "user registered");
    Ok((StatusCode::CREATED, [(header::LOCATION, "/")]))
}
