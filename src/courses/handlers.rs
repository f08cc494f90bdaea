use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::courses::dto::{CourseResponse, CreateCourse, UpdateCourse};
use crate::courses::repo::Course;
use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::validate_course_fields;

fn course_not_found() -> ApiError {
    ApiError::NotFound("Sorry, this course does not exist".to_string())
}

fn not_the_owner() -> ApiError {
    ApiError::Forbidden("Sorry, but you are not the owner of this course.".to_string())
}

/// GET /courses: public listing, owners embedded.
#[instrument(skip_all)]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let rows = Course::list_with_owner(&state.db).await?;
    Ok(Json(rows.into_iter().map(CourseResponse::from).collect()))
}

/// GET /courses/:id: public single-course read.
#[instrument(skip_all)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseResponse>, ApiError> {
    let row = Course::find_with_owner(&state.db, id)
        .await?
        .ok_or_else(course_not_found)?;
    Ok(Json(CourseResponse::from(row)))
}

/// POST /courses: ownership is forced to the authenticated caller.
#[instrument(skip_all)]
pub async fn create_course(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateCourse>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1]), ApiError> {
    validate_course_fields(&payload.title, &payload.description)?;

    let id = Course::create(
        &state.db,
        user.id,
        &payload.title,
        &payload.description,
        payload.estimated_time.as_deref(),
        payload.materials_needed.as_deref(),
    )
    .await?;

    info!(course_id = %id, owner = %user.id, "course created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/courses/{id}"))],
    ))
}

/// PUT /courses/:id: owner only. The ownership check runs before any
/// mutation, and the merged row is validated before the single UPDATE,
/// so an invalid body never leaves a half-applied state behind.
#[instrument(skip_all)]
pub async fn update_course(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCourse>,
) -> Result<StatusCode, ApiError> {
    let course = Course::find_by_id(&state.db, id)
        .await?
        .ok_or_else(course_not_found)?;

    if course.user_id != user.id {
        return Err(not_the_owner());
    }

    let merged = payload.apply_to(course);
    validate_course_fields(&merged.title, &merged.description)?;

    Course::update(
        &state.db,
        id,
        &merged.title,
        &merged.description,
        merged.estimated_time.as_deref(),
        merged.materials_needed.as_deref(),
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /courses/:id: owner only, same resolve-then-gate sequence.
#[instrument(skip_all)]
pub async fn delete_course(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let course = Course::find_by_id(&state.db, id)
        .await?
        .ok_or_else(course_not_found)?;

    if course.user_id != user.id {
        return Err(not_the_owner());
    }

    Course::delete(&state.db, id).await?;

    info!(course_id = %id, owner = %user.id, "course deleted");
    Ok(StatusCode::NO_CONTENT)
}
