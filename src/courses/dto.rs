use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::courses::repo::{Course, CourseWithOwner};
use crate::users::dto::PublicUser;

/// Request body for course creation.
///
/// There is intentionally no `userId` field: ownership always comes from
/// the authenticated caller, and any such key in the body is dropped
/// during deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

/// Request body for course update; absent fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

impl UpdateCourse {
    /// Merges the supplied fields over the stored row without persisting,
    /// so the result can be validated before anything is written.
    pub fn apply_to(self, mut course: Course) -> Course {
        if let Some(title) = self.title {
            course.title = title;
        }
        if let Some(description) = self.description {
            course.description = description;
        }
        if let Some(estimated_time) = self.estimated_time {
            course.estimated_time = Some(estimated_time);
        }
        if let Some(materials_needed) = self.materials_needed {
            course.materials_needed = Some(materials_needed);
        }
        course
    }
}

/// Course as returned by the public read endpoints, owner embedded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: Uuid,
    pub user: PublicUser,
}

impl From<CourseWithOwner> for CourseResponse {
    fn from(row: CourseWithOwner) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            estimated_time: row.estimated_time,
            materials_needed: row.materials_needed,
            user_id: row.user_id,
            user: PublicUser {
                id: row.user_id,
                first_name: row.owner_first_name,
                last_name: row.owner_last_name,
                email_address: row.owner_email_address,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn stored_course() -> Course {
        Course {
            id: Uuid::new_v4(),
            title: "Rust 101".into(),
            description: "An intro course".into(),
            estimated_time: Some("12 hours".into()),
            materials_needed: None,
            user_id: Uuid::new_v4(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn create_payload_drops_any_user_id_in_the_body() {
        let payload: CreateCourse = serde_json::from_str(
            r#"{
                "title": "Rust 101",
                "description": "An intro course",
                "userId": "0b9af510-87f9-47a1-b7bc-5e4f28b5c6ff"
            }"#,
        )
        .unwrap();
        assert_eq!(payload.title, "Rust 101");
        // No field exists to carry the supplied userId forward.
    }

    #[test]
    fn create_payload_missing_fields_default_to_empty() {
        let payload: CreateCourse = serde_json::from_str("{}").unwrap();
        assert!(payload.title.is_empty());
        assert!(payload.description.is_empty());
        assert!(payload.estimated_time.is_none());
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let course = stored_course();
        let original_owner = course.user_id;

        let patch = UpdateCourse {
            title: Some("Rust 201".into()),
            ..Default::default()
        };
        let merged = patch.apply_to(course);

        assert_eq!(merged.title, "Rust 201");
        assert_eq!(merged.description, "An intro course");
        assert_eq!(merged.estimated_time.as_deref(), Some("12 hours"));
        assert_eq!(merged.user_id, original_owner);
    }

    #[test]
    fn update_can_blank_a_required_field_for_validation_to_catch() {
        let patch = UpdateCourse {
            description: Some(String::new()),
            ..Default::default()
        };
        let merged = patch.apply_to(stored_course());
        assert!(merged.description.is_empty());
    }

    #[test]
    fn response_embeds_owner_without_password_material() {
        let owner_id = Uuid::new_v4();
        let row = CourseWithOwner {
            id: Uuid::new_v4(),
            title: "Rust 101".into(),
            description: "An intro course".into(),
            estimated_time: None,
            materials_needed: Some("a laptop".into()),
            user_id: owner_id,
            owner_first_name: "Joe".into(),
            owner_last_name: "Smith".into(),
            owner_email_address: "joe@smith.com".into(),
        };

        let json = serde_json::to_value(CourseResponse::from(row)).unwrap();
        assert_eq!(json["materialsNeeded"], "a laptop");
        assert_eq!(json["userId"], owner_id.to_string());
        assert_eq!(json["user"]["id"], owner_id.to_string());
        assert_eq!(json["user"]["firstName"], "Joe");
        assert!(!json.to_string().contains("password"));
    }
}
