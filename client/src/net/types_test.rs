use super::*;

// =============================================================
// ContactPayload
// =============================================================

#[test]
fn contact_payload_serializes_three_fields() {
    let payload = ContactPayload {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "name": "Ada", "email": "ada@example.com", "message": "Hello" })
    );
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_string_detail_is_exposed() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"email invalid"}"#).unwrap();
    assert_eq!(body.detail_text(), Some("email invalid"));
}

#[test]
fn error_body_list_detail_is_not_text() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#).unwrap();
    assert_eq!(body.detail_text(), None);
}

#[test]
fn error_body_blank_or_missing_detail_is_not_text() {
    let blank: ErrorBody = serde_json::from_str(r#"{"detail":"  "}"#).unwrap();
    assert_eq!(blank.detail_text(), None);
    let missing: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(missing.detail_text(), None);
}

// =============================================================
// Profile / Project
// =============================================================

#[test]
fn project_without_ui_fields_gets_defaults() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "name": "E-Commerce Platform",
        "description": "Full-stack e-commerce solution",
        "technologies": ["Angular", "FastAPI"],
        "created_at": "2024-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(project.category, ProjectCategory::Other);
    assert_eq!(project.image, "bi-code-slash");
    assert_eq!(project.link, "#");
    assert_eq!(project.technologies, vec!["Angular", "FastAPI"]);
}

#[test]
fn project_category_parses_known_and_unknown_values() {
    let parse = |raw: &str| serde_json::from_value::<ProjectCategory>(serde_json::json!(raw)).unwrap();
    assert_eq!(parse("fullstack"), ProjectCategory::FullStack);
    assert_eq!(parse("frontend"), ProjectCategory::Frontend);
    assert_eq!(parse("backend"), ProjectCategory::Backend);
    assert_eq!(parse("mobile"), ProjectCategory::Other);
}

#[test]
fn profile_tolerates_extra_backend_fields() {
    let profile: Profile = serde_json::from_value(serde_json::json!({
        "_id": "665f",
        "type": "main",
        "name": "Alex Johnson",
        "title": "Full Stack Developer",
        "email": "alex@example.com",
        "location": "New York, USA",
        "bio": "Bio",
        "experience": "3+ years",
        "skills": ["Rust"],
        "projects": []
    }))
    .unwrap();
    assert_eq!(profile.name, "Alex Johnson");
    assert_eq!(profile.phone, None);
    assert_eq!(profile.skills, vec!["Rust"]);
}

#[test]
fn visitor_count_parses() {
    let count: VisitorCount = serde_json::from_str(r#"{"visitor_count": 42}"#).unwrap();
    assert_eq!(count.visitor_count, 42);
}
