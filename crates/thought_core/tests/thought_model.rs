use thought_core::{validate_submission, Thought, ThoughtValidationError};

fn sample_thought() -> Thought {
    Thought {
        id: 7,
        author: "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG".to_string(),
        content: "This is a test thought".to_string(),
        category: "test".to_string(),
        created_at: 1_700_000_000_000,
    }
}

#[test]
fn validation_checks_content_before_category() {
    assert_eq!(
        validate_submission("", ""),
        Err(ThoughtValidationError::EmptyContent)
    );
    assert_eq!(
        validate_submission("", "cat"),
        Err(ThoughtValidationError::EmptyContent)
    );
    assert_eq!(
        validate_submission("text", ""),
        Err(ThoughtValidationError::EmptyCategory)
    );
    assert_eq!(validate_submission("text", "cat"), Ok(()));
}

#[test]
fn validation_does_not_trim_whitespace() {
    assert_eq!(validate_submission(" ", "\t"), Ok(()));
}

#[test]
fn validation_errors_have_stable_messages() {
    assert_eq!(ThoughtValidationError::EmptyContent.to_string(), "invalid content");
    assert_eq!(ThoughtValidationError::EmptyCategory.to_string(), "invalid category");
}

#[test]
fn thought_validate_reflects_field_state() {
    let mut thought = sample_thought();
    assert!(thought.validate().is_ok());

    thought.category.clear();
    assert_eq!(
        thought.validate(),
        Err(ThoughtValidationError::EmptyCategory)
    );
}

#[test]
fn thought_serialization_uses_expected_wire_fields() {
    let thought = sample_thought();

    let json = serde_json::to_value(&thought).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["author"], "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG");
    assert_eq!(json["content"], "This is a test thought");
    assert_eq!(json["category"], "test");
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);

    let decoded: Thought = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, thought);
}
