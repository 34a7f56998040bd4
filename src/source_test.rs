use super::*;

#[test]
fn missing_attribute_is_absent() {
    assert!(matches!(InlineParticipants::from_attr(None), InlineParticipants::Absent));
}

#[test]
fn empty_attribute_is_absent() {
    assert!(matches!(InlineParticipants::from_attr(Some("")), InlineParticipants::Absent));
}

#[test]
fn array_payload_parses_in_order() {
    let raw = r#"[{"name":"Alice Lee"},{"name":"Bob Smith","avatarUrl":"x.png"}]"#;
    let InlineParticipants::Parsed(list) = InlineParticipants::from_attr(Some(raw)) else {
        panic!("expected parsed list");
    };
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name.as_deref(), Some("Alice Lee"));
    assert_eq!(list[1].avatar_url.as_deref(), Some("x.png"));
}

#[test]
fn empty_array_is_parsed_not_absent() {
    let outcome = InlineParticipants::from_attr(Some("[]"));
    assert_eq!(outcome.into_list(), Some(Vec::new()));
}

#[test]
fn malformed_json_is_unreadable() {
    let outcome = InlineParticipants::from_attr(Some("{not valid"));
    assert!(matches!(
        outcome,
        InlineParticipants::Unreadable(InlineDataError::Malformed(_))
    ));
}

#[test]
fn object_and_scalar_payloads_are_not_sequences() {
    for raw in [r#"{"name":"Alice"}"#, "42", "\"Alice\"", "null"] {
        let outcome = InlineParticipants::from_attr(Some(raw));
        assert!(
            matches!(outcome, InlineParticipants::Unreadable(InlineDataError::NotASequence)),
            "payload {raw} should not be a sequence"
        );
    }
}

#[test]
fn unreadable_and_absent_both_yield_no_list() {
    assert_eq!(InlineParticipants::from_attr(None).into_list(), None);
    assert_eq!(InlineParticipants::from_attr(Some("{oops")).into_list(), None);
}

#[test]
fn error_messages_name_the_problem() {
    let InlineParticipants::Unreadable(err) = InlineParticipants::from_attr(Some("{}")) else {
        panic!("expected unreadable");
    };
    assert_eq!(err.to_string(), "inline participant data is not a JSON array");
}
