use super::*;

fn rule(name: &str, required: bool) -> FieldRule {
    FieldRule::for_field(name, required, 10)
}

fn field(name: &str, value: &str) -> (String, Result<(), ValidationError>) {
    (name.to_owned(), validate(rule(name, true), value))
}

#[test]
fn required_field_rejects_blank_input() {
    assert_eq!(validate(rule("name", true), "   "), Err(ValidationError::Required));
    assert_eq!(validate(rule("name", true), "Priya"), Ok(()));
    assert_eq!(validate(rule("name", false), ""), Ok(()));
}

#[test]
fn email_shape_is_checked_only_when_present() {
    assert_eq!(validate(rule("email", false), ""), Ok(()));
    assert_eq!(validate(rule("email", true), "priya@example.in"), Ok(()));
    assert_eq!(validate(rule("email", true), "priya@example"), Err(ValidationError::InvalidEmail));
}

#[test]
fn message_needs_minimum_length_after_trim() {
    assert_eq!(
        validate(rule("message", true), "  too short "),
        Err(ValidationError::TooShort { min: 10 })
    );
    assert_eq!(validate(rule("message", true), "Loved the Siruvani falls trip"), Ok(()));
}

#[test]
fn messages_match_inline_copy() {
    assert_eq!(ValidationError::Required.to_string(), "This field is required");
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email");
    assert_eq!(
        ValidationError::TooShort { min: 10 }.to_string(),
        "Message must be at least 10 characters"
    );
}

#[test]
fn email_pattern_edge_cases() {
    assert!(is_email("a@b.co"));
    assert!(is_email("first.last@mail.example.org"));
    assert!(!is_email("@b.co"));
    assert!(!is_email("a@.co"));
    assert!(!is_email("a@b."));
    assert!(!is_email("a@b@c.co"));
    assert!(!is_email("a b@c.co"));
    assert!(!is_email("plainaddress"));
}

#[test]
fn empty_required_field_blocks_submit_and_points_at_it() {
    let mut form = FormState::default();
    let results = vec![
        field("name", "Priya"),
        field("email", ""),
        field("message", "Hello from Coimbatore!"),
    ];
    assert_eq!(form.submit(&results), SubmitDecision::Rejected { first_invalid: 1 });
    assert_eq!(form.phase(), SubmitPhase::Idle);
    assert!(form.has_error("email"));
    assert!(!form.has_error("name"));
}

#[test]
fn valid_submit_sends_then_succeeds_once() {
    let mut form = FormState::default();
    let results = vec![
        field("name", "Priya"),
        field("email", "priya@example.in"),
        field("message", "Hello from Coimbatore!"),
    ];
    assert_eq!(form.submit(&results), SubmitDecision::Accepted);
    assert_eq!(form.phase(), SubmitPhase::Sending);
    assert_eq!(form.submit(&results), SubmitDecision::Ignored);

    assert!(form.finish());
    assert_eq!(form.phase(), SubmitPhase::Succeeded);
    assert!(!form.finish());
    assert_eq!(form.submit(&results), SubmitDecision::Ignored, "fields panel never comes back");
}

#[test]
fn record_tracks_error_for_revalidation_on_input() {
    let mut form = FormState::default();
    form.record("email", &Err(ValidationError::InvalidEmail));
    assert!(form.has_error("email"));
    form.record("email", &Ok(()));
    assert!(!form.has_error("email"));
}

#[test]
fn success_panel_is_dismissed_once_and_fields_stay_hidden() {
    let mut form = FormState::default();
    assert!(!form.dismiss(), "nothing to dismiss before a send");

    let results = vec![
        field("name", "Priya"),
        field("email", "priya@example.in"),
        field("message", "Hello from Coimbatore!"),
    ];
    assert_eq!(form.submit(&results), SubmitDecision::Accepted);
    assert!(!form.dismiss(), "still sending");
    assert!(form.finish());

    assert!(form.dismiss());
    assert_eq!(form.phase(), SubmitPhase::Dismissed);
    assert!(!form.dismiss());
    assert!(!form.finish());
    assert_eq!(form.submit(&results), SubmitDecision::Ignored);
}

#[test]
fn minimum_length_counts_utf16_units() {
    let rule = rule("message", true);
    assert_eq!(text_length("😀"), 2);
    assert_eq!(text_length("கோவை"), 4);

    // Five astral emoji are ten code units, which meets the minimum of ten.
    assert_eq!(validate(rule, "😀😀😀😀😀"), Ok(()));
    assert_eq!(validate(rule, "😀😀😀😀"), Err(ValidationError::TooShort { min: 10 }));
}
