use super::*;

use std::rc::Rc;

use crate::state::form::{FieldRule, FormState, SubmitDecision, ValidationError, validate};

#[test]
fn effects_run_after_the_borrow_is_released() {
    let cell = RefCell::new(1);
    let seen = update_then(
        &cell,
        |value| {
            *value += 1;
            *value
        },
        |decided| {
            *cell.borrow_mut() *= 10;
            decided
        },
    );
    assert_eq!(seen, 2);
    assert_eq!(*cell.borrow(), 20);
}

#[test]
fn try_update_skips_while_an_outer_borrow_is_live() {
    let cell = RefCell::new(0);
    {
        let _outer = cell.borrow_mut();
        assert_eq!(try_update(&cell, |value| *value += 1), None);
    }
    assert_eq!(try_update(&cell, |value| *value += 1), Some(()));
    assert_eq!(*cell.borrow(), 1);
}

/// Submit is rejected, the first invalid field is focused, and focusing it
/// synchronously blurs the field the user was typing in. The blur handler
/// revalidates that field through the same shared state.
#[test]
fn focusing_a_rejected_field_can_revalidate_the_blurred_one() {
    let rule = |name: &str| FieldRule::for_field(name, true, 10);
    let values = [("name", "Priya"), ("email", ""), ("message", "Hello from Coimbatore!")];
    let shared = Rc::new(RefCell::new(FormState::default()));

    let blur = {
        let shared = Rc::clone(&shared);
        move |name: &str, value: &str| {
            let result = validate(rule(name), value);
            try_update(&shared, |form| form.record(name, &result))
        }
    };

    let focused = update_then(
        &shared,
        |form| {
            let results: Vec<(String, Result<(), ValidationError>)> = values
                .iter()
                .map(|(name, value)| ((*name).to_owned(), validate(rule(name), value)))
                .collect();
            match form.submit(&results) {
                SubmitDecision::Rejected { first_invalid } => Some(values[first_invalid].0),
                SubmitDecision::Accepted | SubmitDecision::Ignored => None,
            }
        },
        |focus| {
            assert_eq!(focus, Some("email"));
            assert_eq!(blur("name", "Priya"), Some(()), "blur handler must get the borrow");
            focus
        },
    );

    assert_eq!(focused, Some("email"));
    assert!(shared.borrow().has_error("email"));
    assert!(!shared.borrow().has_error("name"));
}
