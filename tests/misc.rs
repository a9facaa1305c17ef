//! Mixed payload shapes, the early-return macro, and formatting.

use outcome::{Outcome, fail, succeed};

fn divide(a: i32, b: i32) -> Outcome<i32, String> {
    if b == 0 {
        fail("Division by zero").into()
    } else {
        succeed(a / b).into()
    }
}

#[test]
fn both_sides_borrowed() {
    let value = 16;
    let failure = "Division by zero".to_string();

    let success: Outcome<&i32, &String> = succeed(&value).into();
    assert!(success.is_success());
    assert_eq!(success.copied(), succeed(16));

    let failed: Outcome<&i32, &String> = fail(&failure).into();
    assert!(failed.is_failure());
    assert_eq!(failed.cloned_failure(), fail("Division by zero".to_string()));
}

#[test]
fn attempt_unwraps_in_expression_position() {
    fn quarter(a: i32, b: i32) -> Outcome<i32, String> {
        let halved = outcome::attempt!(divide(a, b));
        divide(halved, 2)
    }

    assert_eq!(quarter(32, 2), succeed(8));
    assert_eq!(quarter(32, 0), fail("Division by zero".to_string()));
}

#[test]
fn attempt_widens_the_failure_type() {
    fn positive(value: i32) -> Outcome<i32, &'static str> {
        if value > 0 {
            succeed(value).into()
        } else {
            fail("not positive").into()
        }
    }

    fn describe(value: i32) -> Outcome<String, String> {
        let checked = outcome::attempt!(positive(value));
        succeed(format!("positive: {checked}")).into()
    }

    assert_eq!(describe(3), succeed("positive: 3".to_string()));
    assert_eq!(describe(-3), fail("not positive".to_string()));
}

#[test]
fn attempt_never_runs_the_rest_on_failure() {
    fn run(a: i32, b: i32, calls: &mut i32) -> Outcome<i32, String> {
        let first = outcome::attempt!(divide(a, b));
        *calls += 1;
        divide(first, 2)
    }

    let mut calls = 0;
    assert_eq!(run(32, 0, &mut calls), fail("Division by zero".to_string()));
    assert_eq!(calls, 0);

    assert_eq!(run(32, 2, &mut calls), succeed(8));
    assert_eq!(calls, 1);
}

#[test]
fn construction_converts_the_payload() {
    // &str tagged at the call site, String held by the container
    let res: Outcome<String, String> = succeed("sixteen").into();
    assert_eq!(res, succeed("sixteen".to_string()));

    let res: Outcome<i64, i64> = succeed(16i32).into();
    assert_eq!(res, succeed(16i64));
}

#[test]
fn identical_payload_types_stay_disambiguated() {
    let success: Outcome<String, String> = succeed("payload").into();
    let failure: Outcome<String, String> = fail("payload").into();
    assert!(success.is_success());
    assert!(failure.is_failure());
    assert_ne!(success, failure);
}

#[test]
fn debug_renders_the_live_side() {
    assert_eq!(format!("{:?}", divide(32, 2)), "Success(16)");
    assert_eq!(format!("{:?}", divide(32, 0)), "Failure(\"Division by zero\")");
}

#[test]
fn tags_expose_their_payload() {
    let tag = succeed(16);
    assert_eq!(*tag.get(), 16);
    assert_eq!(tag.into_inner(), 16);

    let tag = fail("Division by zero");
    assert_eq!(*tag.get(), "Division by zero");
    assert_eq!(tag.into_inner(), "Division by zero");
}

#[test]
fn copy_payloads_make_the_outcome_copy() {
    let res: Outcome<i32, i32> = succeed(16).into();
    let first = res;
    let second = res;
    assert_eq!(first, second);
}
