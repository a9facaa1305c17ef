//! Move-only payloads: the container moves them around without ever
//! needing `Clone`, and consuming accessors work exactly once.

use outcome::{Outcome, fail, succeed};

#[derive(Debug, PartialEq)]
struct Token {
    value: i32,
}

impl Token {
    fn new(value: i32) -> Self {
        Token { value }
    }
}

fn divide_token(a: i32, b: i32) -> Outcome<Token, String> {
    if b == 0 {
        fail("Division by zero").into()
    } else {
        succeed(Token::new(a / b)).into()
    }
}

#[test]
fn consuming_unwrap_moves_the_payload_out() {
    let res = divide_token(32, 2);
    let token = res.unwrap_success();
    assert_eq!(token.value, 16);
    // `res` is gone now; using it again would not compile.
}

#[test]
fn failure_side_still_unwraps() {
    let res = divide_token(32, 0);
    assert_eq!(res.unwrap_failure(), "Division by zero");
}

#[test]
fn borrowing_before_consuming() {
    let res = divide_token(32, 2);
    assert_eq!(res.as_ref().unwrap_success().value, 16);
    assert_eq!(res.unwrap_success(), Token::new(16));
}

#[test]
fn map_moves_through_the_combinator() {
    let res = divide_token(32, 2).map(|token| Token::new(token.value / 2));
    assert_eq!(res, succeed(Token::new(8)));
}

#[test]
fn unwrap_success_or_substitutes_a_moved_default() {
    assert_eq!(divide_token(32, 2).unwrap_success_or(Token::new(-64)).value, 16);
    assert_eq!(divide_token(32, 0).unwrap_success_or(Token::new(-64)).value, -64);

    assert_eq!(
        divide_token(32, 0).unwrap_success_or_else(|_| Token::new(-64)).value,
        -64
    );
}

#[test]
fn predicates_consume_the_payload() {
    assert!(divide_token(32, 2).is_success_and(|token| token.value == 16));
    assert!(!divide_token(32, 0).is_success_and(|token| token.value == 16));
}

#[test]
fn and_then_hands_the_payload_to_the_next_step() {
    let res = divide_token(32, 2).and_then(|token| divide_token(token.value, 2));
    assert_eq!(res, succeed(Token::new(8)));

    let res = divide_token(32, 0).and_then(|token| divide_token(token.value, 2));
    assert_eq!(res, fail("Division by zero".to_string()));
}

#[test]
fn optional_conversion_moves_the_payload() {
    assert_eq!(divide_token(32, 2).success_or_none(), Some(Token::new(16)));
    assert_eq!(divide_token(32, 0).success_or_none(), None);
}

#[test]
fn inspect_borrows_without_moving() {
    let mut seen = 0;
    let res = divide_token(32, 2).inspect(|token| seen = token.value);
    assert_eq!(seen, 16);
    assert_eq!(res.unwrap_success().value, 16);
}
