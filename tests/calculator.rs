use std::thread;

use fixity::{
    Calculator, Error, evaluate,
    error::{DomainError, SyntaxError, TokenizationError},
    interpreter::evaluator::core::MAX_NESTING_LIMIT,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_close(src: &str, expected: f64) {
    let value = evaluate(src).unwrap_or_else(|e| panic!("Expression {src:?} failed: {e}"));
    assert!((value - expected).abs() < 1e-9,
            "expected {expected} for {src:?}, got {value}");
}

fn assert_syntax_error(src: &str) {
    match evaluate(src) {
        Err(Error::Syntax(_)) => {},
        other => panic!("Expected a syntax error for {src:?}, got {other:?}"),
    }
}

fn domain_error(src: &str) -> DomainError {
    match evaluate(src) {
        Err(Error::Domain(e)) => e,
        other => panic!("Expected a domain error for {src:?}, got {other:?}"),
    }
}

#[test]
fn basic_operations() {
    assert_value("2 + 3", 5.0);
    assert_value("10 - 4", 6.0);
    assert_value("6 * 7", 42.0);
    assert_value("8 / 2", 4.0);
    assert_value("4^2*2", 32.0);
    assert_value("9 @ 4", 9.0);
    assert_value("9 & 4", 4.0);
    assert_value("9 $ 4", 6.5);
    assert_value("9 % 4", 1.0);
}

#[test]
fn order_of_operations() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3!) * 4", 32.0);
    assert_value("100 / (5 + 5)", 10.0);
    assert_value("10 - 2 * 3", 4.0);
    assert_value("(2+3)*4", 20.0);
    // `%` binds tighter than `^`, and `@ & $` tighter than `%`.
    assert_value("2 ^ 10 % 4", 4.0);
    assert_value("10 % 3 @ 4", 2.0);
    assert_value("3 @ 4 * 2", 8.0);
}

#[test]
fn left_associative_chains() {
    assert_value("8 - 4 - 2", 2.0);
    assert_value("64 / 4 / 2", 8.0);
    assert_value("2 ^ 3 ^ 2", 64.0);
    assert_value("2 $ 4 & 1", 1.0);
    assert_value("17 % 5 % 3", 2.0);
}

#[test]
fn negation_and_literal_signs() {
    assert_value("~-5", 5.0);
    assert_value("~50", -50.0);
    assert_value("~-50", 50.0);
    assert_value("90 + ~-5", 95.0);
    assert_value("~-5+90", 95.0);
    assert_value("~-10 + 4!", 34.0);
    assert_value("2 - -3", 5.0);
    assert_value("2--3", 5.0);
    assert_value("2 * -3", -6.0);
    assert_value("(-2) ^ 2", 4.0);
    assert_value("-2 ^ 2", 4.0);
    assert_value("~2 @ 3", 3.0);
    assert_value("~(2 @ 3)", -3.0);
    assert_value("~~7", 7.0);
}

#[test]
fn factorial() {
    assert_value("5!", 120.0);
    assert_value("0!", 1.0);
    assert_value("1!", 1.0);
    assert_value("3!!", 720.0);
    assert_value("(2 + 3)!", 120.0);
    assert_value("~5!", -120.0);
    assert_value("5! - (3)", 117.0);
    assert_value("5! + ~3", 117.0);
    assert_value("2 ^ 3!", 64.0);
    assert_close("3.5!", 11.631_728_396_567_448);
    assert_close("0.5!", 0.886_226_925_452_758);
}

#[test]
fn complex_expressions() {
    assert_value("(5 + 3) * 2!", 16.0);
    assert_value("2! + 3! * 4", 26.0);
    assert_value("7!*(-50 + 95 * 8) - 20 - ~50", 3_578_430.0);
    assert_value("0!*(10^2*2)", 200.0);
    assert_value("  42  ", 42.0);
    assert_value("1.5 + .5", 2.0);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(domain_error("1 / 0"), DomainError::DivisionByZero);
    assert_eq!(domain_error("0 / 0"), DomainError::DivisionByZero);
    assert_eq!(domain_error("5.5 / -0"), DomainError::DivisionByZero);
    assert_eq!(domain_error("1 / (2 - 2)"), DomainError::DivisionByZero);
    assert_eq!(domain_error("3 % 0"), DomainError::ModuloByZero);
}

#[test]
fn other_domain_errors() {
    assert_eq!(domain_error("-3!"), DomainError::NegativeFactorial { operand: -3.0 });
    assert_eq!(domain_error("(1 - 4)!"), DomainError::NegativeFactorial { operand: -3.0 });
    assert_eq!(domain_error("171!"), DomainError::FactorialOverflow { operand: 171.0 });
    assert_eq!(domain_error("0 ^ -1"), DomainError::ZeroToNegativePower { exponent: -1.0 });
    assert_eq!(domain_error("-8 ^ 0.5"),
               DomainError::ComplexResult { base:     -8.0,
                                            exponent: 0.5, });
}

#[test]
fn floored_modulo() {
    assert_value("7 % 3", 1.0);
    assert_value("-7 % 3", 2.0);
    assert_value("7 % -3", -2.0);
    assert_value("5.5 % 2", 1.5);
}

#[test]
fn malformed_inputs_are_syntax_errors() {
    assert_syntax_error("(");
    assert_syntax_error("");
    assert_syntax_error("   ");
    assert_syntax_error("2+");
    assert_syntax_error("2 $ $ 3");
    assert_syntax_error("(2 + 3");
    assert_syntax_error("2 + 3)");
    assert_syntax_error("()");
    assert_syntax_error("2 3");
    assert_syntax_error("!5");
    assert_syntax_error("~");
    assert_syntax_error("--5");
    assert_syntax_error("1.2.3");
    assert_syntax_error(".");
    assert_syntax_error("2 ~ 3");
}

#[test]
fn syntax_error_details() {
    assert_eq!(evaluate("2+"),
               Err(SyntaxError::UnexpectedEndOfInput { position: 2 }.into()));
    assert_eq!(evaluate("(2 + 3"),
               Err(SyntaxError::ExpectedClosingParen { position: 6 }.into()));
    assert_eq!(evaluate("2 $ $ 3"),
               Err(SyntaxError::UnexpectedToken { token:    "$".to_string(),
                                                  position: 4, }.into()));
    assert_eq!(evaluate("2 + 3)"),
               Err(SyntaxError::UnexpectedTrailingToken { token:    ")".to_string(),
                                                          position: 5, }.into()));
    assert_eq!(evaluate("5!-3"),
               Err(SyntaxError::UnexpectedTrailingToken { token:    "-3".to_string(),
                                                          position: 2, }.into()));
    assert_eq!(evaluate("1.2.3 + 1"),
               Err(SyntaxError::InvalidNumber { text:     "1.2.3".to_string(),
                                                position: 0, }.into()));
}

#[test]
fn unrecognized_characters_are_tokenization_errors() {
    assert_eq!(evaluate("2 # 3"),
               Err(TokenizationError::UnrecognizedCharacter { character: '#',
                                                              position:  2, }.into()));
    assert!(evaluate("x + 1").unwrap_err().is_tokenization());
    assert!(evaluate("2 × 3").unwrap_err().is_tokenization());
}

#[test]
fn nesting_is_bounded() {
    let shallow = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_value(&shallow, 1.0);

    let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(evaluate(&deep),
               Err(SyntaxError::NestingTooDeep { limit: 256 }.into()));

    let negations = format!("{}1", "~".repeat(10_000));
    assert_syntax_error(&negations);
}

#[test]
fn long_chains_count_towards_nesting() {
    let sum = format!("1{}", "+1".repeat(300));
    assert_eq!(evaluate(&sum),
               Err(SyntaxError::NestingTooDeep { limit: 256 }.into()));

    let factorials = format!("1{}", "!".repeat(300));
    assert_syntax_error(&factorials);

    let calculator = Calculator::new().unwrap().with_max_depth(1_000);
    assert_eq!(calculator.evaluate(&sum).unwrap(), 301.0);
}

#[test]
fn nesting_limit_has_a_ceiling() {
    let calculator = Calculator::new().unwrap().with_max_depth(100_000_000);
    assert_eq!(calculator.max_depth(), MAX_NESTING_LIMIT);

    let deep = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_eq!(calculator.evaluate(&deep),
               Err(SyntaxError::NestingTooDeep { limit: MAX_NESTING_LIMIT }.into()));

    let chain = format!("1{}", "+1".repeat(100_000));
    assert_eq!(calculator.evaluate(&chain),
               Err(SyntaxError::NestingTooDeep { limit: MAX_NESTING_LIMIT }.into()));
}

#[test]
fn calculator_is_reusable_and_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Calculator>();

    let calculator = Calculator::new().unwrap();
    let cases = [("2 + 3 * 4", 14.0),
                 ("(2 + 3!) * 4", 32.0),
                 ("~-5", 5.0),
                 ("2! + 3! * 4", 26.0)];

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                     for _ in 0..100 {
                         for (src, expected) in cases {
                             assert_eq!(calculator.evaluate(src).unwrap(), expected);
                         }
                         assert!(calculator.evaluate("1/0").unwrap_err().is_domain());
                     }
                 });
        }
    });
}
