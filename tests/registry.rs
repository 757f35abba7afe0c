use fixity::{
    Calculator,
    error::ConfigurationError,
    interpreter::registry::{Associativity, Fixity, Operator, OperatorKind, OperatorRegistry, STANDARD_OPERATORS},
};
use pretty_assertions::assert_eq;

fn standard_op(symbol: char) -> Operator {
    STANDARD_OPERATORS.into_iter()
                      .find(|op| op.symbol == symbol)
                      .unwrap_or_else(|| panic!("'{symbol}' is not a standard operator"))
}

fn without(symbol: char) -> OperatorRegistry {
    OperatorRegistry::from_operators(STANDARD_OPERATORS.into_iter().filter(|op| op.symbol != symbol)).unwrap()
}

#[test]
fn standard_table() {
    let registry = OperatorRegistry::standard().unwrap();

    let expected = [('!', 7, Fixity::Postfix),
                    ('~', 6, Fixity::Prefix),
                    ('@', 5, Fixity::Infix),
                    ('&', 5, Fixity::Infix),
                    ('$', 5, Fixity::Infix),
                    ('%', 4, Fixity::Infix),
                    ('^', 3, Fixity::Infix),
                    ('*', 2, Fixity::Infix),
                    ('/', 2, Fixity::Infix),
                    ('+', 1, Fixity::Infix),
                    ('-', 1, Fixity::Infix)];

    assert_eq!(registry.len(), expected.len());
    for (symbol, precedence, fixity) in expected {
        let op = registry.lookup(symbol).unwrap();
        assert_eq!((op.precedence, op.fixity), (precedence, fixity), "operator '{symbol}'");
        if fixity == Fixity::Infix {
            assert_eq!(op.associativity, Associativity::Left, "operator '{symbol}'");
            assert_eq!(op.arity(), 2);
        } else {
            assert_eq!(op.arity(), 1);
        }
    }

    assert_eq!(registry.lookup('!').unwrap().kind, OperatorKind::Factorial);
    assert_eq!(registry.lookup('$').unwrap().kind, OperatorKind::Average);
    assert!(registry.lookup('#').is_none());
}

#[test]
fn fixity_filters() {
    let registry = OperatorRegistry::standard().unwrap();

    assert!(registry.postfix('!').is_some());
    assert!(registry.postfix('~').is_none());
    assert!(registry.prefix('~').is_some());
    assert!(registry.prefix('-').is_none());
    assert!(registry.infix('-').is_some());
    assert!(registry.infix('!').is_none());

    let mut symbols = registry.symbols();
    symbols.sort_unstable();
    assert_eq!(symbols, vec!['!', '$', '%', '&', '*', '+', '-', '/', '@', '^', '~']);
    assert_eq!(registry.iter().count(), 11);
}

#[test]
fn right_binding_power_follows_associativity() {
    let minus = standard_op('-');
    assert_eq!(minus.right_binding_power(), 2);

    let right = Operator { associativity: Associativity::Right,
                           ..standard_op('^') };
    assert_eq!(right.right_binding_power(), 3);
}

#[test]
fn operators_apply_by_arity() {
    let bang = standard_op('!');
    assert_eq!(bang.apply_unary(4.0), Some(Ok(24.0)));
    assert_eq!(bang.apply_binary(4.0, 1.0), None);

    let avg = standard_op('$');
    assert_eq!(avg.apply_binary(1.0, 4.0), Some(Ok(2.5)));
    assert_eq!(avg.apply_unary(1.0), None);
}

#[test]
fn duplicate_symbols_are_rejected() {
    let mut operators = STANDARD_OPERATORS.to_vec();
    operators.push(Operator { kind: OperatorKind::Min,
                              ..standard_op('@') });

    assert_eq!(OperatorRegistry::from_operators(operators).unwrap_err(),
               ConfigurationError::DuplicateSymbol { symbol: '@' });
}

#[test]
fn reserved_symbols_are_rejected() {
    for symbol in ['(', ')', '.', '7', ' ', '\t'] {
        let op = Operator { symbol,
                            ..standard_op('+') };
        assert_eq!(OperatorRegistry::from_operators([op]).unwrap_err(),
                   ConfigurationError::ReservedSymbol { symbol });
    }
}

#[test]
fn fixity_must_match_arity() {
    let prefix_plus = Operator { fixity: Fixity::Prefix,
                                 ..standard_op('+') };
    assert_eq!(OperatorRegistry::from_operators([prefix_plus]).unwrap_err(),
               ConfigurationError::FixityMismatch { symbol: '+',
                                                    arity:  2,
                                                    fixity: "prefix".to_string(), });

    let infix_bang = Operator { fixity: Fixity::Infix,
                                ..standard_op('!') };
    let err = OperatorRegistry::from_operators([infix_bang]).unwrap_err();
    assert_eq!(err.to_string(), "Operator '!' has arity 1 but is declared infix.");
}

#[test]
fn right_associative_operators_group_right() {
    let operators = STANDARD_OPERATORS.into_iter().map(|op| {
                                                      if op.symbol == '^' {
                                                          Operator { associativity: Associativity::Right,
                                                                     ..op }
                                                      } else {
                                                          op
                                                      }
                                                  });
    let calculator = Calculator::with_registry(OperatorRegistry::from_operators(operators).unwrap());

    assert_eq!(calculator.parse("2 ^ 3 ^ 2").unwrap().to_string(), "(2 ^ (3 ^ 2))");
    assert_eq!(calculator.evaluate("2 ^ 3 ^ 2").unwrap(), 512.0);
    assert_eq!(calculator.evaluate("2 * 2 ^ 3 ^ 2 + 1").unwrap(), 1025.0);
}

#[test]
fn symbols_can_be_added_and_removed() {
    let mut operators = STANDARD_OPERATORS.to_vec();
    operators.push(Operator { symbol: '|',
                              ..standard_op('@') });
    let extended = Calculator::with_registry(OperatorRegistry::from_operators(operators).unwrap());
    assert_eq!(extended.evaluate("1 | 5 + 2").unwrap(), 7.0);

    let reduced = Calculator::with_registry(without('~'));
    assert!(reduced.evaluate("~5").unwrap_err().is_tokenization());
    assert_eq!(reduced.evaluate("-5 + 1").unwrap(), -4.0);
}

#[test]
fn empty_registry_only_accepts_literals() {
    let registry = OperatorRegistry::from_operators(Vec::<Operator>::new()).unwrap();
    assert!(registry.is_empty());

    let calculator = Calculator::with_registry(registry);
    assert_eq!(calculator.evaluate("(42)").unwrap(), 42.0);
    assert!(calculator.evaluate("1 + 1").unwrap_err().is_tokenization());
}
