/// The calculator facade.
///
/// Ties the lexer, parser and evaluator together over one operator registry
/// and exposes the single `evaluate` entry point.
pub mod calculator;
/// The evaluator module reduces expression trees to numbers.
///
/// The evaluator traverses the tree in post-order, applies each operator's
/// function and reports domain errors such as division by zero.
///
/// # Responsibilities
/// - Evaluates literal, unary and binary nodes.
/// - Implements the operator functions referenced by the registry.
/// - Bounds recursion depth.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source and produces numbers, operator symbols and
/// parentheses, each with its byte span. It folds a leading `-` into the number
/// that follows when the minus starts an operand.
///
/// # Responsibilities
/// - Converts the input character stream into spanned tokens.
/// - Rejects characters that are not part of the language.
/// - Disambiguates literal signs from subtraction.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// Precedence climbing driven by the operator registry, with support for
/// prefix and postfix unary operators and left or right associative infix
/// operators.
pub mod parser;
/// The operator registry.
///
/// An immutable table from one-character symbols to precedence, fixity,
/// associativity and evaluation function, validated once at construction.
pub mod registry;
