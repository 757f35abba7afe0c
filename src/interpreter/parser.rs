/// Infix operator parsing.
///
/// Implements the precedence-climbing loop. Each infix operator's precedence
/// and associativity come from the registry, so the parser needs no grammar
/// rule per precedence level.
pub mod binary;

/// Core parser state and the parsing entry point.
///
/// Holds the token cursor, the operator registry and the nesting counter that
/// bounds recursion.
pub mod core;

/// Primary, prefix and postfix parsing.
///
/// Parses literals, parenthesized groups, prefix operators with their operand,
/// and the postfix operators that follow an operand.
pub mod unary;
