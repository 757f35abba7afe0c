/// The operator table and its construction checks.
pub mod core;
/// Operator metadata: kind, fixity, associativity and evaluation function.
pub mod operator;

pub use self::core::{OperatorRegistry, STANDARD_OPERATORS};

pub use operator::{Associativity, Fixity, OpResult, Operator, OperatorFn, OperatorKind};
