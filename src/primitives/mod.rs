//! # Layer 0: Primitives
//!
//! Basic building blocks for the trait engine:
//! - `bool.rs`: Type-level boolean logic (True/False), `conditional`, `enable_if`.
//! - `limits.rs`: `numeric_limits` for the arithmetic primitives.

pub mod bool;
pub mod limits;

// Re-export key types at this level
pub use bool::{
    Bool, BoolConstant, Conditional, Conjunction, Disjunction, Elif, EnableIf, EnableIfT, False,
    Negation, SelectBool, True,
};
pub use limits::NumericLimits;
