//! Binary operators: the capability contract and the built-in set.

mod builtin;
mod mass;
mod traits;

pub use builtin::{arithmetic_ops, Add, BitAnd, BitOr, BitXor, Div, Mod, Mul, Sub};
pub use mass::TextLengthMass;
pub use traits::{OpRef, Operator, Primitive};

#[cfg(test)]
mod tests;
