use std::fmt;
use std::sync::Arc;

use crate::operator::{OpRef, Operator, Primitive};

/// One concrete way to denote an integer.
///
/// An expression records the integer it denotes, its rendered text, a
/// complexity measure ("mass", lower is simpler) and the top-level operator
/// that produced it. Base items carry the [`Primitive`] sentinel operator and
/// default to mass 1.
///
/// The engine never evaluates `text`; operator implementations are
/// responsible for rendering text that reproduces `value` under their own
/// semantics.
#[derive(Clone)]
pub struct Expression {
    pub value: i64,
    pub text: String,
    pub mass: u32,
    pub op: OpRef,
}

impl Expression {
    /// Create a base item with mass 1.
    pub fn new(value: i64, text: impl Into<String>) -> Self {
        Self::with_mass(value, text, 1)
    }

    /// Create a base item with an explicit mass.
    ///
    /// Useful when the caller measures complexity by something other than
    /// item count, e.g. text length.
    pub fn with_mass(value: i64, text: impl Into<String>, mass: u32) -> Self {
        Self {
            value,
            text: text.into(),
            mass,
            op: Arc::new(Primitive),
        }
    }

    /// Create a compound expression produced by `op`.
    pub fn compound(value: i64, text: String, mass: u32, op: OpRef) -> Self {
        Self {
            value,
            text,
            mass,
            op,
        }
    }

    /// Render this expression for embedding at precedence `level`, wrapping
    /// it in parentheses when its own operator binds more loosely.
    pub fn wrap(&self, level: u32) -> String {
        self.wrap_with(level, "(", ")")
    }

    /// Like [`wrap`](Self::wrap) with a custom bracket pair.
    pub fn wrap_with(&self, level: u32, open: &str, close: &str) -> String {
        if self.op.level() >= level {
            self.text.clone()
        } else {
            format!("{}{}{}", open, self.text, close)
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Expression")
            .field("value", &self.value)
            .field("text", &self.text)
            .field("mass", &self.mass)
            .field("level", &self.op.level())
            .finish()
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.text == other.text && self.mass == other.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::{Add, Mul};

    #[test]
    fn test_base_item_defaults() {
        let item = Expression::new(7, "7");
        assert_eq!(item.value, 7);
        assert_eq!(item.text, "7");
        assert_eq!(item.mass, 1);
        assert_eq!(item.op.level(), u32::MAX);
    }

    #[test]
    fn test_base_item_is_never_parenthesized() {
        let item = Expression::new(7, "7");
        assert_eq!(item.wrap(0), "7");
        assert_eq!(item.wrap(u32::MAX), "7");
    }

    #[test]
    fn test_wrap_parenthesizes_looser_operators() {
        let add: OpRef = Arc::new(Add::new());
        let sum = Expression::compound(3, "1 + 2".to_string(), 2, add);
        assert_eq!(sum.wrap(5), "(1 + 2)");
        assert_eq!(sum.wrap(3), "1 + 2");
        assert_eq!(sum.wrap(2), "1 + 2");
    }

    #[test]
    fn test_wrap_with_custom_brackets() {
        let mul: OpRef = Arc::new(Mul::new());
        let product = Expression::compound(6, "2✖3".to_string(), 2, mul);
        assert_eq!(product.wrap_with(6, "👉", "👈"), "👉2✖3👈");
        assert_eq!(product.wrap_with(5, "👉", "👈"), "2✖3");
    }

    #[test]
    fn test_display_renders_text() {
        let item = Expression::with_mass(0, "+[]", 3);
        assert_eq!(format!("{}", item), "+[]");
    }
}
