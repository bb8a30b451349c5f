//! Literals and clauses of 2-CNF formulas.
//!
//! A [`Literal`] is a signed, 1-based variable index. Formulas arrive as slices of
//! [`Clause`] pairs.

use std::{fmt, ops::Not, str::FromStr};

use crate::{Error, Result};

/// A 2-CNF clause `(a ∨ b)`.
pub type Clause = (Literal, Literal);

/// A possibly negated boolean variable.
///
/// Variables are numbered from 1. A literal is stored as the signed variable index, with a
/// negative sign for the negated form, so `0` is never a valid literal.
///
/// # Examples
///
/// ```rust
/// use graphscope::sat::Literal;
///
/// let x3: Literal = "3".parse()?;
/// assert_eq!(x3.variable(), 3);
/// assert!(!x3.is_negated());
/// assert_eq!(!x3, Literal::new(-3)?);
/// assert_eq!((!x3).to_string(), "-3");
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal(i32);

impl Literal {
    /// Creates a literal from a signed, 1-based variable index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] for `0`, and for `i32::MIN` which has no negation.
    pub fn new(value: i32) -> Result<Self> {
        if value == 0 {
            return Err(Error::InvalidLiteral("0 does not name a variable".to_string()));
        }
        if value == i32::MIN {
            return Err(Error::InvalidLiteral(format!("{value} cannot be negated")));
        }
        Ok(Literal(value))
    }

    /// Creates the positive literal of `variable`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] for variable `0` or an index too large to store.
    pub fn positive(variable: usize) -> Result<Self> {
        let value = i32::try_from(variable)
            .map_err(|_| Error::InvalidLiteral(format!("variable {variable} is too large")))?;
        Self::new(value)
    }

    /// Creates the negated literal of `variable`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] for variable `0` or an index too large to store.
    pub fn negative(variable: usize) -> Result<Self> {
        Self::positive(variable).map(Not::not)
    }

    /// Parses a literal written with 0-based variable numbers.
    ///
    /// `"k"` becomes variable `k + 1` and `"-k"` its negation. Since `-0` is not an integer
    /// distinct from `0`, the token `"-0"` is matched textually and yields the negation of
    /// variable 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] if the token is not an integer or is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphscope::sat::Literal;
    ///
    /// assert_eq!(Literal::from_zero_based("0")?, Literal::new(1)?);
    /// assert_eq!(Literal::from_zero_based("-0")?, Literal::new(-1)?);
    /// assert_eq!(Literal::from_zero_based("-4")?, Literal::new(-5)?);
    /// # Ok::<(), graphscope::Error>(())
    /// ```
    pub fn from_zero_based(token: &str) -> Result<Self> {
        let token = token.trim();
        if token == "-0" {
            return Ok(Literal(-1));
        }

        let raw: i32 = token
            .parse()
            .map_err(|_| Error::InvalidLiteral(format!("'{token}' is not an integer")))?;
        let shifted = if raw >= 0 {
            raw.checked_add(1)
        } else {
            raw.checked_sub(1)
        };
        let value =
            shifted.ok_or_else(|| Error::InvalidLiteral(format!("'{token}' is out of range")))?;
        Self::new(value)
    }

    /// Returns the 1-based variable index.
    #[must_use]
    pub fn variable(self) -> usize {
        self.0.unsigned_abs() as usize
    }

    /// Returns `true` for the negated form of the variable.
    #[must_use]
    pub fn is_negated(self) -> bool {
        self.0 < 0
    }

    /// Returns the signed value, negative for a negated literal.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }

    /// Evaluates the literal under a truth value of its variable.
    #[must_use]
    pub fn eval(self, variable_value: bool) -> bool {
        variable_value != self.is_negated()
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Literal(-self.0)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Literal {
    type Err = Error;

    /// Parses a signed, 1-based literal such as `"2"` or `"-7"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let value: i32 = s
            .parse()
            .map_err(|_| Error::InvalidLiteral(format!("'{s}' is not an integer")))?;
        Self::new(value)
    }
}

impl TryFrom<i32> for Literal {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_rejected() {
        assert!(matches!(Literal::new(0), Err(Error::InvalidLiteral(_))));
        assert!(matches!("0".parse::<Literal>(), Err(Error::InvalidLiteral(_))));
        assert!(Literal::positive(0).is_err());
    }

    #[test]
    fn test_negation() {
        let x = Literal::new(4).unwrap();
        assert!((!x).is_negated());
        assert_eq!((!x).variable(), 4);
        assert_eq!(!!x, x);
        assert_eq!(Literal::negative(4).unwrap(), !x);
    }

    #[test]
    fn test_parse() {
        assert_eq!(" -12 ".parse::<Literal>().unwrap().value(), -12);
        assert!("x1".parse::<Literal>().is_err());
        assert!("".parse::<Literal>().is_err());
    }

    #[test]
    fn test_from_zero_based() {
        assert_eq!(Literal::from_zero_based("0").unwrap().value(), 1);
        assert_eq!(Literal::from_zero_based("7").unwrap().value(), 8);
        assert_eq!(Literal::from_zero_based("-0").unwrap().value(), -1);
        assert_eq!(Literal::from_zero_based("-3").unwrap().value(), -4);
        assert!(Literal::from_zero_based("2147483647").is_err());
        assert!(Literal::from_zero_based("-2147483647").is_err());
        assert!(Literal::from_zero_based("abc").is_err());
    }

    #[test]
    fn test_eval() {
        let x = Literal::new(1).unwrap();
        assert!(x.eval(true));
        assert!(!x.eval(false));
        assert!((!x).eval(false));
    }

    #[test]
    fn test_too_large_variable() {
        assert!(Literal::positive(usize::MAX).is_err());
    }
}
