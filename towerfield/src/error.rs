//! Error types.

use core::fmt;

/// Errors raised by modular and field arithmetic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The modulus is zero, one, or too wide for the chosen reduction strategy.
    InvalidModulus,

    /// The element has no multiplicative inverse (zero, or not a unit).
    NotInvertible,

    /// The element is not a quadratic residue.
    NonResidue,

    /// The byte string does not encode a canonical field element.
    InvalidEncoding,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidModulus => write!(f, "invalid modulus"),
            Error::NotInvertible => write!(f, "element is not invertible"),
            Error::NonResidue => write!(f, "element is not a quadratic residue"),
            Error::InvalidEncoding => write!(f, "invalid field element encoding"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
