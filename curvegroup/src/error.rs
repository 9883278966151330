//! Error types.

use core::fmt;

/// Errors raised when building or decoding curve points and running multiexp.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Malformed point encoding: bad tag, bad length or non-canonical coordinate.
    InvalidEncoding,

    /// The coordinates do not satisfy the curve equation.
    NotOnCurve,

    /// The point lies on the curve but outside the prime-order subgroup.
    NotInSubgroup,

    /// Point and scalar slices of different lengths were passed to multiexp.
    LengthMismatch,

    /// An error from the underlying field arithmetic.
    Field(towerfield::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEncoding => write!(f, "invalid point encoding"),
            Error::NotOnCurve => write!(f, "point is not on the curve"),
            Error::NotInSubgroup => write!(f, "point is not in the prime-order subgroup"),
            Error::LengthMismatch => write!(f, "points and scalars differ in length"),
            Error::Field(err) => write!(f, "field error: {err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<towerfield::Error> for Error {
    fn from(err: towerfield::Error) -> Self {
        Error::Field(err)
    }
}

/// Result type with the `curvegroup` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
