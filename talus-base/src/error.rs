// This file is part of talus.
//
// talus is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License,
// or (at your option) any later version.
//
// talus is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with talus. If not, see <https://www.gnu.org/licenses/>.

use std::error::Error;
use std::fmt;

/// Error taxonomy for the recoverable failure categories of the crate.
///
/// Broken-invariant conditions (forbidden aliasing, malformed internal
/// state) are programming errors and panic instead of returning one of
/// these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TalusError {
    DivisionByZero,
    InexactDivision,
    NonZeroConstantTerm,
    NonUnitConstantTerm,
    ConstantTermNotInvertible,
    NotRevertible,
    ParseError(String),
    InvalidArgument(String),
    Unsupported(String),
    NonCoprimeOrZeroModuli,
}

impl fmt::Display for TalusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TalusError::DivisionByZero => write!(f, "division by zero"),
            TalusError::InexactDivision => write!(f, "inexact division"),
            TalusError::NonZeroConstantTerm => write!(f, "series requires zero constant term"),
            TalusError::NonUnitConstantTerm => write!(f, "series requires unit constant term"),
            TalusError::ConstantTermNotInvertible => {
                write!(f, "constant term is not invertible")
            }
            TalusError::NotRevertible => write!(f, "series is not revertible"),
            TalusError::ParseError(msg) => write!(f, "parse error: {}", msg),
            TalusError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            TalusError::Unsupported(msg) => write!(f, "unsupported: {}", msg),
            TalusError::NonCoprimeOrZeroModuli => write!(f, "non-coprime or zero modulus"),
        }
    }
}

impl Error for TalusError {}

pub type TalusResult<T> = Result<T, TalusError>;
