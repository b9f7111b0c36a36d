//! Value types shared by the specs and the molecule graph

use c_enum::*;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum OrderError {
    #[error("bond order {0} is outside of the range [0, 3]")]
    OutOfRange(i64),
}

c_enum! {
    /// Multiplicity of a bond between two atoms
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub enum BondOrder: u8 {
        /// No bond, contributes nothing to valence
        Zero,
        Single,
        Double,
        Triple,
    }
}
impl BondOrder {
    pub fn from_int(order: i64) -> Result<Self, OrderError> {
        match order {
            0 => Ok(Self::Zero),
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            3 => Ok(Self::Triple),
            _ => Err(OrderError::OutOfRange(order)),
        }
    }
    /// The order as an integer. Only `0..=3` is a real bond order.
    pub const fn as_int(self) -> u8 {
        self.0
    }
    /// Whether this is one of the four named orders. `BondOrder(7)` can be written, but it isn't
    /// valid and a molecule won't be built from it.
    pub const fn is_valid(self) -> bool {
        self.0 <= 3
    }
    /// Whether this actually joins two atoms
    pub fn is_bond(self) -> bool {
        self != Self::Zero
    }
    pub fn as_static_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Single => "single",
            Self::Double => "double",
            Self::Triple => "triple",
            _ => "invalid",
        }
    }
}
impl Display for BondOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_static_str())
    }
}
impl TryFrom<i64> for BondOrder {
    type Error = OrderError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_int(value)
    }
}

/// Either a bond order or an integer that should be one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderLike {
    Order(BondOrder),
    Int(i64),
}
impl OrderLike {
    pub fn resolve(self) -> Result<BondOrder, OrderError> {
        match self {
            Self::Order(o) => BondOrder::from_int(o.0 as _),
            Self::Int(n) => BondOrder::from_int(n),
        }
    }
}
impl From<BondOrder> for OrderLike {
    fn from(value: BondOrder) -> Self {
        Self::Order(value)
    }
}
macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for OrderLike {
                fn from(value: $ty) -> Self {
                    Self::Int(value as _)
                }
            }
        )*
    };
}
impl_from_int!(u8, u16, u32, i8, i16, i32, i64);

/// Binary stereo descriptor.
///
/// On atoms, `Positive` is clockwise and `Negative` anticlockwise. On double bonds, `Positive` is
/// syn and `Negative` anti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Negative,
    Positive,
}
impl Parity {
    pub const fn as_bool(self) -> bool {
        matches!(self, Self::Positive)
    }
    pub fn as_static_str(self) -> &'static str {
        match self {
            Self::Positive => "clockwise",
            Self::Negative => "anticlockwise",
        }
    }
}
impl From<bool> for Parity {
    fn from(value: bool) -> Self {
        if value {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}
impl From<Parity> for bool {
    fn from(value: Parity) -> Self {
        value.as_bool()
    }
}
impl Display for Parity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // syn/anti, for double bonds
            f.write_str(if self.as_bool() { "syn" } else { "anti" })
        } else {
            f.write_str(self.as_static_str())
        }
    }
}
