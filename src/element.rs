//! Elements, as indices into the periodic table

use crate::atom_info::*;
use crate::utils::echar::EChar;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ElementError {
    #[error("atomic number {0} is outside of the range [1, 118]")]
    OutOfRange(i64),
    #[error("{0} is not a recognized element")]
    UnknownSymbol(EChar),
}

/// A chemical element, identified by its atomic number.
///
/// The only way to get one is through the checked constructors (or the constants), so the atomic
/// number is always in `1..=118`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Element(u8);

impl Element {
    pub const H: Self = Self(1);
    pub const HE: Self = Self(2);
    pub const LI: Self = Self(3);
    pub const BE: Self = Self(4);
    pub const B: Self = Self(5);
    pub const C: Self = Self(6);
    pub const N: Self = Self(7);
    pub const O: Self = Self(8);
    pub const F: Self = Self(9);
    pub const NE: Self = Self(10);
    pub const P: Self = Self(15);
    pub const S: Self = Self(16);
    pub const CL: Self = Self(17);
    pub const BR: Self = Self(35);
    pub const I: Self = Self(53);

    pub fn from_atomic_number(protons: u32) -> Result<Self, ElementError> {
        if (1..=MAX_ATOMIC_NUMBER as u32).contains(&protons) {
            Ok(Self(protons as u8))
        } else {
            Err(ElementError::OutOfRange(protons as _))
        }
    }

    /// Look up an element by its symbol. Matching is case-sensitive, so `"c"` and `"CL"` fail.
    pub fn from_symbol(sym: &str) -> Result<Self, ElementError> {
        ATOM_DATA
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, a)| a.sym == sym)
            .map(|(n, _)| Self(n as _))
            .ok_or_else(|| ElementError::UnknownSymbol(EChar::truncated(sym.as_bytes())))
    }

    /// Iterate over every element in the table, in order of atomic number
    pub fn all() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator {
        (1..=MAX_ATOMIC_NUMBER).map(Self)
    }

    #[inline(always)]
    pub const fn atomic_number(self) -> u8 {
        self.0
    }
    #[inline(always)]
    fn data(self) -> &'static AtomData {
        &ATOM_DATA[self.0 as usize]
    }
    pub fn symbol(self) -> &'static str {
        self.data().sym
    }
    pub fn name(self) -> &'static str {
        self.data().name
    }
    pub fn group(self) -> ElemGroup {
        self.data().group
    }
    /// Number of electrons in the valence shell of the neutral, unbonded atom
    pub fn valence_electrons(self) -> u8 {
        self.data().valence
    }
    /// Electrons the valence shell can hold under the duet/octet rule, or `None` for transition
    /// metals and the f-block, where the rule doesn't apply.
    pub fn shell_capacity(self) -> Option<u8> {
        if !self.group().is_main_group() {
            None
        } else if self.0 <= 2 {
            Some(2)
        } else {
            Some(8)
        }
    }
}

impl Debug for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Element::{}", self.symbol())
    }
}
impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(self.name())
        } else {
            f.write_str(self.symbol())
        }
    }
}
impl FromStr for Element {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}
impl TryFrom<u32> for Element {
    type Error = ElementError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_atomic_number(value)
    }
}
impl From<Element> for u8 {
    fn from(value: Element) -> Self {
        value.0
    }
}

/// Any of the ways a caller can name an element. Resolve it with [`ElementLike::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementLike<'a> {
    Element(Element),
    AtomicNumber(i64),
    Symbol(&'a str),
}
impl ElementLike<'_> {
    pub fn resolve(self) -> Result<Element, ElementError> {
        match self {
            Self::Element(e) => Ok(e),
            Self::AtomicNumber(n) => u32::try_from(n)
                .map_err(|_| ElementError::OutOfRange(n))
                .and_then(Element::from_atomic_number),
            Self::Symbol(s) => Element::from_symbol(s),
        }
    }
}
impl From<Element> for ElementLike<'_> {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}
impl<'a> From<&'a str> for ElementLike<'a> {
    fn from(value: &'a str) -> Self {
        Self::Symbol(value)
    }
}
impl<'a> From<&'a String> for ElementLike<'a> {
    fn from(value: &'a String) -> Self {
        Self::Symbol(value)
    }
}
macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ElementLike<'_> {
                fn from(value: $ty) -> Self {
                    Self::AtomicNumber(value as _)
                }
            }
        )*
    };
}
impl_from_int!(u8, u16, u32, i8, i16, i32, i64);
