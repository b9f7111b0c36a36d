//! Caller-facing descriptions of atoms and bonds.
//!
//! Nothing here checks chemistry. A spec only makes sure its element and bond order are real; all
//! structural validation happens when the molecule is built.

use crate::core::*;
use crate::element::*;
use std::fmt::{self, Display, Formatter};

/// An atom, as the caller describes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtomSpec {
    pub element: Element,
    /// Implicit hydrogens, which don't get their own node in the graph
    pub hydrogens: u8,
    pub charge: i8,
    /// Mass number, if a specific isotope was given
    pub isotope: Option<u16>,
    pub parity: Option<Parity>,
}
impl AtomSpec {
    /// Create a neutral atom with no hydrogens from anything that names an element
    pub fn new<'a>(element: impl Into<ElementLike<'a>>) -> Result<Self, ElementError> {
        element.into().resolve().map(Self::of)
    }
    /// Infallible version of `new`, for when the element is already known
    pub const fn of(element: Element) -> Self {
        Self {
            element,
            hydrogens: 0,
            charge: 0,
            isotope: None,
            parity: None,
        }
    }

    pub const fn with_hydrogens(mut self, hydrogens: u8) -> Self {
        self.hydrogens = hydrogens;
        self
    }
    pub const fn with_charge(mut self, charge: i8) -> Self {
        self.charge = charge;
        self
    }
    pub const fn with_isotope(mut self, isotope: u16) -> Self {
        self.isotope = Some(isotope);
        self
    }
    pub fn with_parity(mut self, parity: impl Into<Parity>) -> Self {
        self.parity = Some(parity.into());
        self
    }
}
impl From<Element> for AtomSpec {
    fn from(value: Element) -> Self {
        Self::of(value)
    }
}
impl Display for AtomSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use fmtastic::*;
        if f.alternate() {
            write!(f, "{:#}", self.element)?;
            if let Some(isotope) = self.isotope {
                write!(f, "-{isotope}")?;
            }
            if self.hydrogens > 0 {
                write!(f, " with {} hydrogens", self.hydrogens)?;
            }
            if self.charge != 0 {
                write!(f, ", charge {:+}", self.charge)?;
            }
        } else {
            if let Some(isotope) = self.isotope {
                write!(f, "{}", Superscript(isotope))?;
            }
            write!(f, "{}", self.element)?;
            match self.hydrogens {
                0 => {}
                1 => f.write_str("H")?,
                h => write!(f, "H{}", Subscript(h))?,
            }
            match self.charge {
                0 => {}
                1 => f.write_str("⁺")?,
                -1 => f.write_str("⁻")?,
                _ => write!(f, "{:+}", Superscript(self.charge))?,
            }
        }
        if let Some(parity) = self.parity {
            write!(f, " ({parity})")?;
        }
        Ok(())
    }
}

/// A bond between two atoms, referenced by their position in the atom list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BondSpec {
    pub source: usize,
    pub target: usize,
    pub order: BondOrder,
    /// Only meaningful on double bonds
    pub parity: Option<Parity>,
}
impl BondSpec {
    pub fn new(source: usize, target: usize, order: impl Into<OrderLike>) -> Result<Self, OrderError> {
        order.into().resolve().map(|order| Self::of(source, target, order))
    }
    pub const fn of(source: usize, target: usize, order: BondOrder) -> Self {
        Self {
            source,
            target,
            order,
            parity: None,
        }
    }
    pub fn with_parity(mut self, parity: impl Into<Parity>) -> Self {
        self.parity = Some(parity.into());
        self
    }
    /// The atom pair, lower index first
    pub fn key(&self) -> (usize, usize) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}
impl Display for BondSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} bond {}-{}", self.order, self.source, self.target)?;
        if let Some(parity) = self.parity {
            write!(f, " ({parity:#})")?;
        }
        Ok(())
    }
}
