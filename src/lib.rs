//! Small molecules as validated graphs.
//!
//! Atoms and bonds are described with [`AtomSpec`](spec::AtomSpec) and
//! [`BondSpec`](spec::BondSpec), then turned into an immutable [`Molecule`](molecule::Molecule)
//! that knows each atom's implicit hydrogens, nonbonding electrons, and charge.

#[rustfmt::skip]
pub mod atom_info;
pub mod core;
pub mod element;
pub mod molecule;
pub mod spec;
pub mod utils;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::core::{BondOrder, OrderError, OrderLike, Parity};
    pub use crate::element::{Element, ElementError, ElementLike};
    pub use crate::molecule::{AccessError, Molecule, MoleculeBuilder, MoleculeError};
    pub use crate::molecule;
    pub use crate::spec::{AtomSpec, BondSpec};
}
