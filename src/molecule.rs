//! The validated molecule graph.
//!
//! A [`Molecule`] only exists once every atom and bond has passed validation, and it can't be
//! changed afterwards. Build one with [`MoleculeBuilder`] or [`Molecule::new`].

use crate::core::*;
use crate::element::Element;
use crate::spec::*;
use ahash::AHashMap;
use itertools::Itertools;
use petgraph::prelude::*;
use smallvec::SmallVec;
use std::collections::hash_map::Entry;
use thiserror::Error;
use tracing::*;

/// Build a molecule from atom and bond specs, panicking if it's invalid
#[macro_export]
macro_rules! molecule {
    ([$($atom:expr),* $(,)?], [$($bond:expr),* $(,)?]) => {
        $crate::molecule::Molecule::new([$($atom),*], [$($bond),*])
            .expect("Failed to build molecule")
    };
}

/// Something about the specs makes the molecule impossible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MoleculeError {
    #[error("atom {atom}: isotope {isotope} is lighter than its {protons} protons")]
    InvalidIsotope { atom: usize, isotope: u16, protons: u8 },
    #[error("bond {bond}: {order} isn't a bond order")]
    InvalidOrder { bond: usize, order: u8 },
    #[error("bond {bond}: atom {atom} can't be bonded to itself")]
    SelfBond { bond: usize, atom: usize },
    #[error("bond {bond}: atom {atom} doesn't exist, there are only {order} atoms")]
    DanglingBond {
        bond: usize,
        atom: usize,
        order: usize,
    },
    #[error("bond {bond}: the same atoms were already bonded by bond {first}")]
    DuplicateBond { bond: usize, first: usize },
    #[error("atom {atom}: bonds and hydrogens need a valence of {used}, but it can only make {capacity}")]
    Hypervalent {
        atom: usize,
        used: u32,
        capacity: i16,
    },
    #[error("atom {atom}: a charge of {charge:+} can't be reconciled with its valence electrons")]
    OverIonized { atom: usize, charge: i8 },
}

/// A query referred to something that isn't in the molecule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AccessError {
    #[error("atom {0} is not in the molecule")]
    InvalidAtom(usize),
    #[error("atoms {0} and {1} are not bonded")]
    InvalidEdge(usize, usize),
}

/// An atom in the molecule graph, with everything derived from its spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct AtomState {
    pub element: Element,
    pub hydrogens: u8,
    pub isotope: Option<u16>,
    /// Nonbonding electrons, filled in once all bonds are known
    pub electrons: u8,
    pub charge: i8,
    pub parity: Option<Parity>,
}
impl From<&AtomSpec> for AtomState {
    fn from(spec: &AtomSpec) -> Self {
        Self {
            element: spec.element,
            hydrogens: spec.hydrogens,
            isotope: spec.isotope,
            electrons: 0,
            charge: spec.charge,
            parity: spec.parity,
        }
    }
}

/// A bond in the molecule graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct BondState {
    pub order: BondOrder,
    pub parity: Option<Parity>,
}

/// The molecule graph is an undirected graph between atoms, connected with bonds
pub(crate) type MoleculeGraph = UnGraph<AtomState, BondState>;

#[inline(always)]
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Collects specs and builds a [`Molecule`] from them.
///
/// This is the only stage that can be mutated, and it isn't meant to be shared between threads.
#[derive(Debug, Clone)]
pub struct MoleculeBuilder {
    atoms: Vec<AtomSpec>,
    bonds: Vec<BondSpec>,
    /// Assert internal consistency after a successful build
    pub validate: bool,
    /// Reject main-group atoms with more than a full duet/octet
    pub octet_rule: bool,
}
impl Default for MoleculeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
impl MoleculeBuilder {
    pub fn new() -> Self {
        Self {
            atoms: Vec::new(),
            bonds: Vec::new(),
            validate: cfg!(debug_assertions),
            octet_rule: false,
        }
    }
    pub fn from_specs(
        atoms: impl IntoIterator<Item = AtomSpec>,
        bonds: impl IntoIterator<Item = BondSpec>,
    ) -> Self {
        Self {
            atoms: atoms.into_iter().collect(),
            bonds: bonds.into_iter().collect(),
            ..Self::new()
        }
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
    pub fn with_octet_rule(mut self, octet_rule: bool) -> Self {
        self.octet_rule = octet_rule;
        self
    }
    pub fn set_validation(&mut self, validate: bool) -> &mut Self {
        self.validate = validate;
        self
    }
    pub fn set_octet_rule(&mut self, octet_rule: bool) -> &mut Self {
        self.octet_rule = octet_rule;
        self
    }

    /// Add an atom, returning the index it will have in the molecule
    pub fn add_atom(&mut self, atom: impl Into<AtomSpec>) -> usize {
        self.atoms.push(atom.into());
        self.atoms.len() - 1
    }
    pub fn add_bond(&mut self, bond: BondSpec) -> &mut Self {
        self.bonds.push(bond);
        self
    }
    pub fn atoms(&self) -> &[AtomSpec] {
        &self.atoms
    }
    pub fn bonds(&self) -> &[BondSpec] {
        &self.bonds
    }

    /// Register every atom, checking isotopes
    fn add_atoms(&self, graph: &mut MoleculeGraph) -> Result<(), MoleculeError> {
        for (idx, atom) in self.atoms.iter().enumerate() {
            let protons = atom.element.atomic_number();
            if let Some(isotope) = atom.isotope {
                if isotope < protons as u16 {
                    debug!(atom = idx, isotope, protons, "isotope lighter than element");
                    return Err(MoleculeError::InvalidIsotope {
                        atom: idx,
                        isotope,
                        protons,
                    });
                }
            }
            graph.add_node(AtomState::from(atom));
        }
        Ok(())
    }

    /// Register every bond, rejecting bad orders, self-bonds, dangling bonds, and duplicates
    fn add_bonds(
        &self,
        graph: &mut MoleculeGraph,
        edges: &mut AHashMap<(usize, usize), EdgeIndex>,
    ) -> Result<(), MoleculeError> {
        let order = graph.node_count();
        for (idx, bond) in self.bonds.iter().enumerate() {
            if !bond.order.is_valid() {
                debug!(bond = idx, order = bond.order.as_int(), "invalid bond order");
                return Err(MoleculeError::InvalidOrder {
                    bond: idx,
                    order: bond.order.as_int(),
                });
            }
            if bond.source == bond.target {
                debug!(bond = idx, atom = bond.source, "self bond");
                return Err(MoleculeError::SelfBond {
                    bond: idx,
                    atom: bond.source,
                });
            }
            if let Some(atom) = [bond.source, bond.target].into_iter().find(|&a| a >= order) {
                debug!(bond = idx, atom, order, "dangling bond");
                return Err(MoleculeError::DanglingBond {
                    bond: idx,
                    atom,
                    order,
                });
            }
            match edges.entry(bond.key()) {
                Entry::Occupied(e) => {
                    debug!(bond = idx, first = e.get().index(), "duplicate bond");
                    return Err(MoleculeError::DuplicateBond {
                        bond: idx,
                        first: e.get().index(),
                    });
                }
                Entry::Vacant(e) => {
                    e.insert(graph.add_edge(
                        NodeIndex::new(bond.source),
                        NodeIndex::new(bond.target),
                        BondState {
                            order: bond.order,
                            parity: bond.parity,
                        },
                    ));
                }
            }
        }
        Ok(())
    }

    /// Fill in nonbonding electrons, rejecting atoms that can't support their bonds or charge
    fn update_electrons(&self, graph: &mut MoleculeGraph) -> Result<(), MoleculeError> {
        for node in graph.node_indices() {
            let atom = graph[node];
            let bonded: u32 = graph
                .edges(node)
                .map(|e| e.weight().order.as_int() as u32)
                .sum();
            let used = bonded + atom.hydrogens as u32;
            let valence = atom.element.valence_electrons() as i16;
            // an extra electron from a negative charge can form a bond, a missing one can't
            let capacity = valence + (-(atom.charge as i16)).max(0);
            let available = valence - atom.charge as i16;
            trace!(id = node.index(), element = %atom.element, bonded, used, capacity, available, "checking atom");
            if used > capacity as u32 {
                debug!(atom = node.index(), used, capacity, "hypervalent");
                return Err(MoleculeError::Hypervalent {
                    atom: node.index(),
                    used,
                    capacity,
                });
            }
            if (used as i16) > available {
                debug!(atom = node.index(), charge = atom.charge, used, available, "over-ionized");
                return Err(MoleculeError::OverIonized {
                    atom: node.index(),
                    charge: atom.charge,
                });
            }
            // at most 16 valence electrons plus a charge of 128
            let electrons = (available as u32 - used) as u8;
            if self.octet_rule {
                if let Some(cap) = atom.element.shell_capacity() {
                    let shell = 2 * used + electrons as u32;
                    if shell > cap as u32 {
                        debug!(atom = node.index(), shell, cap, "shell overfilled");
                        return Err(if atom.charge < 0 {
                            MoleculeError::OverIonized {
                                atom: node.index(),
                                charge: atom.charge,
                            }
                        } else {
                            MoleculeError::Hypervalent {
                                atom: node.index(),
                                used,
                                capacity,
                            }
                        });
                    }
                }
            }
            graph[node].electrons = electrons;
        }
        Ok(())
    }

    /// Build the molecule. Any failure aborts the whole build.
    #[instrument(level = "debug", skip_all, fields(atoms = self.atoms.len(), bonds = self.bonds.len()))]
    pub fn build(&self) -> Result<Molecule, MoleculeError> {
        let mut graph = MoleculeGraph::with_capacity(self.atoms.len(), self.bonds.len());
        let mut edges = AHashMap::with_capacity(self.bonds.len());
        self.add_atoms(&mut graph)?;
        self.add_bonds(&mut graph, &mut edges)?;
        self.update_electrons(&mut graph)?;
        let mol = Molecule { graph, edges };
        if self.validate {
            mol.validate();
        }
        Ok(mol)
    }
}

/// A molecule whose atoms and bonds have all been checked.
///
/// Atoms are indexed by their position in the input. Nothing can mutate a `Molecule`, so it can
/// be freely shared between threads.
#[derive(Debug, Clone)]
pub struct Molecule {
    graph: MoleculeGraph,
    edges: AHashMap<(usize, usize), EdgeIndex>,
}
impl Molecule {
    /// Shorthand for building with the default options
    pub fn new(
        atoms: impl IntoIterator<Item = AtomSpec>,
        bonds: impl IntoIterator<Item = BondSpec>,
    ) -> Result<Self, MoleculeError> {
        MoleculeBuilder::from_specs(atoms, bonds).build()
    }

    /// Perform some checks on the molecule. Panics on failure (which should be impossible).
    #[instrument(level = "trace", skip_all)]
    fn validate(&self) {
        assert_eq!(self.edges.len(), self.graph.edge_count());
        for (&(a, b), &e) in &self.edges {
            assert!(a < b);
            assert_eq!(
                self.graph.edge_endpoints(e).map(|(s, t)| edge_key(s.index(), t.index())),
                Some((a, b))
            );
        }
        for node in self.graph.node_indices() {
            let idx = node.index();
            assert_eq!(
                self.graph.edges(node).count(),
                self.edges.keys().filter(|&&(a, b)| a == idx || b == idx).count()
            );
            let atom = &self.graph[node];
            let bonded: u32 = self
                .graph
                .edges(node)
                .map(|e| e.weight().order.as_int() as u32)
                .sum();
            assert!(
                (bonded + atom.hydrogens as u32) as i16 + atom.electrons as i16
                    == atom.element.valence_electrons() as i16 - atom.charge as i16
            );
        }
    }

    #[inline(always)]
    fn atom(&self, idx: usize) -> Result<&AtomState, AccessError> {
        self.graph
            .node_weight(NodeIndex::new(idx))
            .ok_or(AccessError::InvalidAtom(idx))
    }
    #[inline(always)]
    fn check_pair(&self, source: usize, target: usize) -> Result<(usize, usize), AccessError> {
        self.atom(source)?;
        self.atom(target)?;
        Ok(edge_key(source, target))
    }
    fn bond(&self, source: usize, target: usize) -> Result<Option<&BondState>, AccessError> {
        let key = self.check_pair(source, target)?;
        Ok(self.edges.get(&key).map(|&e| &self.graph[e]))
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
    /// Number of atoms
    pub fn order(&self) -> usize {
        self.graph.node_count()
    }
    /// Number of bonds
    pub fn size(&self) -> usize {
        self.graph.edge_count()
    }
    pub fn has_node(&self, idx: usize) -> bool {
        idx < self.order()
    }
    /// Atom indices, in input order
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = usize> {
        0..self.order()
    }
    /// Bonded pairs, lower index first, in the order the bonds were given
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .edge_references()
            .map(|e| edge_key(e.source().index(), e.target().index()))
    }

    /// Indices of bonded atoms, in ascending order. Implicit hydrogens aren't included.
    pub fn neighbors(&self, idx: usize) -> Result<SmallVec<usize, 4>, AccessError> {
        self.atom(idx)?;
        Ok(self
            .graph
            .neighbors(NodeIndex::new(idx))
            .map(|n| n.index())
            .sorted_unstable()
            .collect())
    }
    pub fn has_edge(&self, source: usize, target: usize) -> Result<bool, AccessError> {
        self.bond(source, target).map(|b| b.is_some())
    }
    /// Bonded atoms plus implicit hydrogens
    pub fn degree(&self, idx: usize) -> Result<usize, AccessError> {
        let atom = self.atom(idx)?;
        Ok(self.graph.edges(NodeIndex::new(idx)).count() + atom.hydrogens as usize)
    }
    /// Implicit hydrogens on the atom
    pub fn hydrogens(&self, idx: usize) -> Result<u8, AccessError> {
        self.atom(idx).map(|a| a.hydrogens)
    }
    pub fn element(&self, idx: usize) -> Result<Element, AccessError> {
        self.atom(idx).map(|a| a.element)
    }
    pub fn isotope(&self, idx: usize) -> Result<Option<u16>, AccessError> {
        self.atom(idx).map(|a| a.isotope)
    }
    /// Nonbonding electrons on the atom
    pub fn electrons(&self, idx: usize) -> Result<u8, AccessError> {
        self.atom(idx).map(|a| a.electrons)
    }
    pub fn charge(&self, idx: usize) -> Result<i8, AccessError> {
        self.atom(idx).map(|a| a.charge)
    }
    pub fn atom_parity(&self, idx: usize) -> Result<Option<Parity>, AccessError> {
        self.atom(idx).map(|a| a.parity)
    }
    /// Order of the bond between two atoms. Two atoms that exist but aren't bonded have a
    /// `Zero` bond between them.
    pub fn bond_order(&self, source: usize, target: usize) -> Result<BondOrder, AccessError> {
        self.bond(source, target)
            .map(|b| b.map_or(BondOrder::Zero, |b| b.order))
    }
    pub fn bond_parity(&self, source: usize, target: usize) -> Result<Option<Parity>, AccessError> {
        self.bond(source, target)?
            .map(|b| b.parity)
            .ok_or(AccessError::InvalidEdge(source, target))
    }
}
