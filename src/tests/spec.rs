use crate::prelude::*;

#[test]
fn constructor_variants() {
    let variants = [
        AtomSpec::new("C"),
        AtomSpec::new(6),
        AtomSpec::new(6u8),
        AtomSpec::new(Element::C),
        AtomSpec::new(Element::from_symbol("C").unwrap()),
    ];
    for atom in variants {
        assert_eq!(atom.map(|a| a.element), Ok(Element::C));
    }
    assert!(AtomSpec::new("c").is_err());
    assert!(AtomSpec::new(0).is_err());
}

#[test]
fn defaults() {
    let atom = AtomSpec::new(5).unwrap();
    assert_eq!(atom.hydrogens, 0);
    assert_eq!(atom.charge, 0);
    assert_eq!(atom.isotope, None);
    assert_eq!(atom.parity, None);
}

#[test]
fn normal_atoms() {
    let methane = AtomSpec::of(Element::C).with_hydrogens(4).with_isotope(12);
    assert_eq!(methane.hydrogens, 4);
    assert_eq!(methane.isotope, Some(12));
    let cation = AtomSpec::of(Element::C).with_hydrogens(3).with_charge(1);
    assert_eq!(cation.charge, 1);
    for (given, expected) in [(true, Parity::Positive), (false, Parity::Negative)] {
        let atom = AtomSpec::of(Element::C).with_hydrogens(1).with_parity(given);
        assert_eq!(atom.parity, Some(expected));
        let atom = AtomSpec::of(Element::C).with_parity(expected);
        assert_eq!(atom.parity, Some(expected));
    }
}

#[test]
fn bonds() {
    for n in 1..=3 {
        let bond = BondSpec::new(0, 1, n).unwrap();
        assert_eq!(bond.order.as_int() as i32, n);
        assert_eq!(bond.order, BondOrder::from_int(n as _).unwrap());
    }
    let bond = BondSpec::new(4, 8, BondOrder::Double).unwrap();
    assert_eq!(bond.order, BondOrder::Double);
    assert_eq!(bond.parity, None);
    assert_eq!(bond.with_parity(true).parity, Some(Parity::Positive));
}

#[test]
fn quadruple_bond() {
    assert_eq!(BondSpec::new(0, 1, 4), Err(OrderError::OutOfRange(4)));
    assert!(BondOrder::from_int(4).is_err());
}

#[test]
fn bond_key() {
    assert_eq!(BondSpec::of(3, 1, BondOrder::Single).key(), (1, 3));
    assert_eq!(BondSpec::of(1, 3, BondOrder::Single).key(), (1, 3));
}

#[test]
fn format() {
    let atom = AtomSpec::of(Element::C)
        .with_isotope(13)
        .with_hydrogens(3)
        .with_charge(-1);
    assert_eq!(atom.to_string(), "¹³CH₃⁻");
    assert_eq!(format!("{atom:#}"), "carbon-13 with 3 hydrogens, charge -1");
    let atom = AtomSpec::of(Element::O).with_hydrogens(1).with_parity(true);
    assert_eq!(atom.to_string(), "OH (clockwise)");
    let bond = BondSpec::of(1, 2, BondOrder::Double).with_parity(false);
    assert_eq!(bond.to_string(), "double bond 1-2 (anti)");
}
