//! This file is pretty much a periodic table

use ElemGroup::*;

/// Element group on the periodic table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElemGroup {
    /// Alkali metal
    Alkali,
    /// Alkaline earth metal
    AlkEar,
    /// Transition metal
    Trans,
    /// Post-transition metal
    Poor,
    /// Metalloid
    Metoid,
    /// Nonmetal
    Nonmet,
    /// Halogen
    Halogn,
    /// Noble gas
    Noble,
    /// Rare earth
    RarEar,
}
impl ElemGroup {
    /// Whether this group obeys the octet (or duet) rule in the minimal valence model.
    pub const fn is_main_group(self) -> bool {
        !matches!(self, Trans | RarEar)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AtomData {
    pub name: &'static str,
    pub sym: &'static str,
    /// Electrons outside the noble-gas core of a neutral, unbonded atom
    pub valence: u8,
    pub group: ElemGroup,
}
impl AtomData {
    pub const fn new(name: &'static str, sym: &'static str, valence: u8, group: ElemGroup) -> Self {
        Self {
            name,
            sym,
            valence,
            group,
        }
    }
}

/// Highest atomic number in the table
pub const MAX_ATOMIC_NUMBER: u8 = 118;

/// All of the data, just index the array by the atomic number. Index 0 is a placeholder and is
/// never handed out as an element.
pub static ATOM_DATA: &[AtomData] = &[
    AtomData::new("unknown",      "R",  0, Nonmet),
    AtomData::new("hydrogen",     "H",  1, Nonmet),
    AtomData::new("helium",       "He", 2, Noble ),
    AtomData::new("lithium",      "Li", 1, Alkali),
    AtomData::new("beryllium",    "Be", 2, AlkEar),
    AtomData::new("boron",        "B",  3, Metoid),
    AtomData::new("carbon",       "C",  4, Nonmet),
    AtomData::new("nitrogen",     "N",  5, Nonmet),
    AtomData::new("oxygen",       "O",  6, Nonmet),
    AtomData::new("fluorine",     "F",  7, Halogn),
    AtomData::new("neon",         "Ne", 8, Noble ),
    AtomData::new("sodium",       "Na", 1, Alkali),
    AtomData::new("magnesium",    "Mg", 2, AlkEar),
    AtomData::new("aluminum",     "Al", 3, Poor  ),
    AtomData::new("silicon",      "Si", 4, Metoid),
    AtomData::new("phosphorus",   "P",  5, Nonmet),
    AtomData::new("sulfur",       "S",  6, Nonmet),
    AtomData::new("chlorine",     "Cl", 7, Halogn),
    AtomData::new("argon",        "Ar", 8, Noble ),
    AtomData::new("potassium",    "K",  1, Alkali),
    AtomData::new("calcium",      "Ca", 2, AlkEar),
    AtomData::new("scandium",     "Sc", 3, Trans ),
    AtomData::new("titanium",     "Ti", 4, Trans ),
    AtomData::new("vanadium",     "V",  5, Trans ),
    AtomData::new("chromium",     "Cr", 6, Trans ),
    AtomData::new("manganese",    "Mn", 7, Trans ),
    AtomData::new("iron",         "Fe", 8, Trans ),
    AtomData::new("cobalt",       "Co", 9, Trans ),
    AtomData::new("nickel",       "Ni",10, Trans ),
    AtomData::new("copper",       "Cu",11, Trans ),
    AtomData::new("zinc",         "Zn",12, Trans ),
    AtomData::new("gallium",      "Ga", 3, Poor  ),
    AtomData::new("germanium",    "Ge", 4, Metoid),
    AtomData::new("arsenic",      "As", 5, Metoid),
    AtomData::new("selenium",     "Se", 6, Nonmet),
    AtomData::new("bromine",      "Br", 7, Halogn),
    AtomData::new("krypton",      "Kr", 8, Noble ),
    AtomData::new("rubidium",     "Rb", 1, Alkali),
    AtomData::new("strontium",    "Sr", 2, AlkEar),
    AtomData::new("yttrium",      "Y",  3, Trans ),
    AtomData::new("zirconium",    "Zr", 4, Trans ),
    AtomData::new("niobium",      "Nb", 5, Trans ),
    AtomData::new("molybdenum",   "Mo", 6, Trans ),
    AtomData::new("technetium",   "Tc", 7, Trans ),
    AtomData::new("ruthenium",    "Ru", 8, Trans ),
    AtomData::new("rhodium",      "Rh", 9, Trans ),
    AtomData::new("palladium",    "Pd",10, Trans ),
    AtomData::new("silver",       "Ag",11, Trans ),
    AtomData::new("cadmium",      "Cd",12, Trans ),
    AtomData::new("indium",       "In", 3, Poor  ),
    AtomData::new("tin",          "Sn", 4, Poor  ),
    AtomData::new("antimony",     "Sb", 5, Metoid),
    AtomData::new("tellurium",    "Te", 6, Metoid),
    AtomData::new("iodine",       "I",  7, Halogn),
    AtomData::new("xenon",        "Xe", 8, Noble ),
    AtomData::new("cesium",       "Cs", 1, Alkali),
    AtomData::new("barium",       "Ba", 2, AlkEar),
    AtomData::new("lanthanum",    "La", 3, RarEar),
    AtomData::new("cerium",       "Ce", 4, RarEar),
    AtomData::new("praseodymium", "Pr", 5, RarEar),
    AtomData::new("neodymium",    "Nd", 6, RarEar),
    AtomData::new("prometheum",   "Pm", 7, RarEar),
    AtomData::new("samarium",     "Sm", 8, RarEar),
    AtomData::new("europium",     "Eu", 9, RarEar),
    AtomData::new("gadolinium",   "Gd",10, RarEar),
    AtomData::new("terbium",      "Tb",11, RarEar),
    AtomData::new("dysprosium",   "Dy",12, RarEar),
    AtomData::new("holmium",      "Ho",13, RarEar),
    AtomData::new("erbium",       "Er",14, RarEar),
    AtomData::new("thulium",      "Tm",15, RarEar),
    AtomData::new("ytterbium",    "Yb",16, RarEar),
    AtomData::new("lutetium",     "Lu", 3, RarEar),
    AtomData::new("hafnium",      "Hf", 4, Trans ),
    AtomData::new("tantalum",     "Ta", 5, Trans ),
    AtomData::new("tungsten",     "W",  6, Trans ),
    AtomData::new("rhenium",      "Re", 7, Trans ),
    AtomData::new("osmium",       "Os", 8, Trans ),
    AtomData::new("iridium",      "Ir", 9, Trans ),
    AtomData::new("platinum",     "Pt",10, Trans ),
    AtomData::new("gold",         "Au",11, Trans ),
    AtomData::new("mercury",      "Hg",12, Trans ),
    AtomData::new("thallium",     "Tl", 3, Poor  ),
    AtomData::new("lead",         "Pb", 4, Poor  ),
    AtomData::new("bismuth",      "Bi", 5, Poor  ),
    AtomData::new("polonium",     "Po", 6, Poor  ),
    AtomData::new("astatine",     "At", 7, Halogn),
    AtomData::new("radon",        "Rn", 8, Noble ),
    AtomData::new("francium",     "Fr", 1, Alkali),
    AtomData::new("radium",       "Ra", 2, AlkEar),
    AtomData::new("actinium",     "Ac", 3, RarEar),
    AtomData::new("thorium",      "Th", 4, RarEar),
    AtomData::new("protactinium", "Pa", 5, RarEar),
    AtomData::new("uranium",      "U",  6, RarEar),
    AtomData::new("neptunium",    "Np", 7, RarEar),
    AtomData::new("plutonium",    "Pu", 8, RarEar),
    AtomData::new("americium",    "Am", 9, RarEar),
    AtomData::new("curium",       "Cm",10, RarEar),
    AtomData::new("berkelium",    "Bk",11, RarEar),
    AtomData::new("californium",  "Cf",12, RarEar),
    AtomData::new("einsteinium",  "Es",13, RarEar),
    AtomData::new("fermium",      "Fm",14, RarEar),
    AtomData::new("mendelvium",   "Md",15, RarEar),
    AtomData::new("nobelium",     "No",16, RarEar),
    AtomData::new("lawrencium",   "Lr", 3, RarEar),
    AtomData::new("rutherfordium","Rf", 4, Trans ),
    AtomData::new("dubnium",      "Db", 5, Trans ),
    AtomData::new("seaborgium",   "Sg", 6, Trans ),
    AtomData::new("bohrium",      "Bh", 7, Trans ),
    AtomData::new("hassium",      "Hs", 8, Trans ),
    AtomData::new("meitnerium",   "Mt", 9, Trans ),
    AtomData::new("darmstadtium", "Ds",10, Trans ),
    AtomData::new("roentgenium",  "Rg",11, Trans ),
    AtomData::new("copernicium",  "Cn",12, Trans ),
    AtomData::new("nihonium",     "Nh", 3, Poor  ),
    AtomData::new("flerovium",    "Fl", 4, Poor  ),
    AtomData::new("moscovium",    "Mc", 5, Poor  ),
    AtomData::new("livermorium",  "Lv", 6, Poor  ),
    AtomData::new("tenessine",    "Ts", 7, Halogn),
    AtomData::new("oganesson",    "Og", 8, Noble ),
];
