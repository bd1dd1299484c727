use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(String);

/// Chemical elements recognised by the readers and descriptor tables.
///
/// Symbols outside this set (pseudo atoms such as `R#`, `*` or `LP`) are kept
/// on the atom as plain text with no element attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He,
    Li,
    Be,
    B,
    C,
    N,
    O,
    F,
    Ne,
    Na,
    Mg,
    Al,
    Si,
    P,
    S,
    Cl,
    Ar,
    K,
    Ca,
    Sc,
    Ti,
    V,
    Cr,
    Mn,
    Fe,
    Co,
    Ni,
    Cu,
    Zn,
    Ga,
    Ge,
    As,
    Se,
    Br,
    Kr,
    Rb,
    Sr,
    Y,
    Zr,
    Nb,
    Mo,
    Tc,
    Ru,
    Rh,
    Pd,
    Ag,
    Cd,
    In,
    Sn,
    Sb,
    Te,
    I,
    Xe = 54,
    Cs = 55,
    Ba = 56,
    W = 74,
    Os = 76,
    Ir = 77,
    Pt = 78,
    Au = 79,
    Hg = 80,
    Tl = 81,
    Pb = 82,
    Bi = 83,
}

impl Element {
    #[inline]
    pub fn atomic_number(&self) -> u8 {
        *self as u8
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::He => "He",
            Element::Li => "Li",
            Element::Be => "Be",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Ne => "Ne",
            Element::Na => "Na",
            Element::Mg => "Mg",
            Element::Al => "Al",
            Element::Si => "Si",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Ar => "Ar",
            Element::K => "K",
            Element::Ca => "Ca",
            Element::Sc => "Sc",
            Element::Ti => "Ti",
            Element::V => "V",
            Element::Cr => "Cr",
            Element::Mn => "Mn",
            Element::Fe => "Fe",
            Element::Co => "Co",
            Element::Ni => "Ni",
            Element::Cu => "Cu",
            Element::Zn => "Zn",
            Element::Ga => "Ga",
            Element::Ge => "Ge",
            Element::As => "As",
            Element::Se => "Se",
            Element::Br => "Br",
            Element::Kr => "Kr",
            Element::Rb => "Rb",
            Element::Sr => "Sr",
            Element::Y => "Y",
            Element::Zr => "Zr",
            Element::Nb => "Nb",
            Element::Mo => "Mo",
            Element::Tc => "Tc",
            Element::Ru => "Ru",
            Element::Rh => "Rh",
            Element::Pd => "Pd",
            Element::Ag => "Ag",
            Element::Cd => "Cd",
            Element::In => "In",
            Element::Sn => "Sn",
            Element::Sb => "Sb",
            Element::Te => "Te",
            Element::I => "I",
            Element::Xe => "Xe",
            Element::Cs => "Cs",
            Element::Ba => "Ba",
            Element::W => "W",
            Element::Os => "Os",
            Element::Ir => "Ir",
            Element::Pt => "Pt",
            Element::Au => "Au",
            Element::Hg => "Hg",
            Element::Tl => "Tl",
            Element::Pb => "Pb",
            Element::Bi => "Bi",
        }
    }

    /// Number of valence electrons of the neutral atom.
    ///
    /// Transition metals report their combined `ns + (n-1)d` electron count.
    pub fn valence_electrons(&self) -> u8 {
        match self {
            Element::H | Element::Li | Element::Na | Element::K | Element::Rb | Element::Cs => 1,
            Element::He | Element::Be | Element::Mg | Element::Ca | Element::Sr | Element::Ba => 2,
            Element::B | Element::Al | Element::Ga | Element::In | Element::Tl => 3,
            Element::C | Element::Si | Element::Ge | Element::Sn | Element::Pb => 4,
            Element::N | Element::P | Element::As | Element::Sb | Element::Bi => 5,
            Element::O | Element::S | Element::Se | Element::Te => 6,
            Element::F | Element::Cl | Element::Br | Element::I => 7,
            Element::Ne | Element::Ar | Element::Kr | Element::Xe => 8,
            Element::Sc | Element::Y => 3,
            Element::Ti | Element::Zr => 4,
            Element::V | Element::Nb => 5,
            Element::Cr | Element::Mo | Element::W => 6,
            Element::Mn | Element::Tc => 7,
            Element::Fe | Element::Ru | Element::Os => 8,
            Element::Co | Element::Rh | Element::Ir => 9,
            Element::Ni | Element::Pd | Element::Pt => 10,
            Element::Cu | Element::Ag | Element::Au => 11,
            Element::Zn | Element::Cd | Element::Hg => 12,
        }
    }

    /// Pauling electronegativity, absent for the noble gases without a
    /// tabulated value.
    pub fn pauling_electronegativity(&self) -> Option<f64> {
        let value = match self {
            Element::H => 2.20,
            Element::Li => 0.98,
            Element::Be => 1.57,
            Element::B => 2.04,
            Element::C => 2.55,
            Element::N => 3.04,
            Element::O => 3.44,
            Element::F => 3.98,
            Element::Na => 0.93,
            Element::Mg => 1.31,
            Element::Al => 1.61,
            Element::Si => 1.90,
            Element::P => 2.19,
            Element::S => 2.58,
            Element::Cl => 3.16,
            Element::K => 0.82,
            Element::Ca => 1.00,
            Element::Sc => 1.36,
            Element::Ti => 1.54,
            Element::V => 1.63,
            Element::Cr => 1.66,
            Element::Mn => 1.55,
            Element::Fe => 1.83,
            Element::Co => 1.88,
            Element::Ni => 1.91,
            Element::Cu => 1.90,
            Element::Zn => 1.65,
            Element::Ga => 1.81,
            Element::Ge => 2.01,
            Element::As => 2.18,
            Element::Se => 2.55,
            Element::Br => 2.96,
            Element::Kr => 3.00,
            Element::Rb => 0.82,
            Element::Sr => 0.95,
            Element::Y => 1.22,
            Element::Zr => 1.33,
            Element::Nb => 1.60,
            Element::Mo => 2.16,
            Element::Tc => 1.90,
            Element::Ru => 2.20,
            Element::Rh => 2.28,
            Element::Pd => 2.20,
            Element::Ag => 1.93,
            Element::Cd => 1.69,
            Element::In => 1.78,
            Element::Sn => 1.96,
            Element::Sb => 2.05,
            Element::Te => 2.10,
            Element::I => 2.66,
            Element::Xe => 2.60,
            Element::Cs => 0.79,
            Element::Ba => 0.89,
            Element::W => 2.36,
            Element::Os => 2.20,
            Element::Ir => 2.20,
            Element::Pt => 2.28,
            Element::Au => 2.54,
            Element::Hg => 2.00,
            Element::Tl => 1.62,
            Element::Pb => 2.33,
            Element::Bi => 2.02,
            Element::He | Element::Ne | Element::Ar => return None,
        };
        Some(value)
    }

    #[inline]
    pub fn is_hydrogen(&self) -> bool {
        matches!(self, Element::H)
    }

    #[inline]
    pub fn is_halogen(&self) -> bool {
        matches!(self, Element::F | Element::Cl | Element::Br | Element::I)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    /// Parses an element symbol, tolerating all-caps or all-lowercase input
    /// (`CL`, `cl` and `Cl` are equivalent). Deuterium and tritium map to
    /// hydrogen.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let normalized = match chars.next() {
            Some(first) => {
                let mut out = first.to_ascii_uppercase().to_string();
                out.push_str(&chars.as_str().to_ascii_lowercase());
                out
            }
            None => return Err(ParseElementError(s.to_string())),
        };

        let element = match normalized.as_str() {
            "H" | "D" | "T" => Element::H,
            "He" => Element::He,
            "Li" => Element::Li,
            "Be" => Element::Be,
            "B" => Element::B,
            "C" => Element::C,
            "N" => Element::N,
            "O" => Element::O,
            "F" => Element::F,
            "Ne" => Element::Ne,
            "Na" => Element::Na,
            "Mg" => Element::Mg,
            "Al" => Element::Al,
            "Si" => Element::Si,
            "P" => Element::P,
            "S" => Element::S,
            "Cl" => Element::Cl,
            "Ar" => Element::Ar,
            "K" => Element::K,
            "Ca" => Element::Ca,
            "Sc" => Element::Sc,
            "Ti" => Element::Ti,
            "V" => Element::V,
            "Cr" => Element::Cr,
            "Mn" => Element::Mn,
            "Fe" => Element::Fe,
            "Co" => Element::Co,
            "Ni" => Element::Ni,
            "Cu" => Element::Cu,
            "Zn" => Element::Zn,
            "Ga" => Element::Ga,
            "Ge" => Element::Ge,
            "As" => Element::As,
            "Se" => Element::Se,
            "Br" => Element::Br,
            "Kr" => Element::Kr,
            "Rb" => Element::Rb,
            "Sr" => Element::Sr,
            "Y" => Element::Y,
            "Zr" => Element::Zr,
            "Nb" => Element::Nb,
            "Mo" => Element::Mo,
            "Tc" => Element::Tc,
            "Ru" => Element::Ru,
            "Rh" => Element::Rh,
            "Pd" => Element::Pd,
            "Ag" => Element::Ag,
            "Cd" => Element::Cd,
            "In" => Element::In,
            "Sn" => Element::Sn,
            "Sb" => Element::Sb,
            "Te" => Element::Te,
            "I" => Element::I,
            "Xe" => Element::Xe,
            "Cs" => Element::Cs,
            "Ba" => Element::Ba,
            "W" => Element::W,
            "Os" => Element::Os,
            "Ir" => Element::Ir,
            "Pt" => Element::Pt,
            "Au" => Element::Au,
            "Hg" => Element::Hg,
            "Tl" => Element::Tl,
            "Pb" => Element::Pb,
            "Bi" => Element::Bi,
            _ => return Err(ParseElementError(s.to_string())),
        };
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_symbols_case_insensitively() {
        assert_eq!("C".parse::<Element>(), Ok(Element::C));
        assert_eq!("CL".parse::<Element>(), Ok(Element::Cl));
        assert_eq!("cl".parse::<Element>(), Ok(Element::Cl));
        assert_eq!(" Br ".parse::<Element>(), Ok(Element::Br));
    }

    #[test]
    fn isotopes_of_hydrogen_map_to_hydrogen() {
        assert_eq!("D".parse::<Element>(), Ok(Element::H));
        assert_eq!("T".parse::<Element>(), Ok(Element::H));
    }

    #[test]
    fn rejects_pseudo_atoms_and_empty_input() {
        assert!("R#".parse::<Element>().is_err());
        assert!("*".parse::<Element>().is_err());
        assert!("LP".parse::<Element>().is_err());
        assert!("".parse::<Element>().is_err());
    }

    #[test]
    fn symbol_round_trips_through_from_str() {
        for element in [Element::H, Element::C, Element::Cl, Element::Fe, Element::Bi] {
            assert_eq!(element.symbol().parse::<Element>(), Ok(element));
        }
    }

    #[test]
    fn valence_electrons_follow_main_groups() {
        assert_eq!(Element::H.valence_electrons(), 1);
        assert_eq!(Element::C.valence_electrons(), 4);
        assert_eq!(Element::N.valence_electrons(), 5);
        assert_eq!(Element::O.valence_electrons(), 6);
        assert_eq!(Element::Cl.valence_electrons(), 7);
        assert_eq!(Element::Zn.valence_electrons(), 12);
    }

    #[test]
    fn atomic_numbers_match_discriminants() {
        assert_eq!(Element::H.atomic_number(), 1);
        assert_eq!(Element::Xe.atomic_number(), 54);
        assert_eq!(Element::Pt.atomic_number(), 78);
    }
}
