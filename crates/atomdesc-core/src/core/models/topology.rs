use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BondOrder {
    #[default]
    Single = 1,
    Double = 2,
    Triple = 3,
    Aromatic = 4,
}

impl BondOrder {
    /// Maps a CTfile bond type code (1-4) to a bond order.
    pub fn from_ctfile_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            3 => Some(Self::Triple),
            4 => Some(Self::Aromatic),
            _ => None,
        }
    }

    #[inline]
    pub fn ctfile_code(self) -> u8 {
        self as u8
    }

    /// Electron pairs shared by the bond; aromatic bonds count as 1.5.
    pub fn valence_contribution(self) -> f64 {
        match self {
            Self::Single => 1.0,
            Self::Double => 2.0,
            Self::Triple => 3.0,
            Self::Aromatic => 1.5,
        }
    }

    /// Whether the bond carries π electrons.
    #[inline]
    pub fn is_multiple(self) -> bool {
        !matches!(self, Self::Single)
    }
}

#[derive(Debug, Error)]
#[error("Invalid bond order string")]
pub struct ParseBondOrderError;

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "s" | "single" => Ok(Self::Single),
            "2" | "d" | "double" => Ok(Self::Double),
            "3" | "t" | "triple" => Ok(Self::Triple),
            "4" | "ar" | "aromatic" => Ok(Self::Aromatic),
            _ => Err(ParseBondOrderError),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
                Self::Aromatic => "Aromatic",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: usize,         // Lower atom index
    pub j: usize,         // Higher atom index
    pub order: BondOrder, // Bond order (e.g., single, double, etc.)
}

impl Bond {
    pub fn new(idx1: usize, idx2: usize, order: BondOrder) -> Self {
        Self {
            i: idx1.min(idx2),
            j: idx1.max(idx2),
            order,
        }
    }

    pub fn contains(&self, atom: usize) -> bool {
        self.i == atom || self.j == atom
    }

    /// Returns the atom on the other end of the bond, if `atom` is part of it.
    pub fn partner(&self, atom: usize) -> Option<usize> {
        if self.i == atom {
            Some(self.j)
        } else if self.j == atom {
            Some(self.i)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_order_from_str_parses_valid_strings() {
        assert_eq!("1".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("single".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("S".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("2".parse::<BondOrder>().unwrap(), BondOrder::Double);
        assert_eq!("D".parse::<BondOrder>().unwrap(), BondOrder::Double);
        assert_eq!("triple".parse::<BondOrder>().unwrap(), BondOrder::Triple);
        assert_eq!("4".parse::<BondOrder>().unwrap(), BondOrder::Aromatic);
        assert_eq!(
            "aromatic".parse::<BondOrder>().unwrap(),
            BondOrder::Aromatic
        );
    }

    #[test]
    fn bond_order_from_str_rejects_invalid_strings() {
        assert!("".parse::<BondOrder>().is_err());
        assert!("quadruple".parse::<BondOrder>().is_err());
        assert!("0".parse::<BondOrder>().is_err());
    }

    #[test]
    fn ctfile_codes_map_both_ways() {
        for code in 1..=4 {
            let order = BondOrder::from_ctfile_code(code).unwrap();
            assert_eq!(order.ctfile_code(), code);
        }
        assert_eq!(BondOrder::from_ctfile_code(0), None);
        assert_eq!(BondOrder::from_ctfile_code(8), None);
    }

    #[test]
    fn bond_order_default_is_single() {
        assert_eq!(BondOrder::default(), BondOrder::Single);
        assert!(!BondOrder::Single.is_multiple());
        assert!(BondOrder::Aromatic.is_multiple());
    }

    #[test]
    fn bond_new_normalizes_index_order() {
        let bond = Bond::new(5, 2, BondOrder::Double);
        assert_eq!((bond.i, bond.j), (2, 5));
        assert_eq!(bond.order, BondOrder::Double);
    }

    #[test]
    fn bond_partner_returns_other_end() {
        let bond = Bond::new(1, 3, BondOrder::Single);
        assert!(bond.contains(1));
        assert!(bond.contains(3));
        assert!(!bond.contains(2));
        assert_eq!(bond.partner(1), Some(3));
        assert_eq!(bond.partner(3), Some(1));
        assert_eq!(bond.partner(2), None);
    }
}
