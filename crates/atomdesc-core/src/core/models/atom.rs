use super::element::Element;
use nalgebra::Point3;

const HYDROGEN_SYMBOL: &str = "H";

/// Represents a single atom of a molecule as read from a structure file.
///
/// The symbol is kept separately from the parsed [`Element`] so that pseudo
/// atoms (query atoms, R-groups, lone pairs) survive reading even though no
/// element-dependent descriptor can be computed for them.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The element symbol as it appears in output (e.g., "C", "Cl", "R#").
    pub symbol: String,
    /// The parsed element, `None` for pseudo atoms.
    pub element: Option<Element>,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The formal charge in elementary charge units.
    pub formal_charge: i8,
}

impl Atom {
    /// Creates a neutral atom of a known element.
    pub fn new(element: Element, position: Point3<f64>) -> Self {
        Self {
            symbol: element.symbol().to_string(),
            element: Some(element),
            position,
            formal_charge: 0,
        }
    }

    /// Creates an atom from a raw symbol, resolving the element when possible.
    ///
    /// Isotope symbols `D` and `T` are normalised to `H` so that hydrogen
    /// filtering treats them like any other hydrogen.
    pub fn from_symbol(symbol: &str, position: Point3<f64>) -> Self {
        let element = symbol.parse::<Element>().ok();
        let symbol = match element {
            Some(e) => e.symbol().to_string(),
            None => symbol.trim().to_string(),
        };
        Self {
            symbol,
            element,
            position,
            formal_charge: 0,
        }
    }

    pub fn with_formal_charge(mut self, charge: i8) -> Self {
        self.formal_charge = charge;
        self
    }

    #[inline]
    pub fn is_hydrogen(&self) -> bool {
        self.symbol == HYDROGEN_SYMBOL
    }
}
