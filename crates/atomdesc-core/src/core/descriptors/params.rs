use crate::core::models::element::Element;
use crate::core::typing::hybridization::Hybridization;
use phf::{Map, phf_map};

/// Gasteiger-Marsili sigma parameters `[a, b, c]` for `chi = a + b*q + c*q^2`.
pub static SIGMA_PARAMETERS: Map<&'static str, [f64; 3]> = phf_map! {
    "H" => [7.17, 6.24, -0.56],
    "C.sp3" => [7.98, 9.18, 1.88],
    "C.sp2" => [8.79, 9.32, 1.51],
    "C.sp" => [10.39, 9.45, 0.73],
    "N.sp3" => [11.54, 10.82, 1.36],
    "N.sp2" => [12.87, 11.15, 0.85],
    "N.sp" => [15.68, 11.70, -0.27],
    "O.sp3" => [14.18, 12.92, 1.39],
    "O.sp2" => [17.07, 13.79, 0.47],
    "F" => [14.66, 13.85, 2.31],
    "Cl" => [11.00, 9.69, 1.35],
    "Br" => [10.08, 8.47, 1.16],
    "I" => [9.90, 7.96, 0.96],
    "S" => [10.14, 9.13, 1.38],
    "P" => [8.90, 8.24, 0.96],
};

/// Pi-orbital electronegativity parameters `[a, b, c]`.
pub static PI_PARAMETERS: Map<&'static str, [f64; 3]> = phf_map! {
    "C" => [5.60, 8.93, 2.94],
    "N" => [7.95, 9.73, 2.67],
    "O" => [8.91, 10.16, 1.27],
};

/// Miller atomic hybrid polarizabilities in cubic Angstroms.
pub static HYBRID_POLARIZABILITIES: Map<&'static str, f64> = phf_map! {
    "H" => 0.387,
    "C.sp3" => 1.064,
    "C.sp2" => 1.382,
    "C.sp" => 1.283,
    "N.sp3" => 1.094,
    "N.sp2" => 1.030,
    "N.sp" => 0.956,
    "O.sp3" => 0.664,
    "O.sp2" => 0.460,
    "S" => 3.0,
    "F" => 0.296,
    "Cl" => 2.315,
    "Br" => 3.013,
    "I" => 5.415,
    "P" => 1.538,
};

/// Bond charge increments, keyed `<first><bond><second>` with SMILES bond
/// symbols; the value is the charge received by the first atom.
pub static BOND_CHARGE_INCREMENTS: Map<&'static str, f64> = phf_map! {
    "C-H" => 0.0,
    "O-H" => -0.40,
    "N-H" => -0.36,
    "S-H" => -0.23,
    "C-C" => 0.0,
    "C=C" => 0.0,
    "C:C" => 0.0,
    "C-O" => 0.28,
    "C=O" => 0.57,
    "C-N" => 0.27,
    "C=N" => 0.36,
    "C:N" => 0.16,
    "C#N" => 0.43,
    "C-S" => 0.08,
    "C-F" => 0.50,
    "C-Cl" => 0.29,
    "C-Br" => 0.23,
    "C-I" => 0.19,
};

/// Scale applied to the Pauling electronegativity difference when no bond
/// charge increment is tabulated.
pub const FALLBACK_INCREMENT_SCALE: f64 = 0.3;

fn suffix(hybridization: Hybridization) -> &'static str {
    match hybridization {
        Hybridization::Sp1 => "sp",
        Hybridization::Sp2 => "sp2",
        _ => "sp3",
    }
}

/// Looks up a per-element parameter, preferring the hybridization-specific
/// entry (`C.sp2`) over the element-wide one (`Cl`).
pub fn lookup<T: Copy>(
    table: &Map<&'static str, T>,
    element: Element,
    hybridization: Option<Hybridization>,
) -> Option<T> {
    if let Some(h) = hybridization {
        let key = format!("{}.{}", element.symbol(), suffix(h));
        if let Some(value) = table.get(key.as_str()) {
            return Some(*value);
        }
    }
    table.get(element.symbol()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hybridization_specific_entries_win() {
        let sp2 = lookup(&SIGMA_PARAMETERS, Element::C, Some(Hybridization::Sp2));
        assert_eq!(sp2, Some([8.79, 9.32, 1.51]));
        let planar = lookup(&SIGMA_PARAMETERS, Element::N, Some(Hybridization::Planar3));
        assert_eq!(planar, Some([11.54, 10.82, 1.36]));
    }

    #[test]
    fn element_wide_entries_are_the_fallback() {
        assert_eq!(
            lookup(&HYBRID_POLARIZABILITIES, Element::Cl, Some(Hybridization::Sp3)),
            Some(2.315)
        );
        assert_eq!(lookup(&HYBRID_POLARIZABILITIES, Element::H, None), Some(0.387));
        assert_eq!(lookup(&SIGMA_PARAMETERS, Element::Fe, Some(Hybridization::Sp3)), None);
    }
}
