/// Halogen isotope patterns for mass spectra
///
/// The M/M+2/M+4 ratios are hardcoded natural-abundance constants
/// (³⁵Cl:³⁷Cl ≈ 3:1, ⁷⁹Br:⁸¹Br ≈ 1:1), not computed chemistry. The table
/// covers the substitution patterns taught in the course and does not
/// generalize to arbitrary halogen counts.

use serde::{Deserialize, Serialize};

use crate::data::spectrum::{Peak, PeakClass};

/// Halogen substitution selector for the isotope tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HalogenTag {
    None,
    Cl,
    Br,
    Cl2,
    Br2,
}

impl HalogenTag {
    pub const ALL: [HalogenTag; 5] = [
        HalogenTag::None,
        HalogenTag::Cl,
        HalogenTag::Br,
        HalogenTag::Cl2,
        HalogenTag::Br2,
    ];

    /// (mass offset from M, relative intensity) per isotopologue
    fn offsets(&self) -> &'static [(f64, f64)] {
        match self {
            HalogenTag::None => &[(0.0, 100.0)],
            HalogenTag::Cl => &[(0.0, 100.0), (2.0, 33.0)],
            HalogenTag::Br => &[(0.0, 100.0), (2.0, 100.0)],
            HalogenTag::Cl2 => &[(0.0, 100.0), (2.0, 67.0), (4.0, 11.0)],
            HalogenTag::Br2 => &[(0.0, 50.0), (2.0, 100.0), (4.0, 50.0)],
        }
    }
}

impl std::fmt::Display for HalogenTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HalogenTag::None => write!(f, "No halogen"),
            HalogenTag::Cl => write!(f, "1 × Cl"),
            HalogenTag::Br => write!(f, "1 × Br"),
            HalogenTag::Cl2 => write!(f, "2 × Cl"),
            HalogenTag::Br2 => write!(f, "2 × Br"),
        }
    }
}

/// Generate the isotope cluster for a molecular ion of the given nominal
/// mass. The M peak is classified as the molecular ion; the heavier
/// isotopologues get "M+2"/"M+4" labels. Deterministic, infallible.
pub fn generate_pattern(nominal_mass: f64, halogen: HalogenTag) -> Vec<Peak> {
    halogen
        .offsets()
        .iter()
        .map(|&(offset, intensity)| {
            if offset == 0.0 {
                let mut p = Peak::with_class(nominal_mass, intensity, PeakClass::MolecularIon);
                p.label = Some("M⁺".to_string());
                p
            } else {
                Peak::with_label(
                    nominal_mass + offset,
                    intensity,
                    &format!("M+{:.0}", offset),
                )
            }
        })
        .collect()
}

/// Default proximity threshold below which an explicit and a generated
/// peak count as the same peak, in mass units. Matches the ~1 u nominal
/// resolution of the teaching spectra; other domains should pass their own.
pub const DEFAULT_MERGE_TOLERANCE: f64 = 0.5;

/// Merge caller-supplied experimental peaks with a generated isotope
/// pattern. A generated peak within `tolerance` of an explicit peak is
/// suppressed (the explicit one wins). Each explicit peak suppresses at
/// most one generated peak, first match in generated order; a second
/// generated peak near the same explicit peak is kept. Result is sorted
/// ascending by position.
pub fn merge_peaks(explicit: &[Peak], generated: Vec<Peak>, tolerance: f64) -> Vec<Peak> {
    let mut spent = vec![false; explicit.len()];
    let mut merged: Vec<Peak> = explicit.to_vec();

    for gen in generated {
        let duplicate = explicit.iter().enumerate().find(|(i, exp)| {
            !spent[*i] && (exp.position - gen.position).abs() <= tolerance
        });
        match duplicate {
            Some((i, _)) => spent[i] = true,
            None => merged.push(gen),
        }
    }

    merged.sort_by(|a, b| a.position.partial_cmp(&b.position).unwrap());
    merged
}
