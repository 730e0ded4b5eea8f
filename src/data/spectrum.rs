use serde::{Deserialize, Serialize};

/// Conventional role of a peak in a spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeakClass {
    /// M⁺ — the unfragmented ionized molecule
    MolecularIon,
    /// The most intense peak, normalized to 100%
    BasePeak,
    Fragment,
    None,
}

impl Default for PeakClass {
    fn default() -> Self {
        PeakClass::None
    }
}

impl std::fmt::Display for PeakClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeakClass::MolecularIon => write!(f, "Molecular ion (M⁺)"),
            PeakClass::BasePeak => write!(f, "Base peak"),
            PeakClass::Fragment => write!(f, "Fragment"),
            PeakClass::None => write!(f, "—"),
        }
    }
}

/// Fragments above this intensity get a position label even without
/// an explicit label or classification.
pub const LABEL_INTENSITY_THRESHOLD: f64 = 50.0;

/// A single peak: position in domain units (m/z, ppm or cm⁻¹) and
/// intensity on a 0–100 relative scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    pub position: f64,
    pub intensity: f64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub class: PeakClass,
}

impl Peak {
    pub fn new(position: f64, intensity: f64) -> Self {
        Self {
            position,
            intensity,
            label: None,
            class: PeakClass::None,
        }
    }

    pub fn with_label(position: f64, intensity: f64, label: &str) -> Self {
        Self {
            position,
            intensity,
            label: Some(label.to_string()),
            class: PeakClass::None,
        }
    }

    pub fn with_class(position: f64, intensity: f64, class: PeakClass) -> Self {
        Self {
            position,
            intensity,
            label: None,
            class,
        }
    }

    /// Whether this peak should carry a text label in the plot.
    /// Molecular ion and base peak are always labeled (even a weak M⁺),
    /// as is anything with an explicit label; plain fragments only when
    /// they rise above the intensity threshold.
    pub fn wants_label(&self) -> bool {
        self.label.is_some()
            || matches!(self.class, PeakClass::MolecularIon | PeakClass::BasePeak)
            || self.intensity > LABEL_INTENSITY_THRESHOLD
    }

    /// Label text for the plot: explicit label, else the rounded position
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(l) => l.clone(),
            None => format!("{:.0}", self.position),
        }
    }
}

/// Which physical quantity runs along the x-axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainKind {
    MassCharge,
    ChemicalShift,
    Wavenumber,
}

impl std::fmt::Display for DomainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainKind::MassCharge => write!(f, "MS"),
            DomainKind::ChemicalShift => write!(f, "¹H NMR"),
            DomainKind::Wavenumber => write!(f, "IR"),
        }
    }
}

/// Domain semantics for one spectrum axis.
///
/// This is the value object that lets a single viewer render MS, NMR and
/// IR spectra alike: unit labels and display direction are data, not
/// per-spectrum-type code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub kind: DomainKind,
    /// x-axis caption, e.g. "m/z" or "Chemical Shift (ppm)"
    pub unit_label: String,
    /// y-axis caption, e.g. "Relative Abundance (%)"
    pub intensity_label: String,
    /// High values on the left (NMR ppm and IR wavenumber convention)
    pub reversed: bool,
}

impl AxisDomain {
    pub fn mass_charge() -> Self {
        Self {
            kind: DomainKind::MassCharge,
            unit_label: "m/z".to_string(),
            intensity_label: "Relative Abundance (%)".to_string(),
            reversed: false,
        }
    }

    pub fn chemical_shift() -> Self {
        Self {
            kind: DomainKind::ChemicalShift,
            unit_label: "Chemical Shift (ppm)".to_string(),
            intensity_label: "Relative Intensity (%)".to_string(),
            reversed: true,
        }
    }

    pub fn wavenumber() -> Self {
        Self {
            kind: DomainKind::Wavenumber,
            unit_label: "Wavenumber (cm⁻¹)".to_string(),
            intensity_label: "Absorption (%)".to_string(),
            reversed: true,
        }
    }
}

/// A labeled sub-range of the domain axis, used purely for background
/// shading (e.g. the IR fingerprint region). No coupling to peaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub min: f64,
    pub max: f64,
    pub label: String,
    /// Index into the theme's region color cycle
    #[serde(default)]
    pub color_key: usize,
}

impl Region {
    pub fn new(min: f64, max: f64, label: &str, color_key: usize) -> Self {
        Self {
            min,
            max,
            label: label.to_string(),
            color_key,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A complete teaching spectrum: immutable for the lifetime of a view,
/// replaced wholesale when the user picks another compound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    pub molecule_name: String,
    pub formula: String,
    pub domain: AxisDomain,
    pub domain_min: f64,
    pub domain_max: f64,
    /// Ordered ascending by position
    pub peaks: Vec<Peak>,
}

impl Spectrum {
    pub fn new(
        molecule_name: &str,
        formula: &str,
        domain: AxisDomain,
        domain_min: f64,
        domain_max: f64,
        mut peaks: Vec<Peak>,
    ) -> Self {
        peaks.sort_by(|a, b| a.position.partial_cmp(&b.position).unwrap());
        Self {
            molecule_name: molecule_name.to_string(),
            formula: formula.to_string(),
            domain,
            domain_min,
            domain_max,
            peaks,
        }
    }

    /// The base peak, if one is tagged
    pub fn base_peak(&self) -> Option<&Peak> {
        self.peaks.iter().find(|p| p.class == PeakClass::BasePeak)
    }

    /// The molecular ion peak, if one is tagged
    pub fn molecular_ion(&self) -> Option<&Peak> {
        self.peaks
            .iter()
            .find(|p| p.class == PeakClass::MolecularIon)
    }

    /// Maximum intensity across all peaks (for plot headroom)
    pub fn max_intensity(&self) -> f64 {
        self.peaks
            .iter()
            .map(|p| p.intensity)
            .fold(0.0f64, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peaks_sorted_on_construction() {
        let s = Spectrum::new(
            "test",
            "C2H6O",
            AxisDomain::mass_charge(),
            0.0,
            64.0,
            vec![
                Peak::new(45.0, 40.0),
                Peak::new(15.0, 20.0),
                Peak::new(31.0, 100.0),
            ],
        );
        let positions: Vec<f64> = s.peaks.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![15.0, 31.0, 45.0], "Peaks should sort ascending");
    }

    #[test]
    fn test_labeling_rule() {
        // Weak molecular ion: labeled despite intensity below threshold
        let m = Peak::with_class(44.0, 40.0, PeakClass::MolecularIon);
        assert!(m.wants_label(), "Molecular ion must always be labeled");

        // Weak unlabeled fragment: not labeled
        let frag = Peak::new(15.0, 20.0);
        assert!(!frag.wants_label(), "Weak fragment should stay unlabeled");

        // Strong fragment crosses the threshold
        let strong = Peak::new(28.0, 60.0);
        assert!(strong.wants_label());

        // Explicit label always wins
        let tagged = Peak::with_label(29.0, 5.0, "CHO⁺");
        assert!(tagged.wants_label());
        assert_eq!(tagged.display_label(), "CHO⁺");
    }

    #[test]
    fn test_base_peak_and_molecular_ion_lookup() {
        let s = Spectrum::new(
            "acetaldehyde",
            "C2H4O",
            AxisDomain::mass_charge(),
            0.0,
            64.0,
            vec![
                Peak::new(15.0, 20.0),
                Peak::with_class(29.0, 100.0, PeakClass::BasePeak),
                Peak::with_class(44.0, 40.0, PeakClass::MolecularIon),
            ],
        );
        assert_eq!(s.base_peak().unwrap().position, 29.0);
        assert_eq!(s.molecular_ion().unwrap().position, 44.0);
        assert_eq!(s.max_intensity(), 100.0);
    }

    #[test]
    fn test_region_contains() {
        let r = Region::new(500.0, 1500.0, "Fingerprint region", 0);
        assert!(r.contains(500.0));
        assert!(r.contains(1000.0));
        assert!(!r.contains(1500.1));
    }
}
