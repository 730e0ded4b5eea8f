/// Built-in compound catalog — the static teaching spectra
///
/// Peak positions, intensities and assignments are course literals, the
/// same data the diagrams are built from, not measured input. Every
/// spectrum is reconstructed on demand; nothing here is mutable.

use std::path::Path;

use thiserror::Error;

use crate::data::spectrum::{AxisDomain, Peak, PeakClass, Region, Spectrum};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read peak table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid peak table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One catalog entry: a spectrum plus its background regions (may be empty)
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub spectrum: Spectrum,
    pub regions: Vec<Region>,
}

impl CatalogEntry {
    fn plain(spectrum: Spectrum) -> Self {
        Self {
            spectrum,
            regions: Vec::new(),
        }
    }
}

// ── Mass spectra ───────────────────────────────────────────────────

fn ms_ethanol() -> CatalogEntry {
    CatalogEntry::plain(Spectrum::new(
        "Ethanol",
        "C₂H₅OH",
        AxisDomain::mass_charge(),
        0.0,
        60.0,
        vec![
            Peak::with_label(15.0, 8.0, "CH₃⁺"),
            Peak::new(27.0, 22.0),
            Peak::new(29.0, 30.0),
            Peak::with_class(31.0, 100.0, PeakClass::BasePeak),
            Peak::new(45.0, 52.0),
            Peak::with_class(46.0, 22.0, PeakClass::MolecularIon),
        ],
    ))
}

fn ms_acetaldehyde() -> CatalogEntry {
    CatalogEntry::plain(Spectrum::new(
        "Acetaldehyde",
        "CH₃CHO",
        AxisDomain::mass_charge(),
        0.0,
        64.0,
        vec![
            Peak::new(15.0, 20.0),
            Peak::new(28.0, 60.0),
            Peak::with_class(29.0, 100.0, PeakClass::BasePeak),
            Peak::with_class(44.0, 40.0, PeakClass::MolecularIon),
        ],
    ))
}

fn ms_chlorobenzene() -> CatalogEntry {
    CatalogEntry::plain(Spectrum::new(
        "Chlorobenzene",
        "C₆H₅Cl",
        AxisDomain::mass_charge(),
        0.0,
        130.0,
        vec![
            Peak::new(51.0, 28.0),
            Peak::with_label(77.0, 62.0, "C₆H₅⁺"),
            Peak::with_class(112.0, 100.0, PeakClass::MolecularIon),
        ],
    ))
}

fn ms_bromoethane() -> CatalogEntry {
    CatalogEntry::plain(Spectrum::new(
        "Bromoethane",
        "C₂H₅Br",
        AxisDomain::mass_charge(),
        0.0,
        120.0,
        vec![
            Peak::with_class(29.0, 100.0, PeakClass::BasePeak),
            Peak::new(27.0, 48.0),
            Peak::with_class(108.0, 85.0, PeakClass::MolecularIon),
        ],
    ))
}

// ── ¹H NMR ─────────────────────────────────────────────────────────

fn nmr_shift_regions() -> Vec<Region> {
    vec![
        Region::new(0.5, 3.0, "Alkyl C–H", 0),
        Region::new(3.0, 4.5, "C–H next to O/N/X", 1),
        Region::new(4.5, 6.5, "Alkene C–H", 2),
        Region::new(6.5, 8.5, "Aromatic C–H", 3),
        Region::new(9.0, 10.5, "Aldehyde C–H", 1),
    ]
}

fn nmr_ethanol() -> CatalogEntry {
    CatalogEntry {
        spectrum: Spectrum::new(
            "Ethanol (¹H)",
            "C₂H₅OH",
            AxisDomain::chemical_shift(),
            0.0,
            12.0,
            vec![
                Peak::with_label(1.2, 100.0, "CH₃ (t, 3H)"),
                Peak::with_label(2.6, 28.0, "OH (s, 1H)"),
                Peak::with_label(3.7, 65.0, "CH₂ (q, 2H)"),
            ],
        ),
        regions: nmr_shift_regions(),
    }
}

fn nmr_ethyl_acetate() -> CatalogEntry {
    CatalogEntry {
        spectrum: Spectrum::new(
            "Ethyl acetate (¹H)",
            "CH₃COOC₂H₅",
            AxisDomain::chemical_shift(),
            0.0,
            12.0,
            vec![
                Peak::with_label(1.3, 75.0, "CH₃ (t, 3H)"),
                Peak::with_label(2.0, 100.0, "COCH₃ (s, 3H)"),
                Peak::with_label(4.1, 52.0, "OCH₂ (q, 2H)"),
            ],
        ),
        regions: nmr_shift_regions(),
    }
}

fn nmr_benzaldehyde() -> CatalogEntry {
    CatalogEntry {
        spectrum: Spectrum::new(
            "Benzaldehyde (¹H)",
            "C₆H₅CHO",
            AxisDomain::chemical_shift(),
            0.0,
            12.0,
            vec![
                Peak::with_label(7.5, 72.0, "Ar–H (m, 3H)"),
                Peak::with_label(7.9, 55.0, "Ar–H (d, 2H)"),
                Peak::with_label(10.0, 30.0, "CHO (s, 1H)"),
            ],
        ),
        regions: nmr_shift_regions(),
    }
}

// ── IR ─────────────────────────────────────────────────────────────

fn ir_regions() -> Vec<Region> {
    vec![
        Region::new(500.0, 1500.0, "Fingerprint region", 0),
        Region::new(1620.0, 1780.0, "C=O / C=C stretch", 1),
        Region::new(2100.0, 2260.0, "C≡C / C≡N stretch", 2),
        Region::new(2700.0, 3100.0, "C–H stretch", 3),
        Region::new(3200.0, 3600.0, "O–H / N–H stretch", 2),
    ]
}

fn ir_ethanol() -> CatalogEntry {
    CatalogEntry {
        spectrum: Spectrum::new(
            "Ethanol (IR)",
            "C₂H₅OH",
            AxisDomain::wavenumber(),
            400.0,
            4000.0,
            vec![
                Peak::with_label(1050.0, 80.0, "C–O stretch"),
                Peak::new(1380.0, 35.0),
                Peak::new(1450.0, 40.0),
                Peak::with_label(2950.0, 70.0, "C–H stretch"),
                Peak::with_label(3350.0, 95.0, "O–H stretch (broad)"),
            ],
        ),
        regions: ir_regions(),
    }
}

fn ir_acetone() -> CatalogEntry {
    CatalogEntry {
        spectrum: Spectrum::new(
            "Acetone (IR)",
            "(CH₃)₂CO",
            AxisDomain::wavenumber(),
            400.0,
            4000.0,
            vec![
                Peak::new(1220.0, 55.0),
                Peak::new(1360.0, 48.0),
                Peak::with_label(1715.0, 100.0, "C=O stretch"),
                Peak::with_label(2970.0, 42.0, "C–H stretch"),
            ],
        ),
        regions: ir_regions(),
    }
}

/// All mass-spectrum catalog entries, in menu order
pub fn mass_spectra() -> Vec<CatalogEntry> {
    vec![
        ms_ethanol(),
        ms_acetaldehyde(),
        ms_chlorobenzene(),
        ms_bromoethane(),
    ]
}

/// All ¹H NMR catalog entries
pub fn nmr_spectra() -> Vec<CatalogEntry> {
    vec![nmr_ethanol(), nmr_ethyl_acetate(), nmr_benzaldehyde()]
}

/// All IR catalog entries
pub fn ir_spectra() -> Vec<CatalogEntry> {
    vec![ir_ethanol(), ir_acetone()]
}

/// Load a user-supplied spectrum from a JSON peak table
pub fn load_peak_table(path: &Path) -> Result<Spectrum, CatalogError> {
    let text = std::fs::read_to_string(path)?;
    let spectrum: Spectrum = serde_json::from_str(&text)?;
    log::info!(
        "Loaded peak table: {} ({} peaks) from {}",
        spectrum.molecule_name,
        spectrum.peaks.len(),
        path.display()
    );
    Ok(spectrum)
}

/// Save a spectrum as a JSON peak table (the inverse of `load_peak_table`)
pub fn save_peak_table(path: &Path, spectrum: &Spectrum) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(spectrum)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::spectrum::PeakClass;

    #[test]
    fn test_catalog_intensities_in_range() {
        for entry in mass_spectra()
            .into_iter()
            .chain(nmr_spectra())
            .chain(ir_spectra())
        {
            for peak in &entry.spectrum.peaks {
                assert!(
                    (0.0..=100.0).contains(&peak.intensity),
                    "{}: intensity {} out of range",
                    entry.spectrum.molecule_name,
                    peak.intensity
                );
                assert!(
                    peak.position >= entry.spectrum.domain_min
                        && peak.position <= entry.spectrum.domain_max,
                    "{}: peak at {} outside declared domain",
                    entry.spectrum.molecule_name,
                    peak.position
                );
            }
        }
    }

    #[test]
    fn test_at_most_one_base_peak_per_spectrum() {
        for entry in mass_spectra() {
            let n = entry
                .spectrum
                .peaks
                .iter()
                .filter(|p| p.class == PeakClass::BasePeak)
                .count();
            assert!(n <= 1, "{}: {} base peaks", entry.spectrum.molecule_name, n);
        }
    }

    #[test]
    fn test_peak_table_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join("spectra_tutor_roundtrip_test.json");
        let original = ms_chlorobenzene().spectrum;
        save_peak_table(&path, &original).expect("save should succeed");
        let loaded = load_peak_table(&path).expect("load should succeed");
        assert_eq!(loaded, original);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_peak_table_rejects_garbage() {
        let dir = std::env::temp_dir();
        let path = dir.join("spectra_tutor_garbage_test.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load_peak_table(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        let _ = std::fs::remove_file(&path);
    }
}
