/// Calculator tab — DBE from a molecular formula, plus an isotope-pattern
/// playground that previews the M/M+2/M+4 cluster for a chosen halogen
/// substitution.

use crate::calc::dbe::{self, FormulaCounts};
use crate::data::isotopes::{self, HalogenTag};
use crate::data::spectrum::{AxisDomain, Spectrum};
use crate::gui::spectrum_view::{self, SpectrumViewState};
use crate::gui::theme::ThemeColors;

/// Persistent state for the calculator tab
#[derive(Debug, Clone)]
pub struct CalculatorState {
    pub counts: FormulaCounts,
    pub halogen: HalogenTag,
    pub nominal_mass: u32,
    pub pattern_view: SpectrumViewState,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            counts: FormulaCounts::default(),
            halogen: HalogenTag::Cl,
            nominal_mass: 112,
            pattern_view: SpectrumViewState::default(),
        }
    }
}

/// Build the preview spectrum for the current isotope-tool settings.
/// Domain bounds leave a margin so the cluster sits mid-plot.
pub fn pattern_preview(nominal_mass: u32, halogen: HalogenTag) -> Spectrum {
    let mass = nominal_mass as f64;
    Spectrum::new(
        "Isotope pattern",
        "M⁺ cluster",
        AxisDomain::mass_charge(),
        (mass - 10.0).max(0.0),
        mass + 10.0,
        isotopes::generate_pattern(mass, halogen),
    )
}

pub fn show_calculator(ui: &mut egui::Ui, state: &mut CalculatorState, colors: &ThemeColors) {
    ui.heading("Double Bond Equivalents");
    ui.add_space(4.0);

    // Element count inputs. DragValue ranges clamp to non-negative
    // integers, so the formula itself needs no validation.
    ui.horizontal(|ui| {
        for (symbol, count) in [
            ("C", &mut state.counts.carbon),
            ("H", &mut state.counts.hydrogen),
            ("N", &mut state.counts.nitrogen),
            ("O", &mut state.counts.oxygen),
            ("X (halogen)", &mut state.counts.halogen),
        ] {
            ui.label(symbol);
            ui.add(egui::DragValue::new(count).range(0..=60).speed(0.1));
            ui.add_space(6.0);
        }
    });

    let value = dbe::dbe(state.counts);
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(state.counts.formula())
                .strong()
                .size(16.0)
                .color(colors.text_primary),
        );
        ui.separator();
        ui.label(
            egui::RichText::new(format!("DBE = {}", format_dbe(value)))
                .strong()
                .size(16.0)
                .color(colors.accent),
        );
    });
    ui.label(
        egui::RichText::new(dbe::structural_hint(value))
            .color(colors.text_secondary)
            .italics(),
    );

    ui.add_space(12.0);
    ui.separator();
    ui.add_space(8.0);

    ui.heading("Isotope pattern");
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Nominal mass (M)");
        ui.add(egui::DragValue::new(&mut state.nominal_mass).range(10..=600));
        ui.separator();
        ui.label("Substitution");
        egui::ComboBox::from_id_salt("halogen_tag")
            .selected_text(state.halogen.to_string())
            .show_ui(ui, |ui| {
                for tag in HalogenTag::ALL {
                    ui.selectable_value(&mut state.halogen, tag, tag.to_string());
                }
            });
    });

    ui.add_space(6.0);
    let preview = pattern_preview(state.nominal_mass, state.halogen);
    spectrum_view::show_spectrum(
        ui,
        "isotope_pattern_preview",
        &preview,
        &[],
        &mut state.pattern_view,
        colors,
    );
}

/// Show whole DBE values without a decimal point, halves with one
fn format_dbe(value: f64) -> String {
    if (value.fract()).abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::spectrum::PeakClass;

    #[test]
    fn test_pattern_preview_centers_cluster() {
        let s = pattern_preview(112, HalogenTag::Cl);
        assert_eq!(s.domain_min, 102.0);
        assert_eq!(s.domain_max, 122.0);
        assert_eq!(s.peaks.len(), 2);
        assert_eq!(s.peaks[0].class, PeakClass::MolecularIon);
    }

    #[test]
    fn test_pattern_preview_clamps_low_mass() {
        let s = pattern_preview(5, HalogenTag::None);
        assert_eq!(s.domain_min, 0.0, "Domain must not go negative");
    }

    #[test]
    fn test_format_dbe() {
        assert_eq!(format_dbe(4.0), "4");
        assert_eq!(format_dbe(1.5), "1.5");
    }
}
