/// Main application state and eframe::App implementation
///
/// Ties together the catalog, the spectrum viewer, the calculators and
/// the export path.

use eframe::egui;

use crate::data::catalog::{self, CatalogEntry};
use crate::data::isotopes::{self, HalogenTag, DEFAULT_MERGE_TOLERANCE};
use crate::data::spectrum::{DomainKind, Spectrum};
use crate::export::svg::{self, SvgExportSettings};
use crate::gui::calculator_panel::{self, CalculatorState};
use crate::gui::spectrum_view::{self, SizeVariant, SpectrumViewState};
use crate::gui::theme::{self, AppTheme, ThemeColors};
use crate::gui::toolbar::{self, ToolbarAction};

/// Which tab the user is viewing
#[derive(Clone, Copy, PartialEq)]
enum AppTab {
    MassSpec,
    Nmr,
    Ir,
    Calculator,
}

impl AppTab {
    const ALL: [AppTab; 4] = [
        AppTab::MassSpec,
        AppTab::Nmr,
        AppTab::Ir,
        AppTab::Calculator,
    ];

    fn label(&self) -> &'static str {
        match self {
            AppTab::MassSpec => "⚖ Mass Spec",
            AppTab::Nmr => "🧲 ¹H NMR",
            AppTab::Ir => "🌡 IR",
            AppTab::Calculator => "🧮 Calculator",
        }
    }
}

/// One spectrum-type tab: its catalog entries, current selection and
/// view state. Each tab owns its hover state exclusively — hovering in
/// one tab never touches a sibling's selection.
struct SpectrumTab {
    entries: Vec<CatalogEntry>,
    selected: usize,
    view: SpectrumViewState,
}

impl SpectrumTab {
    fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            selected: 0,
            view: SpectrumViewState::default(),
        }
    }

    fn current(&self) -> &CatalogEntry {
        &self.entries[self.selected]
    }
}

/// The main application
pub struct TutorApp {
    tab: AppTab,
    ms: SpectrumTab,
    nmr: SpectrumTab,
    ir: SpectrumTab,
    calculator: CalculatorState,

    /// Halogen substitution applied to the current mass spectrum
    halogen: HalogenTag,

    status_message: String,
    show_about: bool,

    current_theme: AppTheme,
    theme_colors: ThemeColors,
}

impl TutorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let default_theme = AppTheme::Light;
        theme::apply_theme(&cc.egui_ctx, default_theme);
        let theme_colors = ThemeColors::from_theme(default_theme);

        // ── Typography: scale for monitor DPI ──
        let ppi = cc.egui_ctx.pixels_per_point();
        let base_size = if ppi > 1.5 { 14.0 } else { 13.0 };
        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(base_size, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(base_size, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(base_size * 1.25, egui::FontFamily::Proportional),
        );
        style.spacing.item_spacing = egui::vec2(8.0, 5.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);
        cc.egui_ctx.set_style(style);

        Self {
            tab: AppTab::MassSpec,
            ms: SpectrumTab::new(catalog::mass_spectra()),
            nmr: SpectrumTab::new(catalog::nmr_spectra()),
            ir: SpectrumTab::new(catalog::ir_spectra()),
            calculator: CalculatorState::default(),
            halogen: HalogenTag::None,
            status_message: "Ready — pick a compound or open a peak table".to_string(),
            show_about: false,
            current_theme: default_theme,
            theme_colors,
        }
    }

    fn active_tab_mut(&mut self) -> Option<&mut SpectrumTab> {
        match self.tab {
            AppTab::MassSpec => Some(&mut self.ms),
            AppTab::Nmr => Some(&mut self.nmr),
            AppTab::Ir => Some(&mut self.ir),
            AppTab::Calculator => None,
        }
    }

    fn active_tab(&self) -> Option<&SpectrumTab> {
        match self.tab {
            AppTab::MassSpec => Some(&self.ms),
            AppTab::Nmr => Some(&self.nmr),
            AppTab::Ir => Some(&self.ir),
            AppTab::Calculator => None,
        }
    }

    /// The spectrum actually drawn in the current tab. For mass spectra
    /// with a halogen substitution selected, the catalog peaks are merged
    /// with the generated isotope cluster at the molecular-ion mass.
    fn display_spectrum(&self) -> Option<Spectrum> {
        let tab = self.active_tab()?;
        let base = &tab.current().spectrum;
        if self.tab != AppTab::MassSpec || self.halogen == HalogenTag::None {
            return Some(base.clone());
        }
        let Some(m_ion) = base.molecular_ion() else {
            return Some(base.clone());
        };
        let pattern = isotopes::generate_pattern(m_ion.position, self.halogen);
        let mut merged = base.clone();
        merged.peaks = isotopes::merge_peaks(&base.peaks, pattern, DEFAULT_MERGE_TOLERANCE);
        // Leave room for the M+4 isotopologue at the domain edge
        merged.domain_max = merged.domain_max.max(m_ion.position + 6.0);
        Some(merged)
    }

    /// Open a user-supplied JSON peak table and route it to the tab
    /// matching its domain kind.
    fn open_peak_table(&mut self) {
        let Some(path) = toolbar::open_peak_table_dialog() else {
            return;
        };
        match catalog::load_peak_table(&path) {
            Ok(spectrum) => {
                self.status_message = format!(
                    "Loaded {} ({} peaks)",
                    spectrum.molecule_name,
                    spectrum.peaks.len()
                );
                let target = match spectrum.domain.kind {
                    DomainKind::MassCharge => {
                        self.tab = AppTab::MassSpec;
                        &mut self.ms
                    }
                    DomainKind::ChemicalShift => {
                        self.tab = AppTab::Nmr;
                        &mut self.nmr
                    }
                    DomainKind::Wavenumber => {
                        self.tab = AppTab::Ir;
                        &mut self.ir
                    }
                };
                target.entries.push(CatalogEntry {
                    spectrum,
                    regions: Vec::new(),
                });
                target.selected = target.entries.len() - 1;
                target.view.reset_for_new_spectrum();
            }
            Err(e) => {
                log::error!("Peak table load failed: {}", e);
                self.status_message = format!("Load failed: {}", e);
            }
        }
    }

    fn save_peak_table(&mut self) {
        let Some(spectrum) = self.display_spectrum() else {
            self.status_message = "Nothing to save in this tab".to_string();
            return;
        };
        let Some(path) = toolbar::save_peak_table_dialog(&spectrum.molecule_name) else {
            return;
        };
        match catalog::save_peak_table(&path, &spectrum) {
            Ok(()) => self.status_message = format!("Saved: {}", path.display()),
            Err(e) => {
                log::error!("Peak table save failed: {}", e);
                self.status_message = format!("Save failed: {}", e);
            }
        }
    }

    fn export_svg(&mut self) {
        let (Some(spectrum), Some(tab)) = (self.display_spectrum(), self.active_tab()) else {
            self.status_message = "Switch to a spectrum tab to export".to_string();
            return;
        };
        let Some(path) = toolbar::save_svg_dialog(&spectrum.molecule_name) else {
            return;
        };
        let settings = SvgExportSettings {
            show_regions: tab.view.show_regions,
            show_labels: tab.view.show_labels,
            ..Default::default()
        };
        match svg::save_svg(&path, &spectrum, &tab.current().regions, &settings) {
            Ok(()) => self.status_message = format!("Exported: {}", path.display()),
            Err(e) => {
                log::error!("SVG export failed: {}", e);
                self.status_message = format!("Export failed: {}", e);
            }
        }
    }

    fn handle_toolbar(&mut self, ctx: &egui::Context, action: ToolbarAction) {
        match action {
            ToolbarAction::None => {}
            ToolbarAction::OpenPeakTable => self.open_peak_table(),
            ToolbarAction::SavePeakTable => self.save_peak_table(),
            ToolbarAction::ExportSvg => self.export_svg(),
            ToolbarAction::ResetView => {
                if let Some(tab) = self.active_tab_mut() {
                    tab.view.auto_scale = true;
                }
            }
            ToolbarAction::ThemeToggle => {
                self.current_theme = self.current_theme.next();
                theme::apply_theme(ctx, self.current_theme);
                self.theme_colors = ThemeColors::from_theme(self.current_theme);
            }
            ToolbarAction::ShowAbout => self.show_about = true,
        }
    }

    fn show_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tab in AppTab::ALL {
                let active = self.tab == tab;
                let (bg, fg) = if active {
                    (self.theme_colors.tab_active_bg, self.theme_colors.tab_active_text)
                } else {
                    (
                        self.theme_colors.tab_inactive_bg,
                        self.theme_colors.tab_inactive_text,
                    )
                };
                let button = egui::Button::new(egui::RichText::new(tab.label()).color(fg))
                    .fill(bg)
                    .corner_radius(6.0);
                if ui.add(button).clicked() && !active {
                    self.tab = tab;
                    if let Some(t) = self.active_tab_mut() {
                        t.view.reset_for_new_spectrum();
                    }
                }
            }
        });
    }

    fn show_side_panel(&mut self, ctx: &egui::Context) {
        if self.tab == AppTab::Calculator {
            return;
        }
        let colors = self.theme_colors.clone();
        let is_ms = self.tab == AppTab::MassSpec;
        let mut halogen = self.halogen;
        let Some(tab) = self.active_tab_mut() else {
            return;
        };

        egui::SidePanel::left("compound_panel")
            .resizable(true)
            .default_width(230.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.heading("Compounds");
                ui.add_space(4.0);
                let mut clicked = None;
                for (i, entry) in tab.entries.iter().enumerate() {
                    let selected = i == tab.selected;
                    let text = format!(
                        "{}  ({})",
                        entry.spectrum.molecule_name, entry.spectrum.formula
                    );
                    if ui.selectable_label(selected, text).clicked() && !selected {
                        clicked = Some(i);
                    }
                }
                if let Some(i) = clicked {
                    tab.selected = i;
                    tab.view.reset_for_new_spectrum();
                }

                ui.add_space(10.0);
                ui.separator();
                ui.heading("Display");
                ui.horizontal(|ui| {
                    ui.label("Size");
                    egui::ComboBox::from_id_salt("size_variant")
                        .selected_text(tab.view.size.label())
                        .show_ui(ui, |ui| {
                            for size in SizeVariant::ALL {
                                ui.selectable_value(&mut tab.view.size, size, size.label());
                            }
                        });
                });
                ui.checkbox(&mut tab.view.show_labels, "Peak labels");
                if !tab.current().regions.is_empty() {
                    ui.checkbox(&mut tab.view.show_regions, "Shaded regions");
                }

                if is_ms {
                    ui.add_space(10.0);
                    ui.separator();
                    ui.heading("Isotope pattern");
                    ui.label(
                        egui::RichText::new(
                            "Substitute halogens at the molecular ion and watch \
                             the M+2/M+4 cluster appear.",
                        )
                        .small()
                        .color(colors.text_muted),
                    );
                    for tag in HalogenTag::ALL {
                        ui.radio_value(&mut halogen, tag, tag.to_string());
                    }
                }
            });

        if is_ms && halogen != self.halogen {
            self.halogen = halogen;
            if let Some(tab) = self.active_tab_mut() {
                tab.view.reset_for_new_spectrum();
            }
        }
    }

    fn show_central(&mut self, ctx: &egui::Context) {
        let colors = self.theme_colors.clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_tab_bar(ui);
            ui.add_space(6.0);
            let spectrum = self.display_spectrum();
            match self.tab {
                AppTab::Calculator => {
                    calculator_panel::show_calculator(ui, &mut self.calculator, &colors);
                }
                _ => {
                    let plot_id = match self.tab {
                        AppTab::MassSpec => "ms_view",
                        AppTab::Nmr => "nmr_view",
                        _ => "ir_view",
                    };
                    // Regions are borrowed from the entry, the spectrum may
                    // be a merged copy
                    let regions = self
                        .active_tab()
                        .map(|t| t.current().regions.clone())
                        .unwrap_or_default();
                    if let (Some(spectrum), Some(tab)) = (spectrum, self.active_tab_mut()) {
                        spectrum_view::show_spectrum(
                            ui,
                            plot_id,
                            &spectrum,
                            &regions,
                            &mut tab.view,
                            &colors,
                        );
                    }
                }
            }
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&self.status_message)
                        .color(self.theme_colors.status_text),
                );
            });
        });
    }

    fn show_about_window(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }
        let mut open = self.show_about;
        egui::Window::new("About Spectra Tutor")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("Spectra Tutor v{}", env!("CARGO_PKG_VERSION")));
                ui.label("Interactive MS, ¹H NMR and IR teaching spectra.");
                ui.add_space(6.0);
                ui.label("Hover peaks for assignments, swap halogens to see");
                ui.label("isotope patterns, and export figures as SVG.");
            });
        self.show_about = open;
    }
}

impl eframe::App for TutorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let action = toolbar::show_toolbar(ctx, self.current_theme.label());
        self.handle_toolbar(ctx, action);

        self.show_status_bar(ctx);
        self.show_side_panel(ctx);
        self.show_central(ctx);
        self.show_about_window(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::spectrum::PeakClass;

    fn merged_chlorobenzene(halogen: HalogenTag) -> Spectrum {
        let entry = &catalog::mass_spectra()[2]; // chlorobenzene
        assert_eq!(entry.spectrum.molecule_name, "Chlorobenzene");
        let m = entry.spectrum.molecular_ion().unwrap().position;
        let pattern = isotopes::generate_pattern(m, halogen);
        let mut s = entry.spectrum.clone();
        s.peaks = isotopes::merge_peaks(&s.peaks, pattern, DEFAULT_MERGE_TOLERANCE);
        s
    }

    #[test]
    fn test_halogen_substitution_adds_isotope_peaks() {
        let merged = merged_chlorobenzene(HalogenTag::Cl);
        // Explicit M⁺ at 112 wins over the generated M peak; M+2 appears
        let at_112: Vec<_> = merged
            .peaks
            .iter()
            .filter(|p| (p.position - 112.0).abs() < 0.01)
            .collect();
        assert_eq!(at_112.len(), 1, "Generated M must merge into explicit M⁺");
        assert_eq!(at_112[0].class, PeakClass::MolecularIon);
        assert!(
            merged.peaks.iter().any(|p| p.position == 114.0),
            "M+2 peak missing"
        );
    }

    #[test]
    fn test_dibromo_substitution_adds_m4() {
        let merged = merged_chlorobenzene(HalogenTag::Br2);
        assert!(merged.peaks.iter().any(|p| p.position == 116.0), "M+4 missing");
    }

    #[test]
    fn test_catalog_tabs_are_nonempty() {
        assert!(!catalog::mass_spectra().is_empty());
        assert!(!catalog::nmr_spectra().is_empty());
        assert!(!catalog::ir_spectra().is_empty());
    }
}
