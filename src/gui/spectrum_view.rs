/// Unified spectrum viewer widget — one interactive plot for MS, ¹H NMR
/// and IR spectra, parameterized by the spectrum's `AxisDomain`.
///
/// Replaces what would otherwise be per-spectrum-type viewers: unit
/// labels, axis direction and region tables are data on the spectrum,
/// not code in here.

use egui_plot::{Line, Plot, PlotPoints, PlotUi, Points, Text};

use crate::data::spectrum::{PeakClass, Region, Spectrum};
use crate::gui::hover::{self, HoverState};
use crate::gui::theme::ThemeColors;

/// Plot height presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SizeVariant {
    Small,
    Medium,
    Large,
}

impl SizeVariant {
    pub const ALL: [SizeVariant; 3] = [SizeVariant::Small, SizeVariant::Medium, SizeVariant::Large];

    pub fn label(&self) -> &'static str {
        match self {
            SizeVariant::Small => "Small",
            SizeVariant::Medium => "Medium",
            SizeVariant::Large => "Large",
        }
    }

    fn height(&self) -> f32 {
        match self {
            SizeVariant::Small => 240.0,
            SizeVariant::Medium => 380.0,
            SizeVariant::Large => 540.0,
        }
    }
}

/// Per-view state for the spectrum viewer. Each view owns its own hover
/// state exclusively; nothing here is shared between sibling views.
#[derive(Debug, Clone)]
pub struct SpectrumViewState {
    pub show_regions: bool,
    pub show_labels: bool,
    pub size: SizeVariant,
    pub hover: HoverState,
    /// Incremented to give the plot a fresh ID (resets zoom)
    pub plot_generation: u32,
    pub auto_scale: bool,
}

impl Default for SpectrumViewState {
    fn default() -> Self {
        Self {
            show_regions: true,
            show_labels: true,
            size: SizeVariant::Medium,
            hover: HoverState::Idle,
            plot_generation: 0,
            auto_scale: true,
        }
    }
}

impl SpectrumViewState {
    /// Reset transient view state when the underlying spectrum changes
    pub fn reset_for_new_spectrum(&mut self) {
        self.hover = HoverState::Idle;
        self.auto_scale = true;
        self.plot_generation = self.plot_generation.wrapping_add(1);
    }
}

/// Show the interactive spectrum plot and its hover detail line.
/// `plot_id` must be unique per view so sibling spectra keep separate
/// plot memory and hover state.
pub fn show_spectrum(
    ui: &mut egui::Ui,
    plot_id: &str,
    spectrum: &Spectrum,
    regions: &[Region],
    state: &mut SpectrumViewState,
    colors: &ThemeColors,
) {
    if spectrum.peaks.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.heading("No peaks in this spectrum");
        });
        return;
    }

    // Controls above the plot
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!(
                "{}  ·  {}",
                spectrum.molecule_name, spectrum.formula
            ))
            .strong()
            .color(colors.text_primary),
        );
        ui.separator();
        ui.label(format!("{} peaks", spectrum.peaks.len()));
        if !regions.is_empty() {
            ui.separator();
            ui.checkbox(&mut state.show_regions, "Regions");
        }
        ui.separator();
        ui.checkbox(&mut state.show_labels, "Labels");
        if ui.button("⊞ Reset view").clicked() {
            state.auto_scale = true;
        }
    });

    let reversed = spectrum.domain.reversed;
    // High values on the left: negate x so egui_plot's left-to-right axis
    // shows the conventional direction, and re-format the tick labels
    let disp = |x: f64| if reversed { -x } else { x };

    if state.auto_scale {
        state.plot_generation = state.plot_generation.wrapping_add(1);
        state.auto_scale = false;
    }

    let headroom = (spectrum.max_intensity() * 1.18).max(10.0);

    let mut plot = Plot::new(format!("{}_{}", plot_id, state.plot_generation))
        .height(state.size.height())
        .x_axis_label(spectrum.domain.unit_label.clone())
        .y_axis_label(spectrum.domain.intensity_label.clone())
        .allow_drag(true)
        .allow_zoom(true)
        .allow_scroll(true)
        .show_axes([true, true])
        .show_grid([true, false])
        .include_x(disp(spectrum.domain_min))
        .include_x(disp(spectrum.domain_max))
        .include_y(0.0)
        .include_y(headroom);

    if reversed {
        plot = plot.x_axis_formatter(|val, _range| format!("{:.0}", -val.value));
    }

    let show_regions = state.show_regions && !regions.is_empty();
    let show_labels = state.show_labels;
    let hover_state = state.hover;

    let plot_resp = plot.show(ui, |plot_ui: &mut PlotUi| {
        // ── Region backgrounds ──
        if show_regions {
            for (i, region) in regions.iter().enumerate() {
                let x1 = disp(region.min);
                let x2 = disp(region.max);
                // Filled span down to the baseline, same trick as an
                // integral fill: a flat line at headroom with fill(0.0)
                let band = Line::new(PlotPoints::from(vec![[x1, headroom], [x2, headroom]]))
                    .color(colors.region_fill(region.color_key))
                    .fill(0.0)
                    .width(0.0);
                plot_ui.line(band);

                // Region caption near the top of the band, brighter when hovered
                let mid = (x1 + x2) / 2.0;
                let caption_color = if hover_state == HoverState::Region(i) {
                    colors.text_primary
                } else {
                    colors.region_label
                };
                let caption = Text::new(
                    [mid, headroom * 0.97].into(),
                    egui::RichText::new(region.label.clone())
                        .size(9.5)
                        .color(caption_color),
                )
                .anchor(egui::Align2::CENTER_TOP);
                plot_ui.text(caption);
            }
        }

        // ── Peak stems, markers and labels ──
        for (i, peak) in spectrum.peaks.iter().enumerate() {
            let x = disp(peak.position);
            let hovered = hover_state == HoverState::Peak(i);

            let stem_color = if hovered {
                colors.peak_stem_hover
            } else {
                match peak.class {
                    PeakClass::BasePeak => colors.base_peak,
                    PeakClass::MolecularIon => colors.molecular_ion,
                    _ => colors.peak_stem,
                }
            };
            let stem = Line::new(PlotPoints::from(vec![[x, 0.0], [x, peak.intensity]]))
                .color(stem_color)
                .width(if hovered { 2.6 } else { 1.6 });
            plot_ui.line(stem);

            let marker = Points::new(PlotPoints::from(vec![[x, peak.intensity]]))
                .color(stem_color)
                .radius(if hovered { 4.0 } else { 2.5 })
                .shape(egui_plot::MarkerShape::Circle);
            plot_ui.points(marker);

            if show_labels && peak.wants_label() {
                let label = Text::new(
                    [x, peak.intensity + headroom * 0.02].into(),
                    egui::RichText::new(peak.display_label())
                        .size(9.0)
                        .color(if hovered {
                            colors.peak_stem_hover
                        } else {
                            colors.peak_label
                        }),
                )
                .anchor(egui::Align2::CENTER_BOTTOM);
                plot_ui.text(label);
            }
        }
    });

    // ── Hover state transition from pointer position ──
    let domain_width = (spectrum.domain_max - spectrum.domain_min).abs();
    let x_tolerance = domain_width * 0.015;
    let event = match plot_resp.response.hover_pos() {
        Some(pos) => {
            let coord = plot_resp.transform.value_from_position(pos);
            // Back from display coordinates to domain units
            let x = if reversed { -coord.x } else { coord.x };
            hover::hit_test(&spectrum.peaks, regions, x, coord.y, x_tolerance)
        }
        None => hover::HoverEvent::Leave,
    };
    state.hover = state.hover.apply(event);

    // ── Detail line, derived purely from the current hover state ──
    show_hover_detail(ui, spectrum, regions, state.hover, colors);
}

/// The tooltip/detail panel under the plot
fn show_hover_detail(
    ui: &mut egui::Ui,
    spectrum: &Spectrum,
    regions: &[Region],
    hover: HoverState,
    colors: &ThemeColors,
) {
    ui.add_space(2.0);
    match hover {
        HoverState::Peak(i) => {
            if let Some(peak) = spectrum.peaks.get(i) {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "▌ {} {:.1}",
                            spectrum.domain.unit_label, peak.position
                        ))
                        .strong()
                        .color(colors.accent),
                    );
                    ui.label(format!("intensity {:.0}%", peak.intensity));
                    if peak.class != PeakClass::None {
                        ui.label(
                            egui::RichText::new(peak.class.to_string())
                                .color(colors.molecular_ion),
                        );
                    }
                    if let Some(label) = &peak.label {
                        ui.label(
                            egui::RichText::new(label).color(colors.text_secondary),
                        );
                    }
                });
            }
        }
        HoverState::Region(i) => {
            if let Some(region) = regions.get(i) {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("▒ {}", region.label))
                            .strong()
                            .color(colors.accent),
                    );
                    ui.label(format!("{:.0} – {:.0}", region.min, region.max));
                });
            }
        }
        HoverState::Idle => {
            ui.label(
                egui::RichText::new("Hover a peak or shaded region for details")
                    .color(colors.text_muted)
                    .italics(),
            );
        }
    }
}
