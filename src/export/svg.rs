/// Standalone SVG export of a spectrum
///
/// Produces a self-contained image for embedding in course handouts.
/// All coordinate math goes through `LinearScale`; egui is not involved.

use std::path::Path;

use chrono::Local;
use thiserror::Error;

use crate::calc::scale::{LinearScale, ScaleError};
use crate::data::spectrum::{PeakClass, Region, Spectrum};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot build axis scale: {0}")]
    Scale(#[from] ScaleError),
    #[error("could not write SVG: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings for SVG export
#[derive(Debug, Clone)]
pub struct SvgExportSettings {
    pub width: u32,
    pub height: u32,
    pub show_regions: bool,
    pub show_labels: bool,
    pub custom_title: String,
    pub use_custom_title: bool,
}

impl Default for SvgExportSettings {
    fn default() -> Self {
        Self {
            width: 900,
            height: 520,
            show_regions: true,
            show_labels: true,
            custom_title: String::new(),
            use_custom_title: false,
        }
    }
}

// Plot margins inside the SVG canvas
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 56.0;

/// Render a spectrum to an SVG document string
pub fn render_svg(
    spectrum: &Spectrum,
    regions: &[Region],
    settings: &SvgExportSettings,
) -> Result<String, ExportError> {
    let w = settings.width as f64;
    let h = settings.height as f64;
    let plot_left = MARGIN_LEFT;
    let plot_right = w - MARGIN_RIGHT;
    let plot_top = MARGIN_TOP;
    let plot_bottom = h - MARGIN_BOTTOM;

    let x_scale = LinearScale::new(
        spectrum.domain_min,
        spectrum.domain_max,
        plot_left,
        plot_right,
        spectrum.domain.reversed,
    )?;
    // Intensity 0 at the bottom edge, headroom above the tallest peak
    let headroom = (spectrum.max_intensity() * 1.15).max(10.0);
    let y_scale = LinearScale::new(0.0, headroom, plot_bottom, plot_top, false)?;

    let title = if settings.use_custom_title && !settings.custom_title.is_empty() {
        settings.custom_title.clone()
    } else {
        format!("{} — {}", spectrum.molecule_name, spectrum.formula)
    };

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
         viewBox=\"0 0 {} {}\" font-family=\"sans-serif\">\n",
        settings.width, settings.height, settings.width, settings.height
    ));
    svg.push_str(&format!(
        "<!-- Generated by Spectra Tutor v{} on {} -->\n",
        env!("CARGO_PKG_VERSION"),
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    svg.push_str(&format!(
        "<rect width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>\n",
        settings.width, settings.height
    ));

    // Title
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"26\" text-anchor=\"middle\" font-size=\"16\" fill=\"#2a2e36\">{}</text>\n",
        w / 2.0,
        escape(&title)
    ));

    // Region bands behind everything else
    if settings.show_regions {
        for region in regions {
            let xa = x_scale.map(region.min);
            let xb = x_scale.map(region.max);
            let (x1, x2) = if xa <= xb { (xa, xb) } else { (xb, xa) };
            svg.push_str(&format!(
                "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" \
                 fill=\"#4080c0\" fill-opacity=\"0.12\"/>\n",
                x1,
                plot_top,
                x2 - x1,
                plot_bottom - plot_top
            ));
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"10\" \
                 fill=\"#70758a\">{}</text>\n",
                (x1 + x2) / 2.0,
                plot_top + 14.0,
                escape(&region.label)
            ));
        }
    }

    // Axes
    svg.push_str(&format!(
        "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#444852\" stroke-width=\"1\"/>\n",
        plot_left, plot_bottom, plot_right, plot_bottom
    ));
    svg.push_str(&format!(
        "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#444852\" stroke-width=\"1\"/>\n",
        plot_left, plot_top, plot_left, plot_bottom
    ));

    // x-axis ticks
    let step = tick_step(spectrum.domain_max - spectrum.domain_min);
    let mut tick = (spectrum.domain_min / step).ceil() * step;
    while tick <= spectrum.domain_max + 1e-9 {
        let x = x_scale.map(tick);
        svg.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#444852\" stroke-width=\"1\"/>\n",
            x,
            plot_bottom,
            x,
            plot_bottom + 5.0
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"10\" fill=\"#444852\">{:.0}</text>\n",
            x,
            plot_bottom + 18.0,
            tick
        ));
        tick += step;
    }

    // Axis captions
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\" fill=\"#2a2e36\">{}</text>\n",
        (plot_left + plot_right) / 2.0,
        h - 14.0,
        escape(&spectrum.domain.unit_label)
    ));
    svg.push_str(&format!(
        "<text x=\"16\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\" fill=\"#2a2e36\" \
         transform=\"rotate(-90 16 {:.1})\">{}</text>\n",
        (plot_top + plot_bottom) / 2.0,
        (plot_top + plot_bottom) / 2.0,
        escape(&spectrum.domain.intensity_label)
    ));

    // Peak stems and labels
    for peak in &spectrum.peaks {
        let x = x_scale.map(peak.position);
        let y_top = y_scale.map(peak.intensity);
        let color = match peak.class {
            PeakClass::BasePeak => "#d03030",
            PeakClass::MolecularIon => "#278b4a",
            _ => "#1a4780",
        };
        svg.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"2\"/>\n",
            x,
            plot_bottom,
            x,
            y_top,
            color
        ));
        if settings.show_labels && peak.wants_label() {
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"10\" fill=\"{}\">{}</text>\n",
                x,
                y_top - 4.0,
                color,
                escape(&peak.display_label())
            ));
        }
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Render and write to disk
pub fn save_svg(
    path: &Path,
    spectrum: &Spectrum,
    regions: &[Region],
    settings: &SvgExportSettings,
) -> Result<(), ExportError> {
    let svg = render_svg(spectrum, regions, settings)?;
    std::fs::write(path, svg)?;
    log::info!("Exported SVG: {}", path.display());
    Ok(())
}

/// A round tick step (1/2/5 × 10ⁿ) giving roughly six ticks over `range`
fn tick_step(range: f64) -> f64 {
    let raw = range.abs() / 6.0;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let step = if norm < 1.5 {
        1.0
    } else if norm < 3.5 {
        2.0
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };
    step * mag
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::spectrum::{AxisDomain, Peak, PeakClass, Spectrum};

    fn acetaldehyde_like() -> Spectrum {
        Spectrum::new(
            "Acetaldehyde",
            "CH3CHO",
            AxisDomain::mass_charge(),
            0.0,
            64.0,
            vec![
                Peak::new(15.0, 20.0),
                Peak::new(28.0, 60.0),
                Peak::with_class(29.0, 100.0, PeakClass::BasePeak),
                Peak::with_class(44.0, 40.0, PeakClass::MolecularIon),
            ],
        )
    }

    /// Stem length in SVG pixels for the peak at `position`
    fn stem_length(svg: &str, x_scale: &LinearScale, position: f64) -> f64 {
        let x = format!("x1=\"{:.1}\"", x_scale.map(position));
        let line = svg
            .lines()
            .find(|l| l.starts_with("<line") && l.contains(&x) && l.contains("stroke-width=\"2\""))
            .unwrap_or_else(|| panic!("no stem at position {}", position));
        let grab = |attr: &str| -> f64 {
            let start = line.find(attr).unwrap() + attr.len();
            let rest = &line[start..];
            let end = rest.find('"').unwrap();
            rest[..end].parse().unwrap()
        };
        (grab("y1=\"") - grab("y2=\"")).abs()
    }

    #[test]
    fn test_end_to_end_base_peak_tallest_and_weak_molecular_ion_labeled() {
        let spectrum = acetaldehyde_like();
        let settings = SvgExportSettings::default();
        let svg = render_svg(&spectrum, &[], &settings).expect("render should succeed");

        let x_scale = LinearScale::new(0.0, 64.0, 60.0, 900.0 - 24.0, false).unwrap();
        let base = stem_length(&svg, &x_scale, 29.0);
        for pos in [15.0, 28.0, 44.0] {
            assert!(
                base > stem_length(&svg, &x_scale, pos),
                "Base peak must be the tallest stem (vs {})",
                pos
            );
        }

        // Molecular ion at 40% is labeled even below the 50% threshold...
        assert!(svg.contains(">44<"), "Molecular ion label missing");
        // ...while the weak unlabeled fragment is not
        assert!(!svg.contains(">15<"), "Weak fragment should not be labeled");
        // The 60% fragment clears the threshold
        assert!(svg.contains(">28<"));
    }

    #[test]
    fn test_regions_render_when_enabled() {
        let spectrum = Spectrum::new(
            "Ethanol (IR)",
            "C2H5OH",
            AxisDomain::wavenumber(),
            400.0,
            4000.0,
            vec![Peak::new(1050.0, 80.0)],
        );
        let regions = vec![Region::new(500.0, 1500.0, "Fingerprint region", 0)];
        let mut settings = SvgExportSettings::default();

        let svg = render_svg(&spectrum, &regions, &settings).unwrap();
        assert!(svg.contains("Fingerprint region"));

        settings.show_regions = false;
        let svg = render_svg(&spectrum, &regions, &settings).unwrap();
        assert!(!svg.contains("Fingerprint region"));
    }

    #[test]
    fn test_reversed_axis_flips_band_edges() {
        // On a reversed axis the high-wavenumber edge of a band maps left
        // of the low edge; the emitted rect must still have positive width.
        let spectrum = Spectrum::new(
            "t",
            "t",
            AxisDomain::wavenumber(),
            400.0,
            4000.0,
            vec![Peak::new(1000.0, 50.0)],
        );
        let regions = vec![Region::new(500.0, 1500.0, "band", 0)];
        let svg = render_svg(&spectrum, &regions, &SvgExportSettings::default()).unwrap();
        let rect_line = svg
            .lines()
            .find(|l| l.starts_with("<rect") && l.contains("fill-opacity"))
            .expect("region rect missing");
        let start = rect_line.find("width=\"").unwrap() + 7;
        let rest = &rect_line[start..];
        let width: f64 = rest[..rest.find('"').unwrap()].parse().unwrap();
        assert!(width > 0.0, "Region rect width must be positive");
    }

    #[test]
    fn test_custom_title() {
        let mut settings = SvgExportSettings::default();
        settings.use_custom_title = true;
        settings.custom_title = "Figure 12.3".to_string();
        let svg = render_svg(&acetaldehyde_like(), &[], &settings).unwrap();
        assert!(svg.contains("Figure 12.3"));
        assert!(!svg.contains("Acetaldehyde —"));
    }

    #[test]
    fn test_degenerate_domain_is_export_error() {
        let spectrum = Spectrum::new(
            "broken",
            "?",
            AxisDomain::mass_charge(),
            50.0,
            50.0,
            vec![Peak::new(50.0, 100.0)],
        );
        let err = render_svg(&spectrum, &[], &SvgExportSettings::default()).unwrap_err();
        assert!(matches!(err, ExportError::Scale(_)));
    }

    #[test]
    fn test_tick_step_is_round() {
        assert_eq!(tick_step(64.0), 10.0);
        assert_eq!(tick_step(12.0), 2.0);
        assert_eq!(tick_step(3600.0), 500.0);
    }

    #[test]
    fn test_label_escaping() {
        let spectrum = Spectrum::new(
            "t",
            "t",
            AxisDomain::mass_charge(),
            0.0,
            100.0,
            vec![Peak::with_label(50.0, 90.0, "<M & friends>")],
        );
        let svg = render_svg(&spectrum, &[], &SvgExportSettings::default()).unwrap();
        assert!(svg.contains("&lt;M &amp; friends&gt;"));
        assert!(!svg.contains("<M & friends>"));
    }
}
