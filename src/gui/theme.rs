/// Theme system — switchable color themes for the application
///
/// A Light ("Lecture") and a Dark ("Night lab") theme.

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AppTheme {
    Light,
    Dark,
}

impl AppTheme {
    pub fn label(&self) -> &'static str {
        match self {
            AppTheme::Light => "☀ Lecture",
            AppTheme::Dark => "🌙 Night lab",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            AppTheme::Light => AppTheme::Dark,
            AppTheme::Dark => AppTheme::Light,
        }
    }
}

/// All colors a theme needs to provide
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub panel_fill: egui::Color32,
    pub window_fill: egui::Color32,
    pub faint_bg: egui::Color32,

    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,
    pub text_muted: egui::Color32,

    pub accent: egui::Color32,
    pub success: egui::Color32,
    pub warning: egui::Color32,
    pub error: egui::Color32,

    // Spectrum plot
    pub peak_stem: egui::Color32,
    pub peak_stem_hover: egui::Color32,
    pub peak_marker: egui::Color32,
    pub peak_label: egui::Color32,
    pub base_peak: egui::Color32,
    pub molecular_ion: egui::Color32,
    pub region_fills: [egui::Color32; 4],
    pub region_label: egui::Color32,

    // Tab buttons
    pub tab_active_bg: egui::Color32,
    pub tab_active_text: egui::Color32,
    pub tab_inactive_bg: egui::Color32,
    pub tab_inactive_text: egui::Color32,

    // Status bar
    pub status_bar_bg: egui::Color32,
    pub status_text: egui::Color32,

    pub is_dark: bool,
}

impl ThemeColors {
    pub fn from_theme(theme: AppTheme) -> Self {
        match theme {
            AppTheme::Light => Self::light(),
            AppTheme::Dark => Self::dark(),
        }
    }

    /// Region fill for a catalog color key (cycles past the palette end)
    pub fn region_fill(&self, color_key: usize) -> egui::Color32 {
        self.region_fills[color_key % self.region_fills.len()]
    }

    fn light() -> Self {
        Self {
            panel_fill: egui::Color32::from_rgb(0xF7, 0xF7, 0xF8),
            window_fill: egui::Color32::from_rgb(0xFF, 0xFF, 0xFF),
            faint_bg: egui::Color32::from_rgb(0xF0, 0xF1, 0xF3),

            text_primary: egui::Color32::from_rgb(0x2A, 0x2E, 0x36),
            text_secondary: egui::Color32::from_rgb(0x44, 0x48, 0x52),
            text_muted: egui::Color32::from_rgb(0x88, 0x8C, 0x94),

            accent: egui::Color32::from_rgb(0x3B, 0x7D, 0xC0),
            success: egui::Color32::from_rgb(0x27, 0x8B, 0x4A),
            warning: egui::Color32::from_rgb(0xB8, 0x8B, 0x00),
            error: egui::Color32::from_rgb(0xD0, 0x30, 0x30),

            peak_stem: egui::Color32::from_rgb(0x1A, 0x47, 0x80),
            peak_stem_hover: egui::Color32::from_rgb(0xE0, 0x8A, 0x00),
            peak_marker: egui::Color32::from_rgb(0x1A, 0x47, 0x80),
            peak_label: egui::Color32::from_rgb(0x44, 0x48, 0x52),
            base_peak: egui::Color32::from_rgb(0xD0, 0x30, 0x30),
            molecular_ion: egui::Color32::from_rgb(0x27, 0x8B, 0x4A),
            region_fills: [
                egui::Color32::from_rgba_premultiplied(0x40, 0x80, 0xC0, 0x28),
                egui::Color32::from_rgba_premultiplied(0xC0, 0x60, 0x40, 0x28),
                egui::Color32::from_rgba_premultiplied(0x40, 0xA0, 0x60, 0x28),
                egui::Color32::from_rgba_premultiplied(0x90, 0x40, 0xC0, 0x28),
            ],
            region_label: egui::Color32::from_rgb(0x70, 0x75, 0x80),

            tab_active_bg: egui::Color32::from_rgb(0x3B, 0x7D, 0xC0),
            tab_active_text: egui::Color32::WHITE,
            tab_inactive_bg: egui::Color32::from_rgb(0xE8, 0xEA, 0xED),
            tab_inactive_text: egui::Color32::from_rgb(0x55, 0x58, 0x62),

            status_bar_bg: egui::Color32::from_rgb(0xF0, 0xF1, 0xF3),
            status_text: egui::Color32::from_rgb(0x44, 0x48, 0x52),

            is_dark: false,
        }
    }

    fn dark() -> Self {
        Self {
            panel_fill: egui::Color32::from_rgb(0x14, 0x16, 0x1C),
            window_fill: egui::Color32::from_rgb(0x1A, 0x1D, 0x24),
            faint_bg: egui::Color32::from_rgb(0x20, 0x23, 0x2C),

            text_primary: egui::Color32::from_rgb(0xE0, 0xE2, 0xE8),
            text_secondary: egui::Color32::from_rgb(0xA8, 0xAC, 0xB8),
            text_muted: egui::Color32::from_rgb(0x6A, 0x6E, 0x7A),

            accent: egui::Color32::from_rgb(0x5B, 0x9B, 0xD5),
            success: egui::Color32::from_rgb(0x4A, 0xC4, 0x7E),
            warning: egui::Color32::from_rgb(0xE8, 0xC0, 0x30),
            error: egui::Color32::from_rgb(0xFF, 0x55, 0x55),

            peak_stem: egui::Color32::from_rgb(0x6F, 0xB3, 0xFF),
            peak_stem_hover: egui::Color32::from_rgb(0xFF, 0xB0, 0x30),
            peak_marker: egui::Color32::from_rgb(0x6F, 0xB3, 0xFF),
            peak_label: egui::Color32::from_rgb(0xC8, 0xCC, 0xD8),
            base_peak: egui::Color32::from_rgb(0xFF, 0x66, 0x66),
            molecular_ion: egui::Color32::from_rgb(0x4A, 0xC4, 0x7E),
            region_fills: [
                egui::Color32::from_rgba_premultiplied(0x40, 0x80, 0xC0, 0x38),
                egui::Color32::from_rgba_premultiplied(0xC0, 0x60, 0x40, 0x38),
                egui::Color32::from_rgba_premultiplied(0x40, 0xA0, 0x60, 0x38),
                egui::Color32::from_rgba_premultiplied(0x90, 0x40, 0xC0, 0x38),
            ],
            region_label: egui::Color32::from_rgb(0x8A, 0x8E, 0x9A),

            tab_active_bg: egui::Color32::from_rgb(0x5B, 0x9B, 0xD5),
            tab_active_text: egui::Color32::from_rgb(0x10, 0x12, 0x18),
            tab_inactive_bg: egui::Color32::from_rgb(0x22, 0x25, 0x2E),
            tab_inactive_text: egui::Color32::from_rgb(0x8B, 0x8F, 0x9C),

            status_bar_bg: egui::Color32::from_rgb(0x10, 0x12, 0x18),
            status_text: egui::Color32::from_rgb(0xA8, 0xAC, 0xB8),

            is_dark: true,
        }
    }
}

/// Apply a theme to the egui context
pub fn apply_theme(ctx: &egui::Context, theme: AppTheme) {
    let c = ThemeColors::from_theme(theme);

    let mut visuals = if c.is_dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.panel_fill = c.panel_fill;
    visuals.window_fill = c.window_fill;
    visuals.faint_bg_color = c.faint_bg;
    visuals.selection.stroke = egui::Stroke::new(1.5, c.accent);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, c.accent);
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, c.text_secondary);

    ctx.set_visuals(visuals);
}
