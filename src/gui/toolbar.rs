/// Toolbar — top menu bar with file operations and quick actions

use std::path::PathBuf;

/// Actions that can be triggered from the toolbar
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    None,
    OpenPeakTable,
    SavePeakTable,
    ExportSvg,
    ResetView,
    ThemeToggle,
    ShowAbout,
}

/// Render the toolbar and return any triggered action
pub fn show_toolbar(ctx: &egui::Context, theme_label: &str) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            // File menu
            ui.menu_button("📁 File", |ui| {
                if ui.button("📂 Open Peak Table…").clicked() {
                    action = ToolbarAction::OpenPeakTable;
                    ui.close_menu();
                }
                if ui.button("💾 Save Peak Table…").clicked() {
                    action = ToolbarAction::SavePeakTable;
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("🖼 Export SVG…").clicked() {
                    action = ToolbarAction::ExportSvg;
                    ui.close_menu();
                }
            });

            // View menu
            ui.menu_button("🔍 View", |ui| {
                if ui.button("🔄 Reset View").clicked() {
                    action = ToolbarAction::ResetView;
                    ui.close_menu();
                }
                ui.separator();
                if ui.button(format!("🎨 Theme: {}", theme_label)).clicked() {
                    action = ToolbarAction::ThemeToggle;
                    ui.close_menu();
                }
            });

            // Help menu
            ui.menu_button("❓ Help", |ui| {
                if ui.button("ℹ About").clicked() {
                    action = ToolbarAction::ShowAbout;
                    ui.close_menu();
                }
            });

            // Spacer + quick theme toggle
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(
                        egui::Button::new(egui::RichText::new(theme_label).size(12.0))
                            .corner_radius(12.0),
                    )
                    .clicked()
                {
                    action = ToolbarAction::ThemeToggle;
                }
                ui.separator();
                ui.label(
                    egui::RichText::new("Spectra Tutor")
                        .color(egui::Color32::from_rgb(0x70, 0x75, 0x80))
                        .size(12.0),
                );
            });
        });
    });

    action
}

/// Show file-open dialog for JSON peak tables
pub fn open_peak_table_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open Peak Table")
        .add_filter("JSON peak table", &["json"])
        .add_filter("All Files", &["*"])
        .pick_file()
}

/// Show save dialog for JSON peak tables
pub fn save_peak_table_dialog(suggested: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save Peak Table")
        .set_file_name(format!("{}.json", suggested))
        .add_filter("JSON peak table", &["json"])
        .save_file()
}

/// Show save dialog for SVG export
pub fn save_svg_dialog(suggested: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Export Spectrum Image")
        .set_file_name(format!("{}.svg", suggested))
        .add_filter("SVG Image", &["svg"])
        .save_file()
}
