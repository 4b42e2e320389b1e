use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{PayloadRange, SiteSelection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Site dropdown
// ---------------------------------------------------------------------------

/// Case-insensitive substring match used by the dropdown search box.
pub fn matches_search(site: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || site.to_lowercase().contains(&query.to_lowercase())
}

/// Dropdown entries: "All Sites" first, then one tagged option per site.
///
/// Site names are never parsed, so a site called "ALL" stays a site.
pub fn site_options(sites: &[String]) -> Vec<SiteSelection> {
    std::iter::once(SiteSelection::AllSites)
        .chain(sites.iter().cloned().map(SiteSelection::Site))
        .collect()
}

/// Searchable site selector: "All Sites" followed by every site in file order.
pub fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    let current = state.site.clone();
    let options = site_options(state.dataset.launch_sites());
    let mut chosen: Option<SiteSelection> = None;

    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current.label().to_string())
        .width(ui.available_width().min(400.0))
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.site_search)
                    .hint_text("Select a Launch Site here"),
            );
            ui.separator();

            for option in options {
                if let SiteSelection::Site(name) = &option {
                    if !matches_search(name, &state.site_search) {
                        continue;
                    }
                }
                if ui
                    .selectable_label(current == option, option.label())
                    .clicked()
                {
                    chosen = Some(option);
                }
            }
        });

    if let Some(site) = chosen {
        log::info!("site selected: {}", site.value());
        state.site_search.clear();
        state.select_site(site);
    }
}

// ---------------------------------------------------------------------------
// Payload range slider
// ---------------------------------------------------------------------------

/// Keep `low <= high` after one handle moved: the other handle follows.
pub fn keep_ordered(low: f64, high: f64, low_moved: bool) -> (f64, f64) {
    if low <= high {
        (low, high)
    } else if low_moved {
        (low, low)
    } else {
        (high, high)
    }
}

/// Two sliders (low / high) with tick labels underneath.
pub fn payload_slider(ui: &mut Ui, state: &mut AppState) {
    let min = state.config.payload_min;
    let max = state.config.payload_max;
    let step = state.config.payload_step;

    let mut low = state.payload_range.low();
    let mut high = state.payload_range.high();

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, min..=max)
                .step_by(step)
                .text("Min (kg)"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, min..=max)
                .step_by(step)
                .text("Max (kg)"),
        )
        .changed();

    let marks = state.config.payload_marks();
    ui.columns(marks.len(), |cols: &mut [Ui]| {
        for (col, mark) in cols.iter_mut().zip(&marks) {
            col.small(format!("{mark:.0}"));
        }
    });

    if low_changed || high_changed {
        let (low, high) = keep_ordered(low, high, low_changed);
        state.set_payload_range(PayloadRange::new(low, high));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if state.dataset.is_empty() {
            ui.label("No launches loaded");
        } else {
            ui.label(format!(
                "{} launches from {} sites",
                state.dataset.len(),
                state.dataset.launch_sites().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launches from {} ({} sites)",
                    dataset.len(),
                    path.display(),
                    dataset.launch_sites().len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
