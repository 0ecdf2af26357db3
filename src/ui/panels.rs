use eframe::egui::{self, RichText, Ui};

use crate::data::metrics::{format_currency, Summary};
use crate::data::model::{Day, MealTime};
use crate::state::AppState;
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the sidebar filters. State mutators run only when a widget
/// actually changed, so chart-grouping clicks never trigger a refilter.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Bill amount range ----
    ui.strong("Bill amount");
    let domain = state.dataset.bill_min..=state.dataset.bill_max;
    let (mut lo, mut hi) = state.filters.bill_range;
    let mut range_changed = false;
    range_changed |= ui
        .add(
            egui::Slider::new(&mut lo, domain.clone())
                .prefix("$")
                .fixed_decimals(2)
                .text("min"),
        )
        .changed();
    range_changed |= ui
        .add(
            egui::Slider::new(&mut hi, domain)
                .prefix("$")
                .fixed_decimals(2)
                .text("max"),
        )
        .changed();
    if range_changed {
        state.set_bill_range(lo, hi);
    }
    ui.separator();

    // ---- Meal time ----
    ui.strong("Food service");
    for time in MealTime::ALL {
        let mut checked = state.filters.times.contains(&time);
        if ui.checkbox(&mut checked, time.as_str()).changed() {
            state.toggle_time(time);
        }
    }
    ui.separator();

    // ---- Day of week ----
    ui.strong("Day");
    for day in Day::ALL {
        let mut checked = state.filters.days.contains(&day);
        if ui.checkbox(&mut checked, day.as_str()).changed() {
            state.toggle_day(day);
        }
    }
    ui.separator();

    if ui.button("Reset filters").clicked() {
        state.reset_filters();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with the visible-row status.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Restaurant Tipping Insights");
        ui.separator();
        ui.label(format!(
            "{} of {} records shown",
            state.visible_indices.len(),
            state.dataset.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Central panel – value boxes, data grid, charts
// ---------------------------------------------------------------------------

/// Render the main dashboard area.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    let summary = Summary::compute(&state.dataset, &state.visible_indices);

    // ---- Value boxes ----
    ui.columns(3, |cols: &mut [Ui]| {
        value_box(&mut cols[0], "Total tippers", &summary.row_count.to_string());
        value_box(&mut cols[1], "Average tip", &format_currency(summary.mean_tip));
        value_box(&mut cols[2], "Average bill", &format_currency(summary.mean_bill));
    });
    ui.add_space(8.0);

    // ---- Summary table + scatter side by side ----
    let card_height = (ui.available_height() - 8.0) / 2.0;
    ui.allocate_ui(egui::vec2(ui.available_width(), card_height), |ui: &mut Ui| {
        ui.columns(2, |cols: &mut [Ui]| {
            card(&mut cols[0], "Summary of tips", |ui: &mut Ui| {
                table::data_grid(ui, state);
            });
            card(&mut cols[1], "Bill total vs tips", |ui: &mut Ui| {
                plot::scatter_header(ui, state);
                plot::scatter_plot(ui, state);
            });
        });
    });
    ui.add_space(8.0);

    // ---- Tip percentage distribution ----
    card(ui, "Tip percentages", |ui: &mut Ui| {
        plot::distribution_header(ui, state);
        plot::distribution_plot(ui, state);
    });
}

/// A framed card with a header row.
fn card(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.strong(title);
        ui.separator();
        add_contents(ui);
    });
}

/// One of the three headline metric boxes.
fn value_box(ui: &mut Ui, title: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(title);
            ui.label(RichText::new(value).heading().strong());
        });
    });
}
