use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::{AppState, SortKey};

// ---------------------------------------------------------------------------
// Data grid (all columns, all visible rows, sortable headers)
// ---------------------------------------------------------------------------

/// Render the filtered records as a scrollable grid. Clicking a header
/// sorts by that column; clicking it again flips the direction.
pub fn data_grid(ui: &mut Ui, state: &mut AppState) {
    let rows = state.sorted_visible();
    let sort = state.sort;
    let dataset = &state.dataset;

    let mut clicked: Option<SortKey> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(48.0), SortKey::ALL.len())
        .header(20.0, |mut header| {
            for key in SortKey::ALL {
                header.col(|ui: &mut Ui| {
                    let marker = match sort {
                        Some((k, true)) if k == key => " ⬆",
                        Some((k, false)) if k == key => " ⬇",
                        _ => "",
                    };
                    if ui
                        .button(format!("{}{marker}", key.header()))
                        .clicked()
                    {
                        clicked = Some(key);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let rec = &dataset.records[rows[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.2}", rec.total_bill));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.2}", rec.tip));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(rec.sex.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(rec.smoker.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(rec.day.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(rec.time.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(rec.size.to_string());
                });
            });
        });

    if let Some(key) = clicked {
        state.toggle_sort(key);
    }
}
