use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{BoxElem, BoxPlot, BoxSpread, Line, Plot, PlotPoints, Points};

use crate::color::{ColorMap, UNGROUPED_COLOR};
use crate::data::metrics::{format_percent, tip_percent_quartiles, Summary};
use crate::data::model::GroupField;
use crate::data::trend;
use crate::state::AppState;

/// Trend-curve colour (indigo).
const TREND_COLOR: Color32 = Color32::from_rgb(75, 0, 130);

// ---------------------------------------------------------------------------
// Scatter: bill amount vs tip amount
// ---------------------------------------------------------------------------

/// Radio row selecting the scatter colour grouping. Does not touch the
/// filter cache.
pub fn scatter_header(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Color by:");
        ui.radio_value(&mut state.scatter_group, None, "none");
        for field in GroupField::ALL {
            ui.radio_value(&mut state.scatter_group, Some(field), field.as_str());
        }
    });
}

/// Render the bill-vs-tip scatter with the smoothed trend overlay.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let dataset = &state.dataset;
    let visible = &state.visible_indices;

    let pairs: Vec<(f64, f64)> = visible
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            (rec.total_bill, rec.tip)
        })
        .collect();
    let curve = trend::lowess(&pairs);

    Plot::new("scatter_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Bill ($)")
        .y_axis_label("Tip amount ($)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            match state.scatter_group {
                Some(field) => {
                    // One point series per group label so the legend shows
                    // each label once.
                    let color_map = ColorMap::new(&field.domain());
                    for label in field.domain() {
                        let points: PlotPoints = visible
                            .iter()
                            .map(|&i| &dataset.records[i])
                            .filter(|rec| field.value_of(rec) == label)
                            .map(|rec| [rec.total_bill, rec.tip])
                            .collect();
                        plot_ui.points(
                            Points::new(points)
                                .name(label)
                                .color(color_map.color_for(label))
                                .radius(2.5),
                        );
                    }
                }
                None => {
                    let points: PlotPoints =
                        pairs.iter().map(|&(x, y)| [x, y]).collect();
                    plot_ui.points(Points::new(points).color(UNGROUPED_COLOR).radius(2.5));
                }
            }

            if !curve.is_empty() {
                let line: PlotPoints = curve.iter().copied().collect();
                plot_ui.line(Line::new(line).color(TREND_COLOR).width(2.0).name("trend"));
            }
        });
}

// ---------------------------------------------------------------------------
// Distribution: tip percentage per category group
// ---------------------------------------------------------------------------

/// Radio row selecting the distribution split axis, plus the overall mean
/// tip percentage of the filtered view.
pub fn distribution_header(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Split by:");
        for field in GroupField::ALL {
            ui.radio_value(&mut state.distribution_split, field, field.as_str());
        }
        ui.separator();
        let summary = Summary::compute(&state.dataset, &state.visible_indices);
        ui.label(format!(
            "Mean tip: {}",
            format_percent(summary.mean_tip_percent)
        ));
    });
}

/// Render the tip-percentage distribution as one box per group: whiskers at
/// min/max, box at the quartiles. Groups with no visible rows draw nothing
/// at their slot.
pub fn distribution_plot(ui: &mut Ui, state: &AppState) {
    let field = state.distribution_split;
    let labels = field.domain();
    let color_map = ColorMap::new(&labels);
    let quartiles = tip_percent_quartiles(&state.dataset, &state.visible_indices, field);

    let boxes: Vec<BoxElem> = labels
        .iter()
        .enumerate()
        .filter_map(|(slot, label)| {
            let q = quartiles.get(label)?;
            let color = color_map.color_for(label);
            // Plot in percent, not fraction.
            Some(
                BoxElem::new(
                    slot as f64,
                    BoxSpread::new(
                        q.min * 100.0,
                        q.q1 * 100.0,
                        q.median * 100.0,
                        q.q3 * 100.0,
                        q.max * 100.0,
                    ),
                )
                .name(*label)
                .box_width(0.5)
                .whisker_width(0.25)
                .stroke(Stroke::new(1.5, color))
                .fill(color.gamma_multiply(0.25)),
            )
        })
        .collect();

    let axis_labels: Vec<String> = labels.iter().map(|l| l.to_string()).collect();

    Plot::new("distribution_plot")
        .y_axis_label("Tip (%)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .x_axis_formatter(move |mark, _range| {
            let slot = mark.value.round();
            if (mark.value - slot).abs() > 1e-6 || slot < 0.0 {
                return String::new();
            }
            axis_labels
                .get(slot as usize)
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            if !boxes.is_empty() {
                plot_ui.box_plot(BoxPlot::new(boxes));
            }
        });
}
