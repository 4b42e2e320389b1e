use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::{outcome_color, ColorMap};
use crate::data::model::Outcome;
use crate::data::resolve::{OutcomeCounts, PieChart, ScatterChart};

const CHART_HEIGHT: f32 = 320.0;

/// Arc resolution: vertices per full turn.
const ARC_STEPS: usize = 96;

// ---------------------------------------------------------------------------
// Pie geometry
// ---------------------------------------------------------------------------

/// One outcome's share of the pie, as angles in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub outcome: Outcome,
    pub count: usize,
    pub fraction: f64,
    pub start: f64,
    pub end: f64,
}

/// Lay out non-empty outcomes clockwise from twelve o'clock, success first.
pub fn pie_slices(counts: &OutcomeCounts) -> Vec<PieSlice> {
    let total = counts.total();
    if total == 0 {
        return Vec::new();
    }

    let mut start = FRAC_PI_2;
    let mut slices = Vec::new();
    for outcome in [Outcome::Success, Outcome::Failure] {
        let count = counts.get(outcome);
        if count == 0 {
            continue;
        }
        let fraction = count as f64 / total as f64;
        let end = start - fraction * TAU;
        slices.push(PieSlice {
            outcome,
            count,
            fraction,
            start,
            end,
        });
        start = end;
    }
    slices
}

/// Split the wedge between two angles into convex pieces of at most 90°.
///
/// `egui_plot` only fills convex polygons correctly, so a wedge wider than
/// a quarter turn has to be drawn as several polygons.
pub fn wedge_segments(start: f64, end: f64, radius: f64) -> Vec<Vec<[f64; 2]>> {
    let sweep = end - start;
    let pieces = ((sweep.abs() / FRAC_PI_2).ceil() as usize).max(1);
    let piece_sweep = sweep / pieces as f64;

    (0..pieces)
        .map(|p| {
            let a0 = start + p as f64 * piece_sweep;
            let steps = ((piece_sweep.abs() / TAU * ARC_STEPS as f64).ceil() as usize).max(1);
            let mut poly = Vec::with_capacity(steps + 2);
            poly.push([0.0, 0.0]);
            for s in 0..=steps {
                let a = a0 + piece_sweep * s as f64 / steps as f64;
                poly.push([radius * a.cos(), radius * a.sin()]);
            }
            poly
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Render the success/failure pie.
pub fn pie_chart(ui: &mut Ui, chart: &PieChart) {
    ui.label(RichText::new(&chart.title).strong().size(16.0));

    let slices = pie_slices(&chart.counts);

    Plot::new("success_pie_chart")
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.1)
        .include_y(1.1)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            if slices.is_empty() {
                plot_ui.text(
                    Text::new(PlotPoint::new(0.0, 0.0), "No launches for this selection")
                        .anchor(Align2::CENTER_CENTER),
                );
                return;
            }

            for slice in &slices {
                let color = outcome_color(slice.outcome);
                let name = slice.outcome.to_string();
                for segment in wedge_segments(slice.start, slice.end, 1.0) {
                    let points: PlotPoints = segment.into_iter().collect();
                    plot_ui.polygon(
                        Polygon::new(points)
                            .name(&name)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, Color32::WHITE)),
                    );
                }

                // Percentage label at the middle of the wedge.
                let mid = (slice.start + slice.end) / 2.0;
                let label_r = if slice.fraction >= 1.0 { 0.0 } else { 0.6 };
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(label_r * mid.cos(), label_r * mid.sin()),
                        RichText::new(format!("{:.1}% ({})", slice.fraction * 100.0, slice.count))
                            .color(Color32::WHITE)
                            .strong(),
                    )
                    .anchor(Align2::CENTER_CENTER),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Group scatter points into one `[payload, class]` series per booster category.
pub fn scatter_series(chart: &ScatterChart) -> BTreeMap<&str, Vec<[f64; 2]>> {
    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for p in &chart.points {
        series
            .entry(p.booster_version_category.as_str())
            .or_default()
            .push([p.payload_mass_kg, f64::from(p.outcome.class())]);
    }
    series
}

/// Render payload vs. outcome, coloured by booster category.
pub fn scatter_chart(ui: &mut Ui, chart: &ScatterChart, color_map: &ColorMap) {
    ui.label(RichText::new(&chart.title).strong().size(16.0));

    let series = scatter_series(chart);

    Plot::new("success_payload_scatter_chart")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.25)
        .include_y(1.25)
        .include_x(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, points) in series {
                let points: PlotPoints = points.into_iter().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(color_map.color_for(category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(5.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::resolve::ScatterPoint;
    use std::f64::consts::PI;

    #[test]
    fn empty_counts_have_no_slices() {
        assert!(pie_slices(&OutcomeCounts::default()).is_empty());
    }

    #[test]
    fn slice_fractions_cover_full_turn() {
        let slices = pie_slices(&OutcomeCounts {
            success: 3,
            failure: 1,
        });
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].outcome, Outcome::Success);
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!((slices[0].fraction - 0.75).abs() < 1e-12);
        let sweep = slices[0].start - slices[1].end;
        assert!((sweep - TAU).abs() < 1e-9);
    }

    #[test]
    fn single_outcome_is_whole_pie() {
        let slices = pie_slices(&OutcomeCounts {
            success: 0,
            failure: 7,
        });
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].outcome, Outcome::Failure);
        assert_eq!(slices[0].fraction, 1.0);
    }

    #[test]
    fn wedge_segments_are_at_most_quarter_turns() {
        for sweep in [0.1, FRAC_PI_2, PI, 3.0, TAU] {
            let segments = wedge_segments(0.0, -sweep, 1.0);
            assert_eq!(
                segments.len(),
                ((sweep / FRAC_PI_2).ceil() as usize).max(1)
            );
            for seg in &segments {
                assert_eq!(seg[0], [0.0, 0.0]);
                let first = seg[1];
                let last = seg[seg.len() - 1];
                let a0 = first[1].atan2(first[0]);
                let a1 = last[1].atan2(last[0]);
                let mut d = (a0 - a1).abs();
                if d > PI {
                    d = TAU - d;
                }
                assert!(d <= FRAC_PI_2 + 1e-9, "segment spans {d} rad");
            }
        }
    }

    #[test]
    fn scatter_series_groups_by_booster() {
        let chart = ScatterChart {
            title: String::new(),
            points: vec![
                ScatterPoint {
                    payload_mass_kg: 500.0,
                    outcome: Outcome::Success,
                    booster_version_category: "FT".into(),
                },
                ScatterPoint {
                    payload_mass_kg: 2000.0,
                    outcome: Outcome::Failure,
                    booster_version_category: "v1.1".into(),
                },
                ScatterPoint {
                    payload_mass_kg: 3000.0,
                    outcome: Outcome::Success,
                    booster_version_category: "FT".into(),
                },
            ],
        };
        let series = scatter_series(&chart);
        assert_eq!(series.len(), 2);
        assert_eq!(series["FT"], vec![[500.0, 1.0], [3000.0, 1.0]]);
        assert_eq!(series["v1.1"], vec![[2000.0, 0.0]]);
    }
}
