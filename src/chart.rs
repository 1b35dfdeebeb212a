//! Timeline chart rendering
//!
//! Renders the 1440-bucket modifier timeline as a PNG line chart, x-axis
//! labeled in HH:MM with a tick roughly every two hours.

use crate::timeline::{Timeline, MINUTES_PER_DAY};
use anyhow::{Context, Result};
use plotters::prelude::*;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1600, 900);

/// Render a per-minute modifier occurrence timeline to `path`.
pub fn render_timeline(timeline: &Timeline, title: &str, path: &Path) -> Result<()> {
    let y_max = timeline.max().max(1) as f64 * 1.05;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..MINUTES_PER_DAY as i32, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_labels(13)
        .x_label_formatter(&|minute| format!("{:02}:{:02}", minute / 60, minute % 60))
        .x_desc("Time of day")
        .y_desc("Modifier occurrences")
        .draw()?;

    chart.draw_series(LineSeries::new(
        timeline
            .buckets()
            .iter()
            .enumerate()
            .map(|(minute, &count)| (minute as i32, count as f64)),
        &BLUE,
    ))?;

    root.present()
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;
    Ok(())
}
