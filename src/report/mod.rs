//! Plain-text rendition of a [`Dashboard`], used by `--report`.

mod plot;
#[cfg(test)]
mod tests;

use std::io::{self, Write};

use crate::analytics::CorrelationMatrix;
use crate::dashboard::{group_thousands, Artifact, BarSeries, BoxPlot, Dashboard, Metric, Part, Slice, TITLE};
use crate::models::Preview;

use plot::{bar_length, BAR};

pub use plot::box_strip;

const BAR_WIDTH: usize = 40;
const STRIP_WIDTH: usize = 48;
const HEATMAP_CELL: usize = 8;

pub fn write_report<W: Write>(output: &mut W, dashboard: &Dashboard) -> io::Result<()> {
    writeln!(output, "{}", TITLE)?;
    writeln!(output, "{}", "=".repeat(TITLE.len()))?;
    writeln!(
        output,
        "Filter: {} ({} of {} rows)",
        dashboard.selection,
        group_thousands(dashboard.working_rows),
        group_thousands(dashboard.total_rows)
    )?;

    let mut part = Part::Overview;

    for section in &dashboard.sections {
        if section.part != part {
            part = section.part;
            writeln!(output)?;
            writeln!(output, "{}", part.title())?;
            writeln!(output, "{}", "=".repeat(part.title().len()))?;
        }

        writeln!(output)?;

        if section.filtered {
            writeln!(output, "## {} (filtered)", section.title)?;
        } else {
            writeln!(output, "## {}", section.title)?;
        }

        for artifact in &section.artifacts {
            write_artifact(output, artifact)?;
        }

        if let Some(narrative) = section.narrative {
            writeln!(output)?;
            writeln!(output, "Insights:")?;
            writeln!(output, "{narrative}")?;
        }
    }

    output.flush()
}

fn write_artifact<W: Write>(output: &mut W, artifact: &Artifact) -> io::Result<()> {
    match artifact {
        Artifact::Metrics(metrics) => write_metrics(output, metrics),
        Artifact::Preview(preview) => write_preview(output, preview),
        Artifact::Bars(series) => write_bars(output, series),
        Artifact::Pie(slices) => write_pie(output, slices),
        Artifact::BoxPlot(plot) => write_box_plot(output, plot),
        Artifact::Heatmap(matrix) => write_heatmap(output, matrix)
    }
}

fn write_metrics<W: Write>(output: &mut W, metrics: &[Metric]) -> io::Result<()> {
    for metric in metrics {
        writeln!(output, "{}: {}", metric.label, metric.value)?;
    }

    Ok(())
}

fn write_preview<W: Write>(output: &mut W, preview: &Preview) -> io::Result<()> {
    let widths: Vec<usize> = preview.headers.iter()
        .enumerate()
        .map(|(column, header)| {
            preview.rows.iter()
                .filter_map(|row| row.get(column))
                .map(String::len)
                .fold(header.len(), usize::max)
        })
        .collect();

    let format_row = |cells: &[String]| {
        cells.iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:>width$}", width = *width))
            .collect::<Vec<_>>()
            .join("  ")
    };

    writeln!(output, "{}", format_row(&preview.headers))?;

    for row in &preview.rows {
        writeln!(output, "{}", format_row(row))?;
    }

    Ok(())
}

fn write_bars<W: Write>(output: &mut W, series: &BarSeries) -> io::Result<()> {
    let label_width = series.bars.iter().map(|bar| bar.label.len()).max().unwrap_or(0);
    let max = series.max_value();
    let bar_width = BAR_WIDTH;

    for bar in &series.bars {
        let glyphs = BAR.to_string().repeat(bar_length(bar.value, max, BAR_WIDTH));
        writeln!(output, "{:<label_width$}  {:<bar_width$}  {}", bar.label, glyphs, series.format_value(bar.value))?;
    }

    Ok(())
}

fn write_pie<W: Write>(output: &mut W, slices: &[Slice]) -> io::Result<()> {
    let label_width = slices.iter().map(|slice| slice.label.len()).max().unwrap_or(0);

    for slice in slices {
        let share = slice.percent.map_or_else(|| "n/a".to_string(), |percent| format!("{percent:.2}%"));
        let glyphs = BAR.to_string().repeat(bar_length(slice.percent.unwrap_or(0.0), 100.0, BAR_WIDTH));
        writeln!(output, "{:<label_width$}  {:>12}  {:>7}  {}", slice.label, group_thousands(slice.count), share, glyphs)?;
    }

    Ok(())
}

fn write_box_plot<W: Write>(output: &mut W, plot: &BoxPlot) -> io::Result<()> {
    let Some(range) = plot.axis_range() else {
        return writeln!(output, "No {} values to plot", plot.measure);
    };

    writeln!(output, "{} by isFraud, axis {:.2} to {:.2}", plot.measure, range.0, range.1)?;

    let label_width = plot.groups.iter().map(|group| group.label.len()).max().unwrap_or(0);

    for group in &plot.groups {
        match &group.stats {
            Some(stats) => writeln!(
                output,
                "{:<label_width$}  [{}]  median={:.2} q1={:.2} q3={:.2} n={} outliers={}",
                group.label,
                box_strip(stats, range, STRIP_WIDTH),
                stats.median,
                stats.q1,
                stats.q3,
                group_thousands(stats.count),
                group_thousands(stats.outliers)
            )?,
            None => writeln!(output, "{:<label_width$}  (no rows)", group.label)?
        }
    }

    Ok(())
}

fn write_heatmap<W: Write>(output: &mut W, matrix: &CorrelationMatrix) -> io::Result<()> {
    if matrix.is_empty() {
        return writeln!(output, "No numeric columns to correlate");
    }

    let label_width = matrix.columns.iter().map(String::len).max().unwrap_or(0);

    let cell = HEATMAP_CELL;

    write!(output, "{:label_width$}", "")?;
    for column in &matrix.columns {
        let short: String = column.chars().take(cell - 1).collect();
        write!(output, "{short:>cell$}")?;
    }
    writeln!(output)?;

    for (row, name) in matrix.columns.iter().enumerate() {
        write!(output, "{name:<label_width$}")?;
        for column in 0..matrix.len() {
            let value = matrix.values[[row, column]];
            if value.is_nan() {
                write!(output, "{:>cell$}", "nan")?;
            } else {
                write!(output, "{value:>cell$.2}")?;
            }
        }
        writeln!(output)?;
    }

    Ok(())
}
