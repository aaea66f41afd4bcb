//! Frame layout: header, filter sidebar, section panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Bar as ChartBar, BarChart, BarGroup, Block, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table, Wrap
};
use ratatui::Frame;

use crate::analytics::CorrelationMatrix;
use crate::dashboard::{Artifact, BarSeries, BoxPlot, Metric, Section, Slice, TITLE};
use crate::models::Preview;
use crate::report::box_strip;
use crate::storage::TableSource;
use crate::tui::app::{AppState, Focus};
use crate::tui::theme;

const SIDEBAR_WIDTH: u16 = 28;
const HEATMAP_CELL: u16 = 7;

pub fn draw<S: TableSource>(f: &mut Frame, app: &AppState<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(5), Constraint::Length(1)])
        .split(f.area());

    draw_header(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[1]);

    draw_sidebar(f, body[0], app);
    draw_section(f, body[1], app);

    let status = Paragraph::new(Line::from(Span::styled(app.status.as_str(), theme::muted())));
    f.render_widget(status, chunks[2]);
}

fn draw_header<S: TableSource>(f: &mut Frame, area: Rect, app: &AppState<S>) {
    let dashboard = &app.dashboard;
    let lines = vec![
        Line::from(Span::styled(TITLE, theme::accent_bold())),
        Line::from(Span::styled(
            format!("Filter: {} ({} of {} rows)", dashboard.selection, dashboard.working_rows, dashboard.total_rows),
            theme::text()
        )),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_sidebar<S: TableSource>(f: &mut Frame, area: Rect, app: &AppState<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(app.kinds().len() as u16 + 2), Constraint::Min(3)])
        .split(area);

    let filter_items: Vec<ListItem> = app.kinds().iter()
        .enumerate()
        .map(|(index, kind)| {
            let mark = if app.options.selection.contains(*kind) { "[x]" } else { "[ ]" };
            let style = if app.focus == Focus::Filter && index == app.cursor { theme::highlighted() } else { theme::text() };
            ListItem::new(Line::from(Span::styled(format!("{mark} {kind}"), style)))
        })
        .collect();

    let filter = List::new(filter_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border(app.focus == Focus::Filter))
            .title(" Transaction Type ")
    );
    f.render_widget(filter, chunks[0]);

    let section_items: Vec<ListItem> = app.dashboard.sections.iter()
        .enumerate()
        .map(|(index, section)| {
            let style = if index == app.section {
                if app.focus == Focus::Sections { theme::highlighted() } else { theme::accent() }
            } else {
                theme::text()
            };
            ListItem::new(Line::from(Span::styled(section.title, style)))
        })
        .collect();

    let sections = List::new(section_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border(app.focus == Focus::Sections))
            .title(" Sections ")
    );
    f.render_widget(sections, chunks[1]);
}

fn draw_section<S: TableSource>(f: &mut Frame, area: Rect, app: &AppState<S>) {
    let Some(section) = app.current_section() else {
        return;
    };

    let title = if section.filtered {
        format!(" {} | {} (filtered) ", section.part.title(), section.title)
    } else {
        format!(" {} | {} ", section.part.title(), section.title)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(Span::styled(title, theme::accent_bold()));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let narrative_height = if section.narrative.is_some() { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(narrative_height)])
        .split(inner);

    draw_artifacts(f, chunks[0], section);

    if let Some(narrative) = section.narrative {
        let paragraph = Paragraph::new(narrative)
            .style(theme::muted())
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP).title(" Insights "));
        f.render_widget(paragraph, chunks[1]);
    }
}

fn draw_artifacts(f: &mut Frame, area: Rect, section: &Section) {
    if section.artifacts.is_empty() {
        return;
    }

    let count = section.artifacts.len() as u32;
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(section.artifacts.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (artifact, area) in section.artifacts.iter().zip(areas.iter()) {
        match artifact {
            Artifact::Metrics(metrics) => draw_metrics(f, *area, metrics),
            Artifact::Preview(preview) => draw_preview(f, *area, preview),
            Artifact::Bars(series) => draw_bars(f, *area, series),
            Artifact::Pie(slices) => draw_pie(f, *area, slices),
            Artifact::BoxPlot(plot) => draw_box_plot(f, *area, plot),
            Artifact::Heatmap(matrix) => draw_heatmap(f, *area, matrix)
        }
    }
}

fn draw_metrics(f: &mut Frame, area: Rect, metrics: &[Metric]) {
    let count = metrics.len().max(1) as u32;
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(metrics.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (metric, tile) in metrics.iter().zip(tiles.iter()) {
        let paragraph = Paragraph::new(Line::from(Span::styled(metric.value.as_str(), theme::accent_bold())))
            .block(Block::default().borders(Borders::ALL).border_style(theme::muted()).title(metric.label));
        f.render_widget(paragraph, *tile);
    }
}

fn draw_preview(f: &mut Frame, area: Rect, preview: &Preview) {
    let widths: Vec<Constraint> = preview.headers.iter()
        .enumerate()
        .map(|(column, header)| {
            let widest = preview.rows.iter()
                .filter_map(|row| row.get(column))
                .map(String::len)
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or_default();
            Constraint::Length(widest as u16)
        })
        .collect();

    let header = Row::new(preview.headers.iter().map(|name| Cell::from(name.as_str())))
        .style(theme::accent_bold())
        .height(1);
    let rows = preview.rows.iter().map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))).height(1));

    let table = Table::new(rows, widths).header(header).column_spacing(2).style(theme::text());
    f.render_widget(table, area);
}

fn draw_bars(f: &mut Frame, area: Rect, series: &BarSeries) {
    // BarChart works on integers; keep two decimals of resolution.
    let bars: Vec<ChartBar> = series.bars.iter()
        .map(|bar| {
            ChartBar::default()
                .value((bar.value.max(0.0) * 100.0).round() as u64)
                .label(Line::from(bar.label.clone()))
                .text_value(series.format_value(bar.value))
                .style(Style::default().fg(theme::LEGITIMATE))
                .value_style(Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().title(format!("by {}", series.measure)).title_style(theme::muted()))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars))
        .max(((series.max_value().max(0.0) * 100.0).round() as u64).max(1));

    f.render_widget(chart, area);
}

fn draw_pie(f: &mut Frame, area: Rect, slices: &[Slice]) {
    let count = slices.len().max(1) as u32;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(slices.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (index, (slice, row)) in slices.iter().zip(rows.iter()).enumerate() {
        let color = if index == 0 { theme::LEGITIMATE } else { theme::FRAUD };
        let label = match slice.percent {
            Some(percent) => format!("{} ({percent:.1}%)", slice.count),
            None => slice.count.to_string()
        };

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).border_style(theme::muted()).title(slice.label))
            .gauge_style(Style::default().fg(color))
            .ratio((slice.percent.unwrap_or(0.0) / 100.0).clamp(0.0, 1.0))
            .label(label);
        f.render_widget(gauge, *row);
    }
}

fn draw_box_plot(f: &mut Frame, area: Rect, plot: &BoxPlot) {
    let label_width = plot.groups.iter().map(|group| group.label.len()).max().unwrap_or_default();
    let strip_width = (area.width as usize).saturating_sub(label_width + 2).max(1);

    let mut lines = Vec::new();

    match plot.axis_range() {
        Some(range) => {
            lines.push(Line::from(Span::styled(
                format!("{} from {:.2} to {:.2}", plot.measure, range.0, range.1),
                theme::muted()
            )));

            for (index, group) in plot.groups.iter().enumerate() {
                let color = if index == 0 { theme::LEGITIMATE } else { theme::FRAUD };
                let strip = group.stats.as_ref()
                    .map(|stats| box_strip(stats, range, strip_width))
                    .unwrap_or_else(|| "no data".to_string());

                lines.push(Line::from(vec![
                    Span::styled(format!("{:<label_width$}  ", group.label), theme::text()),
                    Span::styled(strip, Style::default().fg(color)),
                ]));

                if let Some(stats) = &group.stats {
                    lines.push(Line::from(Span::styled(
                        format!(
                            "{:<label_width$}  median {:.2}  q1 {:.2}  q3 {:.2}  outliers {}",
                            "", stats.median, stats.q1, stats.q3, stats.outliers
                        ),
                        theme::muted()
                    )));
                }
            }
        }
        None => lines.push(Line::from(Span::styled("no data", theme::muted())))
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_heatmap(f: &mut Frame, area: Rect, matrix: &CorrelationMatrix) {
    if matrix.is_empty() {
        f.render_widget(Paragraph::new(Span::styled("no numeric columns", theme::muted())), area);
        return;
    }

    let label_width = matrix.columns.iter().map(String::len).max().unwrap_or_default() as u16;
    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(label_width))
        .chain(matrix.columns.iter().map(|_| Constraint::Length(HEATMAP_CELL)))
        .collect();

    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(matrix.columns.iter().map(|name| Cell::from(truncate(name, HEATMAP_CELL as usize))))
    )
    .style(theme::accent_bold());

    let rows = matrix.columns.iter()
        .enumerate()
        .map(|(row, name)| {
            let cells = (0..matrix.len()).map(|column| {
                let value = matrix.values[[row, column]];
                let text = if value.is_nan() { "nan".to_string() } else { format!("{value:.2}") };
                Cell::from(text).style(Style::default().bg(theme::coolwarm(value)).fg(theme::coolwarm_text(value)))
            });

            Row::new(std::iter::once(Cell::from(name.as_str()).style(theme::text())).chain(cells))
        });

    let table = Table::new(rows, widths).header(header).column_spacing(0);
    f.render_widget(table, area);
}

fn truncate(name: &str, width: usize) -> String {
    name.chars().take(width.saturating_sub(1)).collect()
}
