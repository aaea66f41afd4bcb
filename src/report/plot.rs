use crate::analytics::BoxStats;

const WHISKER: char = '-';
const BOX: char = '=';
const MEDIAN: char = '|';
const CAP: char = '+';
pub const BAR: char = '#';

/// Maps `value` onto a column in `0..width` for the axis `range`.
pub fn scale(value: f64, range: (f64, f64), width: usize) -> usize {
    let (low, high) = range;

    if width == 0 {
        return 0;
    }

    if high <= low || !value.is_finite() {
        return 0;
    }

    let position = (value - low) / (high - low) * (width - 1) as f64;
    position.round().clamp(0.0, (width - 1) as f64) as usize
}

/// Number of bar glyphs for `value` when `max` fills `width`.
pub fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }

    ((value / max) * width as f64).round().clamp(1.0, width as f64) as usize
}

/// Draws one horizontal box plot as a strip of glyphs.
///
/// Values outside `range` are pinned to its edges.
pub fn box_strip(stats: &BoxStats, range: (f64, f64), width: usize) -> String {
    let mut strip = vec![' '; width];

    if width == 0 {
        return String::new();
    }

    let lower = scale(stats.lower_whisker, range, width);
    let q1 = scale(stats.q1, range, width);
    let median = scale(stats.median, range, width);
    let q3 = scale(stats.q3, range, width);
    let upper = scale(stats.upper_whisker, range, width);

    for cell in &mut strip[lower..=upper.max(lower)] {
        *cell = WHISKER;
    }

    for cell in &mut strip[q1..=q3.max(q1)] {
        *cell = BOX;
    }

    strip[lower] = CAP;
    strip[upper] = CAP;
    strip[median] = MEDIAN;

    strip.into_iter().collect()
}
