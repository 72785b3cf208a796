//! Plot geometry for the SVG charts. Pure functions over the chart frame,
//! kept free of DOM types so they can be unit tested.

use std::f64::consts::PI;

pub const CHART_COLORS: [&str; 8] = [
    "#3B82F6", // blue
    "#F97316", // orange
    "#10B981", // green
    "#EF4444", // red
    "#8B5CF6", // purple
    "#F59E0B", // yellow
    "#06B6D4", // cyan
    "#EC4899", // pink
];

pub fn color(idx: usize) -> &'static str {
    CHART_COLORS[idx % CHART_COLORS.len()]
}

/// Drawing area inside the SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 320.0,
            left: 56.0,
            right: 16.0,
            top: 16.0,
            bottom: 64.0,
        }
    }
}

impl Frame {
    pub fn plot_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.bottom
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Vertical position of `value` on the `scale` axis.
    pub fn y(&self, value: f64, scale: &Scale) -> f64 {
        self.top + (scale.max - value) / scale.span() * self.plot_height()
    }
}

/// Smallest of 1, 2, 2.5, 5, 10 times a power of ten that is >= `value`.
pub fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let fraction = value / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| fraction <= *s + 1e-9)
        .unwrap_or(10.0);
    step * magnitude
}

/// Value axis. Always contains zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
}

impl Scale {
    pub fn covering<'a>(values: impl IntoIterator<Item = &'a f64>) -> Self {
        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
        let max = if hi > 0.0 { nice_ceiling(hi) } else { 0.0 };
        let min = if lo < 0.0 { -nice_ceiling(-lo) } else { 0.0 };
        if max == min {
            Self { min, max: min + 1.0 }
        } else {
            Self { min, max }
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// `count + 1` evenly spaced tick values from min to max.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let count = count.max(1);
        (0..=count)
            .map(|i| self.min + self.span() * i as f64 / count as f64)
            .collect()
    }
}

pub fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Show every n-th category label so at most `max_labels` are drawn.
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 {
        return count.max(1);
    }
    count.div_ceil(max_labels).max(1)
}

/// Center of category `idx` of `count` along the x axis.
pub fn category_center(frame: &Frame, idx: usize, count: usize) -> f64 {
    let band = frame.plot_width() / count.max(1) as f64;
    frame.left + band * (idx as f64 + 0.5)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub series: usize,
    pub category: usize,
    pub value: f64,
}

/// Grouped bars: one group per category, one bar per series inside a group.
/// Missing values are skipped.
pub fn bar_rects(frame: &Frame, categories: usize, series: &[&[f64]], scale: &Scale) -> Vec<BarRect> {
    if categories == 0 || series.is_empty() {
        return Vec::new();
    }
    let band = frame.plot_width() / categories as f64;
    let inner = band * 0.8;
    let bar_width = inner / series.len() as f64;
    let zero = frame.y(0.0, scale);

    let mut rects = Vec::new();
    for category in 0..categories {
        let group_left = frame.left + band * category as f64 + (band - inner) / 2.0;
        for (s, values) in series.iter().enumerate() {
            let Some(&value) = values.get(category) else {
                continue;
            };
            let top = frame.y(value, scale);
            rects.push(BarRect {
                x: group_left + bar_width * s as f64,
                y: top.min(zero),
                width: bar_width,
                height: (zero - top).abs(),
                series: s,
                category,
                value,
            });
        }
    }
    rects
}

/// Polyline points, spread evenly over the plot width.
pub fn line_points(frame: &Frame, values: &[f64], scale: &Scale) -> Vec<(f64, f64)> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if n <= 1 {
                frame.left + frame.plot_width() / 2.0
            } else {
                frame.left + frame.plot_width() * i as f64 / (n - 1) as f64
            };
            (x, frame.y(v, scale))
        })
        .collect()
}

/// x position of point `idx` of `count`, matching [`line_points`].
pub fn point_x(frame: &Frame, idx: usize, count: usize) -> f64 {
    if count <= 1 {
        frame.left + frame.plot_width() / 2.0
    } else {
        frame.left + frame.plot_width() * idx as f64 / (count - 1) as f64
    }
}

pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSegment {
    pub index: usize,
    pub fraction: f64,
    /// Radians, clockwise from 12 o'clock
    pub start: f64,
    pub end: f64,
}

/// Angular segments for the positive values. An all-zero pie has none.
pub fn pie_segments(values: &[f64]) -> Vec<PieSegment> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angle = 0.0;
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v > 0.0)
        .map(|(index, v)| {
            let fraction = v / total;
            let start = angle;
            angle += fraction * 2.0 * PI;
            PieSegment {
                index,
                fraction,
                start,
                end: angle,
            }
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// SVG path of one wedge. A whole circle is drawn as two half arcs.
pub fn wedge_path(cx: f64, cy: f64, r: f64, segment: &PieSegment) -> String {
    if segment.fraction >= 0.9999 {
        return format!(
            "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} Z",
            cx,
            cy - r,
            cx,
            cy + r,
            cx,
            cy - r,
            r = r
        );
    }
    let (x1, y1) = polar(cx, cy, r, segment.start);
    let (x2, y2) = polar(cx, cy, r, segment.end);
    let large_arc = if segment.end - segment.start > PI { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {} 1 {:.2} {:.2} Z",
        cx,
        cy,
        x1,
        y1,
        large_arc,
        x2,
        y2,
        r = r
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(87.0), 100.0);
        assert_eq!(nice_ceiling(4.2), 5.0);
        assert_eq!(nice_ceiling(18.0), 20.0);
        assert_eq!(nice_ceiling(230.0), 250.0);
        assert_eq!(nice_ceiling(100.0), 100.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
    }

    #[test]
    fn test_scale_always_contains_zero() {
        let scale = Scale::covering(&[12.0, 48.0, 30.0]);
        assert_eq!(scale, Scale { min: 0.0, max: 50.0 });
        let empty = Scale::covering(&[]);
        assert_eq!(empty, Scale { min: 0.0, max: 1.0 });
        let negative = Scale::covering(&[-3.0, 8.0]);
        assert_eq!(negative, Scale { min: -5.0, max: 10.0 });
    }

    #[test]
    fn test_ticks_and_labels() {
        let scale = Scale { min: 0.0, max: 5.0 };
        assert_eq!(scale.ticks(2), vec![0.0, 2.5, 5.0]);
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(100.0), "100");
    }

    #[test]
    fn test_label_stride() {
        assert_eq!(label_stride(5, 12), 1);
        assert_eq!(label_stride(365, 12), 31);
        assert_eq!(label_stride(0, 12), 1);
    }

    #[test]
    fn test_bar_heights_follow_values() {
        let frame = Frame::default();
        let scale = Scale { min: 0.0, max: 100.0 };
        let values = [50.0, 100.0];
        let rects = bar_rects(&frame, 2, &[&values], &scale);
        assert_eq!(rects.len(), 2);
        assert!(close(rects[0].height, frame.plot_height() / 2.0));
        assert!(close(rects[1].y, frame.top));
        assert!(close(rects[1].y + rects[1].height, frame.plot_bottom()));
    }

    #[test]
    fn test_grouped_bars_share_the_band() {
        let frame = Frame::default();
        let scale = Scale { min: 0.0, max: 10.0 };
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0];
        let rects = bar_rects(&frame, 3, &[&a, &b], &scale);
        // series b has no third value
        assert_eq!(rects.len(), 5);
        assert!(close(rects[1].x - rects[0].x, rects[0].width));
        assert_eq!(rects[1].series, 1);
    }

    #[test]
    fn test_line_points_span_the_plot() {
        let frame = Frame::default();
        let scale = Scale { min: 0.0, max: 10.0 };
        let points = line_points(&frame, &[0.0, 5.0, 10.0], &scale);
        assert!(close(points[0].0, frame.left));
        assert!(close(points[2].0, frame.left + frame.plot_width()));
        assert!(close(points[0].1, frame.plot_bottom()));
        assert!(close(points[2].1, frame.top));
        assert!(close(point_x(&frame, 1, 3), points[1].0));
    }

    #[test]
    fn test_pie_segments_cover_the_circle() {
        let segments = pie_segments(&[25.0, 0.0, 75.0]);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].index, 2);
        assert!(close(segments[0].fraction, 0.25));
        assert!(close(segments[1].end, 2.0 * PI));
        assert!(pie_segments(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_wedge_path_flags_large_arcs() {
        let small = pie_segments(&[25.0, 75.0]);
        assert!(wedge_path(100.0, 100.0, 50.0, &small[0]).contains(" 0 0 1 "));
        assert!(wedge_path(100.0, 100.0, 50.0, &small[1]).contains(" 0 1 1 "));
        let whole = pie_segments(&[3.0]);
        assert_eq!(wedge_path(100.0, 100.0, 50.0, &whole[0]).matches('A').count(), 2);
    }
}
