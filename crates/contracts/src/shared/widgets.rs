//! Render-neutral description of a dashboard page.
//!
//! The backend builds these values, the frontend maps each `Widget` kind to a
//! component. Everything here is plain data so the JSON is stable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::alerts::AlertLevel;

/// Colouring hint for table cells and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Neutral,
    Good,
    Warn,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    #[serde(default)]
    pub tone: Tone,
}

impl Cell {
    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::toned(text, Tone::Neutral)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::toned(text, Tone::Neutral)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailItem {
    pub label: String,
    pub value: String,
}

/// A labelled group of widgets: one tab of a tab strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSection {
    pub label: String,
    pub widgets: Vec<Widget>,
}

impl TabSection {
    pub fn new(label: impl Into<String>, widgets: Vec<Widget>) -> Self {
        Self {
            label: label.into(),
            widgets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    Heading {
        text: String,
    },
    Text {
        text: String,
    },
    /// Styled metric tile
    Metric {
        label: String,
        value: String,
        icon: String,
    },
    BarChart {
        title: Option<String>,
        categories: Vec<String>,
        values: Vec<f64>,
        x_label: String,
        y_label: String,
    },
    /// Grouped bars, one series per legend entry
    MultiBarChart {
        title: Option<String>,
        categories: Vec<String>,
        series: Vec<Series>,
        x_label: String,
        y_label: String,
    },
    LineChart {
        title: Option<String>,
        x_labels: Vec<String>,
        series: Vec<Series>,
        x_label: String,
        y_label: String,
    },
    PieChart {
        title: String,
        slices: Vec<Slice>,
    },
    BulletList {
        heading: String,
        items: Vec<String>,
    },
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<Cell>>,
    },
    Alert {
        level: AlertLevel,
        text: String,
    },
    /// Horizontal bar, `percent` in 0..=100
    Progress {
        label: String,
        percent: f64,
        tone: Tone,
    },
    /// Key/value card
    Detail {
        title: String,
        items: Vec<DetailItem>,
    },
    /// Side-by-side columns
    Row {
        columns: Vec<Vec<Widget>>,
    },
    /// Nested tab strip
    Tabs {
        tabs: Vec<TabSection>,
    },
    Divider,
}

impl Widget {
    pub fn heading(text: impl Into<String>) -> Self {
        Widget::Heading { text: text.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Widget::Text { text: text.into() }
    }

    pub fn metric(label: impl Into<String>, value: impl ToString, icon: &str) -> Self {
        Widget::Metric {
            label: label.into(),
            value: value.to_string(),
            icon: icon.to_string(),
        }
    }

    pub fn bar_chart<S: AsRef<str>>(
        categories: &[S],
        values: Vec<f64>,
        x_label: &str,
        y_label: &str,
    ) -> Self {
        Widget::BarChart {
            title: None,
            categories: categories.iter().map(|c| c.as_ref().to_string()).collect(),
            values,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        }
    }

    pub fn multi_bar_chart<S: AsRef<str>>(
        categories: &[S],
        series: Vec<Series>,
        x_label: &str,
        y_label: &str,
    ) -> Self {
        Widget::MultiBarChart {
            title: None,
            categories: categories.iter().map(|c| c.as_ref().to_string()).collect(),
            series,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        }
    }

    pub fn line_chart<S: AsRef<str>>(
        x_labels: &[S],
        series: Vec<Series>,
        x_label: &str,
        y_label: &str,
    ) -> Self {
        Widget::LineChart {
            title: None,
            x_labels: x_labels.iter().map(|c| c.as_ref().to_string()).collect(),
            series,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        }
    }

    pub fn pie_chart(title: impl Into<String>, slices: Vec<Slice>) -> Self {
        Widget::PieChart {
            title: title.into(),
            slices,
        }
    }

    pub fn bullet_list<S: AsRef<str>>(heading: impl Into<String>, items: &[S]) -> Self {
        Widget::BulletList {
            heading: heading.into(),
            items: items.iter().map(|i| i.as_ref().to_string()).collect(),
        }
    }

    pub fn table<S: AsRef<str>>(columns: &[S], rows: Vec<Vec<Cell>>) -> Self {
        Widget::Table {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            rows,
        }
    }

    pub fn alert(level: AlertLevel, text: impl Into<String>) -> Self {
        Widget::Alert {
            level,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::alert(AlertLevel::Success, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::alert(AlertLevel::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::alert(AlertLevel::Warning, text)
    }

    pub fn progress(label: impl Into<String>, percent: f64, tone: Tone) -> Self {
        Widget::Progress {
            label: label.into(),
            percent: percent.clamp(0.0, 100.0),
            tone,
        }
    }

    pub fn detail<L: AsRef<str>, V: ToString>(title: impl Into<String>, items: &[(L, V)]) -> Self {
        Widget::Detail {
            title: title.into(),
            items: items
                .iter()
                .map(|(label, value)| DetailItem {
                    label: label.as_ref().to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    pub fn row(columns: Vec<Vec<Widget>>) -> Self {
        Widget::Row { columns }
    }

    /// A row with one widget per column.
    pub fn columns(widgets: Vec<Widget>) -> Self {
        Widget::Row {
            columns: widgets.into_iter().map(|w| vec![w]).collect(),
        }
    }

    pub fn tabs(tabs: Vec<TabSection>) -> Self {
        Widget::Tabs { tabs }
    }

    /// Sets the chart title. No effect on non-chart widgets.
    pub fn titled(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Widget::BarChart { title, .. }
            | Widget::MultiBarChart { title, .. }
            | Widget::LineChart { title, .. } => *title = Some(value.into()),
            Widget::PieChart { title, .. } => *title = value.into(),
            _ => {}
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Controls
// ---------------------------------------------------------------------------

/// Query parameter carrying the key of the button pressed for this render.
pub const ACTION_PARAM: &str = "action";

/// Input widget rendered above the dashboard. Its current value is sent back
/// as the query parameter named `key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    Select {
        key: String,
        label: String,
        options: Vec<String>,
        value: String,
    },
    Radio {
        key: String,
        label: String,
        options: Vec<String>,
        value: String,
    },
    Date {
        key: String,
        label: String,
        value: NaiveDate,
    },
    /// Sent as two parameters, see [`date_range_keys`]
    DateRange {
        key: String,
        label: String,
        start: NaiveDate,
        end: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
    /// Pressing sends `action=<key>` for one render
    Button {
        key: String,
        label: String,
    },
}

impl Control {
    pub fn key(&self) -> &str {
        match self {
            Control::Select { key, .. }
            | Control::Radio { key, .. }
            | Control::Date { key, .. }
            | Control::DateRange { key, .. }
            | Control::Button { key, .. } => key,
        }
    }
}

/// Query parameter names of a date range control.
pub fn date_range_keys(key: &str) -> (String, String) {
    (format!("{}_start", key), format!("{}_end", key))
}

/// A full dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub title: String,
    pub controls: Vec<Control>,
    pub header: Vec<Widget>,
    pub tabs: Vec<TabSection>,
    pub footer: Vec<Widget>,
}

impl DashboardView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            controls: Vec::new(),
            header: Vec::new(),
            tabs: Vec::new(),
            footer: Vec::new(),
        }
    }

    /// Every widget on the page, depth first (nested rows and tabs included).
    pub fn all_widgets(&self) -> Vec<&Widget> {
        fn walk<'a>(widgets: &'a [Widget], out: &mut Vec<&'a Widget>) {
            for widget in widgets {
                out.push(widget);
                match widget {
                    Widget::Row { columns } => {
                        for column in columns {
                            walk(column, out);
                        }
                    }
                    Widget::Tabs { tabs } => {
                        for tab in tabs {
                            walk(&tab.widgets, out);
                        }
                    }
                    _ => {}
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.header, &mut out);
        for tab in &self.tabs {
            walk(&tab.widgets, &mut out);
        }
        walk(&self.footer, &mut out);
        out
    }

    pub fn control(&self, key: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.key() == key)
    }
}
