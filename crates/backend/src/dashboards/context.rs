use chrono::{NaiveDate, NaiveDateTime};
use contracts::shared::widgets::{date_range_keys, Control, DashboardView, ACTION_PARAM};
use std::collections::HashMap;

use crate::shared::clock::Clock;
use crate::shared::random::RandomSource;

/// Entry point of one dashboard module.
pub type DashboardFn = fn(&mut RenderContext<'_>) -> DashboardView;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything a dashboard module may read during one render: the random
/// source, the control values sent by the client and the clock.
///
/// Each control accessor returns the current value and records the control so
/// the client can draw it. Values that are missing or not among the offered
/// options fall back to the default.
pub struct RenderContext<'a> {
    rng: &'a mut dyn RandomSource,
    params: &'a HashMap<String, String>,
    clock: Clock,
    controls: Vec<Control>,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        rng: &'a mut dyn RandomSource,
        params: &'a HashMap<String, String>,
        clock: Clock,
    ) -> Self {
        Self {
            rng,
            params,
            clock,
            controls: Vec::new(),
        }
    }

    pub fn rng(&mut self) -> &mut dyn RandomSource {
        &mut *self.rng
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Dropdown. `default` indexes `options`.
    pub fn select<S: AsRef<str>>(
        &mut self,
        key: &str,
        label: &str,
        options: &[S],
        default: usize,
    ) -> String {
        let options: Vec<String> = options.iter().map(|o| o.as_ref().to_string()).collect();
        let value = self.pick_option(key, &options, default);
        self.controls.push(Control::Select {
            key: key.to_string(),
            label: label.to_string(),
            options,
            value: value.clone(),
        });
        value
    }

    /// Radio group, same fallback rules as [`select`](Self::select).
    pub fn radio<S: AsRef<str>>(
        &mut self,
        key: &str,
        label: &str,
        options: &[S],
        default: usize,
    ) -> String {
        let options: Vec<String> = options.iter().map(|o| o.as_ref().to_string()).collect();
        let value = self.pick_option(key, &options, default);
        self.controls.push(Control::Radio {
            key: key.to_string(),
            label: label.to_string(),
            options,
            value: value.clone(),
        });
        value
    }

    pub fn date(&mut self, key: &str, label: &str, default: NaiveDate) -> NaiveDate {
        let value = self.parse_date(key).unwrap_or(default);
        self.controls.push(Control::Date {
            key: key.to_string(),
            label: label.to_string(),
            value,
        });
        value
    }

    /// Start/end pair, clamped to `[min, max]` and reordered when reversed.
    pub fn date_range(
        &mut self,
        key: &str,
        label: &str,
        default: (NaiveDate, NaiveDate),
        bounds: (NaiveDate, NaiveDate),
    ) -> (NaiveDate, NaiveDate) {
        let (start_key, end_key) = date_range_keys(key);
        let (min, max) = bounds;
        let clamp = |d: NaiveDate| d.clamp(min, max);

        let start = clamp(self.parse_date(&start_key).unwrap_or(default.0));
        let end = clamp(self.parse_date(&end_key).unwrap_or(default.1));
        let (start, end) = if start <= end { (start, end) } else { (end, start) };

        self.controls.push(Control::DateRange {
            key: key.to_string(),
            label: label.to_string(),
            start,
            end,
            min,
            max,
        });
        (start, end)
    }

    /// Registers a button; true when this render was triggered by it.
    pub fn button(&mut self, key: &str, label: &str) -> bool {
        self.controls.push(Control::Button {
            key: key.to_string(),
            label: label.to_string(),
        });
        self.param(ACTION_PARAM) == Some(key)
    }

    /// Controls registered so far, in call order.
    pub fn take_controls(&mut self) -> Vec<Control> {
        std::mem::take(&mut self.controls)
    }

    /// Start a view carrying the registered controls.
    pub fn view(&mut self, title: &str) -> DashboardView {
        let mut view = DashboardView::new(title);
        view.controls = self.take_controls();
        view
    }

    fn pick_option(&self, key: &str, options: &[String], default: usize) -> String {
        match self.param(key) {
            Some(value) if options.iter().any(|o| o == value) => value.to_string(),
            _ => options
                .get(default)
                .or_else(|| options.first())
                .cloned()
                .unwrap_or_default(),
        }
    }

    fn parse_date(&self, key: &str) -> Option<NaiveDate> {
        self.param(key)
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::random::testing::FixedSource;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_select_uses_param_or_default() {
        let p = params(&[("team", "Team 2"), ("duration", "Decade")]);
        let mut rng = FixedSource::new(&[0.5]);
        let mut ctx = RenderContext::new(&mut rng, &p, Clock::Fixed(testing::test_now()));

        let teams = ["All Teams", "Team 1", "Team 2"];
        assert_eq!(ctx.select("team", "Select Team", &teams, 0), "Team 2");
        let durations = ["Month", "Quarter"];
        assert_eq!(ctx.select("duration", "Select Duration", &durations, 0), "Month");

        let controls = ctx.take_controls();
        assert_eq!(controls.len(), 2);
        assert_eq!(controls[0].key(), "team");
        assert!(ctx.take_controls().is_empty());
    }

    #[test]
    fn test_date_falls_back_on_garbage() {
        let p = params(&[("day", "20-09-2024")]);
        let mut rng = FixedSource::new(&[0.5]);
        let mut ctx = RenderContext::new(&mut rng, &p, Clock::Fixed(testing::test_now()));
        assert_eq!(ctx.date("day", "Date", d(2024, 1, 1)), d(2024, 1, 1));
    }

    #[test]
    fn test_date_range_is_clamped_and_ordered() {
        let p = params(&[("range_start", "2024-12-01"), ("range_end", "2023-01-01")]);
        let mut rng = FixedSource::new(&[0.5]);
        let mut ctx = RenderContext::new(&mut rng, &p, Clock::Fixed(testing::test_now()));
        let bounds = (d(2023, 6, 1), d(2024, 6, 1));
        let range = ctx.date_range("range", "Date range", bounds, bounds);
        assert_eq!(range, (d(2023, 6, 1), d(2024, 6, 1)));
    }

    #[test]
    fn test_button_pressed_only_for_its_action() {
        let p = params(&[("action", "refresh")]);
        let mut rng = FixedSource::new(&[0.5]);
        let mut ctx = RenderContext::new(&mut rng, &p, Clock::Fixed(testing::test_now()));
        assert!(ctx.button("refresh", "Refresh Data"));
        assert!(!ctx.button("export", "Export Report"));
    }
}
