//! The angular tooltip of the full weather wheel.
//!
//! The controller owns the chart's angle scale and an index of records
//! keyed by their exact date string. Pointer coordinates come in relative
//! to the chart center; the angle is inverted back through the time scale
//! to the nearest date and that date is looked up verbatim. There is no
//! nearest-record fallback: a date with no record keeps whatever the
//! tooltip showed before.

use std::collections::BTreeMap;
use std::collections::HashMap;

use serde::Serialize;

use skychart_weather::record::DATE_FORMAT;
use skychart_weather::record::PrecipType;
use skychart_weather::record::WeatherRecord;

use crate::polar;
use crate::scale::TimeScale;

/// The two tooltip states. There are no error states: an unresolvable
/// pointer position simply does not transition.
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipState {
    Hidden,
    Visible(TooltipUpdate),
}

/// The values shown by a visible tooltip, plus the angle of the
/// highlighted tooltip line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipUpdate {
    pub date: String,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub uv_index: f64,
    pub cloud_cover: f64,
    pub precip_probability: f64,
    pub precip_type: Option<PrecipType>,
    pub line_angle: f64,
}

/// Drives the tooltip from pointer events over the listener circle.
pub struct TooltipController {
    angle_scale: TimeScale,
    records: HashMap<String, WeatherRecord>,
    state: TooltipState,
}

impl TooltipController {
    pub fn new<I>(angle_scale: TimeScale, records: I) -> TooltipController
    where
        I: IntoIterator<Item = WeatherRecord>,
    {
        let records = records
            .into_iter()
            .map(|record| (record.date.clone(), record))
            .collect();

        Self {
            angle_scale,
            records,
            state: TooltipState::Hidden,
        }
    }

    /// Handles a pointer move at `(x, y)`, relative to the chart center.
    ///
    /// Returns the tooltip content to show, which is the previous content
    /// when the pointer angle does not resolve to a recorded date.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<&TooltipUpdate> {
        let angle = polar::angle_of_point(x, y);
        let date = self.angle_scale.invert(angle);
        let key = date.format(DATE_FORMAT).to_string();

        if let Some(record) = self.records.get(&key) {
            let update = TooltipUpdate {
                date: record.date.clone(),
                temperature_min: record.temperature_min,
                temperature_max: record.temperature_max,
                uv_index: record.uv_index,
                cloud_cover: record.cloud_cover,
                precip_probability: record.precip_probability,
                precip_type: record.precip_type,
                line_angle: self.angle_scale.scale(date),
            };

            self.state = TooltipState::Visible(update);
        }

        match &self.state {
            TooltipState::Visible(update) => Some(update),
            TooltipState::Hidden => None,
        }
    }

    /// Handles the pointer leaving the listener circle.
    pub fn pointer_leave(&mut self) {
        self.state = TooltipState::Hidden;
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }
}

/// The data the report page embeds next to an interactive chart, so its
/// script can replay the same angle-to-date inversion in the browser.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipPageData {
    /// The first date of the angle domain, in the `YYYY-MM-DD` format.
    pub start: String,

    /// The length of the angle domain in days.
    pub total_days: i64,

    /// The bounded radius of the chart, for placing the tooltip line.
    pub bounded_radius: f64,

    /// The records keyed by their exact date string.
    pub records: BTreeMap<String, WeatherRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::TAU;

    use chrono::Duration;
    use chrono::NaiveDate;

    #[test]
    fn pointer_at_a_known_date_angle_shows_exactly_that_date() {
        let mut controller = controller(31, &[]);
        let (x, y) = pointer_at("2018-01-05", &controller);

        let update = controller.pointer_move(x, y).unwrap();

        assert_eq!(update.date, "2018-01-05");
        assert_eq!(update.temperature_min, 20.0);
    }

    #[test]
    fn an_unresolvable_date_keeps_the_previous_content() {
        let mut controller = controller(31, &["2018-01-15"]);

        let (x, y) = pointer_at("2018-01-10", &controller);
        controller.pointer_move(x, y);

        let (x, y) = pointer_at("2018-01-15", &controller);
        let update = controller.pointer_move(x, y).unwrap();

        assert_eq!(update.date, "2018-01-10");
    }

    #[test]
    fn an_unresolvable_date_on_a_hidden_tooltip_stays_hidden() {
        let mut controller = controller(31, &["2018-01-15"]);

        let (x, y) = pointer_at("2018-01-15", &controller);
        let update = controller.pointer_move(x, y);

        assert_eq!(update, None);
        assert_eq!(*controller.state(), TooltipState::Hidden);
    }

    #[test]
    fn moving_between_dates_rerenders_the_tooltip() {
        let mut controller = controller(31, &[]);

        let (x, y) = pointer_at("2018-01-10", &controller);
        controller.pointer_move(x, y);

        let (x, y) = pointer_at("2018-01-20", &controller);
        let update = controller.pointer_move(x, y).unwrap();

        assert_eq!(update.date, "2018-01-20");
    }

    #[test]
    fn pointer_leave_hides_the_tooltip() {
        let mut controller = controller(31, &[]);

        let (x, y) = pointer_at("2018-01-10", &controller);
        controller.pointer_move(x, y);
        controller.pointer_leave();

        assert_eq!(*controller.state(), TooltipState::Hidden);
    }

    /// A January 2018 controller with `days` records, minus the `gaps`.
    fn controller(days: i64, gaps: &[&str]) -> TooltipController {
        let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let end = start + Duration::days(days - 1);
        let angle_scale = TimeScale::new((start, end), (0.0, TAU));

        let records = (0..days).filter_map(|offset| {
            let date = (start + Duration::days(offset))
                .format(DATE_FORMAT)
                .to_string();

            if gaps.contains(&date.as_str()) {
                return None;
            }

            Some(WeatherRecord {
                date,
                temperature_min: 20.0,
                temperature_max: 30.0,
                uv_index: 1.0,
                precip_probability: 0.2,
                precip_type: Some(PrecipType::Rain),
                cloud_cover: 0.5,
                humidity: 0.6,
            })
        });

        TooltipController::new(angle_scale, records)
    }

    /// Pointer coordinates on the listener circle at the angle of `date`.
    fn pointer_at(date: &str, controller: &TooltipController) -> (f64, f64) {
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap();
        let angle = controller.angle_scale.scale(date);
        let point = polar::point_on_circle(angle, 180.0);

        (point.x, point.y)
    }
}
