//! The radial "weather wheel" charts.
//!
//! A year of daily records is wound clockwise around a circle: the date
//! maps to the angle and every data channel becomes a concentric layer,
//! placed by a fixed offset factor on the bounded radius. [`RadialGrid`]
//! draws only the month grid and its tick labels; [`RadialChart`] layers
//! the temperature band, the freezing isotherm, UV ticks, cloud and
//! precipitation dots, annotations and the tooltip interaction on top.

use std::f64::consts::PI;
use std::f64::consts::TAU;

use chrono::NaiveDate;

use svg::Document;
use svg::node::element::Circle;
use svg::node::element::Definitions;
use svg::node::element::Group;
use svg::node::element::Line;
use svg::node::element::Path;
use svg::node::element::RadialGradient;
use svg::node::element::Stop;
use svg::node::element::Text;
use svg::node::element::path::Data;

use skychart_weather::WeatherData;
use skychart_weather::record::PrecipType;
use skychart_weather::record::WeatherRecord;

use crate::chart::Chart;
use crate::chart::tooltip::TooltipController;
use crate::chart::tooltip::TooltipPageData;
use crate::dimensions::Margin;
use crate::dimensions::RadialDimensions;
use crate::error::Result;
use crate::id::Id;
use crate::polar;
use crate::scale;
use crate::scale::LinearScale;
use crate::scale::OrdinalScale;
use crate::scale::SqrtScale;
use crate::scale::TimeScale;

const WIDTH: f64 = 600.0;
const MARGIN: f64 = 120.0;

const FREEZING_POINT: f64 = 32.0;
const UV_INDEX_THRESHOLD: f64 = 3.0;
const TEMPERATURE_TICK_COUNT: usize = 4;

// Offset factors of the concentric layers, as multiples of the
// bounded radius.
const UV_TICK_INNER_OFFSET: f64 = 0.95;
const UV_TICK_OUTER_OFFSET: f64 = 1.05;
const PRECIP_RING_OFFSET: f64 = 1.14;
const CLOUD_RING_OFFSET: f64 = 1.27;
const MONTH_LABEL_OFFSET: f64 = 1.38;
const ANNOTATION_OFFSET: f64 = 1.6;

const CLOUD_RADIUS_RANGE: (f64, f64) = (1.0, 10.0);
const PRECIP_RADIUS_RANGE: (f64, f64) = (1.0, 8.0);

// Temperature band gradient stops, from the coldest to the warmest.
const GRADIENT_STOPS: [&str; 5] = ["#313695", "#74add1", "#ffffbf", "#f46d43", "#a50026"];

/// One dataset record pinned to its angle on the wheel.
#[derive(Debug, Clone)]
struct Day {
    angle: f64,
    record: WeatherRecord,
}

/// The first iteration of the weather wheel: the circular month grid
/// and its tick labels, nothing else.
pub struct RadialGrid {
    dimensions: RadialDimensions,
    angle_scale: TimeScale,
}

impl RadialGrid {
    pub fn new(data: &WeatherData) -> Result<RadialGrid> {
        let dimensions = RadialDimensions::new(WIDTH, Margin::uniform(MARGIN));
        let angle_scale = angle_scale(data)?;

        Ok(Self {
            dimensions,
            angle_scale,
        })
    }
}

impl Chart for RadialGrid {
    fn title(&self) -> &str {
        "Weather wheel: month grid"
    }

    fn render(&self) -> Document {
        let bounded = centered_group(&self.dimensions).add(month_grid(
            &self.dimensions,
            &self.angle_scale,
        ));

        document(&self.dimensions).add(bounded)
    }
}

/// The full weather wheel.
pub struct RadialChart {
    dimensions: RadialDimensions,
    angle_scale: TimeScale,
    radius_scale: LinearScale,
    cloud_radius_scale: SqrtScale,
    precip_radius_scale: SqrtScale,
    precip_color_scale: OrdinalScale<PrecipType, &'static str>,
    gradient_id: String,
    days: Vec<Day>,
}

impl RadialChart {
    pub fn new(data: &WeatherData) -> Result<RadialChart> {
        let dimensions = RadialDimensions::new(WIDTH, Margin::uniform(MARGIN));
        let angle_scale = angle_scale(data)?;

        let days: Vec<Day> = data
            .records()
            .iter()
            .map(|record| {
                let date = record.day()?;

                Ok(Day {
                    angle: angle_scale.scale(date),
                    record: record.clone(),
                })
            })
            .collect::<Result<_>>()?;

        let temperatures = days.iter().flat_map(|day| {
            [day.record.temperature_min, day.record.temperature_max]
        });
        let temperature_domain = scale::extent(temperatures).unwrap_or((0.0, 1.0));
        let radius_scale = LinearScale::new(temperature_domain, (0.0, dimensions.bounded_radius))
            .nice(TEMPERATURE_TICK_COUNT);

        let cloud_domain =
            scale::extent(days.iter().map(|day| day.record.cloud_cover)).unwrap_or((0.0, 1.0));
        let cloud_radius_scale = SqrtScale::new(cloud_domain, CLOUD_RADIUS_RANGE);

        let precip_domain = scale::extent(days.iter().map(|day| day.record.precip_probability))
            .unwrap_or((0.0, 1.0));
        let precip_radius_scale = SqrtScale::new(precip_domain, PRECIP_RADIUS_RANGE);

        let precip_color_scale = OrdinalScale::new(vec![
            (PrecipType::Rain, "#54a0ff"),
            (PrecipType::Sleet, "#636e72"),
            (PrecipType::Snow, "#b2bec3"),
        ]);

        Ok(Self {
            dimensions,
            angle_scale,
            radius_scale,
            cloud_radius_scale,
            precip_radius_scale,
            precip_color_scale,
            gradient_id: Id::next().element("temperature-gradient"),
            days,
        })
    }

    /// The dot radius for a cloud cover fraction.
    pub fn cloud_radius(&self, cloud_cover: f64) -> f64 {
        self.cloud_radius_scale.scale(cloud_cover)
    }

    /// The dot radius for a precipitation probability.
    pub fn precip_radius(&self, probability: f64) -> f64 {
        self.precip_radius_scale.scale(probability)
    }

    /// A pointer-interaction controller over this chart's records.
    pub fn tooltip(&self) -> TooltipController {
        TooltipController::new(
            self.angle_scale,
            self.days.iter().map(|day| day.record.clone()),
        )
    }

    fn gradient(&self) -> Definitions {
        let last = (GRADIENT_STOPS.len() - 1) as f64;
        let mut gradient = RadialGradient::new()
            .set("id", self.gradient_id.as_str())
            .set("gradientUnits", "userSpaceOnUse")
            .set("cx", 0)
            .set("cy", 0)
            .set("r", self.dimensions.bounded_radius);

        for (index, color) in GRADIENT_STOPS.iter().enumerate() {
            let offset = index as f64 / last * 100.0;
            let stop = Stop::new()
                .set("offset", format!("{offset}%"))
                .set("stop-color", *color);

            gradient = gradient.add(stop);
        }

        Definitions::new().add(gradient)
    }

    fn temperature_grid(&self) -> Group {
        let mut grid = Group::new().set("class", "temperature-grids");

        for tick in self.radius_scale.ticks(TEMPERATURE_TICK_COUNT) {
            let radius = self.radius_scale.scale(tick);
            if radius <= 0.0 {
                continue;
            }

            let circle = Circle::new()
                .set("class", "grid-line")
                .set("r", radius)
                .set("fill", "none")
                .set("stroke", "#dadadd");

            let label = Text::new(format!("{tick:.0}°F"))
                .set("class", "tick-label")
                .set("x", 4.0)
                .set("y", -radius - 2.0);

            grid = grid.add(circle).add(label);
        }

        let (coldest, warmest) = self.radius_scale.domain();
        if coldest <= FREEZING_POINT && FREEZING_POINT <= warmest {
            let freezing = Circle::new()
                .set("class", "freezing-circle")
                .set("r", self.radius_scale.scale(FREEZING_POINT))
                .set("fill", "#00d2d3")
                .set("opacity", 0.15);

            grid = grid.add(freezing);
        }

        grid
    }

    /// The area between the daily minimum and maximum temperature,
    /// traced around the wheel and closed back on itself.
    fn temperature_band(&self) -> Path {
        let mut data = Data::new();
        let mut started = false;

        for day in &self.days {
            let outer = self.radius_scale.scale(day.record.temperature_max);
            let point = polar::point_on_circle(day.angle, outer);

            if started {
                data = data.line_to((point.x, point.y));
            } else {
                data = data.move_to((point.x, point.y));
                started = true;
            }
        }

        for day in self.days.iter().rev() {
            let inner = self.radius_scale.scale(day.record.temperature_min);
            let point = polar::point_on_circle(day.angle, inner);

            data = data.line_to((point.x, point.y));
        }

        Path::new()
            .set("class", "temperature-band")
            .set("fill", format!("url(#{id})", id = self.gradient_id))
            .set("d", data.close())
    }

    fn uv_ticks(&self) -> Group {
        let mut ticks = Group::new();
        let bounded_radius = self.dimensions.bounded_radius;

        for day in &self.days {
            if day.record.uv_index < UV_INDEX_THRESHOLD {
                continue;
            }

            let inner = polar::point_on_circle(day.angle, bounded_radius * UV_TICK_INNER_OFFSET);
            let outer = polar::point_on_circle(day.angle, bounded_radius * UV_TICK_OUTER_OFFSET);

            let tick = Line::new()
                .set("class", "uv-line")
                .set("x1", inner.x)
                .set("y1", inner.y)
                .set("x2", outer.x)
                .set("y2", outer.y)
                .set("stroke", "#feca57");

            ticks = ticks.add(tick);
        }

        ticks
    }

    fn cloud_dots(&self) -> Group {
        let mut dots = Group::new();
        let ring = self.dimensions.bounded_radius * CLOUD_RING_OFFSET;

        for day in &self.days {
            let center = polar::point_on_circle(day.angle, ring);

            let dot = Circle::new()
                .set("class", "cloud-dot")
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", self.cloud_radius(day.record.cloud_cover))
                .set("fill", "#c8d6e5");

            dots = dots.add(dot);
        }

        dots
    }

    fn precip_dots(&self) -> Group {
        let mut dots = Group::new();
        let ring = self.dimensions.bounded_radius * PRECIP_RING_OFFSET;

        for day in &self.days {
            // Dry days carry no precipitation type and draw no dot.
            let Some(precip_type) = day.record.precip_type else {
                continue;
            };

            let center = polar::point_on_circle(day.angle, ring);
            let mut dot = Circle::new()
                .set("class", "precipitation-dot")
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", self.precip_radius(day.record.precip_probability));

            if let Some(color) = self.precip_color_scale.scale(&precip_type) {
                dot = dot.set("fill", *color);
            }

            dots = dots.add(dot);
        }

        dots
    }

    fn annotation(&self, angle: f64, offset: f64, label: &str) -> Group {
        let from = polar::point_on_circle(angle, self.dimensions.bounded_radius * offset);
        let to_x = self.dimensions.bounded_radius * ANNOTATION_OFFSET;

        let line = Line::new()
            .set("class", "annotation-line")
            .set("x1", from.x)
            .set("y1", from.y)
            .set("x2", to_x)
            .set("y2", from.y)
            .set("stroke", "#34495e")
            .set("opacity", 0.4);

        let text = Text::new(label)
            .set("class", "annotation-text")
            .set("x", to_x + 6.0)
            .set("y", from.y)
            .set("dominant-baseline", "middle");

        Group::new().add(line).add(text)
    }

    fn annotations(&self) -> Group {
        Group::new()
            .add(self.annotation(PI * 0.23, CLOUD_RING_OFFSET, "Cloud cover"))
            .add(self.annotation(PI * 0.26, PRECIP_RING_OFFSET, "Precipitation"))
            .add(self.annotation(
                PI * 0.3,
                UV_TICK_OUTER_OFFSET,
                "UV index over 3",
            ))
    }

    /// The hidden tooltip line and the transparent full-radius circle
    /// that the report page listens on for pointer events.
    fn interaction_layer(&self) -> Group {
        let reach = self.dimensions.bounded_radius * ANNOTATION_OFFSET;

        let tooltip_line = Line::new()
            .set("class", "tooltip-line")
            .set("x1", 0)
            .set("y1", 0)
            .set("x2", 0)
            .set("y2", 0)
            .set("stroke", "#8395a7")
            .set("opacity", 0);

        let listener = Circle::new()
            .set("class", "listener-circle")
            .set("r", reach)
            .set("fill", "transparent");

        Group::new().add(tooltip_line).add(listener)
    }
}

impl Chart for RadialChart {
    fn title(&self) -> &str {
        "Weather wheel"
    }

    fn render(&self) -> Document {
        let bounded = centered_group(&self.dimensions)
            .add(month_grid(&self.dimensions, &self.angle_scale))
            .add(self.temperature_grid())
            .add(self.temperature_band())
            .add(self.uv_ticks())
            .add(self.cloud_dots())
            .add(self.precip_dots())
            .add(self.annotations())
            .add(self.interaction_layer());

        document(&self.dimensions).add(self.gradient()).add(bounded)
    }

    fn page_data(&self) -> Option<TooltipPageData> {
        let (start, end) = self.angle_scale.domain();
        let records = self
            .days
            .iter()
            .map(|day| (day.record.date.clone(), day.record.clone()))
            .collect();

        Some(TooltipPageData {
            start: start.format(skychart_weather::record::DATE_FORMAT).to_string(),
            total_days: (end - start).num_days(),
            bounded_radius: self.dimensions.bounded_radius,
            records,
        })
    }
}

/// Builds the angle scale mapping the dataset's date extent to `[0, 2π)`.
///
/// An empty dataset degenerates to a zero-length domain and the positions
/// it produces are NaN.
fn angle_scale(data: &WeatherData) -> Result<TimeScale> {
    let mut dates = Vec::with_capacity(data.len());

    for record in data.records() {
        dates.push(record.day()?);
    }

    let domain = match (dates.iter().min(), dates.iter().max()) {
        (Some(&start), Some(&end)) => (start, end),
        _ => (NaiveDate::default(), NaiveDate::default()),
    };

    Ok(TimeScale::new(domain, (0.0, TAU)))
}

fn document(dimensions: &RadialDimensions) -> Document {
    Document::new()
        .set("viewBox", (0.0, 0.0, dimensions.width, dimensions.height))
        .set("width", dimensions.width)
        .set("height", dimensions.height)
}

fn centered_group(dimensions: &RadialDimensions) -> Group {
    let (x, y) = dimensions.center();

    Group::new().set("transform", format!("translate({x},{y})"))
}

fn month_grid(dimensions: &RadialDimensions, angle_scale: &TimeScale) -> Group {
    let mut grid = Group::new();

    for month in angle_scale.month_starts() {
        let angle = angle_scale.scale(month);
        let spoke_end = polar::point_on_circle(angle, dimensions.bounded_radius);

        let spoke = Line::new()
            .set("class", "grid-line")
            .set("x1", 0)
            .set("y1", 0)
            .set("x2", spoke_end.x)
            .set("y2", spoke_end.y)
            .set("stroke", "#dadadd");

        let label_point =
            polar::point_on_circle(angle, dimensions.bounded_radius * MONTH_LABEL_OFFSET);
        let label = Text::new(month.format("%b").to_string())
            .set("class", "tick-label")
            .set("x", label_point.x)
            .set("y", label_point.y)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle");

        grid = grid.add(spoke).add(label);
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloud_dot_radius_is_monotonically_non_decreasing() {
        let chart = RadialChart::new(&year_dataset()).unwrap();

        let mut previous = f64::NEG_INFINITY;
        for i in 0..=10 {
            let radius = chart.cloud_radius(i as f64 / 10.0);
            assert!(radius >= previous);
            previous = radius;
        }
    }

    #[test]
    fn precipitation_dot_radius_is_monotonically_non_decreasing() {
        let chart = RadialChart::new(&year_dataset()).unwrap();

        let mut previous = f64::NEG_INFINITY;
        for i in 0..=10 {
            let radius = chart.precip_radius(i as f64 / 10.0);
            assert!(radius >= previous);
            previous = radius;
        }
    }

    #[test]
    fn grid_draws_a_spoke_and_a_label_per_month() {
        let grid = RadialGrid::new(&year_dataset()).unwrap();

        let rendered = grid.render().to_string();

        assert_eq!(rendered.matches("grid-line").count(), 12);
        assert!(rendered.contains(">Jan</text>"));
        assert!(rendered.contains(">Dec</text>"));
    }

    #[test]
    fn wet_days_draw_precipitation_dots_and_dry_days_do_not() {
        let chart = RadialChart::new(&year_dataset()).unwrap();

        let rendered = chart.render().to_string();
        let wet_days = year_dataset()
            .records()
            .iter()
            .filter(|record| record.precip_type.is_some())
            .count();

        assert_eq!(rendered.matches("precipitation-dot").count(), wet_days);
        assert!(rendered.contains("#b2bec3"));
    }

    #[test]
    fn uv_ticks_appear_only_over_the_threshold() {
        let chart = RadialChart::new(&year_dataset()).unwrap();

        let rendered = chart.render().to_string();
        let high_uv_days = year_dataset()
            .records()
            .iter()
            .filter(|record| record.uv_index >= UV_INDEX_THRESHOLD)
            .count();

        assert_eq!(rendered.matches("uv-line").count(), high_uv_days);
    }

    #[test]
    fn freezing_circle_appears_when_the_domain_spans_the_isotherm() {
        let chart = RadialChart::new(&year_dataset()).unwrap();

        let rendered = chart.render().to_string();

        assert!(rendered.contains("freezing-circle"));
        assert!(rendered.contains("listener-circle"));
        assert!(rendered.contains("tooltip-line"));
    }

    #[test]
    fn temperature_labels_carry_the_degree_symbol() {
        let chart = RadialChart::new(&year_dataset()).unwrap();

        let rendered = chart.render().to_string();

        assert!(rendered.contains("°F"));
        assert!(!rendered.contains("??F"));
    }

    /// A synthetic year: one record per week, temperatures sweeping from
    /// freezing winter lows to summer highs.
    fn year_dataset() -> WeatherData {
        let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let records = (0..52)
            .map(|week| {
                let date = start + chrono::Duration::weeks(week);
                let seasonal = (week as f64 / 52.0 * TAU).sin();

                WeatherRecord {
                    date: date.format("%Y-%m-%d").to_string(),
                    temperature_min: 25.0 + seasonal * 20.0,
                    temperature_max: 45.0 + seasonal * 30.0,
                    uv_index: if week % 3 == 0 { 6.0 } else { 1.0 },
                    precip_probability: (week % 10) as f64 / 10.0,
                    precip_type: if week % 4 == 0 {
                        Some(PrecipType::Snow)
                    } else if week % 4 == 2 {
                        Some(PrecipType::Rain)
                    } else {
                        None
                    },
                    cloud_cover: (week % 5) as f64 / 5.0,
                    humidity: 0.5,
                }
            })
            .collect();

        WeatherData::new(records)
    }
}
