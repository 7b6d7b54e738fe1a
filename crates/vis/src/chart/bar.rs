//! The humidity bar chart: daily humidity values binned into buckets,
//! one bar per bucket, annotated with a dashed mean line.

use svg::Document;
use svg::node::element::Group;
use svg::node::element::Line;
use svg::node::element::Text;

use skychart_weather::WeatherData;

use crate::bin::Bin;
use crate::bin::HistogramBins;
use crate::chart::Chart;
use crate::dimensions::Dimensions;
use crate::dimensions::Margin;
use crate::scale;
use crate::scale::LinearScale;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 300.0;
const THRESHOLD_COUNT: usize = 12;
const BAR_PADDING: f64 = 1.0;
const BAR_FILL: &str = "cornflowerblue";
const MEAN_LINE_TOP: f64 = -15.0;

pub struct BarChart {
    dimensions: Dimensions,
    x_scale: LinearScale,
    y_scale: LinearScale,
    bins: Vec<Bin>,
    mean: Option<f64>,
}

impl BarChart {
    pub fn new(data: &WeatherData) -> BarChart {
        let dimensions = Dimensions::new(WIDTH, HEIGHT, Margin::new(30.0, 10.0, 50.0, 50.0));
        let humidity = || data.records().iter().map(|record| record.humidity);

        let domain = scale::extent(humidity()).unwrap_or((0.0, 1.0));
        let x_scale = LinearScale::new(domain, (0.0, dimensions.bounded_width)).nice(10);

        let bins = HistogramBins::new(x_scale.domain(), THRESHOLD_COUNT).bin(humidity());

        let max_count = scale::max(bins.iter().map(|bin| bin.count as f64)).unwrap_or(0.0);
        let y_scale =
            LinearScale::new((0.0, max_count), (dimensions.bounded_height, 0.0)).nice(10);

        let mean = scale::mean(humidity());

        Self {
            dimensions,
            x_scale,
            y_scale,
            bins,
            mean,
        }
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    fn bar(&self, bin: &Bin) -> svg::node::element::Rectangle {
        let x = self.x_scale.scale(bin.x0) + BAR_PADDING / 2.0;
        let y = self.y_scale.scale(bin.count as f64);
        let width = (self.x_scale.scale(bin.x1) - self.x_scale.scale(bin.x0) - BAR_PADDING).max(0.0);
        let height = self.dimensions.bounded_height - y;

        svg::node::element::Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", width)
            .set("height", height)
            .set("fill", BAR_FILL)
    }

    fn bar_label(&self, bin: &Bin) -> Text {
        let center = self.x_scale.scale(bin.x0)
            + (self.x_scale.scale(bin.x1) - self.x_scale.scale(bin.x0)) / 2.0;

        Text::new(bin.count.to_string())
            .set("class", "bar-label")
            .set("x", center)
            .set("y", self.y_scale.scale(bin.count as f64) - 5.0)
            .set("text-anchor", "middle")
    }

    fn mean_annotation(&self, mean: f64) -> Group {
        let x = self.x_scale.scale(mean);

        let line = Line::new()
            .set("class", "annotation-line")
            .set("x1", x)
            .set("x2", x)
            .set("y1", MEAN_LINE_TOP)
            .set("y2", self.dimensions.bounded_height)
            .set("stroke", "maroon")
            .set("stroke-dasharray", "2px 4px");

        let label = Text::new("mean")
            .set("class", "annotation-text")
            .set("x", x)
            .set("y", MEAN_LINE_TOP - 5.0)
            .set("text-anchor", "middle");

        Group::new().add(line).add(label)
    }
}

impl Chart for BarChart {
    fn title(&self) -> &str {
        "Daily humidity"
    }

    fn render(&self) -> Document {
        let margin = self.dimensions.margin;
        let mut bounded = Group::new().set(
            "transform",
            format!("translate({x},{y})", x = margin.left, y = margin.top),
        );

        for bin in &self.bins {
            bounded = bounded.add(self.bar(bin));

            if bin.count > 0 {
                bounded = bounded.add(self.bar_label(bin));
            }
        }

        if let Some(mean) = self.mean {
            bounded = bounded.add(self.mean_annotation(mean));
        }

        Document::new()
            .set(
                "viewBox",
                (0.0, 0.0, self.dimensions.width, self.dimensions.height),
            )
            .set("width", self.dimensions.width)
            .set("height", self.dimensions.height)
            .add(bounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use skychart_weather::record::WeatherRecord;

    #[test]
    fn bins_cover_every_record() {
        let chart = BarChart::new(&dataset(&[0.32, 0.41, 0.47, 0.55, 0.61, 0.78]));

        let total: usize = chart.bins().iter().map(|bin| bin.count).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn rebinning_the_same_dataset_is_stable() {
        let data = dataset(&[0.32, 0.41, 0.47, 0.55, 0.61, 0.78]);

        let first = BarChart::new(&data);
        let second = BarChart::new(&data);

        assert_eq!(first.bins(), second.bins());
    }

    #[test]
    fn render_draws_a_bar_per_bucket_and_the_mean_line() {
        let chart = BarChart::new(&dataset(&[0.3, 0.3, 0.5, 0.9]));

        let rendered = chart.render().to_string();

        assert!(rendered.contains("cornflowerblue"));
        assert!(rendered.contains("stroke=\"maroon\""));
        assert!(rendered.contains(">mean</text>"));
    }

    #[test]
    fn empty_buckets_carry_no_count_label() {
        let chart = BarChart::new(&dataset(&[0.0, 1.0]));

        let rendered = chart.render().to_string();

        // Only the two occupied edge buckets are labeled.
        assert_eq!(rendered.matches("bar-label").count(), 2);
    }

    fn dataset(humidities: &[f64]) -> WeatherData {
        let records = humidities
            .iter()
            .enumerate()
            .map(|(index, humidity)| WeatherRecord {
                date: format!("2018-01-{day:02}", day = index + 1),
                temperature_min: 20.0,
                temperature_max: 30.0,
                uv_index: 1.0,
                precip_probability: 0.0,
                precip_type: None,
                cloud_cover: 0.2,
                humidity: *humidity,
            })
            .collect();

        WeatherData::new(records)
    }
}
