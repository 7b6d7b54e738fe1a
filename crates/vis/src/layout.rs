use std::fs;
use std::path::Path;
use std::path::PathBuf;

use log::info;

use crate::chart::Chart;
use crate::error::Result;
use crate::id::Id;
use crate::template;
use crate::template::ChartEntry;
use crate::template::Context;
use crate::template::TemplateEngine;

/// The data visualization directory is structured as follows:
///
/// ./vis/index.html
/// ./vis/report.js
/// ./vis/style.css
///
/// ./vis/charts/chart1.svg
/// ./vis/charts/...
/// ./vis/charts/chartN.svg
///
/// ./vis/data/chart1.js
/// ./vis/data/...
/// ./vis/data/chartN.js
///
/// The __index__ file represents the entry point into the visualization.
/// The __charts__ directory contains the standalone SVG documents, which
/// are also inlined into the index file. The __data__ directory contains
/// one script per interactive chart with the data its pointer handlers
/// replay.
pub struct VisLayout {
    root_path: PathBuf,
    index_file_path: PathBuf,
    charts_path: PathBuf,
    data_path: PathBuf,
}

impl VisLayout {
    const MAIN_DIR_NAME: &str = "vis";
    const CHARTS_DIR_NAME: &str = "charts";
    const DATA_DIR_NAME: &str = "data";
    const INDEX_FILE_NAME: &str = "index.html";
    const SCRIPT_FILE_NAME: &str = "report.js";
    const STYLE_FILE_NAME: &str = "style.css";

    pub fn init(path: &Path) -> Result<VisLayout> {
        let root_path = path.join(Self::MAIN_DIR_NAME);
        let index_file_path = root_path.join(Self::INDEX_FILE_NAME);
        let charts_path = root_path.join(Self::CHARTS_DIR_NAME);
        let data_path = root_path.join(Self::DATA_DIR_NAME);

        fs::create_dir(&root_path)?;
        fs::create_dir(&charts_path)?;
        fs::create_dir(&data_path)?;

        Ok(Self {
            root_path,
            index_file_path,
            charts_path,
            data_path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.root_path
    }

    pub fn generate_report(&self, charts: &[Box<dyn Chart>]) -> Result<()> {
        let mut entries = Vec::with_capacity(charts.len());

        for chart in charts {
            let id = Id::next();
            let document = chart.render();

            let chart_file = self.charts_path.join(id.element("chart") + ".svg");
            svg::save(&chart_file, &document)?;

            let interactive = match chart.page_data() {
                Some(page_data) => {
                    let data_file = self.data_path.join(id.element("chart") + ".js");
                    let data = serde_json::to_string(&page_data)?;
                    fs::write(&data_file, format!("registerTooltip({id}, {data});\n"))?;
                    true
                }
                None => false,
            };

            info!("rendered `{title}` as {id}", title = chart.title());

            entries.push(ChartEntry::new(
                id,
                chart.title().to_owned(),
                document.to_string(),
                interactive,
            ));
        }

        fs::write(
            self.root_path.join(Self::SCRIPT_FILE_NAME),
            template::REPORT_SCRIPT,
        )?;
        fs::write(
            self.root_path.join(Self::STYLE_FILE_NAME),
            template::REPORT_STYLE,
        )?;

        let template = TemplateEngine::new(&self.index_file_path);
        template.render(&Context::new(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::env;

    use skychart_weather::WeatherData;
    use skychart_weather::record::WeatherRecord;

    use crate::chart::hover::HoverDemo;
    use crate::chart::radial::RadialChart;

    #[test]
    fn generate_report_writes_the_index_and_one_svg_per_chart() {
        let path = env::temp_dir().join(Id::next().element("skychart-layout-test"));
        fs::create_dir(&path).unwrap();

        let data = WeatherData::new(vec![WeatherRecord {
            date: String::from("2018-01-01"),
            temperature_min: 20.0,
            temperature_max: 30.0,
            uv_index: 1.0,
            precip_probability: 0.1,
            precip_type: None,
            cloud_cover: 0.5,
            humidity: 0.6,
        }]);

        let charts: Vec<Box<dyn Chart>> = vec![
            Box::new(HoverDemo::new()),
            Box::new(RadialChart::new(&data).unwrap()),
        ];

        let layout = VisLayout::init(&path).unwrap();
        layout.generate_report(&charts).unwrap();

        let index = fs::read_to_string(layout.path().join("index.html")).unwrap();
        assert!(index.contains("<svg"));
        assert!(index.contains("data/chart"));

        let svg_count = fs::read_dir(layout.path().join("charts")).unwrap().count();
        assert_eq!(svg_count, 2);

        let data_count = fs::read_dir(layout.path().join("data")).unwrap().count();
        assert_eq!(data_count, 1);

        fs::remove_dir_all(&path).unwrap();
    }

    #[test]
    fn init_fails_when_the_report_directory_already_exists() {
        let path = env::temp_dir().join(Id::next().element("skychart-layout-test"));
        fs::create_dir(&path).unwrap();

        VisLayout::init(&path).unwrap();
        let second = VisLayout::init(&path);

        assert!(second.is_err());

        fs::remove_dir_all(&path).unwrap();
    }
}
