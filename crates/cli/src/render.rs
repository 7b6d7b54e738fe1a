use log::info;

use skychart_vis::chart::Chart;
use skychart_vis::chart::bar::BarChart;
use skychart_vis::chart::hover::HoverDemo;
use skychart_vis::chart::radial::RadialChart;
use skychart_vis::chart::radial::RadialGrid;
use skychart_vis::layout::VisLayout;
use skychart_weather::DateFilter;
use skychart_weather::WeatherData;

use crate::cli::ChartKind;
use crate::cli::PathExt;
use crate::cli::RenderArgs;
use crate::error::CliError;

pub(crate) fn render(args: RenderArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;

    println!(
        "skychart reads the weather dataset from: `{}` and generates a report in: `{}`",
        args.path.display(),
        output_path.display()
    );

    let data = WeatherData::from_path(&args.path)?;
    let data = data.filter(&DateFilter::new(args.start_date, args.end_date));
    info!("loaded {count} weather records", count = data.len());

    let charts = charts(args.charts, &data)?;

    let vis = VisLayout::init(&output_path)?;
    vis.generate_report(&charts)?;

    Ok(())
}

fn charts(kind: ChartKind, data: &WeatherData) -> Result<Vec<Box<dyn Chart>>, CliError> {
    let charts: Vec<Box<dyn Chart>> = match kind {
        ChartKind::Hover => vec![Box::new(HoverDemo::new())],
        ChartKind::Bar => vec![Box::new(BarChart::new(data))],
        ChartKind::RadialGrid => vec![Box::new(RadialGrid::new(data)?)],
        ChartKind::Radial => vec![Box::new(RadialChart::new(data)?)],
        ChartKind::All => vec![
            Box::new(HoverDemo::new()),
            Box::new(BarChart::new(data)),
            Box::new(RadialGrid::new(data)?),
            Box::new(RadialChart::new(data)?),
        ],
    };

    Ok(charts)
}
