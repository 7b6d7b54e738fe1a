//! The chart types and the rendering contract they share.

pub mod bar;
pub mod hover;
pub mod radial;
pub mod tooltip;

use svg::Document;

use crate::chart::tooltip::TooltipPageData;

/// A chart that can be rendered into the visualization report.
pub trait Chart {
    /// The chart title shown on the report page.
    fn title(&self) -> &str;

    /// Renders the chart into a standalone SVG document.
    fn render(&self) -> Document;

    /// Data the report page needs to drive the chart's pointer
    /// interaction. Static charts have none.
    fn page_data(&self) -> Option<TooltipPageData> {
        None
    }
}
