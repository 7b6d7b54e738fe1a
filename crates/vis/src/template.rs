use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tinytemplate::format_unescaped;

use crate::error::Result;
use crate::id::Id;

/// The static assets copied into the report directory next to the
/// rendered index file.
pub(crate) const REPORT_SCRIPT: &str = include_str!("./template/report.js");
pub(crate) const REPORT_STYLE: &str = include_str!("./template/style.css");

pub struct TemplateEngine<'a> {
    path: &'a Path,
}

impl<'a> TemplateEngine<'a> {
    pub fn new(path: &'a Path) -> TemplateEngine<'a> {
        Self { path }
    }

    pub fn render(&self, context: &Context) -> Result<()> {
        let mut template = TinyTemplate::new();
        template.add_template("index", include_str!("./template/index.html.tt"))?;
        template.add_formatter("unescaped", format_unescaped);

        let text = template.render("index", context)?;

        let mut file = File::create(self.path)?;
        file.write_all(text.as_bytes())?;

        Ok(file.flush()?)
    }
}

#[derive(Serialize)]
pub struct Context {
    charts: Vec<ChartEntry>,
}

impl Context {
    pub fn new(charts: Vec<ChartEntry>) -> Context {
        Self { charts }
    }
}

/// One chart on the report page: its inlined SVG markup and whether a
/// page-data script drives its pointer interaction.
#[derive(Serialize)]
pub struct ChartEntry {
    id: Id,
    title: String,
    svg: String,
    interactive: bool,
}

impl ChartEntry {
    pub fn new(id: Id, title: String, svg: String, interactive: bool) -> ChartEntry {
        Self {
            id,
            title,
            svg,
            interactive,
        }
    }
}
