use crate::{
    cli::{Args, OutputFormat},
    config::{Document, RenderOptions},
    error::Result,
    ioutils::write_output,
    renderer::{render_document, RenderedDocument},
};
use log::{debug, info};

/// Main CLI runner: load a CV, render its entries and write the result
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete rendering workflow
    pub fn run(self) -> Result<()> {
        let document = Document::load(&self.args.input)?;
        let options = self.render_options();
        debug!("Render options: {options:?}");

        let rendered = render_document(&document, options)?;
        let content = self.serialize(&rendered)?;
        write_output(&content, self.args.output.as_ref())?;

        if let Some(output) = &self.args.output {
            info!("Rendered entries written to {}", output.display());
        }
        Ok(())
    }

    fn render_options(&self) -> RenderOptions {
        let today = RenderOptions::today();
        RenderOptions::new(
            self.args.show_time_span,
            self.args.current_date.unwrap_or(today.current_date),
        )
    }

    fn serialize(&self, rendered: &RenderedDocument) -> Result<String> {
        Ok(match self.args.format {
            OutputFormat::Json => serde_json::to_string_pretty(rendered)?,
            OutputFormat::Yaml => serde_yaml::to_string(rendered)?,
        })
    }
}

/// Entry point for the CLI
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
