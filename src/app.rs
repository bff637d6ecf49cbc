use jiff::civil::Date;

use crate::cli::Cli;
use crate::display::SpinnerContainer;
use crate::io::cost_explorer::{CostSource, fetch_all};
use crate::prelude::*;
use crate::report::{ReportRequest, render_tsv};

/// Everything one run needs, built once at startup.
pub struct App {
    pub cli: Cli,
    pub request: ReportRequest,
    pub display: SpinnerContainer,
}

impl App {
    pub fn new(cli: Cli, today: Date) -> AppResult<Self> {
        let request = ReportRequest::trailing(today, cli.days, cli.tag_key.as_str())?;

        Ok(App {
            cli,
            request,
            display: SpinnerContainer::new(),
        })
    }

    /// Fetches every page, then renders. Nothing is rendered unless every page arrived.
    pub async fn run<S: CostSource>(&mut self, source: &S) -> AppResult<String> {
        tracing::info!(
            start = %self.request.start_date(),
            end = %self.request.end_date(),
            tag_key = self.request.tag_key(),
            "querying daily unblended cost"
        );

        self.display.start_unless_no_terminal_or(self.cli.no_animate);
        let fetched = fetch_all(source, &self.request, &mut self.display).await;
        self.display.finish();

        let pages = fetched?;
        let groups: usize = pages.iter().map(|page| page.groups.len()).sum();

        tracing::debug!(days = pages.len(), groups, "rendering report");

        render_tsv(&pages)
    }
}
