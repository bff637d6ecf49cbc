mod app;
mod cli;
mod display;
mod error;
mod io;
mod logging;
mod prelude;
mod report;

use app::App;
use cli::Cli;
use io::cost_explorer::AwsCostExplorer;
use prelude::*;
use report::request::today_utc;

// One request at a time, start to finish, so a single thread is plenty.
#[tokio::main(flavor = "current_thread")]
async fn main() -> AppResult {
    let cli = Cli::new();

    logging::init(cli.verbose);

    // Bad windows fail here, before anything touches the network.
    let mut app = App::new(cli, today_utc())?;

    let source = AwsCostExplorer::connect().await?;

    let report = app.run(&source).await?;

    // Print the result.
    print!("{}", report);

    Ok(())
}
