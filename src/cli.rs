use clap::Parser;

impl Cli {
    /// Convenience constructor to avoid redundant `Parser` imports in main.
    pub fn new() -> Self {
        Cli::parse()
    }
}

// Structs

#[derive(Parser, Debug)]
#[command(
    name = "cost-per-user",
    version,
    about = "Daily AWS unblended cost per user tag and linked account, as TSV.",
    after_help = "Example: cost-per-user --days=10 > costs.tsv"
)]
pub struct Cli {
    /// Number of trailing days to report, ending today (UTC).
    #[arg(
        long,
        env = "COST_REPORT_DAYS",
        default_value_t = 30,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    pub days: i64,

    /// Cost allocation tag that identifies the user.
    #[arg(long, env = "COST_REPORT_TAG_KEY", default_value = "username")]
    pub tag_key: String,

    /// Skip animations
    #[arg(long, default_value_t = false)]
    pub no_animate: bool,

    /// Debug logging to stderr. RUST_LOG wins when it is set.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
