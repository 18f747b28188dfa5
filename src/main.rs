use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ppd_census::census::CensusPipeline;
use ppd_census::source::{CommandLineSource, SearchCommand};

/// Scans compressed PPD archives and prints a ranked product-count report.
#[derive(Parser, Debug)]
#[command(name = "ppd-census", version, about)]
struct Args {
    /// Glob of compressed PPD archives to scan (expanded by the shell)
    #[arg(long, default_value = "/usr/share/cups/model/*.ppd.gz")]
    models: String,

    /// Pattern handed to the search tool; matching lines feed the census
    #[arg(long, default_value = r"^\*Product:")]
    pattern: String,

    /// Decompress-and-search tool run over the archives
    #[arg(long, default_value = "zgrep")]
    search_tool: String,

    /// Emit the summary as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let command = SearchCommand {
        search_tool: args.search_tool,
        pattern: args.pattern,
        models_glob: args.models,
    };

    let source = CommandLineSource::spawn(&command)
        .with_context(|| format!("cannot start search command: {}", command.shell_line()))?;

    let report = CensusPipeline::new(source).execute().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.summary)?);
    } else {
        let mut stdout = std::io::stdout().lock();
        report.write_text(&mut stdout)?;
    }

    Ok(())
}
