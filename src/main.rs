use clap::Parser;
use color_eyre::Result;

use hubhint::SuggestionEngine;

/// Docker image name completion from the command line
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Docker image name completion powered by Docker Hub search"
)]
struct Args {
    /// Partial image name (omit to list popular images)
    prefix: Option<String>,

    /// Print candidates as a JSON array instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let args = Args::parse();
    let prefix = args.prefix.unwrap_or_default();

    // Single-threaded runtime: concurrency in this tool is interleaved I/O
    // waits, never parallel execution.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let engine = SuggestionEngine::new();
    let candidates = match rt.block_on(engine.suggest(&prefix)) {
        Ok(candidates) => candidates,
        Err(e) => {
            // Degrade to no suggestions rather than failing the caller.
            log::warn!("image search failed: {e}");
            Vec::new()
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else {
        for candidate in &candidates {
            if candidate.detail.is_empty() {
                println!("{}", candidate.label);
            } else {
                println!("{}  {}", candidate.label, candidate.detail.trim_start());
            }
        }
    }

    Ok(())
}
