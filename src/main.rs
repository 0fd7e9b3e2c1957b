use anyhow::Result;
use clap::Parser;

use keymap_fmt::cli::CliArgs;
use keymap_fmt::config::FormatterConfig;
use keymap_fmt::rewrite::ProcessMode;
use keymap_fmt::runner;

fn main() -> Result<()> {
    keymap_fmt::tracing::init();

    let args = CliArgs::parse();
    let config = FormatterConfig::load();
    let run = args.into_run_config(&config)?;

    let summary = runner::run(&run, &config);

    for outcome in &summary.outcomes {
        tracing::debug!(
            layers = outcome.layers_formatted,
            skipped = outcome.layers_skipped,
            changed = outcome.changed,
            "Finished {}",
            outcome.path.display()
        );
    }

    if run.mode == ProcessMode::Check {
        for outcome in summary.changed() {
            println!("Would reformat {}", outcome.path.display());
        }
    }

    summary.into_result(&run)
}
