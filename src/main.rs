mod commands;

use clap::Parser;
use folio_utils::cli::{CliArgs, Command};

fn init_logging(level: Option<&str>) {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    // A logger may already be installed when running under a test harness
    let _ = builder.format_timestamp(None).try_init();
}

fn main() -> anyhow::Result<()> {
    let opts = CliArgs::parse();
    init_logging(opts.log_level.as_deref());

    match opts.command {
        Command::Build { out, content } => {
            commands::build(&out, content.as_deref())?;
        },
        Command::Profile { direction, delay } => {
            println!("{}", commands::profile(direction.as_deref(), delay)?);
        },
        Command::Preview {
            direction,
            delay,
            fps,
        } => {
            for line in commands::preview(direction.as_deref(), delay, fps) {
                println!("{}", line);
            }
        },
    }
    Ok(())
}
