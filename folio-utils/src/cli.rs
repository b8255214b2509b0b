use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(name = "folio", version, about = "Build a single-page portfolio with reveal animations")]
pub struct CliArgs {
    /// Log filter, e.g. `info` or `folio_site=debug` (overrides RUST_LOG)
    #[clap(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render the page into an output directory
    Build {
        /// Directory that receives index.html
        #[clap(long, short, env = "FOLIO_OUT_DIR", default_value = "dist")]
        out: PathBuf,

        /// JSON file replacing the built-in content
        #[clap(long, short, env = "FOLIO_CONTENT")]
        content: Option<PathBuf>,
    },
    /// Print the reveal profile for a direction as JSON
    Profile {
        /// up, down, left, right or none; anything else means up
        direction: Option<String>,

        /// Seconds to wait after the element becomes visible
        #[clap(long, allow_hyphen_values = true)]
        delay: Option<f64>,
    },
    /// Print sampled reveal frames for a direction
    Preview {
        /// up, down, left, right or none; anything else means up
        direction: Option<String>,

        /// Seconds to wait after the element becomes visible
        #[clap(long, allow_hyphen_values = true)]
        delay: Option<f64>,

        /// Frames sampled per second
        #[clap(long, default_value = "30")]
        fps: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() {
        let args = CliArgs::parse_from(["folio", "build"]);
        match args.command {
            Command::Build { out, content } => {
                // FOLIO_OUT_DIR is not set in the test environment
                if std::env::var_os("FOLIO_OUT_DIR").is_none() {
                    assert_eq!(out, PathBuf::from("dist"));
                }
                if std::env::var_os("FOLIO_CONTENT").is_none() {
                    assert!(content.is_none());
                }
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_profile_accepts_negative_delay() {
        let args = CliArgs::parse_from(["folio", "profile", "left", "--delay", "-0.5"]);
        match args.command {
            Command::Profile { direction, delay } => {
                assert_eq!(direction.as_deref(), Some("left"));
                assert_eq!(delay, Some(-0.5));
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_preview_fps_default() {
        let args = CliArgs::parse_from(["folio", "--log-level", "debug", "preview"]);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        match args.command {
            Command::Preview { direction, delay, fps } => {
                assert!(direction.is_none());
                assert!(delay.is_none());
                assert_eq!(fps, 30);
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
