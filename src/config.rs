//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::types::{DEFAULT_FPS, MAX_FPS};

/// Two-player tic-tac-toe in the terminal. Click a cell to play;
/// `r` starts a new game, `q` or Esc quits.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tui-tictactoe", version, about)]
pub struct Cli {
    /// Target frames per second of the draw/update loop
    #[arg(
        long,
        default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_FPS))
    )]
    pub fps: u32,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["tui-tictactoe"]).unwrap();
        assert_eq!(cli.fps, DEFAULT_FPS);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn explicit_values() {
        let cli =
            Cli::try_parse_from(["tui-tictactoe", "--fps", "30", "--log-file", "game.log"])
                .unwrap();
        assert_eq!(cli.fps, 30);
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn fps_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["tui-tictactoe", "--fps", "0"]).is_err());
        assert!(Cli::try_parse_from(["tui-tictactoe", "--fps", "241"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
