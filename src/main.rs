//! Terminal tic-tac-toe runner (default binary).
//!
//! Two players share one terminal and take turns clicking cells with the
//! mouse. It uses crossterm for input and a framebuffer-based renderer, and
//! runs a fixed-rate loop: input, update, draw, wait.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use tui_tictactoe::app::{App, Flow};
use tui_tictactoe::config::Cli;
use tui_tictactoe::input::TerminalEvents;
use tui_tictactoe::logging;
use tui_tictactoe::term::{FrameClock, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let mut term = TerminalRenderer::new();
    let entered = term.enter();

    let result = entered.and_then(|()| run(&mut term, &cli));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "game loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, cli: &Cli) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(Viewport::new(w, h));
    let mut events = TerminalEvents::new();
    let mut clock = FrameClock::new(cli.fps);

    info!(width = w, height = h, fps = cli.fps, "game started");

    loop {
        if app.frame(&mut events, |fb| term.draw_swap(fb))? == Flow::Close {
            return Ok(());
        }
        clock.tick();
    }
}
