//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `tui_2048::term`. Nothing moves on its own in 2048, so the loop simply
//! blocks on the next terminal event and redraws after it.

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{debug, info};

use tui_2048::core::{GameSession, TurnOutcome};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::{logging, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    info!("starting with {config:?}");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut session = GameSession::new(config.seed);
    let view = GameView::new(config.cell_width, config.cell_height);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);

    loop {
        view.render_into(&session.snapshot(), viewport, &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    info!("quit after {} moves", session.moves());
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let outcome = session.handle(action);
                    if outcome != TurnOutcome::Ignored {
                        debug!("{} -> {outcome:?}", action.as_str());
                    }
                }
            }
            Event::Resize(w, h) => {
                viewport = Viewport::new(w, h);
                term.invalidate();
            }
            _ => {}
        }
    }
}
