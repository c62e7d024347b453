use std::time::Duration;

use tokio::sync::mpsc;

use courier::app::App;
use courier::config::Config;
use courier::event::Event;
use courier::{logging, terminal, ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    logging::init(&config)?;
    log::info!("courier {} starting", env!("CARGO_PKG_VERSION"));

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    // Background thread: read crossterm events and feed into channel
    let event_tx = tx.clone();
    std::thread::spawn(move || loop {
        if crossterm::event::poll(Duration::from_millis(80)).unwrap_or(false) {
            let sent = match crossterm::event::read() {
                Ok(crossterm::event::Event::Key(key)) => event_tx.send(Event::Key(key)),
                Ok(crossterm::event::Event::Mouse(mouse)) => event_tx.send(Event::Mouse(mouse)),
                Ok(crossterm::event::Event::Resize(w, h)) => event_tx.send(Event::Resize(w, h)),
                _ => Ok(()),
            };
            if sent.is_err() {
                break;
            }
        } else if event_tx.send(Event::Tick).is_err() {
            break;
        }
    });

    let mut app = App::new(config, tx)?;
    let mut terminal = terminal::init()?;

    let result = run_loop(&mut terminal, &mut app, &mut rx).await;

    terminal::restore()?;
    if let Err(e) = &result {
        log::error!("exiting with error: {:#}", e);
    }
    log::info!("courier exiting");
    result
}

async fn run_loop(
    terminal: &mut terminal::Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> anyhow::Result<()> {
    let editor_height = app.config.ui.editor_height_percent;
    loop {
        if app.state.dirty {
            terminal.draw(|frame| ui::layout::render(frame, &app.state, editor_height))?;
            app.state.dirty = false;
        }

        match rx.recv().await {
            Some(event) => app.handle_event(event),
            None => break,
        }

        if app.state.should_quit {
            break;
        }
    }
    Ok(())
}
