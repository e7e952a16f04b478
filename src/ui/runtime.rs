//! UI entry point: terminal setup, event loop, API worker wiring.

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crate::api::worker;
use crate::api::BlogClient;
use crate::config::{ConfigStore, SessionStore};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: ConfigStore, session: SessionStore) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let shutdown = ShutdownHandle::new();

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.get().ui.tick_ms);
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let client = BlogClient::new(&config.get().server);
    let (api_tx, api_rx) = tokio::sync::mpsc::channel(32);
    runtime.spawn(worker::run(
        client,
        api_rx,
        events.sender(),
        shutdown.clone(),
    ));

    let mut app = App::new(config, session);
    app.set_api_sender(api_tx);
    app.load_feed();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw call picks up the new size on its own.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Api(outcome)) => app.on_api(outcome),
            Ok(AppEvent::Shutdown) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    runtime.shutdown_timeout(Duration::from_secs(1));
    drop(guard);
    Ok(())
}
