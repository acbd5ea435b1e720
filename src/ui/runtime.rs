use std::io;
use std::path::PathBuf;

use crate::config::Config;
use crate::picture::{spawn_fetch, PictureSource};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the UI until quit.
///
/// `picture_override` swaps the fixed URL for a local file. The loop is
/// synchronous: a key event dispatches at most one intent, and the next
/// draw renders from the replaced state.
pub fn run(config: Config, picture_override: Option<PathBuf>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.tick_rate();
    let events = EventHandler::new(tick_rate);

    let source = match picture_override {
        Some(path) => PictureSource::File(path),
        None => PictureSource::default(),
    };
    let slot = spawn_fetch(source, config.fetch_timeout(), events.sender());

    let mut app = App::new(&config);
    app.attach_picture(slot);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size from the backend.
            Ok(AppEvent::Resize(_, _)) => {}
            // The slot is already filled; this wakes the loop for a redraw.
            Ok(AppEvent::PictureReady) | Ok(AppEvent::PictureError(_)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
