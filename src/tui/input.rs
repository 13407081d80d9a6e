use anyhow::{anyhow, Result};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};

use crate::tui::bus::{Bus, UiToCore};

/// Spawn body for the input thread: polls terminal events and translates
/// them onto the bus until the kill signal arrives.
pub fn run_input_thread(bus: Bus, kill_rx: flume::Receiver<()>) -> Result<()> {
    log::info!("input thread started");
    loop {
        // Keep the poll loop tight; mouse capture is configured once at
        // startup, toggling it here interferes with terminal selection.
        if let Ok(true) = crossterm::event::poll(Duration::from_millis(100)) {
            if let Ok(event) = crossterm::event::read() {
                handle_event(event, &bus)?;
            }
        }

        if kill_rx.try_recv().is_ok() {
            break;
        }
    }

    Ok(())
}

fn handle_event(event: crossterm::event::Event, bus: &Bus) -> Result<()> {
    match event {
        crossterm::event::Event::Key(key) => handle_key_event(key, bus)?,
        crossterm::event::Event::Mouse(mouse) => handle_mouse_event(mouse, bus)?,
        _ => {}
    }

    Ok(())
}

fn handle_key_event(key: KeyEvent, bus: &Bus) -> Result<()> {
    if key.kind != crossterm::event::KeyEventKind::Press {
        return Ok(()); // Ignore key repeat / release
    }

    // Global quit with Ctrl + C, ahead of the normal mapping.
    if key
        .modifiers
        .contains(crossterm::event::KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c'))
    {
        bus.ui_tx.send(UiToCore::Quit).map_err(|err| anyhow!(err))?;
        return Ok(());
    }

    if let Some(msg) = map_key(key) {
        log::debug!("key {:?} -> {msg:?}", key.code);
        bus.ui_tx.send(msg).map_err(|err| anyhow!(err))?;
    }

    Ok(())
}

/// Key map for the navigation console. Vim-style fallbacks next to the
/// arrow keys, like every other pane-based terminal tool.
pub fn map_key(key: KeyEvent) -> Option<UiToCore> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(UiToCore::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiToCore::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(UiToCore::TabLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(UiToCore::TabRight),
        KeyCode::Enter => Some(UiToCore::Activate),
        KeyCode::Backspace | KeyCode::Esc => Some(UiToCore::Back),
        KeyCode::Home => Some(UiToCore::Home),
        KeyCode::Char('c') => Some(UiToCore::ClearError),
        KeyCode::Char('q') => Some(UiToCore::Quit),
        _ => None,
    }
}

fn handle_mouse_event(mouse: MouseEvent, bus: &Bus) -> Result<()> {
    let msg = match mouse.kind {
        MouseEventKind::ScrollUp => Some(UiToCore::MoveUp),
        MouseEventKind::ScrollDown => Some(UiToCore::MoveDown),
        _ => None,
    };
    if let Some(msg) = msg {
        bus.ui_tx.send(msg).map_err(|err| anyhow!(err))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_map_key_navigation() {
        assert!(matches!(map_key(press(KeyCode::Up)), Some(UiToCore::MoveUp)));
        assert!(matches!(map_key(press(KeyCode::Char('j'))), Some(UiToCore::MoveDown)));
        assert!(matches!(map_key(press(KeyCode::Enter)), Some(UiToCore::Activate)));
        assert!(matches!(map_key(press(KeyCode::Backspace)), Some(UiToCore::Back)));
        assert!(matches!(map_key(press(KeyCode::Char('q'))), Some(UiToCore::Quit)));
    }

    #[test]
    fn test_map_key_ignores_unbound() {
        assert!(map_key(press(KeyCode::Char('x'))).is_none());
        assert!(map_key(press(KeyCode::Tab)).is_none());
    }
}
