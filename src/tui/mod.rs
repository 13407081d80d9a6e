//! Terminal front-end: raw-mode setup, input thread, draw loop, and the
//! tokio runtime that executes menu actions off the UI thread.

pub mod bus;
pub mod config;
pub mod input;
pub mod ui;

use anyhow::Result;
use ratatui::{backend::CrosstermBackend, prelude::*};
use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;

use crate::menu::{ClickOutcome, Menu, MenuItem};
use crate::tui::bus::{Bus, CoreToUi, UiToCore};
use crate::tui::config::TuiConfig;
use crate::tui::ui::UiState;

pub fn start(menu: Menu, config: TuiConfig) -> Result<()> {
    log::info!("komichi TUI starting");

    if let Some(path) = &config.start_path {
        menu.set_active_path(path)?;
    }

    // Setup terminal
    let mut stdout = io::stdout();
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    if config.mouse_capture {
        crossterm::execute!(stdout, crossterm::event::EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(&mut stdout);
    let mut terminal = Terminal::new(backend)?;

    let (ui_tx, ui_rx) = flume::unbounded::<UiToCore>();
    let (core_tx, core_rx) = flume::unbounded::<CoreToUi>();
    let (kill_tx, kill_rx) = flume::bounded::<()>(1);
    let bus = Bus::new(ui_tx, core_tx);

    // Input thread
    {
        let bus = bus.clone();
        thread::spawn(move || {
            if let Err(err) = input::run_input_thread(bus, kill_rx) {
                log::error!("input thread exited with error: {err}");
            }
        });
    }

    // Actions are async; they run on this runtime while the draw loop stays
    // synchronous.
    let runtime = tokio::runtime::Runtime::new()?;

    let res = run_app(&mut terminal, &menu, &bus, &ui_rx, &core_rx, &runtime, &config);

    let _ = kill_tx.send(());

    // Restore terminal
    let mut stdout = io::stdout();
    if config.mouse_capture {
        crossterm::execute!(stdout, crossterm::event::DisableMouseCapture)?;
    }
    crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<&mut Stdout>>,
    menu: &Menu,
    bus: &Bus,
    ui_rx: &flume::Receiver<UiToCore>,
    core_rx: &flume::Receiver<CoreToUi>,
    runtime: &tokio::runtime::Runtime,
    config: &TuiConfig,
) -> Result<()> {
    let mut state = UiState::default();
    let mut last_path = menu.active_path_string()?;

    loop {
        terminal.draw(|f| {
            if let Err(err) = ui::render_ui(f, menu, &state) {
                log::error!("render failed: {err}");
            }
        })?;

        match ui_rx.recv_timeout(Duration::from_millis(config.tick_ms)) {
            Ok(msg) => {
                if apply_msg(msg, menu, bus, runtime, &mut state)? {
                    break;
                }
            }
            Err(flume::RecvTimeoutError::Timeout) => {}
            Err(flume::RecvTimeoutError::Disconnected) => break,
        }

        // Drain wake-ups from finished action tasks.
        while let Ok(msg) = core_rx.try_recv() {
            apply_core_msg(msg, &mut state);
        }

        // Reset the cursor whenever navigation moved, from whatever source.
        let path = menu.active_path_string()?;
        if path != last_path {
            state.cursor = 0;
            last_path = path;
        }
    }

    Ok(())
}

/// Apply one wake-up from an action task. A failure lands in the error slot
/// and stays there until cleared.
fn apply_core_msg(msg: CoreToUi, state: &mut UiState) {
    match msg {
        CoreToUi::Refreshed => {}
        CoreToUi::ActionFailed(err) => state.error = Some(err),
    }
}

/// Apply one bus message. Returns true when the loop should quit.
fn apply_msg(
    msg: UiToCore,
    menu: &Menu,
    bus: &Bus,
    runtime: &tokio::runtime::Runtime,
    state: &mut UiState,
) -> Result<bool> {
    match msg {
        UiToCore::MoveUp => {
            let len = selectable_children(menu)?.len();
            if len > 0 {
                state.cursor = if state.cursor == 0 {
                    len - 1
                } else {
                    state.cursor - 1
                };
            }
        }
        UiToCore::MoveDown => {
            let len = selectable_children(menu)?.len();
            if len > 0 {
                state.cursor = (state.cursor + 1) % len;
            }
        }
        UiToCore::TabLeft => switch_tab(menu, -1)?,
        UiToCore::TabRight => switch_tab(menu, 1)?,
        UiToCore::Activate => activate_selection(menu, bus, runtime, state)?,
        UiToCore::Back => {
            let resolved = menu.active_path()?;
            if resolved.len() > 1 {
                let parent = crate::menu::resolve::path_to(&resolved, resolved.len() - 2);
                menu.set_active_path(&parent)?;
            }
        }
        UiToCore::Home => {
            menu.set_active_path(menu.root().id.as_str())?;
        }
        UiToCore::ClearError => state.error = None,
        UiToCore::Quit => return Ok(true),
    }
    Ok(false)
}

/// Children of the deepest entry that the cursor can land on, in rendered
/// order.
fn selectable_children(menu: &Menu) -> Result<Vec<std::sync::Arc<MenuItem>>> {
    Ok(menu
        .active_children()?
        .into_iter()
        .filter(|child| child.is_visible())
        .collect())
}

fn switch_tab(menu: &Menu, direction: isize) -> Result<()> {
    let view = menu.compose()?;
    let Some(tabs) = view.find_bar().and_then(|bar| bar.tabs.clone()) else {
        return Ok(());
    };
    if tabs.is_empty() {
        return Ok(());
    }
    let len = tabs.len() as isize;
    let next = match tabs.iter().position(|tab| tab.selected) {
        Some(current) => (current as isize + direction).rem_euclid(len) as usize,
        // No tab selected yet (at the category holder itself): enter the set
        // from whichever end matches the direction.
        None => {
            if direction > 0 {
                0
            } else {
                (len - 1) as usize
            }
        }
    };
    menu.set_active_path(&tabs[next].path)?;
    Ok(())
}

fn activate_selection(
    menu: &Menu,
    bus: &Bus,
    runtime: &tokio::runtime::Runtime,
    state: &mut UiState,
) -> Result<()> {
    let children = selectable_children(menu)?;
    let Some(item) = children.get(state.cursor) else {
        return Ok(());
    };
    match menu.route_click(item)? {
        ClickOutcome::Navigate(path) => {
            menu.set_active_path(&path)?;
        }
        outcome @ ClickOutcome::Action { .. } => {
            let menu = menu.clone();
            let core_tx = bus.core_tx.clone();
            runtime.spawn(async move {
                match menu.dispatch(outcome).await {
                    Ok(()) => {
                        let _ = core_tx.send(CoreToUi::Refreshed);
                    }
                    Err(err) => {
                        log::warn!("menu action failed: {err}");
                        let _ = core_tx.send(CoreToUi::ActionFailed(err.to_string()));
                    }
                }
            });
        }
        ClickOutcome::Inert => {}
    }
    Ok(())
}
