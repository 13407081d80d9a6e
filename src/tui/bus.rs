use flume::Sender;

/// Messages sent from the input thread to the UI loop.
#[derive(Debug)]
pub enum UiToCore {
    /// Move the selection cursor up.
    MoveUp,
    /// Move the selection cursor down.
    MoveDown,
    /// Select the previous category tab.
    TabLeft,
    /// Select the next category tab.
    TabRight,
    /// Activate the selected entry.
    Activate,
    /// Truncate the active path back to the parent (breadcrumb step).
    Back,
    /// Jump back to the root path.
    Home,
    /// Clear the displayed error message.
    ClearError,
    /// Graceful shutdown request.
    Quit,
}

/// Messages sent back to the UI loop from background action tasks.
#[derive(Debug)]
pub enum CoreToUi {
    /// An action completed; the view may have a pending reveal to draw.
    Refreshed,
    /// An action failed; the message goes into the error slot.
    ActionFailed(String),
}

/// Sender-side holder handed to the input thread and to spawned action
/// tasks.
#[derive(Clone)]
pub struct Bus {
    pub ui_tx: Sender<UiToCore>,
    pub core_tx: Sender<CoreToUi>,
}

impl Bus {
    pub fn new(ui_tx: Sender<UiToCore>, core_tx: Sender<CoreToUi>) -> Self {
        Self { ui_tx, core_tx }
    }
}
