/// Whether an event is done or has to be polled again on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventState {
    Busy,
    Finished,
}

/// An action that is queued by the GUI and applied to the app outside of the
/// rendering code, e.g. because it waits for a file dialog running on another
/// thread.
pub trait AppEvent {
    type App;
    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String>;
}
