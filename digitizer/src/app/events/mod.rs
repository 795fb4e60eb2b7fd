use std::{path::PathBuf, thread::JoinHandle};

use app_core::{
    event::{AppEvent, EventState},
    string_error::ErrorStringExt,
};
use derive_new::new;

use super::{components::decode_image, EguiApp};

// ---------------------------------------------------------------------------
//
//
// EventQueue
//
//
// ---------------------------------------------------------------------------

/// The EventQueue stores events that are processed each iteration
/// of the application GUI event loop.
pub struct EventQueue<EguiApp> {
    /// Stores events for later processing.
    queue: Vec<Box<dyn AppEvent<App = EguiApp>>>,
    /// Temporarily stores events that have not yet finished running.
    tmp_backlog: Vec<Box<dyn AppEvent<App = EguiApp>>>,
}

impl<EguiApp> EventQueue<EguiApp> {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            tmp_backlog: Vec::new(),
        }
    }

    pub fn queue_event(&mut self, event: Box<dyn AppEvent<App = EguiApp>>) {
        self.queue.push(event);
    }

    pub fn discard_events(&mut self) {
        self.queue.clear();
        self.tmp_backlog.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty() && self.tmp_backlog.is_empty()
    }
}

impl EguiApp {
    pub fn run_events(&mut self) {
        // Fully drain all queued events.
        while let Some(mut event) = self.event_queue.queue.pop() {
            match event.apply(self) {
                Ok(EventState::Finished) => {
                    self.request_redraw();
                }
                Ok(EventState::Busy) => {
                    // Add busy event to the backlog.
                    self.event_queue.tmp_backlog.push(event);
                }
                Err(err) => {
                    log::error!("event failed: {}", err);
                    self.status.error(err);
                    self.request_redraw();
                }
            }
        }

        // Putting the backlog back in the queue by swapping the
        // vectors.
        std::mem::swap(
            &mut self.event_queue.queue,
            &mut self.event_queue.tmp_backlog,
        );
    }
}

// ---------------------------------------------------------------------------
//
//
// Events
//
//
// ---------------------------------------------------------------------------

/// Load the image picked in a file dialog.
#[derive(new)]
pub struct LoadImageRequested {
    thread_handle: Option<JoinHandle<Option<PathBuf>>>,
}

/// Export the point table to the file picked in a save dialog.
#[derive(new)]
pub struct ExportRequested {
    thread_handle: Option<JoinHandle<Option<PathBuf>>>,
}

// ---------------------------------------------------------------------------
//
//
// apply()
//
//
// ---------------------------------------------------------------------------

/// Poll the dialog thread of an event. Returns `None` while the dialog is
/// still open.
fn poll_dialog(
    thread_handle: &mut Option<JoinHandle<Option<PathBuf>>>,
) -> Option<Result<Option<PathBuf>, String>> {
    let handle = thread_handle.take_if(|handle| handle.is_finished())?;
    Some(
        handle
            .join()
            .map_err(|err| format!("file dialog thread panicked: {:?}", err)),
    )
}

impl AppEvent for LoadImageRequested {
    type App = EguiApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        let Some(selection) = poll_dialog(&mut self.thread_handle) else {
            return Ok(EventState::Busy);
        };
        let Some(path) = selection? else {
            log::debug!("image selection cancelled");
            return Ok(EventState::Finished);
        };

        let image = decode_image(&path)?;
        let [width, height] = image.size;
        app.session.load_image(width, height);
        app.canvas.set_image(image);
        app.status.info(format!(
            "Loaded {} ({}x{}). Click the start of the x-axis.",
            path.display(),
            width,
            height
        ));
        Ok(EventState::Finished)
    }
}

impl AppEvent for ExportRequested {
    type App = EguiApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        let Some(selection) = poll_dialog(&mut self.thread_handle) else {
            return Ok(EventState::Busy);
        };
        let Some(path) = selection? else {
            log::debug!("export cancelled");
            return Ok(EventState::Finished);
        };

        let rows = app.session.rows();
        let format = table_export::write_table(&rows, &path)
            .err_to_string(&format!("could not export points to {}", path.display()))?;
        app.status.info(format!(
            "Exported {} points as {:?} to {}",
            rows.len(),
            format,
            path.display()
        ));
        Ok(EventState::Finished)
    }
}
