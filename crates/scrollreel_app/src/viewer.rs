use scrollreel_core::Transform;

/// The 3D viewer as seen by the stage.
pub trait SceneViewer {
    /// Scene state changed: apply `transform` to the model and draw a new frame.
    fn notify_dirty(&mut self, transform: &Transform);
}

/// The loading screen shown until the intro slides it away.
pub trait LoadingOverlay {
    /// Import progress in [0, 1], shown as the progress bar's horizontal scale.
    fn set_progress(&mut self, progress: f32);

    /// Horizontal offset of the overlay in percent of its width.
    fn set_offset(&mut self, percent: f32);

    /// Takes the overlay off the page. Called at most once.
    fn remove(&mut self);

    /// Shows a user-visible failure message.
    fn show_error(&mut self, message: &str);
}

/// Events emitted by the asset importer.
#[derive(Debug, Clone, PartialEq)]
pub enum LoaderEvent {
    Progress(f32),
    Loaded,
    Failed(String),
}

impl LoaderEvent {
    /// Progress event from raw byte counts. An unknown total reports 0.
    #[must_use]
    pub fn progress(loaded: f64, total: f64) -> Self {
        let ratio = if total > 0.0 { loaded / total } else { 0.0 };
        LoaderEvent::Progress(ratio.clamp(0.0, 1.0) as f32)
    }
}
