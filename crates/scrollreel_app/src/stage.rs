//! Stage Module
//!
//! [`Stage`] is the application context. It owns the single model
//! [`Transform`] and every component that writes it, and is driven by one
//! call per animation frame.
//!
//! # Frame order
//!
//! 1. Drain importer events (progress bar, load completion, failure)
//! 2. Drain debug panel changes (ignored until the model is bound)
//! 3. Advance the intro; a load timeout is reported like a rejected import,
//!    and on completion the overlay is removed and scrolling activated
//! 4. Tick the scroll sequencer
//!
//! Each write to the transform is followed by exactly one
//! [`SceneViewer::notify_dirty`] within the same frame.
//!
//! ```rust,ignore
//! let mut stage = Stage::new(StageConfig::default(), viewer, overlay)?;
//! let importer = stage.loader_events();
//! importer.publish(LoaderEvent::Loaded);
//!
//! loop {
//!     stage.frame(dt, Some(scroll_top), &layout);
//! }
//! ```

use log::{debug, error, info};
use scrollreel_animation::{IntroSequencer, IntroState, RegionLayout, ScrollSequencer};
use scrollreel_core::{EventHub, Result, Subscription, Transform};

use crate::config::StageConfig;
use crate::panel::{PanelBinding, PanelChange};
use crate::viewer::{LoaderEvent, LoadingOverlay, SceneViewer};

pub struct Stage<V, O> {
    config: StageConfig,
    transform: Transform,

    sequencer: ScrollSequencer,
    intro: IntroSequencer,
    panel: PanelBinding,

    viewer: V,
    overlay: O,

    loader_hub: EventHub<LoaderEvent>,
    loader_rx: Subscription<LoaderEvent>,
    panel_hub: EventHub<PanelChange>,
    panel_rx: Subscription<PanelChange>,

    // Set once the importer reports the model; panel writes need a target.
    object_bound: bool,
    overlay_removed: bool,
}

impl<V: SceneViewer, O: LoadingOverlay> Stage<V, O> {
    /// Validates `config`, registers its keyframes and starts in `Loading`.
    pub fn new(config: StageConfig, viewer: V, overlay: O) -> Result<Self> {
        config.validate()?;

        let sequencer = ScrollSequencer::from_entries(config.keyframes.iter().cloned());
        let mut intro = IntroSequencer::new(config.intro);
        intro.begin_loading();

        let loader_hub = EventHub::new();
        let loader_rx = loader_hub.subscribe();
        let panel_hub = EventHub::new();
        let panel_rx = panel_hub.subscribe();

        info!(
            "Stage created: asset '{}', {} keyframes",
            config.asset_path,
            sequencer.len()
        );

        Ok(Self {
            config,
            transform: Transform::new(),
            sequencer,
            intro,
            panel: PanelBinding::new(),
            viewer,
            overlay,
            loader_hub,
            loader_rx,
            panel_hub,
            panel_rx,
            object_bound: false,
            overlay_removed: false,
        })
    }

    /// Publisher for importer events.
    #[must_use]
    pub fn loader_events(&self) -> EventHub<LoaderEvent> {
        self.loader_hub.clone()
    }

    /// Publisher for debug panel changes.
    #[must_use]
    pub fn panel_events(&self) -> EventHub<PanelChange> {
        self.panel_hub.clone()
    }

    /// Runs one frame. `scroll` is the scroll container's offset, `None` if
    /// the page has no scroll container.
    pub fn frame(&mut self, dt: f32, scroll: Option<f32>, layout: &dyn RegionLayout) {
        self.drain_loader_events();
        self.drain_panel_changes();
        self.advance_intro(dt);

        if self
            .sequencer
            .tick(scroll, layout, dt, &mut self.transform)
            && self.transform.take_changed()
        {
            self.viewer.notify_dirty(&self.transform);
        }
    }

    fn drain_loader_events(&mut self) {
        while let Some(event) = self.loader_rx.try_next() {
            match event {
                LoaderEvent::Progress(progress) => {
                    self.overlay.set_progress(progress.clamp(0.0, 1.0));
                }
                LoaderEvent::Loaded => {
                    if self.intro.asset_loaded() {
                        self.object_bound = true;
                        self.overlay.set_progress(1.0);
                    }
                }
                LoaderEvent::Failed(reason) => {
                    if self.intro.asset_failed(reason.clone()) {
                        self.report_load_failure(&reason);
                    }
                }
            }
        }
    }

    fn report_load_failure(&mut self, reason: &str) {
        error!("Could not load '{}': {reason}", self.config.asset_path);
        self.overlay
            .show_error(&format!("Failed to load the model: {reason}"));
    }

    fn drain_panel_changes(&mut self) {
        while let Some(change) = self.panel_rx.try_next() {
            if !self.object_bound {
                debug!("Ignoring panel change to {} before model load", change.field);
                continue;
            }
            self.panel.apply(&change, &mut self.transform);
            self.transform.take_changed();
            self.viewer.notify_dirty(&self.transform);
        }
    }

    fn advance_intro(&mut self, dt: f32) {
        let update = self.intro.update(dt);

        if update.timed_out
            && let IntroState::Failed(reason) = self.intro.state()
        {
            let reason = reason.clone();
            self.report_load_failure(&reason);
        }

        if let Some(offset) = update.overlay_offset {
            self.overlay.set_offset(offset);
        }

        if update.completed && !self.overlay_removed {
            self.overlay.remove();
            self.overlay_removed = true;
            self.sequencer.activate(&self.transform);
        }
    }

    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[must_use]
    pub fn intro_state(&self) -> &IntroState {
        self.intro.state()
    }

    #[must_use]
    pub fn is_scroll_active(&self) -> bool {
        self.sequencer.is_active()
    }

    #[must_use]
    pub fn is_object_bound(&self) -> bool {
        self.object_bound
    }

    #[must_use]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    #[must_use]
    pub fn sequencer(&self) -> &ScrollSequencer {
        &self.sequencer
    }

    #[must_use]
    pub fn panel(&self) -> &PanelBinding {
        &self.panel
    }

    #[must_use]
    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    #[must_use]
    pub fn overlay(&self) -> &O {
        &self.overlay
    }
}
