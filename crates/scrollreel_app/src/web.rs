//! Browser front-end.
//!
//! Exposes [`WebStage`] to the page script. The JS side owns the 3D viewer
//! and the debug panel widget; it forwards importer progress and panel edits
//! here and calls [`WebStage::frame`] from `requestAnimationFrame`.
//!
//! ```js
//! const stage = new WebStage((p) => { model.position.set(p[0], p[1], p[2]);
//!                                     model.rotation.set(p[3], p[4], p[5]);
//!                                     viewer.setDirty(); });
//! importer.addEventListener('onProgress', (ev) => stage.import_progress(ev.loaded, ev.total));
//! pane.on('change', (e) => stage.panel_change(e.presetKey, e.value.x, e.value.y, e.value.z));
//! stage.load((path) => manager.addFromPath(path));
//! const tick = () => { stage.frame(); requestAnimationFrame(tick); };
//! tick();
//! ```

use js_sys::{Float32Array, Function, Promise};
use log::{error, warn};
use scrollreel_animation::{RegionBounds, StaticLayout};
use scrollreel_core::{ReelError, Timer, Transform};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element};

use crate::config::StageConfig;
use crate::panel::PanelChange;
use crate::sequence::region_ids;
use crate::stage::Stage;
use crate::viewer::{LoaderEvent, LoadingOverlay, SceneViewer};

fn to_js(err: ReelError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    "unknown error".to_string()
}

fn document() -> Result<Document, ReelError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ReelError::WasmError("no document".to_string()))
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(element) => element,
        Err(err) => {
            warn!("Bad selector '{selector}': {}", describe(&err));
            None
        }
    }
}

/// Forwards render-dirty notifications to a JS callback, called with a
/// `Float32Array` of `[px, py, pz, rx, ry, rz]`.
struct JsViewer {
    on_dirty: Function,
}

impl SceneViewer for JsViewer {
    fn notify_dirty(&mut self, transform: &Transform) {
        let packed = Float32Array::from(&transform.to_array()[..]);
        if let Err(err) = self.on_dirty.call1(&JsValue::NULL, &packed) {
            error!("Viewer callback failed: {}", describe(&err));
        }
    }
}

struct DomOverlay {
    document: Document,
    progress_bar: Option<Element>,
    loader: Option<Element>,
}

impl DomOverlay {
    fn new(document: &Document, config: &StageConfig) -> Self {
        let progress_bar = query(document, &config.progress_bar);
        let loader = query(document, &config.loader);
        if loader.is_none() {
            warn!("Loading overlay '{}' not found", config.loader);
        }
        Self {
            document: document.clone(),
            progress_bar,
            loader,
        }
    }
}

impl LoadingOverlay for DomOverlay {
    fn set_progress(&mut self, progress: f32) {
        if let Some(bar) = &self.progress_bar
            && let Err(err) = bar.set_attribute("style", &format!("transform:scaleX({progress})"))
        {
            warn!("Could not update progress bar: {}", describe(&err));
        }
    }

    fn set_offset(&mut self, percent: f32) {
        if let Some(loader) = &self.loader
            && let Err(err) =
                loader.set_attribute("style", &format!("transform:translateX({percent}%)"))
        {
            warn!("Could not move loading overlay: {}", describe(&err));
        }
    }

    fn remove(&mut self) {
        if let Some(loader) = self.loader.take() {
            loader.remove();
        }
    }

    fn show_error(&mut self, message: &str) {
        let Some(loader) = &self.loader else {
            return;
        };
        match self.document.create_element("p") {
            Ok(notice) => {
                notice.set_class_name("loader-error");
                notice.set_text_content(Some(message));
                if let Err(err) = loader.append_child(&notice) {
                    error!("Could not show load error: {}", describe(&err));
                }
            }
            Err(err) => error!("Could not show load error: {}", describe(&err)),
        }
    }
}

/// Measures the scroll container and every trigger region for this frame.
fn measure_layout(scroller: &Element, document: &Document, ids: &[String]) -> StaticLayout {
    let container = scroller.get_bounding_client_rect();
    let scroll_top = scroller.scroll_top() as f32;
    let mut layout = StaticLayout::new(scroller.client_height() as f32);

    for id in ids {
        if let Some(element) = query(document, &format!(".{id}")) {
            let rect = element.get_bounding_client_rect();
            let top = (rect.top() - container.top()) as f32 + scroll_top;
            layout.insert(id.clone(), RegionBounds::new(top, rect.height() as f32));
        }
    }

    layout
}

#[wasm_bindgen]
pub struct WebStage {
    stage: Stage<JsViewer, DomOverlay>,
    document: Document,
    scroller: Option<Element>,
    region_ids: Vec<String>,
    timer: Timer,
}

#[wasm_bindgen]
impl WebStage {
    /// `on_dirty` receives the packed transform after every change.
    /// `config_json` optionally overrides the default page configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(on_dirty: Function, config_json: Option<String>) -> Result<WebStage, JsValue> {
        let config = match config_json {
            Some(json) => StageConfig::from_json(&json).map_err(to_js)?,
            None => StageConfig::default(),
        };

        let document = document().map_err(to_js)?;
        if document.get_element_by_id(&config.canvas_id).is_none() {
            warn!(
                "Viewer canvas '#{}' not found; the model will not be visible",
                config.canvas_id
            );
        }
        let scroller = query(&document, &config.scroller);
        if scroller.is_none() {
            warn!(
                "Scroll container '{}' not found; scroll animation disabled",
                config.scroller
            );
        }
        let region_ids = region_ids(&config.keyframes);
        let overlay = DomOverlay::new(&document, &config);

        let stage = Stage::new(config, JsViewer { on_dirty }, overlay).map_err(to_js)?;

        Ok(WebStage {
            stage,
            document,
            scroller,
            region_ids,
            timer: Timer::new(),
        })
    }

    /// Starts the import. `add_asset(path)` must return a `Promise` that
    /// settles when the model is in the scene.
    pub fn load(&self, add_asset: &Function) -> Result<(), JsValue> {
        let path = JsValue::from_str(&self.stage.config().asset_path);
        let promise: Promise = add_asset
            .call1(&JsValue::NULL, &path)?
            .dyn_into()
            .map_err(|_| {
                to_js(ReelError::WasmError(
                    "addAsset did not return a Promise".to_string(),
                ))
            })?;

        let events = self.stage.loader_events();
        wasm_bindgen_futures::spawn_local(async move {
            let event = match JsFuture::from(promise).await {
                Ok(_) => LoaderEvent::Loaded,
                Err(err) => LoaderEvent::Failed(describe(&err)),
            };
            events.publish(event);
        });

        Ok(())
    }

    pub fn import_progress(&self, loaded: f64, total: f64) {
        self.stage
            .loader_events()
            .publish(LoaderEvent::progress(loaded, total));
    }

    pub fn panel_change(&self, field: &str, x: f32, y: f32, z: f32) -> Result<(), JsValue> {
        let change = PanelChange::parse(field, x, y, z).map_err(to_js)?;
        self.stage.panel_events().publish(change);
        Ok(())
    }

    /// JSON description of the panel fields (name, initial value, limits).
    pub fn panel_fields(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.stage.panel().fields())
            .map_err(|err| to_js(ReelError::from(err)))
    }

    /// Effective configuration as JSON.
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.stage.config().to_json().map_err(to_js)
    }

    pub fn frame(&mut self) {
        self.timer.tick();

        let (scroll, layout) = match &self.scroller {
            Some(scroller) => (
                Some(scroller.scroll_top() as f32),
                measure_layout(scroller, &self.document, &self.region_ids),
            ),
            None => (None, StaticLayout::default()),
        };

        self.stage.frame(self.timer.dt_seconds(), scroll, &layout);
    }

    /// Current intro state, for page scripts and debugging.
    pub fn state(&self) -> String {
        format!("{:?}", self.stage.intro_state())
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"scrollreel: logger already initialized".into());
    }
}
