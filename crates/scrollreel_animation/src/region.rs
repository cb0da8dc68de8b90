use rustc_hash::FxHashMap;

/// Vertical extent of a trigger region in scroll-content coordinates
/// (independent of the current scroll offset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    pub top: f32,
    pub height: f32,
}

impl RegionBounds {
    #[must_use]
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }
}

/// Page geometry the sequencer reads anchors against.
pub trait RegionLayout {
    /// Bounds of the named region, or `None` if the page has no such element.
    fn region(&self, id: &str) -> Option<RegionBounds>;

    /// Height of the scroll viewport.
    fn viewport_height(&self) -> f32;
}

/// Fixed layout, used for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    regions: FxHashMap<String, RegionBounds>,
    viewport_height: f32,
}

impl StaticLayout {
    #[must_use]
    pub fn new(viewport_height: f32) -> Self {
        Self {
            regions: FxHashMap::default(),
            viewport_height,
        }
    }

    /// Stacks full-height sections one after another starting at offset 0,
    /// each `section_height` tall.
    #[must_use]
    pub fn stacked<'a>(
        viewport_height: f32,
        section_height: f32,
        ids: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut layout = Self::new(viewport_height);
        let mut top = 0.0;
        for id in ids {
            layout.insert(id, RegionBounds::new(top, section_height));
            top += section_height;
        }
        layout
    }

    pub fn insert(&mut self, id: impl Into<String>, bounds: RegionBounds) {
        self.regions.insert(id.into(), bounds);
    }

    pub fn remove(&mut self, id: &str) -> Option<RegionBounds> {
        self.regions.remove(id)
    }
}

impl RegionLayout for StaticLayout {
    fn region(&self, id: &str) -> Option<RegionBounds> {
        self.regions.get(id).copied()
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }
}
