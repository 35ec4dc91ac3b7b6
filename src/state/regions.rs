// Region registry: maps nested hit-test regions to source tags
use crate::model::SourceTag;

/// Regions ordered outermost first. Each inner region must lie inside every
/// region registered before it.
#[derive(Debug, Clone)]
pub struct RegionRegistry<H> {
    entries: Vec<(H, SourceTag)>,
}

impl<H> Default for RegionRegistry<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H> RegionRegistry<H> {
    pub fn register(&mut self, handle: H, tag: SourceTag) {
        self.entries.push((handle, tag));
    }

    pub fn handles(&self) -> impl Iterator<Item = &H> {
        self.entries.iter().map(|(h, _)| h)
    }

    /// Innermost region for which `contains` holds.
    pub fn resolve(&self, mut contains: impl FnMut(&H) -> bool) -> Option<SourceTag> {
        self.entries
            .iter()
            .rev()
            .find(|(h, _)| contains(h))
            .map(|(_, tag)| *tag)
    }
}
