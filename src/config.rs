//! Run configuration: the similarity threshold plus layout and render knobs.

use crate::layout::LayoutConfig;
use crate::render::RenderConfig;
use crate::Result;

/// Default minimum number of shared notes for an edge.
pub const DEFAULT_HOMOLOGY: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub homology: usize,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            homology: DEFAULT_HOMOLOGY,
            layout: LayoutConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Config {
    pub fn with_homology(mut self, homology: usize) -> Self {
        self.homology = homology;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.layout.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.render.validate()
    }
}
