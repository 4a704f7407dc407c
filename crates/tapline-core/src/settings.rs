use crate::coords::SurfaceLayout;

/// Sizing for one event record pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolSettings {
    /// Records constructed when the pool is created.
    pub initial_capacity: usize,
    /// Idle records retained; extras are dropped on free.
    pub max_free: usize,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            max_free: 1000,
        }
    }
}

/// Configuration for an [`InputPipeline`](crate::InputPipeline).
#[derive(Clone, Debug, Default)]
pub struct PipelineSettings {
    pub key_pool: PoolSettings,
    pub touch_pool: PoolSettings,
    /// Initial surface geometry. Hosts update it with
    /// [`InputPipeline::set_surface_layout`](crate::InputPipeline::set_surface_layout).
    pub layout: SurfaceLayout,
}

impl PipelineSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_pool(mut self, pool: PoolSettings) -> Self {
        self.key_pool = pool;
        self
    }

    pub fn with_touch_pool(mut self, pool: PoolSettings) -> Self {
        self.touch_pool = pool;
        self
    }

    pub fn with_layout(mut self, layout: SurfaceLayout) -> Self {
        self.layout = layout;
        self
    }
}
