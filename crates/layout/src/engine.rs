use crate::LayoutError;
use crate::cache::{CacheStats, MetricsCache};
use crate::config::LayoutConfig;
use crate::context::{LayoutContext, Run};
use crate::flow::LayoutFlow;
use crate::parser::Parser;
use std::sync::Arc;
use stone_traits::MetricsProvider;
use stone_types::{Direction, PunctuationMode, Size};

/// One document: its layout context, the flow chosen for its direction and
/// the metrics cache its parses go through.
///
/// Setting text re-parses and re-lays out. Changing the viewport, direction,
/// punctuation mode or kinsoku flag only re-lays out the existing runs.
#[derive(Debug)]
pub struct LayoutEngine {
    context: LayoutContext,
    flow: LayoutFlow,
    cache: Arc<MetricsCache>,
}

impl LayoutEngine {
    /// Creates an engine sharing `cache` with other documents.
    pub fn new(config: &LayoutConfig, cache: Arc<MetricsCache>) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            context: LayoutContext::from_config(config),
            flow: LayoutFlow::for_direction(config.direction),
            cache,
        })
    }

    /// Creates an engine with a private cache in front of `provider`.
    pub fn with_provider(
        config: &LayoutConfig,
        provider: Arc<dyn MetricsProvider>,
    ) -> Result<Self, LayoutError> {
        log::debug!("Using '{}' metrics provider", provider.name());
        let cache = Arc::new(MetricsCache::new(provider, config.cache_capacity));
        Self::new(config, cache)
    }

    /// Parses `text` and lays it out.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Metrics` when a glyph cannot be measured. The
    /// engine is then left without runs.
    pub fn set_text(&mut self, text: &str) -> Result<(), LayoutError> {
        Parser::new(&self.cache).parse(&mut self.context, text)?;
        self.layout();
        Ok(())
    }

    /// Re-runs the flow over the current runs.
    pub fn layout(&mut self) {
        self.flow.layout(&mut self.context);
    }

    pub fn set_render_size(&mut self, size: Size) {
        self.context.render_size = size;
        self.layout();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.context.direction = direction;
        self.flow = LayoutFlow::for_direction(direction);
        self.layout();
    }

    pub fn set_punctuation_mode(&mut self, mode: PunctuationMode) {
        self.context.punctuation_mode = mode;
        self.layout();
    }

    pub fn set_kinsoku_enabled(&mut self, enabled: bool) {
        self.context.kinsoku_enabled = enabled;
        self.layout();
    }

    pub fn context(&self) -> &LayoutContext {
        &self.context
    }

    /// Mutable access for callers adjusting settings such as the kinsoku
    /// rules. Call [`LayoutEngine::layout`] afterwards.
    pub fn context_mut(&mut self) -> &mut LayoutContext {
        &mut self.context
    }

    pub fn runs(&self) -> &[Run] {
        &self.context.runs
    }

    pub fn flow(&self) -> LayoutFlow {
        self.flow
    }

    pub fn cache(&self) -> &Arc<MetricsCache> {
        &self.cache
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
