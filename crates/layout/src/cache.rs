use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use stone_traits::{GlyphMetrics, MetricsError, MetricsProvider};

// --- Cache Keys ---

#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct MetricsCacheKey {
    pub ch: char,
    pub family: Arc<str>,
    /// `f32::to_bits` of the font size.
    pub size_bits: u32,
}

impl MetricsCacheKey {
    pub fn new(ch: char, family: &str, font_size: f32) -> Self {
        Self {
            ch,
            family: Arc::from(family),
            size_bits: font_size.to_bits(),
        }
    }
}

/// Point-in-time counters of a [`MetricsCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheStats {
    pub size: usize,
    pub hit_count: usize,
    pub miss_count: usize,
    pub hit_rate: f64,
}

// --- The Manager ---

/// Get-or-compute memo in front of a [`MetricsProvider`].
///
/// Shareable across documents behind an `Arc`. A miss measures while holding
/// the write lock, so each key is measured and stored at most once.
#[derive(Debug)]
pub struct MetricsCache {
    provider: Arc<dyn MetricsProvider>,
    entries: RwLock<HashMap<MetricsCacheKey, GlyphMetrics>>,
    capacity: usize,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl MetricsCache {
    pub fn new(provider: Arc<dyn MetricsProvider>, capacity: usize) -> Self {
        Self {
            provider,
            entries: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Returns the cached metrics for the key, measuring on a miss.
    ///
    /// Failed measurements are not cached.
    pub fn get_or_measure(
        &self,
        ch: char,
        family: &str,
        font_size: f32,
    ) -> Result<GlyphMetrics, MetricsError> {
        let key = MetricsCacheKey::new(ch, family, font_size);

        // Fast path
        {
            let entries = self.entries.read().map_err(|_| poisoned())?;
            if let Some(metrics) = entries.get(&key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Ok(*metrics);
            }
        }

        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        // Another caller may have filled the slot between the two locks
        if let Some(metrics) = entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(*metrics);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let metrics = self.provider.measure(ch, family, font_size)?;
        if entries.len() >= self.capacity {
            log::debug!(
                "Metrics cache reached {} entries, resetting",
                self.capacity
            );
            entries.clear();
        }
        entries.insert(key, metrics);
        Ok(metrics)
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed);
        let total = hits + self.misses.load(Ordering::Relaxed);
        if total == 0 {
            return 0.0;
        }
        hits as f64 / total as f64
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.len(),
            hit_count: self.hits.load(Ordering::Relaxed),
            miss_count: self.misses.load(Ordering::Relaxed),
            hit_rate: self.hit_rate(),
        }
    }

    /// Drops every entry and zeroes the counters.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
        self.reset_stats();
    }

    /// Zeroes the counters but keeps the entries.
    pub fn reset_stats(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

fn poisoned() -> MetricsError {
    MetricsError::Unavailable("metrics cache lock poisoned".to_string())
}
