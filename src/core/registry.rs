//! Channel-to-transformer lookup. The registry is an explicitly constructed
//! value the caller builds once at startup and passes by reference; there is
//! no process-wide singleton, so tests can hold independent registries.

use crate::domain::ports::ChannelTransformer;
use crate::transformers::{
    GoogleTransformer, MetaTransformer, NoOpTransformer, TikTokTransformer, YandexTransformer,
};
use std::sync::Arc;

/// Options threaded into the default transformer set.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryOptions {
    /// Compute derived Yandex ratios (CPC, CPM, CTR, ROAS, ROI) from base
    /// counters.
    pub yandex_derived_metrics: bool,
}

/// Maps lower-cased channel keys to transformer instances. Aliases share the
/// same instance as their canonical name. Lookup never fails outward: unknown
/// channels fall back to the no-op transformer with a warning.
pub struct TransformerRegistry {
    entries: Vec<(String, Arc<dyn ChannelTransformer>)>,
    noop: Arc<dyn ChannelTransformer>,
}

impl TransformerRegistry {
    /// Builds a registry with the six canonical channels plus the `facebook`
    /// and `yandex_direct` aliases.
    pub fn with_defaults(options: RegistryOptions) -> Self {
        let meta: Arc<dyn ChannelTransformer> = Arc::new(MetaTransformer::new());
        let yandex: Arc<dyn ChannelTransformer> =
            Arc::new(YandexTransformer::new(options.yandex_derived_metrics));
        let noop: Arc<dyn ChannelTransformer> = Arc::new(NoOpTransformer::new());

        let mut registry = Self {
            entries: Vec::new(),
            noop: noop.clone(),
        };
        registry.register("meta", meta.clone());
        registry.register("facebook", meta); // alias
        registry.register("google", Arc::new(GoogleTransformer::new()));
        registry.register("tiktok", Arc::new(TikTokTransformer::new()));
        registry.register("yandex", yandex.clone());
        registry.register("yandex_direct", yandex); // alias
        registry.register("noop", noop);
        registry
    }

    /// Case-insensitive lookup. Unknown channels resolve to the no-op entry.
    pub fn get(&self, channel: &str) -> Arc<dyn ChannelTransformer> {
        let key = channel.to_lowercase();
        match self.entries.iter().find(|(name, _)| *name == key) {
            Some((_, transformer)) => transformer.clone(),
            None => {
                tracing::warn!("No transformer for channel '{}', using noop", channel);
                self.noop.clone()
            }
        }
    }

    /// Upserts a transformer for `channel`, case-insensitively. Overwriting an
    /// existing entry keeps its original insertion position.
    pub fn register(&mut self, channel: &str, transformer: Arc<dyn ChannelTransformer>) {
        let key = channel.to_lowercase();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == key) {
            entry.1 = transformer;
        } else {
            self.entries.push((key, transformer));
        }
        tracing::debug!("Registered transformer for channel: {}", channel);
    }

    /// All registered channel keys except `noop`, in insertion order.
    pub fn available_channels(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, _)| name.clone())
            .filter(|name| name != "noop")
            .collect()
    }
}

impl Default for TransformerRegistry {
    fn default() -> Self {
        Self::with_defaults(RegistryOptions::default())
    }
}
