//! Merge Tailwind CSS class lists so that the last conflicting class wins.
//!
//! ```
//! use tailwind_merge::tw_merge;
//!
//! assert_eq!(tw_merge("px-2 py-1 p-4 hover:bg-red-500"), "p-4 hover:bg-red-500");
//! ```
//!
//! [`TwMerge`] owns a configured engine. Build one from [`Config`] to change
//! the taxonomy, the separator or the prefix.

use std::sync::{Arc, LazyLock};

mod cache;
mod class_map;
mod config;
mod default_config;
mod error;
mod merger;
mod parse;
mod validators;


pub use config::{ClassDefinition, ClassGroup, Config, ConfigEntries, ConfigPatch};
pub use error::ConfigError;
pub use merger::ClassExplanation;
pub use validators::Validator;

use cache::MergeCache;
use merger::MergeContext;

/// A merge engine built from one [`Config`].
///
/// The class map is immutable once built and shared by [`TwMerge::fork`].
/// Each engine owns its own result cache.
pub struct TwMerge {
    context: Arc<MergeContext>,
    cache: MergeCache,
    cache_size: usize,
}

impl TwMerge {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(&config))
    }

    /// Builds an engine from the default configuration with a TOML patch applied.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Self::new(Config::from_toml_str(toml_str)?)
    }

    fn build(config: &Config) -> Self {
        Self {
            context: Arc::new(MergeContext::new(config)),
            cache: MergeCache::new(config.cache_size),
            cache_size: config.cache_size,
        }
    }

    /// Joins `classes` with single spaces and merges the result.
    pub fn merge<I, S>(&self, classes: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut input = String::new();
        for class in classes {
            if !input.is_empty() {
                input.push(' ');
            }
            input.push_str(class.as_ref());
        }

        if input.trim().is_empty() {
            return String::new();
        }
        if let Some(merged) = self.cache.get(&input) {
            return merged;
        }
        let merged = self.context.merge(&input);
        self.cache.put(input, merged.clone());
        merged
    }

    /// Describes how a single class token is parsed and classified.
    pub fn explain(&self, class: &str) -> ClassExplanation {
        self.context.explain(class)
    }

    /// A new engine over the same class map with an empty cache of its own.
    pub fn fork(&self) -> Self {
        Self {
            context: Arc::clone(&self.context),
            cache: MergeCache::new(self.cache_size),
            cache_size: self.cache_size,
        }
    }
}

impl Default for TwMerge {
    fn default() -> Self {
        Self::build(&Config::default())
    }
}

static DEFAULT_MERGE: LazyLock<TwMerge> = LazyLock::new(TwMerge::default);

/// Merges a class list with the default Tailwind CSS v4 configuration.
pub fn tw_merge(input: &str) -> String {
    DEFAULT_MERGE.merge([input])
}
