//! Generic tag -> constructor table.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::UnknownVariant;

/// Immutable-after-build mapping from variant tag to constructor.
///
/// `P` is the product type a family hands out, typically a boxed trait
/// object such as `Box<dyn Shape>`. Constructors are plain function
/// pointers, so a registry never captures state and every `create` call
/// yields a fresh, independent product.
pub struct Registry<P> {
    /// Family label used in error messages (e.g. `"shape"`).
    family: &'static str,
    /// Tag -> constructor (`FxHashMap` for fast lookup).
    constructors: FxHashMap<&'static str, fn() -> P>,
    /// Sorted tags for deterministic iteration and error output.
    tags: Vec<&'static str>,
}

impl<P> Registry<P> {
    /// Create an empty registry for the given family.
    pub fn new(family: &'static str) -> Self {
        Registry {
            family,
            constructors: FxHashMap::default(),
            tags: Vec::new(),
        }
    }

    /// Register a constructor for a tag.
    ///
    /// Registering the same tag twice replaces the earlier constructor, so
    /// every tag maps to exactly one constructible variant.
    pub fn register(&mut self, tag: &'static str, ctor: fn() -> P) {
        if self.constructors.insert(tag, ctor).is_none() {
            if let Err(pos) = self.tags.binary_search(&tag) {
                self.tags.insert(pos, tag);
            }
        }
    }

    /// Look up a tag and construct a fresh product.
    ///
    /// Unknown tags fail explicitly with [`UnknownVariant`]; the registry
    /// never returns a partial or absent value.
    pub fn create(&self, tag: &str) -> Result<P, UnknownVariant> {
        match self.constructors.get(tag) {
            Some(ctor) => {
                tracing::debug!(family = self.family, tag, "constructing variant");
                Ok(ctor())
            }
            None => Err(UnknownVariant::new(self.family, tag, &self.tags)),
        }
    }

    /// Check whether a tag is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// All supported tags, sorted.
    pub fn tags(&self) -> &[&'static str] {
        &self.tags
    }

    /// The family label this registry reports in errors.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether the registry has no tags.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl<P> fmt::Debug for Registry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("family", &self.family)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
