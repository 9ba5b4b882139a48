//! Keyed constructor registry.
//!
//! A registry is a pure mapping from a variant tag (a string discriminator
//! such as `"Circle"` or `"yu_e_bao"`) to a constructor for the matching
//! product. It is the one generalizable piece shared by the simple-factory,
//! factory-method, and abstract-factory flavors of object creation: every
//! flavor reduces to "look up a tag, construct a product".
//!
//! # Architecture
//!
//! ```text
//! Registry<P> (tag -> fn() -> P)
//!     └── create(tag) -> Result<P, UnknownVariant>
//! ```
//!
//! Registries are built once during static initialization and never mutated
//! afterwards, so concurrent readers need no locking. Lookups that miss fail
//! explicitly with [`UnknownVariant`]; a registry never hands out a partial
//! or absent product.

mod error;
mod registry;

pub use error::UnknownVariant;
pub use registry::Registry;

#[cfg(test)]
mod tests;
