//! Two-level producer: a registry whose products are family registries.
//!
//! The top level maps a family tag (`Shape`, `Color`) to a handle on that
//! family's registry; the handle then resolves variant tags against the
//! same table the single-level accessors use, so both paths behave
//! identically. An unknown family tag fails with the usual
//! [`UnknownVariant`](fab_registry::UnknownVariant) instead of an absent
//! value.

use std::sync::OnceLock;

use fab_registry::Registry;

use crate::color::{colors, ColorRegistry};
use crate::shape::{shapes, ShapeRegistry};

/// Handle on one product family's registry.
///
/// Callers match on the handle (or use the `as_*` accessors) to reach the
/// capability the family exposes.
#[derive(Clone, Copy, Debug)]
pub enum FamilyFactory {
    /// The shape family (`Circle`, `Rectangle`, `Triangle`, `Ellipse`).
    Shapes(&'static ShapeRegistry),
    /// The color family (`Red`, `Blue`, `Black`).
    Colors(&'static ColorRegistry),
}

impl FamilyFactory {
    /// The family tag this handle was produced for.
    pub fn family_tag(&self) -> &'static str {
        match self {
            FamilyFactory::Shapes(_) => "Shape",
            FamilyFactory::Colors(_) => "Color",
        }
    }

    /// The shape registry, if this is the shape family.
    pub fn as_shapes(&self) -> Option<&'static ShapeRegistry> {
        match *self {
            FamilyFactory::Shapes(reg) => Some(reg),
            FamilyFactory::Colors(_) => None,
        }
    }

    /// The color registry, if this is the color family.
    pub fn as_colors(&self) -> Option<&'static ColorRegistry> {
        match *self {
            FamilyFactory::Colors(reg) => Some(reg),
            FamilyFactory::Shapes(_) => None,
        }
    }
}

static FAMILIES: OnceLock<Registry<FamilyFactory>> = OnceLock::new();

/// The top-level producer mapping family tags to family registries.
pub fn families() -> &'static Registry<FamilyFactory> {
    FAMILIES.get_or_init(|| {
        let mut reg: Registry<FamilyFactory> = Registry::new("family");
        reg.register("Shape", || FamilyFactory::Shapes(shapes()));
        reg.register("Color", || FamilyFactory::Colors(colors()));
        reg
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::shape::Dimensions;

    fn family(tag: &str) -> FamilyFactory {
        match families().create(tag) {
            Ok(handle) => handle,
            Err(err) => panic!("create failed: {err}"),
        }
    }

    #[test]
    fn test_shape_handle_shares_the_shape_table() {
        let Some(reg) = family("Shape").as_shapes() else {
            panic!("expected shape handle");
        };
        assert!(std::ptr::eq(reg, shapes()));
        assert_eq!(reg.tags(), shapes().tags());
    }

    #[test]
    fn test_color_handle_shares_the_color_table() {
        let Some(reg) = family("Color").as_colors() else {
            panic!("expected color handle");
        };
        assert!(std::ptr::eq(reg, colors()));
    }

    #[test]
    fn test_handle_creates_behave_like_single_level() {
        let Some(reg) = family("Shape").as_shapes() else {
            panic!("expected shape handle");
        };
        let dims = Dimensions::radius(2.0);
        for tag in shapes().tags() {
            let via_handle = match reg.create(tag) {
                Ok(shape) => shape.area(&dims),
                Err(err) => panic!("create failed: {err}"),
            };
            let via_accessor = match shapes().create(tag) {
                Ok(shape) => shape.area(&dims),
                Err(err) => panic!("create failed: {err}"),
            };
            assert_eq!(via_handle, via_accessor);
        }
    }

    #[test]
    fn test_family_tags_and_accessors() {
        let shape_handle = family("Shape");
        assert_eq!(shape_handle.family_tag(), "Shape");
        assert!(shape_handle.as_colors().is_none());

        let color_handle = family("Color");
        assert_eq!(color_handle.family_tag(), "Color");
        assert!(color_handle.as_shapes().is_none());
    }

    #[test]
    fn test_unknown_family_tag() {
        let err = match families().create("Texture") {
            Err(err) => err,
            Ok(handle) => panic!("expected UnknownVariant, got `{}`", handle.family_tag()),
        };
        assert_eq!(err.family, "family");
        assert_eq!(err.tag, "Texture");
        assert_eq!(err.expected, vec!["Color", "Shape"]);
    }
}
