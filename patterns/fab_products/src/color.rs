//! Color family: variant tag -> color, echoing a presentation label.
//!
//! Colors carry no computation of their own; the family exists to show a
//! second product line behind the same two-level producer as shapes.

use std::sync::OnceLock;

use fab_registry::Registry;

/// A product of the color family: one label echo.
pub trait Color {
    /// The variant tag this color is registered under.
    fn tag(&self) -> &'static str;

    /// Echo the presentation label.
    fn color(&self, label: &str) -> String;
}

/// Red.
#[derive(Clone, Copy, Debug, Default)]
pub struct Red;

impl Color for Red {
    fn tag(&self) -> &'static str {
        "Red"
    }

    fn color(&self, label: &str) -> String {
        label.to_owned()
    }
}

/// Blue.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blue;

impl Color for Blue {
    fn tag(&self) -> &'static str {
        "Blue"
    }

    fn color(&self, label: &str) -> String {
        label.to_owned()
    }
}

/// Black.
#[derive(Clone, Copy, Debug, Default)]
pub struct Black;

impl Color for Black {
    fn tag(&self) -> &'static str {
        "Black"
    }

    fn color(&self, label: &str) -> String {
        label.to_owned()
    }
}

/// Registry of the color family.
pub type ColorRegistry = Registry<Box<dyn Color>>;

static COLORS: OnceLock<ColorRegistry> = OnceLock::new();

/// The process-wide color registry with all variants registered.
pub fn colors() -> &'static ColorRegistry {
    COLORS.get_or_init(|| {
        let mut reg: ColorRegistry = Registry::new("color");
        reg.register("Red", || Box::new(Red));
        reg.register("Blue", || Box::new(Blue));
        reg.register("Black", || Box::new(Black));
        reg
    })
}
