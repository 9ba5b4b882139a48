//! Product families built on the keyed constructor registry.
//!
//! Three families share the registry core, each behind one capability trait:
//!
//! | Family  | Tags                                         | Capability          |
//! |---------|----------------------------------------------|---------------------|
//! | shape   | `Circle`, `Rectangle`, `Triangle`, `Ellipse` | `area(&Dimensions)` |
//! | payment | `yu_e_bao`, `zhifubao`, `Wechat`             | `pay(amount)`       |
//! | color   | `Red`, `Blue`, `Black`                       | `color(label)`      |
//!
//! Each family exposes a process-wide registry accessor ([`shapes`],
//! [`payments`], [`colors`]); the two-level producer in [`family`] maps a
//! family tag to its registry handle, so callers can resolve
//! `family -> variant` in two steps with the same tables and the same error
//! behavior as the single-level accessors.
//!
//! # Re-exports
//!
//! The registry core types [`Registry`] and [`UnknownVariant`] are
//! re-exported from `fab_registry` for convenience.

pub mod color;
pub mod family;
pub mod payment;
pub mod shape;

pub use fab_registry::{Registry, UnknownVariant};

pub use color::{colors, Black, Blue, Color, ColorRegistry, Red};
pub use family::{families, FamilyFactory};
pub use payment::{payments, AliPay, Channel, Payment, PaymentRegistry, Receipt, WeChat};
pub use shape::{
    shapes, Circle, DimensionMismatch, Dimensions, Ellipse, Rectangle, Shape, ShapeRegistry,
    Triangle,
};
