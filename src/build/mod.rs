//! Descriptor builders.
//!
//! Each builder turns a parsed record into the typed descriptor tree of one
//! transformation. Builders are pure and infallible.

mod product;
mod story;
mod testimonial;
mod visualization;

pub use product::{build_product_demo, premium_price};
pub use story::{build_story, quiz_for};
pub use testimonial::{avatar_url, build_testimonial_story};
pub use visualization::{build_visualization, DEFAULT_PALETTE};
