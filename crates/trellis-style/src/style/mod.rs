//! Style rules and their fluent setters.

mod args;
mod builder;
mod declarations;
mod rule;

pub use args::{Edges, Extent, Flex, Flexbox, Font, Grid, Inset, Place, Shadow, Text, Tracks, Transition, Translate};
pub use declarations::Declarations;
pub use rule::Style;
