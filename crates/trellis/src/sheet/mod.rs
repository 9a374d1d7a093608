//! Stylesheets and media queries.

mod media;
mod stylesheet;

pub use media::MediaQuery;
pub use stylesheet::{StyleId, StyleSheet};
