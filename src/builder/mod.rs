mod error;
mod path;

pub use error::{BuildError, BuildResult};
pub use path::PathBuilder;
