mod params;
mod path;

pub use path::Matcher;
