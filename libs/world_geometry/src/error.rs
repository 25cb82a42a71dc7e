//! World geometry error types.

use geometry::dir::Dir;

/// A `Result` whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from checked splitting and from loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A shape is wider than the world along a wrapping axis.
    #[error("extent {extent} along {dir} exceeds the world size {size}")]
    ExtentExceedsWorld {
        /// The axis along which the shape is too wide.
        dir: Dir,
        /// The extent of the shape.
        extent: f64,
        /// The world size along `dir`.
        size: u32,
    },
    /// The configuration is not valid TOML, or is not shaped like a world.
    #[error(transparent)]
    Config(#[from] toml::de::Error),
}
