#![deny(clippy::all)]

/**
 * GoMock source generator
 *
 * Turns a resolved description of Go interfaces into the source of a
 * GoMock-compatible mock package
 */

// Model and configuration
pub mod config;
pub mod error;
pub mod model;

// Naming
pub mod identifier;
pub mod imports;

// Rendering
pub mod signature;
pub mod types;
pub mod util;

// Emission
pub mod format;
pub mod generator;
pub mod output;

// Re-exports
pub use config::{parse_mock_names, GeneratorOptions, Source};
pub use error::{MockgenError, Result};
pub use format::{IdentityFormatter, SourceFormatter};
pub use generator::{generate, Generator};
pub use model::{ChanDir, Field, FuncType, Interface, Method, Package, Parameter, Type};
