#![deny(clippy::all)]

/**
 * GoMock generator CLI
 *
 * Loads JSON package models, generates their mocks and writes the results
 */
pub mod destination;
pub mod gofmt;
pub mod model_loader;
pub mod run;
