//! Core abstractions for definition processing
//!
//! Shared types, the traits every stage implements, field validators, error
//! types and logging setup.

mod database;
mod definition;
mod error;
pub mod logging;
mod messages;
mod model;
mod paper;
mod parser;
mod sanitize;
mod style;
mod types;
pub mod validate;
mod view;

pub use database::*;
pub use definition::*;
pub use error::*;
pub use logging::*;
pub use messages::*;
pub use model::*;
pub use paper::*;
pub use parser::*;
pub use sanitize::*;
pub use style::*;
pub use types::*;
pub use view::*;
