//! This crate publishes a generated static site to GitHub Pages
//! by handing the deploy root over to an external script.

#[macro_use]
extern crate log;

pub use configuration::Configuration;
pub use error::Error;
pub use publisher::{Generic, Plugin, Publisher, Publishers};
pub use publisher::ghpages::GhPages;
pub use site::Site;

pub mod command;
pub mod configuration;
pub mod error;
pub mod publisher;
pub mod site;

#[cfg(all(test, unix))]
mod support;

/// Errors from the generic publish step and from launching the script
/// travel through this unchanged.
pub type Result<T = ()> = ::std::result::Result<T, Box<dyn ::std::error::Error + Send + Sync>>;
