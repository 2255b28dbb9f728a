use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("the deploy root {0:?} does not exist, generate the site first")]
    MissingDeployRoot(PathBuf),

    #[error("cannot find the publisher configuration: {}", .0.as_deref().unwrap_or("<default>"))]
    NoPublisher(Option<String>),

    #[error("publisher type not specified: {0}")]
    MissingType(String),

    #[error("no publisher of type `{0}` is registered")]
    UnknownType(String),
}
