//! Collaborator ports consumed by the loading controller

pub mod baker;
pub mod resolver;

pub use baker::DataBaker;
pub use resolver::AssetResolver;
