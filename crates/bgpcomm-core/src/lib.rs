pub mod community;
pub mod error;
pub mod labels;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_util;

pub use community::CommunityPath;
pub use error::{CoreError, NotFound};
pub use registry::{CommunityTree, FlatRegistry, Node};
