//! What the signature extractor produces.

use super::{ClassContext, ControllerMethodContext, FileLocation};

/// The extracted controller interface: where it lives, its identity, and the
/// one qualifying method selected for generation.
///
/// Only the first qualifying method in source order is kept; any later
/// matches are dropped at extraction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputContext {
    pub controller_file_location: FileLocation,
    pub controller_interface: ClassContext,
    pub method: ControllerMethodContext,
}
