//! Immutable context records flowing through the pipeline.
//!
//! Everything here is created once during extraction or derivation and then
//! only read. The generation contexts serialize with the camelCase names the
//! templates reference (`className`, `argName`, `requestMappingUrl`, ...).

mod code;
mod input;
mod output;
mod scaffold;

pub use code::{
    AnnotationContext, ClassContext, ControllerMethodContext, FileLocation, MethodContext,
};
pub use input::InputContext;
pub use output::{CodeGenerationContext, TestsGenerationContext};
pub use scaffold::Scaffold;
