//! ditto core — turns one annotated controller interface method into a full
//! layered scaffold.
//!
//! The pipeline has four sequential stages:
//!
//! 1. [`parser`] extracts the qualifying method signature from the
//!    controller interface source.
//! 2. [`conventions`] derives every artifact's class identity and
//!    destination path from that one signature.
//! 3. [`template`] loads and compiles one template per artifact kind.
//! 4. [`template::render_all`] binds each template to the shared generation
//!    context and writes each destination exactly once.
//!
//! [`pipeline::run`] wires the stages together; the `ditto` binary is a thin
//! CLI wrapper around it.

pub mod artifact;
pub mod context;
pub mod conventions;
pub mod error;
pub mod fs;
pub mod parser;
pub mod pipeline;
pub mod template;

pub use artifact::{ArtifactKind, OutputTree};
pub use error::{DittoError, Result, SourceParseError};
pub use pipeline::{GenerationConfig, run};
pub use template::RenderReport;
