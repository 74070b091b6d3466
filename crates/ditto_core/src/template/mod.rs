//! Template loading and rendering.

mod registry;
mod renderer;

pub use registry::{TemplateRegistry, template_location};
pub use renderer::{RenderReport, render_all};
