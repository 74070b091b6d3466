//! Loading and compiling the fixed template set.

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;

use crate::artifact::ArtifactKind;
use crate::context::FileLocation;
use crate::error::DittoError;
use crate::fs::FileSystem;

/// Where a kind's template lives under the template root:
/// `<root>/code/<name>.ditto` for production kinds, `<root>/tests/<name>.ditto`
/// for test kinds.
pub fn template_location(template_root: &Path, kind: ArtifactKind) -> FileLocation {
    FileLocation::new(
        template_root.join(kind.template_subfolder()),
        kind.template_file_name(),
    )
}

/// The compiled template set: one template per artifact kind, built in a
/// single pass and immutable afterwards.
///
/// Templates render with raw substitution (no HTML escaping) — the output is
/// source code, not markup.
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Read and compile all 21 templates from `template_root`. Fails on the
    /// first missing or unreadable file.
    pub fn load(fs: &dyn FileSystem, template_root: &Path) -> Result<Self, DittoError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        let mut registry = Self { handlebars };
        for kind in ArtifactKind::ALL {
            registry.register(fs, template_root, kind)?;
        }
        Ok(registry)
    }

    /// Compile one kind's template. First successful compile wins; a second
    /// registration for the same kind is a no-op.
    fn register(
        &mut self,
        fs: &dyn FileSystem,
        template_root: &Path,
        kind: ArtifactKind,
    ) -> Result<(), DittoError> {
        let name = kind.template_file_name();
        if self.handlebars.has_template(name) {
            return Ok(());
        }

        let location = template_location(template_root, kind);
        let source = fs
            .read_to_string(&location.path())
            .map_err(|e| DittoError::io(format!("reading template `{}`", location.path().display()), e))?;
        self.handlebars
            .register_template_string(name, source)
            .map_err(|e| DittoError::Template {
                name: name.to_string(),
                source: Box::new(e),
            })?;
        Ok(())
    }

    /// Render one kind's template against a context value.
    pub fn render<T: Serialize>(&self, kind: ArtifactKind, context: &T) -> Result<String, DittoError> {
        let name = kind.template_file_name();
        self.handlebars
            .render(name, context)
            .map_err(|e| DittoError::Render {
                name: name.to_string(),
                source: Box::new(e),
            })
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry").finish_non_exhaustive()
    }
}
