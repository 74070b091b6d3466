//! Rendering the full scaffold to disk.

use tracing::warn;

use crate::artifact::OutputTree;
use crate::context::{CodeGenerationContext, FileLocation, Scaffold, TestsGenerationContext};
use crate::error::DittoError;
use crate::fs::FileSystem;

use super::TemplateRegistry;

/// What one run actually did: which destinations were written and which were
/// left alone because a file was already there.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub written: Vec<FileLocation>,
    pub skipped: Vec<FileLocation>,
}

/// Render every artifact into its destination.
///
/// Production kinds bind the full [`CodeGenerationContext`], test kinds the
/// [`TestsGenerationContext`]. Parent directories are created as needed. An
/// existing destination is skipped with a warning and recorded in the
/// report; every other failure aborts the run, leaving previously written
/// files on disk.
pub fn render_all(
    fs: &dyn FileSystem,
    templates: &TemplateRegistry,
    scaffold: &Scaffold,
    code: &CodeGenerationContext,
    tests: &TestsGenerationContext,
) -> Result<RenderReport, DittoError> {
    let mut report = RenderReport::default();

    for (kind, destination) in scaffold.iter() {
        fs.create_dir_all(destination.parent_dir()).map_err(|e| {
            DittoError::io(
                format!("creating directory `{}`", destination.parent_dir().display()),
                e,
            )
        })?;

        let target = destination.path();
        if fs.exists(&target) {
            warn!(
                file = %target.display(),
                "skipping generation of file because it already exists"
            );
            report.skipped.push(destination.clone());
            continue;
        }

        let rendered = match kind.tree() {
            OutputTree::Code => templates.render(kind, code)?,
            OutputTree::Tests => templates.render(kind, tests)?,
        };
        fs.write(&target, &rendered)
            .map_err(|e| DittoError::io(format!("writing `{}`", target.display()), e))?;
        report.written.push(destination.clone());
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::artifact::ArtifactKind;
    use crate::context::{AnnotationContext, ClassContext, ControllerMethodContext, InputContext};
    use crate::conventions::{Conventions, Derivation, OutputLayout, derive};
    use crate::fs::MemoryFileSystem;
    use crate::template::template_location;

    fn seed_all_templates(fs: &MemoryFileSystem, root: &Path) {
        for kind in ArtifactKind::ALL {
            fs.seed(
                template_location(root, kind).path(),
                format!("// {}\n", kind.template_file_name()),
            );
        }
    }

    fn derivation() -> Derivation {
        let mut params = BTreeMap::new();
        params.insert("value".to_string(), "/orders".to_string());
        let input = InputContext {
            controller_file_location: crate::context::FileLocation::new(
                "/in",
                "OrderController.java",
            ),
            controller_interface: ClassContext::new("com.acme.api", "OrderController"),
            method: ControllerMethodContext::new(
                "createOrder",
                ClassContext::new("com.acme.api.model", "CreateOrderRequest"),
                ClassContext::new("com.acme.api.model", "CreateOrderResponse"),
                AnnotationContext::new(
                    "org.springframework.web.bind.annotation",
                    "RequestMapping",
                    params,
                ),
            ),
        };
        let layout = OutputLayout {
            root_package: "com.acme.out".to_string(),
            code_output_root: PathBuf::from("/out/src/main/java/com/acme/out"),
            tests_output_root: PathBuf::from("/out/src/test/java/com/acme/out"),
        };
        derive(&input, &layout, &Conventions::standard())
    }

    #[test]
    fn test_renders_every_artifact_once() {
        let fs = MemoryFileSystem::new();
        let root = Path::new("/templates");
        seed_all_templates(&fs, root);
        let templates = TemplateRegistry::load(&fs, root).unwrap();
        let derivation = derivation();

        let report = render_all(
            &fs,
            &templates,
            &derivation.scaffold,
            &derivation.code,
            &derivation.tests,
        )
        .unwrap();

        assert_eq!(report.written.len(), 21);
        assert!(report.skipped.is_empty());
        let controller = PathBuf::from(
            "/out/src/main/java/com/acme/out/webexchange/OrderController.java",
        );
        assert_eq!(fs.contents(&controller).unwrap(), "// controller.ditto\n");
    }

    #[test]
    fn test_second_run_skips_existing_files_and_keeps_contents() {
        let fs = MemoryFileSystem::new();
        let root = Path::new("/templates");
        seed_all_templates(&fs, root);
        let templates = TemplateRegistry::load(&fs, root).unwrap();
        let derivation = derivation();

        render_all(
            &fs,
            &templates,
            &derivation.scaffold,
            &derivation.code,
            &derivation.tests,
        )
        .unwrap();

        // Overwrite one generated file by hand; the second run must not
        // touch it.
        let controller = PathBuf::from(
            "/out/src/main/java/com/acme/out/webexchange/OrderController.java",
        );
        fs.seed(&controller, "edited by hand");

        let second = render_all(
            &fs,
            &templates,
            &derivation.scaffold,
            &derivation.code,
            &derivation.tests,
        )
        .unwrap();

        assert!(second.written.is_empty());
        assert_eq!(second.skipped.len(), 21);
        assert_eq!(fs.contents(&controller).unwrap(), "edited by hand");
    }

    #[test]
    fn test_production_and_test_kinds_bind_their_own_context() {
        let fs = MemoryFileSystem::new();
        let root = Path::new("/templates");
        seed_all_templates(&fs, root);
        fs.seed(
            template_location(root, ArtifactKind::Controller).path(),
            "{{controller.className}}",
        );
        fs.seed(
            template_location(root, ArtifactKind::ControllerTest).path(),
            "{{controllerTest.className}} covers {{codeOutput.controller.className}}",
        );
        let templates = TemplateRegistry::load(&fs, root).unwrap();
        let derivation = derivation();

        render_all(
            &fs,
            &templates,
            &derivation.scaffold,
            &derivation.code,
            &derivation.tests,
        )
        .unwrap();

        let controller = PathBuf::from(
            "/out/src/main/java/com/acme/out/webexchange/OrderController.java",
        );
        assert_eq!(fs.contents(&controller).unwrap(), "OrderController");

        let test = PathBuf::from(
            "/out/src/test/java/com/acme/out/webexchange/OrderControllerTest.java",
        );
        assert_eq!(
            fs.contents(&test).unwrap(),
            "OrderControllerTest covers OrderController"
        );
    }
}
