//! The end-to-end generation run.
//!
//! Sequential and synchronous: extraction, derivation, template loading,
//! rendering. Each stage must finish before the next starts; any failure
//! aborts the run immediately, and files already written stay on disk.

use std::path::PathBuf;

use tracing::info;

use crate::conventions::{Conventions, OutputLayout, derive};
use crate::error::DittoError;
use crate::fs::FileSystem;
use crate::parser;
use crate::template::{RenderReport, TemplateRegistry, render_all};

/// Prefix of the production source tree under the output root.
pub const CODE_SOURCES_ROOT: &str = "src/main/java";
/// Prefix of the test source tree under the output root.
pub const TESTS_SOURCES_ROOT: &str = "src/test/java";

/// Resolved inputs of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub template_root: PathBuf,
    pub controller_interface_path: PathBuf,
    pub output_root: PathBuf,
    pub root_package: String,
}

/// Dotted package name as a relative directory path.
pub fn package_to_path(dotted: &str) -> PathBuf {
    dotted.split('.').collect()
}

/// Run the whole pipeline.
pub fn run(fs: &dyn FileSystem, config: &GenerationConfig) -> Result<RenderReport, DittoError> {
    info!("Creating context.");
    let input = parser::extract_controller_interface(fs, &config.controller_interface_path)?;

    let package_path = package_to_path(&config.root_package);
    let layout = OutputLayout {
        root_package: config.root_package.clone(),
        code_output_root: config
            .output_root
            .join(CODE_SOURCES_ROOT)
            .join(&package_path),
        tests_output_root: config
            .output_root
            .join(TESTS_SOURCES_ROOT)
            .join(&package_path),
    };
    let derivation = derive(&input, &layout, &Conventions::standard());

    info!("Reading templates.");
    let templates = TemplateRegistry::load(fs, &config.template_root)?;

    info!("Transforming templates.");
    let report = render_all(
        fs,
        &templates,
        &derivation.scaffold,
        &derivation.code,
        &derivation.tests,
    )?;
    info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        "Transformation done."
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::artifact::ArtifactKind;
    use crate::fs::OsFileSystem;
    use crate::template::template_location;

    const CONTROLLER_SOURCE: &str = r#"
package com.acme.orders.api;

import com.acme.orders.api.model.CreateOrderRequest;
import com.acme.orders.api.model.CreateOrderResponse;
import org.springframework.http.ResponseEntity;
import org.springframework.web.bind.annotation.RequestMapping;
import org.springframework.web.bind.annotation.RequestMethod;

public interface OrderController {

  @RequestMapping(value = "/orders", method = RequestMethod.POST)
  ResponseEntity<CreateOrderResponse> createOrder(CreateOrderRequest createOrderRequest);

}
"#;

    fn write_template_set(root: &Path) {
        for kind in ArtifactKind::ALL {
            let location = template_location(root, kind);
            std::fs::create_dir_all(location.parent_dir()).unwrap();
            std::fs::write(
                location.path(),
                "package {{controller.packageName}};\n// route {{controllerInterfaceMethod.requestMappingUrl}}\n",
            )
            .unwrap();
        }
    }

    fn test_config(dir: &Path) -> GenerationConfig {
        GenerationConfig {
            template_root: dir.join("templates"),
            controller_interface_path: dir.join("OrderController.java"),
            output_root: dir.join("out"),
            root_package: "com.acme.out".to_string(),
        }
    }

    #[test]
    fn test_package_to_path() {
        assert_eq!(
            package_to_path("com.acme.out"),
            PathBuf::from("com/acme/out")
        );
    }

    #[test]
    fn test_full_run_writes_both_trees() {
        let dir = tempfile::TempDir::new().unwrap();
        write_template_set(&dir.path().join("templates"));
        std::fs::write(dir.path().join("OrderController.java"), CONTROLLER_SOURCE).unwrap();
        let config = test_config(dir.path());

        let report = run(&OsFileSystem, &config).unwrap();
        assert_eq!(report.written.len(), 21);
        assert!(report.skipped.is_empty());

        let controller = dir
            .path()
            .join("out/src/main/java/com/acme/out/webexchange/OrderController.java");
        let contents = std::fs::read_to_string(&controller).unwrap();
        assert_eq!(
            contents,
            "package com.acme.out.webexchange;\n// route /orders\n"
        );

        let factory = dir
            .path()
            .join("out/src/test/java/com/acme/out/OrderControllerTestDataFactory.java");
        assert!(factory.exists());
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let dir = tempfile::TempDir::new().unwrap();
        write_template_set(&dir.path().join("templates"));
        std::fs::write(dir.path().join("OrderController.java"), CONTROLLER_SOURCE).unwrap();
        let config = test_config(dir.path());

        run(&OsFileSystem, &config).unwrap();
        let second = run(&OsFileSystem, &config).unwrap();

        assert!(second.written.is_empty());
        assert_eq!(second.skipped.len(), 21);
    }

    #[test]
    fn test_parse_failure_writes_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        write_template_set(&dir.path().join("templates"));
        std::fs::write(
            dir.path().join("OrderController.java"),
            "package com.acme;\npublic interface Empty { String ping(String name); }\n",
        )
        .unwrap();
        let config = test_config(dir.path());

        let err = run(&OsFileSystem, &config).unwrap_err();
        assert!(matches!(err, DittoError::SourceParse { .. }));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_missing_template_aborts_before_rendering() {
        let dir = tempfile::TempDir::new().unwrap();
        let templates = dir.path().join("templates");
        write_template_set(&templates);
        std::fs::remove_file(template_location(&templates, ArtifactKind::PqlExchange).path())
            .unwrap();
        std::fs::write(dir.path().join("OrderController.java"), CONTROLLER_SOURCE).unwrap();
        let config = test_config(dir.path());

        let err = run(&OsFileSystem, &config).unwrap_err();
        assert!(matches!(err, DittoError::Io { .. }));
        assert!(!dir.path().join("out").exists());
    }
}
