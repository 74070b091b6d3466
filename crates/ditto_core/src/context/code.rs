//! Building blocks shared by every context: class identities, methods,
//! annotations and file locations.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Identity of one Java class: its declaring package and simple name.
///
/// `argName` (the simple name with its first character lower-cased) is
/// computed on construction so templates can use it for fields and
/// parameters without string helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassContext {
    package_name: String,
    class_name: String,
    arg_name: String,
}

impl ClassContext {
    pub fn new(package_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        let arg_name = lower_first(&class_name);
        Self {
            package_name: package_name.into(),
            class_name,
            arg_name,
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn arg_name(&self) -> &str {
        &self.arg_name
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().collect::<String>() + chars.as_str()
    })
}

/// A method-level annotation: its declaring package, name and key/value
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationContext {
    package_name: String,
    class_name: String,
    params: BTreeMap<String, String>,
}

impl AnnotationContext {
    pub fn new(
        package_name: impl Into<String>,
        class_name: impl Into<String>,
        params: BTreeMap<String, String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
            params,
        }
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }
}

/// The qualifying controller interface method: name, single input type, the
/// type wrapped by `ResponseEntity`, and the route annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerMethodContext {
    name: String,
    input_type: ClassContext,
    output_type: ClassContext,
    request_mapping_annotation: AnnotationContext,
    request_mapping_url: String,
}

impl ControllerMethodContext {
    pub fn new(
        name: impl Into<String>,
        input_type: ClassContext,
        output_type: ClassContext,
        request_mapping_annotation: AnnotationContext,
    ) -> Self {
        // The `value` parameter is the route path; absent means empty, not a
        // render-time failure.
        let request_mapping_url = request_mapping_annotation
            .params()
            .get("value")
            .cloned()
            .unwrap_or_default();
        Self {
            name: name.into(),
            input_type,
            output_type,
            request_mapping_annotation,
            request_mapping_url,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_type(&self) -> &ClassContext {
        &self.input_type
    }

    pub fn output_type(&self) -> &ClassContext {
        &self.output_type
    }

    pub fn request_mapping_annotation(&self) -> &AnnotationContext {
        &self.request_mapping_annotation
    }

    pub fn request_mapping_url(&self) -> &str {
        &self.request_mapping_url
    }
}

/// A derived method on a generated class, e.g. the service method the
/// controller delegates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodContext {
    pub name: String,
    pub input_type: ClassContext,
    pub output_type: ClassContext,
}

/// Where a file lives: parent directory plus file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocation {
    parent_dir: PathBuf,
    file_name: String,
}

impl FileLocation {
    pub fn new(parent_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            parent_dir: parent_dir.into(),
            file_name: file_name.into(),
        }
    }

    pub fn parent_dir(&self) -> &Path {
        &self.parent_dir
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path of the file.
    pub fn path(&self) -> PathBuf {
        self.parent_dir.join(&self.file_name)
    }
}
