//! Signature extraction from one annotated controller interface.
//!
//! # Qualifying-method rule
//!
//! A method qualifies when it returns `ResponseEntity` with exactly one type
//! argument and takes exactly one parameter. The first qualifying method in
//! source order is selected; later matches are silently ignored.
//!
//! # Import resolution
//!
//! The input and output types' packages are resolved against the file's
//! import list through [`TypeResolver`]: first import whose text contains the
//! simple name wins.

mod java;
mod resolver;

pub use resolver::{ImportTypeResolver, TypeResolver};

use std::collections::BTreeMap;
use std::path::Path;

use tree_sitter::Node;

use crate::context::{AnnotationContext, ClassContext, ControllerMethodContext, FileLocation, InputContext};
use crate::error::{DittoError, SourceParseError};
use crate::fs::FileSystem;

const RESPONSE_WRAPPER_TYPE: &str = "ResponseEntity";
const ROUTE_ANNOTATION: &str = "RequestMapping";
const ROUTE_ANNOTATION_PACKAGE: &str = "org.springframework.web.bind.annotation";

/// Read and parse the controller interface at `source_path`.
pub fn extract_controller_interface(
    fs: &dyn FileSystem,
    source_path: &Path,
) -> Result<InputContext, DittoError> {
    let source = fs.read_to_string(source_path).map_err(|e| {
        DittoError::io(
            format!("reading controller interface `{}`", source_path.display()),
            e,
        )
    })?;

    extract_from_source(&source, source_path).map_err(|e| DittoError::SourceParse {
        path: source_path.to_path_buf(),
        source: e,
    })
}

fn extract_from_source(source: &str, source_path: &Path) -> Result<InputContext, SourceParseError> {
    let tree = java::parse(source)?;
    let root = tree.root_node();

    let package_name =
        package_declaration(root, source).ok_or(SourceParseError::MissingPackageDeclaration)?;
    let type_name =
        primary_type_name(root, source).ok_or(SourceParseError::MissingPrimaryTypeName)?;
    let resolver = ImportTypeResolver::new(import_declarations(root, source));

    let mut methods = Vec::new();
    java::collect_descendants(root, "method_declaration", &mut methods);

    let method = methods
        .into_iter()
        .find(|m| is_qualifying_method(*m, source))
        .ok_or(SourceParseError::NoQualifyingMethod)?;

    let method_ctx = extract_method(method, source, &resolver)?;

    let parent_dir = source_path.parent().unwrap_or(Path::new(""));
    let file_name = source_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(InputContext {
        controller_file_location: FileLocation::new(parent_dir, file_name),
        controller_interface: ClassContext::new(package_name, type_name),
        method: method_ctx,
    })
}

fn package_declaration(root: Node<'_>, source: &str) -> Option<String> {
    let declaration = java::first_child_of_kind(root, &["package_declaration"])?;
    let name = java::first_child_of_kind(declaration, &["scoped_identifier", "identifier"])?;
    Some(java::node_text(name, source).to_string())
}

fn primary_type_name(root: Node<'_>, source: &str) -> Option<String> {
    let declaration =
        java::first_child_of_kind(root, &["interface_declaration", "class_declaration"])?;
    let name = declaration.child_by_field_name("name")?;
    Some(java::node_text(name, source).to_string())
}

fn import_declarations(root: Node<'_>, source: &str) -> Vec<String> {
    let mut cursor = root.walk();
    root.children(&mut cursor)
        .filter(|child| child.kind() == "import_declaration")
        .filter_map(|import| {
            java::first_child_of_kind(import, &["scoped_identifier", "identifier"])
                .map(|name| java::node_text(name, source).to_string())
        })
        .collect()
}

fn is_qualifying_method(method: Node<'_>, source: &str) -> bool {
    response_entity_payload(method, source).is_some() && single_parameter(method).is_some()
}

/// The single type argument of a `ResponseEntity<T>` return type.
fn response_entity_payload<'t>(method: Node<'t>, source: &str) -> Option<Node<'t>> {
    let return_type = method.child_by_field_name("type")?;
    if return_type.kind() != "generic_type" {
        return None;
    }
    let wrapper = java::first_child_of_kind(return_type, &["type_identifier"])?;
    if java::node_text(wrapper, source) != RESPONSE_WRAPPER_TYPE {
        return None;
    }
    let type_arguments = java::first_child_of_kind(return_type, &["type_arguments"])?;
    let mut cursor = type_arguments.walk();
    let arguments: Vec<Node<'t>> = type_arguments.named_children(&mut cursor).collect();
    if arguments.len() == 1 {
        Some(arguments[0])
    } else {
        None
    }
}

fn single_parameter<'t>(method: Node<'t>) -> Option<Node<'t>> {
    let parameters = method.child_by_field_name("parameters")?;
    let formal = java::named_children_of_kind(parameters, "formal_parameter");
    if formal.len() == 1 {
        Some(formal[0])
    } else {
        None
    }
}

fn type_simple_name(type_node: Node<'_>, source: &str) -> String {
    if type_node.kind() == "generic_type" {
        java::first_child_of_kind(type_node, &["type_identifier"])
            .map_or_else(String::new, |name| java::node_text(name, source).to_string())
    } else {
        java::node_text(type_node, source).to_string()
    }
}

fn extract_method(
    method: Node<'_>,
    source: &str,
    resolver: &dyn TypeResolver,
) -> Result<ControllerMethodContext, SourceParseError> {
    let name = method
        .child_by_field_name("name")
        .map(|n| java::node_text(n, source).to_string())
        .unwrap_or_default();

    let payload = response_entity_payload(method, source)
        .ok_or(SourceParseError::NoQualifyingMethod)?;
    let output_simple_name = type_simple_name(payload, source);

    let parameter = single_parameter(method).ok_or(SourceParseError::NoQualifyingMethod)?;
    let input_simple_name = parameter
        .child_by_field_name("type")
        .map(|t| type_simple_name(t, source))
        .unwrap_or_default();

    let input_package =
        resolver
            .resolve(&input_simple_name)
            .ok_or_else(|| SourceParseError::UnresolvedImport {
                type_name: input_simple_name.clone(),
            })?;
    let output_package =
        resolver
            .resolve(&output_simple_name)
            .ok_or_else(|| SourceParseError::UnresolvedImport {
                type_name: output_simple_name.clone(),
            })?;

    let annotation = route_annotation(method, source, &name)?;

    Ok(ControllerMethodContext::new(
        name,
        ClassContext::new(input_package, input_simple_name),
        ClassContext::new(output_package, output_simple_name),
        annotation,
    ))
}

fn route_annotation(
    method: Node<'_>,
    source: &str,
    method_name: &str,
) -> Result<AnnotationContext, SourceParseError> {
    let annotation = find_route_annotation(method, source).ok_or_else(|| {
        SourceParseError::MissingRouteAnnotation {
            method: method_name.to_string(),
        }
    })?;

    let params = annotation_params(annotation, source, method_name)?;
    Ok(AnnotationContext::new(
        ROUTE_ANNOTATION_PACKAGE,
        ROUTE_ANNOTATION,
        params,
    ))
}

fn find_route_annotation<'t>(method: Node<'t>, source: &str) -> Option<Node<'t>> {
    let modifiers = java::first_child_of_kind(method, &["modifiers"])?;
    let mut cursor = modifiers.walk();
    modifiers.children(&mut cursor).find(|child| {
        (child.kind() == "annotation" || child.kind() == "marker_annotation")
            && child
                .child_by_field_name("name")
                .is_some_and(|name| java::node_text(name, source) == ROUTE_ANNOTATION)
    })
}

fn annotation_params(
    annotation: Node<'_>,
    source: &str,
    method_name: &str,
) -> Result<BTreeMap<String, String>, SourceParseError> {
    // `@RequestMapping` without an argument list, or with a bare value
    // (`@RequestMapping("/x")`), is not the named-parameter form this tool
    // understands.
    let unsupported = || SourceParseError::UnsupportedAnnotationForm {
        method: method_name.to_string(),
    };

    let arguments = annotation
        .child_by_field_name("arguments")
        .ok_or_else(unsupported)?;

    let mut params = BTreeMap::new();
    let mut cursor = arguments.walk();
    for child in arguments.named_children(&mut cursor) {
        if child.kind() != "element_value_pair" {
            return Err(unsupported());
        }
        let key = child
            .child_by_field_name("key")
            .map(|k| java::node_text(k, source).to_string())
            .unwrap_or_default();
        let raw_value = child
            .child_by_field_name("value")
            .map(|v| java::node_text(v, source))
            .unwrap_or_default();
        params.insert(key, sanitize_annotation_param_value(raw_value));
    }
    Ok(params)
}

/// Strip wrapping quote markers from an annotation value.
///
/// Each marker is handled independently: one leading and one trailing
/// occurrence per marker, in a fixed order. Not a tokenizer; matches the
/// annotation values seen in practice (`"..."`, `'...'` and HTML-escaped
/// quotes).
fn sanitize_annotation_param_value(raw: &str) -> String {
    const QUOTE_MARKERS: [&str; 3] = ["\"", "'", "&quot;"];

    let mut clean = raw.to_string();
    for marker in QUOTE_MARKERS {
        let mut start = 0;
        let mut end = clean.len();
        if clean.starts_with(marker) {
            start = marker.len();
        }
        if clean.ends_with(marker) {
            end -= marker.len();
        }
        if start > 0 || end < clean.len() {
            clean = if start <= end {
                clean[start..end].to_string()
            } else {
                String::new()
            };
        }
    }
    clean
}
