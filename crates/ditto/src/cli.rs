//! Command line surface.
//!
//! Flag names keep the original tool's long spellings; the historical short
//! forms ride along as aliases (`--trf`, `--ci`, `--orf`, `--opn`).

use std::path::PathBuf;

use clap::Parser;
use ditto_core::{DittoError, GenerationConfig};

const USAGE: &str = "\
ditto \\
  --templateRootFolder /absolute/path/to/templates \\
  --controllerInterfaceAbsolutePath /absolute/path/to/controller/interface.java \\
  --outputRootFolderAbsolutePath /absolute/path/to/output \\
  --outputPackageQualifiedName your.destination.package.name";

#[derive(Debug, Parser)]
#[command(name = "ditto", version, about = "Scaffold a layered web endpoint from one annotated controller interface", after_help = USAGE)]
pub struct Cli {
    /// Absolute file system path to the root folder where your ditto templates are.
    #[arg(long = "templateRootFolder", visible_alias = "trf", value_name = "PATH")]
    pub template_root_folder: String,

    /// Absolute file system path to the controller interface java file.
    #[arg(
        long = "controllerInterfaceAbsolutePath",
        visible_alias = "ci",
        value_name = "PATH"
    )]
    pub controller_interface_absolute_path: String,

    /// Absolute file system path to the output folder where the output files are generated.
    #[arg(
        long = "outputRootFolderAbsolutePath",
        visible_alias = "orf",
        value_name = "PATH"
    )]
    pub output_root_folder_absolute_path: String,

    /// Qualified name of the output package (eg. com.acme.ditto.out).
    #[arg(
        long = "outputPackageQualifiedName",
        visible_alias = "opn",
        value_name = "PACKAGE"
    )]
    pub output_package_qualified_name: String,
}

impl Cli {
    /// Validate and convert the raw arguments into a pipeline config.
    pub fn into_config(self) -> Result<GenerationConfig, DittoError> {
        let template_root = required_value("templateRootFolder", &self.template_root_folder)?;
        let controller_interface = required_value(
            "controllerInterfaceAbsolutePath",
            &self.controller_interface_absolute_path,
        )?;
        let output_root = required_value(
            "outputRootFolderAbsolutePath",
            &self.output_root_folder_absolute_path,
        )?;
        let root_package = required_value(
            "outputPackageQualifiedName",
            &self.output_package_qualified_name,
        )?;

        Ok(GenerationConfig {
            template_root: PathBuf::from(template_root),
            controller_interface_path: PathBuf::from(controller_interface),
            output_root: PathBuf::from(output_root),
            root_package,
        })
    }
}

fn required_value(option: &str, raw: &str) -> Result<String, DittoError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DittoError::Configuration(format!(
            "blank value provided for option `--{option}`"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_long_flags_parse() {
        let cli = parse(&[
            "ditto",
            "--templateRootFolder",
            "/templates",
            "--controllerInterfaceAbsolutePath",
            "/in/OrderController.java",
            "--outputRootFolderAbsolutePath",
            "/out",
            "--outputPackageQualifiedName",
            "com.acme.out",
        ]);
        let config = cli.into_config().unwrap();
        assert_eq!(config.template_root, PathBuf::from("/templates"));
        assert_eq!(config.root_package, "com.acme.out");
    }

    #[test]
    fn test_short_aliases_parse() {
        let cli = parse(&[
            "ditto",
            "--trf",
            "/templates",
            "--ci",
            "/in/OrderController.java",
            "--orf",
            "/out",
            "--opn",
            "com.acme.out",
        ]);
        assert_eq!(cli.output_package_qualified_name, "com.acme.out");
    }

    #[test]
    fn test_missing_required_flag_is_a_usage_error() {
        let result = Cli::try_parse_from(["ditto", "--trf", "/templates"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_value_is_a_configuration_error() {
        let cli = parse(&[
            "ditto",
            "--trf",
            "   ",
            "--ci",
            "/in/OrderController.java",
            "--orf",
            "/out",
            "--opn",
            "com.acme.out",
        ]);
        let err = cli.into_config().unwrap_err();
        assert!(matches!(err, DittoError::Configuration(_)));
        assert!(err.to_string().contains("templateRootFolder"));
    }

    #[test]
    fn test_values_are_trimmed() {
        let cli = parse(&[
            "ditto",
            "--trf",
            " /templates ",
            "--ci",
            "/in/OrderController.java",
            "--orf",
            "/out",
            "--opn",
            " com.acme.out ",
        ]);
        let config = cli.into_config().unwrap();
        assert_eq!(config.template_root, PathBuf::from("/templates"));
        assert_eq!(config.root_package, "com.acme.out");
    }
}
