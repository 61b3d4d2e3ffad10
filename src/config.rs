//! Rendering configuration
//!
//! Defaults reproduce the classic layout: top-to-bottom ranks, orthogonal
//! edges, a PNG written to `ast_tree.png` in the working directory.

use crate::error::{Error, Result};
use crate::lexer::DEFAULT_SENTINEL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Artifact format produced by the DOT backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// DOT source only, `dot` is not invoked
    Dot,
    /// Portable Network Graphics
    #[default]
    Png,
    /// Scalable Vector Graphics
    Svg,
    /// Portable Document Format
    Pdf,
}

impl OutputFormat {
    /// File extension, also the `-T` argument passed to `dot`
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Dot => "dot",
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
        }
    }

    /// Whether producing this format requires running the layout engine
    pub fn needs_layout(self) -> bool {
        self != OutputFormat::Dot
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Settings for turning a tree into a diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Artifact format
    pub format: OutputFormat,
    /// Directory the artifact is written to
    pub output_dir: PathBuf,
    /// File name of the artifact, without extension
    pub output_stem: String,
    /// Graphviz `rankdir` graph attribute
    pub rankdir: String,
    /// Graphviz `splines` graph attribute
    pub splines: String,
    /// Graphviz `nodesep` graph attribute, in inches
    pub nodesep: f64,
    /// Graphviz `ranksep` graph attribute, in inches
    pub ranksep: f64,
    /// Layout executable
    pub dot_binary: PathBuf,
    /// Remove the intermediate `.dot` file once the image is rendered
    pub cleanup: bool,
    /// End-of-stream marker stripped from the input
    pub sentinel: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            format: OutputFormat::default(),
            output_dir: PathBuf::from("."),
            output_stem: "ast_tree".to_string(),
            rankdir: "TB".to_string(),
            splines: "ortho".to_string(),
            nodesep: 0.4,
            ranksep: 0.8,
            dot_binary: PathBuf::from("dot"),
            cleanup: true,
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

impl RenderConfig {
    /// Loads a configuration from a JSON file; missing keys keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: RenderConfig = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values Graphviz or the file system would reject
    pub fn validate(&self) -> Result<()> {
        if self.output_stem.trim().is_empty() {
            return Err(Error::Config("output_stem must not be empty".to_string()));
        }
        if self.output_stem.contains(['/', '\\']) {
            return Err(Error::Config(format!(
                "output_stem must be a file name, got `{}`",
                self.output_stem
            )));
        }
        for (name, value) in [("nodesep", self.nodesep), ("ranksep", self.ranksep)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Path of the intermediate DOT source
    pub fn dot_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.dot", self.output_stem))
    }

    /// Path of the final artifact
    pub fn artifact_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.output_stem, self.format.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.format, OutputFormat::Png);
        assert_eq!(config.artifact_path(), PathBuf::from("./ast_tree.png"));
        assert_eq!(config.dot_path(), PathBuf::from("./ast_tree.dot"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"format": "svg", "rankdir": "LR"}"#).unwrap();
        assert_eq!(config.format, OutputFormat::Svg);
        assert_eq!(config.rankdir, "LR");
        assert_eq!(config.splines, "ortho");
        assert_eq!(config.sentinel, "<EOF>");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = RenderConfig {
            output_stem: " ".to_string(),
            ..RenderConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let config = RenderConfig {
            output_stem: "out/tree".to_string(),
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RenderConfig {
            ranksep: -1.0,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dot_format_skips_layout() {
        assert!(!OutputFormat::Dot.needs_layout());
        assert!(OutputFormat::Svg.needs_layout());
        assert_eq!(OutputFormat::Pdf.to_string(), "pdf");
    }
}
