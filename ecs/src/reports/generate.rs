//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from class generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Schema file the classes were generated from.
    pub schema_path: PathBuf,

    /// ECS version label passed to the template.
    pub version: String,

    /// Number of schema entries.
    pub type_count: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of class generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Written files, in schema order.
    pub files: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value(
            "Schema",
            &format!(
                "{} ({} types, ECS {})",
                self.schema_path.display(),
                self.type_count,
                self.version
            ),
        );
        out.newline();

        out.section(&format!("Generated ({})", written.files.len()));
        for file in &written.files {
            let name = file
                .strip_prefix(&written.output_dir)
                .unwrap_or(file)
                .display()
                .to_string();
            out.added_item(&name);
        }
        out.newline();

        out.key_value("Output", &written.output_dir.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            schema_path: PathBuf::from("schema.yml"),
            version: "v1.8".to_string(),
            type_count: 2,
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("generated"),
                files: vec![
                    PathBuf::from("generated/Agent.php"),
                    PathBuf::from("generated/Host.php"),
                ],
            }),
        };
        let mut out = BufferOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Schema: schema.yml (2 types, ECS v1.8)",
                "",
                "Generated (2):",
                "  + Agent.php",
                "  + Host.php",
                "",
                "Output: generated",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            schema_path: PathBuf::from("schema.yml"),
            version: "v1.8".to_string(),
            type_count: 1,
            result: GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "Host.php".to_string(),
                    content: "<?php".to_string(),
                }],
            }),
        };
        let mut out = BufferOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "── Host.php ──",
                "<?php",
                "── Summary ──",
                "1 files would be generated",
            ]
        );
    }
}
