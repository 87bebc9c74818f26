//! `kspdx render` command handler

use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use kspdx_spdx::model::Document;
use kspdx_spdx::{SpdxError, render_document};

use crate::cli::RenderArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `render` command.
///
/// Without `--out` the tag-value document goes to stdout and no report is printed.
pub async fn execute(args: RenderArgs, writer: &OutputWriter) -> Result<(), CliError> {
    let doc = read_document(&args.input).await?;

    info!(
        input = %args.input.display(),
        packages = doc.packages.len(),
        files = doc.file_count(),
        "rendering document"
    );

    match args.out {
        Some(out_path) => {
            render_to_file(&doc, &out_path)?;
            let report = RenderReport::new(&doc, &args.input, &out_path);
            info!(output = %out_path.display(), "document written");
            writer.render(&report)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut sink = BufWriter::new(stdout.lock());
            render_document(&doc, &mut sink)?;
            sink.flush()?;
        }
    }

    Ok(())
}

/// Read a JSON document model from disk.
///
/// # Errors
///
/// Returns `CliError::Io` if the file cannot be read and
/// `CliError::InvalidDocument` if it is not a valid document model.
pub async fn read_document(path: &Path) -> Result<Document, CliError> {
    let content = tokio::fs::read_to_string(path).await?;
    parse_document(&content)
}

fn parse_document(content: &str) -> Result<Document, CliError> {
    serde_json::from_str(content).map_err(|e| CliError::InvalidDocument(e.to_string()))
}

/// Render into a newly created file.
///
/// A document without creation info is rejected before the file is created.
fn render_to_file(doc: &Document, path: &Path) -> Result<(), CliError> {
    if doc.creation_info.is_none() {
        return Err(SpdxError::MissingCreationInfo.into());
    }

    let file = std::fs::File::create(path)?;
    let mut sink = BufWriter::new(file);
    render_document(doc, &mut sink)?;
    sink.flush()?;
    Ok(())
}

/// Summary of a document written to a file.
#[derive(Debug, Serialize)]
pub struct RenderReport {
    pub input: String,
    pub output: String,
    pub document_name: String,
    pub packages: usize,
    pub files: usize,
    pub other_licenses: usize,
    pub relationships: usize,
    pub annotations: usize,
    pub reviews: usize,
}

impl RenderReport {
    fn new(doc: &Document, input: &Path, output: &Path) -> Self {
        Self {
            input: input.display().to_string(),
            output: output.display().to_string(),
            document_name: doc
                .creation_info
                .as_ref()
                .map(|ci| ci.document_name.clone())
                .unwrap_or_default(),
            packages: doc.packages.len(),
            files: doc.file_count(),
            other_licenses: doc.other_licenses.len(),
            relationships: doc.relationships.len(),
            annotations: doc.annotations.len(),
            reviews: doc.reviews.len(),
        }
    }
}

impl Render for RenderReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(w, "Rendered: {}", self.output.bold())?;
        writeln!(w, "  Source:         {}", self.input)?;
        writeln!(w, "  Document:       {}", self.document_name)?;
        writeln!(w, "  Packages:       {}", self.packages)?;
        writeln!(w, "  Files:          {}", self.files)?;
        writeln!(w, "  Other licenses: {}", self.other_licenses)?;
        writeln!(w, "  Relationships:  {}", self.relationships)?;
        writeln!(w, "  Annotations:    {}", self.annotations)?;
        writeln!(w, "  Reviews:        {}", self.reviews)?;
        Ok(())
    }
}
