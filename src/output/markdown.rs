// Markdown file output

use crate::error::Result;
use crate::model::Scope;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name used for a scope's diagram, e.g. `Shop.Database.Entities.md`
pub fn markdown_file_name(scope: &Scope) -> String {
    format!("{}.md", scope.qualified())
}

/// Write a rendered diagram into `dir`, creating the directory if needed
pub fn write_markdown(dir: &Path, scope: &Scope, diagram: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(markdown_file_name(scope));

    let mut contents = diagram.to_string();
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    std::fs::write(&path, contents)?;

    info!(path = %path.display(), "Diagram written");
    Ok(path)
}
