use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use client_core::ViewRenderer;
use markup::RenderedHtml;

pub struct StdoutRenderer;

impl ViewRenderer for StdoutRenderer {
    fn render(&self, view: RenderedHtml) -> Result<()> {
        println!("{view}");
        Ok(())
    }
}

/// Writes a page whose `#result` container holds the view, replacing any previous page.
pub struct PageRenderer {
    path: PathBuf,
}

impl PageRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ViewRenderer for PageRenderer {
    fn render(&self, view: RenderedHtml) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create directory '{}'", parent.display())
            })?;
        }
        fs::write(&self.path, page(&view))
            .with_context(|| format!("failed to write '{}'", self.path.display()))?;
        tracing::info!(path = %self.path.display(), "lookup: view written");
        Ok(())
    }
}

fn page(view: &RenderedHtml) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>User lookup</title>\n</head>\n<body>\n  <div id=\"result\">{view}</div>\n</body>\n</html>\n"
    )
}
