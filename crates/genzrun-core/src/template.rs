//! Template rendering: literal `{placeholder}` substitution, line by line.

use std::fs;
use std::path::Path;

use crate::errors::{SweepError, SweepResult};
use crate::keywords::ReplacementMap;

/// A fully substituted configuration document, ready for the external
/// tool. Lines are stored without trailing newlines and never mutated
/// after rendering.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    lines: Vec<String>,
}

impl RenderedDocument {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Newline-joined contents with a trailing newline.
    pub fn contents(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Render the template at `path` with `map`.
pub fn render_template(path: &Path, map: &ReplacementMap) -> SweepResult<RenderedDocument> {
    let raw = fs::read_to_string(path).map_err(|source| SweepError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(render_lines(raw.lines(), map))
}

/// Substitution core. Each `{key}` token present in a line is replaced
/// everywhere it occurs; keys apply in the map's sorted order. Lines
/// without tokens pass through unchanged.
fn render_lines<'a>(lines: impl Iterator<Item = &'a str>, map: &ReplacementMap) -> RenderedDocument {
    let lines = lines
        .map(|line| {
            let mut line = line.to_string();
            for (key, value) in map {
                let token = format!("{{{key}}}");
                if line.contains(&token) {
                    line = line.replace(&token, value);
                }
            }
            line
        })
        .collect();
    RenderedDocument { lines }
}
