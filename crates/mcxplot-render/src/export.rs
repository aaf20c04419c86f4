//! Figure export as plotly.js JSON or a standalone HTML page.

use std::path::Path;

use mcxplot_core::Figure;

use crate::error::{RenderError, RenderResult};

/// Output formats a figure can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// A self-contained page that loads plotly.js and draws the figure.
    Html,
    /// The bare `{ "data": [...], "layout": {...} }` figure object.
    Json,
}

impl ExportFormat {
    /// Picks the format from a file extension (`html`, `htm`, `json`).
    pub fn from_path(path: &Path) -> RenderResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(RenderError::UnsupportedFormat(extension)),
        }
    }
}

/// Options for HTML export.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// URL of the plotly.js bundle.
    pub plotly_js_url: String,
    /// Element id of the plot container.
    pub div_id: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            plotly_js_url: mcxplot_core::options::DEFAULT_PLOTLY_JS_URL.to_string(),
            div_id: "mcxplot".to_string(),
        }
    }
}

/// Serializes a figure to plotly.js JSON.
pub fn figure_to_json(figure: &Figure) -> RenderResult<String> {
    Ok(serde_json::to_string(figure)?)
}

/// Renders a figure as a standalone HTML page.
pub fn figure_to_html(figure: &Figure, options: &HtmlOptions) -> RenderResult<String> {
    let json = escape_script_json(&figure_to_json(figure)?);
    let layout = figure.layout();
    let title = layout
        .title
        .as_ref()
        .map_or("mcxplot", |t| t.text.as_str());

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{url}"></script>
</head>
<body>
<div id="{id}" style="width: {width}px; height: {height}px;"></div>
<script>
    var figure = {json};
    Plotly.newPlot('{id}', figure.data, figure.layout);
</script>
</body>
</html>
"#,
        title = escape_html(title),
        url = escape_html(&options.plotly_js_url),
        id = escape_html(&options.div_id),
        width = layout.width,
        height = layout.height,
    ))
}

/// Writes a figure to `path`, choosing the format from its extension.
pub fn save_figure(path: &Path, figure: &Figure, options: &HtmlOptions) -> RenderResult<()> {
    let contents = match ExportFormat::from_path(path)? {
        ExportFormat::Html => figure_to_html(figure, options)?,
        ExportFormat::Json => figure_to_json(figure)?,
    };
    std::fs::write(path, contents)?;
    log::debug!(
        "wrote figure with {} traces to {}",
        figure.len(),
        path.display()
    );
    Ok(())
}

/// Escapes JSON for an inline `<script>` block.
///
/// `<`, `>` and `&` only occur inside JSON strings, where the `\u` escapes
/// decode to the same text.
fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
