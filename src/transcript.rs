//! Display helpers: markdown rendering, citation labels, size formatting.

use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use once_cell::sync::Lazy;

use crate::types::SourceCitation;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.render.hardbreaks = true;
    // The service is trusted not to inject hostile markup; same contract the
    // browser client ran under.
    options.render.unsafe_ = true;
    options
});

/// Render assistant markdown, forcing every hyperlink to open in a new
/// context with opener/referrer isolation.
pub fn markdown_to_html(md: &str) -> String {
    let adapter = SyntectAdapter::new(Some("base16-ocean.dark"));
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);
    isolate_links(&markdown_to_html_with_plugins(
        md,
        &MARKDOWN_OPTIONS,
        &plugins,
    ))
}

/// Every anchor gets the isolation attributes, including raw inline-HTML
/// ones that carry other attributes before `href`. Injected first, so they
/// win over any duplicates the raw markup carried.
fn isolate_links(html: &str) -> String {
    html.replace("<a ", r#"<a target="_blank" rel="noopener noreferrer" "#)
        .replace("<a>", r#"<a target="_blank" rel="noopener noreferrer">"#)
}

/// Heading for one citation block, numbered from 1.
pub fn source_label(index: usize, source: &SourceCitation) -> String {
    let filename = source
        .metadata
        .filename
        .as_deref()
        .unwrap_or("Documento desconhecido");
    format!("Fonte {}: {}", index + 1, filename)
}

pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} bytes", bytes)
    } else if bytes < 1_048_576 {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.2} MB", bytes as f64 / 1_048_576.0)
    }
}
