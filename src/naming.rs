//! Label and file-name conventions shared by every entry type.
//!
//! Directory and file names double as display labels. A name like
//! `getting-started` is shown as "Getting Started": dashes become spaces and
//! each word is capitalized.
//!
//! Only two content extensions are recognized, compared case-insensitively:
//! `.md` and `.mdx`. Everything else in the content tree is ignored.

use std::path::Path;

/// Content file extensions, without the dot.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Base name that makes a file the addressable page of its directory.
pub const INDEX_NAME: &str = "index";

/// Turn an identifier into a display label.
///
/// Every `-` becomes a space, then each run of non-whitespace characters gets
/// its first character upper-cased and the rest lower-cased. Whitespace is
/// preserved as-is, and an empty input stays empty.
///
/// - `"getting-started"` → `"Getting Started"`
/// - `"API-reference"` → `"Api Reference"`
/// - `"faq"` → `"Faq"`
pub fn format_title(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        let c = if c == '-' { ' ' } else { c };
        if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Whether a file name carries one of the recognized content extensions.
pub fn is_markdown_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .map(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Strip a recognized content extension from a file name.
///
/// Names without a recognized extension are returned unchanged.
/// `"setup.MDX"` → `"setup"`, `"notes.txt"` → `"notes.txt"`.
pub fn strip_markdown_extension(name: &str) -> &str {
    if let Some((base, ext)) = name.rsplit_once('.')
        && MARKDOWN_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
    {
        return base;
    }
    name
}

/// Whether a content file is its directory's index page.
pub fn is_index_file(name: &str) -> bool {
    strip_markdown_extension(name) == INDEX_NAME
}
