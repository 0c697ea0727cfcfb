//! Minimal markdown preview: headings 1-3, bold, italic, inline code and line
//! breaks, applied as ordered regex substitutions. Anything else passes through.

use std::sync::LazyLock;

use regex::Regex;

/// Snippets offered by the documentation editor toolbar.
pub const SNIPPETS: [&str; 5] = ["# Heading", "## Subheading", "**Bold**", "*Italic*", "`Code`"];

struct Substitution {
	pattern: Regex,
	replacement: &'static str,
}

static SUBSTITUTIONS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
	[
		(r"#{3} (.*)", r#"<h3 class="md-h3">$1</h3>"#),
		(r"#{2} (.*)", r#"<h2 class="md-h2">$1</h2>"#),
		(r"#{1} (.*)", r#"<h1 class="md-h1">$1</h1>"#),
		(r"\*\*(.*?)\*\*", r#"<strong>$1</strong>"#),
		(r"\*(.*?)\*", r#"<em>$1</em>"#),
		(r"`(.*?)`", r#"<code>$1</code>"#),
		(r"\n", "<br>"),
	]
	.into_iter()
	.map(|(pattern, replacement)| Substitution {
		pattern: Regex::new(pattern).expect("markdown pattern is valid"),
		replacement,
	})
	.collect()
});

/// Renders `text` to HTML with the substitutions above, in order.
pub fn render_markdown(text: &str) -> String {
	SUBSTITUTIONS.iter().fold(text.to_owned(), |acc, s| {
		s.pattern.replace_all(&acc, s.replacement).into_owned()
	})
}

/// Replaces the UTF-16 range `start..end` of `doc` (as a textarea reports its
/// selection) with `snippet`. Returns the new text and the UTF-16 offset just
/// past the inserted snippet.
pub fn insert_snippet(doc: &str, start: u32, end: u32, snippet: &str) -> (String, u32) {
	let (start, end) = (start.min(end), start.max(end));
	let (from, to) = (utf16_to_byte(doc, start), utf16_to_byte(doc, end));
	let mut out = String::with_capacity(doc.len() + snippet.len());
	out.push_str(&doc[..from]);
	out.push_str(snippet);
	out.push_str(&doc[to..]);
	let caret = doc[..from].encode_utf16().count() + snippet.encode_utf16().count();
	(out, caret as u32)
}

/// Byte index of the char boundary at or before UTF-16 offset `offset`.
fn utf16_to_byte(s: &str, offset: u32) -> usize {
	let mut units = 0u32;
	for (idx, ch) in s.char_indices() {
		let next = units + ch.len_utf16() as u32;
		if next > offset {
			return idx;
		}
		units = next;
	}
	s.len()
}
