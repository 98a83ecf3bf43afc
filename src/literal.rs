//! Java string-literal rendering: escaping, name derivation, palette dump.
//!
//! The output shapes here are a compatibility contract with the downstream
//! GameView renderer and must not change:
//!
//! ```java
//! public static final String NAME = "...";
//! setColorForBlockImage('X', new Color(r, g, b));
//! ```

use crate::palette::Palette;
use std::collections::HashSet;
use std::fmt::Write as _;

/// Escape text for a Java string literal.
///
/// Backslash first, then quote, then newline, so backslash escaping never
/// double-escapes the newline marker.
pub fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Inverse of [`escape`]. Walks the text so that an escaped backslash
/// followed by an `n` is not mistaken for a newline marker.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// A named, escaped block graphic ready to be emitted as Java source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub name: String,
    /// Escaped block-graphic text.
    pub content: String,
}

impl Literal {
    /// Render as a Java string-constant declaration.
    pub fn render(&self) -> String {
        format!(
            "public static final String {} = \"{}\";",
            self.name, self.content
        )
    }
}

/// Allocates unique literal names within one batch.
///
/// Names derive from the filename stem: alphabetic characters only,
/// uppercased. A stem with no letters falls back to `IMAGE<counter>`; a
/// name already taken in the batch gets a numeric suffix. Stripped names
/// never contain digits, so the suffixed and fallback forms cannot collide
/// with a legitimate name.
#[derive(Debug, Default)]
pub struct NameAllocator {
    taken: HashSet<String>,
    fallback_counter: usize,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, stem: &str) -> String {
        let base: String = stem
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_uppercase)
            .collect();
        let base = if base.is_empty() {
            log::warn!("filename '{stem}' contains no letters, falling back to IMAGE name");
            let name = format!("IMAGE{}", self.fallback_counter);
            self.fallback_counter += 1;
            name
        } else {
            base
        };

        let mut name = base.clone();
        let mut suffix = 1u32;
        while !self.taken.insert(name.clone()) {
            name = format!("{base}{suffix}");
            suffix += 1;
        }
        name
    }
}

/// Render the custom-palette dump: one renderer registration call per
/// custom entry, in palette order.
pub fn palette_dump(palette: &Palette) -> String {
    let mut out = String::new();
    for &(color, code) in palette.custom_entries() {
        let _ = writeln!(
            out,
            "setColorForBlockImage('{}', new Color({}, {}, {}));",
            code, color.r, color.g, color.b
        );
    }
    out
}
