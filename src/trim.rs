//! Border trimming for encoded block graphics.
//!
//! Strips the background color's outer rows and columns and normalizes the
//! remaining indentation. The background code is substituted with spaces
//! first, so the substitution is irreversible within this step.

/// Background code stripped by the trimmer: the canvas is white in invert
/// mode and black otherwise.
pub fn background_code(invert: bool) -> char {
    if invert {
        'W'
    } else {
        'L'
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TrimError {
    /// The graphic consists entirely of background. A fully blank image is a
    /// precondition violation, not a supported input.
    #[error("block graphic is entirely background; nothing left to trim")]
    BlankGraphic,
}

/// Trim background borders from a rendered block graphic.
///
/// Steps, in order: replace `background` with spaces, un-indent every row by
/// the minimum leading-space count over non-blank rows, drop leading and
/// trailing blank rows, re-join with newlines. Idempotent on already-trimmed
/// input.
pub fn trim(blockgraphic: &str, background: char) -> Result<String, TrimError> {
    let cleared = blockgraphic.replace(background, " ");
    let lines: Vec<&str> = cleared.split('\n').collect();

    let min_indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .min()
        .ok_or(TrimError::BlankGraphic)?;

    // Strip exactly min_indent characters from every row, blank rows
    // included. Rows shorter than the indent become empty.
    let lines: Vec<&str> = lines
        .iter()
        .map(|line| line.get(min_indent..).unwrap_or(""))
        .collect();

    let first = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .ok_or(TrimError::BlankGraphic)?;
    let last = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .ok_or(TrimError::BlankGraphic)?;

    Ok(lines[first..=last].join("\n"))
}
