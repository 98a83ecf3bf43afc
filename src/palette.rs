//! GameView color palette and nearest-color search.
//!
//! The palette maps 8-bit RGB colors to single-character codes. It is built
//! once by merging the standard GameView colors with a custom set (custom
//! entries override standard entries sharing a color) and is read-only for
//! the rest of the run.

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Maximum is 3 * 255^2 = 195075, well within u32.
    pub fn distance_sq(self, other: Color) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

/// Standard GameView colors. These must not be edited; the downstream
/// renderer knows them already and they are not part of the palette dump.
pub const STANDARD_COLORS: &[(Color, char)] = &[
    (Color::new(0, 0, 0), 'L'),       // black
    (Color::new(255, 255, 255), 'W'), // white
    (Color::new(255, 0, 0), 'R'),     // red
    (Color::new(255, 128, 128), 'r'), // light red
    (Color::new(0, 255, 0), 'G'),     // green
    (Color::new(128, 255, 128), 'g'), // light green
    (Color::new(0, 0, 255), 'B'),     // blue
    (Color::new(128, 128, 255), 'b'), // light blue
    (Color::new(255, 255, 0), 'Y'),   // yellow
    (Color::new(255, 255, 128), 'y'), // light yellow
    (Color::new(255, 192, 203), 'P'), // pink
    (Color::new(255, 182, 193), 'p'), // light pink
    (Color::new(0, 255, 255), 'C'),   // cyan
    (Color::new(128, 255, 255), 'c'), // light cyan
    (Color::new(255, 0, 255), 'M'),   // magenta
    (Color::new(255, 128, 255), 'm'), // light magenta
    (Color::new(255, 165, 0), 'O'),   // orange
    (Color::new(255, 200, 128), 'o'), // light orange
];

/// Custom colors registered with the renderer via the palette dump.
pub const CUSTOM_COLORS: &[(Color, char)] = &[
    (Color::new(128, 0, 0), 'D'),     // dark red
    (Color::new(255, 69, 0), 'F'),    // fire red
    (Color::new(0, 128, 0), 'H'),     // dark green
    (Color::new(0, 255, 127), 'I'),   // spring green
    (Color::new(0, 0, 128), 'J'),     // dark blue
    (Color::new(70, 130, 180), 'K'),  // steel blue
    (Color::new(255, 215, 0), 'N'),   // gold
    (Color::new(218, 165, 32), 'Q'),  // goldenrod
    (Color::new(199, 21, 133), 'S'),  // medium violet red
    (Color::new(75, 0, 130), 'T'),    // indigo
    (Color::new(244, 164, 96), 'U'),  // sandy brown
    (Color::new(0, 191, 255), 'V'),   // sky blue
    (Color::new(128, 128, 0), 'X'),   // olive
    (Color::new(128, 0, 128), 'Z'),   // purple
    (Color::new(128, 128, 128), 'G'), // gray
    (Color::new(255, 105, 180), 'f'), // light fire red
    (Color::new(144, 238, 144), 'i'), // light spring green
    (Color::new(173, 216, 230), 'v'), // light sky blue
];

/// Immutable color-to-code mapping with deterministic iteration order.
///
/// Iteration order is insertion order: standard entries first, then custom
/// entries. A custom entry overriding a standard color keeps the standard
/// entry's position with the custom code. The nearest-color tie-break in
/// [`Palette::closest`] depends on this order.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<(Color, char)>,
    custom: Vec<(Color, char)>,
}

impl Palette {
    /// Build the default GameView palette (standard + built-in custom set).
    pub fn gameview() -> Self {
        Self::merge(STANDARD_COLORS, CUSTOM_COLORS)
    }

    /// Build the GameView palette with extra custom entries appended, e.g.
    /// from the config file. Extra entries may override built-in colors.
    pub fn gameview_with(extra: &[(Color, char)]) -> Self {
        let mut custom = CUSTOM_COLORS.to_vec();
        custom.extend_from_slice(extra);
        Self::merge(STANDARD_COLORS, &custom)
    }

    /// Merge a standard and a custom entry set. Custom entries silently
    /// override standard entries with the same color key; a later entry for
    /// a color already seen keeps the earlier position.
    pub fn merge(standard: &[(Color, char)], custom: &[(Color, char)]) -> Self {
        let mut entries: Vec<(Color, char)> = Vec::with_capacity(standard.len() + custom.len());
        for &(color, code) in standard {
            upsert(&mut entries, color, code);
        }
        let mut custom_entries: Vec<(Color, char)> = Vec::with_capacity(custom.len());
        for &(color, code) in custom {
            upsert(&mut entries, color, code);
            upsert(&mut custom_entries, color, code);
        }
        Self {
            entries,
            custom: custom_entries,
        }
    }

    /// Exact lookup of a palette color's code.
    pub fn lookup(&self, color: Color) -> Option<char> {
        self.entries
            .iter()
            .find(|(c, _)| *c == color)
            .map(|&(_, code)| code)
    }

    /// Code of the palette entry closest to `color` by squared RGB distance.
    ///
    /// Exact ties resolve to the entry appearing earliest in iteration
    /// order, hence the strict `<` comparison.
    pub fn closest(&self, color: Color) -> char {
        // An empty palette maps everything to blank, mirroring how an empty
        // charset renders. Construction via the gameview builders never
        // produces one.
        let Some(&(first_color, first_code)) = self.entries.first() else {
            return ' ';
        };
        let mut best_code = first_code;
        let mut best_dist = first_color.distance_sq(color);
        for &(candidate, code) in &self.entries[1..] {
            let dist = candidate.distance_sq(color);
            if dist < best_dist {
                best_dist = dist;
                best_code = code;
            }
        }
        best_code
    }

    /// All merged entries in iteration order.
    pub fn entries(&self) -> &[(Color, char)] {
        &self.entries
    }

    /// The custom-only subset, in insertion order.
    pub fn custom_entries(&self) -> &[(Color, char)] {
        &self.custom
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Insert or overwrite an entry, keeping the first-seen position for a color.
fn upsert(entries: &mut Vec<(Color, char)>, color: Color, code: char) {
    match entries.iter_mut().find(|(c, _)| *c == color) {
        Some(entry) => entry.1 = code,
        None => entries.push((color, code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_custom_overrides_standard() {
        let standard = &[(Color::new(0, 0, 0), 'L'), (Color::new(255, 255, 255), 'W')];
        let custom = &[(Color::new(0, 0, 0), 'X')];
        let palette = Palette::merge(standard, custom);

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.lookup(Color::new(0, 0, 0)), Some('X'));
        // Overridden key keeps the standard position
        assert_eq!(palette.entries()[0], (Color::new(0, 0, 0), 'X'));
    }

    #[test]
    fn test_merge_order_standard_then_custom() {
        let palette = Palette::gameview();
        let codes: Vec<char> = palette.entries().iter().map(|&(_, c)| c).collect();
        assert_eq!(codes[0], 'L');
        assert_eq!(codes[1], 'W');
        // First custom entry comes right after the 18 standard entries
        assert_eq!(codes[STANDARD_COLORS.len()], 'D');
        assert_eq!(palette.len(), STANDARD_COLORS.len() + CUSTOM_COLORS.len());
    }

    #[test]
    fn test_custom_subset_excludes_standard() {
        let palette = Palette::gameview();
        assert_eq!(palette.custom_entries().len(), CUSTOM_COLORS.len());
        assert!(palette
            .custom_entries()
            .iter()
            .all(|e| CUSTOM_COLORS.contains(e)));
    }

    #[test]
    fn test_gameview_with_extends_custom_set() {
        let extra = &[(Color::new(1, 2, 3), 'A')];
        let palette = Palette::gameview_with(extra);
        assert_eq!(palette.lookup(Color::new(1, 2, 3)), Some('A'));
        assert_eq!(palette.custom_entries().len(), CUSTOM_COLORS.len() + 1);
    }

    #[test]
    fn test_distance_sq() {
        let black = Color::new(0, 0, 0);
        let white = Color::new(255, 255, 255);
        assert_eq!(black.distance_sq(black), 0);
        assert_eq!(black.distance_sq(white), 3 * 255 * 255);
        assert_eq!(black.distance_sq(white), white.distance_sq(black));
    }
}
