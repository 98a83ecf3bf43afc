//! Unit tests for the palette and the nearest-color search.
//!
//! These verify the matcher's contract:
//! - Self-match is exact for every palette color
//! - The returned code always belongs to a minimum-distance entry
//! - Exact ties resolve to the earliest entry in iteration order

use blockgraphify::palette::{Color, Palette, CUSTOM_COLORS, STANDARD_COLORS};

// ==================== Self-Match Tests ====================

#[test]
fn test_closest_is_exact_for_palette_colors() {
    let palette = Palette::gameview();
    for &(color, code) in palette.entries() {
        assert_eq!(
            palette.closest(color),
            code,
            "palette color {color:?} must map to its own code"
        );
        assert_eq!(palette.lookup(color), Some(code));
    }
}

// ==================== Minimality Tests ====================

#[test]
fn test_closest_minimizes_distance() {
    let palette = Palette::gameview();
    let steps = [0u8, 31, 64, 127, 128, 192, 255];

    for &r in &steps {
        for &g in &steps {
            for &b in &steps {
                let color = Color::new(r, g, b);
                let code = palette.closest(color);

                let min_dist = palette
                    .entries()
                    .iter()
                    .map(|&(c, _)| c.distance_sq(color))
                    .min()
                    .unwrap();

                // The returned code must belong to an entry at minimum
                // distance. Codes are not unique, so check membership.
                assert!(
                    palette
                        .entries()
                        .iter()
                        .any(|&(c, entry_code)| entry_code == code
                            && c.distance_sq(color) == min_dist),
                    "closest({color:?}) = '{code}' is not at minimum distance {min_dist}"
                );
            }
        }
    }
}

#[test]
fn test_out_of_gamut_colors_still_resolve() {
    let palette = Palette::gameview();
    // Every input resolves; these have no exact palette match.
    for color in [Color::new(1, 2, 3), Color::new(200, 50, 90)] {
        let code = palette.closest(color);
        assert!(palette.entries().iter().any(|&(_, c)| c == code));
    }
}

// ==================== Tie-Break Tests ====================

#[test]
fn test_tie_break_keeps_earliest_entry() {
    // Two entries equidistant from (1, 0, 0); the first one wins.
    let standard = &[(Color::new(0, 0, 0), 'A'), (Color::new(2, 0, 0), 'B')];
    let palette = Palette::merge(standard, &[]);
    assert_eq!(palette.closest(Color::new(1, 0, 0)), 'A');

    // Swapping the entry order flips the winner.
    let swapped = &[(Color::new(2, 0, 0), 'B'), (Color::new(0, 0, 0), 'A')];
    let palette = Palette::merge(swapped, &[]);
    assert_eq!(palette.closest(Color::new(1, 0, 0)), 'B');
}

#[test]
fn test_tie_break_standard_before_custom() {
    // A custom entry equidistant with a standard one loses the tie because
    // standard entries come first in iteration order.
    let standard = &[(Color::new(0, 0, 0), 'S')];
    let custom = &[(Color::new(2, 0, 0), 'C')];
    let palette = Palette::merge(standard, custom);
    assert_eq!(palette.closest(Color::new(1, 0, 0)), 'S');
}

// ==================== Merge Semantics Tests ====================

#[test]
fn test_gameview_palette_size_and_order() {
    let palette = Palette::gameview();
    assert_eq!(palette.len(), STANDARD_COLORS.len() + CUSTOM_COLORS.len());
    // No color key collides between the built-in sets, so the merged order
    // is simply standard entries followed by custom entries.
    assert_eq!(&palette.entries()[..STANDARD_COLORS.len()], STANDARD_COLORS);
    assert_eq!(&palette.entries()[STANDARD_COLORS.len()..], CUSTOM_COLORS);
}

#[test]
fn test_custom_override_changes_matching() {
    // Overriding pure black with a different code redirects every
    // black-ish pixel to the new code.
    let palette = Palette::gameview_with(&[(Color::new(0, 0, 0), '#')]);
    assert_eq!(palette.closest(Color::new(0, 0, 0)), '#');
    assert_eq!(palette.closest(Color::new(5, 5, 5)), '#');
    // The override keeps the standard entry's position.
    assert_eq!(palette.entries()[0], (Color::new(0, 0, 0), '#'));
}
