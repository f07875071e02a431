// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Glyph tables mapping subpixel bit patterns to Unicode characters.

/// Base of the braille pattern block (U+2800..U+28FF).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Braille dot bit per `[row][column]` position within a 2×4 cell.
///
/// The braille block encodes dots 1-6 column-major and dots 7-8 as a bottom
/// row, hence the irregular values.
pub const BRAILLE_DOT: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// Quadrant bit per `[row][column]` position within a 2×2 cell, indexing into
/// [HALF_BLOCKS].
pub const QUADRANT_BIT: [[u8; 2]; 2] = [[1, 2], [4, 8]];

/// All 16 quadrant-combination glyphs, indexed by the OR of [QUADRANT_BIT]
/// values for the lit quadrants.
pub const HALF_BLOCKS: [char; 16] = [
    ' ', '▘', '▝', '▀', '▖', '▌', '▞', '▛', '▗', '▚', '▐', '▜', '▄', '▙', '▟', '█',
];

/// The braille character for a dot bit pattern. An empty pattern renders as a
/// plain space rather than the blank braille glyph, so unlit cells stay
/// copy-paste friendly.
#[must_use]
pub fn braille(bits: u8) -> char {
    if bits == 0 {
        ' '
    } else {
        // Always in range: BRAILLE_BASE + u8 stays inside the braille block.
        char::from_u32(BRAILLE_BASE + bits as u32).unwrap_or(' ')
    }
}

/// The half-block character for a quadrant bit pattern (low 4 bits).
#[must_use]
pub fn half_block(bits: u8) -> char { HALF_BLOCKS[(bits & 0x0F) as usize] }

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_pattern_is_a_space() {
        assert_eq!(braille(0), ' ');
        assert_eq!(half_block(0), ' ');
    }

    #[test]
    fn full_patterns() {
        assert_eq!(braille(0xFF), '⣿');
        assert_eq!(half_block(0x0F), '█');
    }

    #[test]
    fn braille_column_bits() {
        // Left column only: dots 1, 2, 3, 7.
        let bits = BRAILLE_DOT[0][0] | BRAILLE_DOT[1][0] | BRAILLE_DOT[2][0] | BRAILLE_DOT[3][0];
        assert_eq!(bits, 0x47);
        assert_eq!(braille(bits), '⡇');
    }

    #[test]
    fn half_block_quadrants() {
        assert_eq!(half_block(QUADRANT_BIT[0][0]), '▘');
        assert_eq!(half_block(QUADRANT_BIT[0][1]), '▝');
        assert_eq!(half_block(QUADRANT_BIT[1][0]), '▖');
        assert_eq!(half_block(QUADRANT_BIT[1][1]), '▗');
        assert_eq!(half_block(QUADRANT_BIT[0][0] | QUADRANT_BIT[0][1]), '▀');
    }
}
