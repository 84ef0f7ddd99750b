/// Hand-built 4x6 bitmap font.
///
/// Glyphs are stored as packed columns: 4 bytes per glyph, one byte per
/// column, bit 0 = top row. The table carries the same 2-byte
/// width/height header the sprite blitter expects, so a glyph index can
/// be handed straight to it. Table order is fixed: A-Z, a-z (with the
/// `lowercase` feature), 0-9, then the punctuation set — index
/// resolution is closed-form arithmetic over that order, not a lookup
/// structure.

pub const GLYPH_WIDTH: u8 = 4;
pub const GLYPH_HEIGHT: u8 = 8;

/// Default distance between text baselines; the visible glyph body is
/// 6 rows plus the one-row offset the renderer applies.
pub const LINE_HEIGHT: u8 = 7;

#[cfg(feature = "lowercase")]
pub const GLYPH_COUNT: usize = 77;
#[cfg(not(feature = "lowercase"))]
pub const GLYPH_COUNT: usize = 51;

const TABLE_LEN: usize = 2 + GLYPH_COUNT * GLYPH_WIDTH as usize;

/// Glyph indices derived from the table layout. Each build
/// configuration gets its own constant set; dropping the lowercase
/// section shifts everything behind it.
#[cfg(feature = "lowercase")]
mod index {
    pub const DIGIT_BASE: u8 = 52;
    pub const EXCLAMATION: u8 = 62;
    pub const PERIOD: u8 = 63;
    pub const COMMA: u8 = 64;
    pub const QUESTION: u8 = 65;
    pub const COLON: u8 = 66;
    pub const LESS_THAN: u8 = 67;
    pub const EQUALS: u8 = 68;
    pub const GREATER_THAN: u8 = 69;
    pub const LEFT_PAREN: u8 = 70;
    pub const RIGHT_PAREN: u8 = 71;
    pub const LEFT_BRACKET: u8 = 72;
    pub const RIGHT_BRACKET: u8 = 73;
    pub const PLUS: u8 = 74;
    pub const MINUS: u8 = 75;
    pub const PERCENT: u8 = 76;
}

#[cfg(not(feature = "lowercase"))]
mod index {
    pub const DIGIT_BASE: u8 = 26;
    pub const EXCLAMATION: u8 = 36;
    pub const PERIOD: u8 = 37;
    pub const COMMA: u8 = 38;
    pub const QUESTION: u8 = 39;
    pub const COLON: u8 = 40;
    pub const LESS_THAN: u8 = 41;
    pub const EQUALS: u8 = 42;
    pub const GREATER_THAN: u8 = 43;
    pub const LEFT_PAREN: u8 = 44;
    pub const RIGHT_PAREN: u8 = 45;
    pub const LEFT_BRACKET: u8 = 46;
    pub const RIGHT_BRACKET: u8 = 47;
    pub const PLUS: u8 = 48;
    pub const MINUS: u8 = 49;
    pub const PERCENT: u8 = 50;
}

/// Map an input byte to its glyph index, or `None` when the font has no
/// glyph for it. First matching clause wins; unsupported bytes are
/// never an error — the renderer skips the blit and moves on.
pub fn glyph_index(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        #[cfg(feature = "lowercase")]
        b'a'..=b'z' => Some(byte - b'a' + 26),
        b'0'..=b'9' => Some(byte - b'0' + index::DIGIT_BASE),
        b'!' => Some(index::EXCLAMATION),
        b'.' => Some(index::PERIOD),
        b',' => Some(index::COMMA),
        b'?' => Some(index::QUESTION),
        b':' => Some(index::COLON),
        b'<' => Some(index::LESS_THAN),
        b'=' => Some(index::EQUALS),
        b'>' => Some(index::GREATER_THAN),
        b'(' => Some(index::LEFT_PAREN),
        b')' => Some(index::RIGHT_PAREN),
        b'[' => Some(index::LEFT_BRACKET),
        b']' => Some(index::RIGHT_BRACKET),
        b'+' => Some(index::PLUS),
        b'-' => Some(index::MINUS),
        b'%' => Some(index::PERCENT),
        _ => None,
    }
}

const UPPERCASE: [u8; 26 * 4] = [
    0x3E, 0x09, 0x09, 0x3E, // A
    0x3F, 0x25, 0x25, 0x1A, // B
    0x1E, 0x21, 0x21, 0x12, // C
    0x3F, 0x21, 0x21, 0x1E, // D
    0x3F, 0x25, 0x25, 0x21, // E
    0x3F, 0x05, 0x05, 0x01, // F
    0x1E, 0x21, 0x29, 0x3A, // G
    0x3F, 0x04, 0x04, 0x3F, // H
    0x21, 0x3F, 0x21, 0x00, // I
    0x10, 0x21, 0x21, 0x1F, // J
    0x3F, 0x04, 0x0A, 0x31, // K
    0x3F, 0x20, 0x20, 0x20, // L
    0x3F, 0x02, 0x02, 0x3F, // M
    0x3F, 0x02, 0x04, 0x3F, // N
    0x1E, 0x21, 0x21, 0x1E, // O
    0x3F, 0x09, 0x09, 0x06, // P
    0x1E, 0x21, 0x11, 0x2E, // Q
    0x3F, 0x09, 0x09, 0x36, // R
    0x22, 0x25, 0x25, 0x19, // S
    0x01, 0x3F, 0x01, 0x01, // T
    0x1F, 0x20, 0x20, 0x1F, // U
    0x0F, 0x10, 0x20, 0x1F, // V
    0x3F, 0x10, 0x10, 0x3F, // W
    0x3B, 0x04, 0x04, 0x3B, // X
    0x03, 0x04, 0x38, 0x07, // Y
    0x31, 0x2D, 0x23, 0x21, // Z
];

#[cfg(feature = "lowercase")]
const LOWERCASE: [u8; 26 * 4] = [
    0x10, 0x2A, 0x2A, 0x3C, // a
    0x3F, 0x24, 0x24, 0x18, // b
    0x1C, 0x22, 0x22, 0x14, // c
    0x18, 0x24, 0x24, 0x3F, // d
    0x1C, 0x2A, 0x2A, 0x2C, // e
    0x04, 0x7E, 0x05, 0x01, // f
    0x4C, 0x52, 0x52, 0x3E, // g
    0x3F, 0x04, 0x04, 0x38, // h
    0x24, 0x3D, 0x20, 0x00, // i
    0x40, 0x40, 0x44, 0x3D, // j
    0x3F, 0x08, 0x14, 0x22, // k
    0x21, 0x3F, 0x20, 0x00, // l
    0x3E, 0x04, 0x04, 0x3E, // m
    0x3E, 0x04, 0x02, 0x3C, // n
    0x1C, 0x22, 0x22, 0x1C, // o
    0x7E, 0x22, 0x22, 0x1C, // p
    0x1C, 0x22, 0x22, 0x7E, // q
    0x3E, 0x04, 0x02, 0x04, // r
    0x24, 0x2A, 0x2A, 0x12, // s
    0x02, 0x1F, 0x22, 0x20, // t
    0x1E, 0x20, 0x20, 0x1E, // u
    0x0E, 0x10, 0x20, 0x1E, // v
    0x3E, 0x10, 0x10, 0x3E, // w
    0x36, 0x08, 0x08, 0x36, // x
    0x4E, 0x50, 0x50, 0x3E, // y
    0x32, 0x2A, 0x26, 0x22, // z
];

const DIGITS: [u8; 10 * 4] = [
    0x1E, 0x29, 0x25, 0x1E, // 0
    0x22, 0x3F, 0x20, 0x00, // 1
    0x32, 0x29, 0x29, 0x26, // 2
    0x12, 0x21, 0x25, 0x1A, // 3
    0x0C, 0x0A, 0x3F, 0x08, // 4
    0x17, 0x25, 0x25, 0x19, // 5
    0x1E, 0x25, 0x25, 0x18, // 6
    0x01, 0x39, 0x05, 0x03, // 7
    0x1A, 0x25, 0x25, 0x1A, // 8
    0x06, 0x29, 0x29, 0x1E, // 9
];

const PUNCTUATION: [u8; 15 * 4] = [
    0x00, 0x2F, 0x00, 0x00, // !
    0x00, 0x20, 0x00, 0x00, // .
    0x00, 0x28, 0x18, 0x00, // ,
    0x02, 0x29, 0x06, 0x00, // ?
    0x00, 0x12, 0x00, 0x00, // :
    0x08, 0x14, 0x22, 0x00, // <
    0x00, 0x14, 0x14, 0x00, // =
    0x22, 0x14, 0x08, 0x00, // >
    0x00, 0x1E, 0x21, 0x00, // (
    0x00, 0x21, 0x1E, 0x00, // )
    0x00, 0x3F, 0x21, 0x00, // [
    0x00, 0x21, 0x3F, 0x00, // ]
    0x08, 0x1C, 0x08, 0x00, // +
    0x08, 0x08, 0x08, 0x00, // -
    0x12, 0x08, 0x04, 0x12, // %
];

/// The one physical glyph table for this build, assembled at compile
/// time so the `lowercase` toggle never costs a runtime branch or a
/// second copy of the data.
pub static FONT_IMAGES: [u8; TABLE_LEN] = build_table();

const DIGITS_OFFSET: usize = 2 + index::DIGIT_BASE as usize * GLYPH_WIDTH as usize;
const PUNCTUATION_OFFSET: usize = 2 + index::EXCLAMATION as usize * GLYPH_WIDTH as usize;

const fn build_table() -> [u8; TABLE_LEN] {
    let table = [0u8; TABLE_LEN];
    let table = splice(table, 0, &[GLYPH_WIDTH, GLYPH_HEIGHT]);
    let table = splice(table, 2, &UPPERCASE);
    #[cfg(feature = "lowercase")]
    let table = splice(table, 2 + UPPERCASE.len(), &LOWERCASE);
    let table = splice(table, DIGITS_OFFSET, &DIGITS);
    splice(table, PUNCTUATION_OFFSET, &PUNCTUATION)
}

const fn splice<const N: usize>(mut table: [u8; N], at: usize, section: &[u8]) -> [u8; N] {
    let mut i = 0;
    while i < section.len() {
        table[at + i] = section[i];
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn supported() -> Vec<u8> {
        let mut all: Vec<u8> = (b'A'..=b'Z').collect();
        if cfg!(feature = "lowercase") {
            all.extend(b'a'..=b'z');
        }
        all.extend(b'0'..=b'9');
        all.extend(*b"!.,?:<=>()[]+-%");
        all
    }

    #[test]
    fn table_header_and_length() {
        assert_eq!(FONT_IMAGES[0], GLYPH_WIDTH);
        assert_eq!(FONT_IMAGES[1], GLYPH_HEIGHT);
        assert_eq!(FONT_IMAGES.len(), 2 + GLYPH_COUNT * 4);
    }

    #[test]
    fn letters_and_digits_resolve_in_order() {
        assert_eq!(glyph_index(b'A'), Some(0));
        assert_eq!(glyph_index(b'Z'), Some(25));
        let digit_base = if cfg!(feature = "lowercase") { 52 } else { 26 };
        assert_eq!(glyph_index(b'0'), Some(digit_base));
        assert_eq!(glyph_index(b'9'), Some(digit_base + 9));
    }

    #[cfg(feature = "lowercase")]
    #[test]
    fn lowercase_resolves_after_uppercase() {
        assert_eq!(glyph_index(b'a'), Some(26));
        assert_eq!(glyph_index(b'z'), Some(51));
    }

    #[cfg(not(feature = "lowercase"))]
    #[test]
    fn lowercase_is_unsupported_without_the_feature() {
        assert_eq!(glyph_index(b'a'), None);
        assert_eq!(glyph_index(b'z'), None);
    }

    #[test]
    fn punctuation_has_fixed_indices() {
        let base = if cfg!(feature = "lowercase") { 62 } else { 36 };
        let order = *b"!.,?:<=>()[]+-%";
        for (i, &c) in order.iter().enumerate() {
            assert_eq!(glyph_index(c), Some(base + i as u8), "symbol {:?}", c as char);
        }
    }

    #[test]
    fn resolver_is_injective_and_in_bounds() {
        let mut seen = HashSet::new();
        for c in supported() {
            let idx = glyph_index(c).expect("supported byte must resolve");
            assert!((idx as usize) < GLYPH_COUNT, "index {} for {:?}", idx, c as char);
            assert!(seen.insert(idx), "duplicate index {} for {:?}", idx, c as char);
        }
        assert_eq!(seen.len(), GLYPH_COUNT);
    }

    #[test]
    fn unsupported_bytes_yield_no_glyph() {
        for c in [b' ', b'\n', b'\t', b'@', b'~', b';', b'/', b'*', 0u8, 0x7F, 0xFF] {
            assert_eq!(glyph_index(c), None, "byte {:#x}", c);
        }
    }

    #[test]
    fn table_sections_land_where_the_resolver_points() {
        // 'H' is columns 3F 04 04 3F.
        let h = 2 + glyph_index(b'H').unwrap() as usize * 4;
        assert_eq!(&FONT_IMAGES[h..h + 4], &[0x3F, 0x04, 0x04, 0x3F]);
        // '0' is columns 1E 29 25 1E.
        let zero = 2 + glyph_index(b'0').unwrap() as usize * 4;
        assert_eq!(&FONT_IMAGES[zero..zero + 4], &[0x1E, 0x29, 0x25, 0x1E]);
        // '%' is the last glyph in the table.
        let pct = 2 + glyph_index(b'%').unwrap() as usize * 4;
        assert_eq!(&FONT_IMAGES[pct..pct + 4], &[0x12, 0x08, 0x04, 0x12]);
        assert_eq!(pct + 4, FONT_IMAGES.len());
    }
}
