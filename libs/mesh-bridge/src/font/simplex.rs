//! Hershey simplex stroke font, printable ASCII `' '..='~'`.
//!
//! Each entry lists its point count, advance width and flattened
//! `x, y` pairs; a `-1, -1` pair ends the current stroke.

use super::RawGlyph;

pub(super) static GLYPHS: [RawGlyph; 95] = [
    // ' '
    RawGlyph {
        count: 0,
        advance: 16,
        coords: &[],
    },
    // '!'
    RawGlyph {
        count: 8,
        advance: 10,
        coords: &[
            5, 21, 5, 7, -1, -1, 5, 2, 4, 1, 5, 0, 6, 1, 5, 2,
        ],
    },
    // '"'
    RawGlyph {
        count: 5,
        advance: 16,
        coords: &[
            4, 21, 4, 14, -1, -1, 12, 21, 12, 14,
        ],
    },
    // '#'
    RawGlyph {
        count: 11,
        advance: 21,
        coords: &[
            11, 25, 4, -7, -1, -1, 17, 25, 10, -7, -1, -1, 4, 12, 18, 12, -1, -1, 3, 6,
            17, 6,
        ],
    },
    // '$'
    RawGlyph {
        count: 26,
        advance: 20,
        coords: &[
            8, 25, 8, -4, -1, -1, 12, 25, 12, -4, -1, -1, 17, 18, 15, 20, 12, 21, 8, 21,
            5, 20, 3, 18, 3, 16, 4, 14, 5, 13, 7, 12, 13, 10, 15, 9, 16, 8, 17, 6,
            17, 3, 15, 1, 12, 0, 8, 0, 5, 1, 3, 3,
        ],
    },
    // '%'
    RawGlyph {
        count: 31,
        advance: 24,
        coords: &[
            21, 21, 3, 0, -1, -1, 8, 21, 10, 19, 10, 17, 9, 15, 7, 14, 5, 14, 3, 16,
            3, 18, 4, 20, 6, 21, 8, 21, 10, 20, 13, 19, 16, 19, 19, 20, 21, 21, -1, -1,
            17, 7, 15, 6, 14, 4, 14, 2, 16, 0, 18, 0, 20, 1, 21, 3, 21, 5, 19, 7, 17, 7,
        ],
    },
    // '&'
    RawGlyph {
        count: 34,
        advance: 26,
        coords: &[
            23, 12, 23, 13, 22, 14, 21, 14, 20, 13, 19, 11, 17, 6, 15, 3, 13, 1, 11, 0,
            7, 0, 5, 1, 4, 2, 3, 4, 3, 6, 4, 8, 5, 9, 12, 13, 13, 14, 14, 16, 14, 18,
            13, 20, 11, 21, 9, 20, 8, 18, 8, 16, 9, 13, 11, 10, 16, 3, 18, 1, 20, 0,
            22, 0, 23, 1, 23, 2,
        ],
    },
    // '\''
    RawGlyph {
        count: 7,
        advance: 10,
        coords: &[
            5, 19, 4, 20, 5, 21, 6, 20, 6, 18, 5, 16, 4, 15,
        ],
    },
    // '('
    RawGlyph {
        count: 10,
        advance: 14,
        coords: &[
            11, 25, 9, 23, 7, 20, 5, 16, 4, 11, 4, 7, 5, 2, 7, -2, 9, -5, 11, -7,
        ],
    },
    // ')'
    RawGlyph {
        count: 10,
        advance: 14,
        coords: &[
            3, 25, 5, 23, 7, 20, 9, 16, 10, 11, 10, 7, 9, 2, 7, -2, 5, -5, 3, -7,
        ],
    },
    // '*'
    RawGlyph {
        count: 8,
        advance: 16,
        coords: &[
            8, 21, 8, 9, -1, -1, 3, 18, 13, 12, -1, -1, 13, 18, 3, 12,
        ],
    },
    // '+'
    RawGlyph {
        count: 5,
        advance: 26,
        coords: &[
            13, 18, 13, 0, -1, -1, 4, 9, 22, 9,
        ],
    },
    // ','
    RawGlyph {
        count: 8,
        advance: 10,
        coords: &[
            6, 1, 5, 0, 4, 1, 5, 2, 6, 1, 6, -1, 5, -3, 4, -4,
        ],
    },
    // '-'
    RawGlyph {
        count: 2,
        advance: 26,
        coords: &[
            4, 9, 22, 9,
        ],
    },
    // '.'
    RawGlyph {
        count: 5,
        advance: 10,
        coords: &[
            5, 2, 4, 1, 5, 0, 6, 1, 5, 2,
        ],
    },
    // '/'
    RawGlyph {
        count: 2,
        advance: 22,
        coords: &[
            20, 25, 2, -7,
        ],
    },
    // '0'
    RawGlyph {
        count: 17,
        advance: 20,
        coords: &[
            9, 21, 6, 20, 4, 17, 3, 12, 3, 9, 4, 4, 6, 1, 9, 0, 11, 0, 14, 1, 16, 4,
            17, 9, 17, 12, 16, 17, 14, 20, 11, 21, 9, 21,
        ],
    },
    // '1'
    RawGlyph {
        count: 4,
        advance: 20,
        coords: &[
            6, 17, 8, 18, 11, 21, 11, 0,
        ],
    },
    // '2'
    RawGlyph {
        count: 14,
        advance: 20,
        coords: &[
            4, 16, 4, 17, 5, 19, 6, 20, 8, 21, 12, 21, 14, 20, 15, 19, 16, 17, 16, 15,
            15, 13, 13, 10, 3, 0, 17, 0,
        ],
    },
    // '3'
    RawGlyph {
        count: 15,
        advance: 20,
        coords: &[
            5, 21, 16, 21, 10, 13, 13, 13, 15, 12, 16, 11, 17, 8, 17, 6, 16, 3, 14, 1,
            11, 0, 8, 0, 5, 1, 4, 2, 3, 4,
        ],
    },
    // '4'
    RawGlyph {
        count: 6,
        advance: 20,
        coords: &[
            13, 21, 3, 7, 18, 7, -1, -1, 13, 21, 13, 0,
        ],
    },
    // '5'
    RawGlyph {
        count: 17,
        advance: 20,
        coords: &[
            15, 21, 5, 21, 4, 12, 5, 13, 8, 14, 11, 14, 14, 13, 16, 11, 17, 8, 17, 6,
            16, 3, 14, 1, 11, 0, 8, 0, 5, 1, 4, 2, 3, 4,
        ],
    },
    // '6'
    RawGlyph {
        count: 23,
        advance: 20,
        coords: &[
            16, 18, 15, 20, 12, 21, 10, 21, 7, 20, 5, 17, 4, 12, 4, 7, 5, 3, 7, 1,
            10, 0, 11, 0, 14, 1, 16, 3, 17, 6, 17, 7, 16, 10, 14, 12, 11, 13, 10, 13,
            7, 12, 5, 10, 4, 7,
        ],
    },
    // '7'
    RawGlyph {
        count: 5,
        advance: 20,
        coords: &[
            17, 21, 7, 0, -1, -1, 3, 21, 17, 21,
        ],
    },
    // '8'
    RawGlyph {
        count: 29,
        advance: 20,
        coords: &[
            8, 21, 5, 20, 4, 18, 4, 16, 5, 14, 7, 13, 11, 12, 14, 11, 16, 9, 17, 7,
            17, 4, 16, 2, 15, 1, 12, 0, 8, 0, 5, 1, 4, 2, 3, 4, 3, 7, 4, 9, 6, 11,
            9, 12, 13, 13, 15, 14, 16, 16, 16, 18, 15, 20, 12, 21, 8, 21,
        ],
    },
    // '9'
    RawGlyph {
        count: 23,
        advance: 20,
        coords: &[
            16, 14, 15, 11, 13, 9, 10, 8, 9, 8, 6, 9, 4, 11, 3, 14, 3, 15, 4, 18, 6, 20,
            9, 21, 10, 21, 13, 20, 15, 18, 16, 14, 16, 9, 15, 4, 13, 1, 10, 0, 8, 0,
            5, 1, 4, 3,
        ],
    },
    // ':'
    RawGlyph {
        count: 11,
        advance: 10,
        coords: &[
            5, 14, 4, 13, 5, 12, 6, 13, 5, 14, -1, -1, 5, 2, 4, 1, 5, 0, 6, 1, 5, 2,
        ],
    },
    // ';'
    RawGlyph {
        count: 14,
        advance: 10,
        coords: &[
            5, 14, 4, 13, 5, 12, 6, 13, 5, 14, -1, -1, 6, 1, 5, 0, 4, 1, 5, 2, 6, 1,
            6, -1, 5, -3, 4, -4,
        ],
    },
    // '<'
    RawGlyph {
        count: 3,
        advance: 24,
        coords: &[
            20, 18, 4, 9, 20, 0,
        ],
    },
    // '='
    RawGlyph {
        count: 5,
        advance: 26,
        coords: &[
            4, 12, 22, 12, -1, -1, 4, 6, 22, 6,
        ],
    },
    // '>'
    RawGlyph {
        count: 3,
        advance: 24,
        coords: &[
            4, 18, 20, 9, 4, 0,
        ],
    },
    // '?'
    RawGlyph {
        count: 20,
        advance: 18,
        coords: &[
            3, 16, 3, 17, 4, 19, 5, 20, 7, 21, 11, 21, 13, 20, 14, 19, 15, 17, 15, 15,
            14, 13, 13, 12, 9, 10, 9, 7, -1, -1, 9, 2, 8, 1, 9, 0, 10, 1, 9, 2,
        ],
    },
    // '@'
    RawGlyph {
        count: 55,
        advance: 27,
        coords: &[
            18, 13, 17, 15, 15, 16, 12, 16, 10, 15, 9, 14, 8, 11, 8, 8, 9, 6, 11, 5,
            14, 5, 16, 6, 17, 8, -1, -1, 12, 16, 10, 14, 9, 11, 9, 8, 10, 6, 11, 5,
            -1, -1, 18, 16, 17, 8, 17, 6, 19, 5, 21, 5, 23, 7, 24, 10, 24, 12, 23, 15,
            22, 17, 20, 19, 18, 20, 15, 21, 12, 21, 9, 20, 7, 19, 5, 17, 4, 15, 3, 12,
            3, 9, 4, 6, 5, 4, 7, 2, 9, 1, 12, 0, 15, 0, 18, 1, 20, 2, 21, 3, -1, -1,
            19, 16, 18, 8, 18, 6, 19, 5,
        ],
    },
    // 'A'
    RawGlyph {
        count: 8,
        advance: 18,
        coords: &[
            9, 21, 1, 0, -1, -1, 9, 21, 17, 0, -1, -1, 4, 7, 14, 7,
        ],
    },
    // 'B'
    RawGlyph {
        count: 23,
        advance: 21,
        coords: &[
            4, 21, 4, 0, -1, -1, 4, 21, 13, 21, 16, 20, 17, 19, 18, 17, 18, 15, 17, 13,
            16, 12, 13, 11, -1, -1, 4, 11, 13, 11, 16, 10, 17, 9, 18, 7, 18, 4, 17, 2,
            16, 1, 13, 0, 4, 0,
        ],
    },
    // 'C'
    RawGlyph {
        count: 18,
        advance: 21,
        coords: &[
            18, 16, 17, 18, 15, 20, 13, 21, 9, 21, 7, 20, 5, 18, 4, 16, 3, 13, 3, 8,
            4, 5, 5, 3, 7, 1, 9, 0, 13, 0, 15, 1, 17, 3, 18, 5,
        ],
    },
    // 'D'
    RawGlyph {
        count: 15,
        advance: 21,
        coords: &[
            4, 21, 4, 0, -1, -1, 4, 21, 11, 21, 14, 20, 16, 18, 17, 16, 18, 13, 18, 8,
            17, 5, 16, 3, 14, 1, 11, 0, 4, 0,
        ],
    },
    // 'E'
    RawGlyph {
        count: 11,
        advance: 19,
        coords: &[
            4, 21, 4, 0, -1, -1, 4, 21, 17, 21, -1, -1, 4, 11, 12, 11, -1, -1, 4, 0,
            17, 0,
        ],
    },
    // 'F'
    RawGlyph {
        count: 8,
        advance: 18,
        coords: &[
            4, 21, 4, 0, -1, -1, 4, 21, 17, 21, -1, -1, 4, 11, 12, 11,
        ],
    },
    // 'G'
    RawGlyph {
        count: 22,
        advance: 21,
        coords: &[
            18, 16, 17, 18, 15, 20, 13, 21, 9, 21, 7, 20, 5, 18, 4, 16, 3, 13, 3, 8,
            4, 5, 5, 3, 7, 1, 9, 0, 13, 0, 15, 1, 17, 3, 18, 5, 18, 8, -1, -1, 13, 8,
            18, 8,
        ],
    },
    // 'H'
    RawGlyph {
        count: 8,
        advance: 22,
        coords: &[
            4, 21, 4, 0, -1, -1, 18, 21, 18, 0, -1, -1, 4, 11, 18, 11,
        ],
    },
    // 'I'
    RawGlyph {
        count: 2,
        advance: 8,
        coords: &[
            4, 21, 4, 0,
        ],
    },
    // 'J'
    RawGlyph {
        count: 10,
        advance: 16,
        coords: &[
            12, 21, 12, 5, 11, 2, 10, 1, 8, 0, 6, 0, 4, 1, 3, 2, 2, 5, 2, 7,
        ],
    },
    // 'K'
    RawGlyph {
        count: 8,
        advance: 21,
        coords: &[
            4, 21, 4, 0, -1, -1, 18, 21, 4, 7, -1, -1, 9, 12, 18, 0,
        ],
    },
    // 'L'
    RawGlyph {
        count: 5,
        advance: 17,
        coords: &[
            4, 21, 4, 0, -1, -1, 4, 0, 16, 0,
        ],
    },
    // 'M'
    RawGlyph {
        count: 11,
        advance: 24,
        coords: &[
            4, 21, 4, 0, -1, -1, 4, 21, 12, 0, -1, -1, 20, 21, 12, 0, -1, -1, 20, 21,
            20, 0,
        ],
    },
    // 'N'
    RawGlyph {
        count: 8,
        advance: 22,
        coords: &[
            4, 21, 4, 0, -1, -1, 4, 21, 18, 0, -1, -1, 18, 21, 18, 0,
        ],
    },
    // 'O'
    RawGlyph {
        count: 21,
        advance: 22,
        coords: &[
            9, 21, 7, 20, 5, 18, 4, 16, 3, 13, 3, 8, 4, 5, 5, 3, 7, 1, 9, 0, 13, 0,
            15, 1, 17, 3, 18, 5, 19, 8, 19, 13, 18, 16, 17, 18, 15, 20, 13, 21, 9, 21,
        ],
    },
    // 'P'
    RawGlyph {
        count: 13,
        advance: 21,
        coords: &[
            4, 21, 4, 0, -1, -1, 4, 21, 13, 21, 16, 20, 17, 19, 18, 17, 18, 14, 17, 12,
            16, 11, 13, 10, 4, 10,
        ],
    },
    // 'Q'
    RawGlyph {
        count: 24,
        advance: 22,
        coords: &[
            9, 21, 7, 20, 5, 18, 4, 16, 3, 13, 3, 8, 4, 5, 5, 3, 7, 1, 9, 0, 13, 0,
            15, 1, 17, 3, 18, 5, 19, 8, 19, 13, 18, 16, 17, 18, 15, 20, 13, 21, 9, 21,
            -1, -1, 12, 4, 18, -2,
        ],
    },
    // 'R'
    RawGlyph {
        count: 16,
        advance: 21,
        coords: &[
            4, 21, 4, 0, -1, -1, 4, 21, 13, 21, 16, 20, 17, 19, 18, 17, 18, 15, 17, 13,
            16, 12, 13, 11, 4, 11, -1, -1, 11, 11, 18, 0,
        ],
    },
    // 'S'
    RawGlyph {
        count: 20,
        advance: 20,
        coords: &[
            17, 18, 15, 20, 12, 21, 8, 21, 5, 20, 3, 18, 3, 16, 4, 14, 5, 13, 7, 12,
            13, 10, 15, 9, 16, 8, 17, 6, 17, 3, 15, 1, 12, 0, 8, 0, 5, 1, 3, 3,
        ],
    },
    // 'T'
    RawGlyph {
        count: 5,
        advance: 16,
        coords: &[
            8, 21, 8, 0, -1, -1, 1, 21, 15, 21,
        ],
    },
    // 'U'
    RawGlyph {
        count: 10,
        advance: 22,
        coords: &[
            4, 21, 4, 6, 5, 3, 7, 1, 10, 0, 12, 0, 15, 1, 17, 3, 18, 6, 18, 21,
        ],
    },
    // 'V'
    RawGlyph {
        count: 5,
        advance: 18,
        coords: &[
            1, 21, 9, 0, -1, -1, 17, 21, 9, 0,
        ],
    },
    // 'W'
    RawGlyph {
        count: 11,
        advance: 24,
        coords: &[
            2, 21, 7, 0, -1, -1, 12, 21, 7, 0, -1, -1, 12, 21, 17, 0, -1, -1, 22, 21,
            17, 0,
        ],
    },
    // 'X'
    RawGlyph {
        count: 5,
        advance: 20,
        coords: &[
            3, 21, 17, 0, -1, -1, 17, 21, 3, 0,
        ],
    },
    // 'Y'
    RawGlyph {
        count: 6,
        advance: 18,
        coords: &[
            1, 21, 9, 11, 9, 0, -1, -1, 17, 21, 9, 11,
        ],
    },
    // 'Z'
    RawGlyph {
        count: 8,
        advance: 20,
        coords: &[
            17, 21, 3, 0, -1, -1, 3, 21, 17, 21, -1, -1, 3, 0, 17, 0,
        ],
    },
    // '['
    RawGlyph {
        count: 11,
        advance: 14,
        coords: &[
            4, 25, 4, -7, -1, -1, 5, 25, 5, -7, -1, -1, 4, 25, 11, 25, -1, -1, 4, -7,
            11, -7,
        ],
    },
    // '\\'
    RawGlyph {
        count: 2,
        advance: 14,
        coords: &[
            0, 21, 14, -3,
        ],
    },
    // ']'
    RawGlyph {
        count: 11,
        advance: 14,
        coords: &[
            9, 25, 9, -7, -1, -1, 10, 25, 10, -7, -1, -1, 3, 25, 10, 25, -1, -1, 3, -7,
            10, -7,
        ],
    },
    // '^'
    RawGlyph {
        count: 10,
        advance: 16,
        coords: &[
            6, 15, 8, 18, 10, 15, -1, -1, 3, 12, 8, 17, 13, 12, -1, -1, 8, 17, 8, 1,
        ],
    },
    // '_'
    RawGlyph {
        count: 2,
        advance: 16,
        coords: &[
            0, -2, 16, -2,
        ],
    },
    // '`'
    RawGlyph {
        count: 7,
        advance: 10,
        coords: &[
            6, 21, 5, 20, 4, 18, 4, 16, 5, 15, 6, 16, 5, 17,
        ],
    },
    // 'a'
    RawGlyph {
        count: 17,
        advance: 19,
        coords: &[
            15, 14, 15, 0, -1, -1, 15, 11, 13, 13, 11, 14, 8, 14, 6, 13, 4, 11, 3, 8,
            3, 6, 4, 3, 6, 1, 8, 0, 11, 0, 13, 1, 15, 3,
        ],
    },
    // 'b'
    RawGlyph {
        count: 17,
        advance: 19,
        coords: &[
            4, 21, 4, 0, -1, -1, 4, 11, 6, 13, 8, 14, 11, 14, 13, 13, 15, 11, 16, 8,
            16, 6, 15, 3, 13, 1, 11, 0, 8, 0, 6, 1, 4, 3,
        ],
    },
    // 'c'
    RawGlyph {
        count: 14,
        advance: 18,
        coords: &[
            15, 11, 13, 13, 11, 14, 8, 14, 6, 13, 4, 11, 3, 8, 3, 6, 4, 3, 6, 1, 8, 0,
            11, 0, 13, 1, 15, 3,
        ],
    },
    // 'd'
    RawGlyph {
        count: 17,
        advance: 19,
        coords: &[
            15, 21, 15, 0, -1, -1, 15, 11, 13, 13, 11, 14, 8, 14, 6, 13, 4, 11, 3, 8,
            3, 6, 4, 3, 6, 1, 8, 0, 11, 0, 13, 1, 15, 3,
        ],
    },
    // 'e'
    RawGlyph {
        count: 17,
        advance: 18,
        coords: &[
            3, 8, 15, 8, 15, 10, 14, 12, 13, 13, 11, 14, 8, 14, 6, 13, 4, 11, 3, 8,
            3, 6, 4, 3, 6, 1, 8, 0, 11, 0, 13, 1, 15, 3,
        ],
    },
    // 'f'
    RawGlyph {
        count: 8,
        advance: 12,
        coords: &[
            10, 21, 8, 21, 6, 20, 5, 17, 5, 0, -1, -1, 2, 14, 9, 14,
        ],
    },
    // 'g'
    RawGlyph {
        count: 22,
        advance: 19,
        coords: &[
            15, 14, 15, -2, 14, -5, 13, -6, 11, -7, 8, -7, 6, -6, -1, -1, 15, 11,
            13, 13, 11, 14, 8, 14, 6, 13, 4, 11, 3, 8, 3, 6, 4, 3, 6, 1, 8, 0, 11, 0,
            13, 1, 15, 3,
        ],
    },
    // 'h'
    RawGlyph {
        count: 10,
        advance: 19,
        coords: &[
            4, 21, 4, 0, -1, -1, 4, 10, 7, 13, 9, 14, 12, 14, 14, 13, 15, 10, 15, 0,
        ],
    },
    // 'i'
    RawGlyph {
        count: 8,
        advance: 8,
        coords: &[
            3, 21, 4, 20, 5, 21, 4, 22, 3, 21, -1, -1, 4, 14, 4, 0,
        ],
    },
    // 'j'
    RawGlyph {
        count: 11,
        advance: 10,
        coords: &[
            5, 21, 6, 20, 7, 21, 6, 22, 5, 21, -1, -1, 6, 14, 6, -3, 5, -6, 3, -7,
            1, -7,
        ],
    },
    // 'k'
    RawGlyph {
        count: 8,
        advance: 17,
        coords: &[
            4, 21, 4, 0, -1, -1, 14, 14, 4, 4, -1, -1, 8, 8, 15, 0,
        ],
    },
    // 'l'
    RawGlyph {
        count: 2,
        advance: 8,
        coords: &[
            4, 21, 4, 0,
        ],
    },
    // 'm'
    RawGlyph {
        count: 18,
        advance: 30,
        coords: &[
            4, 14, 4, 0, -1, -1, 4, 10, 7, 13, 9, 14, 12, 14, 14, 13, 15, 10, 15, 0,
            -1, -1, 15, 10, 18, 13, 20, 14, 23, 14, 25, 13, 26, 10, 26, 0,
        ],
    },
    // 'n'
    RawGlyph {
        count: 10,
        advance: 19,
        coords: &[
            4, 14, 4, 0, -1, -1, 4, 10, 7, 13, 9, 14, 12, 14, 14, 13, 15, 10, 15, 0,
        ],
    },
    // 'o'
    RawGlyph {
        count: 17,
        advance: 19,
        coords: &[
            8, 14, 6, 13, 4, 11, 3, 8, 3, 6, 4, 3, 6, 1, 8, 0, 11, 0, 13, 1, 15, 3,
            16, 6, 16, 8, 15, 11, 13, 13, 11, 14, 8, 14,
        ],
    },
    // 'p'
    RawGlyph {
        count: 17,
        advance: 19,
        coords: &[
            4, 14, 4, -7, -1, -1, 4, 11, 6, 13, 8, 14, 11, 14, 13, 13, 15, 11, 16, 8,
            16, 6, 15, 3, 13, 1, 11, 0, 8, 0, 6, 1, 4, 3,
        ],
    },
    // 'q'
    RawGlyph {
        count: 17,
        advance: 19,
        coords: &[
            15, 14, 15, -7, -1, -1, 15, 11, 13, 13, 11, 14, 8, 14, 6, 13, 4, 11, 3, 8,
            3, 6, 4, 3, 6, 1, 8, 0, 11, 0, 13, 1, 15, 3,
        ],
    },
    // 'r'
    RawGlyph {
        count: 8,
        advance: 13,
        coords: &[
            4, 14, 4, 0, -1, -1, 4, 8, 5, 11, 7, 13, 9, 14, 12, 14,
        ],
    },
    // 's'
    RawGlyph {
        count: 17,
        advance: 17,
        coords: &[
            14, 11, 13, 13, 10, 14, 7, 14, 4, 13, 3, 11, 4, 9, 6, 8, 11, 7, 13, 6,
            14, 4, 14, 3, 13, 1, 10, 0, 7, 0, 4, 1, 3, 3,
        ],
    },
    // 't'
    RawGlyph {
        count: 8,
        advance: 12,
        coords: &[
            5, 21, 5, 4, 6, 1, 8, 0, 10, 0, -1, -1, 2, 14, 9, 14,
        ],
    },
    // 'u'
    RawGlyph {
        count: 10,
        advance: 19,
        coords: &[
            4, 14, 4, 4, 5, 1, 7, 0, 10, 0, 12, 1, 15, 4, -1, -1, 15, 14, 15, 0,
        ],
    },
    // 'v'
    RawGlyph {
        count: 5,
        advance: 16,
        coords: &[
            2, 14, 8, 0, -1, -1, 14, 14, 8, 0,
        ],
    },
    // 'w'
    RawGlyph {
        count: 11,
        advance: 22,
        coords: &[
            3, 14, 7, 0, -1, -1, 11, 14, 7, 0, -1, -1, 11, 14, 15, 0, -1, -1, 19, 14,
            15, 0,
        ],
    },
    // 'x'
    RawGlyph {
        count: 5,
        advance: 17,
        coords: &[
            3, 14, 14, 0, -1, -1, 14, 14, 3, 0,
        ],
    },
    // 'y'
    RawGlyph {
        count: 9,
        advance: 16,
        coords: &[
            2, 14, 8, 0, -1, -1, 14, 14, 8, 0, 6, -4, 4, -6, 2, -7, 1, -7,
        ],
    },
    // 'z'
    RawGlyph {
        count: 8,
        advance: 17,
        coords: &[
            14, 14, 3, 0, -1, -1, 3, 14, 14, 14, -1, -1, 3, 0, 14, 0,
        ],
    },
    // '{'
    RawGlyph {
        count: 39,
        advance: 14,
        coords: &[
            9, 25, 7, 24, 6, 23, 5, 21, 5, 19, 6, 17, 7, 16, 8, 14, 8, 12, 6, 10,
            -1, -1, 7, 24, 6, 22, 6, 20, 7, 18, 8, 17, 9, 15, 9, 13, 8, 11, 4, 9, 8, 7,
            9, 5, 9, 3, 8, 1, 7, 0, 6, -2, 6, -4, 7, -6, -1, -1, 6, 8, 8, 6, 8, 4, 7, 2,
            6, 1, 5, -1, 5, -3, 6, -5, 7, -6, 9, -7,
        ],
    },
    // '|'
    RawGlyph {
        count: 2,
        advance: 8,
        coords: &[
            4, 25, 4, -7,
        ],
    },
    // '}'
    RawGlyph {
        count: 39,
        advance: 14,
        coords: &[
            5, 25, 7, 24, 8, 23, 9, 21, 9, 19, 8, 17, 7, 16, 6, 14, 6, 12, 8, 10,
            -1, -1, 7, 24, 8, 22, 8, 20, 7, 18, 6, 17, 5, 15, 5, 13, 6, 11, 10, 9, 6, 7,
            5, 5, 5, 3, 6, 1, 7, 0, 8, -2, 8, -4, 7, -6, -1, -1, 8, 8, 6, 6, 6, 4, 7, 2,
            8, 1, 9, -1, 9, -3, 8, -5, 7, -6, 5, -7,
        ],
    },
    // '~'
    RawGlyph {
        count: 23,
        advance: 24,
        coords: &[
            3, 6, 3, 8, 4, 11, 6, 12, 8, 12, 10, 11, 14, 8, 16, 7, 18, 7, 20, 8, 21, 10,
            -1, -1, 3, 8, 4, 10, 6, 11, 8, 11, 10, 10, 14, 7, 16, 6, 18, 6, 20, 7,
            21, 10, 21, 12,
        ],
    },
];
