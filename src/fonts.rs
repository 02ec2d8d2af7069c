use phf::phf_map;

/// One custom character: 8 rows top to bottom. The low 5 bits of each
/// row are the columns, bit 4 leftmost. Rows never exceed 0b11111.
pub type Glyph = [u8; 8];

/// Substituted when a character has no entry in [`FONT_5X8`].
pub const UNKNOWN_GLYPH: Glyph = [
    0b01110, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b01110, 0b00000,
];

pub static FONT_5X8: phf::Map<char, Glyph> = phf_map! {
    'A' => [0b01110, 0b10001, 0b11111, 0b10001, 0b10001, 0b00000, 0b00000, 0b00000],
    'B' => [0b11110, 0b10001, 0b11110, 0b10001, 0b11110, 0b00000, 0b00000, 0b00000],
    'C' => [0b01110, 0b10000, 0b10000, 0b10000, 0b01110, 0b00000, 0b00000, 0b00000],
    'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b11110, 0b00000, 0b00000, 0b00000],
    'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b11111, 0b00000, 0b00000, 0b00000],
    'F' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b00000, 0b00000, 0b00000],
    'G' => [0b01110, 0b10000, 0b10110, 0b10001, 0b01110, 0b00000, 0b00000, 0b00000],
    'H' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b00000, 0b00000, 0b00000],
    'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b01110, 0b00000, 0b00000, 0b00000],
    'J' => [0b00111, 0b00010, 0b00010, 0b10010, 0b01100, 0b00000, 0b00000, 0b00000],
    'K' => [0b10001, 0b10010, 0b11100, 0b10010, 0b10001, 0b00000, 0b00000, 0b00000],
    'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b11111, 0b00000, 0b00000, 0b00000],
    'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b00000, 0b00000, 0b00000],
    'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b00000, 0b00000, 0b00000],
    'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b01110, 0b00000, 0b00000, 0b00000],
    'P' => [0b11110, 0b10001, 0b11110, 0b10000, 0b10000, 0b00000, 0b00000, 0b00000],
    // tail stroke in row 5
    'Q' => [0b01110, 0b10001, 0b10011, 0b10101, 0b01110, 0b00010, 0b00000, 0b00000],
    'R' => [0b11110, 0b10001, 0b11110, 0b10010, 0b10001, 0b00000, 0b00000, 0b00000],
    'S' => [0b01111, 0b10000, 0b01110, 0b00001, 0b11110, 0b00000, 0b00000, 0b00000],
    'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00000, 0b00000],
    'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b01110, 0b00000, 0b00000, 0b00000],
    'V' => [0b10001, 0b10001, 0b01010, 0b01010, 0b00100, 0b00000, 0b00000, 0b00000],
    'W' => [0b10001, 0b10001, 0b10101, 0b11011, 0b10001, 0b00000, 0b00000, 0b00000],
    'X' => [0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000],
    'Y' => [0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00000, 0b00000, 0b00000],
    'Z' => [0b11111, 0b00010, 0b00100, 0b01000, 0b11111, 0b00000, 0b00000, 0b00000],
    '0' => [0b01110, 0b10001, 0b10001, 0b10001, 0b01110, 0b00000, 0b00000, 0b00000],
    '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b01110, 0b00000, 0b00000, 0b00000],
    '2' => [0b01110, 0b10001, 0b00100, 0b01000, 0b11111, 0b00000, 0b00000, 0b00000],
    '3' => [0b11111, 0b00001, 0b00110, 0b00001, 0b11111, 0b00000, 0b00000, 0b00000],
    '4' => [0b00010, 0b00110, 0b01010, 0b11111, 0b00010, 0b00000, 0b00000, 0b00000],
    '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b11110, 0b00000, 0b00000, 0b00000],
    '6' => [0b01110, 0b10000, 0b11110, 0b10001, 0b01110, 0b00000, 0b00000, 0b00000],
    '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000],
    '8' => [0b01110, 0b10001, 0b01110, 0b10001, 0b01110, 0b00000, 0b00000, 0b00000],
    '9' => [0b01110, 0b10001, 0b01111, 0b00001, 0b01110, 0b00000, 0b00000, 0b00000],
    ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    '!' => [0b00100, 0b00100, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000, 0b00000],
    '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000, 0b00000],
    ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01000, 0b00100, 0b00000, 0b00000],
    '?' => [0b01110, 0b10001, 0b00100, 0b01000, 0b00100, 0b00000, 0b00000, 0b00000],
    '+' => [0b00000, 0b00100, 0b01110, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000],
    '-' => [0b00000, 0b00000, 0b01110, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    '=' => [0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000, 0b00000],
    '/' => [0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000, 0b00000, 0b00000],
    '\\' => [0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b00000, 0b00000, 0b00000],
    ':' => [0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000],
    ';' => [0b00000, 0b00100, 0b00000, 0b01000, 0b00100, 0b00000, 0b00000, 0b00000],
    '(' => [0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00000, 0b00000, 0b00000],
    ')' => [0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b00000, 0b00000, 0b00000],
    '[' => [0b11110, 0b10000, 0b10000, 0b10000, 0b11110, 0b00000, 0b00000, 0b00000],
    ']' => [0b01111, 0b00001, 0b00001, 0b00001, 0b01111, 0b00000, 0b00000, 0b00000],
    '<' => [0b00010, 0b00100, 0b01000, 0b00100, 0b00010, 0b00000, 0b00000, 0b00000],
    '>' => [0b01000, 0b00100, 0b00010, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000],
    '@' => [0b01110, 0b10011, 0b10101, 0b10111, 0b01110, 0b00000, 0b00000, 0b00000],
    '#' => [0b00000, 0b01010, 0b11111, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000],
    '$' => [0b00100, 0b01111, 0b01000, 0b00110, 0b11100, 0b00010, 0b00000, 0b00000],
    '%' => [0b10001, 0b10011, 0b00100, 0b11001, 0b10001, 0b00000, 0b00000, 0b00000],
    '^' => [0b00100, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    '&' => [0b01110, 0b10000, 0b01110, 0b10001, 0b01110, 0b00000, 0b00000, 0b00000],
    '*' => [0b00000, 0b00100, 0b10101, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000],
    '_' => [0b00000, 0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
    '`' => [0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    '~' => [0b01010, 0b10101, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
};
