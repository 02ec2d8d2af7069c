use crate::fonts::{self, Glyph};

/// HD44780-class displays hold at most 8 custom characters (CGRAM slots 0-7).
pub const MAX_CUSTOM_CHARS: usize = 8;

/// One conversion pass over the input text.
#[derive(Debug)]
pub struct Listing {
    /// Declarations in slot order, one per processed character.
    pub declarations: Vec<String>,
    /// Characters that had no glyph and got [`fonts::UNKNOWN_GLYPH`] instead.
    pub substituted: Vec<char>,
    /// Input tail beyond the slot limit, in order.
    pub skipped: Vec<char>,
}

/// Renders one slot's declaration, e.g.
/// `byte custom0[8] = { 0b01110, 0b10001, ... };`, each row zero-padded
/// to 5 binary digits.
pub fn char_array(slot: usize, glyph: &Glyph) -> String {
    let rows = glyph
        .iter()
        .map(|row| format!("0b{row:05b}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("byte custom{slot}[8] = {{ {rows} }};")
}

/// Uppercases `text` and assigns the first [`MAX_CUSTOM_CHARS`]
/// characters to slots in order of appearance. Repeated characters get
/// separate slots.
pub fn listing(text: &str) -> Listing {
    let text = text.to_ascii_uppercase();
    let mut chars = text.chars();

    let mut declarations = Vec::new();
    let mut substituted = Vec::new();
    for (slot, ch) in chars.by_ref().take(MAX_CUSTOM_CHARS).enumerate() {
        let glyph = match fonts::FONT_5X8.get(&ch) {
            Some(glyph) => glyph,
            None => {
                substituted.push(ch);
                &fonts::UNKNOWN_GLYPH
            }
        };
        declarations.push(char_array(slot, glyph));
    }

    Listing {
        declarations,
        substituted,
        skipped: chars.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts;

    #[test]
    fn capital_a_declaration() {
        let listing = listing("A");
        assert_eq!(
            listing.declarations,
            ["byte custom0[8] = { 0b01110, 0b10001, 0b11111, 0b10001, 0b10001, 0b00000, 0b00000, 0b00000 };"]
        );
        assert!(listing.substituted.is_empty());
        assert!(listing.skipped.is_empty());
    }

    #[test]
    fn char_array_pads_rows_to_five_digits() {
        assert_eq!(
            char_array(3, &[0, 1, 2, 3, 4, 30, 31, 0]),
            "byte custom3[8] = { 0b00000, 0b00001, 0b00010, 0b00011, 0b00100, 0b11110, 0b11111, 0b00000 };"
        );
    }

    #[test]
    fn slots_follow_input_order() {
        let listing = listing("HI!");
        assert_eq!(listing.declarations.len(), 3);
        for (slot, decl) in listing.declarations.iter().enumerate() {
            assert!(decl.starts_with(&format!("byte custom{slot}[8] = {{ ")));
        }
    }

    #[test]
    fn uppercases_before_lookup() {
        assert_eq!(listing("hello").declarations, listing("HELLO").declarations);
        assert!(listing("hello").substituted.is_empty());
    }

    #[test]
    fn truncates_to_eight_slots() {
        let listing = listing("HELLO WORLD!");
        assert_eq!(listing.declarations.len(), MAX_CUSTOM_CHARS);
        assert_eq!(listing.skipped, ['R', 'L', 'D', '!']);
    }

    #[test]
    fn repeated_characters_take_separate_slots() {
        let listing = listing("OO");
        assert_eq!(listing.declarations.len(), 2);
        assert!(listing.declarations[0].starts_with("byte custom0"));
        assert!(listing.declarations[1].starts_with("byte custom1"));
        let rows = |decl: &str| decl.split_once('{').unwrap().1.to_owned();
        assert_eq!(
            rows(&listing.declarations[0]),
            rows(&listing.declarations[1])
        );
    }

    #[test]
    fn unmapped_character_gets_placeholder() {
        let listing = listing("Ä");
        assert_eq!(listing.substituted, ['Ä']);
        assert_eq!(
            listing.declarations,
            [char_array(0, &fonts::UNKNOWN_GLYPH)]
        );
    }
}
