use std::{
    env,
    io::{self, Write as _},
    process,
};

use anyhow::{Context as _, Result};
use env_logger::Env;
use log::{error, warn};

use crate::codegen::MAX_CUSTOM_CHARS;

mod codegen;
mod fonts;

const HEADER: &str = "\
# --- Custom Character Byte Array Definitions (for Arduino sketch) ---
# Copy and paste these definitions into your Arduino sketch before setup().
# Each definition creates an 8-byte array representing a 5x8 custom character.
#
# Then, in your Arduino sketch's setup() function, map these arrays to
# specific custom character locations (0-7) using `lcd.createChar()`:
# Example mapping:
#   lcd.createChar(0, custom0); // Maps 'custom0' array to character index 0
#   lcd.createChar(1, custom1); // Maps 'custom1' array to character index 1
#   // ... up to lcd.createChar(7, custom7);
#
# In your Arduino code, you can then display these custom characters by
# printing their corresponding byte index (e.g., '\\x00' for custom0, '\\x01' for custom1).";

const EXPLANATION: &str = "\
# --- Explanation of a single letter to 8-byte array mapping ---
# Let's take Capital 'A' as an example.
# Its pixel pattern is defined as: [0b01110, 0b10001, 0b11111, 0b10001, 0b10001, 0b00000, 0b00000, 0b00000]
#
# Each '0b...' value represents one row of the character's 5x8 grid.
# There are 8 such values, one for each row (Row 0 to Row 7).
#
# The 5 least significant bits (rightmost bits, from bit 0 to bit 4) map directly
# to the 5 pixels in that specific row (from left to right, pixel 0 to pixel 4).
# A '1' in a bit position means the corresponding pixel is ON (lit).
# A '0' means the pixel is OFF (unlit).
#
# For the first byte, 0b01110 (which is decimal 14):
#   Bit 4 (most significant of the 5 pixels): 0 (Pixel at column 0 is OFF)
#   Bit 3: 1 (Pixel at column 1 is ON)
#   Bit 2: 1 (Pixel at column 2 is ON)
#   Bit 1: 1 (Pixel at column 3 is ON)
#   Bit 0 (least significant of the 5 pixels): 0 (Pixel at column 4 is OFF)
#
# This forms the top row of the 'A' character: '. X X X .' (where 'X' is a lit pixel and '.' is unlit).
# The bits 5, 6, and 7 (most significant bits of the 8-bit byte) are typically 0
# because standard LCD custom characters are only 5 pixels wide.
# You can design any custom character on a 5x8 grid, convert each row to its 5-bit
# binary representation, and then add it to the FONT_5X8 table.";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "lcdchars".into());
    let Some(text) = args.next() else {
        eprintln!("Usage: {program} \"YOUR_TEXT_HERE\"");
        eprintln!("Example: {program} \"HELLO WORLD!\"");
        eprintln!();
        eprintln!("Note: Only uppercase letters, numbers, and common symbols are supported.");
        eprintln!("      Lowercase letters will be converted to uppercase. Refer to the");
        eprintln!("      FONT_5X8 table in src/fonts.rs to add or modify characters.");
        process::exit(1);
    };

    if let Err(err) = run(&text) {
        error!("{err:?}");
        process::exit(1);
    }
}

fn run(text: &str) -> Result<()> {
    let listing = codegen::listing(text);

    for &ch in &listing.substituted {
        warn!("character {ch:?} is not in the 5x8 font, using the placeholder glyph");
    }
    if let Some(&first) = listing.skipped.first() {
        warn!(
            "the display holds at most {MAX_CUSTOM_CHARS} custom characters, \
            skipping {first:?} and everything after it"
        );
    }

    let mut out = io::stdout().lock();
    writeln!(out, "{HEADER}").context("writing header")?;
    writeln!(out).context("writing header")?;
    for decl in &listing.declarations {
        writeln!(out, "{decl}").context("writing declaration")?;
    }
    writeln!(out).context("writing explanation")?;
    writeln!(out, "{EXPLANATION}").context("writing explanation")?;
    Ok(())
}
