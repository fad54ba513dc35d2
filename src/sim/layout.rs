//! Block Layout Generator
//!
//! Converts the static text table into the block set: each character becomes
//! a 5-row glyph bitmap, each set bit one small block. Pure function of the
//! canvas width; replaces any prior block set on every rebuild.

use super::state::{Block, BlockColor};

/// One line of text in the layout, with its vertical offset and glyph scale
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub text: &'static str,
    pub y: f32,
    pub size: f32,
}

/// The banner the blocks spell out
pub const LINES: &[Line] = &[
    Line { text: "ARCTIC", y: 70.0, size: 15.0 },
    Line { text: "PENGUIN", y: 130.0, size: 15.0 },
    Line { text: "STUDIO", y: 190.0, size: 15.0 },
    Line { text: "MAKING GAMES", y: 250.0, size: 10.0 },
    Line { text: "SINCE 1998", y: 290.0, size: 10.0 },
];

/// 5-row bitmap for a character. Unknown characters fall back to `O`.
fn glyph(c: char) -> [&'static str; 5] {
    match c {
        'A' => ["  ###  ", " ## ## ", "##   ##", "#######", "##   ##"],
        'B' => ["###### ", "##   ##", "###### ", "##   ##", "###### "],
        'C' => [" ##### ", "###    ", "###    ", "###    ", " ##### "],
        'D' => ["###### ", "##   ##", "##   ##", "##   ##", "###### "],
        'E' => ["#######", "###    ", "#####  ", "###    ", "#######"],
        'F' => ["#######", "###    ", "#####  ", "###    ", "###    "],
        'G' => [" ##### ", "###    ", "### ###", "###  ##", " ##### "],
        'H' => ["##   ##", "##   ##", "#######", "##   ##", "##   ##"],
        'I' => ["#######", "  ###  ", "  ###  ", "  ###  ", "#######"],
        'J' => ["    ###", "    ###", "    ###", "##  ###", " ##### "],
        'K' => ["##   ##", "##  ## ", "##### ", "##  ## ", "##   ##"],
        'L' => ["###    ", "###    ", "###    ", "###    ", "#######"],
        'M' => ["##   ##", "### ###", "## # ##", "##   ##", "##   ##"],
        'N' => ["##   ##", "###  ##", "## # ##", "##  ###", "##   ##"],
        'O' => [" ##### ", "##   ##", "##   ##", "##   ##", " ##### "],
        'P' => ["###### ", "##   ##", "###### ", "###    ", "###    "],
        'R' => ["###### ", "##   ##", "###### ", "##  ## ", "##   ##"],
        'S' => [" ######", "###    ", " ##### ", "    ###", "###### "],
        'T' => ["#######", "  ###  ", "  ###  ", "  ###  ", "  ###  "],
        'U' => ["##   ##", "##   ##", "##   ##", "##   ##", " ##### "],
        'V' => ["##   ##", "##   ##", "##   ##", " ## ## ", "  ###  "],
        'W' => ["##   ##", "##   ##", "## # ##", "### ###", "##   ##"],
        'X' => ["##   ##", " ## ## ", "  ###  ", " ## ## ", "##   ##"],
        'Y' => ["##   ##", " ## ## ", "  ###  ", "  ###  ", "  ###  "],
        'Z' => ["#######", "    ## ", "  ###  ", " ##    ", "#######"],
        '1' => ["  ###  ", " ####  ", "  ###  ", "  ###  ", "#######"],
        '9' => [" ##### ", "##   ##", " ######", "    ###", " ##### "],
        '8' => [" ##### ", "##   ##", " ##### ", "##   ##", " ##### "],
        '0' => [" ##### ", "##   ##", "##   ##", "##   ##", " ##### "],
        _ => glyph('O'),
    }
}

/// Emit blocks for one character at the given origin
fn emit_glyph(blocks: &mut Vec<Block>, c: char, x: f32, y: f32, size: f32, color: BlockColor) {
    let cell = size / 2.0;
    for (row, bits) in glyph(c).iter().enumerate() {
        for (col, bit) in bits.chars().enumerate() {
            if bit == '#' {
                blocks.push(Block {
                    x: x + col as f32 * cell,
                    y: y + row as f32 * cell,
                    width: cell,
                    height: cell,
                    color,
                    alive: true,
                });
            }
        }
    }
}

/// Build the full block set for the standard [`LINES`] table
pub fn build_blocks(canvas_width: f32) -> Vec<Block> {
    build_blocks_for_lines(LINES, canvas_width)
}

/// Build the block set for an arbitrary line table.
///
/// Each line is centered horizontally. Spaces advance the cursor without
/// emitting blocks; the palette cycles on the character index within the
/// line, spaces included.
pub fn build_blocks_for_lines(lines: &[Line], canvas_width: f32) -> Vec<Block> {
    let mut blocks = Vec::new();

    for line in lines {
        let letter_width = line.size * 5.0;
        let letter_spacing = line.size * 1.5;
        let total_width =
            line.text.chars().count() as f32 * (letter_width + letter_spacing) - letter_spacing;
        let mut x = (canvas_width - total_width) / 2.0;

        for (i, c) in line.text.chars().enumerate() {
            if c != ' ' {
                emit_glyph(&mut blocks, c, x, line.y, line.size, BlockColor::for_index(i));
            }
            x += letter_width + letter_spacing;
        }
    }

    blocks
}
