//! Tile colors.
//!
//! Every tile value up to 2048 has its own background; anything larger
//! reuses the 2048 color. Small tiles (2 and 4) take dark text on their
//! pale backgrounds, everything else takes light text.

use crate::fb::{CellStyle, Rgb};

/// Window background around the board.
pub const WINDOW_BG: Rgb = Rgb::new(247, 244, 234);

/// Board background, visible as the gutter between tiles.
pub const BOARD_BG: Rgb = Rgb::new(155, 136, 120);

/// Background of an empty cell.
pub const EMPTY_CELL_BG: Rgb = Rgb::new(189, 172, 151);

/// Text on 2 and 4 tiles.
pub const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);

/// Text on tiles from 8 up.
pub const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Tiles above this value drop the bold weight to keep wide numbers compact.
pub const BOLD_MAX: u32 = 64;

const TILE_BG: [(u32, Rgb); 11] = [
    (2, Rgb::new(238, 228, 218)),
    (4, Rgb::new(237, 224, 200)),
    (8, Rgb::new(242, 177, 121)),
    (16, Rgb::new(245, 149, 99)),
    (32, Rgb::new(246, 124, 95)),
    (64, Rgb::new(246, 94, 59)),
    (128, Rgb::new(237, 207, 114)),
    (256, Rgb::new(237, 204, 97)),
    (512, Rgb::new(237, 200, 80)),
    (1024, Rgb::new(237, 197, 63)),
    (2048, Rgb::new(237, 194, 46)),
];

/// Background color of a tile. Values above 2048 share the 2048 color.
pub fn tile_background(value: u32) -> Rgb {
    if value == 0 {
        return EMPTY_CELL_BG;
    }
    TILE_BG
        .iter()
        .find(|&&(v, _)| v >= value)
        .unwrap_or(&TILE_BG[TILE_BG.len() - 1])
        .1
}

pub fn tile_text(value: u32) -> Rgb {
    if value <= 4 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Full cell style for a tile holding `value`.
pub fn tile_style(value: u32) -> CellStyle {
    let style = CellStyle::new(tile_text(value), tile_background(value));
    if value <= BOLD_MAX {
        style.bold()
    } else {
        style
    }
}
