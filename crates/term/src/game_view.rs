//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, SessionStatus};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::{self, BOARD_BG, EMPTY_CELL_BG, WINDOW_BG};
use crate::types::GRID_SIZE;

/// Gap between tiles (and around the outer edge), in terminal cells.
const GUTTER: u16 = 1;

/// Narrowest tile that still fits a four-digit value with a margin.
pub const MIN_CELL_W: u16 = 5;

/// Largest tile size accepted; keeps board arithmetic well inside `u16`.
pub const MAX_CELL_W: u16 = 64;
pub const MAX_CELL_H: u16 = 32;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board sits on screen, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 looks roughly square with typical terminal glyphs.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(MIN_CELL_W, MAX_CELL_W),
            cell_h: cell_h.clamp(1, MAX_CELL_H),
        }
    }

    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let n = GRID_SIZE as u16;
        let width = n * self.cell_w + (n + 1) * GUTTER;
        let height = n * self.cell_h + (n + 1) * GUTTER;
        BoardLayout {
            x: viewport.width.saturating_sub(width) / 2,
            y: viewport.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// Top-left corner of tile (row, col) for a given board layout.
    pub fn tile_origin(&self, layout: BoardLayout, row: u16, col: u16) -> (u16, u16) {
        (
            layout.x + GUTTER + col * (self.cell_w + GUTTER),
            layout.y + GUTTER + row * (self.cell_h + GUTTER),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to the
    /// viewport and cleared first.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(palette::DARK_TEXT, WINDOW_BG).cell(' '));

        let layout = self.layout(viewport);
        let board = CellStyle::new(BOARD_BG, BOARD_BG);
        fb.fill_rect(layout.x, layout.y, layout.width, layout.height, ' ', board);

        for (row, values) in snap.cells.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                self.draw_tile(fb, layout, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        match snap.status {
            SessionStatus::Won => self.draw_overlay(fb, layout, "YOU WON!"),
            SessionStatus::Lost => self.draw_overlay(fb, layout, "GAME OVER"),
            SessionStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, layout: BoardLayout, row: u16, col: u16, value: u32) {
        let (x, y) = self.tile_origin(layout, row, col);
        if value == 0 {
            let empty = CellStyle::new(EMPTY_CELL_BG, EMPTY_CELL_BG);
            fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', empty);
            return;
        }

        let style = palette::tile_style(value);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
        fb.put_centered(x, y + self.cell_h / 2, self.cell_w, &value.to_string(), style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: BoardLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.width).saturating_add(3);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(BOARD_BG, WINDOW_BG).bold();
        let value = CellStyle::new(palette::DARK_TEXT, WINDOW_BG);

        let title = CellStyle::new(Rgb::new(237, 194, 46), WINDOW_BG).bold();
        let max_tile = snap.max_tile.to_string();
        let moves = snap.moves.to_string();
        let lines: [(&str, CellStyle, u16); 9] = [
            ("2048", title, 2),
            ("MAX TILE", label, 1),
            (&max_tile, value, 2),
            ("MOVES", label, 1),
            (&moves, value, 2),
            ("KEYS", label, 1),
            ("arrows/hjkl/wasd", value, 1),
            ("r  restart", value, 1),
            ("q  quit", value, 1),
        ];

        let mut y = layout.y;
        for (text, style, gap) in lines {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, text, style);
            y = y.saturating_add(gap);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: BoardLayout, text: &str) {
        let mid_y = layout.y.saturating_add(layout.height / 2);
        let banner = CellStyle::new(palette::LIGHT_TEXT, Rgb::new(60, 58, 50)).bold();
        fb.fill_rect(layout.x, mid_y.saturating_sub(1), layout.width, 3, ' ', banner);
        fb.put_centered(layout.x, mid_y, layout.width, text, banner);
        let hint = CellStyle::new(Rgb::new(200, 196, 186), Rgb::new(60, 58, 50));
        fb.put_centered(layout.x, mid_y.saturating_add(1), layout.width, "r: new game", hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_centres_board() {
        let view = GameView::default();
        // 4 tiles of 7 plus 5 gutters = 33 wide; 4 of 3 plus 5 = 17 tall.
        let layout = view.layout(Viewport::new(43, 21));
        assert_eq!(
            layout,
            BoardLayout {
                x: 5,
                y: 2,
                width: 33,
                height: 17
            }
        );
    }

    #[test]
    fn tile_origins_step_by_cell_plus_gutter() {
        let view = GameView::default();
        let layout = view.layout(Viewport::new(33, 17));
        assert_eq!(view.tile_origin(layout, 0, 0), (1, 1));
        assert_eq!(view.tile_origin(layout, 1, 2), (17, 5));
    }

    #[test]
    fn narrow_cells_are_widened() {
        let view = GameView::new(2, 0);
        assert_eq!((view.cell_w, view.cell_h), (MIN_CELL_W, 1));
    }

    #[test]
    fn huge_cells_are_capped() {
        let view = GameView::new(20_000, u16::MAX);
        assert_eq!((view.cell_w, view.cell_h), (MAX_CELL_W, MAX_CELL_H));

        // 4 * 64 + 5 = 261 wide, 4 * 32 + 5 = 133 tall: larger than the viewport.
        let layout = view.layout(Viewport::new(80, 24));
        assert_eq!((layout.x, layout.y, layout.width, layout.height), (0, 0, 261, 133));
        assert_eq!(view.tile_origin(layout, 3, 3), (196, 100));
    }
}
