//! Grid tests - slide/merge rules and their invariants

use proptest::prelude::*;
use tui_2048::core::{Grid, GridError};
use tui_2048::types::{Direction, CELL_COUNT};

fn tile() -> impl Strategy<Value = u32> + Clone {
    prop_oneof![
        3 => Just(0u32),
        5 => (1u32..=11).prop_map(|k| 1 << k),
    ]
}

fn grid() -> impl Strategy<Value = Grid> {
    prop::array::uniform16(tile()).prop_map(Grid::from_cells)
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

/// Straightforward list-based model of one line pushed toward index 0.
fn reference_line(line: [u32; 4]) -> [u32; 4] {
    let tiles: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            out.push(tiles[i] * 2);
            i += 2;
        } else {
            out.push(tiles[i]);
            i += 1;
        }
    }
    out.resize(4, 0);
    [out[0], out[1], out[2], out[3]]
}

fn column(rows: [[u32; 4]; 4], col: usize) -> [u32; 4] {
    [rows[0][col], rows[1][col], rows[2][col], rows[3][col]]
}

fn row_after(values: [u32; 4], direction: Direction) -> [u32; 4] {
    let mut grid = Grid::from_rows([values, [0; 4], [0; 4], [0; 4]]);
    grid.slide(direction);
    grid.rows()[0]
}

fn column_after(values: [u32; 4], direction: Direction) -> [u32; 4] {
    let mut rows = [[0; 4]; 4];
    for (r, &v) in values.iter().enumerate() {
        rows[r][1] = v;
    }
    let mut grid = Grid::from_rows(rows);
    grid.slide(direction);
    let after = grid.rows();
    [after[0][1], after[1][1], after[2][1], after[3][1]]
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert!(grid.is_empty());
    assert_eq!(grid.empty_count(), CELL_COUNT);
    assert_eq!(grid.empty_cells().len(), CELL_COUNT);
    assert_eq!(grid.max_tile(), 0);
}

#[test]
fn test_grid_linear_index_is_row_major() {
    let mut grid = Grid::new();
    assert!(grid.set(2, 3, 8));
    assert_eq!(grid.value_at(2 * 4 + 3), Ok(8));
    assert_eq!(grid.get(2, 3), Some(8));
}

#[test]
fn test_grid_out_of_bounds() {
    let mut grid = Grid::new();
    assert_eq!(grid.get(4, 0), None);
    assert_eq!(grid.get(0, 4), None);
    assert!(!grid.set(4, 0, 2));
    assert_eq!(grid.value_at(16), Err(GridError::OutOfRange { index: 16 }));
    assert_eq!(
        grid.value_at(usize::MAX),
        Err(GridError::OutOfRange { index: usize::MAX })
    );
}

#[test]
fn test_pair_merges_and_neighbour_slides_without_remerging() {
    assert_eq!(row_after([2, 2, 4, 0], Direction::Left), [4, 4, 0, 0]);
}

#[test]
fn test_three_equal_tiles_merge_once() {
    assert_eq!(row_after([2, 2, 2, 0], Direction::Left), [4, 2, 0, 0]);
    assert_eq!(row_after([2, 2, 2, 0], Direction::Right), [0, 0, 2, 4]);
}

#[test]
fn test_merged_tile_does_not_merge_again() {
    assert_eq!(row_after([4, 2, 2, 0], Direction::Left), [4, 4, 0, 0]);
    assert_eq!(row_after([8, 4, 4, 0], Direction::Left), [8, 8, 0, 0]);
}

#[test]
fn test_already_at_edge_is_unchanged() {
    assert_eq!(row_after([0, 0, 0, 2], Direction::Right), [0, 0, 0, 2]);
}

#[test]
fn test_vertical_moves_use_columns() {
    assert_eq!(column_after([2, 0, 2, 4], Direction::Up), [4, 4, 0, 0]);
    assert_eq!(column_after([2, 0, 2, 4], Direction::Down), [0, 0, 4, 4]);
}

#[test]
fn test_tiles_grow_past_2048() {
    assert_eq!(row_after([2048, 2048, 0, 0], Direction::Left), [4096, 0, 0, 0]);
}

#[test]
fn test_display_dump() {
    let grid = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 16]]);
    let text = grid.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), ["2", "-", "-", "-"]);
    assert_eq!(lines[3].split_whitespace().collect::<Vec<_>>(), ["-", "-", "-", "16"]);
}

proptest! {
    #[test]
    fn prop_sum_is_conserved(g in grid(), dir in direction()) {
        prop_assert_eq!(g.slid(dir).sum(), g.sum());
    }

    #[test]
    fn prop_cells_stay_zero_or_powers_of_two(g in grid(), dir in direction()) {
        for &v in g.slid(dir).cells() {
            prop_assert!(v == 0 || v.is_power_of_two());
        }
    }

    #[test]
    fn prop_rows_match_reference_model(g in grid()) {
        let after = g.slid(Direction::Left).rows();
        for (row, expected) in g.rows().into_iter().zip(after) {
            prop_assert_eq!(reference_line(row), expected);
        }

        let after = g.slid(Direction::Right).rows();
        for (row, expected) in g.rows().into_iter().zip(after) {
            let mut reversed = row;
            reversed.reverse();
            let mut model = reference_line(reversed);
            model.reverse();
            prop_assert_eq!(model, expected);
        }
    }

    #[test]
    fn prop_columns_match_reference_model(g in grid()) {
        let before = g.rows();

        let up = g.slid(Direction::Up).rows();
        for col in 0..4 {
            prop_assert_eq!(reference_line(column(before, col)), column(up, col));
        }

        let down = g.slid(Direction::Down).rows();
        for col in 0..4 {
            let mut reversed = column(before, col);
            reversed.reverse();
            let mut model = reference_line(reversed);
            model.reverse();
            prop_assert_eq!(model, column(down, col));
        }
    }

    #[test]
    fn prop_unchanged_slide_is_identity(g in grid(), dir in direction()) {
        let mut moved = g;
        let changed = moved.slide(dir);
        prop_assert_eq!(changed, moved != g);
        if !changed {
            prop_assert_eq!(moved, g);
        }
    }

    #[test]
    fn prop_slide_never_creates_tiles(g in grid(), dir in direction()) {
        prop_assert!(g.slid(dir).empty_count() >= g.empty_count());
    }
}
