//! Windowed front end drawing with macroquad.

use macroquad::prelude::*;

use crate::domain::Board;

pub const CELL_SIZE: f32 = 12.0;
pub const STATUS_HEIGHT: f32 = 28.0;

/// Window side length that fits a board of `size` plus the status line
pub fn window_extent(size: usize) -> (i32, i32) {
    let side = size as f32 * CELL_SIZE;
    (side as i32, (side + STATUS_HEIGHT) as i32)
}

/// Draw every alive cell as a filled square, dead cells as a faint grid
pub fn draw_board(board: &Board) {
    let alive_color = Color::from_rgba(0, 255, 150, 255); // Bright green
    let dead_cell_color = Color::from_rgba(15, 15, 15, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);

    for (pos, cell) in board.iter_cells() {
        let x = pos.col as f32 * CELL_SIZE;
        let y = pos.row as f32 * CELL_SIZE + STATUS_HEIGHT;

        let color = if cell.is_alive() { alive_color } else { dead_cell_color };
        draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, color);
        draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 1.0, grid_line_color);
    }
}

/// Generation counter and population above the board
pub fn draw_status(board: &Board, generation: u64) {
    let text = format!("Gen {}  Pop {}", generation, board.population());
    draw_text(&text, 8.0, STATUS_HEIGHT - 8.0, 20.0, WHITE);
}
