/// Conway's Game of Life (B3/S23).
///
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn next_state(currently_alive: bool, live_neighbors: u8) -> bool {
    match (currently_alive, live_neighbors) {
        (true, 2 | 3) => true,
        (false, 3) => true,
        _ => false,
    }
}
