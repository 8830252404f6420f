use common::types::Edge;

pub const GRID_WIDTH: usize = 200;
pub const GRID_HEIGHT: usize = 200;

/// Generates a synthetic floor plan: a GRID_WIDTH x GRID_HEIGHT grid of
/// rooms, each connected to its right and downward neighbor.
///
/// Distances and probabilities are varied by index so the compiler cannot
/// fold the traversal away during benchmarking.
pub fn generate_grid_edges() -> Vec<Edge<String>> {
    let mut edges = Vec::with_capacity(2 * GRID_WIDTH * GRID_HEIGHT);
    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            if x + 1 < GRID_WIDTH {
                edges.push((
                    room_name(x, y),
                    room_name(x + 1, y),
                    distance_at(x, y),
                    probability_at(x, y),
                ));
            }
            if y + 1 < GRID_HEIGHT {
                edges.push((
                    room_name(x, y),
                    room_name(x, y + 1),
                    distance_at(y, x),
                    probability_at(y, x),
                ));
            }
        }
    }
    edges
}

pub fn room_name(x: usize, y: usize) -> String {
    format!("room_{x}_{y}")
}

fn distance_at(x: usize, y: usize) -> f64 {
    1.0 + ((x * 7 + y * 3) % 10) as f64 * 0.25
}

fn probability_at(x: usize, y: usize) -> f64 {
    ((x * 31 + y * 17) % 100) as f64 / 100.0
}
