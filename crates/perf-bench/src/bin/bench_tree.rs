use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;
use route_solver_core::RoomGraph;
use route_solver_core::solver::DijkstraSolver;
use route_solver_core::traits::TreeSolver;

fn main() {
    let edges = generate_grid_edges();
    let graph = RoomGraph::from_edges(&edges);
    let start = room_name(0, 0);

    let start_time = Instant::now();
    let tree = DijkstraSolver
        .shortest_path_tree(&graph, &start)
        .expect("grid contains the start room");
    let elapsed_time = start_time.elapsed();

    let mut checksum: f64 = 0.0;
    for record in &tree {
        checksum += record.total_distance;
    }
    let final_checksum = black_box(checksum);

    println!("--- Route Tree Benchmark ({} Rooms) ---", graph.num_rooms());
    println!("Settled: {}", tree.len());
    println!("Checksum: {:.10}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
