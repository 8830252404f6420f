use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;
use route_solver_core::RoomGraph;

fn main() {
    let edges = generate_grid_edges();

    let start_time = Instant::now();
    let graph = RoomGraph::from_edges(&edges);
    let elapsed_time = start_time.elapsed();

    let final_graph = black_box(graph);

    println!("--- Graph Build Benchmark ({} Corridors) ---", edges.len());
    println!("Rooms: {}", final_graph.num_rooms());
    println!("Adjacency entries: {}", final_graph.num_entries());
    println!("Elapsed Time: {:?}", elapsed_time);
}
