//! UCI front-end binary. Reads commands from stdin and drives a `UciEngine`.

use chess_engine::engine::UciEngine;

fn main() {
    env_logger::init();
    let mut engine = UciEngine::init(true);
    engine.uci();
}
