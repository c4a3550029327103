#![feature(test)]
extern crate chess_core;
extern crate test;
extern crate chess_engine;


use chess_engine::engine::UciEngine;


use test::{black_box, Bencher};

#[bench]
fn searcher_creation(b: &mut Bencher) {
    let mut s = UciEngine::init(false);
    b.iter(|| {
        s = black_box(UciEngine::init(false));
    })
}