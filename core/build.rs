//! Generates the embedded placeholder NNUE network consumed by `nnue::Network::embedded_default`
//! when the `embedded_nnue` feature is enabled.
//!
//! The placeholder is not a trained network: every bias and weight is zero. It exists purely so
//! that evaluation has a well-formed `.nnue` blob to load before a real `EvalFile` is configured,
//! matching the exact magic stamps and byte length §4.D of the spec requires. These constants
//! are duplicated from `src/nnue.rs` because `build.rs` cannot depend on the crate it builds.

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const H: usize = 256;
const NUM_PIECE_SQUARES: usize = 641;
const NUM_KING_SQUARES: usize = 64;
const FT_DIMS: usize = NUM_KING_SQUARES * NUM_PIECE_SQUARES;

const HIDDEN1_IN: usize = 2 * H;
const HIDDEN1_OUT: usize = 32;
const HIDDEN2_OUT: usize = 32;
const OUTPUT_IN: usize = HIDDEN2_OUT;

const HASH_STRING_LEN: usize = 177;
const VERSION_MAGIC: u32 = 0x7AF3_2F16;
const HASH_MAGIC: u32 = 0x3E5A_A6EE;
const TRANSFORMER_MAGIC: u32 = 0x5D69_D7B8;
const NETWORK_MAGIC: u32 = 0x6333_7156;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("default_net.nnue");
    let mut buf: Vec<u8> = Vec::new();

    buf.extend_from_slice(&VERSION_MAGIC.to_le_bytes());
    buf.extend_from_slice(&HASH_MAGIC.to_le_bytes());
    buf.extend_from_slice(&(HASH_STRING_LEN as u32).to_le_bytes());
    buf.extend(std::iter::repeat(b'0').take(HASH_STRING_LEN));

    buf.extend_from_slice(&TRANSFORMER_MAGIC.to_le_bytes());
    buf.extend(std::iter::repeat(0u8).take(2 * H)); // ft biases
    buf.extend(std::iter::repeat(0u8).take(2 * H * FT_DIMS)); // ft weights

    buf.extend_from_slice(&NETWORK_MAGIC.to_le_bytes());
    buf.extend(std::iter::repeat(0u8).take(4 * HIDDEN1_OUT)); // h1 biases
    buf.extend(std::iter::repeat(0u8).take(HIDDEN1_OUT * HIDDEN1_IN)); // h1 weights
    buf.extend(std::iter::repeat(0u8).take(4 * HIDDEN2_OUT)); // h2 biases
    buf.extend(std::iter::repeat(0u8).take(HIDDEN2_OUT * HIDDEN2_OUT)); // h2 weights
    buf.extend(std::iter::repeat(0u8).take(4)); // output bias
    buf.extend(std::iter::repeat(0u8).take(OUTPUT_IN)); // output weights

    let mut f = File::create(&dest_path).expect("write placeholder nnue blob");
    f.write_all(&buf).expect("write placeholder nnue blob");

    println!("cargo:rerun-if-changed=build.rs");
}
