//! Decode a binary spend reference given as hex and print it in every format.
//!
//! To run this example:
//! ```bash
//! RUST_LOG=debug cargo run --example decode_reference -- \
//!     3ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a0000
//! ```
use std::error::Error;

use spendref::SpendReference;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let input = match std::env::args().nth(1) {
        Some(input) => input,
        None => {
            eprintln!("usage: decode_reference <hex of the 34-byte binary reference>");
            std::process::exit(2);
        }
    };

    let bytes = hex::decode(input.trim())?;
    let reference = SpendReference::from_bytes(&bytes)?;

    if bytes.len() > SpendReference::ENCODED_LEN {
        log::warn!(
            "ignoring {} trailing bytes",
            bytes.len() - SpendReference::ENCODED_LEN
        );
    }

    println!("Referenced tx: {}", reference.get_referenced_tx_id());
    println!("Output index: {}", reference.get_referenced_output_index());
    println!("Debug string: {}", reference.to_debug_string());
    println!("JSON: {}", reference.to_json_string()?);

    Ok(())
}
