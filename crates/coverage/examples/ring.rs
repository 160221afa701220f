//! Prints the reference outline of an oval as ASCII art.
//!
//! ```text
//! cargo run --example ring -- 0 0 11 6
//! RUST_LOG=trace cargo run --example ring -- 0 0 11 6
//! ```

use coverage::{compute_oval_boundary_pixels_with, Config};
use geometry::Clip;
use log::{error, info};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args: Vec<i32> = match std::env::args().skip(1).map(|a| a.parse()).collect() {
        Ok(args) => args,
        Err(e) => {
            error!("arguments must be integers: {e}");
            std::process::exit(2);
        }
    };

    let [x, y, x_span, y_span] = args[..] else {
        error!("usage: ring <x> <y> <x_span> <y_span>");
        std::process::exit(2);
    };

    let config = Config { trace: true };
    let pixels = compute_oval_boundary_pixels_with(&config, Clip::Unbounded, x, y, x_span, y_span);

    info!(
        "oval ({x}, {y}, {x_span}, {y_span}) touches {} pixels",
        pixels.len()
    );

    // one cell of margin around the bounding box
    for row in y - 1..=y + y_span.max(0) {
        let line: String = (x - 1..=x + x_span.max(0))
            .map(|col| {
                if pixels.contains(&geometry::Pixel::new(col, row)) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{line}");
    }
}
