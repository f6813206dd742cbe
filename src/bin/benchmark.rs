//! Timing of the generation pipeline at increasing canvas sizes

use glowgrid::{Generator, GeneratorConfig};

fn benchmark(width: u32, height: u32, iterations: u32) -> (f64, f64) {
    let mut coloring = 0.0;
    let mut render = 0.0;

    for seed in 0..iterations {
        let config = GeneratorConfig {
            width,
            height,
            ..GeneratorConfig::default()
        }
        .with_seed(seed as u64);

        let mut generator = Generator::new(config).expect("benchmark config is valid");
        generator.generate().expect("benchmark generation succeeds");
        coloring += generator.last_coloring_time_ms as f64;
        render += generator.last_render_time_ms as f64;
    }

    (coloring / iterations as f64, render / iterations as f64)
}

fn main() {
    println!("=== glowgrid Generation Benchmark ===\n");

    let sizes = [(800, 800), (1920, 1080), (2560, 1440), (3840, 2160)];
    let iterations = 5;

    println!("{:>12} {:>10} {:>14} {:>12} {:>10}", "Canvas", "Cells", "Coloring", "Render", "Total");
    println!("{:-<62}", "");

    for (width, height) in sizes {
        let (coloring_ms, render_ms) = benchmark(width, height, iterations);
        let cells = (width / 60 - 1) * (height / 60 - 1);

        println!(
            "{:>12} {:>10} {:>11.2} ms {:>9.2} ms {:>7.2} ms",
            format!("{}x{}", width, height),
            cells,
            coloring_ms,
            render_ms,
            coloring_ms + render_ms
        );
    }
}
