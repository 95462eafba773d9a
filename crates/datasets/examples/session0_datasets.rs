//! Session 0: Synthetic Classification Datasets
//!
//! Run with: RUST_LOG=debug cargo run -p minitorch-datasets --example session0_datasets
//!
//! This example demonstrates:
//! - The six registered datasets and their decision boundaries
//! - Reproducible generation from a seeded config
//! - Loading a config from JSON
//! - A coarse ASCII plot of the labels

use minitorch_datasets::{DatasetConfig, DatasetError, DatasetKind, Graph};

const GRID: usize = 24;

fn ascii_plot(graph: &Graph) -> String {
    let mut cells = vec![vec![' '; GRID]; GRID];
    for ((x1, x2), label) in graph.iter() {
        if !(0.0..1.0).contains(&x1) || !(0.0..1.0).contains(&x2) {
            continue;
        }
        let col = (x1 * GRID as f64) as usize;
        let row = GRID - 1 - (x2 * GRID as f64) as usize;
        cells[row][col] = if label == 1 { '#' } else { '.' };
    }
    cells
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> Result<(), DatasetError> {
    env_logger::init();

    println!("=== Session 0: Synthetic Classification Datasets ===\n");

    // -------------------------------------------------------------------------
    // 1. The Registry
    // -------------------------------------------------------------------------
    println!("1. The Registry");
    println!("---------------");
    println!();
    println!("{:<8} {:>6} {:>10}", "dataset", "n", "positive");
    for kind in DatasetKind::ALL {
        let graph = DatasetConfig::new(kind, 200).with_seed(0).generate()?;
        println!("{:<8} {:>6} {:>10}", kind, graph.n(), graph.positives());
    }
    println!();

    // -------------------------------------------------------------------------
    // 2. Reproducibility
    // -------------------------------------------------------------------------
    println!("2. Reproducibility");
    println!("------------------");
    println!();
    let config = DatasetConfig::new(DatasetKind::Circle, 50).with_seed(42);
    let same = config.generate()? == config.generate()?;
    println!("Seeded Circle(50) twice, identical: {}", same);
    println!();

    // -------------------------------------------------------------------------
    // 3. Config from JSON
    // -------------------------------------------------------------------------
    println!("3. Config from JSON");
    println!("-------------------");
    println!();
    let json = r#"{ "kind": "Xor", "n": 400, "seed": 7 }"#;
    let config = DatasetConfig::from_json(json)?;
    println!("{} -> {:?}", json, config);
    println!();

    match DatasetConfig::from_json(r#"{ "kind": "Moons", "n": 10 }"#) {
        Ok(c) => println!("unexpectedly parsed {:?}", c),
        Err(e) => println!("Rejected: {}", e),
    }
    println!();

    // -------------------------------------------------------------------------
    // 4. Plots
    // -------------------------------------------------------------------------
    println!("4. Plots ('#' = label 1, '.' = label 0)");
    println!("---------------------------------------");
    for kind in [DatasetKind::Xor, DatasetKind::Circle, DatasetKind::Spiral] {
        let graph = DatasetConfig::new(kind, 400).with_seed(7).generate()?;
        println!();
        println!("{}:", kind);
        println!("{}", ascii_plot(&graph));
    }

    Ok(())
}
