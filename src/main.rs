use graphmatrix::{GraphMatrix, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("graphmatrix demo failed: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    println!("graphmatrix {}", graphmatrix::VERSION);

    println!("\n----- GraphMatrix::new(6)");
    let mut z = GraphMatrix::new(6)?;
    println!("dimension {}", z.dimension());
    z.insert(3, 3)?;
    z.insert(1, 2)?;
    println!("{}", z);

    report("1,2", z.is_set(1, 2), true);
    report("2,2", z.is_set(2, 2), false);

    println!("\n----- GraphMatrix::new(4)");
    let mut z = GraphMatrix::new(4)?;
    for (r, c) in [(0, 1), (0, 2), (1, 2), (2, 3)] {
        z.insert(r, c)?;
    }
    println!("{}", z);
    for r in 0..z.dimension() {
        println!("  row {}: {:?}", r, z.row(r)?);
    }

    println!("\n----- GraphMatrix::from_sorted_ij()");
    let z = GraphMatrix::from_sorted_ij(&[0, 0, 1, 2], &[1, 2, 2, 3])?;
    println!("{}", z);
    for (r, c, expected) in [(0, 1, true), (0, 2, true), (1, 2, true), (2, 1, false)] {
        report(&format!("{},{}", r, c), z.is_set(r, c), expected);
    }

    println!("\n----- GraphMatrix::from_edges() with a duplicate edge");
    let z = GraphMatrix::from_edges(&[1, 2, 3, 0, 0, 2], &[2, 3, 2, 1, 2, 3])?;
    println!("{}", z);
    println!("cardinality {} (6 edges given, 5 unique)", z.cardinality());
    let entries: Vec<_> = z.nonzeros().collect();
    println!("entries {:?}", entries);

    Ok(())
}

fn report(label: &str, actual: bool, expected: bool) {
    let state = if actual { "set" } else { "not set" };
    let verdict = if actual == expected { "correct" } else { "incorrect" };
    println!("{} {} ({})", label, state, verdict);
}
