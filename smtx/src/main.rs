//! Interactive command line front end for sparse matrix operations

use clap::{Parser, Subcommand};
use smtx::{add, mul, read_matrix, sub, write_matrix, SparseMatrix};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "Sparse matrix addition, subtraction, and multiplication over coordinate text files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the embedded self-check suite
    Test,
}

fn main() {
    let cli = Cli::parse();
    let code = match cli.command {
        Some(Commands::Test) => run_self_checks(),
        None => run_interactive(),
    };
    std::process::exit(code);
}

fn run_interactive() -> i32 {
    println!("Sparse Matrix Operations");
    match interactive_flow() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err}");
            1
        }
    }
}

/// Prompt for two input files, an operation, and an output file
///
/// Any load or compute failure bubbles up and is printed once by the
/// caller; nothing is written in that case.
fn interactive_flow() -> Result<(), Box<dyn std::error::Error>> {
    let first = prompt("Enter path for first matrix file: ")?;
    let second = prompt("Enter path for second matrix file: ")?;

    let lhs = read_matrix(first.trim())?;
    let rhs = read_matrix(second.trim())?;

    println!("\nChoose operation:\n1. Addition\n2. Subtraction\n3. Multiplication");
    let choice = prompt("Enter your choice (1/2/3): ")?;
    let result = match choice.trim() {
        "1" => add(&lhs, &rhs),
        "2" => sub(&lhs, &rhs),
        "3" => mul(&lhs, &rhs)?,
        other => {
            eprintln!("Invalid choice: {other}");
            return Ok(());
        }
    };

    println!("\nResult matrix:\n{result}");

    let output = prompt("Enter output file name (default: result.txt): ")?;
    let output = match output.trim() {
        "" => "result.txt",
        name => name,
    };
    write_matrix(output, &result)?;
    println!("Result saved to {output}");
    Ok(())
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Hand-checked arithmetic cases runnable without any input files
fn run_self_checks() -> i32 {
    println!("Running self-checks...");
    let mut failed = 0;

    let mut m1 = SparseMatrix::new(3, 3);
    m1.set(0, 1, 5);
    m1.set(1, 2, 10);
    let mut m2 = SparseMatrix::new(3, 3);
    m2.set(0, 1, 2);
    m2.set(1, 2, 8);

    let sum = add(&m1, &m2);
    report(&mut failed, "addition", sum.get(0, 1) == 7 && sum.get(1, 2) == 18);

    let diff = sub(&m1, &m2);
    report(&mut failed, "subtraction", diff.get(0, 1) == 3 && diff.get(1, 2) == 2);

    // [1 2] * [3; 4] = [11]
    let mut lhs = SparseMatrix::new(1, 2);
    lhs.set(0, 0, 1);
    lhs.set(0, 1, 2);
    let mut rhs = SparseMatrix::new(2, 1);
    rhs.set(0, 0, 3);
    rhs.set(1, 0, 4);
    let product = mul(&lhs, &rhs);
    report(
        &mut failed,
        "multiplication",
        matches!(product, Ok(ref p) if p.get(0, 0) == 11),
    );

    report(
        &mut failed,
        "dimension mismatch rejected",
        mul(&m1, &rhs).is_err(),
    );

    if failed == 0 {
        println!("All checks passed");
        0
    } else {
        println!("{failed} check(s) failed");
        1
    }
}

fn report(failed: &mut u32, name: &str, ok: bool) {
    if ok {
        println!("ok - {name}");
    } else {
        println!("FAILED - {name}");
        *failed += 1;
    }
}
