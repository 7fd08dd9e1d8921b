use std::cmp::Ordering;
use std::io::{self, ErrorKind, Write};

use clap::{Parser, Subcommand};

use bytenum::io::{read_bigint, write_bigint};
use bytenum::BigInt;

/// Arbitrary-precision integer calculator.
#[derive(Parser)]
#[command(name = "bytenum")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a binary expression: bytenum eval <lhs> <op> <rhs>.
    #[command(allow_negative_numbers = true)]
    Eval {
        lhs: String,
        /// One of + - * / % & | ^.
        op: String,
        rhs: String,
    },
    /// Compare two integers and print <, =, or >.
    #[command(allow_negative_numbers = true)]
    Cmp { lhs: String, rhs: String },
    /// Sum whitespace-delimited integers read from stdin.
    Sum,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval { lhs, op, rhs } => eval(&lhs, &op, &rhs),
        Commands::Cmp { lhs, rhs } => cmp(&lhs, &rhs),
        Commands::Sum => sum(),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn eval(lhs: &str, op: &str, rhs: &str) -> Result<(), Box<dyn std::error::Error>> {
    let a: BigInt = lhs.parse()?;
    let b: BigInt = rhs.parse()?;

    let value = match op {
        "+" => &a + &b,
        "-" => &a - &b,
        "*" | "x" => &a * &b,
        "/" => a.div_rem(&b)?.0,
        "%" => a.div_rem(&b)?.1,
        "&" => &a & &b,
        "|" => &a | &b,
        "^" => &a ^ &b,
        _ => return Err(format!("unsupported operator {op:?}").into()),
    };

    println!("{value}");
    Ok(())
}

fn cmp(lhs: &str, rhs: &str) -> Result<(), Box<dyn std::error::Error>> {
    let a: BigInt = lhs.parse()?;
    let b: BigInt = rhs.parse()?;
    let sign = match a.cmp(&b) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    println!("{sign}");
    Ok(())
}

fn sum() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut total = BigInt::zero();
    let mut count = 0usize;

    loop {
        match read_bigint(&mut reader) {
            Ok(value) => {
                total += value;
                count += 1;
            }
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err.into()),
        }
    }
    log::debug!("summed {count} integers");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_bigint(&mut out, &total)?;
    writeln!(out)?;
    Ok(())
}
