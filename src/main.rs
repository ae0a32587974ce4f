use std::{fs, io::BufReader, path::PathBuf, process::ExitCode};

use arrayexpr::expression::Expression;
use clap::Parser;

/// arrayexpr evaluates arithmetic expressions over scalar and array
/// variables, such as `a-(b+A[B[2]])*d+3`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the expression argument as a path and read the first non-empty
    /// line of that file.
    #[arg(short, long)]
    file: bool,

    /// File of symbol value records, one per line: `name value` or
    /// `name size (index,value) ...`.
    #[arg(short, long, value_name = "PATH")]
    values: Option<PathBuf>,

    /// Print the extracted symbols with their loaded values.
    #[arg(short, long)]
    symbols: bool,

    /// Only check bracket nesting and print the matched pairs.
    #[arg(short, long)]
    check: bool,

    expression: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let text = if args.file {
        let Ok(contents) = fs::read_to_string(&args.expression) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.expression);
            return ExitCode::FAILURE;
        };
        contents.lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .unwrap_or_default()
                .to_string()
    } else {
        args.expression.clone()
    };

    match run(&args, text) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args, text: String) -> Result<(), Box<dyn std::error::Error>> {
    let mut expression = Expression::new(text);

    let brackets = expression.validate()?;
    if args.check {
        for (open, close) in brackets.pairs() {
            println!("{open} {close}");
        }
        return Ok(());
    }

    expression.build_symbols()?;

    if let Some(path) = &args.values {
        let file = fs::File::open(path).map_err(|e| {
                                           format!("Failed to read the values file '{}': {e}",
                                                   path.display())
                                       })?;
        expression.load_values(BufReader::new(file))?;
    }

    if args.symbols {
        let symbols = expression.symbols();
        for name in symbols.scalar_names() {
            if let Some(symbol) = symbols.scalar(name) {
                println!("{symbol}");
            }
        }
        for name in symbols.array_names() {
            if let Some(symbol) = symbols.array(name) {
                println!("{symbol}");
            }
        }
    }

    let result = expression.evaluate()?;
    println!("{result}");

    Ok(())
}
