use std::io::Read;

use arith_eval::evaluate;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "arithc",
    version,
    about = "Evaluator for the Arith expression language",
    long_about = "arithc evaluates arithmetic expressions: integer and float \
        literals, unary negation, + - * /, parentheses and standard precedence.\n\n\
        EXAMPLES:\n\
        \n  arithc eval '2 / 2 + 3 * 4 - 6'     Evaluate an expression\n\
        \n  echo '10/4' | arithc eval           Evaluate from stdin\n\
        \n  arithc eval --ast '1 + 2 * 3'       Show the parsed tree\n\
        \n  arithc repl                         Start an interactive session"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a single expression
    Eval(EvalArgs),
    /// Start an interactive read-eval-print loop
    Repl,
}

#[derive(Debug, Args, Clone)]
struct EvalArgs {
    /// The expression to evaluate (reads from stdin if not provided)
    #[arg(value_name = "EXPRESSION")]
    expression: Option<String>,

    /// Print the parsed tree instead of evaluating it
    #[arg(long)]
    ast: bool,

    /// Output format for --ast
    #[arg(long, value_enum, default_value_t = OutputMode::Text)]
    format: OutputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    Text,
    Json,
}

fn run_eval(args: &EvalArgs) -> i32 {
    let source = match &args.expression {
        Some(expression) => expression.clone(),
        None => {
            let mut buffer = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("error: failed to read stdin: {err}");
                return 2;
            }
            buffer
        }
    };
    let source = source.trim();

    if args.ast {
        match arith_parser::parse_expression(source) {
            Ok(tree) => match args.format {
                OutputMode::Text => {
                    println!("{tree}");
                    0
                }
                OutputMode::Json => match arith_ast::to_json(&tree) {
                    Ok(json) => {
                        println!("{json}");
                        0
                    }
                    Err(err) => {
                        eprintln!("error: {err}");
                        1
                    }
                },
            },
            Err(err) => {
                eprintln!("error: {err}");
                1
            }
        }
    } else {
        match evaluate(source) {
            Ok(value) => {
                println!("{value}");
                0
            }
            Err(err) => {
                eprintln!("error: {err}");
                1
            }
        }
    }
}

fn run_repl() -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("error: failed to initialize repl: {err}");
            return 2;
        }
    };

    loop {
        match rl.readline("arith> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == ":quit" || line == ":q" {
                    return 0;
                }
                let _ = rl.add_history_entry(line);
                match evaluate(line) {
                    Ok(value) => println!("{value}"),
                    Err(err) => eprintln!("error: {err}"),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(err) => {
                eprintln!("error: {err}");
                return 2;
            }
        }
    }
}

fn run_cli() -> i32 {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Eval(args) => run_eval(&args),
        Command::Repl => run_repl(),
    }
}

fn main() {
    std::process::exit(run_cli());
}
