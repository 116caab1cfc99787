use std::{env, fs,
          io::{self, BufRead, Write},
          path::{Path, PathBuf},
          process};

use clap::Parser;
use monkey::{Environment, Error, Evaluator, ParseError};

const PROMPT: &str = ">> ";
const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -'  /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'"#;

/// monkey is a small, dynamically typed, expression-oriented programming
/// language with first-class functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to execute; the interactive prompt starts when omitted.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path),
        None => repl(),
    }
}

/// Runs a script file.
///
/// Exits 1 when the file cannot be read, when it fails to parse, or when
/// evaluation stops at a runtime error; the final value, if any, is
/// printed like in the prompt.
fn run_file(path: &Path) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               path.display());
                     process::exit(1);
                 });

    let env = Environment::new();
    let mut stdout = io::stdout();

    match monkey::interpret(&source, &env, &mut stdout) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(Error::Parse(errors)) => {
            print_parse_errors(&errors);
            process::exit(1);
        },
        Err(Error::Runtime(error)) => {
            println!("ERROR: {error}");
            process::exit(1);
        },
    }
}

/// The interactive prompt.
///
/// Reads a line, parses it, reports parse errors, and otherwise evaluates
/// against an environment that persists for the whole session, printing
/// the resulting value when the line produced one.
fn repl() {
    let user = env::var("USER").unwrap_or_else(|_| "there".to_string());
    println!("hello {user}! This is the monkey programming language!");
    println!("Feel free to type in commands");

    let env = Environment::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{PROMPT}");
        if stdout.flush().is_err() {
            return;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {},
        }
        if line.trim().is_empty() {
            continue;
        }

        let (program, errors) = monkey::parse(&line);
        if !errors.is_empty() {
            print_parse_errors(&errors);
            continue;
        }

        let mut evaluator = Evaluator::new(&mut stdout);
        match evaluator.eval_program(&program, &env) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(error) => println!("ERROR: {error}"),
        }
    }
}

fn print_parse_errors(errors: &[ParseError]) {
    println!("{MONKEY_FACE}");
    println!("Woops! We ran into some monkey business here!");
    println!(" parser errors:");
    for error in errors {
        println!("\t{error}");
    }
}
