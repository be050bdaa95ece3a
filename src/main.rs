use clap::Parser as _;
use mini_lisp::config::{PROMPT, WELCOME_MESSAGE, WELCOME_SUBTITLE};
use mini_lisp::env::Environment;
use mini_lisp::error::InterpreterError;
use mini_lisp::{config, eval, parser};
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use std::path::PathBuf;
use std::process::ExitCode;

/// A tree-walking interpreter for a small, statically-typed Lisp dialect.
#[derive(clap::Parser, Debug)]
#[command(name = "mini-lisp")]
#[command(version = config::VERSION)]
#[command(about = "A tree-walking interpreter for Mini-LISP")]
struct CliArgs {
    /// Script file to execute. Starts an interactive REPL if omitted.
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let result = match &args.script {
        Some(path) => run_script(path),
        None => run_repl(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "mini_lisp=warn",
        1 => "mini_lisp=info",
        _ => "mini_lisp=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_script(path: &PathBuf) -> Result<(), InterpreterError> {
    let source = std::fs::read_to_string(path).map_err(|e| {
        InterpreterError::runtime("script", format!("cannot read {}: {e}", path.display()))
    })?;

    tracing::info!(path = %path.display(), "running script");

    let env = Environment::new();
    let program = parser::parse(&source)?;
    eval::run(&program, &env, &mut std::io::stdout())?;
    Ok(())
}

fn run_repl() -> Result<(), InterpreterError> {
    let env = Environment::new();
    let config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<(), rustyline::history::DefaultHistory> = Editor::with_config(config)
        .map_err(|e| InterpreterError::runtime("repl", format!("failed to initialize: {e}")))?;

    let history_file = ".mini_lisp_history";
    let _ = rl.load_history(history_file);

    println!("{WELCOME_MESSAGE} ({})", config::VERSION);
    println!("{WELCOME_SUBTITLE}");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parser::parse(&line) {
                    Ok(program) => match eval::run(&program, &env, &mut std::io::stdout()) {
                        Ok(results) => {
                            for value in &results {
                                println!("=> {value}");
                            }
                        }
                        Err(e) => eprintln!("{e}"),
                    },
                    Err(e) => eprintln!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => {
                eprintln!("{err}");
                break;
            }
        }
    }

    let _ = rl.save_history(history_file);
    Ok(())
}
