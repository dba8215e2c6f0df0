//! loxvm-cli: `loxvm <file>` runs a script; bare `loxvm` starts a REPL.
//! Minimal `main`, logic split into small command functions, following
//! the teacher CLI's convention of a thin binary entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;
use loxvm_core::{DefaultHost, InterpretResult, Vm};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;
use tracing_subscriber::EnvFilter;
use yansi::Paint;

/// sysexits.h-style exit codes, matching the reference implementation's
/// own `main.c` convention (spec.md is silent on this, see SPEC_FULL.md).
const EX_OK: u8 = 0;
const EX_DATAERR: u8 = 65;
const EX_SOFTWARE: u8 = 70;

#[derive(Parser)]
#[command(name = "loxvm", version, about = "A stack-based bytecode VM for a small scripting language")]
struct Cli {
    /// Script to run. Omit to start an interactive REPL.
    path: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let code = match cli.path {
        Some(path) => run_file(&path)?,
        None => run_repl()?,
    };
    Ok(ExitCode::from(code))
}

fn run_file(path: &PathBuf) -> Result<u8> {
    info!(path = %path.display(), "running script");
    let source = std::fs::read_to_string(path)?;
    let mut vm = Vm::with_options(Default::default(), Box::<DefaultHost>::default());
    let function = match loxvm_compiler::compile(&source, vm.interner_mut()) {
        Ok(function) => function,
        Err(errors) => {
            for err in &errors {
                eprintln!("{}", err.to_string().red());
            }
            return Ok(EX_DATAERR);
        }
    };
    match vm.run(function) {
        InterpretResult::Ok => Ok(EX_OK),
        InterpretResult::CompileError => Ok(EX_DATAERR),
        InterpretResult::RuntimeError => Ok(EX_SOFTWARE),
    }
}

fn run_repl() -> Result<u8> {
    info!("starting REPL");
    println!("loxvm — ctrl-d to quit");
    let mut editor = DefaultEditor::new()?;
    let mut vm = Vm::with_options(Default::default(), Box::<DefaultHost>::default());

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str()).ok();
                match loxvm_compiler::compile(&line, vm.interner_mut()) {
                    Ok(function) => {
                        vm.run(function);
                    }
                    Err(errors) => {
                        for err in &errors {
                            eprintln!("{}", err.to_string().red());
                        }
                    }
                }
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(EX_OK)
}
