//! Basil CLI.
//!
//! `basil FILE` runs a script. `basil` with no file starts the REPL.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use basil_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use basil_ir::SourceFile;
use basilc::{init_tracing, DriverError, Session, TraceFormat};

const PROMPT: &str = "basil > ";
const STDIN_NAME: &str = "<stdin>";

#[derive(Default)]
struct Options {
    file: Option<PathBuf>,
    color: ColorMode,
    trace_format: TraceFormat,
    show_tokens: bool,
    show_ast: bool,
    help: bool,
}

impl Options {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, DriverError> {
        let mut options = Options::default();
        for arg in args {
            if let Some(mode) = arg.strip_prefix("--color=") {
                options.color = mode.parse().map_err(DriverError::Usage)?;
            } else if arg == "--tree" {
                options.trace_format = TraceFormat::Tree;
            } else if arg == "--tokens" {
                options.show_tokens = true;
            } else if arg == "--ast" {
                options.show_ast = true;
            } else if arg == "--help" || arg == "-h" {
                options.help = true;
            } else if arg.starts_with('-') {
                return Err(DriverError::Usage(format!("unknown option '{arg}'")));
            } else if options.file.is_none() {
                options.file = Some(PathBuf::from(arg));
            } else {
                return Err(DriverError::Usage(format!("unexpected argument '{arg}'")));
            }
        }
        Ok(options)
    }
}

fn main() {
    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };
    if options.help {
        print_usage();
        return;
    }

    init_tracing(options.trace_format);

    let result = match &options.file {
        Some(path) => run_file(path, &options),
        None => repl(&options),
    };
    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Run a script. `Ok(false)` means it stopped on a diagnostic.
fn run_file(path: &Path, options: &Options) -> Result<bool, DriverError> {
    let text = std::fs::read_to_string(path).map_err(|source| DriverError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path.display().to_string();
    let mut emitter = TerminalEmitter::stderr(options.color);

    if !dump_stages(&name, &text, options, &mut emitter) {
        return Ok(false);
    }

    // Scripts talk through `print`; the final value is not shown.
    let (_, diagnostic) = Session::new().run(&name, &text);
    match diagnostic {
        Some(diagnostic) => {
            emitter.emit(&diagnostic);
            emitter.flush();
            Ok(false)
        }
        None => Ok(true),
    }
}

/// Read-eval-print loop over one persistent session. Ends on `exit` or end
/// of input. The return value reports whether the last line succeeded.
fn repl(options: &Options) -> Result<bool, DriverError> {
    let mut session = Session::new();
    let mut emitter = TerminalEmitter::stderr(options.color);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut ok = true;

    loop {
        print!("{PROMPT}");
        // A closed stdout shows up again on the next println.
        let _ = io::stdout().flush();

        let mut line = String::new();
        if input.read_line(&mut line).map_err(DriverError::Stdin)? == 0 {
            println!();
            return Ok(ok);
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            println!("bye");
            return Ok(ok);
        }

        if !dump_stages(STDIN_NAME, line, options, &mut emitter) {
            ok = false;
            continue;
        }
        let (value, diagnostic) = session.run(STDIN_NAME, line);
        ok = diagnostic.is_none();
        if let Some(diagnostic) = diagnostic {
            emitter.emit(&diagnostic);
            emitter.flush();
        } else if let Some(value) = value {
            println!("{value}");
        }
    }
}

/// Print tokens and/or the syntax tree when asked to. Returns `false` if
/// either stage failed, after reporting why.
fn dump_stages(
    name: &str,
    text: &str,
    options: &Options,
    emitter: &mut impl DiagnosticEmitter,
) -> bool {
    if !options.show_tokens && !options.show_ast {
        return true;
    }
    let source = SourceFile::new(name, text);
    if options.show_tokens {
        match basilc::lex(&source) {
            Ok(tokens) => println!("{tokens:?}"),
            Err(diagnostic) => {
                emitter.emit(&diagnostic);
                emitter.flush();
                return false;
            }
        }
    }
    if options.show_ast {
        match basilc::parse(&source) {
            Ok(program) => println!("{program}"),
            Err(diagnostic) => {
                emitter.emit(&diagnostic);
                emitter.flush();
                return false;
            }
        }
    }
    true
}

fn print_usage() {
    println!("Basil interpreter {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: basil [options] [FILE]");
    println!();
    println!("With no FILE, starts an interactive session. Type `exit` to quit.");
    println!();
    println!("Options:");
    println!("  --color=<mode>   Diagnostic colors: auto, always, never");
    println!("  --tokens         Print the token stream before running");
    println!("  --ast            Print the syntax tree before running");
    println!("  --tree           Hierarchical trace output (with BASIL_LOG set)");
    println!("  -h, --help       Show this help message");
    println!();
    println!("Environment:");
    println!("  BASIL_LOG        Tracing filter, e.g. basil_eval=debug");
}
