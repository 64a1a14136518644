use std::path::PathBuf;

use apispec::{
    analyze_spec, parse_spec, read_spec_source, CheckOptions, CheckReport, EnvironmentSummary,
};
use apispec_ast::AstPrinter;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "apispec",
    version,
    about = "Type-check API specifications before proof generation or test synthesis",
    long_about = "apispec checks a parsed API specification (serialized as JSON) for\n\
        undefined names, arity mismatches and operand type errors.\n\n\
        EXAMPLES:\n\
        \n  apispec check signup.json               Check a spec file\n\
        \n  apispec check --print-ast signup.json   Print the spec before checking\n\
        \n  apispec check --print-env signup.json   Show the inferred environments\n\
        \n  cat signup.json | apispec check --json  Check stdin, report as JSON"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Type-check a spec file
    Check(CheckArgs),
}

#[derive(Debug, Args, Clone, Default)]
struct CheckArgs {
    /// Input spec in JSON form (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output the result as JSON
    #[arg(long)]
    json: bool,

    /// Print the spec in surface syntax before checking (text output only)
    #[arg(long = "print-ast", conflicts_with = "json")]
    print_ast: bool,

    /// Print the variable and function environments after checking
    #[arg(long = "print-env")]
    print_env: bool,

    /// Type parameters and returns from their declared annotations instead of as strings
    #[arg(long = "annotated-types")]
    annotated_types: bool,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn render_environment(env: &EnvironmentSummary) -> Vec<String> {
    let mut lines = vec!["Environment:".to_string()];
    for var in &env.variables {
        lines.push(format!("  {}: {}", var.name, var.ty));
    }
    for func in &env.functions {
        lines.push(format!(
            "  {}({}) -> {}",
            func.name,
            func.params.join(", "),
            func.returns
        ));
    }
    lines
}

fn render_report(report: &CheckReport, mode: OutputMode) -> i32 {
    match mode {
        OutputMode::Text => {
            if let Some(env) = &report.environment {
                for line in render_environment(env) {
                    println!("{line}");
                }
            }
            if report.success {
                println!("Typechecking success!");
            } else {
                eprintln!("Typechecking failed.");
                for err in &report.errors {
                    eprintln!("  - {err}");
                }
            }
        }
        OutputMode::Json => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return 2;
            }
        },
    }
    if report.success {
        0
    } else {
        1
    }
}

fn run_check(args: &CheckArgs) -> i32 {
    let source = match read_spec_source(args.input.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let spec = match parse_spec(&source) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    log::info!(
        "loaded spec with {} API block(s) from {}",
        spec.blocks.len(),
        args.input
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<stdin>".to_string())
    );

    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    if args.print_ast {
        println!("Generated AST:");
        println!("{}", AstPrinter::with_indent(2).print(&spec));
    }

    let options = CheckOptions {
        annotated_types: args.annotated_types,
        include_environment: args.print_env,
    };
    let report = analyze_spec(&spec, &options);
    render_report(&report, mode)
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command.unwrap_or_else(|| Command::Check(CheckArgs::default())) {
        Command::Check(args) => run_check(&args),
    }
}

fn main() {
    std::process::exit(run_cli());
}
