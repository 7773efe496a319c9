mod config;
mod outline;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::{Files, SimpleFiles};
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use relnote::{CheckError, DirTree};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "relnote", version, about = "Check and merge release note fragments")]
struct Cli {
    /// Disable colored error output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (defaults to ./relnote.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log progress to stderr; repeat for more detail
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that fragments are well formed
    Check(CheckArgs),

    /// Merge every fragment under a directory into one document
    Merge(MergeArgs),
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Fragment files to check
    #[arg(required = true)]
    files: Vec<String>,

    /// Only report failures
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::Args)]
struct MergeArgs {
    /// Root directory of the fragment tree
    dir: PathBuf,

    /// Dump the merged document tree instead of the outline
    #[arg(long)]
    ast: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let exit_code = match cli.command {
        Command::Check(args) => do_check(args, &config, cli.no_color),
        Command::Merge(args) => do_merge(args, &config),
    };
    process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

fn do_check(args: CheckArgs, config: &Config, no_color: bool) -> i32 {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let writer = StandardStream::stderr(color_choice);
    let term_config = term::Config::default();
    let parser = mdoc::Parser::new(config.parse_options());

    let mut files = SimpleFiles::new();
    let mut failed = 0;
    for file in &args.files {
        let source = match std::fs::read_to_string(file) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", file, e);
                failed += 1;
                continue;
            }
        };

        let doc = parser.parse(&source);
        let file_id = files.add(file.clone(), source);
        match relnote::check_document(&doc) {
            Ok(()) => {
                if !args.quiet {
                    println!("ok: {}", file);
                }
            }
            Err(error) => {
                failed += 1;
                let diagnostic = check_diagnostic(&files, file_id, &error);
                let _ =
                    term::emit_to_write_style(&mut writer.lock(), &term_config, &files, &diagnostic);
            }
        }
    }

    log::debug!("checked {} fragments, {} failed", args.files.len(), failed);
    if failed > 0 { 1 } else { 0 }
}

/// Build a diagnostic for a failed check, labelled on the offending line.
fn check_diagnostic(
    files: &SimpleFiles<String, String>,
    file_id: usize,
    error: &CheckError,
) -> Diagnostic<usize> {
    let diagnostic = Diagnostic::error().with_message(error.to_string());
    let Some(line) = error.line() else {
        let name = files.get(file_id).map(|f| f.name().clone()).unwrap_or_default();
        return diagnostic.with_notes(vec![format!("in {}", name)]);
    };
    match files.line_range(file_id, line.saturating_sub(1)) {
        Ok(range) => diagnostic.with_labels(vec![Label::primary(file_id, range)]),
        Err(_) => diagnostic,
    }
}

fn do_merge(args: MergeArgs, config: &Config) -> i32 {
    let tree = DirTree::new(&args.dir);
    let doc = match relnote::merge(&tree, &config.merge_options()) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("error: {}", e);
            return 1;
        }
    };

    if args.ast {
        println!("{:#?}", doc);
        return 0;
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = outline::write_outline(&mut stdout, &doc) {
        eprintln!("error: {}", e);
        return 1;
    }
    0
}
