//! pdlc — compile a playlist definition into an HTML page.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, error, info};

use pdlc::config::Config;
use pdlc::output::output_path;
use pdlc::{Compiler, Diagnostics, Error};

#[derive(Parser, Debug)]
#[command(name = "pdlc", version, about = "Compile a playlist definition into an HTML page")]
struct Cli {
    /// Playlist definition to compile.
    input: PathBuf,

    /// Output file name; its extension is replaced with `.html`.
    /// Defaults to the input's file name.
    name: Option<String>,

    /// Directory to write the page into.
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// What to produce.
    #[arg(short, long, value_enum, default_value_t = Emit::Html)]
    emit: Emit,

    /// Config file. Defaults to ~/.pdlc/config.yaml when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log each compiler phase.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Write the HTML page.
    Html,
    /// Print the parse tree.
    Ast,
    /// Print the validated playlist as YAML.
    Model,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Compile(diagnostics)) => {
            report(&diagnostics);
            ExitCode::from(1)
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> pdlc::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    debug!("config: {config:?}");

    let source = std::fs::read_to_string(&cli.input).map_err(|source| Error::Io {
        path: cli.input.clone(),
        source,
    })?;
    info!("compiling {}", cli.input.display());

    match cli.emit {
        Emit::Ast => {
            let document = Compiler::parse(&source).map_err(Diagnostics::from)?;
            println!("{document:#?}");
        }
        Emit::Model => {
            let playlist = Compiler::check(&source)?;
            let yaml = serde_yaml::to_string(&playlist).map_err(Error::Serialize)?;
            print!("{yaml}");
        }
        Emit::Html => {
            let html = Compiler::compile_with(&source, &config.html)?;
            let out_dir = cli.out_dir.as_deref().or(config.out_dir.as_deref());
            let path = output_path(&cli.input, cli.name.as_deref(), out_dir);
            write_page(&path, &html)?;
            info!("wrote {}", path.display());
        }
    }

    Ok(())
}

fn write_page(path: &Path, html: &str) -> pdlc::Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, html).map_err(io_err)
}

fn report(diagnostics: &Diagnostics) {
    let kind = match diagnostics {
        Diagnostics::Syntax(_) => "syntax",
        Diagnostics::Semantic(_) => "semantic",
    };
    error!("{kind} analysis failed with {} error(s)", diagnostics.len());
    for message in diagnostics.messages() {
        eprintln!("{message}");
    }
}
