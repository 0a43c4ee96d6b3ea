use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use runewrap::config::{self, WrapOptions};
use runewrap::source::{DEFAULT_CHUNK_SIZE, ReaderSource};
use runewrap::Wrapper;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "runewrap",
    version,
    about = "Word-wrap UTF-8 text to a fixed column width"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Wrap a file (or stdin) and print the result.
    Wrap(WrapArgs),
    /// Print the effective options as JSON.
    Config(OptionArgs),
}

#[derive(Args, Debug)]
struct OptionArgs {
    /// JSON options file (default: <config dir>/runewrap/config.json if it exists).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Maximum runes per row, indent included.
    #[arg(short, long)]
    width: Option<usize>,
    /// Indent for the first row.
    #[arg(long, allow_hyphen_values = true)]
    first_indent: Option<String>,
    /// Indent for every row after the first.
    #[arg(long, allow_hyphen_values = true)]
    indent: Option<String>,
    /// Keep input line breaks as row ends instead of folding them into spaces.
    #[arg(long, default_value_t = false)]
    keep_line_breaks: bool,
    /// Spaces per tab.
    #[arg(short, long)]
    tabstop: Option<usize>,
    /// Row separator; understands \n, \r, \t and \\ escapes.
    #[arg(long, allow_hyphen_values = true)]
    separator: Option<String>,
}

#[derive(Args, Debug)]
struct WrapArgs {
    /// Input file; reads stdin when omitted or "-".
    input: Option<PathBuf>,
    /// Write the wrapped text here instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Bytes per read.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
    #[command(flatten)]
    options: OptionArgs,
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join("runewrap").join("config.json"))
        .filter(|p| p.is_file())
}

/// Defaults, then the config file, then command-line flags.
fn resolve_options(args: &OptionArgs) -> Result<WrapOptions> {
    let mut opts = match args.config.clone().or_else(default_config_path) {
        Some(path) => {
            debug!("loading options from {}", path.display());
            config::load_options(&path)?
        }
        None => WrapOptions::default(),
    };

    if let Some(w) = args.width {
        opts.column_width = w;
    }
    if let Some(s) = &args.first_indent {
        opts.first_row_indent = s.clone();
    }
    if let Some(s) = &args.indent {
        opts.subsequent_row_indent = s.clone();
    }
    if args.keep_line_breaks {
        opts.fold_line_breaks = false;
    }
    if let Some(t) = args.tabstop {
        opts.tabstop_width = t;
    }
    if let Some(s) = &args.separator {
        opts.line_separator = unescape(s);
    }
    Ok(opts)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Wrap(args) => cmd_wrap(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn cmd_wrap(args: WrapArgs) -> Result<()> {
    let opts = resolve_options(&args.options)?;
    let wrapper = Wrapper::new(opts.build().context("invalid wrap options")?);

    let wrapped = match args.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            let mut source = ReaderSource::with_chunk_size(file, args.chunk_size);
            wrapper
                .wrap_from_stream(&mut source)
                .with_context(|| format!("wrapping {}", path.display()))?
        }
        _ => {
            let mut source = ReaderSource::with_chunk_size(io::stdin().lock(), args.chunk_size);
            wrapper
                .wrap_from_stream(&mut source)
                .context("wrapping stdin")?
        }
    };

    let mut text = wrapped;
    if !text.is_empty() {
        text.push('\n');
    }

    match args.out.as_ref() {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {} bytes to {}", text.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn cmd_config(args: OptionArgs) -> Result<()> {
    let config = resolve_options(&args)?
        .build()
        .context("invalid wrap options")?;
    println!("{}", serde_json::to_string_pretty(&config.to_options())?);
    Ok(())
}
