mod tracing_config;

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use jsscan::dump::{render_json, render_text};
use jsscan::{Comment, LexResult, ScanOptions, Token, Tokenizer};

#[derive(Parser)]
#[command(name = "jsscan", version, about = "An ECMAScript tokenizer")]
struct Cli {
    /// JavaScript file to tokenize
    file: Option<PathBuf>,

    /// Tokenize inline JavaScript
    #[arg(short = 'e', long = "eval")]
    eval: Option<String>,

    /// JSON file with scan options; flags below are applied on top
    #[arg(long)]
    config: Option<PathBuf>,

    /// Module goal (implies --strict)
    #[arg(long)]
    module: bool,

    #[arg(long)]
    strict: bool,

    #[arg(long)]
    jsx: bool,

    /// Numeric separators and BigInt literals
    #[arg(long)]
    next: bool,

    /// Include the source text of every token
    #[arg(long)]
    raw: bool,

    /// Include line/column end positions
    #[arg(long)]
    loc: bool,

    /// Include [start, end] ranges in JSON output
    #[arg(long)]
    ranges: bool,

    /// Report comments alongside tokens
    #[arg(long)]
    comments: bool,

    /// Disable Annex B HTML-like comments
    #[arg(long = "no-webcompat")]
    no_webcompat: bool,

    /// Print JSON instead of one line per token
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn options(&self) -> Result<ScanOptions, String> {
        let mut options = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
                ScanOptions::from_json(&text)
                    .map_err(|e| format!("Invalid config {}: {e}", path.display()))?
            }
            None => ScanOptions::default(),
        };
        options.module |= self.module;
        options.implied_strict |= self.strict;
        options.jsx |= self.jsx;
        options.next |= self.next;
        options.raw |= self.raw;
        options.loc |= self.loc;
        options.ranges |= self.ranges;
        options.comments |= self.comments;
        if self.no_webcompat {
            options.webcompat = false;
        }
        Ok(options)
    }
}

fn scan(source: &str, options: &ScanOptions) -> LexResult<(Vec<Token>, Vec<Comment>)> {
    let units: Vec<u16> = source.encode_utf16().collect();
    let mut tokenizer = Tokenizer::new(&units, options.context());
    let tokens = tokenizer.by_ref().collect::<LexResult<Vec<_>>>()?;
    let comments = tokenizer.into_scanner().take_comments();
    Ok((tokens, comments))
}

fn render(source: &str, options: &ScanOptions, json: bool) -> Result<String, String> {
    let (tokens, comments) = scan(source, options).map_err(|e| format!("SyntaxError: {e}"))?;
    if json {
        let value = render_json(&tokens, &comments, options.context());
        serde_json::to_string_pretty(&value).map_err(|e| e.to_string())
    } else {
        Ok(render_text(&tokens, &comments))
    }
}

fn tokenize_code(code: &str, options: &ScanOptions, json: bool) -> ExitCode {
    match render(code, options, json) {
        Ok(out) => {
            print!("{out}");
            if json {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::from(1)
        }
    }
}

fn run_file(path: &Path, options: &ScanOptions, json: bool) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            return ExitCode::from(1);
        }
    };
    tokenize_code(&source, options, json)
}

fn run_repl(options: &ScanOptions, json: bool) -> ExitCode {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("jsscan v{}", env!("CARGO_PKG_VERSION"));
    println!("Type JavaScript to see its tokens. Press Ctrl-D to exit.");

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']);
                if !trimmed.trim().is_empty() {
                    match render(trimmed, options, json) {
                        Ok(out) => print!("{out}"),
                        Err(message) => eprintln!("{message}"),
                    }
                }
            }
            Err(e) => {
                eprintln!("Read error: {e}");
                return ExitCode::from(1);
            }
        }
    }

    println!();
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    tracing_config::init_tracing();
    let cli = Cli::parse();

    let options = match cli.options() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(1);
        }
    };

    if let Some(code) = &cli.eval {
        return tokenize_code(code, &options, cli.json);
    }

    if let Some(path) = &cli.file {
        return run_file(path, &options, cli.json);
    }

    run_repl(&options, cli.json)
}
