//! The `stashmark` binary.

use std::boxed::Box;
use std::env;
use std::error::Error;
use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use stashmark::{format_html, Options};

const EXIT_PARSE_CONFIG: i32 = 2;
const EXIT_READ_INPUT: i32 = 3;

#[derive(Debug, Parser)]
#[command(about, author, version)]
#[command(
    after_help = "By default, stashmark will attempt to read command-line options from a config file specified by --config-file.  This behaviour can be disabled by passing --no-config.  It is not an error if the config file does not exist."
)]
struct Cli {
    /// Markup file(s) to convert; or standard input if none passed
    #[arg(value_name = "FILE")]
    files: Option<Vec<PathBuf>>,

    /// Path to config file containing command-line arguments
    #[arg(short, long, value_name = "PATH", default_value = get_default_config_path())]
    config_file: String,

    /// Do not read the config file
    #[arg(long)]
    no_config: bool,

    /// Escape every raw tag, including allow-listed ones
    #[arg(long)]
    escape: bool,

    /// Add a language- class to fenced code blocks with an info string
    #[arg(long)]
    code_lang_class: bool,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args: Vec<OsString> = env::args_os().collect();

    let cli = {
        let cli = Cli::parse();
        if cli.no_config {
            cli
        } else {
            let config_file_path = &cli.config_file;
            if let Ok(config) = fs::read_to_string(config_file_path) {
                log::debug!("reading options from {}", config_file_path);
                args.splice(
                    1..1,
                    shell_words::split(&config)
                        .unwrap_or_else(|e| {
                            eprintln!("failed to parse {}: {}", config_file_path, e);
                            process::exit(EXIT_PARSE_CONFIG);
                        })
                        .into_iter()
                        .map(Into::into),
                );
            }
            Cli::parse_from(args)
        }
    };

    let options = Options {
        escape: cli.escape,
        code_lang_class: cli.code_lang_class,
    };

    let mut s: Vec<u8> = Vec::with_capacity(2048);

    match &cli.files {
        None => {
            io::stdin().read_to_end(&mut s)?;
        }
        Some(files) => {
            for f in files {
                match fs::File::open(f) {
                    Ok(mut io) => {
                        io.read_to_end(&mut s)?;
                    }
                    Err(e) => {
                        eprintln!("failed to read {}: {}", f.display(), e);
                        process::exit(EXIT_READ_INPUT);
                    }
                }
            }
        }
    };

    let text = String::from_utf8(s)?;

    if let Some(output_filename) = cli.output {
        let mut bw = BufWriter::new(fs::File::create(output_filename)?);
        render(&text, &options, &mut bw)?;
        bw.flush()?;
    } else {
        let stdout = io::stdout();
        let mut bw = BufWriter::new(stdout.lock());
        render(&text, &options, &mut bw)?;
        bw.flush()?;
    };

    Ok(())
}

fn render<W: Write>(text: &str, options: &Options, output: &mut W) -> io::Result<()> {
    fmt2io::write(&mut *output, |w| format_html(text, options, w))?;
    output.write_all(b"\n")
}

#[cfg(all(not(windows), not(target_arch = "wasm32")))]
fn get_default_config_path() -> String {
    if let Ok(xdg_dirs) = xdg::BaseDirectories::with_prefix("stashmark") {
        if let Ok(path) = xdg_dirs.place_config_file("config") {
            if let Some(path_str) = path.to_str() {
                return path_str.into();
            }
        }
    }

    "stashmark.config".into()
}

#[cfg(any(windows, target_arch = "wasm32"))]
fn get_default_config_path() -> String {
    "stashmark.config".into()
}
