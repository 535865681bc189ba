mod codes;
mod output;
mod resolve;

use {
    getopts::{Options, ParsingStyle},
    log::info,
    once_cell::sync::Lazy,
    output::{status_line, Table},
    std::{error::Error, io, process::exit},
};

pub type Result<T = (), E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Exit status for a command line that could not be parsed.
const USAGE_ERROR: i32 = 2;

fn main() {
    env_logger::Builder::from_env(
        // warnings only, unless RUST_LOG says otherwise
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let (codes, not_found) = if ARGS.terms.is_empty() {
        (codes::STATUS_CODES.to_vec(), 0)
    } else {
        let resolved = resolve::find_codes(&ARGS.terms);
        (resolved.codes, resolved.not_found)
    };

    if let Err(e) = print(&codes) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    info!(
        "printed {} code(s), {} term(s) not found",
        codes.len(),
        not_found
    );
    exit(exit_status(not_found));
}

/// Writes one aligned row per code to stdout.
fn print(codes: &[u16]) -> Result {
    let mut table = Table::default();
    for &code in codes {
        table.push(status_line(code, ARGS.mdn_links));
    }
    table.write_to(io::stdout().lock())?;
    Ok(())
}

/// The number of unmatched terms, capped so it cannot wrap around to a
/// successful status.
fn exit_status(not_found: usize) -> i32 {
    not_found.min(255) as i32
}

static ARGS: Lazy<Args> = Lazy::new(|| {
    args().unwrap_or_else(|s| {
        eprintln!("{}", s);
        exit(USAGE_ERROR);
    })
});

struct Args {
    mdn_links: bool,
    terms: Vec<String>,
}

fn args() -> Result<Args> {
    let args: Vec<String> = std::env::args().collect();
    let bin = args.first().map(String::as_str).unwrap_or("httpcode");
    let mut opts = Options::new();
    opts.parsing_style(ParsingStyle::StopAtFirstFree);
    opts.optflag("m", "mdn", "include MDN links");
    opts.optflag("h", "help", "Print this help text and exit.");

    let usage = opts.usage(&format!(
        "Usage of {bin}:\n\n {bin} [code|text|pattern]...",
        bin = bin
    ));

    let matches = opts
        .parse(normalize_flags(args.get(1..).unwrap_or_default()))
        .map_err(|f| format!("{}\n\n{}", f, usage))?;
    if matches.opt_present("h") {
        eprintln!("{}", usage);
        exit(0);
    }

    Ok(Args {
        mdn_links: matches.opt_present("m"),
        terms: matches.free,
    })
}

/// Rewrites the flag spellings `httpcode` has always accepted but getopts
/// does not: single-dash long names (`-help`, `-mdn`) and explicit boolean
/// values (`-m=true`, `--mdn=false`). Arguments after the first term or `--`
/// are passed through untouched.
fn normalize_flags(args: &[String]) -> Vec<String> {
    let mut in_flags = true;
    args.iter()
        .filter_map(|arg| {
            if arg == "--" || arg == "-" || !arg.starts_with('-') {
                in_flags = false;
            }
            if in_flags {
                normalize_flag(arg)
            } else {
                Some(arg.clone())
            }
        })
        .collect()
}

/// `None` drops the flag, which is how `-m=false` is spelled.
fn normalize_flag(arg: &str) -> Option<String> {
    let name = arg.strip_prefix("--").unwrap_or(&arg[1..]);
    let (name, value) = match name.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (name, None),
    };
    match (name, value) {
        ("h" | "help", None) => Some("--help".to_string()),
        ("m" | "mdn", None) => Some("--mdn".to_string()),
        ("m" | "mdn", Some("1" | "t" | "T" | "true" | "TRUE" | "True")) => {
            Some("--mdn".to_string())
        }
        ("m" | "mdn", Some("0" | "f" | "F" | "false" | "FALSE" | "False")) => None,
        _ => Some(arg.to_string()),
    }
}
