//! bracefmt CLI
//!
//! Usage:
//!   bracefmt [OPTIONS] [TEMPLATE] [ARGS]...
//!
//! Options:
//!   -f, --file <FILE>         Read the template from a file
//!   -c, --context <FILE>      Context file for {{named}} placeholders (TOML format)
//!   -s, --set <KEY=VALUE>     Add a context entry (repeatable)
//!       --strings             Pass every argument as a string
//!       --check               Report placeholders that were left unresolved
//!   -n, --no-newline          Do not print a trailing newline
//!   -h, --help                Print help

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use clap::Parser;

use bracefmt::{render, Context, Lookup, Value};

#[derive(Parser)]
#[command(name = "bracefmt")]
#[command(about = "Render {} and {{mustache}} templates")]
struct Cli {
    /// Template text (reads from --file or stdin if not provided)
    template: Option<String>,

    /// Positional arguments substituted into {} and {N} placeholders
    #[arg(allow_negative_numbers = true)]
    args: Vec<String>,

    /// Read the template from a file; every positional value becomes an argument
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Context file for {{named}} placeholders (TOML format)
    #[arg(short, long)]
    context: Option<PathBuf>,

    /// Add or override a context entry
    #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    set: Vec<(String, String)>,

    /// Pass every argument as a string instead of inferring numbers and booleans
    #[arg(long)]
    strings: bool,

    /// Report placeholders that were left unresolved and exit with status 2
    #[arg(long)]
    check: bool,

    /// Do not print a trailing newline
    #[arg(short, long)]
    no_newline: bool,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

/// Guess the type of a command-line argument
fn infer_value(arg: &str) -> Value<'_> {
    match arg {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(i) = arg.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(u) = arg.parse::<u64>() {
        return Value::from(u);
    }
    let numeric = arg.bytes().any(|b| b.is_ascii_digit())
        && arg
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if numeric {
        if let Ok(f) = arg.parse::<f64>() {
            return Value::from(f);
        }
    }
    Value::from(arg)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // With --file, the first positional is an argument rather than the template
    let mut positional: Vec<String> = Vec::new();
    let (name, source) = match &cli.file {
        Some(path) => {
            positional.extend(cli.template.clone());
            match fs::read_to_string(path) {
                Ok(content) => (path.display().to_string(), content),
                Err(e) => {
                    eprintln!("Error reading file '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            }
        }
        None => match &cli.template {
            Some(template) => ("<template>".to_string(), template.clone()),
            None if io::stdin().is_terminal() => {
                eprintln!("Error: no template given (pass TEMPLATE, --file, or pipe it on stdin)");
                std::process::exit(1);
            }
            None => {
                let mut buffer = String::new();
                if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
                ("<stdin>".to_string(), buffer)
            }
        },
    };
    positional.extend(cli.args.iter().cloned());

    // Load context
    let mut context = match &cli.context {
        Some(path) => match Context::from_file(path) {
            Ok(context) => Some(context),
            Err(e) => {
                eprintln!("Error loading context '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => None,
    };
    if !cli.set.is_empty() {
        context
            .get_or_insert_with(Context::new)
            .extend(cli.set.iter().cloned());
    }

    let args: Vec<Value<'_>> = positional
        .iter()
        .map(|arg| {
            if cli.strings {
                Value::from(arg.as_str())
            } else {
                infer_value(arg)
            }
        })
        .collect();

    let lookup = context.as_ref().map(|c| c as &dyn Lookup);
    let rendered = render(source.as_str(), &args, lookup);
    log::debug!(
        "rendered {} bytes with {} fallbacks",
        rendered.output.len(),
        rendered.fallbacks.len()
    );

    let mut stdout = io::stdout().lock();
    let written = if cli.no_newline {
        write!(stdout, "{}", rendered.output)
    } else {
        writeln!(stdout, "{}", rendered.output)
    };
    if let Err(e) = written.and_then(|_| stdout.flush()) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }

    if cli.check && !rendered.is_complete() {
        let color = io::stderr().is_terminal();
        for fallback in &rendered.fallbacks {
            eprint!("{}", fallback.report(&source, &name, color));
        }
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_value() {
        assert_eq!(infer_value("true"), Value::Bool(true));
        assert_eq!(infer_value("42"), Value::from(42i64));
        assert_eq!(infer_value("-7"), Value::from(-7i64));
        assert_eq!(infer_value("18446744073709551615"), Value::UInt(u64::MAX));
        assert_eq!(infer_value("3.14"), Value::Float(3.14));
        assert_eq!(infer_value("1e3"), Value::Float(1000.0));
        assert_eq!(infer_value("inf"), Value::from("inf"));
        assert_eq!(infer_value("hello"), Value::from("hello"));
        assert_eq!(infer_value("1.2.3"), Value::from("1.2.3"));
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("player1=John"),
            Ok(("player1".to_string(), "John".to_string()))
        );
        assert_eq!(
            parse_key_value("eq=a=b"),
            Ok(("eq".to_string(), "a=b".to_string()))
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::parse_from([
            "bracefmt",
            "{} {{who}}",
            "-5",
            "--set",
            "who=world",
            "--check",
        ]);
        assert_eq!(cli.template.as_deref(), Some("{} {{who}}"));
        assert_eq!(cli.args, vec!["-5".to_string()]);
        assert_eq!(cli.set, vec![("who".to_string(), "world".to_string())]);
        assert!(cli.check);
    }
}
