//! Command-line view of the example catalog.
//!
//! Lists, prints and exports examples so the snippets can be pasted into RxViz
//! or shipped to a host as a JSON module. `--catalog PATH` (or
//! `RXVIZ_EXAMPLES_CATALOG`) swaps the built-in table for a catalog document.

use anyhow::{Context, Result, bail};
use rxviz_examples::{CatalogSource, ExampleCatalog, init_tracing};
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse(env::args_os().skip(1))?;
    debug!(command = ?cli.command, "rxviz-examples invoked");

    if let Command::Validate(path) = &cli.command {
        let catalog = ExampleCatalog::load(path)?;
        println!(
            "{}: {} examples, custom entry '{}'",
            path.display(),
            catalog.len(),
            catalog.custom().name
        );
        return Ok(());
    }
    if let Command::Help = cli.command {
        print!("{}", usage());
        return Ok(());
    }

    let catalog = CatalogSource::resolve(cli.catalog).load()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::List => {
            for entry in catalog.list() {
                writeln!(out, "{}\t{}", entry.key, entry.name)?;
            }
        }
        Command::Keys => {
            for key in catalog.keys() {
                writeln!(out, "{key}")?;
            }
        }
        Command::Show(key) => {
            let entry = catalog.require(&key)?;
            out.write_all(entry.code.as_bytes())?;
        }
        Command::Info(key) => {
            let entry = catalog.require(&key)?;
            writeln!(out, "{}", serde_json::to_string(&entry.body())?)?;
        }
        Command::Export { bare } => {
            let document = catalog.to_document();
            let rendered = if bare {
                serde_json::to_string_pretty(&document.examples)?
            } else {
                serde_json::to_string_pretty(&document)?
            };
            writeln!(out, "{rendered}")?;
        }
        Command::Validate(_) | Command::Help => {}
    }
    out.flush().context("flushing stdout")?;
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    List,
    Keys,
    Show(String),
    Info(String),
    Export { bare: bool },
    Validate(PathBuf),
    Help,
}

#[derive(Debug)]
struct Cli {
    catalog: Option<PathBuf>,
    command: Command,
}

impl Cli {
    fn parse(args: impl IntoIterator<Item = OsString>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut catalog: Option<PathBuf> = None;
        let mut command: Option<Command> = None;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            if command.is_some() {
                match (&mut command, arg.as_str()) {
                    (Some(Command::Export { bare }), "--bare") => {
                        *bare = true;
                        continue;
                    }
                    _ => bail!("unexpected argument: {arg}\n\n{}", usage()),
                }
            }
            command = Some(match arg.as_str() {
                "--catalog" => {
                    if catalog.is_some() {
                        bail!("--catalog may only be provided once");
                    }
                    catalog = Some(PathBuf::from(next_value(&mut args, "--catalog")?));
                    continue;
                }
                "--help" | "-h" | "help" => Command::Help,
                "list" => Command::List,
                "keys" => Command::Keys,
                "show" => Command::Show(next_value(&mut args, "show")?),
                "info" => Command::Info(next_value(&mut args, "info")?),
                "export" => Command::Export { bare: false },
                "validate" => Command::Validate(PathBuf::from(next_value(&mut args, "validate")?)),
                other => bail!("unknown command: {other}\n\n{}", usage()),
            });
        }

        let Some(command) = command else {
            bail!("missing command\n\n{}", usage());
        };
        Ok(Cli { catalog, command })
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: rxviz-examples [--catalog PATH] <command>\n\
Commands:\n  \
list              print key and name of every example\n  \
keys              print example keys in menu order\n  \
show KEY          print the example's code\n  \
info KEY          print the example as JSON (name, code, timeWindow)\n  \
export [--bare]   print the catalog document; --bare prints only the examples map\n  \
validate PATH     check a catalog document and print a summary\n\
Set RXVIZ_EXAMPLES_CATALOG to use a catalog document by default.\n"
}
