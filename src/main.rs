use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{bail, Context, Result};
use cjkspace::Spacer;
use log::{debug, info};

const USAGE: &str = "\
Usage: cjkspace [FILE]...

Insert a space between CJK characters and adjacent Latin letters or digits.

Each FILE is rewritten in place. With no FILE, or when FILE is -, read
standard input and write the result to standard output.

Options:
  -h, --help    Print this help text

Set RUST_LOG=info to list the files rewritten.
";

#[derive(Debug, PartialEq, Eq)]
enum Target {
    Stdio,
    File(PathBuf),
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Run(Vec<Target>),
}

fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut targets = vec![];
    let mut only_paths = false;

    for arg in args {
        match arg.as_str() {
            v if only_paths => targets.push(Target::File(v.into())),
            "-h" | "--help" => return Ok(Command::Help),
            "--" => only_paths = true,
            // Standard input can only be consumed once.
            "-" if targets.contains(&Target::Stdio) => {}
            "-" => targets.push(Target::Stdio),
            v if v.starts_with('-') => bail!("unknown option {v:?}\n\n{USAGE}"),
            v => targets.push(Target::File(v.into())),
        }
    }

    if targets.is_empty() {
        targets.push(Target::Stdio);
    }

    Ok(Command::Run(targets))
}

/// Rewrite the file at `path` in place, returning true if it changed.
fn process_file(spacer: &Spacer, path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let spaced = spacer.add_spaces(&content);
    if spaced == content {
        debug!("{} unchanged", path.display());
        return Ok(false);
    }

    replace_file(path, &spaced).with_context(|| format!("failed to write {}", path.display()))?;
    info!(
        "rewrote {} ({} spaces added)",
        path.display(),
        spaced.len() - content.len()
    );

    Ok(true)
}

/// Replace the contents of `path` with `content` by writing a sibling file and
/// renaming it over `path`, so a failed write leaves the original intact.
fn replace_file(path: &Path, content: &str) -> io::Result<()> {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".cjkspace.tmp");
    let tmp = path.with_file_name(name);

    let res = fs::write(&tmp, content)
        .and_then(|_| fs::metadata(path))
        .and_then(|m| fs::set_permissions(&tmp, m.permissions()))
        .and_then(|_| fs::rename(&tmp, path));
    if res.is_err() {
        let _ = fs::remove_file(&tmp);
    }

    res
}

fn process_stream<R, W>(spacer: &Spacer, mut input: R, mut output: W) -> Result<()>
where
    R: Read,
    W: Write,
{
    let mut buf = String::new();
    input
        .read_to_string(&mut buf)
        .context("failed to read standard input")?;

    output
        .write_all(spacer.add_spaces(&buf).as_bytes())
        .and_then(|_| output.flush())
        .context("failed to write standard output")
}

fn process_stdio(spacer: &Spacer) -> Result<()> {
    process_stream(spacer, io::stdin().lock(), io::stdout().lock())
}

fn run() -> Result<()> {
    let targets = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Command::Run(v) => v,
    };

    let spacer = Spacer::new();
    for target in targets {
        match target {
            Target::Stdio => process_stdio(&spacer)?,
            Target::File(path) => {
                process_file(&spacer, &path)?;
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cjkspace: {e:#}");
            ExitCode::FAILURE
        }
    }
}
