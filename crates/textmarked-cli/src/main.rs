use anyhow::{Context, Result, bail};
use std::{env, fs, path::PathBuf, process};
use textmarked_config::Config;
use textmarked_engine::{FormatCommand, Position, Session};

const USAGE: &str = "Usage: textmarked [--config <path>] [--html] [--in-place] <file> \
                     [<command> <line:offset> <line:offset>]";

/// A format request: command plus raw anchor/focus endpoints
#[derive(Debug, PartialEq)]
struct FormatRequest {
    command: FormatCommand,
    anchor: Position,
    focus: Position,
}

#[derive(Debug, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    html: bool,
    in_place: bool,
    file: PathBuf,
    format: Option<FormatRequest>,
}

fn parse_args<I>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut config = None;
    let mut html = false;
    let mut in_place = false;
    let mut positional = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => bail!("--config needs a path"),
            },
            "--html" => html = true,
            "--in-place" => in_place = true,
            flag if flag.starts_with("--") => bail!("Unknown option {flag}"),
            _ => positional.push(arg),
        }
    }

    let format = match positional.as_slice() {
        [_] => None,
        [_, command, anchor, focus] => Some(FormatRequest {
            command: command.parse()?,
            anchor: anchor.parse()?,
            focus: focus.parse()?,
        }),
        _ => bail!("Expected a file, optionally followed by <command> <anchor> <focus>"),
    };

    if in_place && format.is_none() {
        bail!("--in-place needs a command to apply");
    }

    Ok(Args {
        config,
        html,
        in_place,
        file: PathBuf::from(&positional[0]),
        format,
    })
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("No config file found at {}", path.display())),
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

/// Run one invocation, returning what should be printed (if anything).
fn run(args: Args) -> Result<Option<String>> {
    let config = load_config(args.config.as_ref())?;

    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let mut session = Session::new(&text, config.editor);

    if let Some(request) = &args.format {
        if session.select(request.anchor, request.focus).is_none() {
            log::warn!(
                "No actionable selection at {}:{}..{}:{}",
                request.anchor.line,
                request.anchor.offset,
                request.focus.line,
                request.focus.offset
            );
        } else if session.apply(request.command).is_none() {
            log::warn!("{} is not enabled in the editor options", request.command);
        }
    }

    if args.in_place {
        fs::write(&args.file, session.text())
            .with_context(|| format!("Failed to write {}", args.file.display()))?;
        return Ok(None);
    }

    Ok(Some(if args.html {
        session.render()
    } else {
        session.text()
    }))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if let Some(output) = run(args)? {
        println!("{output}");
    }

    Ok(())
}
