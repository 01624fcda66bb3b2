use std::io::{self, Write};
use std::path::{Path, PathBuf};

use folio::app::{EventResult, Workbench};
use folio::kernel::services::adapters::{
    ensure_settings_file, get_content_path, load_settings, FixedCredentialGate, JsonFileStore,
    MemoryStore,
};
use folio::kernel::services::ports::{Settings, SnapshotStore};
use folio::kernel::EditSession;

mod logging;

const USAGE: &str = "usage: folio [--ephemeral | --content <path>]";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ContentTarget {
    /// Keep content in memory only.
    Ephemeral,
    File(PathBuf),
}

#[derive(Debug)]
struct Startup {
    content: ContentTarget,
}

fn resolve_startup(
    cwd: &Path,
    args: &[String],
    settings: &Settings,
    default_content: Option<PathBuf>,
) -> io::Result<Startup> {
    let mut content: Option<ContentTarget> = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--ephemeral" => content = Some(ContentTarget::Ephemeral),
            "--content" => {
                let path = iter.next().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "--content needs a path")
                })?;
                content = Some(ContentTarget::File(cwd.join(path)));
            }
            other => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("unexpected argument: {}\n{}", other, USAGE),
                ))
            }
        }
    }

    let content = match content {
        Some(content) => content,
        None => settings
            .content_path
            .as_ref()
            .map(|path| cwd.join(path))
            .or(default_content)
            .map(ContentTarget::File)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "Cannot determine content file location",
                )
            })?,
    };

    Ok(Startup { content })
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }

    let _logging = logging::init();

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "settings file unavailable, using defaults");
    }
    let settings = load_settings().unwrap_or_default();

    let cwd = std::env::current_dir()?;
    let startup = resolve_startup(&cwd, &args, &settings, get_content_path())?;
    tracing::info!(content = ?startup.content, "starting");

    let store: Box<dyn SnapshotStore> = match startup.content {
        ContentTarget::Ephemeral => Box::new(MemoryStore::new()),
        ContentTarget::File(path) => Box::new(JsonFileStore::new(path)),
    };
    let auth = FixedCredentialGate::new(settings.credentials.clone());
    let mut workbench = Workbench::new(EditSession::open(store, auth));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    workbench.render_view(&mut stdout)?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let Some(line) = read_line(&stdin)? else {
            break;
        };

        let mut confirm =
            |question: &str| -> bool { ask(question, &mut stdin.lock(), &mut io::stdout()) };
        if workbench.handle_line(&line, &mut stdout, &mut confirm)? == EventResult::Quit {
            break;
        }
    }

    tracing::info!("exiting");
    Ok(())
}

/// Prompts with `question` and reads a yes/no answer. Anything but `y`/`yes`,
/// including end of input or a read error, counts as no.
fn ask(question: &str, input: &mut impl io::BufRead, out: &mut impl Write) -> bool {
    if let Err(e) = write!(out, "{} [y/N] ", question).and_then(|()| out.flush()) {
        tracing::debug!(error = %e, "failed to write confirmation prompt");
    }
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) => false,
        Ok(_) => {
            let answer = answer.trim();
            answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
        }
        Err(e) => {
            tracing::debug!(error = %e, "failed to read confirmation answer");
            false
        }
    }
}

/// `None` at end of input.
fn read_line(stdin: &io::Stdin) -> io::Result<Option<String>> {
    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
#[path = "../tests/unit/cli_startup.rs"]
mod tests;
