use aligndown_config::Config;
use aligndown_engine::{Alignment, Cmd, Document, io};
use anyhow::Result;
use relative_path::RelativePathBuf;
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <document> <start> <end> <left|center|right|none>");
    eprintln!();
    eprintln!("Aligns the selected byte range of <document> and rewrites the file in place.");
    eprintln!("`none` strips the markers of the block enclosing the selection instead.");
    eprintln!("Prints the new selection as <start>..<end> on success.");
    eprintln!();
    eprintln!("Relative document paths resolve against docs_path from the config file");
    eprintln!("at {}, when present.", Config::config_path().display());
    process::exit(1);
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        usage(&args[0]);
    }

    let start: usize = match args[2].parse() {
        Ok(offset) => offset,
        Err(_) => {
            eprintln!("Error: <start> must be a byte offset, got '{}'", args[2]);
            usage(&args[0]);
        }
    };
    let end: usize = match args[3].parse() {
        Ok(offset) => offset,
        Err(_) => {
            eprintln!("Error: <end> must be a byte offset, got '{}'", args[3]);
            usage(&args[0]);
        }
    };

    let cmd = match args[4].as_str() {
        "left" => Cmd::Align {
            range: start..end,
            alignment: Alignment::Left,
        },
        "center" => Cmd::Align {
            range: start..end,
            alignment: Alignment::Center,
        },
        "right" => Cmd::Align {
            range: start..end,
            alignment: Alignment::Right,
        },
        "none" => Cmd::Unalign { range: start..end },
        other => {
            eprintln!("Error: unknown alignment '{other}'");
            usage(&args[0]);
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring config file: {e}");
            None
        }
    };

    let (docs_root, relative) = resolve_document(&args[1], config.as_ref())?;
    if let Err(e) = io::validate_docs_dir(&docs_root) {
        eprintln!(
            "Error: documents directory '{}' is invalid: {e}",
            docs_root.display()
        );
        process::exit(1);
    }

    let content = match io::read_document(&relative, &docs_root) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut document = Document::from_bytes(content.as_bytes())?;
    let patch = match document.apply(cmd) {
        Ok(patch) => patch,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    if config.as_ref().is_some_and(|c| c.backup) {
        let backup = RelativePathBuf::from(format!("{relative}.bak"));
        io::write_document(&backup, &docs_root, &content)?;
    }
    io::write_document(&relative, &docs_root, &document.text())?;

    println!(
        "{}..{}",
        patch.new_selection.start, patch.new_selection.end
    );
    Ok(())
}

/// Splits the document argument into a docs root and a relative path.
/// Absolute paths stand alone; relative ones resolve against the
/// configured docs_path, falling back to the current directory.
fn resolve_document(arg: &str, config: Option<&Config>) -> Result<(PathBuf, RelativePathBuf)> {
    let path = Path::new(arg);
    if path.is_absolute() {
        let root = match path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("/"),
        };
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => anyhow::bail!("'{arg}' is not a document path"),
        };
        return Ok((root, RelativePathBuf::from(name)));
    }

    let root = match config {
        Some(config) => config.docs_path.clone(),
        None => env::current_dir()?,
    };
    Ok((root, RelativePathBuf::from(arg)))
}
