//! notemark CLI - render note Markdown to restricted rich-text HTML

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use notemark::{render_markdown, tokenize, ThemeOverrides};

#[derive(Parser)]
#[command(name = "notemark")]
#[command(author, version)]
#[command(about = "Render Markdown notes to inline-styled HTML for rich-text note widgets")]
#[command(after_help = "\
EXAMPLES:

    # Render a file to stdout
    notemark note.md

    # Render from stdin
    cat note.md | notemark

    # Use a JSON theme and override the note colour
    notemark --theme theme.json --note-color '#FFF59D' note.md

    # Inspect block tokens
    notemark --tokens note.md

Theme files are JSON objects with any of these keys: inlineCodeBg,
inlineCodeFg, quoteBorder, quoteFg, linkColor, taskDoneFg, noteColor.")]
struct Cli {
    /// Input file; reads stdin when absent or `-`
    input: Option<PathBuf>,

    /// JSON theme file
    #[arg(long, value_name = "FILE")]
    theme: Option<PathBuf>,

    /// Note background colour (#RRGGBB), overrides the theme file
    #[arg(long, value_name = "COLOR")]
    note_color: Option<String>,

    /// Link colour (#RRGGBB), overrides the theme file
    #[arg(long, value_name = "COLOR")]
    link_color: Option<String>,

    /// Print block tokens instead of HTML
    #[arg(long)]
    tokens: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn load_theme(cli: &Cli) -> Result<ThemeOverrides> {
    let mut theme = match &cli.theme {
        Some(path) => ThemeOverrides::load(path)?,
        None => ThemeOverrides::default(),
    };
    if let Some(color) = &cli.note_color {
        theme.note_color = Some(color.clone());
    }
    if let Some(color) = &cli.link_color {
        theme.link_color = Some(color.clone());
    }
    Ok(theme)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let input = read_input(cli.input.as_ref())?;
    let mut stdout = io::stdout().lock();

    if cli.tokens {
        for token in tokenize(&input) {
            writeln!(stdout, "{token:#?}")?;
        }
        return Ok(());
    }

    let theme = load_theme(&cli)?;
    log::debug!("rendering with {theme:?}");
    let html = render_markdown(input.as_str(), Some(&theme));
    stdout.write_all(html.as_bytes())?;
    stdout.write_all(b"\n")?;

    Ok(())
}
