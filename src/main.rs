use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use verseslides::rendering::text_snapshot;
use verseslides::session::View;
use verseslides::{Session, SessionConfig, Testament, VerseSource};

#[derive(Parser)]
#[command(name = "verseslides", version, about = "Turn scripture passages into responsive-reading slides")]
struct Cli {
    /// Base URL of the verse-lookup API
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the books of a testament (both when omitted)
    Books {
        #[arg(long)]
        testament: Option<Testament>,
    },
    /// Fetch a passage and print its slides
    Show {
        #[command(flatten)]
        passage: PassageArgs,
        /// Print slides as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Text width in columns
        #[arg(long, default_value_t = 72)]
        width: usize,
    },
    /// Fetch a passage and write one slide as a PNG
    Shot {
        #[command(flatten)]
        passage: PassageArgs,
        /// 1-based slide number
        #[arg(long, default_value_t = 1)]
        slide: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Fetch a passage and rasterize every slide
    Export {
        #[command(flatten)]
        passage: PassageArgs,
        /// Print each slide's data URL
        #[arg(long)]
        print: bool,
    },
    /// Interactive session
    Repl,
}

#[derive(Args)]
struct PassageArgs {
    #[arg(long)]
    book: String,
    #[arg(long)]
    chapter: String,
    #[arg(long)]
    from: String,
    #[arg(long)]
    to: String,
    #[arg(long)]
    translation: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("verseslides: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = SessionConfig::default();
    if let Some(base) = cli.api_base {
        config.api_base_url = base;
    }
    if let Some(ms) = cli.timeout_ms {
        config.timeout_ms = ms;
    }

    match cli.command {
        Command::Books { testament } => {
            let testaments = match testament {
                Some(t) => vec![t],
                None => Testament::ALL.to_vec(),
            };
            for t in testaments {
                println!("{}:", t);
                for book in t.books() {
                    println!("  {}", book);
                }
            }
            Ok(())
        }
        Command::Show {
            passage,
            json,
            width,
        } => {
            let session = fetch_passage(&config, &passage)?;
            let deck = session.deck();
            if json {
                println!("{}", serde_json::to_string_pretty(deck.slides())?);
            } else {
                for (i, slide) in deck.slides().iter().enumerate() {
                    let snap = text_snapshot(slide, position(i, deck.len()), width);
                    println!("{}\n{}\n{}\n", snap.title, "=".repeat(snap.title.len()), snap.text);
                }
            }
            Ok(())
        }
        Command::Shot {
            passage,
            slide,
            out,
        } => {
            let session = fetch_passage(&config, &passage)?;
            if slide == 0 || slide > session.deck().len() {
                bail!(
                    "slide {} does not exist; the passage made {} slides",
                    slide,
                    session.deck().len()
                );
            }
            let shot = session.export_slide(slide - 1, &config.render)?;
            std::fs::write(&out, &shot.png_data)
                .with_context(|| format!("writing {}", out.display()))?;
            info!("wrote {}x{} slide to {}", shot.width, shot.height, out.display());
            Ok(())
        }
        Command::Export { passage, print } => {
            let session = fetch_passage(&config, &passage)?;
            for (i, shot) in session.export_all(&config.render)?.iter().enumerate() {
                let url = shot.to_data_url();
                info!(
                    "slide {}: {}x{} png, {} byte data URL, sha256 {}",
                    i + 1,
                    shot.width,
                    shot.height,
                    url.len(),
                    shot.digest()
                );
                if print {
                    println!("{}", url);
                }
            }
            Ok(())
        }
        Command::Repl => repl(&config),
    }
}

fn position(index: usize, total: usize) -> verseslides::SlidePosition {
    verseslides::SlidePosition::from_index(index, total)
}

fn fetch_passage(config: &SessionConfig, passage: &PassageArgs) -> anyhow::Result<Session> {
    let book = verseslides::canon::canonical_name(&passage.book)
        .with_context(|| format!("unknown book '{}'", passage.book))?;
    let testament = verseslides::canon::testament_of(book)
        .with_context(|| format!("no testament contains '{}'", book))?;

    let mut session = Session::new(config);
    session.set_testament(testament);
    session.set_book(book)?;
    session.set_chapter(passage.chapter.as_str());
    session.set_from_verse(passage.from.as_str());
    session.set_to_verse(passage.to.as_str());
    if let Some(t) = &passage.translation {
        session.set_translation(t.as_str());
    }

    let source = verseslides::new_verse_source(config.clone())?;
    session
        .add_slides(&source)
        .with_context(|| format!("fetching {} {}", book, passage.chapter))?;
    Ok(session)
}

const REPL_HELP: &str = "\
commands:
  testament old|new     book NAME       chapter N
  from N                to N            translation CODE
  add                   next | n        prev | p
  go N                  rm N            list
  show                  export          help
  quit";

fn repl(config: &SessionConfig) -> anyhow::Result<()> {
    let source = verseslides::new_verse_source(config.clone())?;
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut out = io::stdout();

    println!("{}", REPL_HELP);
    prompt(&mut out, &session)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            prompt(&mut out, &session)?;
            continue;
        }
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };
        match cmd {
            "quit" | "q" | "exit" => break,
            "help" | "?" => println!("{}", REPL_HELP),
            _ => {
                if let Err(e) = repl_command(&mut session, &source, config, cmd, arg) {
                    println!("! {}", e);
                }
            }
        }
        prompt(&mut out, &session)?;
    }
    Ok(())
}

fn repl_command(
    session: &mut Session,
    source: &impl VerseSource,
    config: &SessionConfig,
    cmd: &str,
    arg: &str,
) -> anyhow::Result<()> {
    match cmd {
        "testament" => session.set_testament(arg.parse()?),
        "book" => session.set_book(arg)?,
        "chapter" => session.set_chapter(arg),
        "from" => session.set_from_verse(arg),
        "to" => session.set_to_verse(arg),
        "translation" => session.set_translation(arg),
        "add" => match session.add_slides(source) {
            Ok(n) => {
                println!("added {} slides", n);
                print_current(session);
            }
            Err(e) => {
                warn!("add failed: {}", e);
                if let Some(msg) = session.error() {
                    println!("! {}", msg);
                }
            }
        },
        "next" | "n" => {
            session.next();
            print_current(session);
        }
        "prev" | "p" => {
            session.prev();
            print_current(session);
        }
        "go" => {
            session.go_to_slide(slide_index(arg)?)?;
            print_current(session);
        }
        "rm" => session.remove_slide(slide_index(arg)?)?,
        "list" => {
            session.show_list();
            let rows = session.list_entries();
            if rows.is_empty() {
                println!("No slides yet");
            }
            for row in rows {
                println!("{} {}", if row.current { ">" } else { " " }, row.label);
            }
        }
        "show" => {
            session.show_slide();
            print_current(session);
        }
        "export" => {
            for (i, shot) in session.export_all(&config.render)?.iter().enumerate() {
                println!(
                    "slide {}: {}x{} png, sha256 {}",
                    i + 1,
                    shot.width,
                    shot.height,
                    shot.digest()
                );
            }
        }
        other => bail!("unknown command '{}' (try help)", other),
    }
    Ok(())
}

/// Parse a 1-based slide number into a deck index
fn slide_index(arg: &str) -> anyhow::Result<usize> {
    let n: usize = arg
        .parse()
        .with_context(|| format!("'{}' is not a slide number", arg))?;
    if n == 0 {
        bail!("slides are numbered from 1");
    }
    Ok(n - 1)
}

fn print_current(session: &Session) {
    match (session.current_slide(), session.position()) {
        (Some(slide), Some(pos)) => {
            let snap = text_snapshot(slide, pos, 72);
            println!("{}\n{}", snap.title, snap.text);
        }
        _ => println!("No slides yet"),
    }
}

fn prompt(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let view = match session.view() {
        View::Slide => "slide",
        View::List => "list",
    };
    let status = match session.position() {
        Some(p) => format!("{}/{}", p.number, p.total),
        None => "empty".to_string(),
    };
    write!(
        out,
        "[{} | {} {}:{}-{} ({}) | {} {}]> ",
        session.testament(),
        if session.book().is_empty() { "-" } else { session.book() },
        session.chapter(),
        session.from_verse(),
        session.to_verse(),
        session.translation(),
        view,
        status
    )?;
    out.flush()
}
