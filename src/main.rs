use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use social_icons::app::App;
use social_icons::config::LinksConfig;
use social_icons::{icons, link, render, ui};

#[derive(Parser, Debug)]
#[command(name = "social-icons")]
#[command(author = "Sean Fournier")]
#[command(version)]
#[command(about = "Render social network icon links")]
struct Args {
    /// Links file (defaults to <config dir>/social-icons/links.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the links as HTML or as resolved JSON
    Render {
        /// Class for every link (overrides the links file)
        #[arg(long)]
        class: Option<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Report links that would render nothing
    Check,
    /// Browse the links in the terminal
    Preview,
    /// List supported sites
    Sites,
    /// Write a sample links file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Html,
    Json,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for rendered output
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config_path = args.config.as_deref();

    match args.command {
        Command::Render { class, format } => render_links(config_path, class, format),
        Command::Check => check_links(config_path),
        Command::Preview => run_tui(config_path),
        Command::Sites => {
            for icon in icons::ALL.iter() {
                println!("{:<10} {}", icon.site, icon.name);
            }
            Ok(())
        }
        Command::Init { force } => init_links(config_path, force),
    }
}

fn render_links(path: Option<&Path>, class: Option<String>, format: Format) -> Result<()> {
    let config = LinksConfig::load(path)?;
    let class = class.or(config.class);

    match format {
        Format::Html => println!("{}", render::render_icons(&config.links, class.as_deref())),
        Format::Json => {
            let links = link::resolve_all(&config.links, class.as_deref());
            println!("{}", serde_json::to_string_pretty(&links)?);
        }
    }
    Ok(())
}

fn check_links(path: Option<&Path>) -> Result<()> {
    let config = LinksConfig::load(path)?;
    println!("{}", link::check_report(&config.links));
    Ok(())
}

fn init_links(path: Option<&Path>, force: bool) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => LinksConfig::default_path()?,
    };

    LinksConfig::init(&path, force)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_tui(path: Option<&Path>) -> Result<()> {
    let config = LinksConfig::load(path)?;
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.tick();
    }
    Ok(())
}
