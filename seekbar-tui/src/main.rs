//! SeekBar demo — an interest-rate seek bar whose right label tracks the
//! distance to the prime rate.

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use seekbar_core::SeekBarAttributes;
use seekbar_tui::app::{self, DemoState};
use seekbar_tui::{input, ui};

#[derive(Parser, Debug)]
#[command(name = "seekbar-demo", about = "Interest-rate seek bar demo")]
struct Cli {
    /// Attribute file (TOML, or JSON with a .json extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, allow_negative_numbers = true)]
    minimum: Option<f32>,

    #[arg(long, allow_negative_numbers = true)]
    maximum: Option<f32>,

    #[arg(long, allow_negative_numbers = true)]
    start: Option<f32>,

    #[arg(long, allow_negative_numbers = true)]
    step: Option<f32>,

    /// Left label template, e.g. "%s%%"
    #[arg(long)]
    left_label: Option<String>,

    /// Right label template; replaces the prime-rate label
    #[arg(long)]
    right_label: Option<String>,

    /// Write logs here (filtered by RUST_LOG); the terminal belongs to the UI
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> SeekBarAttributes {
        SeekBarAttributes {
            minimum: self.minimum,
            maximum: self.maximum,
            start: self.start,
            step: self.step,
            left_label_template: self.left_label.clone(),
            right_label_template: self.right_label.clone(),
        }
    }

    fn attributes(&self) -> Result<SeekBarAttributes> {
        let mut attrs = app::default_attributes();
        if let Some(path) = &self.config {
            let file = SeekBarAttributes::load(path)
                .with_context(|| format!("loading attributes from {}", path.display()))?;
            attrs = attrs.merge(file);
        }
        Ok(attrs.merge(self.overrides()))
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let attrs = cli.attributes()?;
    tracing::info!(?attrs, "starting seek bar demo");
    let mut app = DemoState::new(&attrs);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(value = app.seek_bar.value(), "seek bar demo finished");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DemoState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll keeps the loop responsive without spinning.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_win_over_defaults() {
        let cli = Cli::parse_from(["seekbar-demo", "--maximum", "20", "--step", "0.5"]);
        let attrs = cli.attributes().unwrap();
        assert_eq!(attrs.minimum, Some(5.0));
        assert_eq!(attrs.maximum, Some(20.0));
        assert_eq!(attrs.step, Some(0.5));
    }

    #[test]
    fn negative_minimum_parses() {
        let cli = Cli::parse_from(["seekbar-demo", "--minimum", "-2.5"]);
        assert_eq!(cli.minimum, Some(-2.5));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["seekbar-demo", "--config", "/nonexistent/bar.toml"]);
        assert!(cli.attributes().is_err());
    }
}
