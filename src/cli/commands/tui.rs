use anyhow::{Context, Result};
use clap::Args;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::{Config, Timings};
use crate::tui::apps::LoanApplication;
use crate::tui::{Runtime, RuntimeConfig, ThemeVariant};

/// Timings are divided by this in `--fast` mode
const FAST_DIVISOR: u64 = 10;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Color theme (overrides the config file)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeVariant>,

    /// Run every simulated delay ten times faster
    #[arg(long)]
    pub fast: bool,
}

pub async fn run_command(args: RunArgs, config: Config) -> Result<()> {
    let theme = args.theme.unwrap_or(config.ui.theme);
    let timings = if args.fast {
        config.timings.scaled_down(FAST_DIVISOR)
    } else {
        config.timings
    };

    info!("Launching wizard with theme {:?}, timings {:?}", theme, timings);
    launch_tui(timings, RuntimeConfig::with_theme(theme)).await
}

async fn launch_tui(timings: Timings, runtime_config: RuntimeConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut runtime = Runtime::<LoanApplication>::new(timings, runtime_config);

    // Run the TUI loop
    let result = run_tui(&mut terminal, &mut runtime).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    runtime: &mut Runtime<LoanApplication>,
) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        // Process all pending events FIRST for minimal input latency
        let mut should_quit = false;
        while event::poll(Duration::from_millis(0))? {
            let keep_running = match event::read()? {
                Event::Key(key) => runtime.handle_key(key)?,
                Event::Mouse(mouse) => runtime.handle_mouse(mouse)?,
                _ => true,
            };
            if !keep_running {
                should_quit = true;
                break;
            }
        }

        if should_quit || !runtime.poll_timers(Instant::now())? {
            break;
        }

        terminal.draw(|frame| {
            runtime.render(frame);
        })?;

        // Sleep for remainder of 16ms frame (60 FPS)
        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME.checked_sub(elapsed) {
            tokio::time::sleep(remaining).await;
        }
    }

    info!("Wizard closed");
    Ok(())
}
