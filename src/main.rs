use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use autoscroll::app::App;
use autoscroll::config;
use autoscroll::input::InputReader;

/// Timed vertical auto-scroller for text
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Auto-scrolling text viewer: waits, then scrolls text upward one step per tick"
)]
struct Args {
    /// Input text file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Seconds to wait before scrolling starts
    #[arg(long)]
    delay: Option<u64>,

    /// Pixels moved per tick (negative scrolls downward)
    #[arg(long, allow_hyphen_values = true)]
    step: Option<i32>,

    /// Tick interval in 50ms units
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    speed: Option<u32>,

    /// Jump back to the top when scrolling finishes
    #[arg(long)]
    reset_on_finish: bool,

    /// Pixel height of one rendered row
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    line_height: Option<i32>,
}

impl Args {
    /// Command line flags win over the config file
    fn apply_to(&self, config: &mut config::Config) {
        if let Some(delay) = self.delay {
            config.scroll.delay_start = delay;
        }
        if let Some(step) = self.step {
            config.scroll.step = step;
        }
        if let Some(speed) = self.speed {
            config.scroll.speed = speed;
        }
        if self.reset_on_finish {
            config.scroll.reset_on_finish = true;
        }
        if let Some(line_height) = self.line_height {
            config.layout.line_height = line_height;
        }
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/autoscroll-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/autoscroll-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== AUTOSCROLL DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let mut config_result = config::load_config();

    let args = Args::parse();
    args.apply_to(&mut config_result.config);

    // Read before entering raw mode so errors print to a normal terminal
    let text = InputReader::read_text(args.input.as_deref())?;

    let terminal = init_terminal()?;

    let app = App::new(text, &config_result.config);
    let result = run(terminal, app, config_result.warning);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== AUTOSCROLL DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, warning: Option<String>) -> Result<()> {
    if let Some(warning) = warning {
        app.notification.show_warning(&warning);
    }

    loop {
        // Layout changes restart the scroll cycle before the next frame
        let size = terminal.size()?;
        app.sync_viewport(ratatui::layout::Rect::new(0, 0, size.width, size.height));

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    app.supervisor.request_stop();
    Ok(())
}
