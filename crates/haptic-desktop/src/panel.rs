use std::io;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use haptic_core::{Feedback, VibrationBridge};
use log::Level;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::log_capture;
use crate::recording_vibrator::RecordingVibrator;

/// Duration sent by the `v` key
pub const DEMO_DURATION_MS: u32 = 200;
/// Pattern sent by the `p` key
pub const DEMO_PATTERN: [u32; 3] = [100, 50, 100];

// Log line styling for the panel; one letter keeps the message column aligned
trait LevelStyle {
    fn color(&self) -> Color;
    fn tag(&self) -> &'static str;
}

impl LevelStyle for Level {
    fn color(&self) -> Color {
        match *self {
            Level::Error => Color::LightRed,
            Level::Warn => Color::LightYellow,
            Level::Info => Color::Green,
            Level::Debug => Color::Blue,
            Level::Trace => Color::DarkGray,
        }
    }

    fn tag(&self) -> &'static str {
        match *self {
            Level::Error => "E",
            Level::Warn => "W",
            Level::Info => "I",
            Level::Debug => "D",
            Level::Trace => "T",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Feedback),
    Vibrate(u32),
    VibratePattern(&'static [u32]),
    TogglePresence,
    ToggleRecording,
    ClearHistory,
    Quit,
}

impl Command {
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let command = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
            KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
            KeyCode::Char('t') => Command::Play(Feedback::Tap),
            KeyCode::Char('m') => Command::Play(Feedback::Medium),
            KeyCode::Char('h') => Command::Play(Feedback::Heavy),
            KeyCode::Char('s') => Command::Play(Feedback::Success),
            KeyCode::Char('e') => Command::Play(Feedback::Error),
            KeyCode::Char('v') => Command::Vibrate(DEMO_DURATION_MS),
            KeyCode::Char('p') => Command::VibratePattern(&DEMO_PATTERN),
            KeyCode::Char(' ') => Command::TogglePresence,
            KeyCode::Char('r') => Command::ToggleRecording,
            KeyCode::Char('c') => Command::ClearHistory,
            _ => return None,
        };
        Some(command)
    }
}

pub struct PanelState {
    vibrator: RecordingVibrator,
    present: bool,
    should_quit: bool,
}

impl PanelState {
    pub fn new(vibrator: RecordingVibrator, present: bool) -> Self {
        Self {
            vibrator,
            present,
            should_quit: false,
        }
    }

    /// The bridge as the app sees it right now
    pub fn bridge(&self) -> VibrationBridge<'_> {
        if self.present {
            VibrationBridge::present(&self.vibrator)
        } else {
            VibrationBridge::absent()
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Play(feedback) => {
                log::debug!("playing {}", feedback.name());
                self.bridge().play(feedback);
            }
            Command::Vibrate(duration_ms) => self.bridge().vibrate(duration_ms),
            Command::VibratePattern(pattern) => self.bridge().vibrate_pattern(pattern),
            Command::TogglePresence => {
                self.present = !self.present;
                log::warn!(
                    "vibration capability now {}",
                    if self.present { "present" } else { "absent" }
                );
            }
            Command::ToggleRecording => {
                let recording = !self.vibrator.is_recording();
                self.vibrator.set_recording(recording);
                log::warn!("recording {}", if recording { "resumed" } else { "paused" });
            }
            Command::ClearHistory => self.vibrator.clear(),
            Command::Quit => self.should_quit = true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// Runs its closure on drop, so the terminal is restored on every exit path.
struct OnExit<F: FnMut()>(F);

impl<F: FnMut()> Drop for OnExit<F> {
    fn drop(&mut self) {
        (self.0)()
    }
}

fn restore_terminal() {
    if let Err(e) = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    ) {
        log::warn!("failed to leave alternate screen: {}", e);
    }
    if let Err(e) = disable_raw_mode() {
        log::warn!("failed to disable raw mode: {}", e);
    }
}

pub fn run(vibrator: RecordingVibrator, start_present: bool) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let _restore = OnExit(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut state = PanelState::new(vibrator, start_present);
    event_loop(&mut terminal, &mut state)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut PanelState,
) -> anyhow::Result<()> {
    while !state.should_quit() {
        terminal.draw(|f| ui(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = Command::from_key(&key) {
                    state.apply(command);
                }
            }
        }
    }
    log::info!("panel closed");
    Ok(())
}

fn ui(f: &mut Frame, state: &PanelState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Min(8),    // History
            Constraint::Min(6),    // Logs
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    render_status(f, chunks[0], state);
    render_history(f, chunks[1], state);
    render_logs(f, chunks[2]);

    let help = Paragraph::new(
        "t/m/h: tap/medium/heavy | s/e: success/error | v: 200ms | p: pattern | space: toggle capability | r: pause recording | c: clear | q: quit",
    )
    .style(Style::default().fg(Color::Gray))
    .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(help, chunks[3]);
}

fn render_status(f: &mut Frame, area: Rect, state: &PanelState) {
    let (label, color) = if state.bridge().has_vibrate() {
        ("PRESENT", Color::Green)
    } else {
        ("ABSENT (calls are no-ops)", Color::Red)
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw("Vibration capability: "),
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(format!("   recorded: {}", state.vibrator.len())),
        Span::raw(if state.vibrator.is_recording() { "" } else { " (paused)" }),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Mock Haptic Host"));
    f.render_widget(status, area);
}

fn render_history(f: &mut Frame, area: Rect, state: &PanelState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Vibration requests (newest first)");

    let inner = block.inner(area);
    f.render_widget(block, area);

    let items: Vec<ListItem> = state
        .vibrator
        .recent(inner.height as usize)
        .iter()
        .map(|record| ListItem::new(record.to_string()))
        .collect();

    f.render_widget(List::new(items), inner);
}

fn render_logs(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Logs (newest first)");

    let inner = block.inner(area);
    f.render_widget(block, area);

    let log_items: Vec<ListItem> = log_capture::recent_log_lines(inner.height as usize)
        .into_iter()
        .map(|line| {
            let content = Line::from(vec![
                Span::styled(line.level.tag(), Style::default().fg(line.level.color())),
                Span::raw(" "),
                Span::styled(format!("{}: ", line.target), Style::default().fg(Color::DarkGray)),
                Span::raw(line.message),
            ]);
            ListItem::new(content)
        })
        .collect();

    f.render_widget(List::new(log_items), inner);
}
