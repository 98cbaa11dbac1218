use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use std::io::{self, stdout};
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::scene::{self, SceneInput};
use crate::theme::Theme;
use crate::vector::{components_to_polar, parse_field, polar_to_components, Polar, Vector2};

const FIELD_AX: usize = 0;
const FIELD_AY: usize = 1;
const FIELD_MAG: usize = 2;
const FIELD_ANGLE: usize = 3;

/// A computed output slot on one of the panels.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Output {
    Blank,
    Invalid,
    Value(f64),
}

impl Output {
    fn text(&self, precision: usize) -> String {
        match self {
            Output::Blank => "—".to_string(),
            Output::Invalid => "Invalid Input".to_string(),
            Output::Value(v) => format!("{:.*}", precision, v),
        }
    }
}

pub struct App {
    /// Editable buffers: Ax, Ay, magnitude, angle (degrees).
    fields: [String; 4],
    focus: usize,
    mag_out: Output,
    angle_out: Output,
    ax_out: Output,
    ay_out: Output,
    scene: SceneInput,
    theme: Theme,
    config: Config,
}

impl App {
    pub fn new(config: Config, initial: Vector2) -> Self {
        let mut app = Self {
            fields: [
                fmt_num(initial.ax),
                fmt_num(initial.ay),
                String::new(),
                String::new(),
            ],
            focus: FIELD_AX,
            mag_out: Output::Blank,
            angle_out: Output::Blank,
            ax_out: Output::Blank,
            ay_out: Output::Blank,
            scene: SceneInput::default(),
            theme: config.theme,
            config,
        };
        // Populate the scene before the first keypress.
        app.compute_polar();
        app
    }

    /// Components -> polar action: parse the Cartesian fields, write the
    /// magnitude/angle outputs and mirror them into the polar panel, or
    /// report invalid input and fall back to the zero vector.
    fn compute_polar(&mut self) {
        match (
            parse_field(&self.fields[FIELD_AX]),
            parse_field(&self.fields[FIELD_AY]),
        ) {
            (Ok(ax), Ok(ay)) => {
                self.fields[FIELD_AX] = fmt_num(ax);
                self.fields[FIELD_AY] = fmt_num(ay);

                // Components are finite here, so the conversion cannot fail.
                if let Ok(polar) = components_to_polar(Vector2 { ax, ay }) {
                    let precision = self.config.labels.precision;
                    self.mag_out = Output::Value(polar.magnitude);
                    self.angle_out = Output::Value(polar.angle_deg);
                    self.fields[FIELD_MAG] = format!("{:.*}", precision, polar.magnitude);
                    self.fields[FIELD_ANGLE] = format!("{:.*}", precision, polar.angle_deg);
                    self.scene = SceneInput {
                        ax,
                        ay,
                        magnitude: polar.magnitude,
                        angle_deg: polar.angle_deg,
                    };
                }
            }
            _ => {
                debug!("cartesian input did not parse to finite numbers");
                self.mag_out = Output::Invalid;
                self.angle_out = Output::Invalid;
                self.fields[FIELD_MAG].clear();
                self.fields[FIELD_ANGLE].clear();
                self.scene = SceneInput::default();
            }
        }
    }

    /// Polar -> components action, symmetric to `compute_polar`.
    fn compute_components(&mut self) {
        match (
            parse_field(&self.fields[FIELD_MAG]),
            parse_field(&self.fields[FIELD_ANGLE]),
        ) {
            (Ok(magnitude), Ok(angle_deg)) => {
                self.fields[FIELD_MAG] = fmt_num(magnitude);
                self.fields[FIELD_ANGLE] = fmt_num(angle_deg);

                if let Ok(v) = polar_to_components(Polar { magnitude, angle_deg }) {
                    let precision = self.config.labels.precision;
                    self.ax_out = Output::Value(v.ax);
                    self.ay_out = Output::Value(v.ay);
                    self.fields[FIELD_AX] = format!("{:.*}", precision, v.ax);
                    self.fields[FIELD_AY] = format!("{:.*}", precision, v.ay);
                    self.scene = SceneInput {
                        ax: v.ax,
                        ay: v.ay,
                        magnitude,
                        angle_deg,
                    };
                }
            }
            _ => {
                debug!("polar input did not parse to finite numbers");
                self.ax_out = Output::Invalid;
                self.ay_out = Output::Invalid;
                self.fields[FIELD_AX].clear();
                self.fields[FIELD_AY].clear();
                self.scene = SceneInput::default();
            }
        }
    }

    /// Enter activates the conversion of whichever panel holds the focus.
    fn activate(&mut self) {
        if self.focus <= FIELD_AY {
            self.compute_polar();
        } else {
            self.compute_components();
        }
    }

    fn move_focus(&mut self, delta: isize) {
        self.focus = (self.focus as isize + delta).rem_euclid(4) as usize;
    }

    fn edit_char(&mut self, c: char) {
        if is_field_char(c) {
            self.fields[self.focus].push(c);
        }
    }

    fn edit_backspace(&mut self) {
        self.fields[self.focus].pop();
    }

    fn next_theme(&mut self) {
        self.theme = self.theme.next();
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Reset background so the scene composes over a clean frame.
        let block = Block::default().style(Style::default().bg(Color::Reset));
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(20)])
            .split(rows[0]);
        let panels = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Min(0),
            ])
            .split(columns[0]);

        self.render_cartesian_panel(frame, panels[0]);
        self.render_polar_panel(frame, panels[1]);
        scene::render(frame, columns[1], &self.scene, &self.config, &self.theme);
        self.render_status(frame, rows[1]);
    }

    fn render_cartesian_panel(&self, frame: &mut Frame, area: Rect) {
        let precision = self.config.labels.precision;
        let lines = vec![
            self.field_line("Ax", FIELD_AX),
            self.field_line("Ay", FIELD_AY),
            Line::raw(""),
            Line::raw(format!("Magnitude: {}", self.mag_out.text(precision))),
            Line::raw(format!("Angle θ°:  {}", self.angle_out.text(precision))),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Components → Polar ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_polar_panel(&self, frame: &mut Frame, area: Rect) {
        let precision = self.config.labels.precision;
        let lines = vec![
            self.field_line("Magnitude", FIELD_MAG),
            self.field_line("Angle θ° ", FIELD_ANGLE),
            Line::raw(""),
            Line::raw(format!("Ax: {}", self.ax_out.text(precision))),
            Line::raw(format!("Ay: {}", self.ay_out.text(precision))),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Polar → Components ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn field_line(&self, label: &str, index: usize) -> Line<'_> {
        let focused = self.focus == index;
        let style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let cursor = if focused { "▏" } else { " " };
        Line::from(vec![
            Span::raw(format!("{}: ", label)),
            Span::styled(format!("{}{}", self.fields[index], cursor), style),
        ])
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let status = format!(
            " [tab] field | [enter] compute | [t]heme: {} | [q]uit ",
            self.theme.name()
        );
        for (i, ch) in status.chars().enumerate() {
            if i < area.width as usize {
                let cell = frame.buffer_mut().cell_mut((area.x + i as u16, area.y));
                if let Some(cell) = cell {
                    cell.set_char(ch);
                    cell.set_fg(Color::DarkGray);
                }
            }
        }
    }
}

/// Characters accepted into a numeric field buffer.
fn is_field_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Shortest round-trip decimal form, used to normalize an input buffer to
/// its parsed value.
fn fmt_num(v: f64) -> String {
    format!("{}", v)
}

pub fn run(config: Config, initial: Vector2) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, config, initial);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
    initial: Vector2,
) -> Result<()> {
    let mut app = App::new(config, initial);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key {
                    KeyEvent {
                        code: KeyCode::Char('q'),
                        ..
                    }
                    | KeyEvent {
                        code: KeyCode::Esc, ..
                    }
                    | KeyEvent {
                        code: KeyCode::Char('c'),
                        modifiers: KeyModifiers::CONTROL,
                        ..
                    } => {
                        break;
                    }
                    KeyEvent {
                        code: KeyCode::Char('t'),
                        ..
                    } => {
                        app.next_theme();
                    }
                    KeyEvent {
                        code: KeyCode::Tab, ..
                    }
                    | KeyEvent {
                        code: KeyCode::Down,
                        ..
                    } => {
                        app.move_focus(1);
                    }
                    KeyEvent {
                        code: KeyCode::BackTab,
                        ..
                    }
                    | KeyEvent {
                        code: KeyCode::Up, ..
                    } => {
                        app.move_focus(-1);
                    }
                    KeyEvent {
                        code: KeyCode::Enter,
                        ..
                    } => {
                        app.activate();
                    }
                    KeyEvent {
                        code: KeyCode::Backspace,
                        ..
                    } => {
                        app.edit_backspace();
                    }
                    KeyEvent {
                        code: KeyCode::Char(c),
                        ..
                    } => {
                        app.edit_char(c);
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}
