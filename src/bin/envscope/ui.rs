//! Terminal UI: control-signal plot plus gate/curve keys

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use tracing::{debug, warn};

use scalenv::{graph::EnvelopeHandle, ScaledEnvConfig};

use super::app::ControlMessage;

/// Control points kept on screen (one per rendered control block)
const HISTORY_SIZE: usize = 512;
const EXPONENT_STEP: f32 = 0.25;
const MIN_EXPONENT: f32 = 0.25;
const TAP_HOLD_SECONDS: f32 = 0.25;

pub struct ScopeApp {
    envelope: EnvelopeHandle,
    control_tx: Producer<ControlMessage>,
    scope_rx: Consumer<f32>,
    history: Vec<f32>,
    min: f32,
    max: f32,
    exponent: f32,
    gate: bool,
    should_quit: bool,
}

impl ScopeApp {
    pub fn new(
        envelope: EnvelopeHandle,
        control_tx: Producer<ControlMessage>,
        scope_rx: Consumer<f32>,
        config: ScaledEnvConfig,
    ) -> Self {
        Self {
            envelope,
            control_tx,
            scope_rx,
            history: vec![config.min; HISTORY_SIZE],
            min: config.min,
            max: config.max,
            exponent: config.exponent,
            gate: false,
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_scope();

            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn poll_scope(&mut self) {
        while let Ok(value) = self.scope_rx.pop() {
            self.history.push(value);
        }

        if self.history.len() > HISTORY_SIZE {
            let excess = self.history.len() - HISTORY_SIZE;
            self.history.drain(0..excess);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                let sent = if self.gate {
                    self.envelope.note_off()
                } else {
                    self.envelope.note_on()
                };
                if sent.is_ok() {
                    self.gate = !self.gate;
                }
            }
            KeyCode::Char('t') => {
                if self.envelope.note_on_for(TAP_HOLD_SECONDS).is_ok() {
                    self.gate = false;
                }
            }
            KeyCode::Char('e') => {
                self.send_exponent((self.exponent - EXPONENT_STEP).max(MIN_EXPONENT));
            }
            KeyCode::Char('E') => {
                self.send_exponent(self.exponent + EXPONENT_STEP);
            }
            KeyCode::Char('r') => {
                self.send(ControlMessage::SetRange {
                    min: self.max,
                    max: self.min,
                });
            }
            _ => {}
        }
    }

    fn send_exponent(&mut self, exponent: f32) {
        self.send(ControlMessage::SetExponent(exponent));
    }

    /// Apply locally only once the audio thread has the message queued.
    fn send(&mut self, msg: ControlMessage) {
        if self.control_tx.push(msg).is_err() {
            warn!(?msg, "control queue full");
            return;
        }

        debug!(?msg, "control message sent");
        match msg {
            ControlMessage::SetExponent(exponent) => self.exponent = exponent,
            ControlMessage::SetRange { min, max } => {
                self.min = min;
                self.max = max;
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Min(8),    // Control plot
                Constraint::Length(1), // Help
            ])
            .split(frame.area());

        self.render_status(frame, chunks[0]);
        self.render_plot(frame, chunks[1]);

        let help = Paragraph::new(
            " [Space] Gate  [T] Tap  [e/E] Exponent -/+  [R] Reverse range  [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[2]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let current = self.history.last().copied().unwrap_or(self.min);
        let text = format!(
            " gate: {:<4} value: {:>8.1} Hz   range: {:.0} .. {:.0}   exponent: {:.2}",
            if self.gate { "on" } else { "off" },
            current,
            self.min,
            self.max,
            self.exponent,
        );

        let status = Paragraph::new(text)
            .block(Block::default().title(" envscope ").borders(Borders::ALL));
        frame.render_widget(status, area);
    }

    fn render_plot(&self, frame: &mut Frame, area: Rect) {
        let data: Vec<(f64, f64)> = self
            .history
            .iter()
            .enumerate()
            .map(|(i, &value)| (i as f64, value as f64))
            .collect();

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&data);

        let low = self.min.min(self.max) as f64;
        let high = self.min.max(self.max) as f64;

        let chart = Chart::new(vec![dataset])
            .block(Block::default().title(" Control ").borders(Borders::ALL))
            .x_axis(
                Axis::default()
                    .bounds([0.0, HISTORY_SIZE as f64])
                    .style(Style::default().fg(Color::DarkGray)),
            )
            .y_axis(
                Axis::default()
                    .bounds([low, high])
                    .labels([format!("{low:.0}"), format!("{high:.0}")])
                    .style(Style::default().fg(Color::DarkGray)),
            );

        frame.render_widget(chart, area);
    }
}
