use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap};
use tracing::warn;

use crate::announcer::LiveRegion;
use crate::constants::*;
use crate::controller::CarouselController;
use crate::theme::{self, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Continue,
    Quit,
}

/// Terminal frontend: draws the carousel and translates key and mouse
/// events into controller operations. Mouse press/release stand in for
/// touch start/end so a horizontal drag swipes; motion over the slide
/// viewport is the hover-pause analog.
pub struct App {
    pub controller: CarouselController<LiveRegion>,
    pub theme: Theme,
    slide_area: Rect,
    prev_area: Rect,
    next_area: Rect,
    dots_area: Rect,
    hovering: bool,
}

impl App {
    pub fn new(controller: CarouselController<LiveRegion>, theme: Theme) -> Self {
        Self {
            controller,
            theme,
            slide_area: Rect::default(),
            prev_area: Rect::default(),
            next_area: Rect::default(),
            dots_area: Rect::default(),
            hovering: false,
        }
    }

    pub fn tick(&mut self, dt_ms: f32) {
        self.controller.update(dt_ms);
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let theme = self.theme;
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
            area,
        );

        let rows = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Min(7),    // slide card
            Constraint::Length(1), // prev / dots / next
            Constraint::Length(1), // autoplay progress
            Constraint::Length(1), // live region
        ])
        .split(area);

        self.draw_title(frame, rows[0]);
        self.draw_slide(frame, rows[1]);
        self.draw_controls(frame, rows[2]);
        self.draw_progress(frame, rows[3]);
        self.draw_live_region(frame, rows[4]);
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("What our customers say")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(title, area);
    }

    fn draw_slide(&mut self, frame: &mut Frame, area: Rect) {
        self.slide_area = area;
        let theme = self.theme;
        let slide = self.controller.active_slide();

        // Mid-treatment slides render dimmed, the terminal stand-in for a
        // crossfade.
        let body_style = if slide.opacity() < 1.0 {
            Style::default().fg(theme.muted).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(theme.fg)
        };

        let t = &slide.testimonial;
        let lines = vec![
            Line::raw(""),
            Line::styled(
                format!("\u{201c}{}\u{201d}", t.quote),
                body_style.add_modifier(Modifier::ITALIC),
            ),
            Line::raw(""),
            Line::from(vec![
                Span::styled(
                    format!("\u{2014} {}", t.author),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(", {}", t.role), Style::default().fg(theme.muted)),
            ]),
        ];

        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.muted))
                    .padding(Padding::horizontal(2)),
            );
        frame.render_widget(card, area);
    }

    fn draw_controls(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let cols = Layout::horizontal([
            Constraint::Length(10),
            Constraint::Min(0),
            Constraint::Length(10),
        ])
        .split(area);
        self.prev_area = cols[0];
        self.next_area = cols[2];

        let button_style = Style::default().fg(theme.accent);
        frame.render_widget(
            Paragraph::new("\u{2039} Prev")
                .alignment(Alignment::Center)
                .style(button_style),
            cols[0],
        );
        frame.render_widget(
            Paragraph::new("Next \u{203a}")
                .alignment(Alignment::Center)
                .style(button_style),
            cols[2],
        );

        // Dots live in their own computed rect so a mouse click maps back
        // to a slide index without guessing at centering.
        let dots = self.controller.dot_states();
        let width = (dots.len() * 2).saturating_sub(1) as u16;
        let middle = cols[1];
        let origin = middle.x + middle.width.saturating_sub(width) / 2;
        self.dots_area = Rect {
            x: origin,
            y: middle.y,
            width: width.min(middle.width),
            height: 1,
        };

        let mut spans = Vec::new();
        for (i, active) in dots.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            if *active {
                spans.push(Span::styled(
                    "\u{25cf}",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled("\u{25cb}", Style::default().fg(theme.muted)));
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), self.dots_area);
    }

    fn draw_progress(&self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let label = if self.controller.is_autoplay_running() {
            format!("{:.0}%", self.controller.progress() * 100.0)
        } else {
            "autoplay paused".to_string()
        };
        let gauge = Gauge::default()
            .ratio(f64::from(self.controller.progress()))
            .label(label)
            .gauge_style(Style::default().fg(theme.accent).bg(theme.bg));
        frame.render_widget(gauge, area);
    }

    fn draw_live_region(&self, frame: &mut Frame, area: Rect) {
        let text = self.controller.announcer().text().to_string();
        let line = Paragraph::new(text).style(
            Style::default()
                .fg(self.theme.muted)
                .add_modifier(Modifier::ITALIC),
        );
        frame.render_widget(line, area);
    }

    pub fn handle_event(&mut self, event: &Event) -> UiAction {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return UiAction::Quit,
                KeyCode::Left | KeyCode::Char('h') => {
                    self.controller.prev();
                    self.controller.reset_autoplay();
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.controller.next();
                    self.controller.reset_autoplay();
                }
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    if index < self.controller.len() {
                        self.controller.go_to(index as isize);
                        self.controller.reset_autoplay();
                    }
                }
                _ => {}
            },
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
        UiAction::Continue
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.controller.touch_start(f32::from(mouse.column) * CELL_WIDTH_PX);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let swiped = self
                    .controller
                    .touch_end(f32::from(mouse.column) * CELL_WIDTH_PX);
                if !swiped {
                    self.handle_click(mouse.column, mouse.row);
                }
            }
            // Moved only fires with no button held, so it cannot race the
            // press/release swipe sampling above.
            MouseEventKind::Moved => {
                let inside = self
                    .slide_area
                    .contains(Position::new(mouse.column, mouse.row));
                if inside && !self.hovering {
                    self.hovering = true;
                    self.controller.pause_autoplay();
                } else if !inside && self.hovering {
                    self.hovering = false;
                    self.controller.resume_autoplay();
                }
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let pos = Position::new(column, row);
        if self.prev_area.contains(pos) {
            self.controller.prev();
            self.controller.reset_autoplay();
        } else if self.next_area.contains(pos) {
            self.controller.next();
            self.controller.reset_autoplay();
        } else if self.dots_area.contains(pos) {
            let offset = (column - self.dots_area.x) as usize;
            // Dots sit on even offsets with a single space between them.
            if offset % 2 == 0 {
                let index = offset / 2;
                if index < self.controller.len() {
                    self.controller.go_to(index as isize);
                    self.controller.reset_autoplay();
                }
            }
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(error) = theme::save_mode(self.theme.mode) {
            warn!("failed to persist theme choice: {error:#}");
        }
    }
}
