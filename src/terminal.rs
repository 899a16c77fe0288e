// SPDX-License-Identifier: GPL-3.0-only

//! Terminal overlay preview
//!
//! Renders the scan overlay on a braille canvas in the terminal. A recorded
//! event stream loops as the detector stand-in; the overlay toggles are bound
//! to keys. The canvas dot grid (2x4 dots per cell) plays the part of the
//! drawing surface, so event streams authored for this mode should keep their
//! coordinates within a few hundred units.

use crate::app::ScanOverlayController;
use crate::app::geometry::{Color, OverlayGeometry, Primitive};
use crate::config::Config;
use crate::constants::timing;
use crate::detector::{CanvasSize, ScanResult, replay};
use crate::errors::AppResult;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::channel::mpsc;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color as TuiColor, Style},
    text::Line,
    widgets::Paragraph,
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine},
};
use std::io::{self, stdout};
use std::path::PathBuf;
use tracing::info;

/// Run the terminal overlay preview
pub fn run(input: PathBuf, config: Option<PathBuf>) -> AppResult<()> {
    let config = Config::load_or_default(config.as_deref())?;
    let events = replay::load_events(&input)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, config, events);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Paced detector stand-in
///
/// Loops the recorded events on a background thread and hands them over a
/// channel, drained non-blockingly from the draw loop.
struct ReplayFeed {
    receiver: mpsc::Receiver<ScanResult>,
}

impl ReplayFeed {
    fn new(events: Vec<ScanResult>) -> Self {
        let (mut sender, receiver) = mpsc::channel(events.len());

        std::thread::spawn(move || {
            for event in events.into_iter().cycle() {
                std::thread::sleep(timing::REPLAY_EVENT_INTERVAL);
                match sender.try_send(event) {
                    Ok(()) => {}
                    // Preview closed; stop feeding
                    Err(e) if e.is_disconnected() => break,
                    // Buffer full; the newest scan wins downstream anyway
                    Err(_) => {}
                }
            }
        });

        Self { receiver }
    }

    fn try_next(&mut self) -> Option<ScanResult> {
        // Non-blocking receive
        self.receiver.try_next().ok().flatten()
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
    events: Vec<ScanResult>,
) -> AppResult<()> {
    info!(count = events.len(), "Starting overlay preview");

    let (alert_tx, mut alert_rx) = tokio::sync::mpsc::unbounded_channel();
    let mut controller = ScanOverlayController::new(&config).with_alert_sender(alert_tx);
    let mut feed = ReplayFeed::new(events);
    let mut last_alert: Option<String> = None;

    loop {
        // Drain pending detector events; only the newest scan survives.
        while let Some(event) = feed.try_next() {
            controller.on_scan_event(event);
        }

        // Alerts arrive at the frame boundary.
        while let Ok(alert) = alert_rx.try_recv() {
            last_alert = Some(alert.payload);
        }

        // The canvas braille dot grid (2x4 dots per cell) is the drawing
        // surface; resize re-reports layout.
        let size = terminal.size()?;
        let surface_width = size.width as f32 * 2.0;
        let surface_height = size.height.saturating_sub(1) as f32 * 4.0;
        controller.on_surface_layout(CanvasSize {
            width: surface_width,
            height: surface_height,
        });

        let geometry = controller.compute_overlay_geometry();
        let status = build_status_line(&controller, last_alert.as_deref());

        terminal.draw(|f| {
            let area = f.area();
            let canvas_area = Rect {
                x: area.x,
                y: area.y,
                width: area.width,
                height: area.height.saturating_sub(1),
            };

            let canvas = Canvas::default()
                .x_bounds([0.0, surface_width as f64])
                .y_bounds([0.0, surface_height as f64])
                .paint(|ctx| paint_geometry(ctx, &geometry, surface_height as f64));
            f.render_widget(canvas, canvas_area);

            let status_area = Rect {
                x: area.x,
                y: area.height.saturating_sub(1),
                width: area.width,
                height: 1,
            };
            f.render_widget(
                Paragraph::new(status).style(Style::default().fg(TuiColor::DarkGray)),
                status_area,
            );
        })?;

        // Handle input
        if event::poll(timing::INPUT_POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('d') => controller.toggle_facing(),
                KeyCode::Char('b') => controller.toggle_bounding_box(),
                KeyCode::Char('t') => controller.toggle_text(),
                KeyCode::Char('a') => controller.toggle_alert(),
                KeyCode::Char('o') => controller.toggle_orientation_lock(),
                _ => {}
            }
        }
    }
}

fn build_status_line(controller: &ScanOverlayController, last_alert: Option<&str>) -> String {
    let state = controller.state();
    let mut status = format!(
        "q quit | d direction: {} | b box: {} | t text: {} | a alert: {} | o lock: {}",
        state.facing.display_name(),
        on_off(state.show_bounding_box),
        on_off(state.show_payload_text),
        on_off(state.alert_on_scan),
        on_off(state.orientation_locked),
    );
    if let Some(alert) = last_alert {
        status.push_str(" | alert: ");
        status.push_str(alert);
    }
    status
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

/// Draw the overlay primitives into the canvas context
///
/// The canvas y axis points up while surface coordinates point down, so every
/// y is flipped against the surface height.
fn paint_geometry(ctx: &mut Context<'_>, geometry: &OverlayGeometry, surface_height: f64) {
    for primitive in &geometry.primitives {
        match primitive {
            Primitive::Circle {
                cx, cy, radius, fill, ..
            } => {
                ctx.draw(&Circle {
                    x: *cx as f64,
                    y: surface_height - *cy as f64,
                    radius: *radius as f64,
                    color: to_tui_color(*fill),
                });
            }
            Primitive::Polygon { points, stroke, .. } => {
                draw_polygon(ctx, points, to_tui_color(*stroke), surface_height);
            }
            Primitive::Text {
                x, y, color, content, ..
            } => {
                ctx.print(
                    *x as f64,
                    surface_height - *y as f64,
                    Line::styled(content.clone(), Style::default().fg(to_tui_color(*color))),
                );
            }
        }
    }
}

/// Draw a closed polygon from its `"x,y x,y ..."` path encoding
fn draw_polygon(ctx: &mut Context<'_>, points: &str, color: TuiColor, surface_height: f64) {
    let vertices: Vec<(f64, f64)> = points
        .split_whitespace()
        .filter_map(|pair| {
            let (x, y) = pair.split_once(',')?;
            Some((x.parse().ok()?, surface_height - y.parse::<f64>().ok()?))
        })
        .collect();

    if vertices.len() < 2 {
        return;
    }

    for window in vertices.windows(2) {
        ctx.draw(&CanvasLine {
            x1: window[0].0,
            y1: window[0].1,
            x2: window[1].0,
            y2: window[1].1,
            color,
        });
    }
    // Close the ring
    let first = vertices[0];
    let last = vertices[vertices.len() - 1];
    ctx.draw(&CanvasLine {
        x1: last.0,
        y1: last.1,
        x2: first.0,
        y2: first.1,
        color,
    });
}

fn to_tui_color(color: Color) -> TuiColor {
    TuiColor::Rgb(color.r, color.g, color.b)
}
