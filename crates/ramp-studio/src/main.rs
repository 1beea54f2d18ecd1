//! Headless walkthrough of the gradient editor.
//!
//! Usage: `ramp-studio [POS:#RRGGBB ...]`
//!
//! Starts from the given stops (or white to black), replays a scripted
//! pointer session through the same input path a window would use, and
//! prints the resulting gradient as a truecolor strip.

use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use ramp_engine::input::{
    ButtonState, InputEvent, InputFrame, InputState, Modifiers, MouseButton, PointerButtonEvent,
    PointerMoveEvent,
};
use ramp_engine::logging::{LoggingConfig, init_logging};
use ramp_ui::prelude::*;

const VIEWPORT: Vec2 = GradientEdit::PREFERRED_SIZE;
const STRIP_WIDTH: usize = 64;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let stops = std::env::args()
        .skip(1)
        .map(|arg| parse_stop(&arg).with_context(|| format!("invalid stop `{arg}`")))
        .collect::<Result<Vec<_>>>()?;

    let accent = Color::from_hex("#ff8800").context("accent color")?;
    let mut editor = GradientEdit::new()
        .color_picker(move |initial: Color| -> Option<Color> {
            log::info!("picker asked to replace {:?}", initial.to_srgb_u8());
            Some(accent)
        })
        .on_gradient_changed(|stops| log::info!("gradient changed: {}", describe(stops)));
    if !stops.is_empty() {
        editor = editor.with_stops(stops);
    }

    println!("  before  {}", strip(editor.gradient()));

    let mut session = Session::new();
    let mid = VIEWPORT.y * 0.5;

    // ── double-click empty space: new stop at the center ──────────────────
    session.click(MouseButton::PRIMARY, 100.0, mid, 0);
    session.click(MouseButton::PRIMARY, 100.0, mid, 150);
    session.flush(&mut editor);

    // ── right-click the new handle: recolor through the picker ────────────
    session.click(MouseButton::SECONDARY, 100.0, mid, 1_000);
    session.flush(&mut editor);

    // ── drag it to the left, release commits ──────────────────────────────
    session.button(MouseButton::PRIMARY, ButtonState::Pressed, 101.0, mid, 2_000);
    session.move_to(80.0, mid);
    session.move_to(60.0, mid);
    session.button(MouseButton::PRIMARY, ButtonState::Released, 60.0, mid, 2_300);
    session.flush(&mut editor);

    // ── focus loss in the middle of a drag still commits it ───────────────
    session.button(MouseButton::PRIMARY, ButtonState::Pressed, 60.0, mid, 3_000);
    session.move_to(70.0, mid);
    session.push(InputEvent::Focused(false), 3_100);
    session.flush(&mut editor);

    if editor.drag_state() != DragState::Idle {
        bail!("drag still active after focus loss");
    }

    let list = session.ui.paint(&editor, VIEWPORT);
    log::info!("painted {} draw commands", list.len());

    println!("  after   {}", strip(editor.gradient()));
    println!("  stops   {}", describe(editor.gradient()));
    Ok(())
}

/// Parses `POS:#RRGGBB[AA]`.
fn parse_stop(arg: &str) -> Result<StopColor> {
    let (pos, color) = arg.split_once(':').context("expected POS:#RRGGBB")?;
    let pos: f32 = pos.trim().parse().context("position is not a number")?;
    let color = Color::from_hex(color.trim()).context("color is not #RRGGBB or #RRGGBBAA")?;
    Ok(StopColor::new(pos, color))
}

fn describe(stops: &[StopColor]) -> String {
    stops
        .iter()
        .map(|s| {
            let [r, g, b, a] = s.color.to_srgb_u8();
            format!("{:.2}:#{r:02x}{g:02x}{b:02x}{a:02x}", s.position)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// ANSI truecolor rendering of the gradient, one cell per sample.
fn strip(stops: &[StopColor]) -> String {
    let gradient = Gradient::from_stops(stops.to_vec());
    let mut out = String::new();
    for i in 0..STRIP_WIDTH {
        let t = i as f32 / (STRIP_WIDTH - 1) as f32;
        let [r, g, b, _] = gradient.sample(t).to_srgb_u8();
        out.push_str(&format!("\x1b[48;2;{r};{g};{b}m "));
    }
    out.push_str("\x1b[0m");
    out
}

// ── scripted input ────────────────────────────────────────────────────────

/// Feeds timestamped events through `InputState` the way a window loop does.
struct Session {
    input: InputState,
    frame: InputFrame,
    ui: UiScene,
    start: Instant,
    last_ms: u64,
}

impl Session {
    fn new() -> Self {
        Self {
            input: InputState::default(),
            frame: InputFrame::default(),
            ui: UiScene::new(),
            start: Instant::now(),
            last_ms: 0,
        }
    }

    fn push(&mut self, ev: InputEvent, at_ms: u64) {
        self.last_ms = at_ms;
        let now = self.start + Duration::from_millis(at_ms);
        self.input.apply_event_at(&mut self.frame, ev, now);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push(InputEvent::PointerMoved(PointerMoveEvent { x, y }), self.last_ms);
    }

    fn button(&mut self, button: MouseButton, state: ButtonState, x: f32, y: f32, at_ms: u64) {
        let ev = PointerButtonEvent { button, state, x, y, modifiers: Modifiers::default() };
        self.push(InputEvent::PointerButton(ev), at_ms);
    }

    fn click(&mut self, button: MouseButton, x: f32, y: f32, at_ms: u64) {
        self.button(button, ButtonState::Pressed, x, y, at_ms);
        self.button(button, ButtonState::Released, x, y, at_ms + 40);
    }

    /// Dispatches the pending frame to `editor`.
    fn flush(&mut self, editor: &mut GradientEdit) {
        self.ui.dispatch(editor, VIEWPORT, &self.frame);
        self.frame.clear();
        if self.ui.take_repaint_request() {
            log::debug!("repaint requested");
        }
    }
}
