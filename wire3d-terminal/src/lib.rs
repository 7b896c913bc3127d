/// Terminal frontend: draws the wireframe scene and feeds it keyboard and mouse input
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent,
        KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use wire3d_core::inspector::transform_values;
use wire3d_core::{
    CameraKey, Event, PointerButton, SceneConfig, SceneState, TransformField, WidgetMode,
};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Approximate pixel size of one character cell, used to scale mouse deltas
pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Projection aspect for a grid of `cols` x `rows` cells twice as tall as wide
pub fn cell_aspect(cols: u16, rows: u16) -> f64 {
    cols as f64 / (rows.max(1) as f64 * 2.0)
}

/// Translate a key press into a scene event, if it maps to one
pub fn key_event(code: KeyCode) -> Option<Event> {
    let event = match code {
        KeyCode::Char('t') => Event::SelectMode(WidgetMode::Translate),
        KeyCode::Char('r') => Event::SelectMode(WidgetMode::Rotate),
        KeyCode::Char('e') => Event::SelectMode(WidgetMode::Scale),
        KeyCode::Char(c) => Event::Key(CameraKey::parse(c.encode_utf8(&mut [0; 4]))?),
        KeyCode::Up => Event::Key(CameraKey::PanUp),
        KeyCode::Down => Event::Key(CameraKey::PanDown),
        KeyCode::Left => Event::Key(CameraKey::PanLeft),
        KeyCode::Right => Event::Key(CameraKey::PanRight),
        _ => return None,
    };
    Some(event)
}

/// Translate a mouse report at cell `(column, row)` into a scene event.
///
/// `last` is the previous reported cell; movement needs it to form a delta,
/// so the first move after startup produces nothing.
pub fn mouse_event(
    kind: MouseEventKind,
    column: u16,
    row: u16,
    last: Option<(u16, u16)>,
) -> Option<Event> {
    match kind {
        MouseEventKind::Down(button) => Some(Event::PointerDown {
            // Aim at the middle of the cell
            x: column as f64 + 0.5,
            y: row as f64 + 0.5,
            button: pointer_button(button),
        }),
        MouseEventKind::Up(button) => Some(Event::PointerUp {
            button: pointer_button(button),
        }),
        MouseEventKind::Drag(_) | MouseEventKind::Moved => {
            last.map(|(last_column, last_row)| Event::PointerMove {
                dx: (column as f64 - last_column as f64) * CELL_WIDTH_PX,
                dy: (row as f64 - last_row as f64) * CELL_HEIGHT_PX,
            })
        }
        MouseEventKind::ScrollUp => Some(Event::Wheel { delta: -1.0 }),
        MouseEventKind::ScrollDown => Some(Event::Wheel { delta: 1.0 }),
        _ => None,
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Other,
    }
}

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    scene: SceneState,
    renderer: AsciiRenderer,
    running: bool,
    frame_time: Duration,
    last_mouse: Option<(u16, u16)>,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: SceneConfig, target_fps: u32) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let config = SceneConfig {
            width: width as u32,
            height: height as u32,
            ..config
        };
        let mut scene = SceneState::new(config)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        scene.set_aspect(cell_aspect(width, height));

        Ok(Self {
            scene,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
            frame_time: Duration::from_millis(1000 / target_fps.max(1) as u64),
            last_mouse: None,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;
        terminal::disable_raw_mode()?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        info!(objects = self.scene.objects.len(), "render loop started");
        while self.running {
            let frame_start = Instant::now();

            // Drain every pending input before the frame observes the state
            while event::poll(Duration::from_millis(0))? {
                self.handle_input(event::read()?);
            }

            self.scene.tick(&mut self.renderer);
            self.present()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }
        info!("render loop stopped");
        Ok(())
    }

    fn handle_input(&mut self, event: TermEvent) {
        match event {
            TermEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                    code => {
                        if let Some(event) = key_event(code) {
                            self.scene.handle_event(event);
                        }
                    }
                }
            }
            TermEvent::Mouse(mouse) => self.handle_mouse(mouse),
            TermEvent::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.scene.handle_event(Event::Resize {
                    width: width as u32,
                    height: height as u32,
                });
                self.scene.set_aspect(cell_aspect(width, height));
                self.renderer.resize(width as usize, height as usize);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let MouseEvent {
            kind, column, row, ..
        } = mouse;
        let event = mouse_event(kind, column, row, self.last_mouse);
        self.last_mouse = Some((column, row));
        if let Some(event) = event {
            self.scene.handle_event(event);
        }
    }

    fn status_line(&self) -> String {
        let mode = self
            .scene
            .mode()
            .map_or_else(|| "-".to_string(), |mode| mode.to_string());
        match self.scene.inspect() {
            Some(transform) => {
                let fields: Vec<String> = TransformField::ALL
                    .iter()
                    .zip(transform_values(&transform))
                    .map(|(field, value)| format!("{field}={value:.2}"))
                    .collect();
                format!("mode: {mode} | {}", fields.join(" "))
            }
            None => format!("mode: {mode} | nothing selected"),
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let (_, height) = terminal::size()?;
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "wire3d | FPS: {:.1} | Click=Select T/R/E=Translate/Rotate/Scale RightDrag=Orbit Wheel=Zoom WASD/Arrows=Move Q=Quit",
                self.fps
            )),
            cursor::MoveTo(0, height.saturating_sub(1)),
            Clear(ClearType::CurrentLine),
            Print(self.status_line()),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            key_event(KeyCode::Char('w')),
            Some(Event::Key(CameraKey::Forward))
        );
        assert_eq!(
            key_event(KeyCode::Left),
            Some(Event::Key(CameraKey::PanLeft))
        );
        assert_eq!(
            key_event(KeyCode::Char('e')),
            Some(Event::SelectMode(WidgetMode::Scale))
        );
        assert_eq!(key_event(KeyCode::Char('z')), None);
        assert_eq!(key_event(KeyCode::Tab), None);
    }

    #[test]
    fn test_press_aims_at_cell_centre() {
        assert_eq!(
            mouse_event(MouseEventKind::Down(MouseButton::Left), 10, 4, None),
            Some(Event::PointerDown {
                x: 10.5,
                y: 4.5,
                button: PointerButton::Primary
            })
        );
        assert_eq!(
            mouse_event(MouseEventKind::Down(MouseButton::Right), 0, 0, Some((3, 3))),
            Some(Event::PointerDown {
                x: 0.5,
                y: 0.5,
                button: PointerButton::Secondary
            })
        );
        assert_eq!(
            mouse_event(MouseEventKind::Up(MouseButton::Middle), 1, 1, None),
            Some(Event::PointerUp {
                button: PointerButton::Other
            })
        );
    }

    #[test]
    fn test_movement_scales_cells_to_pixels() {
        assert_eq!(
            mouse_event(MouseEventKind::Moved, 12, 5, Some((10, 6))),
            Some(Event::PointerMove {
                dx: 2.0 * CELL_WIDTH_PX,
                dy: -CELL_HEIGHT_PX
            })
        );
        assert_eq!(
            mouse_event(MouseEventKind::Drag(MouseButton::Right), 7, 9, Some((8, 7))),
            Some(Event::PointerMove { dx: -8.0, dy: 32.0 })
        );
    }

    #[test]
    fn test_first_move_has_no_delta() {
        assert_eq!(mouse_event(MouseEventKind::Moved, 12, 5, None), None);
        assert_eq!(
            mouse_event(MouseEventKind::Drag(MouseButton::Left), 12, 5, None),
            None
        );
    }

    #[test]
    fn test_scroll_up_zooms_in() {
        let Some(Event::Wheel { delta }) = mouse_event(MouseEventKind::ScrollUp, 0, 0, None)
        else {
            panic!("scroll up should map to a wheel event");
        };
        assert_eq!(delta, -1.0);
        assert_eq!(wire3d_core::Zoom::from_wheel(delta), wire3d_core::Zoom::In);
        assert_eq!(
            mouse_event(MouseEventKind::ScrollDown, 0, 0, None),
            Some(Event::Wheel { delta: 1.0 })
        );
        assert_eq!(mouse_event(MouseEventKind::ScrollLeft, 0, 0, None), None);
    }

    #[test]
    fn test_cell_aspect() {
        assert_eq!(cell_aspect(160, 40), 2.0);
        assert_eq!(cell_aspect(80, 0), 40.0);
    }
}
