#[macro_use]
mod console;

mod app;
mod content;
mod input;
mod prefs;
mod screens;
mod session;
mod storage;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use app::App;
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

/// Convert a viewport pixel position to a grid cell using the DOM grid's
/// bounding rect.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_x_to_col(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn key_to_input(code: KeyCode) -> Option<InputEvent> {
    Some(match code {
        KeyCode::Char(c) => InputEvent::Key(c),
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Enter => InputEvent::Enter,
        KeyCode::Tab => InputEvent::Tab,
        KeyCode::Esc => InputEvent::Esc,
        KeyCode::Left => InputEvent::Left,
        KeyCode::Right => InputEvent::Right,
        KeyCode::Up => InputEvent::Up,
        KeyCode::Down => InputEvent::Down,
        _ => return None,
    })
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(App::new(storage::open_default())));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let action = {
                let cs = click_state.borrow();
                if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                    return;
                }
                let Some((col, row)) = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs) else {
                    return;
                };
                cs.hit_test(col, row)
            };

            if let Some(id) = action {
                app.borrow_mut().handle_input(&InputEvent::Click(id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            if let Some(event) = key_to_input(key_event.code) {
                app.borrow_mut().handle_input(&event);
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }
            app.borrow().render(f, size, &click_state);
        }
    });

    Ok(())
}
