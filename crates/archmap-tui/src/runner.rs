//! Main TUI runner - entry points and event loop
//!
//! - `run`: interactive session on the real terminal
//! - `render_to_string`: one headless frame as plain text

use archmap_app::state::AppState;
use archmap_app::UpdateAction;
use archmap_core::prelude::*;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use super::event::{self, TerminalEvent};
use super::{process, render, terminal};

/// Run the interactive mind map until the user quits
pub fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if state.mouse_capture {
        if let Err(e) = terminal::set_mouse_capture(true) {
            warn!("Failed to enable mouse capture: {}", e);
            state.mouse_capture = false;
        }
    }

    info!("archmap started");
    let result = run_loop(&mut term, &mut state);

    let cleanup = if state.mouse_capture {
        terminal::set_mouse_capture(false).context("Disabling mouse capture")
    } else {
        Ok(())
    };
    ratatui::restore();
    info!("archmap exited");

    result.and(cleanup)
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        terminal.draw(|frame| render::view(frame, state))?;

        let message = match event::poll()? {
            Some(TerminalEvent::Message(message)) => Some(message),
            Some(TerminalEvent::Click { column, row }) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                process::resolve_click(state, area, column, row)
            }
            None => None,
        };

        if let Some(message) = message {
            for action in process::process_message(state, message) {
                handle_action(action);
            }
        }
    }
    Ok(())
}

fn handle_action(action: UpdateAction) {
    match action {
        UpdateAction::SetMouseCapture(enabled) => {
            if let Err(e) = terminal::set_mouse_capture(enabled) {
                warn!("Failed to change mouse capture: {}", e);
            }
        }
    }
}

/// Render a single frame into a `width` x `height` text grid
pub fn render_to_string(state: &AppState, width: u16, height: u16) -> Result<String> {
    let backend = TestBackend::new(width, height);
    let mut term = Terminal::new(backend).map_err(|e| Error::terminal(e.to_string()))?;
    term.draw(|frame| render::view(frame, state))
        .map_err(|e| Error::terminal(e.to_string()))?;
    Ok(render::buffer_to_text(term.backend().buffer()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use archmap_core::NodeId;

    #[test]
    fn test_render_to_string_dimensions() {
        let state = AppState::new();
        let text = render_to_string(&state, 120, 40).unwrap();

        assert_eq!(text.lines().count(), 40);
        assert!(text.contains("AI Coaching Agent Architecture"));
        assert!(text.contains("Select a Node"));
    }

    #[test]
    fn test_render_to_string_with_selection() {
        let mut state = AppState::new();
        state.view.select_node(NodeId::Translation);
        let text = render_to_string(&state, 120, 40).unwrap();

        assert!(text.contains("Multi-language"));
        assert!(!text.contains("Select a Node"));
    }
}
