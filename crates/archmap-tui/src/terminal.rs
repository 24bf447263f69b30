//! Terminal setup and restoration

use archmap_core::prelude::*;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Turn terminal mouse reporting on or off
pub fn set_mouse_capture(enabled: bool) -> Result<()> {
    let mut stdout = std::io::stdout();
    if enabled {
        execute!(stdout, EnableMouseCapture)?;
    } else {
        execute!(stdout, DisableMouseCapture)?;
    }
    debug!("Mouse capture {}", if enabled { "enabled" } else { "disabled" });
    Ok(())
}
