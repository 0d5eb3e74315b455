use garble::app::App;
use garble::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();
    let mut tui = TuiManager::new()?;

    // The TUI handles all user input including quote and file loading
    tui.run_event_loop(&mut app)?;

    Ok(())
}
