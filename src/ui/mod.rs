// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Splits the screen into toolbar, canvas, legend and status bar
// - render: Main orchestration function that coordinates all rendering
// - toolbar: Renders the "add column" buttons
// - column: Renders one column (header buttons, view body, links)
// - hit_map: Clickable regions recorded during rendering
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar
// - toast: Renders toast notifications (brief pop-up messages)

pub mod column;
pub mod hit_map;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod toast;
pub mod toolbar;

// Re-export main render function for convenience
pub use render::render;
