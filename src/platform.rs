//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for app shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const PRIMARY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const PRIMARY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the status bar
/// Ctrl+S works on all platforms (Cmd+S also works on macOS)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Import shortcut display
/// - macOS: "Cmd+O"
/// - Linux/Windows: "Ctrl+O"
#[cfg(target_os = "macos")]
pub const IMPORT_SHORTCUT: &str = "Cmd+O";

#[cfg(not(target_os = "macos"))]
pub const IMPORT_SHORTCUT: &str = "Ctrl+O";
