//! `passvault copy`: put a credential's password on the clipboard.

use arboard::Clipboard;

use crate::cli::output;
use crate::cli::{entry_at, unlock, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `copy` command.
pub fn execute(cli: &Cli, number: usize) -> Result<()> {
    let unlocked = unlock(cli)?;
    let entry = entry_at(unlocked.session.records(), number)?;

    let mut clipboard =
        Clipboard::new().map_err(|e| PassVaultError::Clipboard(format!("unavailable: {e}")))?;

    if let Some(notice) = hold_notice() {
        output::info(notice);
    }
    set_clipboard_text(&mut clipboard, &entry.password)
        .map_err(|e| PassVaultError::Clipboard(format!("copy failed: {e}")))?;

    output::success(&format!(
        "Password for {} ({}) copied to clipboard",
        entry.site, entry.username
    ));

    Ok(())
}

/// X11 and Wayland clipboards are served by the owning process, so the
/// contents vanish when it exits.  Block until another program takes
/// the selection over, such as a clipboard manager or a new copy.
#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_clipboard_text(
    clipboard: &mut Clipboard,
    text: &str,
) -> std::result::Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard.set().wait().text(text.to_owned())
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_clipboard_text(
    clipboard: &mut Clipboard,
    text: &str,
) -> std::result::Result<(), arboard::Error> {
    clipboard.set_text(text.to_owned())
}

/// Message printed before a copy that keeps the process running.
fn hold_notice() -> Option<&'static str> {
    if cfg!(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    )) {
        Some("Keeping the password on the clipboard until something else is copied (Ctrl-C to stop).")
    } else {
        None
    }
}
