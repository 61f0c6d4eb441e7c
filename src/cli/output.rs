//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::CredentialEntry;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// One `*` per character of `password`.
pub fn mask(password: &str) -> String {
    "*".repeat(password.chars().count())
}

/// Print a table of entries (#, Site, Username, Password, Note).
///
/// `rows` pairs each entry with its 0-based position; the `#` column
/// shows it 1-based, matching what commands take as `<NUMBER>`.
pub fn print_entries_table(rows: &[(usize, &CredentialEntry)], show_passwords: bool) {
    if rows.is_empty() {
        info("No matching entries.");
        tip("Run `passvault add --site <SITE> --username <USER>` to add one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Site", "Username", "Password", "Note"]);

    for (position, entry) in rows {
        let password = if show_passwords {
            entry.password.clone()
        } else {
            mask(&entry.password)
        };
        table.add_row(vec![
            (position + 1).to_string(),
            entry.site.clone(),
            entry.username.clone(),
            password,
            entry.note.clone(),
        ]);
    }

    println!("{table}");
}

/// Print every field of one entry as a two-column table.
pub fn print_entry_detail(number: usize, entry: &CredentialEntry) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![format!("Entry {number}"), String::new()]);
    table.add_row(vec!["Site", entry.site.as_str()]);
    table.add_row(vec!["Username", entry.username.as_str()]);
    table.add_row(vec!["Password", entry.password.as_str()]);
    table.add_row(vec!["Note", entry.note.as_str()]);

    println!("{table}");
}
