//! `passvault generate`: print a random password.

use crate::cli::{load_settings, Cli};
use crate::crypto::generate_password;
use crate::errors::Result;

/// Execute the `generate` command.  Does not open the vault.
pub fn execute(cli: &Cli, length: Option<usize>) -> Result<()> {
    let length = match length {
        Some(n) => n,
        None => load_settings(cli)?.password_length,
    };

    let password = generate_password(length)?;
    println!("{}", password.as_str());

    Ok(())
}
