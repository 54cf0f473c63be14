pub mod config;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod submit;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::credentials::CredentialStore;
use crate::core::gate::RoleGate;
use crate::errors::{AppError, AppResult};
use crate::models::Session;
use std::io::{self, Write};

/// Authenticate the caller from `--user` / `--password` (or a stdin prompt).
pub fn login(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let user = cli.user.as_deref().ok_or_else(|| {
        AppError::Validation("login required: pass --user admin or --user employee".into())
    })?;

    let secret = match &cli.password {
        Some(p) => p.clone(),
        None => prompt_password(user)?,
    };

    let store = CredentialStore::from_config(cfg);
    RoleGate::new(&store).login(user, &secret)
}

fn prompt_password(user: &str) -> AppResult<String> {
    eprint!("Password for {user}: ");
    io::stderr().flush().ok();

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
