use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This prepares:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the directory that will hold the log
///
/// The log file itself is created by the first submission.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init {
        admin_secret,
        employee_secret,
    } = &cli.command
    {
        let path = Config::init_all(
            cli.log.clone(),
            admin_secret.clone(),
            employee_secret.clone(),
            cli.test,
        )?;

        let cfg = if cli.test {
            Config {
                log_file: cli.log.clone().unwrap_or_else(|| Config::default().log_file),
                ..Config::default()
            }
        } else {
            Config::load_from(&path)?
        };

        info(format!("Config file : {}", path.display()));
        info(format!(
            "Log file    : {} (created on first submission)",
            cfg.log_path().display()
        ));

        if cfg.admin_secret.is_none() || cfg.employee_secret.is_none() {
            info("Set HOTELLOG_ADMIN_SECRET / HOTELLOG_EMPLOYEE_SECRET or edit the config to enable logins.");
        }

        success("hotellog initialization completed!");
    }
    Ok(())
}
