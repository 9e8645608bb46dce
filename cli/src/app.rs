use crate::catalog::load_catalog;
use crate::cli::{Action, Cli, Command};
use crate::config::{AppConfig, load_config};
use crate::error::{AppError, AppResult};
use crate::gateway::{CommandGateway, DryRunGateway};
use crate::logger::setup_logger;
use crate::output::{render_catalog, render_response};
use engine::{AccentManager, AccentResponse, OverlayGateway, UserId};
use std::path::Path;
use std::sync::Arc;

/// Outcome of a command that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub output: String,
    /// False when at least one toggle was rejected.
    pub complete: bool,
}

/// Loads configuration, installs logging and runs one invocation against the
/// platform overlay command.
pub fn run(cli: &Cli) -> AppResult<RunOutcome> {
    let config = load_config(cli.config.as_deref())
        .into_result()
        .map_err(AppError::Config)?;
    setup_logger(config.logging(), cli.verbose)?;

    let command_gateway = CommandGateway::from_config(config.gateway());
    let gateway: Box<dyn OverlayGateway> = if cli.dry_run {
        log::info!("Dry run: overlay writes will be logged only");
        Box::new(DryRunGateway::new(command_gateway))
    } else {
        Box::new(command_gateway)
    };

    run_with_gateway(cli, &config, gateway)
}

/// Runs one invocation with an already loaded configuration and gateway.
pub fn run_with_gateway<G: OverlayGateway>(
    cli: &Cli,
    config: &AppConfig,
    gateway: G,
) -> AppResult<RunOutcome> {
    let catalog_path = cli
        .catalog
        .as_deref()
        .or_else(|| config.catalog_path().map(Path::new));
    let catalog = Arc::new(load_catalog(catalog_path)?);

    let command = match cli.command.action(config.exclusive_accents()) {
        Action::ShowCatalog => {
            return Ok(RunOutcome {
                output: render_catalog(&catalog),
                complete: true,
            });
        }
        Action::Execute(command) => command,
    };

    let user = cli.user.map(UserId).unwrap_or_else(|| config.user());
    let manager = AccentManager::new(catalog, gateway, user);
    let json = matches!(cli.command, Command::Status { json: true });

    match manager.execute_command(command) {
        AccentResponse::Error { error } => Err(AppError::Accent(error)),
        response => Ok(RunOutcome {
            output: render_response(&response, json)?,
            complete: response.is_success(),
        }),
    }
}
