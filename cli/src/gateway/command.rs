use crate::config::GatewayConfig;
use engine::errors::{GatewayError, GatewayResult};
use engine::{OverlayGateway, OverlayId, UserId};
use std::collections::BTreeMap;
use std::process::Command;

/// Talks to the overlay service through its shell command.
///
/// Every call spawns one process:
/// `<program> [prefix args] overlay list|enable|disable --user <id> [<overlay>]`.
#[derive(Debug, Clone)]
pub struct CommandGateway {
    program: String,
    prefix_args: Vec<String>,
}

impl CommandGateway {
    pub fn new(program: impl Into<String>, prefix_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            prefix_args,
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(config.program(), config.prefix_args().to_vec())
    }

    /// Full argument list for one overlay subcommand.
    pub fn command_args(&self, action: &str, user: UserId, overlay: Option<&OverlayId>) -> Vec<String> {
        let mut args = self.prefix_args.clone();
        args.extend([
            "overlay".to_string(),
            action.to_string(),
            "--user".to_string(),
            user.to_string(),
        ]);
        if let Some(overlay) = overlay {
            args.push(overlay.to_string());
        }
        args
    }

    fn run(&self, args: Vec<String>) -> GatewayResult<String> {
        log::trace!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| GatewayError::Unavailable(format!("failed to run {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GatewayError::Unavailable(format!(
                "{} {} exited with {}: {}",
                self.program,
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl OverlayGateway for CommandGateway {
    fn is_enabled(&self, overlay: &OverlayId, user: UserId) -> GatewayResult<Option<bool>> {
        let listing = self.run(self.command_args("list", user, None))?;
        Ok(parse_overlay_list(&listing).get(overlay).copied())
    }

    fn set_enabled(&self, overlay: &OverlayId, enabled: bool, user: UserId) -> GatewayResult<()> {
        let action = if enabled { "enable" } else { "disable" };
        self.run(self.command_args(action, user, Some(overlay)))?;
        Ok(())
    }
}

/// Parses `overlay list` output into overlay states.
///
/// `[x] id` is enabled; `[ ] id` and `[-] id` are known but disabled. Target
/// package headers and anything else are skipped.
pub fn parse_overlay_list(output: &str) -> BTreeMap<OverlayId, bool> {
    output
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let (state, id) = if let Some(id) = line.strip_prefix("[x]") {
                (true, id)
            } else if let Some(id) = line.strip_prefix("[ ]").or_else(|| line.strip_prefix("[-]")) {
                (false, id)
            } else {
                return None;
            };
            let id = id.trim();
            (!id.is_empty()).then(|| (OverlayId::new(id), state))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_args_include_prefix_and_user() {
        let gateway = CommandGateway::new("adb", vec!["shell".to_string(), "cmd".to_string()]);

        assert_eq!(
            gateway.command_args("enable", UserId(10), Some(&"com.accents.red".into())),
            vec!["shell", "cmd", "overlay", "enable", "--user", "10", "com.accents.red"]
        );
        assert_eq!(
            gateway.command_args("list", UserId::SYSTEM, None),
            vec!["shell", "cmd", "overlay", "list", "--user", "0"]
        );
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let gateway = CommandGateway::new("tinct-test-no-such-program", Vec::new());
        assert!(matches!(
            gateway.is_enabled(&"a".into(), UserId::SYSTEM),
            Err(GatewayError::Unavailable(_))
        ));
    }
}
