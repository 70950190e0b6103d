//! CLI command definitions and dispatch.

mod application_security_group;

pub use application_security_group::ShowAppSecurityGroup;

use std::path::PathBuf;

use asg_core::{RequirementFailure, SessionStore};
use clap::{CommandFactory, Parser, Subcommand};

/// Subcommand name of the group inspection command.
const APPLICATION_SECURITY_GROUP: &str = "application-security-group";

/// ASG - inspect platform application security groups.
#[derive(Parser)]
#[command(name = "asg", version, about)]
pub struct Cli {
    /// Session file (default: ~/.asg/config.json)
    #[arg(long, global = true, env = "ASG_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show a single application security group
    #[command(name = "application-security-group", visible_alias = "asg")]
    ApplicationSecurityGroup(application_security_group::ApplicationSecurityGroupArgs),
}

/// Terminal state of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Resource fetched and printed
    Rendered,
    /// Lookup failed after requirements passed
    Failed,
    /// A requirement stopped the command before it ran
    Rejected(RequirementFailure),
}

impl CommandOutcome {
    pub fn passed_requirements(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    pub fn failed_with_usage(&self) -> bool {
        matches!(self, Self::Rejected(failure) if failure.is_usage())
    }

    /// Process exit code: 0 rendered, 2 usage, 1 anything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Rendered => 0,
            Self::Rejected(RequirementFailure::Usage(_)) => 2,
            Self::Rejected(_) | Self::Failed => 1,
        }
    }
}

/// Open the session store, honouring `--config` / `ASG_CONFIG`.
pub(crate) fn session_store(
    config: Option<PathBuf>,
) -> Result<SessionStore, Box<dyn std::error::Error>> {
    match config {
        Some(path) => Ok(SessionStore::new(path)),
        None => Ok(SessionStore::default_path()?),
    }
}

/// Print help for a subcommand after a usage failure.
fn print_usage(subcommand: &str) {
    let mut cli = Cli::command();
    if let Some(sub) = cli.find_subcommand_mut(subcommand) {
        println!();
        println!("{}", sub.render_help());
    }
}

/// Dispatch a parsed CLI to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<CommandOutcome, Box<dyn std::error::Error>> {
    let store = session_store(cli.config)?;
    tracing::debug!(session = %store.path().display(), "Using session file");

    let (name, outcome) = match cli.command {
        Command::ApplicationSecurityGroup(args) => (
            APPLICATION_SECURITY_GROUP,
            application_security_group::execute(args, &store).await?,
        ),
    };

    if outcome.failed_with_usage() {
        print_usage(name);
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_group_name() {
        let cli = Cli::try_parse_from(["asg", "application-security-group", "my-group"]).unwrap();
        let Command::ApplicationSecurityGroup(args) = cli.command;
        assert_eq!(args.args, vec!["my-group".to_string()]);
    }

    #[test]
    fn test_parse_alias_and_config() {
        let cli =
            Cli::try_parse_from(["asg", "asg", "one", "two", "--config", "/tmp/asg.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/asg.json")));
        let Command::ApplicationSecurityGroup(args) = cli.command;
        assert_eq!(args.args, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_parse_without_group_name_is_left_to_the_command() {
        let cli = Cli::try_parse_from(["asg", "application-security-group"]).unwrap();
        let Command::ApplicationSecurityGroup(args) = cli.command;
        assert!(args.args.is_empty());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CommandOutcome::Rendered.exit_code(), 0);
        assert_eq!(CommandOutcome::Failed.exit_code(), 1);
        assert_eq!(
            CommandOutcome::Rejected(RequirementFailure::NotLoggedIn).exit_code(),
            1
        );
        assert_eq!(
            CommandOutcome::Rejected(RequirementFailure::Usage("x".to_string())).exit_code(),
            2
        );
    }

    #[test]
    fn test_session_store_override() {
        let store = session_store(Some(PathBuf::from("/tmp/asg.json"))).unwrap();
        assert_eq!(store.path(), std::path::Path::new("/tmp/asg.json"));
    }
}
