//! `asg application-security-group` command - Show a single group with its
//! rules and bound spaces.

use std::sync::Arc;

use asg_core::requirements::{self, ArgCountRequirement, LoginRequirement};
use asg_core::{
    AppSecurityGroupRepository, ApplicationSecurityGroup, CloudControllerAsgRepository,
    CurrentUser, LoginChecker, Requirement, RequirementFailure, SessionStore, Ui,
};
use clap::Args;

use super::CommandOutcome;
use crate::output::TerminalUi;

#[derive(Args)]
pub struct ApplicationSecurityGroupArgs {
    /// Name of the application security group
    #[arg(value_name = "SECURITY_GROUP")]
    pub args: Vec<String>,
}

/// Shows one application security group.
pub struct ShowAppSecurityGroup<U: Ui> {
    ui: U,
    login: Arc<dyn LoginChecker>,
    user: Arc<dyn CurrentUser>,
    repo: Arc<dyn AppSecurityGroupRepository>,
}

impl<U: Ui> ShowAppSecurityGroup<U> {
    pub fn new(
        ui: U,
        login: Arc<dyn LoginChecker>,
        user: Arc<dyn CurrentUser>,
        repo: Arc<dyn AppSecurityGroupRepository>,
    ) -> Self {
        Self {
            ui,
            login,
            user,
            repo,
        }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Arity first: bad usage is reported whether or not a session exists.
    fn requirements(&self, args: &[String]) -> Vec<Box<dyn Requirement>> {
        vec![
            Box::new(ArgCountRequirement::new(1, args.len())),
            Box::new(LoginRequirement::new(Arc::clone(&self.login))),
        ]
    }

    pub async fn execute(&mut self, args: &[String]) -> CommandOutcome {
        if let Err(failure) = requirements::check_all(&self.requirements(args)) {
            return reject(&mut self.ui, failure);
        }

        self.run(&args[0]).await
    }

    async fn run(&mut self, name: &str) -> CommandOutcome {
        self.ui.say(&format!(
            "Getting application security group {} as {}...",
            name,
            self.user.current_user()
        ));

        let group = match self.repo.read(name).await {
            Ok(group) => group,
            Err(e) => {
                self.ui.failed(&e.to_string());
                return CommandOutcome::Failed;
            }
        };

        // Render fully before printing OK so a failure leaves no partial body.
        let lines = match render(&group) {
            Ok(lines) => lines,
            Err(e) => {
                self.ui.failed(&e.to_string());
                return CommandOutcome::Failed;
            }
        };

        self.ui.ok();
        self.ui.say("");
        for line in &lines {
            self.ui.say(line);
        }
        CommandOutcome::Rendered
    }
}

fn render(group: &ApplicationSecurityGroup) -> asg_core::Result<Vec<String>> {
    Ok(vec![
        format!("Name: {}", group.name),
        format!("Rules: {}", group.rules_json()?),
        format!(
            "Spaces: {}",
            group
                .space_names()
                .unwrap_or_else(|| "No spaces".to_string())
        ),
    ])
}

fn reject<U: Ui>(ui: &mut U, failure: RequirementFailure) -> CommandOutcome {
    tracing::debug!(%failure, "Command requirements not met");
    if failure.is_usage() {
        ui.failed_with_usage(&failure.to_string());
    } else {
        ui.failed(&failure.to_string());
    }
    CommandOutcome::Rejected(failure)
}

async fn show<U: Ui>(
    args: &[String],
    store: &SessionStore,
    ui: &mut U,
) -> Result<CommandOutcome, Box<dyn std::error::Error>> {
    // Usage depends on the arguments alone, so it is settled before the
    // session file is read.
    if let Err(failure) = ArgCountRequirement::new(1, args.len()).check() {
        return Ok(reject(ui, failure));
    }

    let session = Arc::new(store.load()?);
    let repo = Arc::new(CloudControllerAsgRepository::new(&session));

    let mut command = ShowAppSecurityGroup::new(ui, session.clone(), session, repo);
    Ok(command.execute(args).await)
}

pub async fn execute(
    args: ApplicationSecurityGroupArgs,
    store: &SessionStore,
) -> Result<CommandOutcome, Box<dyn std::error::Error>> {
    let mut ui = TerminalUi::stdout();
    show(&args.args, store, &mut ui).await
}
