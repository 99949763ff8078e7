//! CLI commands

mod changelog;
mod init;
mod publish;
mod requirements;

pub use changelog::ChangelogCommand;
pub use init::InitCommand;
pub use publish::PublishCommand;
pub use requirements::RequirementsCommand;
