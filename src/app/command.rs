use anyhow::Result;
use clap::{App, ArgMatches};

/// A subcommand of the app.
///
/// Commands declare their CLI arguments using clap and execute themselves given the parsed arguments.
/// Each command must have a unique name.
pub(crate) trait Command<'a> {
    /// Returns the name of the command.
    fn name(&self) -> &str;

    /// Returns the clap subcommand describing the CLI arguments of this command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Executes the command given its arguments.
    ///
    /// The function returns `Ok(())` iff the app should exit with a success status code.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}
