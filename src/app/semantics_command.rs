use super::{cli_manager, command::Command};
use anyhow::Result;
use argprov::aa::SemanticsKind;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use strum::IntoEnumIterator;

const CMD_NAME: &str = "semantics";

pub(crate) struct SemanticsCommand;

impl SemanticsCommand {
    pub(crate) fn new() -> Self {
        SemanticsCommand
    }
}

impl<'a> Command<'a> for SemanticsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the semantics handled by the engine")
            .setting(AppSettings::DisableVersion)
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &ArgMatches<'_>) -> Result<()> {
        let semantics = SemanticsKind::iter()
            .map(|s| format!("{} ({})", s.as_ref(), s.to_short_str()))
            .collect::<Vec<String>>();
        println!("[{}]", semantics.join(","));
        Ok(())
    }
}
