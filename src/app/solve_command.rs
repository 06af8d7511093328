use super::{cli_manager, command::Command, common};
use anyhow::{Context, Result};
use argprov::{
    engine::SemanticsEngine,
    error::EngineError,
    io::ResultWriter,
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "solve";

const ARG_EXTENSIONS: &str = "EXTENSIONS";
const ARG_JSON: &str = "JSON";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Computes the status of each argument under a semantics")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg())
            .arg(common::reader_arg())
            .arg(common::semantics_arg().required(true))
            .args(&common::engine_config_args())
            .arg(
                Arg::with_name(ARG_EXTENSIONS)
                    .long("extensions")
                    .takes_value(false)
                    .help("print the extensions instead of the statuses")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_JSON)
                    .long("json")
                    .takes_value(false)
                    .conflicts_with(ARG_EXTENSIONS)
                    .help("print the statuses and their provenance as JSON")
                    .required(false),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let af = common::read_input_framework(arg_matches)?;
        let semantics = common::read_required_semantics(arg_matches)?;
        let engine = SemanticsEngine::new(common::read_engine_config(arg_matches)?);
        let writer = ResultWriter::default();
        let mut out = std::io::stdout();
        if arg_matches.is_present(ARG_EXTENSIONS) {
            match engine.compute_extensions(&af, semantics) {
                Ok(extensions) => writer.write_extensions(&extensions, &mut out),
                Err(EngineError::NoStableExtension) => {
                    info!("the framework has no stable extension");
                    writer.write_no_stable_extension(&mut out)
                }
                Err(e) => Err(e).context("while computing the extensions"),
            }
        } else {
            match engine.solve(&af, semantics) {
                Ok(result) if arg_matches.is_present(ARG_JSON) => {
                    writer.write_json(&result, &mut out)
                }
                Ok(result) => writer.write_statuses(&result, &mut out),
                Err(EngineError::NoStableExtension) => {
                    info!("the framework has no stable extension");
                    writer.write_no_stable_extension(&mut out)
                }
                Err(e) => Err(e).context("while solving the framework"),
            }
        }
    }
}
