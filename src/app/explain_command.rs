use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Context, Result};
use argprov::{
    engine::{ProvenanceMode, SemanticsEngine},
    error::EngineError,
    io::ResultWriter,
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use lazy_static::lazy_static;

const CMD_NAME: &str = "explain";

const ARG_ARG: &str = "ARG";
const ARG_MODE: &str = "MODE";

lazy_static! {
    static ref MODE_NAMES: Vec<String> = ProvenanceMode::iter_names().collect();
    static ref MODE_NAMES_STR: Vec<&'static str> = MODE_NAMES.iter().map(|s| s.as_str()).collect();
}

pub(crate) struct ExplainCommand;

impl ExplainCommand {
    pub(crate) fn new() -> Self {
        ExplainCommand
    }
}

impl<'a> Command<'a> for ExplainCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Explains the status of an argument under a semantics")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg())
            .arg(common::reader_arg())
            .arg(common::semantics_arg().required(true))
            .args(&common::engine_config_args())
            .arg(
                Arg::with_name(ARG_ARG)
                    .short("a")
                    .long("argument")
                    .empty_values(false)
                    .multiple(false)
                    .help("the argument to explain")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_MODE)
                    .short("m")
                    .long("mode")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&MODE_NAMES_STR)
                    .default_value("actual")
                    .help("the kind of provenance to display")
                    .required(false),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let af = common::read_input_framework(arg_matches)?;
        let semantics = common::read_required_semantics(arg_matches)?;
        let label = arg_matches
            .value_of(ARG_ARG)
            .ok_or_else(|| anyhow!("an argument must be provided"))?
            .to_string();
        af.argument_set()
            .get_argument(&label)
            .context("while parsing the argument passed to the command line")?;
        let mode = ProvenanceMode::try_from(arg_matches.value_of(ARG_MODE).unwrap_or("actual"))?;
        let engine = SemanticsEngine::new(common::read_engine_config(arg_matches)?);
        let writer = ResultWriter::default();
        let mut out = std::io::stdout();
        match engine.solve(&af, semantics) {
            Ok(result) => {
                let provenance = result
                    .provenance(&label)
                    .ok_or_else(|| anyhow!(r#"no provenance for argument "{}""#, label))?;
                writer.write_provenance(&result, provenance, mode, &mut out)
            }
            Err(EngineError::NoStableExtension) => writer.write_no_stable_extension(&mut out),
            Err(e) => Err(e).context("while solving the framework"),
        }
    }
}
