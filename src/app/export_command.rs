use super::{cli_manager, command::Command, common};
use anyhow::{Context, Result};
use argprov::{
    engine::SemanticsEngine,
    error::EngineError,
    io::{AspartixWriter, DotConfig, DotWriter, FrameworkWriter, JsonWriter, RankDirection},
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::warn;
use std::str::FromStr;

const CMD_NAME: &str = "export";

const ARG_FORMAT: &str = "FORMAT";
const ARG_DIRECTION: &str = "DIRECTION";
const ARG_NO_BACKWARD_ARROWS: &str = "NO_BACKWARD_ARROWS";
const ARG_RANK_SAME: &str = "RANK_SAME";

pub(crate) struct ExportCommand;

impl ExportCommand {
    pub(crate) fn new() -> Self {
        ExportCommand
    }
}

impl<'a> Command<'a> for ExportCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about(
                "Writes an AF in another format, possibly colored by the statuses of a semantics",
            )
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg())
            .arg(common::reader_arg())
            .arg(common::semantics_arg().required(false))
            .args(&common::engine_config_args())
            .arg(
                Arg::with_name(ARG_FORMAT)
                    .long("format")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["dot", "apx", "json"])
                    .default_value("dot")
                    .help("the output format")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_DIRECTION)
                    .long("direction")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["LR", "TB"])
                    .case_insensitive(true)
                    .default_value("LR")
                    .help("the layout direction of DOT graphs")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_NO_BACKWARD_ARROWS)
                    .long("no-backward-arrows")
                    .takes_value(false)
                    .help("do not draw the attacks toward arguments declared earlier (DOT graphs)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_RANK_SAME)
                    .long("rank-same")
                    .empty_values(false)
                    .multiple(true)
                    .number_of_values(1)
                    .help(
                        "a comma separated group of arguments to draw at the same rank (DOT graphs)",
                    )
                    .required(false),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let af = common::read_input_framework(arg_matches)?;
        let semantics = common::read_semantics(arg_matches)?;
        let mut out = std::io::stdout();
        match arg_matches.value_of(ARG_FORMAT).unwrap_or("dot") {
            "apx" => {
                warn_if_semantics(semantics.is_some());
                AspartixWriter::default().write_framework(&af, &mut out)
            }
            "json" => {
                warn_if_semantics(semantics.is_some());
                JsonWriter::default().write_framework(&af, &mut out)
            }
            _ => {
                let writer = DotWriter::new(read_dot_config(arg_matches)?);
                let engine = SemanticsEngine::new(common::read_engine_config(arg_matches)?);
                let result = match semantics.map(|s| engine.solve(&af, s)).transpose() {
                    Ok(r) => r,
                    Err(EngineError::NoStableExtension) => {
                        warn!(
                            "the framework has no stable extension; arguments are left uncolored"
                        );
                        None
                    }
                    Err(e) => return Err(e).context("while solving the framework"),
                };
                writer.write_solved_framework(&af, result.as_ref(), &mut out)
            }
        }
    }
}

fn warn_if_semantics(semantics_is_set: bool) {
    if semantics_is_set {
        warn!("the semantics is only used by the DOT output; ignoring it");
    }
}

fn read_dot_config(arg_matches: &ArgMatches<'_>) -> Result<DotConfig> {
    let direction_str = arg_matches.value_of(ARG_DIRECTION).unwrap_or("LR");
    let direction = RankDirection::from_str(direction_str)
        .with_context(|| format!(r#"undefined direction "{}""#, direction_str))?;
    let rank_same_groups = arg_matches
        .values_of(ARG_RANK_SAME)
        .map(|groups| {
            groups
                .map(|g| {
                    g.split(',')
                        .map(|l| l.trim().to_string())
                        .filter(|l| !l.is_empty())
                        .collect::<Vec<String>>()
                })
                .collect::<Vec<Vec<String>>>()
        })
        .unwrap_or_default();
    Ok(DotConfig {
        direction,
        allow_backward_arrows: !arg_matches.is_present(ARG_NO_BACKWARD_ARROWS),
        rank_same_groups,
        ..Default::default()
    })
}
