use super::{cli_manager, command::Command};
use anyhow::{Context, Result};
use argprov::{
    aa::{AAFramework, RandomFrameworkGenerator, SampleFramework},
    io::{AspartixWriter, DotConfig, DotWriter, FrameworkWriter, JsonWriter},
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use lazy_static::lazy_static;
use log::info;

const CMD_NAME: &str = "generate";

const ARG_SAMPLE: &str = "SAMPLE";
const ARG_N_ARGUMENTS: &str = "N_ARGUMENTS";
const ARG_N_ATTACKS: &str = "N_ATTACKS";
const ARG_SEED: &str = "SEED";
const ARG_FORMAT: &str = "FORMAT";

lazy_static! {
    static ref SAMPLE_NAMES: Vec<String> = SampleFramework::iter_names().collect();
    static ref SAMPLE_NAMES_STR: Vec<&'static str> =
        SAMPLE_NAMES.iter().map(|s| s.as_str()).collect();
}

pub(crate) struct GenerateCommand;

impl GenerateCommand {
    pub(crate) fn new() -> Self {
        GenerateCommand
    }
}

impl<'a> Command<'a> for GenerateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Writes a random AF without self-attacks, or one of the sample AFs")
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name(ARG_SAMPLE)
                    .long("sample")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&SAMPLE_NAMES_STR)
                    .conflicts_with_all(&[ARG_N_ARGUMENTS, ARG_N_ATTACKS, ARG_SEED])
                    .help("write this sample AF instead of a random one")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_N_ARGUMENTS)
                    .short("n")
                    .long("arguments")
                    .empty_values(false)
                    .multiple(false)
                    .help("the number of arguments [default: 5]")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_N_ATTACKS)
                    .short("m")
                    .long("attacks")
                    .empty_values(false)
                    .multiple(false)
                    .help("the number of attacks [default: 8]")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_SEED)
                    .long("seed")
                    .empty_values(false)
                    .multiple(false)
                    .help("the seed of the random generator")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_FORMAT)
                    .long("format")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["apx", "json", "dot"])
                    .default_value("apx")
                    .help("the output format")
                    .required(false),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let af = match arg_matches.value_of(ARG_SAMPLE) {
            Some(name) => {
                let sample = SampleFramework::try_from(name)?;
                info!("writing the {} sample", sample.as_ref());
                sample.framework()?
            }
            None => generate_random_framework(arg_matches)?,
        };
        let writer: Box<dyn FrameworkWriter<String>> =
            match arg_matches.value_of(ARG_FORMAT).unwrap_or("apx") {
                "json" => Box::<JsonWriter>::default(),
                "dot" => Box::new(DotWriter::new(DotConfig::default())),
                _ => Box::<AspartixWriter>::default(),
            };
        writer.write_framework(&af, &mut std::io::stdout())
    }
}

fn generate_random_framework(arg_matches: &ArgMatches<'_>) -> Result<AAFramework<String>> {
    let read_count = |arg: &str, default: usize| -> Result<usize> {
        match arg_matches.value_of(arg) {
            Some(s) => s
                .parse::<usize>()
                .with_context(|| format!(r#"while parsing count "{}""#, s)),
            None => Ok(default),
        }
    };
    let n_arguments = read_count(ARG_N_ARGUMENTS, 5)?;
    let n_attacks = read_count(ARG_N_ATTACKS, 8)?;
    let mut generator = RandomFrameworkGenerator::new(n_arguments, n_attacks);
    if let Some(s) = arg_matches.value_of(ARG_SEED) {
        let seed = s
            .parse::<u64>()
            .with_context(|| format!(r#"while parsing seed "{}""#, s))?;
        generator = generator.with_seed(seed);
    }
    info!(
        "generating a framework with {} argument(s) and {} attack(s)",
        n_arguments, n_attacks
    );
    generator
        .generate()
        .context("while generating a random framework")
}
