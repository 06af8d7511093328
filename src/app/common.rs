use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, ExplainCommand,
    ExportCommand, GenerateCommand, SemanticsCommand, SolveCommand,
};
use anyhow::{anyhow, Context, Result};
use argprov::{
    aa::{AAFramework, SemanticsKind},
    engine::{EngineConfig, DEFAULT_MAX_CANDIDATE_SETS, DEFAULT_MAX_DISPUTE_TREE_NODES},
    io::{AspartixReader, AutoReader, InstanceReader, JsonReader},
};
use clap::{Arg, ArgMatches};
use lazy_static::lazy_static;
use log::{info, warn};
use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Argprov, an abstract argumentation semantics engine with verdict provenance.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(ExplainCommand::new()),
        Box::new(ExportCommand::new()),
        Box::new(GenerateCommand::new()),
        Box::new(SemanticsCommand::new()),
        Box::new(SolveCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the AF")
        .required(true)
}

pub(crate) const ARG_READER: &str = "READER";

pub(crate) fn reader_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_READER)
        .short("r")
        .long("reader")
        .empty_values(false)
        .multiple(false)
        .possible_values(&["apx", "json", "auto"])
        .default_value("auto")
        .help("the input file format")
        .required(false)
}

pub(crate) const ARG_SEMANTICS: &str = "SEMANTICS";

lazy_static! {
    static ref SEMANTICS_NAMES: Vec<String> = SemanticsKind::iter_names().collect();
}

pub(crate) fn semantics_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_SEMANTICS)
        .short("s")
        .long("semantics")
        .empty_values(false)
        .multiple(false)
        .help(semantics_help())
}

fn semantics_help() -> &'static str {
    lazy_static! {
        static ref HELP: String = format!(
            "the semantics to compute (one of {}, or their two letters names)",
            SEMANTICS_NAMES.join(", ")
        );
    }
    HELP.as_str()
}

pub(crate) fn read_semantics(arg_matches: &ArgMatches<'_>) -> Result<Option<SemanticsKind>> {
    arg_matches
        .value_of(ARG_SEMANTICS)
        .map(SemanticsKind::try_from)
        .transpose()
}

pub(crate) fn read_required_semantics(arg_matches: &ArgMatches<'_>) -> Result<SemanticsKind> {
    read_semantics(arg_matches)?.ok_or_else(|| anyhow!("a semantics must be provided"))
}

const ARG_SEARCH_BUDGET: &str = "SEARCH_BUDGET";
const ARG_DISPUTE_TREE_BUDGET: &str = "DISPUTE_TREE_BUDGET";

lazy_static! {
    static ref SEARCH_BUDGET_DEFAULT: String = DEFAULT_MAX_CANDIDATE_SETS.to_string();
    static ref DISPUTE_TREE_BUDGET_DEFAULT: String = DEFAULT_MAX_DISPUTE_TREE_NODES.to_string();
}

pub(crate) fn engine_config_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_SEARCH_BUDGET)
            .long("search-budget")
            .empty_values(false)
            .multiple(false)
            .default_value(SEARCH_BUDGET_DEFAULT.as_str())
            .help("the maximal number of candidate sets explored when computing extensions")
            .required(false),
        Arg::with_name(ARG_DISPUTE_TREE_BUDGET)
            .long("dispute-tree-budget")
            .empty_values(false)
            .multiple(false)
            .default_value(DISPUTE_TREE_BUDGET_DEFAULT.as_str())
            .help("the maximal number of nodes of a single dispute tree; larger trees are truncated")
            .required(false),
    ]
}

pub(crate) fn read_engine_config(arg_matches: &ArgMatches<'_>) -> Result<EngineConfig> {
    let read_budget = |arg: &str, default: usize| -> Result<usize> {
        match arg_matches.value_of(arg) {
            Some(s) => s
                .parse::<usize>()
                .with_context(|| format!(r#"while parsing budget "{}""#, s)),
            None => Ok(default),
        }
    };
    let config = EngineConfig::default()
        .with_max_candidate_sets(read_budget(ARG_SEARCH_BUDGET, DEFAULT_MAX_CANDIDATE_SETS)?)
        .with_max_dispute_tree_nodes(read_budget(
            ARG_DISPUTE_TREE_BUDGET,
            DEFAULT_MAX_DISPUTE_TREE_NODES,
        )?);
    info!(
        "search budget is {} candidate set(s), dispute tree budget is {} node(s)",
        config.max_candidate_sets(),
        config.max_dispute_tree_nodes()
    );
    Ok(config)
}

pub(crate) fn create_reader(arg_matches: &ArgMatches<'_>) -> Box<dyn InstanceReader<String>> {
    match arg_matches.value_of(ARG_READER) {
        Some("apx") => Box::<AspartixReader>::default(),
        Some("json") => Box::<JsonReader>::default(),
        _ => Box::<AutoReader>::default(),
    }
}

pub(crate) fn read_input_framework(arg_matches: &ArgMatches<'_>) -> Result<AAFramework<String>> {
    let file_path = arg_matches
        .value_of(ARG_INPUT)
        .ok_or_else(|| anyhow!("an input file must be provided"))?;
    let mut reader = create_reader(arg_matches);
    read_file_path(file_path, reader.as_mut())
}

pub(crate) fn read_file_path(
    file_path: &str,
    reader: &mut dyn InstanceReader<String>,
) -> Result<AAFramework<String>> {
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(
        File::open(&canonicalized)
            .with_context(|| format!(r#"while opening file "{}""#, file_path))?,
    );
    let af = reader
        .read(&mut file_reader)
        .with_context(|| format!(r#"while reading file "{}""#, file_path))?;
    info!(
        "the argumentation framework has {} argument(s) and {} attack(s)",
        af.n_arguments(),
        af.n_attacks(),
    );
    Ok(af)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
