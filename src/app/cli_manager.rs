use super::{
    app_helper::{init_logger, init_logger_with_level},
    command::Command,
};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg};
use log::info;
use std::{ffi::OsString, str::FromStr};
use sysinfo::System;

/// Handles the set of commands and processes the CLI arguments against them.
pub(crate) struct CliManager<'a> {
    app_name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

const ARG_LOGGING_LEVEL: &str = "LOGGING_LEVEL";

pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(ARG_LOGGING_LEVEL)
        .long("logging-level")
        .multiple(false)
        .default_value("info")
        .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
        .help("set the minimal logging level")
}

impl<'a> CliManager<'a> {
    pub(crate) fn new(
        app_name: &'a str,
        version: &'a str,
        author: &'a str,
        about: &'a str,
    ) -> Self {
        CliManager {
            app_name,
            version,
            author,
            about,
            commands: vec![],
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    pub(crate) fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(|a| a.into()).collect();
        let mut app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::NeedsSubcommandHelp)
            .setting(AppSettings::SubcommandRequired)
            .version(self.version)
            .author(self.author)
            .about(self.about);
        for c in self.commands.iter() {
            app = app.subcommand(c.clap_subcommand());
        }
        match app.clone().get_matches_from_safe(args.iter()) {
            Ok(matches) => {
                let (name, sub_matches) = matches.subcommand();
                let command = self
                    .commands
                    .iter()
                    .find(|c| c.name() == name)
                    .ok_or_else(|| anyhow!(r#"no such command "{}""#, name))?;
                let sub_matches =
                    sub_matches.ok_or_else(|| anyhow!(r#"no arguments for command "{}""#, name))?;
                let log_level = match sub_matches.value_of(ARG_LOGGING_LEVEL) {
                    Some(l) => log::LevelFilter::from_str(l)
                        .with_context(|| format!(r#"undefined logging level "{}""#, l))?,
                    None => log::LevelFilter::Info,
                };
                init_logger_with_level(log_level);
                info!("{} {}", self.app_name, self.version);
                sys_info();
                command.execute(sub_matches)
            }
            Err(clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            }) => {
                init_logger();
                self.print_help(&mut app, &args)
            }
            Err(e) => {
                init_logger();
                info!("{} {}", self.app_name, self.version);
                Err(anyhow!("{}", e))
            }
        }
    }

    fn print_help(&self, app: &mut App, args: &[OsString]) -> Result<()> {
        const HELP_STRINGS: [&str; 3] = ["help", "-h", "--help"];
        let arg = |i: usize| args.get(i).and_then(|a| a.to_str());
        let subcommand_name = match (arg(1), arg(2)) {
            (Some(a1), Some(a2)) if HELP_STRINGS.contains(&a1) => Some(a2),
            (Some(a1), _) if !HELP_STRINGS.contains(&a1) => Some(a1),
            _ => None,
        };
        let mut message = Vec::new();
        match subcommand_name.and_then(|n| self.commands.iter().find(|c| c.name() == n)) {
            Some(c) => c.clap_subcommand().write_long_help(&mut message),
            None => app.write_long_help(&mut message),
        }
        .map_err(|e| anyhow!("{}", e))
        .context("while writing the help message")?;
        String::from_utf8_lossy(&message)
            .split('\n')
            .for_each(|s| info!("{}", s));
        info!("");
        Ok(())
    }
}

fn sys_info() {
    info!("----------------------------------------");
    let sys = System::new_all();
    let unknown = || "[unknown]".to_string();
    info!("running on {}", System::host_name().unwrap_or_else(unknown));
    info!(
        "OS is {} {} with kernel {}",
        System::name().unwrap_or_else(unknown),
        System::os_version().unwrap_or_else(unknown),
        System::kernel_version().unwrap_or_else(unknown)
    );
    let mut cpu_kinds: Vec<&str> = sys.cpus().iter().map(|p| p.brand()).collect();
    cpu_kinds.sort_unstable();
    cpu_kinds.dedup();
    info!(
        "physical core count: {} {:?}",
        sys.physical_core_count()
            .map(|n| n.to_string())
            .unwrap_or_else(unknown),
        cpu_kinds
    );
    info!("total memory: {} KB", sys.total_memory() / 1024);
    info!("----------------------------------------");
}
