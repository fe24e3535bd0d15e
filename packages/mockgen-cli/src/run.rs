//! Command line driver
//!
//! Parses `mockgen` arguments, generates one mock per model in parallel and
//! writes the results in model order.

use crate::destination::{Destination, GeneratedMock};
use crate::gofmt::GofmtFormatter;
use crate::model_loader::load_package;
use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use gomockgen::{
    parse_mock_names, Generator, GeneratorOptions, IdentityFormatter, Package, Source,
    SourceFormatter,
};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::debug;

pub fn cli() -> Command {
    Command::new("mockgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates GoMock mock packages from interface models")
        .arg(
            Arg::new("models")
                .value_name("MODEL")
                .help("JSON package model files")
                .required(true)
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("destination")
                .short('d')
                .long("destination")
                .value_name("FILE")
                .help("Output file; defaults to stdout")
                .value_parser(clap::value_parser!(PathBuf))
                .conflicts_with("out_dir"),
        )
        .arg(
            Arg::new("out_dir")
                .short('o')
                .long("out-dir")
                .value_name("DIR")
                .help("Writes mock_<package>.go for every model into DIR")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("package")
                .short('p')
                .long("package")
                .value_name("NAME")
                .help("Package of the generated code; defaults to mock_<package>"),
        )
        .arg(
            Arg::new("mock_names")
                .long("mock_names")
                .value_name("LIST")
                .help("Comma-separated Interface=MockName pairs"),
        )
        .arg(
            Arg::new("self_package")
                .long("self_package")
                .value_name("PATH")
                .help("Import path of the generated package, left unqualified in the output"),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .value_name("LABEL")
                .help("Source file named in the generated header"),
        )
        .arg(
            Arg::new("mock_library")
                .long("mock_library")
                .value_name("PATH")
                .help("Import path of the gomock library")
                .default_value(gomockgen::config::DEFAULT_MOCK_LIBRARY_PATH),
        )
        .arg(
            Arg::new("gofmt")
                .long("gofmt")
                .help("Formats the output with gofmt")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub models: Vec<PathBuf>,
    pub destination: Destination,
    pub options: GeneratorOptions,
    pub gofmt: bool,
}

impl RunConfig {
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let models: Vec<PathBuf> = matches
            .get_many::<PathBuf>("models")
            .map(|models| models.cloned().collect())
            .unwrap_or_default();

        let destination = if let Some(dir) = matches.get_one::<PathBuf>("out_dir") {
            Destination::Directory(dir.clone())
        } else if let Some(file) = matches.get_one::<PathBuf>("destination") {
            Destination::File(file.clone())
        } else {
            Destination::Stdout
        };
        destination.check_model_count(models.len())?;

        let mut options = GeneratorOptions::default();
        if let Some(names) = matches.get_one::<String>("mock_names") {
            options.mock_names = parse_mock_names(names)?;
        }
        if let Some(name) = matches.get_one::<String>("package") {
            options = options.with_package_name(name);
        }
        if let Some(path) = matches.get_one::<String>("self_package") {
            options = options.with_output_package_path(path);
        }
        if let Some(label) = matches.get_one::<String>("source") {
            options = options.with_source(Source::File(label.clone()));
        }
        if let Some(path) = matches.get_one::<String>("mock_library") {
            options = options.with_mock_library_path(path);
        }
        options.validate()?;

        Ok(RunConfig {
            models,
            destination,
            options,
            gofmt: matches.get_flag("gofmt"),
        })
    }
}

/// Generates a mock for every package. Results keep the order of `packages`;
/// any failure aborts the whole batch.
pub fn generate_all(
    packages: &[Package],
    options: &GeneratorOptions,
    formatter: &(dyn SourceFormatter + Sync),
) -> anyhow::Result<Vec<GeneratedMock>> {
    packages
        .par_iter()
        .map(|pkg| {
            let mut generator = Generator::new(options.clone());
            generator
                .generate(pkg)
                .and_then(|_| generator.output(formatter))
                .map(|source| GeneratedMock {
                    package: pkg.name.clone(),
                    source,
                })
                .with_context(|| format!("failed to generate mocks for package {}", pkg.name))
        })
        .collect()
}

pub fn run(config: &RunConfig) -> anyhow::Result<()> {
    let packages = config
        .models
        .par_iter()
        .map(|path| load_package(path))
        .collect::<anyhow::Result<Vec<_>>>()?;
    debug!(models = packages.len(), gofmt = config.gofmt, "loaded models");

    let formatter: Box<dyn SourceFormatter + Sync> = if config.gofmt {
        Box::new(GofmtFormatter::default())
    } else {
        Box::new(IdentityFormatter)
    };
    let mocks = generate_all(&packages, &config.options, formatter.as_ref())?;
    config.destination.write(&mocks)
}
