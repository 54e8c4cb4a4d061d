use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use unicode_tables_prepare::output::{self, stats, DirectoryEmitter};
use unicode_tables_prepare::{compile, Catalogue, Config};
use unicode_tables_source::{read_source, records, DerivedProperties};
use unicode_tables_source::{DERIVED_CORE_PROPERTIES, UNICODE_DATA};

fn main() -> ExitCode
{
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<()>
{
    let catalogue = Catalogue::from(config);
    log::debug!("{:?}", catalogue);

    let unicode_data = read_source(&config.ucd.join(UNICODE_DATA))
        .context("не удалось прочитать UnicodeData.txt")?;

    let derived = match catalogue.derived.is_empty() {
        true => DerivedProperties::default(),
        false => DerivedProperties::read(&config.ucd.join(DERIVED_CORE_PROPERTIES), &catalogue.derived)
            .context("не удалось прочитать DerivedCoreProperties.txt")?,
    };

    let tables = compile(records(&unicode_data), &derived, &catalogue)?;

    stats::print(&stats::collect(&tables)?);

    let mut emitter = DirectoryEmitter::new(&config.output);
    output::write(&tables, &mut emitter)
        .with_context(|| format!("не удалось записать таблицы в {}", config.output.display()))?;

    log::info!(
        "записано таблиц: {} ({})",
        emitter.written().len(),
        config.output.display()
    );

    Ok(())
}
