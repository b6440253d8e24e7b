mod answers;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use futures::StreamExt;
use nexus_lookup::{CachedPlaceResolver, MemoryPlaceCache, StaticPlaceResolver};
use nexus_report::{BriefingGenerator, ReportOption, ReportRequest, Tier, TierFamily};
use nexus_wizard::{Submission, WizardConfig, WizardSession};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn cli() -> Command {
    Command::new("nexus-wizard")
        .version(nexus_wizard::VERSION)
        .about("Nexus report wizard driver")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Replay an answers file through the wizard and stream the brief")
                .arg(
                    Arg::new("answers")
                        .long("answers")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML file with the form answers"),
                )
                .arg(
                    Arg::new("places")
                        .long("places")
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON object mapping country to city list"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("Wizard configuration file (TOML)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the assembled request as JSON"),
                ),
        )
        .subcommand(
            Command::new("catalog")
                .about("List report tiers and add-on options")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("run", args)) => run(args).await,
        Some(("catalog", args)) => catalog(args.get_flag("json")),
        _ => Ok(()),
    }
}

fn load_places(path: &Path) -> Result<StaticPlaceResolver> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading places file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing places file {}", path.display()))
}

async fn run(args: &ArgMatches) -> Result<()> {
    let answers_path = args
        .get_one::<PathBuf>("answers")
        .context("--answers is required")?;
    let answers = answers::Answers::load(answers_path)?;

    let config = match args.get_one::<PathBuf>("config") {
        Some(path) => WizardConfig::load(path)?,
        None => WizardConfig::default(),
    };

    // Without a places table every lookup is empty and cities are typed
    let places = match args.get_one::<PathBuf>("places") {
        Some(path) => load_places(path)?,
        None => StaticPlaceResolver::new(),
    };
    tracing::debug!("Loaded place table for {} countries", places.len());

    let resolver = CachedPlaceResolver::new(places, MemoryPlaceCache::new(config.city_cache_capacity))
        .with_ttl(config.city_cache_ttl());
    let mut session = WizardSession::new(&config, Arc::new(resolver), Arc::new(BriefingGenerator));

    answers::replay(&answers, &mut session).await?;
    let Submission { request, mut stream } = session.submit()?;

    let mut out = std::io::stdout().lock();
    if args.get_flag("json") {
        writeln!(out, "{}", serde_json::to_string_pretty(&request)?)?;
    } else {
        write_summary(&mut out, &request)?;
    }
    writeln!(out)?;

    while let Some(chunk) = stream.next().await {
        write!(out, "{}", chunk?)?;
    }
    out.flush()?;
    Ok(())
}

fn write_summary(out: &mut impl Write, request: &ReportRequest) -> std::io::Result<()> {
    writeln!(out, "Report Request")?;
    writeln!(out, "==============")?;
    writeln!(out, "Tier:     {}", request.tier())?;
    writeln!(out, "Region:   {}", request.region())?;
    writeln!(out, "Industry: {}", request.industry())?;
    if !request.selected_options().is_empty() {
        let ids: Vec<&str> = request.selected_options().iter().map(|o| o.id()).collect();
        writeln!(out, "Options:  {}", ids.join(", "))?;
    }
    Ok(())
}

fn family_label(family: TierFamily) -> &'static str {
    match family {
        TierFamily::MarketAnalysis => "Market analysis",
        TierFamily::PartnerFinding => "Partner finding",
    }
}

fn catalog(json: bool) -> Result<()> {
    if json {
        let tiers: Vec<_> = Tier::ALL
            .iter()
            .map(|t| serde_json::json!({ "id": t.id(), "name": t.name(), "family": t.family() }))
            .collect();
        let options: Vec<_> = ReportOption::ALL
            .iter()
            .map(|o| serde_json::json!({ "id": o.id(), "title": o.title() }))
            .collect();
        let value = serde_json::json!({ "tiers": tiers, "options": options });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Report Tiers");
    for family in [TierFamily::MarketAnalysis, TierFamily::PartnerFinding] {
        println!("  {}:", family_label(family));
        for tier in Tier::ALL.iter().filter(|t| t.family() == family) {
            println!("    {:<26} {}", tier.id(), tier.name());
        }
    }
    println!();
    println!("Add-on Options");
    for option in ReportOption::ALL {
        println!("  {:<16} {}", option.id(), option.title());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn run_requires_answers() {
        assert!(cli().try_get_matches_from(["nexus-wizard", "run"]).is_err());
        let matches = cli()
            .try_get_matches_from(["nexus-wizard", "run", "--answers", "a.toml", "--json"])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "run");
        assert!(args.get_flag("json"));
    }

    #[test]
    fn summary_lists_region_and_options() {
        let request = ReportRequest::try_from(nexus_report::ReportDraft {
            region: "Cebu, Philippines".into(),
            tier: Some(Tier::EconomicSnapshot),
            selected_options: vec![ReportOption::Esg],
            ..Default::default()
        })
        .unwrap();

        let mut out = Vec::new();
        write_summary(&mut out, &request).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Region:   Cebu, Philippines"));
        assert!(text.contains("Options:  esg"));
    }
}
