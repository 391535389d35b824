//! netaddr command-line tool.
//!
//! Parses network literals into their canonical form, lists the hosts of a
//! route and runs longest-prefix matches against a set of routes.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use netaddr_types::{
    Address, EthernetAddress, Family, Host, Hostname, IpAddress, Ipv4Address, Ipv4Endpoint,
    Ipv4Route, Ipv6Address, Ipv6Endpoint, Ipv6Route, ParseFailure, PrefixLength, Route,
    RouteTable, V4, V6,
};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod logging;

use config::{NetaddrConfig, OutputFormat};
use logging::RedbLogFormatter;

/// Network literal parser and CIDR calculator
#[derive(Parser, Debug)]
#[command(name = "netaddr", version, about = "Parse network literals and do CIDR arithmetic")]
struct Args {
    /// Path to the shared YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse literals and print their canonical form
    Parse {
        /// Literal kind to expect
        #[arg(long, value_enum, default_value_t = Kind::Host)]
        kind: Kind,

        /// Literals to parse
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// List the host addresses of a route
    Hosts {
        /// Route such as 10.0.0.0/29
        route: String,

        /// Print at most this many addresses
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Find the most specific route containing an address
    Lookup {
        /// Address to look up
        address: String,

        /// Candidate route (repeatable)
        #[arg(long = "route", required = true)]
        routes: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Kind {
    Ipv4,
    Ipv6,
    Ethernet,
    Ip,
    Hostname,
    Host,
    Endpoint,
    Route,
    Prefix4,
    Prefix6,
}

#[derive(Debug, Serialize)]
struct ParseReport {
    input: String,
    kind: Kind,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct HostsReport {
    route: String,
    network: String,
    broadcast: String,
    hosts: Vec<String>,
    truncated: bool,
}

#[derive(Debug, Serialize)]
struct LookupReport {
    address: String,
    route: Option<String>,
    matches: Vec<String>,
    table: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args
        .log_level
        .clone()
        .or_else(|| std::env::var("NETADDR_LOG_LEVEL").ok())
        .unwrap_or_else(|| "warn".to_string());

    let env_filter = EnvFilter::new("warn")
        .add_directive(format!("netaddr={}", log_level).parse()?)
        .add_directive(format!("netaddr_literal={}", log_level).parse()?)
        .add_directive(format!("netaddr_types={}", log_level).parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .event_format(RedbLogFormatter::new("netaddr"))
        .init();

    let mut config = match &args.config {
        Some(path) => NetaddrConfig::load_from_file(path)?,
        None => NetaddrConfig::from_environment(),
    };
    if args.json {
        config.output = OutputFormat::Json;
    }
    debug!("Effective configuration: {:?}", config);

    match args.command {
        Command::Parse { kind, inputs } => run_parse(&config, kind, &inputs),
        Command::Hosts { route, limit } => {
            let limit = limit.unwrap_or(config.max_hosts);
            let report = hosts_report(&route, limit)?;
            print_hosts(&config, &report)
        }
        Command::Lookup { address, routes } => {
            let report = lookup_report(&address, &routes)?;
            print_lookup(&config, &report)
        }
    }
}

fn run_parse(config: &NetaddrConfig, kind: Kind, inputs: &[String]) -> Result<()> {
    let reports: Vec<ParseReport> = inputs
        .iter()
        .map(|input| {
            let (canonical, error) = match canonical(kind, input) {
                Ok(text) => (Some(text), None),
                Err(e) => {
                    warn!("Rejected {:?}: {}", input, e);
                    (None, Some(e.to_string()))
                }
            };
            ParseReport {
                input: input.clone(),
                kind,
                canonical,
                error,
            }
        })
        .collect();

    match config.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            for report in &reports {
                match (&report.canonical, &report.error) {
                    (Some(text), _) => println!("{}", text),
                    (None, Some(error)) => eprintln!("{}: {}", report.input, error),
                    (None, None) => {}
                }
            }
        }
    }

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        bail!("{} of {} inputs failed to parse", failed, reports.len());
    }
    Ok(())
}

/// Canonical text of `input` read as `kind`
fn canonical(kind: Kind, input: &str) -> Result<String, ParseFailure> {
    match kind {
        Kind::Ipv4 => reformat::<Ipv4Address>(input),
        Kind::Ipv6 => reformat::<Ipv6Address>(input),
        Kind::Ethernet => reformat::<EthernetAddress>(input),
        Kind::Ip => reformat::<IpAddress>(input),
        Kind::Hostname => reformat::<Hostname>(input),
        Kind::Host => reformat::<Host>(input),
        Kind::Endpoint => either_family::<Ipv4Endpoint, Ipv6Endpoint>(input),
        Kind::Route => either_family::<Ipv4Route, Ipv6Route>(input),
        Kind::Prefix4 => reformat::<PrefixLength<V4>>(input),
        Kind::Prefix6 => reformat::<PrefixLength<V6>>(input),
    }
}

fn reformat<T>(input: &str) -> Result<String, ParseFailure>
where
    T: FromStr<Err = ParseFailure> + Display,
{
    input.parse::<T>().map(|value| value.to_string())
}

/// Try the IPv4 form, then the IPv6 form, reporting the failure that got further
fn either_family<A, B>(input: &str) -> Result<String, ParseFailure>
where
    A: FromStr<Err = ParseFailure> + Display,
    B: FromStr<Err = ParseFailure> + Display,
{
    reformat::<A>(input).or_else(|v4| reformat::<B>(input).map_err(|v6| v4.furthest(v6)))
}

fn hosts_report(text: &str, limit: usize) -> Result<HostsReport> {
    let v4_failure = match text.parse::<Ipv4Route>() {
        Ok(route) => return Ok(collect_hosts(route, limit)),
        Err(e) => e,
    };
    match text.parse::<Ipv6Route>() {
        Ok(route) => Ok(collect_hosts(route, limit)),
        Err(e) => Err(anyhow::Error::new(v4_failure.furthest(e)))
            .with_context(|| format!("Invalid route: {}", text)),
    }
}

fn collect_hosts<F: Family>(route: Route<F>, limit: usize) -> HostsReport {
    let mut hosts = route.hosts();
    let listed: Vec<String> = hosts.by_ref().take(limit).map(|h| h.to_string()).collect();
    let truncated = hosts.next().is_some();
    if truncated {
        info!(component = "cidr", "Host list for {} cut at {}", route, limit);
    }

    HostsReport {
        route: route.to_string(),
        network: route.address().to_string(),
        broadcast: route.broadcast().to_string(),
        hosts: listed,
        truncated,
    }
}

fn print_hosts(config: &NetaddrConfig, report: &HostsReport) -> Result<()> {
    match config.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            for host in &report.hosts {
                println!("{}", host);
            }
            if report.truncated {
                eprintln!("(more hosts in {} not shown)", report.route);
            }
        }
    }
    Ok(())
}

fn lookup_report(address: &str, routes: &[String]) -> Result<LookupReport> {
    let address: IpAddress = address
        .parse()
        .with_context(|| format!("Invalid address: {}", address))?;

    match address {
        IpAddress::V4(address) => lookup_in::<V4>(address, routes),
        IpAddress::V6(address) => lookup_in::<V6>(address, routes),
    }
}

fn lookup_in<F: Family>(address: Address<F>, routes: &[String]) -> Result<LookupReport> {
    let mut table = RouteTable::<F, ()>::new();
    for text in routes {
        let route: Route<F> = match text.parse() {
            Ok(route) => route,
            Err(e) => {
                warn!(component = "table", "Skipping route {:?}: {}", text, e);
                continue;
            }
        };
        table.insert(route, ());
    }
    if table.is_empty() {
        bail!("No usable routes for {}", address);
    }

    Ok(LookupReport {
        address: address.to_string(),
        route: table.lookup(&address).map(|(route, _)| route.to_string()),
        matches: table
            .matches(&address)
            .map(|(route, _)| route.to_string())
            .collect(),
        table: table.iter().map(|(route, _)| route.to_string()).collect(),
    })
}

fn print_lookup(config: &NetaddrConfig, report: &LookupReport) -> Result<()> {
    match config.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            if let Some(route) = &report.route {
                println!("{}", route);
            }
        }
    }
    if report.route.is_none() {
        bail!("No route to {}", report.address);
    }
    Ok(())
}
