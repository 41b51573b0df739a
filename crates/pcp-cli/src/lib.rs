//! Estimator CLI
//!
//! Loads the rules configuration, builds the registry once and evaluates
//! production records read from JSON.

pub mod input;
pub mod logging;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pcp_rules::parameterized::BOBST;
use pcp_rules::{
    Estimate, LogFormat, Machine, MachineParameters, ParameterizedRules, RuleEntry, RulesConfig,
    RulesRegistry,
};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Production estimates per machine model
#[derive(Parser, Debug)]
#[command(name = "pcp-estimate")]
#[command(about = "Estimate setup time, speed and average production from sheet rows")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Rules configuration file (defaults to $PCP_CONFIG_PATH, then pcp.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging for the rules crates
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format, overriding the configuration
    #[arg(long, global = true, value_enum)]
    pub format: Option<LogFormatArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered machine types
    List,

    /// Estimate every record of a JSON file for one machine type
    Estimate {
        /// Machine type key, e.g. `sbl`
        #[arg(short, long)]
        machine_type: String,

        /// Stored speed, for parameterized machine types
        #[arg(long)]
        speed: Option<f64>,

        /// Stored setup time in minutes, for parameterized machine types
        #[arg(long)]
        setup_time: Option<f64>,

        /// JSON array or newline-delimited objects; `-` reads stdin
        input: PathBuf,
    },

    /// Bobst production and total time from stored parameters
    Bobst(BobstArgs),
}

#[derive(Args, Debug)]
pub struct BobstArgs {
    /// Speed in pieces per hour
    #[arg(long)]
    pub speed: f64,

    /// Setup time in minutes
    #[arg(long)]
    pub setup_time: f64,

    /// Pieces produced over this many operating hours
    #[arg(long)]
    pub hours: Option<f64>,

    /// Hours needed to produce this quantity, setup included
    #[arg(long)]
    pub quantity: Option<f64>,
}

#[derive(Serialize)]
struct EstimateRow<'a> {
    row: usize,
    #[serde(flatten)]
    estimate: &'a Estimate,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        let mut config = RulesConfig::load(self.config.as_deref())?;
        self.apply_overrides(&mut config);
        logging::init_logging(&config.logging, self.verbose)?;
        let registry = RulesRegistry::from_config(&config)?;
        info!(machine_types = registry.len(), "Rules registry ready");

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run(&registry, &mut out)
    }

    /// Apply command-line settings on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut RulesConfig) {
        if let Some(format) = self.format {
            config.logging.format = format.into();
        }
    }

    /// Run the command against an already-built registry
    pub fn run(&self, registry: &RulesRegistry, out: &mut dyn Write) -> anyhow::Result<()> {
        match &self.command {
            Command::List => list_machine_types(registry, out),
            Command::Estimate { machine_type, speed, setup_time, input } => {
                let mut machine = Machine::new(machine_type.clone(), machine_type.clone());
                machine.speed = *speed;
                machine.setup_time = *setup_time;
                estimate_records(registry, &machine, input, out)
            }
            Command::Bobst(args) => bobst(args, out),
        }
    }
}

fn list_machine_types(registry: &RulesRegistry, out: &mut dyn Write) -> anyhow::Result<()> {
    for machine_type in registry.machine_types() {
        let kind = match registry.lookup(machine_type)? {
            RuleEntry::Fixed(_) => "table",
            RuleEntry::Parameterized(_) => "parameterized",
        };
        writeln!(out, "{machine_type}\t{kind}")?;
    }
    Ok(())
}

fn estimate_records(
    registry: &RulesRegistry,
    machine: &Machine,
    input: &Path,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let rules = registry
        .rules_for_machine(machine)
        .with_context(|| format!("Cannot evaluate machine type '{}'", machine.machine_type))?;
    let records = input::read_records_from(input)?;
    debug!(records = records.len(), machine_type = %machine.machine_type, "Evaluating records");

    for (row, record) in records.iter().enumerate() {
        let estimate = rules.estimate(record);
        serde_json::to_writer(&mut *out, &EstimateRow { row, estimate: &estimate })?;
        writeln!(out)?;
    }
    Ok(())
}

fn bobst(args: &BobstArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    if args.hours.is_none() && args.quantity.is_none() {
        anyhow::bail!("Pass --hours, --quantity or both");
    }
    let params = MachineParameters::new(args.speed, args.setup_time)?;
    let rules = ParameterizedRules::bobst(params);

    if let Some(hours) = args.hours {
        writeln!(out, "{BOBST}: {} pieces in {hours} h", rules.production(hours))?;
    }
    if let Some(quantity) = args.quantity {
        writeln!(out, "{BOBST}: {} h for {quantity} pieces", rules.total_time(quantity))?;
    }
    Ok(())
}
