//! Registry from machine-type key to its rule set.
//!
//! Built once at startup and shared by reference; lookups never mutate it, so
//! concurrent evaluation needs no locking. Unknown keys are an error, never a
//! default rule set.

use pcp_types::{Machine, Record};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::config::RulesConfig;
use crate::error::{RulesError, RulesResult};
use crate::machines::{
    CvManualRules, Estimate, KomoriRules, LaminadoraRules, MachineRules, SakuraiRules,
    SamkoonRules, SblRules, SpeedRules,
};
use crate::parameterized::{BOBST, MachineParameters, ParameterizedConstructor, ParameterizedRules};

/// What a machine-type key resolves to.
#[derive(Debug, Clone)]
pub enum RuleEntry {
    /// Rules driven entirely by the record
    Fixed(Arc<dyn MachineRules>),
    /// Rules built from a machine's stored speed and setup time
    Parameterized(ParameterizedConstructor),
}

impl RuleEntry {
    /// Rules for a machine instance, constructing parameterized ones from `machine`.
    pub fn instantiate(&self, machine: &Machine) -> RulesResult<Arc<dyn MachineRules>> {
        match self {
            RuleEntry::Fixed(rules) => Ok(Arc::clone(rules)),
            RuleEntry::Parameterized(construct) => {
                let params = MachineParameters::from_machine(machine)?;
                Ok(Arc::new(construct(params)))
            }
        }
    }
}

/// Machine-type keys mapped to their rules.
#[derive(Debug, Clone)]
pub struct RulesRegistry {
    entries: HashMap<String, RuleEntry>,
}

impl Default for RulesRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RulesRegistry {
    /// A registry without any machine types.
    pub fn empty() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Every built-in machine model.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.insert_fixed(Arc::new(CvManualRules));
        registry.insert_fixed(Arc::new(KomoriRules));
        registry.insert_fixed(Arc::new(LaminadoraRules));
        registry.insert_fixed(Arc::new(SakuraiRules));
        registry.insert_fixed(Arc::new(SamkoonRules));
        registry.insert_fixed(Arc::new(SblRules));
        registry.insert_fixed(Arc::new(SpeedRules));
        registry.entries.insert(BOBST.to_string(), RuleEntry::Parameterized(ParameterizedRules::bobst));
        debug!(machine_types = registry.entries.len(), "Built-in rules registered");
        registry
    }

    /// Built-in models plus those declared in `config`.
    pub fn from_config(config: &RulesConfig) -> RulesResult<Self> {
        let mut registry = Self::builtin();
        for machine in &config.machines {
            registry.register(machine.to_rules())?;
        }
        debug!(
            machine_types = registry.entries.len(),
            configured = config.machines.len(),
            "Rules registry built"
        );
        Ok(registry)
    }

    /// Add a rule set under its own machine type. Keys are never replaced.
    pub fn register(&mut self, rules: impl MachineRules + 'static) -> RulesResult<()> {
        let key = rules.machine_type().to_string();
        if self.entries.contains_key(&key) {
            return Err(RulesError::configuration(
                format!("machines.{key}"),
                "machine type is already registered",
            ));
        }
        self.insert_fixed(Arc::new(rules));
        Ok(())
    }

    fn insert_fixed(&mut self, rules: Arc<dyn MachineRules>) {
        self.entries.insert(rules.machine_type().to_string(), RuleEntry::Fixed(rules));
    }

    /// Exact-match lookup of a machine type.
    pub fn lookup(&self, machine_type: &str) -> RulesResult<&RuleEntry> {
        self.entries.get(machine_type).ok_or_else(|| {
            debug!(machine_type, "Lookup of unregistered machine type");
            RulesError::unknown_machine_type(machine_type)
        })
    }

    /// Rules for a stored machine, keyed by its type.
    pub fn rules_for_machine(&self, machine: &Machine) -> RulesResult<Arc<dyn MachineRules>> {
        self.lookup(&machine.machine_type)?.instantiate(machine)
    }

    /// Estimate a record for a machine type whose rules need no stored parameters.
    #[instrument(level = "trace", skip(self, record))]
    pub fn estimate(&self, machine_type: &str, record: &Record) -> RulesResult<Estimate> {
        match self.lookup(machine_type)? {
            RuleEntry::Fixed(rules) => Ok(rules.estimate(record)),
            RuleEntry::Parameterized(_) => {
                Err(RulesError::ParametersRequired { machine_type: machine_type.to_string() })
            }
        }
    }

    /// Estimate a record for a stored machine.
    #[instrument(level = "trace", skip_all, fields(machine = %machine.name))]
    pub fn estimate_machine(&self, machine: &Machine, record: &Record) -> RulesResult<Estimate> {
        Ok(self.rules_for_machine(machine)?.estimate(record))
    }

    /// True when `machine_type` is registered
    pub fn contains(&self, machine_type: &str) -> bool {
        self.entries.contains_key(machine_type)
    }

    /// Registered machine types, sorted.
    pub fn machine_types(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of registered machine types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no machine type is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
