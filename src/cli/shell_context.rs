use crate::{
    calculator::CalculatorState,
    config::{Config, ConfigManager},
    core::ledger_manager::LedgerManager,
    currency::CurrencyFormat,
    storage::{JsonFileStore, KeyValueStore},
    tasks::TaskList,
};

use super::core::CliError;
use super::output::{self, OutputPreferences};
use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Owns the single instance of every engine for the lifetime of the shell.
pub struct ShellContext {
    pub registry: CommandRegistry,
    pub ledger_manager: LedgerManager,
    pub calculator: CalculatorState,
    pub tasks: TaskList,
    pub config: Config,
    pub currency: CurrencyFormat,
    pub running: bool,
}

impl ShellContext {
    /// Builds a context from the on-disk configuration and data directory.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let data_dir = config.resolve_data_dir(config_manager.base_dir());
        let store = JsonFileStore::new(data_dir)?;
        Ok(Self::with_store(mode, config, Box::new(store)))
    }

    pub fn with_store(mode: CliMode, config: Config, store: Box<dyn KeyValueStore>) -> Self {
        let mut registry = CommandRegistry::new();
        super::commands::register_all(&mut registry);

        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled && mode == CliMode::Interactive,
        });

        Self {
            registry,
            ledger_manager: LedgerManager::open(store),
            calculator: CalculatorState::new(),
            tasks: TaskList::new(),
            currency: config.currency_format(),
            config,
            running: true,
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        format!("cash [{}]> ", self.calculator.display())
    }
}
