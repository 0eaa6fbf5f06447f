//! Name-to-command lookup composed from built-in and user commands.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::command::Command;

/// Registry of available commands.
///
/// Composed once from two sets. A name present in both resolves to the
/// built-in. Lookup is case-sensitive and has no side effects.
pub struct Registry {
    commands: HashMap<String, Arc<dyn Command>>,
    builtins: HashSet<String>,
}

impl Registry {
    /// Compose a registry. Built-ins shadow user commands of the same name.
    pub fn new(builtins: Vec<Arc<dyn Command>>, commands: Vec<Arc<dyn Command>>) -> Self {
        let mut map: HashMap<String, Arc<dyn Command>> = HashMap::new();
        for cmd in commands {
            map.insert(cmd.name().to_string(), cmd);
        }
        let mut names = HashSet::new();
        for cmd in builtins {
            let name = cmd.name().to_string();
            if map.contains_key(&name) && !names.contains(&name) {
                log::debug!("Built-in '{name}' shadows a user command");
            }
            names.insert(name.clone());
            map.insert(name, cmd);
        }
        Self {
            commands: map,
            builtins: names,
        }
    }

    /// Look up a command by name.
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(name).map(Arc::clone)
    }

    /// Whether `name` resolves to a built-in.
    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }

    /// Return a sorted list of (name, description) pairs.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect();
        cmds.sort_by_key(|(name, _)| *name);
        cmds
    }

    /// Return sorted completions for a partial command name.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .commands
            .keys()
            .filter(|name| name.starts_with(partial))
            .cloned()
            .collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("commands", &self.list_commands())
            .field("builtins", &self.builtins)
            .finish()
    }
}
