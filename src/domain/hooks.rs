//! Lifecycle hooks
//!
//! Hooks are user commands bound to named pipeline stages. A stage with no
//! binding is a no-op.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Pipeline stage a hook can bind to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookName {
    BeforeZipBundle,
    AfterZipBundle,
    BeforeDeployFiles,
    AfterDeployFiles,
    BeforeProjectCompile,
    AfterProjectCompile,
}

impl HookName {
    pub const ALL: [HookName; 6] = [
        HookName::BeforeZipBundle,
        HookName::AfterZipBundle,
        HookName::BeforeDeployFiles,
        HookName::AfterDeployFiles,
        HookName::BeforeProjectCompile,
        HookName::AfterProjectCompile,
    ];

    /// Key used in the hooks file
    pub fn as_str(&self) -> &'static str {
        match self {
            HookName::BeforeZipBundle => "beforeZipBundle",
            HookName::AfterZipBundle => "afterZipBundle",
            HookName::BeforeDeployFiles => "beforeDeployFiles",
            HookName::AfterDeployFiles => "afterDeployFiles",
            HookName::BeforeProjectCompile => "beforeProjectCompile",
            HookName::AfterProjectCompile => "afterProjectCompile",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("unknown hook '{s}'"))
    }
}

/// Command a hook runs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HookCommand {
    /// Run through the platform shell
    Shell(String),
    /// Program followed by arguments, no shell
    Argv(Vec<String>),
}

impl HookCommand {
    /// Program and arguments to spawn
    pub fn program_and_args(&self) -> Option<(String, Vec<String>)> {
        match self {
            HookCommand::Shell(line) => {
                if line.trim().is_empty() {
                    return None;
                }
                if cfg!(windows) {
                    Some(("cmd".to_string(), vec!["/C".to_string(), line.clone()]))
                } else {
                    Some(("sh".to_string(), vec!["-c".to_string(), line.clone()]))
                }
            }
            HookCommand::Argv(argv) => {
                let (program, args) = argv.split_first()?;
                Some((program.clone(), args.to_vec()))
            }
        }
    }
}

/// Hook bindings for one project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookSet {
    bindings: HashMap<HookName, HookCommand>,
}

impl HookSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: HookName, command: HookCommand) -> Self {
        self.bindings.insert(name, command);
        self
    }

    pub fn get(&self, name: HookName) -> Option<&HookCommand> {
        self.bindings.get(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<(HookName, HookCommand)> for HookSet {
    fn from_iter<I: IntoIterator<Item = (HookName, HookCommand)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_names_round_trip_through_strings() {
        for name in HookName::ALL {
            assert_eq!(name.as_str().parse::<HookName>().unwrap(), name);
        }
        assert!("beforeDeploy".parse::<HookName>().is_err());
    }

    #[test]
    fn argv_command_splits_program() {
        let cmd = HookCommand::Argv(vec!["./lint.sh".into(), "--fast".into()]);
        assert_eq!(
            cmd.program_and_args(),
            Some(("./lint.sh".to_string(), vec!["--fast".to_string()]))
        );
    }

    #[test]
    fn empty_commands_have_nothing_to_run() {
        assert_eq!(HookCommand::Argv(vec![]).program_and_args(), None);
        assert_eq!(HookCommand::Shell("  ".into()).program_and_args(), None);
    }

    #[cfg(unix)]
    #[test]
    fn shell_command_uses_sh() {
        let cmd = HookCommand::Shell("npm run lint".into());
        let (program, args) = cmd.program_and_args().unwrap();
        assert_eq!(program, "sh");
        assert_eq!(args, vec!["-c", "npm run lint"]);
    }

    #[test]
    fn lookup_of_unbound_hook_is_none() {
        let hooks = HookSet::new().with(HookName::AfterDeployFiles, HookCommand::Shell("true".into()));
        assert!(hooks.get(HookName::BeforeDeployFiles).is_none());
        assert!(hooks.get(HookName::AfterDeployFiles).is_some());
        assert_eq!(hooks.len(), 1);
    }
}
