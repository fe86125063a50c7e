//! Named helper table for template engines.
//!
//! A [`Registry`] maps template names (`toJson`, `default`, `regexMatch`, ...)
//! to helpers taking positional [`Value`] arguments. It is built once from a
//! [`FuncmapConfig`] and is immutable afterwards, so one instance can be
//! shared across threads by reference.

mod args;
mod builtins;

pub use args::Args;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::defaults::{DateConfig, FuncmapConfig, RegistryConfig};
use crate::error::{Error, Result};
use crate::utils::suggest;
use crate::value::Value;

type HelperFn = Box<dyn Fn(&Args<'_>) -> Result<Value> + Send + Sync>;

pub struct Helper {
    name: &'static str,
    hermetic: bool,
    func: HelperFn,
}

impl Helper {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True when the result depends only on the arguments.
    pub fn hermetic(&self) -> bool {
        self.hermetic
    }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.func)(&Args::new(self.name, args))
    }
}

impl fmt::Debug for Helper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Helper")
            .field("name", &self.name)
            .field("hermetic", &self.hermetic)
            .finish_non_exhaustive()
    }
}

/// Listing entry for a registered helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelperInfo {
    pub name: String,
    pub hermetic: bool,
}

#[derive(Debug, Default)]
pub struct Registry {
    helpers: BTreeMap<&'static str, Helper>,
}

impl Registry {
    /// Every helper, with dates rendered per the built-in defaults.
    pub fn builtin() -> Self {
        Self::from_config(&FuncmapConfig::default())
    }

    /// Only helpers whose output depends solely on their arguments.
    pub fn hermetic() -> Self {
        Self::new(&RegistryConfig::hermetic(), &DateConfig::default())
    }

    pub fn from_config(config: &FuncmapConfig) -> Self {
        Self::new(&config.registry, &config.dates)
    }

    pub fn new(registry: &RegistryConfig, dates: &DateConfig) -> Self {
        let mut all = Self::default();
        builtins::register(&mut all, dates);
        all.helpers.retain(|name, helper| {
            let allowed = helper.hermetic || !registry.hermetic_only;
            allowed && !registry.disabled.iter().any(|d| d.as_str() == *name)
        });
        all
    }

    pub(crate) fn add<F>(&mut self, name: &'static str, hermetic: bool, func: F)
    where
        F: Fn(&Args<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        self.helpers.insert(
            name,
            Helper {
                name,
                hermetic,
                func: Box::new(func),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&Helper> {
        self.helpers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.helpers.keys().copied().collect()
    }

    pub fn list(&self) -> Vec<HelperInfo> {
        self.helpers
            .values()
            .map(|h| HelperInfo {
                name: h.name.to_string(),
                hermetic: h.hermetic,
            })
            .collect()
    }

    /// Invoke the helper registered as `name`.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let helper = self.get(name).ok_or_else(|| {
            let err = Error::function_not_found(name);
            match suggest::did_you_mean(name, &self.names()) {
                Some(hint) => err.with_hint(hint),
                None => err,
            }
        })?;
        helper.call(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn unknown_name_is_not_found() {
        let registry = Registry::builtin();
        let err = registry.call("toJsn", &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::FunctionNotFound);
        assert!(err.hints.iter().any(|h| h.message == "Did you mean 'toJson'?"));
    }

    #[test]
    fn hermetic_registry_drops_clock_and_rng() {
        let registry = Registry::hermetic();
        for name in ["now", "date", "randAlpha", "uuidv4", "env", "expandenv", "shuffle", "ago"] {
            assert!(!registry.contains(name), "{}", name);
        }
        assert!(registry.contains("toDate"));
        assert!(registry.contains("dateModify"));
        assert!(registry.list().iter().all(|h| h.hermetic));
    }

    #[test]
    fn disabled_names_are_left_out() {
        let config = RegistryConfig {
            hermetic_only: false,
            disabled: vec!["env".to_string(), "fail".to_string()],
        };
        let registry = Registry::new(&config, &DateConfig::default());
        assert!(!registry.contains("env"));
        assert!(!registry.contains("fail"));
        assert!(registry.contains("expandenv"));
        assert!(registry.len() < Registry::builtin().len());
    }

    #[test]
    fn helper_metadata() {
        let registry = Registry::builtin();
        let helper = registry.get("uuidv4").unwrap();
        assert_eq!(helper.name(), "uuidv4");
        assert!(!helper.hermetic());
        assert!(registry.get("upper").unwrap().hermetic());
    }

    #[test]
    fn registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
