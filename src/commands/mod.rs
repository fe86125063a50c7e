use funcmap::defaults::{self, FuncmapConfig};
use funcmap::log_status;
use funcmap::{Registry, Value};

pub type CmdResult<T> = funcmap::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    pub(crate) hermetic: bool,
}

// ============================================================================
// Registry (shared by list and call)
// ============================================================================

/// Build the registry from the user's config, narrowed by global flags.
pub(crate) fn load_registry(global: &GlobalArgs) -> Registry {
    let registry = registry_for(defaults::load_config(), global);
    log_status!("registry", "{} helpers registered", registry.len());
    registry
}

fn registry_for(mut config: FuncmapConfig, global: &GlobalArgs) -> Registry {
    if global.hermetic {
        config.registry.hermetic_only = true;
    }
    Registry::from_config(&config)
}

// ============================================================================
// Argument Parsing (CLI layer)
// ============================================================================

/// Parse a command-line argument into a helper value.
/// Order: JSON literal → bool → number → string
pub(crate) fn parse_value(s: &str) -> Value {
    // Try JSON first (handles arrays, objects, quoted strings)
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(s) {
        return Value::from(v);
    }
    if s == "true" {
        return Value::from(true);
    }
    if s == "false" {
        return Value::from(false);
    }
    if let Ok(n) = s.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(n) = s.parse::<f64>() {
        return Value::from(n);
    }
    Value::from(s)
}

pub mod call;
pub mod config;
pub mod list;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (funcmap::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::List(args) => dispatch!(args, global, list),
        crate::Commands::Call(args) => dispatch!(args, global, call),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hermetic_flag_overrides_config() {
        let config = FuncmapConfig::default();
        let open = registry_for(config.clone(), &GlobalArgs { hermetic: false });
        assert!(open.contains("now"));

        let sealed = registry_for(config, &GlobalArgs { hermetic: true });
        assert!(!sealed.contains("now"));
        assert!(sealed.contains("upper"));
    }

    #[test]
    fn parse_value_prefers_json() {
        assert_eq!(parse_value("[1,2]"), Value::from(vec![1, 2]));
        assert_eq!(parse_value(r#""007""#), Value::from("007"));
        assert_eq!(parse_value("true"), Value::from(true));
        assert_eq!(parse_value("42"), Value::from(42i64));
    }

    #[test]
    fn parse_value_falls_back_to_text() {
        assert_eq!(parse_value("hello world"), Value::from("hello world"));
        assert_eq!(parse_value("1h30m"), Value::from("1h30m"));
        assert_eq!(parse_value("{oops"), Value::from("{oops"));
    }
}
