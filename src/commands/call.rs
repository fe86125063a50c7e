use clap::Args;
use serde::Serialize;

use funcmap::validation::require_non_empty;
use funcmap::Value;

use super::{load_registry, parse_value, CmdResult, GlobalArgs};

#[derive(Args)]
pub struct CallArgs {
    /// Helper name (e.g., toJson, regexMatch, dateModify)
    pub name: String,

    /// Positional arguments, each parsed as JSON, bool, number, else text
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,}

#[derive(Debug, Serialize)]
pub struct CallOutput {
    command: String,
    function: String,
    args: Vec<Value>,
    result: Value,
}

pub fn run(args: CallArgs, global: &GlobalArgs) -> CmdResult<CallOutput> {
    let registry = load_registry(global);

    let name = require_non_empty(&args.name, "name", "Helper name must not be empty")?;
    let values: Vec<Value> = args.args.iter().map(|a| parse_value(a)).collect();
    let result = registry.call(name, &values)?;

    Ok((
        CallOutput {
            command: "call".to_string(),
            function: name.to_string(),
            args: values,
            result,
        },
        0,
    ))
}
