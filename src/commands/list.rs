use clap::Args;
use serde::Serialize;

use funcmap::registry::HelperInfo;

use super::{load_registry, CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ListArgs {
    /// Only list helpers whose name contains this text
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListOutput {
    command: String,
    count: usize,
    functions: Vec<HelperInfo>,
}

pub fn run(args: ListArgs, global: &GlobalArgs) -> CmdResult<ListOutput> {
    let registry = load_registry(global);

    let functions: Vec<HelperInfo> = registry
        .list()
        .into_iter()
        .filter(|info| {
            args.filter
                .as_deref()
                .map_or(true, |needle| info.name.contains(needle))
        })
        .collect();

    Ok((
        ListOutput {
            command: "list".to_string(),
            count: functions.len(),
            functions,
        },
        0,
    ))
}
