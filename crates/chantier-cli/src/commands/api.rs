use anyhow::Context;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ApiCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `chantier api <method>`.
pub async fn handle(action: &ApiCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response: Value = match action {
        ApiCommands::Get { path, params } => {
            let pairs = params
                .iter()
                .map(String::as_str)
                .map(parse_param)
                .collect::<anyhow::Result<Vec<_>>>()?;
            ctx.api.get(path, &pairs).await?
        }
        ApiCommands::Post { path, body } => {
            let body = parse_body(body.as_deref())?;
            ctx.api.post(path, body.as_ref()).await?
        }
        ApiCommands::Put { path, body } => {
            let body = parse_body(body.as_deref())?;
            ctx.api.put(path, body.as_ref()).await?
        }
        ApiCommands::Delete { path } => ctx.api.delete(path).await?,
    };

    output(&response, flags.format)
}

fn parse_param(raw: &str) -> anyhow::Result<(&str, &str)> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .with_context(|| format!("invalid --param '{raw}': expected key=value"))
}

fn parse_body(raw: Option<&str>) -> anyhow::Result<Option<Value>> {
    raw.map(|text| serde_json::from_str(text).context("--body is not valid JSON"))
        .transpose()
}
