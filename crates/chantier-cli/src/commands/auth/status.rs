use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    base_url: String,
    timeout_secs: Option<u64>,
    store: String,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.api.current_session()?;
    let base_url = ctx.api.base_url().to_string();
    let timeout_secs = ctx.config.api.timeout_secs;
    let store = ctx.store_path.display().to_string();

    let status = match session {
        Some(profile) => AuthStatusResponse {
            authenticated: true,
            user_id: profile.user_id,
            name: profile.name,
            email: profile.email,
            role: profile.role.map(String::from),
            base_url,
            timeout_secs,
            store,
        },
        None => AuthStatusResponse {
            authenticated: false,
            user_id: None,
            name: None,
            email: None,
            role: None,
            base_url,
            timeout_secs,
            store,
        },
    };

    output(&status, flags.format)
}
