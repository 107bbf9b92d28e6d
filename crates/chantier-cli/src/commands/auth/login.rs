use chantier_api::LoginCredentials;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    name: String,
    email: String,
    role: String,
}

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let credentials = LoginCredentials {
        email: args.email.clone(),
        password: args.password.clone(),
    };
    let response = ctx.api.login(&credentials).await?;
    let user = response.user();

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: user.id_utilisateur.clone(),
            name: user.nom.clone(),
            email: user.email.clone(),
            role: user.role_de_utilisateur.clone(),
        },
        flags.format,
    )
}
