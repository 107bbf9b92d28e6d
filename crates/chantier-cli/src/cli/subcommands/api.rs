use clap::Subcommand;

/// Authenticated requests against the configured base URL.
#[derive(Clone, Debug, Subcommand)]
pub enum ApiCommands {
    /// GET a path.
    Get {
        path: String,
        /// Query parameter as key=value (repeatable).
        #[arg(long = "param", short = 'P')]
        params: Vec<String>,
    },
    /// POST a JSON body.
    Post {
        path: String,
        /// JSON request body.
        #[arg(long)]
        body: Option<String>,
    },
    /// PUT a JSON body.
    Put {
        path: String,
        /// JSON request body.
        #[arg(long)]
        body: Option<String>,
    },
    /// DELETE a path.
    Delete { path: String },
}
