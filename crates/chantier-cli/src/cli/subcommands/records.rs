use clap::{Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RecordKind {
    Invoices,
    MaitreOuvrages,
}

#[derive(Clone, Debug, Subcommand)]
pub enum RecordCommands {
    /// List stored records, newest first.
    List { kind: RecordKind },
    /// Insert or replace a record from its JSON form.
    Add {
        kind: RecordKind,
        /// Record JSON, as produced by `records list`.
        #[arg(long)]
        json: String,
    },
    /// Remove a record by id.
    Remove { kind: RecordKind, id: String },
}
