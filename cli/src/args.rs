use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "delfos", about = "Delfos API command-line client")]
pub struct Cli {
    /// Backend origin; defaults to `http://localhost:8000`.
    #[arg(long, env = "DELFOS_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Where the login session is kept between runs.
    #[arg(long, env = "DELFOS_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Per-request deadline in seconds; `0` disables it.
    #[arg(long, env = "DELFOS_REQUEST_TIMEOUT_SECS")]
    pub timeout_secs: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Login {
        /// Username or email.
        username: String,
        #[arg(long, env = "DELFOS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    Whoami,
    Collections(CollectionsCommand),
    #[command(name = "data-sources")]
    DataSources(DataSourcesCommand),
    Models(ModelsCommand),
    /// Ask a natural-language question against a collection.
    Query {
        #[arg(long)]
        collection: String,
        #[arg(long)]
        model: String,
        question: String,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args, Debug)]
pub struct CollectionsCommand {
    #[command(subcommand)]
    pub command: CollectionsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CollectionsSubcommand {
    List(ListArgs),
    Get {
        id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        id: String,
    },
    /// Trigger relationship discovery across the collection's sources.
    Discover {
        id: String,
    },
    #[command(name = "data-sources")]
    DataSources {
        id: String,
    },
    /// Associate an existing data source with the collection.
    Attach {
        id: String,
        data_source_id: String,
    },
    Detach {
        id: String,
        data_source_id: String,
    },
}

#[derive(Args, Debug)]
pub struct DataSourcesCommand {
    #[command(subcommand)]
    pub command: DataSourcesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DataSourcesSubcommand {
    List(ListArgs),
    Get {
        id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        /// `PostgreSQL` or `MongoDB`.
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        collection: String,
        #[arg(long)]
        uri: String,
        #[arg(long, env = "DELFOS_DATA_SOURCE_CREDENTIALS", hide_env_values = true)]
        credentials: Option<String>,
    },
    Delete {
        id: String,
    },
    Rescan {
        id: String,
    },
    #[command(name = "extract-schema")]
    ExtractSchema {
        id: String,
    },
    Schema {
        id: String,
    },
    Snapshots {
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct ModelsCommand {
    #[command(subcommand)]
    pub command: ModelsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ModelsSubcommand {
    List {
        /// `OpenRouter` or `Internal`.
        #[arg(long)]
        origin: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    Get {
        id: String,
    },
}
