use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "berth",
    version,
    about = "Artifact metadata extraction for OCI registries"
)]
pub struct Args {
    /// Increase logging verbosity (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a config media type into an artifact type label
    Classify {
        /// Media type, e.g. application/vnd.oci.image.config.v1+json
        media_type: String,
    },

    /// Extract artifact metadata from a manifest file
    Inspect {
        #[command(flatten)]
        target: Target,
    },

    /// List the addition names an artifact declares
    Additions {
        #[command(flatten)]
        target: Target,
    },

    /// Fetch a named addition payload
    Addition {
        #[command(flatten)]
        target: Target,

        /// Addition name, e.g. readme
        name: String,

        /// Write the content to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
pub struct Target {
    /// Path to the manifest JSON file
    pub manifest: PathBuf,

    /// Repository the artifact lives in, e.g. library/model
    #[arg(short, long)]
    pub repository: String,

    /// Distribution API root
    #[arg(short, long, default_value = "https://ghcr.io/v2")]
    pub api: String,

    /// Bearer token sent with registry requests
    #[arg(long)]
    pub token: Option<String>,

    /// Interpret the annotation (v1alpha) dialect instead of the embedded
    /// v1 schema
    #[arg(long)]
    pub annotations: bool,
}
