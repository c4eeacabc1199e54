//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ServerConfig;
use crate::scenario::DEFAULT_PRESET;

#[derive(Debug, Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Service configuration file (TOML). Defaults apply when omitted.
    #[clap(long, env = "PRODUCTION_PLAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute a production plan from a request file or a built-in preset.
    #[clap(name = "plan")]
    Plan(PlanArgs),

    /// Serve the production plan HTTP API.
    #[clap(name = "serve")]
    Serve(ServeArgs),
}

#[derive(Debug, Parser)]
pub struct PlanArgs {
    /// Request JSON file in the API wire format.
    #[clap(long, conflicts_with = "preset")]
    pub request: Option<PathBuf>,

    /// Built-in request preset (payload1, payload2, payload3).
    #[clap(long)]
    pub preset: Option<String>,

    /// Print the plan as the API's JSON array.
    #[clap(long)]
    pub json: bool,

    /// Also write the plan to a CSV file.
    #[clap(long = "plan-out")]
    pub plan_out: Option<PathBuf>,
}

/// Where a `plan` run takes its request from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestSource {
    File(PathBuf),
    Preset(String),
}

impl PlanArgs {
    /// Request file if given, else the named preset, else the default preset.
    pub fn source(&self) -> RequestSource {
        match (&self.request, &self.preset) {
            (Some(path), _) => RequestSource::File(path.clone()),
            (None, Some(name)) => RequestSource::Preset(name.clone()),
            (None, None) => RequestSource::Preset(DEFAULT_PRESET.to_string()),
        }
    }
}

#[derive(Debug, Parser)]
pub struct ServeArgs {
    /// Host to bind, overriding the config file.
    #[clap(long, env = "PRODUCTION_PLAN_HOST")]
    pub host: Option<String>,

    /// Port to bind, overriding the config file.
    #[clap(long, env = "PRODUCTION_PLAN_PORT")]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Applies command-line overrides on top of file settings.
    pub fn apply(&self, server: &mut ServerConfig) {
        if let Some(host) = &self.host {
            server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            server.port = port;
        }
    }
}
