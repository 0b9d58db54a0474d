//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::models::RegistrationRole;

/// Top-level command line
#[derive(Parser)]
#[command(name = "gradebook-auth")]
#[command(about = "Log in to the gradebook backend and manage the stored credential token", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (replaces .gradebook/config.yaml and local.yaml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .gradebook/config.yaml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Log in and store the credential token
    Login(LoginArgs),

    /// Register a student or teacher account
    Register(RegisterArgs),

    /// Print the stored credential token
    Token {
        /// Print the full Authorization header value instead
        #[arg(long)]
        header: bool,
    },
}

/// Arguments for `login`
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account username
    #[arg(short, long)]
    pub username: String,

    /// Account password
    #[arg(short, long, env = "GRADEBOOK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Read the password from the first line of stdin (takes precedence over --password)
    #[arg(long)]
    pub password_stdin: bool,
}

/// Arguments for `register`
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Account type to register
    #[arg(value_enum)]
    pub role: RoleArg,

    /// Account username
    #[arg(short, long)]
    pub username: String,

    /// Account password
    #[arg(short, long, env = "GRADEBOOK_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Repeat of the password; must match
    #[arg(long)]
    pub confirm_password: String,

    /// Student number or teacher number, depending on the role
    #[arg(short, long)]
    pub number: String,

    /// Display name
    #[arg(long)]
    pub real_name: Option<String>,

    /// Contact phone (teachers only)
    #[arg(long)]
    pub phone: Option<String>,
}

/// Account type on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RoleArg {
    /// Student account
    Student,
    /// Teacher account
    Teacher,
}

impl From<RoleArg> for RegistrationRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Student => Self::Student,
            RoleArg::Teacher => Self::Teacher,
        }
    }
}
