//! Layered configuration: command line, then environment (handled by clap),
//! then an optional TOML file, then built-in defaults.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;

use schemastruct_core::{redact_connection_string, GenerationConfig, NullRepresentation};
use schemastruct_introspect::options::DEFAULT_PORT;

use crate::{Cli, CliError};

/// Null-handling style as spelled on the command line and in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NullStyle {
    /// Plain Go types for nullable columns.
    Raw,
    /// `database/sql` Null* wrappers.
    Sql,
    /// `gopkg.in/guregu/null.v3` wrappers.
    Guregu,
}

impl From<NullStyle> for NullRepresentation {
    fn from(style: NullStyle) -> Self {
        match style {
            NullStyle::Raw => NullRepresentation::Raw,
            NullStyle::Sql => NullRepresentation::Standard,
            NullStyle::Guregu => NullRepresentation::ThirdParty,
        }
    }
}

/// Contents of a `--config` TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub connection: FileConnection,
    pub generation: FileGeneration,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConnection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub database: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileGeneration {
    pub package: Option<String>,
    #[serde(rename = "struct")]
    pub struct_name: Option<String>,
    pub tag: Option<String>,
    pub json: Option<bool>,
    pub gorm: Option<bool>,
    pub nulls: Option<NullStyle>,
    pub target: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(content)?)
    }
}

/// How to reach the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connection {
    Url(String),
    Params {
        host: String,
        port: u16,
        user: String,
        /// `Some("")` asks for the password interactively.
        password: Option<String>,
    },
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub connection: Connection,
    /// Schema to introspect; also the default package name.
    pub database: String,
    /// Single table to generate; `None` generates the whole schema.
    pub table: Option<String>,
    /// Template config; `table_name` is filled per table.
    pub generation: GenerationConfig,
    pub target: Option<PathBuf>,
}

pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Settings, CliError> {
    let FileConfig {
        connection: file_conn,
        generation: file_gen,
    } = file;

    let url_database = cli
        .url
        .as_deref()
        .and_then(|url| redact_connection_string(url).database);
    let database = cli
        .database
        .clone()
        .or(url_database)
        .or(file_conn.database)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| CliError::InvalidConfig("database can not be empty, set --database".to_string()))?;

    let connection = match &cli.url {
        Some(url) => Connection::Url(url.clone()),
        None => {
            let user = cli
                .user
                .clone()
                .or(file_conn.user)
                .filter(|user| !user.is_empty())
                .ok_or_else(|| {
                    CliError::InvalidConfig("username is required, add it with --user".to_string())
                })?;
            Connection::Params {
                host: cli
                    .host
                    .clone()
                    .or(file_conn.host)
                    .unwrap_or_else(|| "localhost".to_string()),
                port: cli.port.or(file_conn.port).unwrap_or(DEFAULT_PORT),
                user,
                password: cli.password.clone(),
            }
        }
    };

    let emit_json_tag = if cli.no_json {
        false
    } else if cli.json {
        true
    } else {
        file_gen.json.unwrap_or(true)
    };

    let generation = GenerationConfig {
        schema_name: database.clone(),
        table_name: cli.table.clone().unwrap_or_default(),
        struct_name: cli
            .struct_name
            .clone()
            .or(file_gen.struct_name)
            .unwrap_or_default(),
        package_name: cli.package.clone().or(file_gen.package).unwrap_or_default(),
        emit_json_tag,
        emit_orm_tag: cli.gorm || file_gen.gorm.unwrap_or(false),
        custom_tag_key: cli.tag.clone().or(file_gen.tag).filter(|tag| !tag.is_empty()),
        null_representation: null_representation(cli, file_gen.nulls),
    };

    Ok(Settings {
        connection,
        database,
        table: cli.table.clone().filter(|table| !table.is_empty()),
        generation,
        target: cli.target.clone().or(file_gen.target),
    })
}

fn null_representation(cli: &Cli, from_file: Option<NullStyle>) -> NullRepresentation {
    if let Some(style) = cli.nulls {
        return style.into();
    }
    // The flag pair mirrors the historical interface: --guregu only picks the
    // wrapper family once --sql-null turned wrappers on.
    match (cli.sql_null, cli.guregu) {
        (true, true) => NullRepresentation::ThirdParty,
        (true, false) => NullRepresentation::Standard,
        (false, _) => from_file.map(Into::into).unwrap_or_default(),
    }
}
