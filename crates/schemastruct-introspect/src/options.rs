/// Default MySQL server port.
pub const DEFAULT_PORT: u16 = 3306;

/// Connection parameters for a MySQL/MariaDB server.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub host: String,
    pub port: u16,
    pub user: String,
    /// `None` connects without a password.
    pub password: Option<String>,
    pub database: String,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            user: String::new(),
            password: None,
            database: String::new(),
        }
    }
}

/// Options that control how introspection behaves.
#[derive(Debug, Clone)]
pub struct IntrospectOptions {
    /// List views alongside base tables.
    pub include_views: bool,
    pub max_connections: u32,
}

impl Default for IntrospectOptions {
    fn default() -> Self {
        Self {
            include_views: true,
            max_connections: 2,
        }
    }
}
