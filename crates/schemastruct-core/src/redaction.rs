use serde::{Deserialize, Serialize};

/// Connection metadata with secrets redacted, safe to log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RedactedConnection {
    pub user: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub redacted: String,
}

impl RedactedConnection {
    /// Describe a connection assembled from discrete options.
    pub fn from_parts(
        user: &str,
        has_password: bool,
        host: &str,
        port: u16,
        database: &str,
    ) -> Self {
        let auth = if has_password {
            format!("{user}:***")
        } else {
            user.to_string()
        };
        Self {
            user: Some(user.to_string()),
            host: Some(host.to_string()),
            port: Some(port),
            database: Some(database.to_string()),
            redacted: format!("mysql://{auth}@{host}:{port}/{database}"),
        }
    }
}

/// Redact the password of a `mysql://` URL while extracting the other parts.
pub fn redact_connection_string(conn: &str) -> RedactedConnection {
    let mut redacted = conn.to_string();
    let mut user = None;
    let mut host = None;
    let mut port = None;
    let mut database = None;

    if let Some(scheme_end) = conn.find("://") {
        let after_scheme = &conn[scheme_end + 3..];
        let (auth_part, host_part) = match after_scheme.rfind('@') {
            Some(at_idx) => (&after_scheme[..at_idx], &after_scheme[at_idx + 1..]),
            None => ("", after_scheme),
        };

        if let Some((name, _)) = auth_part.split_once(':') {
            user = Some(name.to_string());
            let password_start = scheme_end + 3 + name.len() + 1;
            let password_end = scheme_end + 3 + auth_part.len();
            redacted.replace_range(password_start..password_end, "***");
        } else if !auth_part.is_empty() {
            user = Some(auth_part.to_string());
        }

        let host_part = host_part.split('?').next().unwrap_or("");
        let (host_port, path) = host_part.split_once('/').unwrap_or((host_part, ""));

        if let Some((name, port_text)) = host_port.rsplit_once(':') {
            host = Some(name.to_string());
            port = port_text.parse::<u16>().ok();
        } else if !host_port.is_empty() {
            host = Some(host_port.to_string());
        }

        if !path.is_empty() {
            database = Some(path.to_string());
        }
    }

    RedactedConnection {
        user,
        host,
        port,
        database,
        redacted: redact_query_params(&redacted),
    }
}

fn redact_query_params(conn: &str) -> String {
    let Some((base, query)) = conn.split_once('?') else {
        return conn.to_string();
    };

    let params: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if is_sensitive_key(key) => format!("{key}=***"),
            _ => pair.to_string(),
        })
        .collect();

    format!("{base}?{}", params.join("&"))
}

fn is_sensitive_key(key: &str) -> bool {
    matches!(
        key.to_lowercase().as_str(),
        "password" | "pass" | "pwd" | "token"
    )
}
