use anyhow::Context;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LOG_FILTER: &str = "expenses=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(host) = lookup("EXPENSES_HOST") {
            config.host = host
                .parse()
                .with_context(|| format!("invalid EXPENSES_HOST: {host:?}"))?;
        }
        if let Some(port) = lookup("EXPENSES_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("invalid EXPENSES_PORT: {port:?}"))?;
        }
        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod server_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[rstest]
    fn it_should_listen_on_localhost_5000_by_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:5000".parse().unwrap());
    }

    #[rstest]
    fn it_should_read_host_and_port_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("EXPENSES_HOST", "0.0.0.0"),
            ("EXPENSES_PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080".parse().unwrap());
    }

    #[rstest]
    #[case("EXPENSES_PORT", "not-a-port")]
    #[case("EXPENSES_PORT", "70000")]
    #[case("EXPENSES_HOST", "localhost:1")]
    fn it_should_fail_on_unparsable_values(#[case] key: &str, #[case] value: &str) {
        let result = ServerConfig::from_lookup(lookup_from(&[(key, value)]));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(key));
    }
}
