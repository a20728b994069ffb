// ── Endpoint configuration ──
//
// Describes *where* the controller lives and how to talk to it.
// Built once by the caller and handed to `ShcClient`; never mutated afterwards.

use std::path::PathBuf;

/// Port the controller serves its REST API on.
pub const DEFAULT_PORT: u16 = 8444;

/// API revision sent in the `api-version` header when none is configured.
pub const DEFAULT_API_VERSION: &str = "1.0";

/// Connection settings for a single controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Host name or IP address of the controller.
    pub address: String,
    /// REST API port. `0` means [`DEFAULT_PORT`].
    pub port: u16,
    /// Verify the controller's TLS certificate.
    pub validate_certificate: bool,
    /// Value of the `api-version` header. Empty means [`DEFAULT_API_VERSION`].
    pub api_version: String,
    /// Extra root certificate (PEM) trusted when validation is on.
    pub ca_cert: Option<PathBuf>,
}

impl EndpointConfig {
    /// Config for `address` with every other setting at its default.
    ///
    /// Controllers ship self-signed certificates, so validation starts off.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            port: DEFAULT_PORT,
            validate_certificate: false,
            api_version: DEFAULT_API_VERSION.to_owned(),
            ca_cert: None,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_certificate_validation(mut self, validate: bool) -> Self {
        self.validate_certificate = validate;
        self
    }

    pub fn with_ca_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_cert = Some(path.into());
        self
    }

    /// Replace zero/empty values with their defaults.
    pub fn normalized(mut self) -> Self {
        if self.port == 0 {
            self.port = DEFAULT_PORT;
        }
        if self.api_version.is_empty() {
            self.api_version = DEFAULT_API_VERSION.to_owned();
        }
        self
    }

    /// `https://{address}:{port}`, bracketing bare IPv6 literals.
    ///
    /// The address is not validated here; a bad one fails when the first
    /// request URL is parsed.
    pub fn base_url(&self) -> String {
        let host = if self.address.contains(':') && !self.address.starts_with('[') {
            format!("[{}]", self.address)
        } else {
            self.address.clone()
        };
        format!("https://{host}:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_zero_port_and_empty_version() {
        let config = EndpointConfig::new("192.168.0.10")
            .with_port(0)
            .with_api_version("")
            .normalized();

        assert_eq!(config.port, 8444);
        assert_eq!(config.api_version, "1.0");
    }

    #[test]
    fn keeps_explicit_values() {
        let config = EndpointConfig::new("shc.local")
            .with_port(8446)
            .with_api_version("2.1")
            .with_certificate_validation(true)
            .normalized();

        assert_eq!(config.port, 8446);
        assert_eq!(config.api_version, "2.1");
        assert!(config.validate_certificate);
        assert_eq!(config.base_url(), "https://shc.local:8446");
    }

    #[test]
    fn brackets_ipv6_literals() {
        assert_eq!(EndpointConfig::new("fe80::1").base_url(), "https://[fe80::1]:8444");
        assert_eq!(EndpointConfig::new("[::1]").base_url(), "https://[::1]:8444");
    }
}
