//! Host lookup endpoint.

use crate::ShodanClient;
use shodanhq_core::{Host, HostShape, Result, ShodanError};
use std::net::IpAddr;
use tracing::instrument;

impl ShodanClient {
    /// Get everything the service knows about a host
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let host = client.lookup_host("217.140.75.46".parse()?).await?;
    /// println!("Ports: {:?}", host.ports());
    /// ```
    #[instrument(skip(self), fields(api = "host"))]
    pub async fn lookup_host(&self, ip: IpAddr) -> Result<Host> {
        let ip = ip.to_string();
        let record = self.send_request("host", &[("ip", ip.as_str())]).await?;
        Host::from_record(&record, HostShape::Full)
    }

    /// Same as [`lookup_host`](Self::lookup_host), parsing the address first
    pub async fn lookup_host_str(&self, ip: &str) -> Result<Host> {
        let ip = ip
            .trim()
            .parse()
            .map_err(|_| ShodanError::InvalidIp(ip.to_string()))?;
        self.lookup_host(ip).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{client_with, ScriptedTransport};
    use crate::ShodanClient;
    use shodanhq_core::ShodanError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const HOST_BODY: &str = r#"{
        "ip": "217.140.75.46",
        "hostnames": ["www.example.de"],
        "country_code": "DE",
        "country_name": "Germany",
        "city": "Frankfurt",
        "latitude": 50.1167,
        "longitude": 8.6833,
        "data": [
            {"port": 80, "banner": "HTTP/1.0 200 OK", "timestamp": "05.11.2012"},
            {"port": 22, "banner": "SSH-2.0-OpenSSH_5.3", "timestamp": "01.10.2012"}
        ]
    }"#;

    #[tokio::test]
    async fn test_lookup_host_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/host"))
            .and(query_param("ip", "217.140.75.46"))
            .and(query_param("key", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_string(HOST_BODY))
            .expect(1)
            .mount(&server)
            .await;

        let client = ShodanClient::builder("secret")
            .base_url(format!("{}/api/", server.uri()))
            .build()
            .unwrap();

        let host = client.lookup_host_str("217.140.75.46").await.unwrap();
        assert_eq!(host.ip.to_string(), "217.140.75.46");
        assert_eq!(host.ports(), vec![80, 22]);
        assert!(!host.is_simple());
        assert_eq!(host.location.country_code.as_deref(), Some("DE"));
    }

    #[tokio::test]
    async fn test_lookup_host_remote_error() {
        let transport = ScriptedTransport::ok(r#"{"error": "invalid API key", "ip": "1.2.3.4"}"#);
        let client = client_with(transport);

        let err = client.lookup_host_str("1.2.3.4").await.unwrap_err();
        assert!(matches!(err, ShodanError::Remote(m) if m == "invalid API key"));
    }

    #[tokio::test]
    async fn test_lookup_host_invalid_ip_sends_nothing() {
        let transport = ScriptedTransport::ok(HOST_BODY);
        let client = client_with(std::sync::Arc::clone(&transport));

        let err = client.lookup_host_str("not-an-ip").await.unwrap_err();
        assert!(matches!(err, ShodanError::InvalidIp(s) if s == "not-an-ip"));
        assert!(transport.requested().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_host_malformed_body() {
        let transport = ScriptedTransport::ok(r#"{"hostnames": [], "data": []}"#);
        let client = client_with(transport);

        let err = client.lookup_host("10.1.1.1".parse().unwrap()).await.unwrap_err();
        assert!(err.is_malformed());
    }

    #[tokio::test]
    async fn test_lookup_host_ipv6_argument() {
        let transport = ScriptedTransport::ok(
            r#"{"ip": "2001:db8::1", "hostnames": [], "data": []}"#,
        );
        let client = client_with(std::sync::Arc::clone(&transport));

        let host = client.lookup_host_str("2001:db8::1").await.unwrap();
        assert!(host.banners.is_empty());
        assert!(transport.requested()[0].contains("ip=2001%3Adb8%3A%3A1"));
    }
}
