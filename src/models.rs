//! Payload types for the daemons' status/config APIs.
//!
//! Field names mirror the wire format exactly: the client daemon reports
//! proxy status with snake_case keys, the server daemon's dashboard API uses
//! camelCase. Everything is `#[serde(default)]`-tolerant so a slightly older
//! or newer daemon still renders instead of failing the whole view.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Proxy kinds the server daemon tracks, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyType {
    Tcp,
    Udp,
    Http,
    Https,
    Stcp,
    Sudp,
    Xtcp,
    Tcpmux,
}

impl ProxyType {
    /// All kinds, in the order the connections view cycles through them.
    pub const ALL: [ProxyType; 8] = [
        ProxyType::Tcp,
        ProxyType::Udp,
        ProxyType::Http,
        ProxyType::Https,
        ProxyType::Stcp,
        ProxyType::Sudp,
        ProxyType::Xtcp,
        ProxyType::Tcpmux,
    ];

    /// The path segment used by `/api/proxy/{type}`.
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyType::Tcp => "tcp",
            ProxyType::Udp => "udp",
            ProxyType::Http => "http",
            ProxyType::Https => "https",
            ProxyType::Stcp => "stcp",
            ProxyType::Sudp => "sudp",
            ProxyType::Xtcp => "xtcp",
            ProxyType::Tcpmux => "tcpmux",
        }
    }

    /// The next kind in cycle order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ProxyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One proxy's status as reported by the client daemon.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProxyStatus {
    pub name: String,
    #[serde(rename = "type")]
    pub proxy_type: String,
    pub status: String,
    pub err: String,
    pub local_addr: String,
    pub plugin: String,
    pub remote_addr: String,
}

impl ProxyStatus {
    /// Whether the daemon reports this proxy as running.
    pub fn is_running(&self) -> bool {
        self.status == "running"
    }
}

/// The client daemon's full status: proxies grouped by type.
///
/// The wire format is a bare JSON object keyed by proxy type, hence the
/// transparent map.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct ClientStatus {
    pub proxies: BTreeMap<String, Vec<ProxyStatus>>,
}

impl ClientStatus {
    /// Total number of proxies across all types.
    pub fn total(&self) -> usize {
        self.proxies.values().map(Vec::len).sum()
    }

    /// Flattened view in (type, status) order for table rendering.
    pub fn iter_flat(&self) -> impl Iterator<Item = &ProxyStatus> {
        self.proxies.values().flatten()
    }
}

/// The server daemon's summary counters.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerInfo {
    pub version: String,
    pub bind_port: u16,
    #[serde(rename = "vhostHTTPPort")]
    pub vhost_http_port: u16,
    #[serde(rename = "vhostHTTPSPort")]
    pub vhost_https_port: u16,
    pub subdomain_host: String,
    pub max_pool_count: i64,
    pub heartbeat_timeout: i64,
    pub total_traffic_in: i64,
    pub total_traffic_out: i64,
    pub cur_conns: i64,
    pub client_counts: i64,
    #[serde(rename = "proxyTypeCount")]
    pub proxy_type_counts: BTreeMap<String, i64>,
}

/// One proxy's stats from the server daemon's `/api/proxy/{type}` endpoint.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyInfo {
    pub name: String,
    pub client_version: String,
    pub today_traffic_in: i64,
    pub today_traffic_out: i64,
    pub cur_conns: i64,
    pub last_start_time: String,
    pub last_close_time: String,
    pub status: String,
}

/// Response wrapper for `/api/proxy/{type}`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProxyList {
    #[serde(default)]
    pub proxies: Vec<ProxyInfo>,
}

/// Per-proxy traffic history (one entry per day, most recent first).
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TrafficInfo {
    pub name: String,
    pub traffic_in: Vec<i64>,
    pub traffic_out: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_status_decodes_grouped_map() {
        let raw = r#"{
            "tcp": [
                {"name": "ssh", "type": "tcp", "status": "running",
                 "err": "", "local_addr": "127.0.0.1:22", "plugin": "",
                 "remote_addr": "0.0.0.0:6000"}
            ],
            "http": []
        }"#;
        let status: ClientStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(status.total(), 1);
        let ssh = status.iter_flat().next().unwrap();
        assert_eq!(ssh.name, "ssh");
        assert!(ssh.is_running());
    }

    #[test]
    fn test_server_info_decodes_camel_case() {
        let raw = r#"{
            "version": "0.52.1",
            "bindPort": 7000,
            "vhostHTTPPort": 80,
            "totalTrafficIn": 1024,
            "totalTrafficOut": 2048,
            "curConns": 3,
            "clientCounts": 2,
            "proxyTypeCount": {"tcp": 4}
        }"#;
        let info: ServerInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.bind_port, 7000);
        assert_eq!(info.vhost_http_port, 80);
        assert_eq!(info.proxy_type_counts.get("tcp"), Some(&4));
        // Unsent fields default rather than fail.
        assert_eq!(info.vhost_https_port, 0);
    }

    #[test]
    fn test_proxy_list_tolerates_missing_fields() {
        let raw = r#"{"proxies": [{"name": "web", "curConns": 7, "status": "online"}]}"#;
        let list: ProxyList = serde_json::from_str(raw).unwrap();
        assert_eq!(list.proxies[0].cur_conns, 7);
        assert_eq!(list.proxies[0].client_version, "");
    }

    #[test]
    fn test_proxy_type_cycle_wraps() {
        assert_eq!(ProxyType::Tcp.next(), ProxyType::Udp);
        assert_eq!(ProxyType::Tcpmux.next(), ProxyType::Tcp);
    }
}
