use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use super::{invalid, list_help, split_list, FlagValue};
use crate::error::{Error, Result};

const CIDR_HELP: &str = "a CIDR notation IP address and prefix length";

/// A parsed `addr/prefix`: the host address as written plus the network it
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CidrValue {
    pub addr: IpAddr,
    pub network: IpAddr,
    pub prefix: u8,
}

impl FromStr for CidrValue {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let bad = |problem: &str| invalid(text, format!("invalid CIDR address: {}", problem), None);

        let (addr, prefix) = text.split_once('/').ok_or_else(|| bad("missing prefix length"))?;
        let addr: IpAddr = addr.parse().map_err(|_| bad("malformed IP address"))?;
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad("malformed prefix length"));
        }
        let prefix: u8 = prefix.parse().map_err(|_| bad("prefix length out of range"))?;

        let network = network_of(addr, prefix).ok_or_else(|| bad("prefix length out of range"))?;

        Ok(Self {
            addr,
            network,
            prefix,
        })
    }
}

/// `addr` masked to its first `prefix` bits, or `None` when the prefix is
/// wider than the address.
fn network_of(addr: IpAddr, prefix: u8) -> Option<IpAddr> {
    match addr {
        IpAddr::V4(v4) if prefix <= 32 => {
            let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
            Some(IpAddr::V4(Ipv4Addr::from(u32::from(v4) & mask)))
        }
        IpAddr::V6(v6) if prefix <= 128 => {
            let mask = u128::MAX.checked_shl(128 - u32::from(prefix)).unwrap_or(0);
            Some(IpAddr::V6(Ipv6Addr::from(u128::from(v6) & mask)))
        }
        _ => None,
    }
}

impl CidrValue {
    pub fn contains(&self, ip: IpAddr) -> bool {
        ip.is_ipv4() == self.network.is_ipv4() && network_of(ip, self.prefix) == Some(self.network)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cidr {
    pub value: Option<CidrValue>,
    pub text: String,
}

impl FlagValue for Cidr {
    fn set(&mut self, text: &str) -> Result<()> {
        self.value = Some(text.parse()?);
        self.text = text.to_string();
        Ok(())
    }

    fn help(&self) -> String {
        CIDR_HELP.to_string()
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Repeatable CIDR flag.
#[derive(Debug, Clone, Default)]
pub struct Cidrs {
    pub values: Vec<CidrValue>,
    pub texts: Vec<String>,
}

impl FlagValue for Cidrs {
    fn set(&mut self, text: &str) -> Result<()> {
        self.values.push(text.parse()?);
        self.texts.push(text.to_string());
        Ok(())
    }

    fn help(&self) -> String {
        CIDR_HELP.to_string()
    }
}

impl fmt::Display for Cidrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.texts.join(","))
    }
}

/// Separated list of CIDRs. Without `accumulate`, each `set` replaces the
/// previous list.
#[derive(Debug, Clone, Default)]
pub struct CidrsCsv {
    pub separator: String,
    pub accumulate: bool,
    pub values: Vec<CidrValue>,
    pub texts: Vec<String>,
}

impl CidrsCsv {
    pub fn new(separator: impl Into<String>, accumulate: bool) -> Self {
        Self {
            separator: separator.into(),
            accumulate,
            ..Self::default()
        }
    }
}

impl FlagValue for CidrsCsv {
    fn set(&mut self, text: &str) -> Result<()> {
        let parts = split_list(text, &self.separator);
        let parsed = parts
            .iter()
            .map(|part| part.parse::<CidrValue>())
            .collect::<Result<Vec<_>>>()?;

        if !self.accumulate {
            self.values.clear();
            self.texts.clear();
        }
        self.values.extend(parsed);
        self.texts.extend(parts.into_iter().map(str::to_string));
        Ok(())
    }

    fn help(&self) -> String {
        list_help(&self.separator, "CIDR notation IP addresses/prefix lengths")
    }
}

impl fmt::Display for CidrsCsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.texts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_v4_network() {
        let c: CidrValue = "192.168.1.77/24".parse().unwrap();
        assert_eq!(c.addr, "192.168.1.77".parse::<IpAddr>().unwrap());
        assert_eq!(c.network, "192.168.1.0".parse::<IpAddr>().unwrap());
        assert_eq!(c.prefix, 24);
        assert!(c.contains("192.168.1.200".parse().unwrap()));
        assert!(!c.contains("192.168.2.1".parse().unwrap()));
    }

    #[test]
    fn parses_v6_and_edge_prefixes() {
        let c: CidrValue = "2001:db8::1/32".parse().unwrap();
        assert_eq!(c.network, "2001:db8::".parse::<IpAddr>().unwrap());
        let all: CidrValue = "10.1.2.3/0".parse().unwrap();
        assert_eq!(all.network, "0.0.0.0".parse::<IpAddr>().unwrap());
        let host: CidrValue = "10.1.2.3/32".parse().unwrap();
        assert_eq!(host.network, host.addr);
    }

    #[test]
    fn rejects_malformed_input() {
        for text in ["10.0.0.1", "10.0.0.1/33", "::1/129", "nope/8", "10.0.0.1/+8", "10.0.0.1/"] {
            assert!(text.parse::<CidrValue>().is_err(), "{}", text);
        }
    }

    #[test]
    fn single_flag_keeps_latest() {
        let mut flag = Cidr::default();
        flag.set("10.0.0.0/8").unwrap();
        flag.set("172.16.0.0/12").unwrap();
        assert_eq!(flag.to_string(), "172.16.0.0/12");
        assert!(flag.set("bad").is_err());
        assert_eq!(flag.to_string(), "172.16.0.0/12");
    }

    #[test]
    fn repeated_flag_accumulates() {
        let mut flag = Cidrs::default();
        flag.set("10.0.0.0/8").unwrap();
        flag.set("::1/128").unwrap();
        assert_eq!(flag.values.len(), 2);
        assert_eq!(flag.to_string(), "10.0.0.0/8,::1/128");
    }

    #[test]
    fn csv_flag_replaces_unless_accumulating() {
        let mut flag = CidrsCsv::default();
        flag.set("10.0.0.0/8, 192.168.0.0/16").unwrap();
        flag.set("172.16.0.0/12").unwrap();
        assert_eq!(flag.to_string(), "172.16.0.0/12");

        let mut flag = CidrsCsv::new(";", true);
        flag.set("10.0.0.0/8;192.168.0.0/16").unwrap();
        flag.set("172.16.0.0/12").unwrap();
        assert_eq!(flag.values.len(), 3);
        assert_eq!(
            flag.help(),
            "\";\"-separated list of CIDR notation IP addresses/prefix lengths"
        );
    }
}
