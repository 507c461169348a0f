use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
    let vars: HashMap<&'static str, String> = vars.iter().map(|(k, v)| (*k, (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, HostConfig { port: DEFAULT_PORT, api_url: DEFAULT_API_URL.to_owned() });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_trims_api_url() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "8080"), ("STAKR_API_URL", "https://api.stakr.test/ ")]))
        .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_url, "https://api.stakr.test");
}

#[test]
fn blank_api_url_falls_back_to_default() {
    let cfg = HostConfig::from_lookup(lookup(&[("STAKR_API_URL", "   ")])).unwrap();
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
}

#[test]
fn rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, HostError::InvalidEnv { var: "PORT", .. }));
}
