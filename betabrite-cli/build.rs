//! Build script for betabrite
//!
//! Validates the embedded betabrite.toml so a broken default never ships.

use std::fs;
use std::path::Path;

fn main() {
    validate_config();
}

/// Validate betabrite.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=betabrite.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let config_path = Path::new("betabrite.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail(&[format!("cannot read betabrite.toml: {e}")]),
    };

    let config: toml::Table = match toml::from_str(&content) {
        Ok(table) => table,
        Err(e) => fail(&e.to_string().lines().map(str::to_string).collect::<Vec<_>>()),
    };

    let mut errors = Vec::new();
    validate_sign(&config, &mut errors);
    validate_link(&config, &mut errors);
    if !errors.is_empty() {
        fail(&errors);
    }
}

fn validate_sign(config: &toml::Table, errors: &mut Vec<String>) {
    let Some(toml::Value::Table(sign)) = config.get("sign") else {
        return;
    };

    if let Some(toml::Value::String(address)) = sign.get("address") {
        let valid = address.len() == 2
            && address
                .bytes()
                .all(|b| b.is_ascii_hexdigit() || b == b'?');
        if !valid {
            errors.push(format!("[sign] address {address:?} must be two of 0-9, A-F, ?"));
        }
    }

    if let Some(toml::Value::String(charset)) = sign.get("charset") {
        if !["utf8", "extended"].contains(&charset.as_str()) {
            errors.push("[sign] charset must be 'utf8' or 'extended'".into());
        }
    }
}

fn validate_link(config: &toml::Table, errors: &mut Vec<String>) {
    let Some(toml::Value::Table(link)) = config.get("link") else {
        return;
    };

    if let Some(toml::Value::String(kind)) = link.get("kind") {
        if !["usb", "serial", "stdout"].contains(&kind.as_str()) {
            errors.push("[link] kind must be 'usb', 'serial' or 'stdout'".into());
        }
        if kind == "serial" && link.get("path").is_none() {
            errors.push("[link] kind 'serial' needs a path".into());
        }
    }

    for key in ["vendor_id", "product_id"] {
        if let Some(toml::Value::Integer(id)) = link.get(key) {
            if !(0..=0xFFFF).contains(id) {
                errors.push(format!("[link] {key} must fit in 16 bits"));
            }
        }
    }

    if let Some(toml::Value::Integer(delay)) = link.get("inter_byte_delay_us") {
        if *delay < 0 {
            errors.push("[link] inter_byte_delay_us cannot be negative".into());
        }
    }
}

fn fail(errors: &[String]) -> ! {
    let lines = errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n");
    panic!("\nbetabrite.toml is invalid:\n{lines}\n");
}
