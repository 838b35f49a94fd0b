//! Build script: generates the compiled-in device settings and stages the
//! linker script for target builds.
//!
//! Settings come from `device.toml`, overridable via `MSGBOX_*` environment
//! variables (e.g. `MSGBOX_WIFI__SSID`). They are emitted as string
//! constants into `config_generated.rs`, which `src/config.rs` includes.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let settings = config::Config::builder()
        .set_default("wifi.ssid", "changeme")
        .unwrap()
        .set_default("wifi.password", "changeme")
        .unwrap()
        .set_default("api.base_url", "https://example.invalid/msgbox")
        .unwrap()
        .set_default("api.token", "changeme")
        .unwrap()
        .add_source(config::File::with_name("device").required(false))
        .add_source(config::Environment::with_prefix("MSGBOX").separator("__"))
        .build()
        .expect("failed to load device settings");

    let ssid = settings.get_string("wifi.ssid").unwrap();
    let password = settings.get_string("wifi.password").unwrap();
    let base_url = settings.get_string("api.base_url").unwrap();
    let token = settings.get_string("api.token").unwrap();
    let base_url = base_url.trim_end_matches('/');

    let generated = format!(
        "pub const WIFI_SSID: &str = {ssid:?};\n\
         pub const WIFI_PASSWORD: &str = {password:?};\n\
         pub const API_MESSAGES_URL: &str = {messages:?};\n\
         pub const API_READ_URL: &str = {read:?};\n\
         pub const API_AUTH_TOKEN: &str = {token:?};\n",
        messages = format!("{base_url}/messages"),
        read = format!("{base_url}/read"),
    );
    fs::write(out_dir.join("config_generated.rs"), generated).unwrap();

    // Stage memory.x so the linker finds it on thumbv6 builds.
    fs::copy("memory.x", out_dir.join("memory.x")).unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=device.toml");
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
