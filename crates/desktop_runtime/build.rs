use std::fs;
use std::path::PathBuf;

#[path = "src/config/schema.rs"]
mod schema;

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-changed=src/config/schema.rs");

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: schema::DesktopConfig = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if let Err(reason) = schema::check_limits(&config) {
        panic!("invalid desktop config in {}: {reason}", path.display());
    }

    let json = serde_json::to_string_pretty(&config).expect("serialize desktop config");
    let generated = format!(
        "/// Build-time generated desktop configuration JSON.\n\
pub const DESKTOP_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
