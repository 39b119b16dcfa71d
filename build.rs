use std::env;
use std::fs;
use std::path::Path;

// Claves de .env que el crate consume via option_env!; cualquier otra
// entrada del archivo se ignora
const ENV_KEYS: [&str; 2] = ["BACKEND_URL", "ENABLE_LOGGING"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=.env.example");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!(
            "cargo:warning=No .env file found. BACKEND_URL will be missing. \
             Copy .env.example to .env and configure your settings."
        );
        return;
    }

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=Could not read .env file.");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if !ENV_KEYS.contains(&key) {
            continue;
        }

        // Una variable ya presente en el entorno tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value.trim());
        }
    }
}
