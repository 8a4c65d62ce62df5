use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Forward .env entries as compile-time variables (read via option_env!)
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, optionally quoted
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // A variable already set in the build environment wins
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using defaults (API_BASE_URL=http://localhost:4000).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    for key in [
        "API_BASE_URL",
        "AUTH_STORAGE_KEY",
        "ENVIRONMENT",
        "ENABLE_LOGGING",
        "NETWORK_TIMEOUT_SECONDS",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
