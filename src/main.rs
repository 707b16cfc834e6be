//! Host-side helper: `cargo run` builds the WASM package into `static/pkg`
//! and serves `static/` on localhost. Browsers only grant camera access to
//! secure origins, and `http://127.0.0.1` counts as one.

use std::env;
use std::process::{Command, ExitCode};

const DEFAULT_PORT: u16 = 8000;

fn main() -> ExitCode {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return ExitCode::SUCCESS;
    }

    let port = match env::var("GLASS_PORT") {
        Ok(raw) => match raw.parse::<u16>() {
            Ok(port) => port,
            Err(err) => {
                eprintln!("GLASS_PORT={raw} is not a port number: {err}");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => DEFAULT_PORT,
    };

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            return ExitCode::FAILURE;
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
        }
    }

    let port_arg = port.to_string();
    println!("Serving static/ at http://127.0.0.1:{port} …");
    match Command::new("python3")
        .args(["-m", "http.server", &port_arg, "--bind", "127.0.0.1", "--directory", "static"])
        .status()
    {
        Ok(st) if st.success() => ExitCode::SUCCESS,
        Ok(st) => {
            eprintln!("http server exited with {st}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("failed to start http server: {err}");
            ExitCode::FAILURE
        }
    }
}
