//! CLI that reads a profile page's HTML and prints the response envelope as JSON.
//!
//! Usage: `extract_profile <page-url-or-host> [html-file]`
//! Reads stdin when no file is given. Set `RUST_LOG=debug` to see which
//! locator strategies matched.

use rs_profile_extract::response::{handle_request_for_target, ProfileRequest};
use rs_profile_extract::Options;
use std::env;
use std::fs;
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: extract_profile <page-url-or-host> [html-file]");
        eprintln!("  page-url-or-host: e.g. https://www.instagram.com/natgeo/ or www.instagram.com");
        eprintln!("  html-file: Optional HTML snapshot (default: stdin)");
        std::process::exit(1);
    }

    let target = &args[1];
    let html = match args.get(2) {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map(|_| buf)
        }
    };
    let html = match html {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Failed to read HTML: {e}");
            std::process::exit(1);
        }
    };

    let response = handle_request_for_target(
        &ProfileRequest::collect_profile_data(),
        &html,
        target,
        &Options::default(),
    );
    println!("{}", serde_json::to_string_pretty(&response).unwrap_or_default());

    if !response.success {
        std::process::exit(1);
    }
}
