use binarycookies_reader::{decode_with, DecodeOptions, MalformedRecordPolicy};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "{} {} - Safari/iOS binary cookie decoder",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
        eprintln!(
            "Usage: {} <path-to-binarycookies-file> [--skip-malformed]",
            args[0]
        );
        process::exit(1);
    }

    let path = &args[1];
    let mut options = DecodeOptions::default();
    if args.iter().skip(2).any(|arg| arg == "--skip-malformed") {
        options.malformed_records = MalformedRecordPolicy::Skip;
    }

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            process::exit(1);
        }
    };

    match decode_with(&data, &options) {
        Ok(cookies) => {
            for (i, cookie) in cookies.iter().enumerate() {
                println!(
                    "Cookie {}: {}={}; Domain: {}; Path: {}; Expires: {}; Last Accessed: {}; {}",
                    i + 1,
                    cookie.name,
                    cookie.value,
                    cookie.domain,
                    cookie.path,
                    cookie.expires,
                    cookie.last_accessed,
                    cookie.flags
                );
            }
        }
        Err(e) => {
            eprintln!("Failed to decode {}: {}", path, e);
            process::exit(1);
        }
    }
}
