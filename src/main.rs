use std::{env, process};

use brace_check::scanner::Scanner;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    // first non-flag argument is the filename
    let filename = args.iter().skip(1).find(|a| !a.starts_with('-'));

    let filename = match filename {
        Some(filename) => filename,
        None => {
            print_usage();
            process::exit(2);
        }
    };

    let scanner = Scanner::new();
    match scanner.scan_path(filename) {
        Ok(report) => {
            println!("{}", report);
            if report.has_findings() {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to scan '{}': {}", filename, e);
            process::exit(2);
        }
    }
}

fn print_usage() {
    println!("brace-check - report unmatched curly braces in a text file");
    println!();
    println!("Usage:");
    println!("  brace-check <file>        Scan a file and print findings");
    println!("  brace-check --help, -h    Show this help");
    println!();
    println!("Exit status: 0 if all braces matched, 1 if any finding was");
    println!("reported, 2 if the file could not be read or decoded.");
}
