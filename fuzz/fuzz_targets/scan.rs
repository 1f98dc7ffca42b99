#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut cursor = std::io::Cursor::new(data);
    let scanner = brace_check::scanner::Scanner::new();
    let _ = scanner.scan(&mut cursor);
});
