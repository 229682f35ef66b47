#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate pelorus;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = ::std::str::from_utf8(data) {
        let _ = pelorus::route_from_lines(text.lines());
    }
});
