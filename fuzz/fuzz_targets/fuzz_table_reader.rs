#![no_main]

use annocheck::check::{annotate_matches, CheckParams, LibraryMode};
use annocheck::table::{Delimiter, FeatureTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Malformed input must come back as an error, never a panic
    for delimiter in [Delimiter::Tab, Delimiter::Comma] {
        let Ok(table) = FeatureTable::from_reader(data, delimiter) else {
            continue;
        };

        for library_mode in [LibraryMode::Regular, LibraryMode::Analogue] {
            let params = CheckParams {
                library_mode,
                ..Default::default()
            };
            let _ = annotate_matches(&table, &params);
        }
    }
});
