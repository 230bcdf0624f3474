#![no_main]

use libfuzzer_sys::fuzz_target;

use contrast_core::records::{top_names_iter, top_names_loop, Record};

fuzz_target!(|data: &[u8]| {
    let Some((&threshold, rest)) = data.split_first() else {
        return;
    };
    let records: Vec<Record> = rest
        .chunks(4)
        .map(|chunk| {
            let name = String::from_utf8_lossy(&chunk[1..]).into_owned();
            Record::new(name, i32::from(chunk[0]))
        })
        .collect();

    let threshold = i32::from(threshold);
    assert_eq!(
        top_names_loop(&records, threshold),
        top_names_iter(&records, threshold)
    );
});
