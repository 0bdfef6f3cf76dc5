#![no_main]

use libfuzzer_sys::fuzz_target;
use samplekit::ds::RecentWindow;
use std::collections::VecDeque;

// Fuzz arbitrary operation sequences on RecentWindow against a VecDeque model
//
// Tests random sequences of record, contains, oldest/most_recent, get,
// and clear to find divergence from plain FIFO semantics.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte picks capacity (0-31, zero included)
    let capacity = (data[0] % 32) as usize;
    let mut window = RecentWindow::with_capacity(capacity);
    let mut model: VecDeque<usize> = VecDeque::new();

    for pair in data[1..].chunks_exact(2) {
        let op = pair[0] % 5;
        let value = pair[1] as usize;

        match op {
            0 => {
                let evicted = window.record(value);
                model.push_back(value);
                let expected = if model.len() > capacity {
                    model.pop_front()
                } else {
                    None
                };
                assert_eq!(evicted, expected);
            }
            1 => {
                assert_eq!(window.contains(value), model.contains(&value));
            }
            2 => {
                assert_eq!(window.oldest(), model.front().copied());
                assert_eq!(window.most_recent(), model.back().copied());
            }
            3 => {
                let index = value % (capacity + 1);
                assert_eq!(window.get(index), model.get(index).copied());
            }
            4 => {
                window.clear();
                model.clear();
                assert!(window.is_empty());
            }
            _ => unreachable!(),
        }

        window.debug_validate_invariants();
        assert_eq!(window.len(), model.len());
        assert!(window.len() <= capacity);
        assert_eq!(window.to_vec(), Vec::from(model.clone()));
    }
});
