#![no_main]

use libfuzzer_sys::fuzz_target;
use samplekit::policy::history::HistorySampler;
use samplekit::source::ScriptedSource;

// Fuzz HistorySampler with arbitrary configurations and scripted draws
//
// Header bytes choose bound, history capacity and retry limit; the rest of
// the input becomes the source script. Checks range, history bound and the
// per-call draw budget.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let bound = (data[0] % 16) as usize + 1;
    let capacity = (data[1] % 8) as usize;
    let retries = (data[2] % 8) as usize;
    let script: Vec<usize> = data[3..].iter().map(|&b| b as usize).collect();

    let mut sampler = match HistorySampler::with_source(
        bound,
        capacity,
        retries,
        std::iter::empty(),
        ScriptedSource::new(script),
    ) {
        Ok(sampler) => sampler,
        Err(_) => return,
    };

    for _ in 0..64 {
        let before = sampler.source().draws();
        let value = sampler.next_value();
        let used = sampler.source().draws() - before;

        assert!(value < bound);
        assert!(used >= 1 && used <= retries as u64 + 1);
        assert!(sampler.history().len() <= capacity);
        if capacity > 0 {
            assert_eq!(sampler.history().most_recent(), Some(value));
        }
        assert!(sampler.check_invariants().is_ok());
    }
});
