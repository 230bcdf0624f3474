#![no_main]

use libfuzzer_sys::fuzz_target;

use contrast_core::registry::{DefaultFactory, StrategyFactory};

fuzz_target!(|data: &[u8]| {
    let Some(&byte) = data.first() else {
        return;
    };
    // Any index up to 99 so the overflow guard gets exercised too.
    let n = u64::from(byte % 100);

    let factory = DefaultFactory::new();
    let reference = factory.get("iterative").unwrap().compute(n);
    for name in factory.available() {
        let strategy = factory.get(name).unwrap();
        match (strategy.compute(n), &reference) {
            (Ok(got), Ok(expected)) => assert_eq!(got, *expected, "{name} != iterative at n={n}"),
            (Err(_), _) if strategy.max_input().is_some_and(|limit| n > limit) => {}
            (Err(got), Err(expected)) => assert_eq!(&got, expected, "{name} at n={n}"),
            (got, expected) => panic!("{name} at n={n}: {got:?} vs {expected:?}"),
        }
    }
});
