use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use sal::core::StackId;
use sal::registry::{RegistrationError, StackRegistry};
use sal::stack::SocketApi;
use std::sync::Barrier;

mod common;

use common::{api, valid_id};

const THREADS: usize = 8;

#[test]
fn test_racing_same_identifier_accepts_one() {
    let contenders: [SocketApi; THREADS] = core::array::from_fn(|_| api(StackId::LWIP_IPV4));
    let registry = StackRegistry::<CriticalSectionRawMutex, 4>::new();
    let barrier = Barrier::new(THREADS);

    let results: Vec<Result<(), RegistrationError>> = std::thread::scope(|s| {
        let handles: Vec<_> = contenders
            .iter()
            .map(|contender| {
                let registry = &registry;
                let barrier = &barrier;
                s.spawn(move || {
                    barrier.wait();
                    registry.register(contender)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|res| res.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .filter(|res| res.is_err())
            .all(|res| *res == Err(RegistrationError::DuplicateIdentifier))
    );

    let winner = results.iter().position(|res| res.is_ok()).unwrap();
    let found = registry.get_api(StackId::LWIP_IPV4).unwrap();
    assert!(core::ptr::eq(found, &contenders[winner]));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_racing_distinct_identifiers_respects_capacity() {
    const CAPACITY: usize = 3;
    let apis: [SocketApi; 5] = core::array::from_fn(|i| api(valid_id(i as u8)));
    let registry = StackRegistry::<CriticalSectionRawMutex, CAPACITY>::new();

    let results: Vec<Result<(), RegistrationError>> = std::thread::scope(|s| {
        let handles: Vec<_> = apis
            .iter()
            .map(|api| {
                let registry = &registry;
                s.spawn(move || registry.register(api))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|res| res.is_ok()).count(), CAPACITY);
    assert_eq!(
        results
            .iter()
            .filter(|res| **res == Err(RegistrationError::RegistryFull))
            .count(),
        apis.len() - CAPACITY
    );
    assert!(registry.is_full());

    for (api, res) in apis.iter().zip(results.iter()) {
        let found = registry.get_api(api.stack());
        match res {
            Ok(()) => assert!(core::ptr::eq(found.unwrap(), api)),
            Err(_) => assert!(found.is_none()),
        }
    }
}

#[test]
fn test_lookup_alongside_registration() {
    let apis: [SocketApi; 4] = core::array::from_fn(|i| api(valid_id(i as u8)));
    let registry = StackRegistry::<CriticalSectionRawMutex, 4>::new();

    std::thread::scope(|s| {
        s.spawn(|| {
            for api in apis.iter() {
                registry.register(api).unwrap();
            }
        });
        s.spawn(|| {
            // Once found, an entry stays and always resolves to the same descriptor
            let mut seen = [false; 4];
            while !seen.iter().all(|seen| *seen) {
                for (i, api) in apis.iter().enumerate() {
                    match registry.get_api(valid_id(i as u8)) {
                        Some(found) => {
                            assert!(core::ptr::eq(found, api));
                            seen[i] = true;
                        }
                        None => assert!(!seen[i]),
                    }
                }
                std::thread::yield_now();
            }
        });
    });

    assert_eq!(registry.len(), 4);
}
