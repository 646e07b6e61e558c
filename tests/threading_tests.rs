use spring_network::*;
use std::sync::{Arc, Mutex};
use std::thread;

#[test]
fn test_spring_network_is_sync_and_send() {
    fn assert_sync_send<T: Sync + Send>() {}
    assert_sync_send::<SpringNetwork>();
    assert_sync_send::<SharedSpringNetwork>();
}

#[test]
fn test_shared_network_across_threads() {
    let mut seed = PointMassSet::new();
    let ids: Vec<BodyId> = (0..9)
        .map(|i| seed.insert(PointMass::new(Vec3::new(i as f32, 0.0, 0.0))))
        .collect();
    let bodies = Arc::new(Mutex::new(seed));
    let network = SharedSpringNetwork::default();

    let mut handles = vec![];
    for worker in 0..4 {
        let network = network.clone();
        let bodies = Arc::clone(&bodies);
        let ids = ids.clone();
        let handle = thread::spawn(move || {
            let a = ids[worker * 2];
            let b = ids[worker * 2 + 1];
            network.add_spring(SpringConstraint::new(a, b, 1.0).unwrap());
            let mut bodies = bodies.lock().unwrap();
            network.step(DEFAULT_TIME_STEP, &mut *bodies, &SeverInput::inactive());
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(network.len(), 4);
    for worker in 0..4 {
        assert!(network.spring_exists_between(ids[worker * 2 + 1], ids[worker * 2]));
    }
    network.with(|inner| {
        for spring in inner.springs() {
            assert_eq!(inner.neighbors(spring.a()), &[spring.b()]);
        }
    });
}

#[test]
fn test_shared_remove_and_queries() {
    let network = SharedSpringNetwork::new(SpringNetwork::new());
    let (x, y, z) = (BodyId::from_index(0), BodyId::from_index(1), BodyId::from_index(2));
    let xy = SpringConstraint::new(x, y, 1.0).unwrap();
    network.add_spring(xy);
    network.add_spring(SpringConstraint::new(y, z, 1.0).unwrap());

    assert_eq!(network.mutual_connection(x, z), Some(y));
    assert!(network.remove_spring(&xy).is_ok());
    assert!(network.remove_spring(&xy).is_err());
    assert_eq!(network.mutual_connection(x, z), None);

    network.with_mut(|inner| inner.set_snap_length(0.5));
    assert_eq!(network.with(|inner| inner.snap_length()), 0.5);
    assert!(!network.is_empty());
}
