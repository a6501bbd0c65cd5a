/// Integration tests for identity key discovery and extraction
///
/// These mirror the common cases: a key declared on the struct itself,
/// on an interface, on an inherited interface, and no key at all.
mod common;

use std::sync::Arc;

use common::*;
use object_identity::prelude::*;
use rand::Rng;

#[test]
fn identifies_key_declared_on_struct() {
    init_logging();
    let mut rng = rand::thread_rng();
    let ik = typed_identity_key::<My, String>().unwrap();

    assert!(ik.has_key());
    assert_eq!(ik.key_type(), Some(KeyType::of::<String>()));
    assert_eq!(ik.key_name(), Some("tag"));

    for _ in 0..100 {
        let r: u32 = rng.r#gen();
        let my = My {
            name: format!("This is the {r} name"),
            tag: r.to_string(),
        };
        assert_eq!(ik.key(&my), r.to_string());
    }
}

#[test]
fn identifies_key_declared_on_interface() {
    init_logging();
    let mut rng = rand::thread_rng();
    let ik = typed_identity_key::<dyn IMy, String>().unwrap();

    assert!(ik.has_key());
    assert_eq!(ik.key_type(), Some(KeyType::of::<String>()));
    assert_eq!(ik.key_name(), Some("tag"));

    for _ in 0..100 {
        let r: u32 = rng.r#gen();
        let mut my: Box<dyn IMy> = Box::new(MyRecord {
            tag: r.to_string(),
            ..Default::default()
        });
        my.rename(format!("This is the {r} name"));
        assert_eq!(ik.key(my.as_ref()), r.to_string());
    }
}

#[test]
fn identifies_key_declared_on_inherited_interface() {
    init_logging();
    let mut rng = rand::thread_rng();
    let ik = typed_identity_key::<dyn IDerived, String>().unwrap();

    assert!(ik.has_key());
    assert_eq!(ik.key_type(), Some(KeyType::of::<String>()));
    assert_eq!(ik.key_name(), Some("tag"));

    for _ in 0..100 {
        let r: u32 = rng.r#gen();
        let name = format!("This is the {r} name");
        let my: Box<dyn IDerived> = Box::new(DerivedRecord {
            description: format!("Derived: {name}"),
            name,
            tag: r.to_string(),
        });
        assert_eq!(ik.key(my.as_ref()), r.to_string());
    }
}

#[test]
fn knows_when_identity_key_not_defined() {
    init_logging();
    let ik = identity_key::<NoKey>().unwrap();

    assert!(!ik.has_key());
    assert_eq!(ik.key_type(), None);
    assert_eq!(ik.key_name(), None);

    let err = ik.untyped_key(&NoKey::default()).unwrap_err();
    assert!(matches!(err, IdentityError::IdentityNotDefined { .. }));
    assert!(err.to_string().starts_with("Identity key not defined for type: "));
}

#[test]
fn typed_request_without_key_fails() {
    let err = typed_identity_key::<NoKey, String>().unwrap_err();
    assert_eq!(err, IdentityError::not_defined::<NoKey>());
}

#[test]
fn typed_request_with_wrong_type_fails() {
    let err = typed_identity_key::<My, u64>().unwrap_err();
    match err {
        IdentityError::IdentityTypeMismatch {
            key_name,
            declared,
            requested,
            ..
        } => {
            assert_eq!(key_name, "tag");
            assert_eq!(declared, std::any::type_name::<String>());
            assert_eq!(requested, "u64");
        }
        other => panic!("unexpected error: {other}"),
    }

    // The mismatch does not poison the cached binding.
    assert!(typed_identity_key::<My, String>().is_ok());
}

#[test]
fn untyped_key_boxes_the_typed_value() {
    let ik = identity_key::<My>().unwrap();
    let my = My {
        name: "a".into(),
        tag: "42".into(),
    };
    let key = ik.untyped_key(&my).unwrap();
    assert_eq!(key.downcast_ref::<String>().map(String::as_str), Some("42"));
}

#[test]
fn repeated_requests_return_equal_accessors() {
    let first = identity_key::<My>().unwrap();
    let second = identity_key::<My>().unwrap();
    assert!(*first == *second);
    assert!(Arc::ptr_eq(&first, &second));

    let typed_first = typed_identity_key::<My, String>().unwrap();
    let typed_second = typed_identity_key::<My, String>().unwrap();
    assert_eq!(typed_first, typed_second);
    assert!(Arc::ptr_eq(&typed_first, &typed_second));
}

#[test]
fn generator_key_reads_through_the_cache() {
    let generator = IdentityKeyGenerator::default();
    let my = My {
        name: "n".into(),
        tag: "t".into(),
    };
    assert_eq!(generator.key::<My, String>(&my).unwrap(), "t");
    let untyped = generator.untyped_key(&my).unwrap();
    assert_eq!(untyped.downcast_ref::<String>().map(String::as_str), Some("t"));
    assert_eq!(generator.len(), 1);
    assert_eq!(
        generator.generated_names(),
        vec![format!("{}IdentityKey", std::any::type_name::<My>())]
    );
}
