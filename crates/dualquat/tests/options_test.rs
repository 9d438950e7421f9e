//! Integration tests for options files and initialization.
//!
//! Initialization touches the process-wide options, so everything that does
//! so runs in a single test function.

use std::io::Write;

use dualquat::*;

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");

    let options = MathOptions::new()
        .with_precondition_policy(PreconditionPolicy::Permissive)
        .with_debug_space_after_each_value(false);
    save_options(&path, &options).unwrap();

    assert_eq!(load_options(&path).unwrap(), options);
}

#[test]
fn test_load_partial_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "precondition_policy": "permissive" }}"#).unwrap();

    let options = load_options(file.path()).unwrap();
    assert_eq!(options.precondition_policy, PreconditionPolicy::Permissive);
    assert!(options.debug_space_after_each_value);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_options(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
}

#[test]
fn test_load_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "precondition_policy": "lenient" }}"#).unwrap();

    let err = load_options(file.path()).unwrap_err();
    assert!(matches!(err, Error::Math(MathError::JsonError(_))));
}

#[test]
fn test_init_installs_options() {
    init();
    assert_eq!(MathOptions::current(), MathOptions::default());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "precondition_policy": "permissive", "debug_space_after_each_value": false }}"#
    )
    .unwrap();
    let options = init_from_file(file.path()).unwrap();
    assert_eq!(MathOptions::current(), options);
    assert_eq!(PreconditionPolicy::current(), PreconditionPolicy::Permissive);
    assert!(!DebugOutput::new().space_after_each_value());

    // Permissive handling returns the sentinel instead of panicking
    let scaled = DualQuaternion::<f64>::identity() * 2.0_f64;
    assert!(scaled.transform_point_normalized(DVec3::X).x.is_nan());

    // Options change through MathOptions, not through the state accessors
    MathOptions::current()
        .with_debug_space_after_each_value(true)
        .apply();
    assert!(DebugOutput::new().space_after_each_value());
    assert_eq!(PreconditionPolicy::current(), PreconditionPolicy::Permissive);

    reset_options();
    assert_eq!(MathOptions::current(), MathOptions::default());
}
