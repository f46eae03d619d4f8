use varg_format::{
    call_vprint, print, print_copied, print_restarted, render_to_string, render_with_defaults,
    vprint, Config, Interpreter, MalformedPolicy, RenderError, StringSink, WriteSink,
};
use varg_runtime::{sample_stddev, varargs, VarargError};

#[test]
fn test_mixed_template() {
    let va = varargs!["box", 3, 2.5];
    let out = render_with_defaults("%s has %d items and %f kg", &va).unwrap();
    assert_eq!(out, "box has 3 items and 2.5 kg");
}

#[test]
fn test_restart_is_byte_identical() {
    let va = varargs![3, 4];
    let mut sink = StringSink::new();
    print_restarted(&Interpreter::default(), &mut sink, "%d-%d", &va).unwrap();

    let out = sink.into_string();
    let (first, second) = out.split_at(out.len() / 2);
    assert_eq!(first, "3-4");
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_copy_then_forward() {
    let va = varargs!["a", 1, "b", 2];
    let interp = Interpreter::default();
    let mut sink = StringSink::new();

    let mut ap = va.start();
    vprint(&interp, &mut sink, "%s=%d ", &mut ap).unwrap();
    let mut aq = ap.duplicate();
    vprint(&interp, &mut sink, "%s=%d;", &mut ap).unwrap();
    vprint(&interp, &mut sink, "%s=%d!", &mut aq).unwrap();

    assert_eq!(sink.as_str(), "a=1 b=2;b=2!");
    assert_eq!(va.open_cursors(), 2);
    drop(aq);
    drop(ap);
    assert_eq!(va.open_cursors(), 0);
}

#[test]
fn test_print_copied_to_writer() {
    let va = varargs![7];
    let mut sink = WriteSink::new(Vec::new());
    print_copied(&Interpreter::default(), &mut sink, "<%i>", &va).unwrap();
    assert_eq!(sink.into_inner(), b"<7><7>");
}

#[test]
fn test_call_vprint_matches_print() {
    let va = varargs![10, 1.5];
    let interp = Interpreter::default();

    let mut direct = StringSink::new();
    print(&interp, &mut direct, "%d, %f\n", &va).unwrap();
    let mut forwarded = StringSink::new();
    call_vprint(&interp, &mut forwarded, "%d, %f\n", &va).unwrap();

    assert_eq!(direct.as_str(), forwarded.as_str());
}

#[test]
fn test_report_policy_from_config() {
    let config = Config {
        malformed_directive: MalformedPolicy::Report,
        ..Config::default()
    };
    let va = varargs![1];
    let err = render_to_string(&config, "%d%", &va).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Args(VarargError::MalformedDirective {
            position: 2,
            directive: None
        })
    ));
}

#[test]
fn test_stddev_scenario() {
    let va = varargs![2.0, 4.0, 4.0, 4.0];
    let sd = sample_stddev(4, &va).unwrap();
    assert!((sd - 0.8660).abs() < 1e-4);

    let empty = varargs![];
    assert_eq!(
        sample_stddev(0, &empty),
        Err(VarargError::InvalidArgumentCount { count: 0 })
    );
}

#[test]
fn test_config_discovery() {
    let root = tempfile::tempdir().unwrap();
    let nested = root.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();

    assert_eq!(Config::from_dir(&nested).unwrap(), Config::default());

    let config = Config {
        malformed_directive: MalformedPolicy::Report,
        ..Config::default()
    };
    config.save(root.path().join("varg.json")).unwrap();

    assert_eq!(Config::from_dir(&nested).unwrap(), config);
}

#[test]
fn test_invalid_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("varg.json");
    std::fs::write(&path, r#"{ "malformed_directive": "explode" }"#).unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid configuration"));
}
