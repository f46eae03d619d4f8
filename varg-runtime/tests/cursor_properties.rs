use varg_runtime::{varargs, Activation, ArgValue, Cursor, VarargError, VarargResult};

fn take_int(ap: &mut Cursor<'_>) -> VarargResult<i64> {
    ap.arg::<i64>()
}

fn take_many(ap: &mut Cursor<'_>, k: usize) -> VarargResult<Vec<i64>> {
    (0..k).map(|_| ap.arg::<i64>()).collect()
}

#[test]
fn test_forwarded_cursor_advances_caller() {
    let va = varargs![5, 6, 7];
    let mut ap = va.start();

    assert_eq!(take_int(&mut ap), Ok(5));
    assert_eq!(ap.arg::<i64>(), Ok(6));
    assert_eq!(va.open_cursors(), 1);
}

#[test]
fn test_forwarded_extraction_of_k_slots() {
    let va = varargs![1, 2, 3, 4, 5];
    let mut ap = va.start();
    let before = ap.position();

    assert_eq!(take_many(&mut ap, 3), Ok(vec![1, 2, 3]));
    assert_eq!(ap.position(), before + 3);
    assert_eq!(ap.arg::<i64>(), Ok(4));
}

#[test]
fn test_duplicate_mid_sequence() {
    let va = varargs![1, 2, 3, 4, 5, 6];
    let mut ap = va.start();
    take_many(&mut ap, 2).unwrap();

    let mut aq = ap.duplicate();
    let from_ap = take_many(&mut ap, 3).unwrap();
    let from_aq = take_many(&mut aq, 3).unwrap();

    assert_eq!(from_ap, vec![3, 4, 5]);
    assert_eq!(from_ap, from_aq);
}

#[test]
fn test_interleaved_duplicates() {
    let va = varargs!["a", "b", "c"];
    let mut ap = va.start();
    let mut aq = ap.duplicate();

    assert_eq!(ap.arg::<&str>(), Ok("a"));
    assert_eq!(ap.arg::<&str>(), Ok("b"));
    assert_eq!(aq.arg::<&str>(), Ok("a"));
    assert_eq!(ap.arg::<&str>(), Ok("c"));
    assert_eq!(aq.arg::<&str>(), Ok("b"));
}

#[test]
fn test_extraction_past_end() {
    let va = varargs![1.5, 2.5];
    let mut ap = va.start();
    ap.arg::<f64>().unwrap();
    ap.arg::<f64>().unwrap();

    let err = ap.arg::<f64>().unwrap_err();
    assert_eq!(
        err,
        VarargError::OutOfArguments {
            index: 2,
            supplied: 2
        }
    );
    // repeated attempts keep failing the same way
    assert_eq!(ap.arg::<f64>(), Err(err));
}

#[test]
fn test_restart_any_number_of_times() {
    let va = varargs![1, "x", 2.0];
    let mut ap = va.start();

    for _ in 0..3 {
        assert_eq!(ap.arg::<i64>(), Ok(1));
        assert_eq!(ap.arg::<&str>(), Ok("x"));
        assert_eq!(ap.arg::<f64>(), Ok(2.0));
        ap.restart(&va).unwrap();
    }
    assert_eq!(va.args().first(), Some(&ArgValue::Int(1)));
}

#[test]
fn test_cursors_released_on_early_return() {
    fn first_two_texts(va: &Activation) -> VarargResult<(String, String)> {
        let mut ap = va.start();
        let _spare = ap.duplicate();
        let a = ap.arg::<String>()?;
        let b = ap.arg::<String>()?;
        Ok((a, b))
    }

    let va = varargs!["only", 3];
    assert!(first_two_texts(&va).is_err());
    assert_eq!(va.open_cursors(), 0);
}
