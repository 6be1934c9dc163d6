use anyhow::{bail, Result};
use fluentlist::testing::*;
use fluentlist::*;

#[test]
fn try_map_all_ok() -> Result<()> {
    let parsed = FluentList::from(vec!["1", "22", "333"]).try_map(|s| Ok(s.parse::<u32>()?))?;
    assert_lists_equal(&parsed, &[1, 22, 333]);
    Ok(())
}

#[test]
fn try_map_fails_fast_with_index() {
    let err = FluentList::from(vec!["1", "x", "y"])
        .try_map(|s| Ok(s.parse::<u32>()?))
        .unwrap_err();
    assert_eq!(err.to_string(), "element 1 failed");
    assert!(err.chain().count() >= 2);
}

#[test]
fn try_for_each_item_stops_on_error() {
    let mut seen = Vec::new();
    let res = FluentList::int_range(0, 10).try_for_each_item(|x| {
        if *x == 3 {
            bail!("three");
        }
        seen.push(*x);
        Ok(())
    });
    assert!(res.is_err());
    assert_eq!(seen, vec![0, 1, 2]);
}

#[test]
fn collect_fail_fast_unwraps_results() -> Result<()> {
    let ok = FluentList::from(vec!["4", "5"])
        .map(|s| s.parse::<i64>())
        .collect_fail_fast()?;
    assert_lists_equal(&ok, &[4, 5]);

    let bad = FluentList::from(vec!["4", "nope"])
        .map(|s| s.parse::<i64>())
        .collect_fail_fast();
    assert!(bad.is_err());
    Ok(())
}
