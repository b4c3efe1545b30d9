//! Scan paging, filters and encodings

use serde_json::json;

use namedb::{Error, NameInfo};

use crate::common::{mine, names};

fn listed(entries: &[NameInfo]) -> Vec<String> {
    entries.iter().filter_map(|i| i.name.clone()).collect()
}

#[test]
fn scan_pages_through_all_names() {
    let names = names();
    for (i, name) in ["d/a", "d/b", "d/c", "d/d", "d/e"].iter().enumerate() {
        mine(&names, i as u32 + 1, name, "v", i as u8 + 1);
    }

    let mut seen = Vec::new();
    let mut start: Option<String> = None;
    loop {
        let page = names.name_scan(start.as_deref(), Some(2), None).unwrap();
        let skip = usize::from(start.is_some());
        seen.extend(listed(&page[skip.min(page.len())..]));
        if page.len() < 2 {
            break;
        }
        start = page.last().and_then(|i| i.name.clone());
    }
    assert_eq!(seen, vec!["d/a", "d/b", "d/c", "d/d", "d/e"]);
}

#[test]
fn scan_count_limits_matches_not_visits() {
    let names = names();
    mine(&names, 1, "a/1", "v", 1);
    mine(&names, 2, "d/1", "v", 2);
    mine(&names, 3, "b/2", "v", 3);
    mine(&names, 4, "d/2", "v", 4);

    let options = json!({"prefix": "d/"}).as_object().cloned();
    let page = names.name_scan(None, Some(2), options).unwrap();
    assert_eq!(listed(&page), vec!["d/1", "d/2"]);
}

#[test]
fn scan_confirmation_window() {
    let names = names();
    mine(&names, 10, "d/old", "v", 1);
    mine(&names, 19, "d/new", "v", 2);
    names.registry().set_height(20);

    // minConf 5 keeps records at height <= 16.
    let options = json!({"minConf": 5}).as_object().cloned();
    assert_eq!(listed(&names.name_scan(None, None, options).unwrap()), vec!["d/old"]);

    // maxConf 5 keeps records at height >= 16.
    let options = json!({"maxConf": 5}).as_object().cloned();
    assert_eq!(listed(&names.name_scan(None, None, options).unwrap()), vec!["d/new"]);
}

#[test]
fn scan_regexp_and_bad_options() {
    let names = names();
    mine(&names, 1, "d/alpha", "v", 1);
    mine(&names, 2, "d/beta", "v", 2);

    let options = json!({"regexp": "ph"}).as_object().cloned();
    assert_eq!(listed(&names.name_scan(None, None, options).unwrap()), vec!["d/alpha"]);

    let options = json!({"regexp": "("}).as_object().cloned();
    let err = names.name_scan(None, None, options).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { .. }));

    let options = json!({"maxConf": -1}).as_object().cloned();
    let err = names.name_scan(None, None, options).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidParameter {
            reason: "maxConf must not be negative".into()
        }
    );
}

#[test]
fn scan_zero_count_is_empty() {
    let names = names();
    mine(&names, 1, "d/a", "v", 1);
    assert!(names.name_scan(None, Some(0), None).unwrap().is_empty());
    assert!(names.name_scan(None, Some(-3), None).unwrap().is_empty());
}
