//! Name collision handling
//!
//! Bookmarks sharing a base name are told apart by appending their path:
//! `README <= /home/me/a/README`. An annotation is added to every member
//! of a collision when a new bookmark joins it, and removed again once a
//! base name is unique. After [`insert`] or [`simplify`] a record is
//! un-annotated exactly when its base name is unique in the list.
//!
//! Everything here works on a borrowed snapshot and returns a new list in
//! the same order, so it can be tested without touching the disk.

use std::collections::HashMap;
use std::path::Path;

use crate::consts::ANNOTATION_SEPARATOR;
use crate::utils::{debug_log, to_slash};

use super::types::Bookmark;

/// Display name with any annotation suffix removed
pub(crate) fn base_name(name: &str) -> &str {
    match name.split_once(ANNOTATION_SEPARATOR) {
        Some((base, _)) => base,
        None => name,
    }
}

pub(crate) fn is_annotated(name: &str) -> bool {
    name.contains(ANNOTATION_SEPARATOR)
}

/// `"<base> <= <path>"` with the path slash-normalized
pub(crate) fn annotated_name(base: &str, path: &Path) -> String {
    format!("{base}{ANNOTATION_SEPARATOR}{}", to_slash(path))
}

/// Annotate every existing record whose base name equals `name`.
///
/// Returns the rewritten records and whether any collision was found.
/// Records that already carry an annotation are left as they are.
pub(crate) fn annotate(records: &[Bookmark], name: &str) -> (Vec<Bookmark>, bool) {
    let mut collided = false;
    let annotated = records
        .iter()
        .map(|bm| {
            if bm.base_name() != name {
                return bm.clone();
            }
            collided = true;
            if bm.is_annotated() {
                bm.clone()
            } else {
                debug_log!("annotating existing bookmark {:?}", bm.name);
                Bookmark::new(annotated_name(bm.base_name(), &bm.path), bm.path.clone())
            }
        })
        .collect();
    (annotated, collided)
}

/// Append `bookmark`, annotating it and its namesakes if its name collides
pub(crate) fn insert(records: &[Bookmark], bookmark: Bookmark) -> Vec<Bookmark> {
    let (mut out, collided) = annotate(records, &bookmark.name);
    let name = if collided {
        annotated_name(&bookmark.name, &bookmark.path)
    } else {
        bookmark.name
    };
    out.push(Bookmark::new(name, bookmark.path));
    out
}

/// Strip annotations from records whose base name is no longer shared
pub(crate) fn simplify(records: &[Bookmark]) -> Vec<Bookmark> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for bm in records {
        *counts.entry(bm.base_name()).or_default() += 1;
    }

    records
        .iter()
        .map(|bm| {
            let base = bm.base_name();
            if bm.is_annotated() && counts.get(base) == Some(&1) {
                debug_log!("simplifying {:?} to {:?}", bm.name, base);
                Bookmark::new(base, bm.path.clone())
            } else {
                bm.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(records: &[Bookmark]) -> Vec<&str> {
        records.iter().map(|bm| bm.name.as_str()).collect()
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("README"), "README");
        assert_eq!(base_name("README <= /a/README"), "README");
        assert_eq!(base_name("a <= b <= c"), "a");
        // Separator needs the surrounding spaces
        assert_eq!(base_name("x<=y"), "x<=y");
    }

    #[test]
    fn test_insert_without_collision_appends_plain() {
        let records = vec![Bookmark::new("notes", "/home/notes")];
        let out = insert(&records, Bookmark::new("todo", "/home/todo"));
        assert_eq!(names(&out), vec!["notes", "todo"]);
    }

    #[test]
    fn test_insert_collision_annotates_both() {
        let records = vec![Bookmark::new("README", "/a/README")];
        let out = insert(&records, Bookmark::new("README", "/b/README"));
        assert_eq!(
            names(&out),
            vec!["README <= /a/README", "README <= /b/README"]
        );
    }

    #[test]
    fn test_insert_custom_name_uses_that_name_in_annotation() {
        let records = vec![Bookmark::new("proj", "/work/alpha")];
        let out = insert(&records, Bookmark::new("proj", "/work/beta"));
        assert_eq!(names(&out), vec!["proj <= /work/alpha", "proj <= /work/beta"]);
    }

    #[test]
    fn test_insert_third_collision_keeps_existing_annotations() {
        let records = vec![
            Bookmark::new("README <= /a/README", "/a/README"),
            Bookmark::new("README <= /b/README", "/b/README"),
        ];
        let out = insert(&records, Bookmark::new("README", "/c/README"));
        assert_eq!(
            names(&out),
            vec![
                "README <= /a/README",
                "README <= /b/README",
                "README <= /c/README"
            ]
        );
    }

    #[test]
    fn test_annotate_is_idempotent() {
        let records = vec![Bookmark::new("README", "/a/README")];
        let (once, collided) = annotate(&records, "README");
        assert!(collided);
        let (twice, _) = annotate(&once, "README");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_annotate_no_collision_leaves_records() {
        let records = vec![Bookmark::new("README", "/a/README")];
        let (out, collided) = annotate(&records, "LICENSE");
        assert!(!collided);
        assert_eq!(out, records);
    }

    #[test]
    fn test_simplify_strips_unique_annotation() {
        let records = vec![
            Bookmark::new("README <= /a/README", "/a/README"),
            Bookmark::new("notes", "/notes"),
        ];
        let out = simplify(&records);
        assert_eq!(names(&out), vec!["README", "notes"]);
        assert_eq!(out[0].path, records[0].path);
    }

    #[test]
    fn test_simplify_keeps_shared_annotations() {
        let records = vec![
            Bookmark::new("README <= /a/README", "/a/README"),
            Bookmark::new("README <= /b/README", "/b/README"),
        ];
        assert_eq!(simplify(&records), records);
    }

    #[test]
    fn test_unannotated_iff_unique_after_insert_sequence() {
        let adds = [
            ("README", "/a/README"),
            ("notes", "/notes"),
            ("README", "/b/README"),
            ("src", "/x/src"),
            ("README", "/c/README"),
        ];
        let mut records = Vec::new();
        for (name, path) in adds {
            records = insert(&records, Bookmark::new(name, path));
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for bm in &records {
            *counts.entry(bm.base_name()).or_default() += 1;
        }
        for bm in &records {
            assert_eq!(bm.is_annotated(), counts[bm.base_name()] > 1, "{}", bm.name);
        }
    }
}
