use prototyper_core::{Error, ModelError, ObjectId, RegistryError};
use prototyper_designer::document::Document;
use prototyper_designer::model::ObjectKind;

fn id(s: &str) -> ObjectId {
    ObjectId::new(s)
}

fn page_with(ids: &[&str]) -> Document {
    let mut doc = Document::new();
    for name in ids {
        doc.create_element(ObjectKind::Button, Some(id(name))).unwrap();
    }
    doc
}

#[test]
fn test_create_element_rejects_live_id() {
    let mut doc = page_with(&["a"]);
    let err = doc.create_element(ObjectKind::Line, Some(id("a"))).unwrap_err();
    assert!(matches!(
        err,
        Error::Registry(RegistryError::DuplicateId { .. })
    ));
    assert_eq!(doc.object_count(), 1);
}

#[test]
fn test_created_objects_stack_upwards() {
    let doc = page_with(&["a", "b", "c"]);
    assert_eq!(doc.draw_order(), vec![id("a"), id("b"), id("c")]);
    assert_eq!(doc.z_range(), Some((0.0, 2.0)));
}

#[test]
fn test_group_and_ungroup_restore_page() {
    let mut doc = page_with(&["a", "b", "c"]);
    let g = doc
        .group(&[id("a"), id("b"), id("c")], Some(id("g")))
        .unwrap();
    assert_eq!(g, id("g"));
    assert_eq!(doc.top_level(), &[id("g")]);
    assert_eq!(doc.parent_of(&id("b")), Some(&id("g")));
    assert_eq!(doc.find(&g).unwrap().z, 2.0);
    assert_eq!(doc.children_of(&g), vec![id("a"), id("b"), id("c")]);

    let members = doc.ungroup(&g).unwrap();
    assert_eq!(members, vec![id("a"), id("b"), id("c")]);
    assert_eq!(doc.top_level(), &[id("a"), id("b"), id("c")]);
    assert!(!doc.contains(&g));
    assert!(doc.parent_of(&id("a")).is_none());
}

#[test]
fn test_group_takes_first_member_slot() {
    let mut doc = page_with(&["a", "b", "c", "d"]);
    doc.group(&[id("b"), id("d")], Some(id("g"))).unwrap();
    assert_eq!(doc.top_level(), &[id("a"), id("g"), id("c")]);
}

#[test]
fn test_group_errors() {
    let mut doc = page_with(&["a"]);
    let err = doc.group(&[], None).unwrap_err();
    assert!(matches!(err, Error::Model(ModelError::EmptyGroup)));

    let err = doc.group(&[id("a"), id("missing")], None).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(doc.top_level(), &[id("a")]);

    let err = doc.group(&[id("a")], Some(id("a"))).unwrap_err();
    assert!(matches!(
        err,
        Error::Registry(RegistryError::DuplicateId { .. })
    ));
}

#[test]
fn test_ungroup_rejects_non_group() {
    let mut doc = page_with(&["a"]);
    let err = doc.ungroup(&id("a")).unwrap_err();
    assert!(err.is_variant_mismatch());
}

#[test]
fn test_nested_ungroup_hands_members_to_outer_group() {
    let mut doc = page_with(&["a", "b", "c"]);
    doc.group(&[id("a"), id("b")], Some(id("inner"))).unwrap();
    doc.group(&[id("inner"), id("c")], Some(id("outer"))).unwrap();

    doc.ungroup(&id("inner")).unwrap();
    assert_eq!(doc.children_of(&id("outer")), vec![id("a"), id("b"), id("c")]);
    assert_eq!(doc.parent_of(&id("a")), Some(&id("outer")));
}

#[test]
fn test_deleting_group_deletes_members() {
    let mut doc = page_with(&["a", "b", "c"]);
    doc.group(&[id("a"), id("b")], Some(id("g"))).unwrap();

    let removed = doc.delete_items(&[id("g")]);
    assert_eq!(removed.len(), 3);
    assert_eq!(removed.last().unwrap().object.object_id(), &id("g"));
    assert_eq!(doc.object_count(), 1);
    assert_eq!(doc.top_level(), &[id("c")]);

    for snapshot in removed.iter().rev() {
        doc.restore(snapshot).unwrap();
    }
    assert_eq!(doc.top_level(), &[id("g"), id("c")]);
    assert_eq!(doc.children_of(&id("g")), vec![id("a"), id("b")]);
}

#[test]
fn test_deleting_last_member_removes_group() {
    let mut doc = page_with(&["a", "b"]);
    doc.group(&[id("a"), id("b")], Some(id("g"))).unwrap();

    let first = doc.delete_items(&[id("a")]);
    assert_eq!(first.len(), 1);
    assert_eq!(doc.children_of(&id("g")), vec![id("b")]);

    let second = doc.delete_items(&[id("b")]);
    assert_eq!(second.len(), 2);
    assert!(!doc.contains(&id("g")));
    assert!(doc.top_level().is_empty());

    for snapshot in second.iter().rev().chain(first.iter().rev()) {
        doc.restore(snapshot).unwrap();
    }
    assert_eq!(doc.top_level(), &[id("g")]);
    assert_eq!(doc.children_of(&id("g")), vec![id("a"), id("b")]);
}

#[test]
fn test_delete_skips_missing_ids() {
    let mut doc = page_with(&["a"]);
    let removed = doc.delete_items(&[id("missing"), id("a")]);
    assert_eq!(removed.len(), 1);
    assert_eq!(doc.object_count(), 0);
}

#[test]
fn test_restore_fails_when_id_is_live_again() {
    let mut doc = page_with(&["a"]);
    let removed = doc.delete_items(&[id("a")]);
    doc.create_element(ObjectKind::Line, Some(id("a"))).unwrap();
    assert!(doc.restore(&removed[0]).is_err());
}

#[test]
fn test_duplicate_group_copies_members() {
    let mut doc = page_with(&["a", "b"]);
    doc.group(&[id("a"), id("b")], Some(id("g"))).unwrap();

    let copy = doc.duplicate(&id("g"), 10.0, 10.0).unwrap();
    assert_ne!(copy, id("g"));
    assert_eq!(doc.object_count(), 6);
    assert_eq!(doc.top_level(), &[id("g"), copy.clone()]);

    let copied_members = doc.children_of(&copy);
    assert_eq!(copied_members.len(), 2);
    for member in &copied_members {
        assert_ne!(member, &id("a"));
        assert_ne!(member, &id("b"));
        assert_eq!(doc.parent_of(member), Some(&copy));
        let position = doc.find(member).unwrap().position();
        assert_eq!((position.x, position.y), (10.0, 10.0));
    }
    assert_eq!(doc.find(&copy).unwrap().z, 2.0);
}

#[test]
fn test_active_target_is_exclusive() {
    let mut doc = Document::new();
    let line = doc.create_element(ObjectKind::Line, None).unwrap();
    doc.set_current_line(&line);
    assert_eq!(doc.current_line(), Some(&line));

    doc.set_current_polyline(&line);
    assert!(doc.current_line().is_none());
    assert_eq!(doc.current_polyline(), Some(&line));

    doc.delete_items(&[line]);
    assert!(doc.active_target().is_none());
}
