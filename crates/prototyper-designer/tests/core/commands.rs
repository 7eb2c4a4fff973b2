use prototyper_core::{
    shared, Brush, Color, Font, ObjectId, Pen, PenStyle, Point, Segment, Shared, TextAlignment,
    TextStyle,
};
use prototyper_designer::commands::{
    AddLineToPolyline, ChangeBrush, ChangeCheckState, ChangeLine, ChangePen, ChangeTextOnForm,
    ChangeTextWithOpts, ChangeZ, DeleteItems, DesignerCommand, Duplicate, EditPolyNode,
    GroupItems, RecordedCommand, UngroupItems,
};
use prototyper_designer::document::Document;
use prototyper_designer::mode::{EditMode, ModeController, ModeTracker};
use prototyper_designer::model::{EditableObject, ObjectKind};

fn id(s: &str) -> ObjectId {
    ObjectId::new(s)
}

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::from_coords(x1, y1, x2, y2)
}

/// Records `command` the way the undo stack does, including the push redo.
fn push(command: DesignerCommand, doc: &mut Document) -> (RecordedCommand, Shared<ModeTracker>) {
    let tracker = shared(ModeTracker::new());
    let controller: Shared<dyn ModeController> = tracker.clone();
    let mut cmd = RecordedCommand::new(command, controller);
    cmd.redo(doc);
    (cmd, tracker)
}

/// Every live object sorted by id, plus the page list.
fn snapshot(doc: &Document) -> (Vec<EditableObject>, Vec<ObjectId>) {
    let mut objects: Vec<EditableObject> = doc.registry().iter().cloned().collect();
    objects.sort_by(|a, b| a.object_id().cmp(b.object_id()));
    (objects, doc.top_level().to_vec())
}

/// Pushes, then checks push is inert and undo/redo round-trips.
fn assert_round_trip(before: (Vec<EditableObject>, Vec<ObjectId>), command: DesignerCommand, doc: &mut Document) {
    let after = snapshot(doc);
    let (mut cmd, _) = push(command, doc);
    assert_eq!(snapshot(doc), after, "push must not re-apply");
    assert!(!cmd.was_undone_at_least_once());

    cmd.undo(doc);
    assert_eq!(snapshot(doc), before, "undo must restore prior state");
    assert!(cmd.was_undone_at_least_once());

    cmd.redo(doc);
    assert_eq!(snapshot(doc), after, "redo must restore edited state");
}

#[test]
fn test_change_pen_round_trip() {
    let mut doc = Document::new();
    let b = doc.create_element(ObjectKind::Button, None).unwrap();
    let before = snapshot(&doc);

    let old_pen = doc.find(&b).unwrap().pen();
    let new_pen = Pen::new(Color::rgb(0, 0, 255), 3.0, PenStyle::Dot);
    doc.find_mut(&b).unwrap().set_object_pen(new_pen);

    assert_round_trip(
        before,
        DesignerCommand::ChangePen(ChangePen::new(b, old_pen, new_pen)),
        &mut doc,
    );
}

#[test]
fn test_change_brush_round_trip() {
    let mut doc = Document::new();
    let s = doc.create_element(ObjectKind::Styled, None).unwrap();
    let before = snapshot(&doc);

    let old_brush = doc.find(&s).unwrap().brush();
    let new_brush = Brush::solid(Color::rgb(10, 200, 10));
    doc.find_mut(&s).unwrap().set_object_brush(new_brush);

    assert_round_trip(
        before,
        DesignerCommand::ChangeBrush(ChangeBrush::new(s, old_brush, new_brush)),
        &mut doc,
    );
}

#[test]
fn test_change_line_round_trip() {
    let mut doc = Document::new();
    let l = doc.add_line(None, seg(0.0, 0.0, 10.0, 0.0)).unwrap();
    doc.show_handles(&l);
    let before = snapshot(&doc);

    doc.find_mut(&l)
        .unwrap()
        .as_line_mut()
        .unwrap()
        .set_line(seg(1.0, 1.0, 5.0, 9.0));

    assert_round_trip(
        before,
        DesignerCommand::ChangeLine(ChangeLine::new(
            l.clone(),
            seg(0.0, 0.0, 10.0, 0.0),
            seg(1.0, 1.0, 5.0, 9.0),
        )),
        &mut doc,
    );
    let object = doc.find(&l).unwrap();
    assert!(object.handles_visible);
    assert_eq!(
        object.handle_points(),
        vec![Point::new(1.0, 1.0), Point::new(5.0, 9.0)]
    );
}

#[test]
fn test_change_check_state_round_trip() {
    let mut doc = Document::new();
    let c = doc.create_element(ObjectKind::CheckBox, None).unwrap();
    let before = snapshot(&doc);

    doc.find_mut(&c).unwrap().set_checked(true).unwrap();

    assert_round_trip(
        before,
        DesignerCommand::ChangeCheckState(ChangeCheckState::new(c, true)),
        &mut doc,
    );
}

#[test]
fn test_change_z_round_trip() {
    let mut doc = Document::new();
    let a = doc.create_element(ObjectKind::Button, None).unwrap();
    let b = doc.create_element(ObjectKind::Button, None).unwrap();
    let before = snapshot(&doc);

    doc.set_z(&a, 5.0);
    doc.set_z(&b, -1.0);

    assert_round_trip(
        before,
        DesignerCommand::ChangeZ(ChangeZ::new(
            vec![(a.clone(), 0.0), (b.clone(), 1.0)],
            vec![(a, 5.0), (b, -1.0)],
        )),
        &mut doc,
    );
}

#[test]
fn test_change_text_style_round_trip() {
    let mut doc = Document::new();
    let spin = doc.create_element(ObjectKind::SpinBox, None).unwrap();
    let before = snapshot(&doc);

    let old_style = doc.find(&spin).unwrap().text_style().cloned().unwrap();
    let new_style = TextStyle {
        font: Font {
            family: "Serif".to_string(),
            point_size: 14.0,
            bold: true,
            ..Font::default()
        },
        alignment: TextAlignment::Center,
        color: Color::rgb(90, 90, 90),
    };
    doc.find_mut(&spin)
        .unwrap()
        .set_text_style(new_style.clone())
        .unwrap();

    assert_round_trip(
        before,
        DesignerCommand::ChangeTextWithOpts(ChangeTextWithOpts::new(spin, old_style, new_style)),
        &mut doc,
    );
}

#[test]
fn test_change_text_delegates_to_text_log() {
    let mut doc = Document::new();
    let b = doc.create_element(ObjectKind::Button, None).unwrap();
    doc.find_mut(&b)
        .unwrap()
        .text_document_mut()
        .unwrap()
        .set_text("Submit");

    let (mut cmd, _) = push(
        DesignerCommand::ChangeTextOnForm(ChangeTextOnForm::new(b.clone())),
        &mut doc,
    );
    let text = |doc: &Document| doc.find(&b).unwrap().text_document().unwrap().text().to_string();
    assert_eq!(text(&doc), "Submit");

    cmd.undo(&mut doc);
    assert_eq!(text(&doc), "Button");
    cmd.redo(&mut doc);
    assert_eq!(text(&doc), "Submit");
}

#[test]
fn test_edit_poly_node_round_trip() {
    let mut doc = Document::new();
    let p = doc.add_line(None, seg(0.0, 0.0, 10.0, 0.0)).unwrap();
    doc.append_segment(&p, seg(10.0, 0.0, 10.0, 10.0)).unwrap();
    let before = snapshot(&doc);

    let polyline = doc.find(&p).unwrap().as_polyline().unwrap();
    let old = polyline.adjacent_segments(1).unwrap();
    let new = polyline
        .dragged_node(1, Point::new(8.0, 3.0))
        .unwrap();
    doc.move_node(&p, 1, new).unwrap();

    assert_round_trip(
        before,
        DesignerCommand::EditPolyNode(EditPolyNode::new(p, 1, old, new)),
        &mut doc,
    );
}

/// Drags node `index` of polyline `p` to `to` and returns the command.
fn drag_node(doc: &mut Document, p: &ObjectId, index: usize, to: Point) -> DesignerCommand {
    let polyline = doc.find(p).unwrap().as_polyline().unwrap();
    let old = polyline.adjacent_segments(index).unwrap();
    let new = polyline.dragged_node(index, to).unwrap();
    doc.move_node(p, index, new).unwrap();
    DesignerCommand::EditPolyNode(EditPolyNode::new(p.clone(), index, old, new))
}

#[test]
fn test_edit_poly_node_open_endpoint_round_trip() {
    let mut doc = Document::new();
    let p = doc.add_line(None, seg(0.0, 0.0, 10.0, 0.0)).unwrap();
    doc.append_segment(&p, seg(10.0, 0.0, 10.0, 10.0)).unwrap();
    let before = snapshot(&doc);

    let command = drag_node(&mut doc, &p, 0, Point::new(-5.0, 2.0));
    assert_eq!(
        doc.find(&p).unwrap().as_polyline().unwrap().lines(),
        &[seg(-5.0, 2.0, 10.0, 0.0), seg(10.0, 0.0, 10.0, 10.0)]
    );

    assert_round_trip(before, command, &mut doc);
}

#[test]
fn test_edit_poly_node_closed_first_node_wraps() {
    let mut doc = Document::new();
    let p = doc.add_line(None, seg(0.0, 0.0, 10.0, 0.0)).unwrap();
    doc.append_segment(&p, seg(10.0, 0.0, 5.0, 8.0)).unwrap();
    doc.append_segment(&p, seg(5.0, 8.0, 0.0, 0.0)).unwrap();
    assert!(doc.find(&p).unwrap().as_polyline().unwrap().is_closed());
    let before = snapshot(&doc);

    let command = drag_node(&mut doc, &p, 0, Point::new(1.0, -2.0));
    let polyline = doc.find(&p).unwrap().as_polyline().unwrap();
    assert!(polyline.is_closed());
    assert_eq!(
        polyline.lines(),
        &[
            seg(1.0, -2.0, 10.0, 0.0),
            seg(10.0, 0.0, 5.0, 8.0),
            seg(5.0, 8.0, 1.0, -2.0),
        ]
    );

    assert_round_trip(before, command, &mut doc);
}

#[test]
fn test_edit_poly_node_closing_drag_round_trip() {
    let mut doc = Document::new();
    let p = doc.add_line(None, seg(0.0, 0.0, 10.0, 0.0)).unwrap();
    doc.append_segment(&p, seg(10.0, 0.0, 10.0, 10.0)).unwrap();
    let before = snapshot(&doc);

    let command = drag_node(&mut doc, &p, 2, Point::new(0.0, 0.0));
    let polyline = doc.find(&p).unwrap().as_polyline().unwrap();
    assert!(polyline.is_closed());
    assert_eq!(polyline.node_count(), 2);

    assert_round_trip(before.clone(), command.clone(), &mut doc);

    // Undo once more from the closed state to check the open chain returns.
    let (mut cmd, _) = push(command, &mut doc);
    cmd.undo(&mut doc);
    assert_eq!(snapshot(&doc), before);
    let polyline = doc.find(&p).unwrap().as_polyline().unwrap();
    assert!(!polyline.is_closed());
    assert_eq!(
        doc.find(&p).unwrap().handle_points(),
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)]
    );
}

#[test]
fn test_add_line_collapse_keeps_identifier() {
    let mut doc = Document::new();
    let l1 = doc
        .add_line(Some(id("L1")), seg(0.0, 0.0, 10.0, 0.0))
        .unwrap();
    doc.append_segment(&l1, seg(10.0, 0.0, 10.0, 10.0)).unwrap();

    let (mut cmd, tracker) = push(
        DesignerCommand::AddLineToPolyline(AddLineToPolyline::new(
            l1.clone(),
            seg(10.0, 0.0, 10.0, 10.0),
        )),
        &mut doc,
    );
    assert_eq!(tracker.borrow().mode(), EditMode::Polyline);
    assert_eq!(
        doc.find(&l1).unwrap().as_polyline().unwrap().count_of_lines(),
        2
    );

    cmd.undo(&mut doc);
    let object = doc.find(&l1).unwrap();
    assert_eq!(object.as_line().unwrap().line(), seg(0.0, 0.0, 10.0, 0.0));
    assert_eq!(doc.current_line(), Some(&l1));
    assert_eq!(tracker.borrow().mode(), EditMode::Polyline);

    cmd.redo(&mut doc);
    assert_eq!(
        doc.find(&l1).unwrap().as_polyline().unwrap().count_of_lines(),
        2
    );
    assert_eq!(doc.current_polyline(), Some(&l1));
}

#[test]
fn test_group_command_inverse() {
    let mut doc = Document::new();
    for name in ["A", "B", "C"] {
        doc.create_element(ObjectKind::Button, Some(id(name))).unwrap();
    }
    let before = snapshot(&doc);
    let members = vec![id("A"), id("B"), id("C")];
    let g = doc.group(&members, Some(id("G"))).unwrap();

    let (mut cmd, tracker) = push(
        DesignerCommand::Group(GroupItems::new(g.clone(), doc.children_of(&g))),
        &mut doc,
    );
    cmd.undo(&mut doc);
    assert_eq!(snapshot(&doc), before);
    assert_eq!(doc.top_level(), members.as_slice());
    assert!(!doc.contains(&g));

    cmd.redo(&mut doc);
    assert_eq!(doc.children_of(&g), members);
    assert_eq!(doc.top_level(), &[g]);
    assert_eq!(tracker.borrow().mode(), EditMode::Select);
}

#[test]
fn test_group_undo_uses_live_children() {
    let mut doc = Document::new();
    for name in ["A", "B", "C"] {
        doc.create_element(ObjectKind::Button, Some(id(name))).unwrap();
    }
    let g = doc.group(&[id("A"), id("B"), id("C")], Some(id("G"))).unwrap();
    let (mut cmd, _) = push(
        DesignerCommand::Group(GroupItems::new(g.clone(), doc.children_of(&g))),
        &mut doc,
    );

    doc.delete_items(&[id("B")]);
    cmd.undo(&mut doc);
    assert_eq!(doc.top_level(), &[id("A"), id("C")]);

    cmd.redo(&mut doc);
    assert_eq!(doc.children_of(&g), vec![id("A"), id("C")]);
}

#[test]
fn test_ungroup_command_skips_deleted_member() {
    let mut doc = Document::new();
    for name in ["A", "B", "C"] {
        doc.create_element(ObjectKind::Button, Some(id(name))).unwrap();
    }
    let g = doc.group(&[id("A"), id("B"), id("C")], Some(id("G"))).unwrap();
    let members = doc.ungroup(&g).unwrap();
    let (mut cmd, _) = push(
        DesignerCommand::Ungroup(UngroupItems::new(members, g.clone())),
        &mut doc,
    );
    assert!(!doc.contains(&g));

    doc.delete_items(&[id("B")]);
    cmd.undo(&mut doc);
    assert_eq!(doc.children_of(&g), vec![id("A"), id("C")]);

    cmd.redo(&mut doc);
    assert!(!doc.contains(&g));
    assert_eq!(doc.top_level(), &[id("A"), id("C")]);
}

#[test]
fn test_change_z_skips_deleted_ids() {
    let mut doc = Document::new();
    for name in ["X", "Y", "Z"] {
        doc.create_element(ObjectKind::Styled, Some(id(name))).unwrap();
    }
    let old = vec![(id("X"), 0.0), (id("Y"), 1.0), (id("Z"), 2.0)];
    let new = vec![(id("X"), 10.0), (id("Y"), 11.0), (id("Z"), 12.0)];
    for (target, z) in &new {
        doc.set_z(target, *z);
    }
    let (mut cmd, _) = push(DesignerCommand::ChangeZ(ChangeZ::new(old, new)), &mut doc);

    doc.delete_items(&[id("Y")]);
    cmd.undo(&mut doc);
    assert_eq!(doc.find(&id("X")).unwrap().z, 0.0);
    assert_eq!(doc.find(&id("Z")).unwrap().z, 2.0);
    assert!(!doc.contains(&id("Y")));
}

#[test]
fn test_duplicate_redo_mints_fresh_ids() {
    let mut doc = Document::new();
    let a = doc.create_element(ObjectKind::Button, None).unwrap();
    let copy = doc.duplicate(&a, 10.0, 10.0).unwrap();

    let (mut cmd, _) = push(
        DesignerCommand::Duplicate(Duplicate::new(vec![a.clone()], vec![copy.clone()], 10.0)),
        &mut doc,
    );
    assert_eq!(doc.object_count(), 2);

    let mut seen = vec![copy];
    for _ in 0..3 {
        cmd.undo(&mut doc);
        assert_eq!(doc.object_count(), 1);
        cmd.redo(&mut doc);
        assert_eq!(doc.object_count(), 2);

        let DesignerCommand::Duplicate(dup) = cmd.command() else {
            panic!("expected a duplicate command");
        };
        let fresh = dup.duplicate_ids[0].clone();
        assert_ne!(fresh, a);
        assert!(!seen.contains(&fresh));
        let position = doc.find(&fresh).unwrap().position();
        assert_eq!((position.x, position.y), (10.0, 10.0));
        seen.push(fresh);
    }
}

#[test]
fn test_delete_command_restores_structure() {
    let mut doc = Document::new();
    for name in ["A", "B", "C"] {
        doc.create_element(ObjectKind::Button, Some(id(name))).unwrap();
    }
    doc.group(&[id("A"), id("B")], Some(id("G"))).unwrap();
    let before = snapshot(&doc);

    let ids = vec![id("G"), id("C")];
    let removed = doc.delete_items(&ids);
    assert_eq!(doc.object_count(), 0);

    assert_round_trip(
        before,
        DesignerCommand::DeleteItems(DeleteItems::new(ids, removed)),
        &mut doc,
    );
}

#[test]
fn test_dangling_target_is_a_no_op() {
    let mut doc = Document::new();
    let b = doc.create_element(ObjectKind::Button, None).unwrap();
    let (mut cmd, _) = push(
        DesignerCommand::ChangePen(ChangePen::new(b.clone(), Pen::default(), Pen::default())),
        &mut doc,
    );
    doc.delete_items(&[b]);

    let before = snapshot(&doc);
    cmd.undo(&mut doc);
    cmd.redo(&mut doc);
    assert_eq!(snapshot(&doc), before);
}

#[test]
fn test_variant_mismatch_is_a_no_op() {
    let mut doc = Document::new();
    let line = doc.add_line(None, seg(0.0, 0.0, 1.0, 1.0)).unwrap();
    let (mut cmd, _) = push(
        DesignerCommand::ChangeTextWithOpts(ChangeTextWithOpts::new(
            line,
            TextStyle::default(),
            TextStyle::default(),
        )),
        &mut doc,
    );

    let before = snapshot(&doc);
    cmd.undo(&mut doc);
    cmd.redo(&mut doc);
    assert_eq!(snapshot(&doc), before);
}

#[test]
fn test_every_undo_and_redo_switches_mode() {
    let mut doc = Document::new();
    let b = doc.create_element(ObjectKind::Button, None).unwrap();
    let (mut cmd, tracker) = push(
        DesignerCommand::ChangePen(ChangePen::new(b, Pen::default(), Pen::default())),
        &mut doc,
    );
    assert_eq!(tracker.borrow().switch_count(), 1);

    tracker.borrow_mut().set_mode(EditMode::Text);
    cmd.undo(&mut doc);
    assert_eq!(tracker.borrow().mode(), EditMode::Select);
    cmd.redo(&mut doc);
    assert_eq!(tracker.borrow().switch_count(), 3);
}

#[test]
fn test_labels() {
    let mut doc = Document::new();
    let b = doc.create_element(ObjectKind::Button, None).unwrap();
    let (cmd, _) = push(
        DesignerCommand::ChangeBrush(ChangeBrush::new(b.clone(), Brush::default(), Brush::default())),
        &mut doc,
    );
    assert_eq!(cmd.label(), "Change Brush");

    let command = DesignerCommand::EditPolyNode(EditPolyNode::new(
        b,
        0,
        Default::default(),
        Default::default(),
    ));
    assert_eq!(command.name(), "Edit Node");
    assert_eq!(command.mode(), EditMode::Polyline);
}
