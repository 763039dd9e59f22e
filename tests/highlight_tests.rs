// Host-side tests for the immediate highlight applicator in both rendering
// modes.

use graph_fx_web::{
    apply_highlight, ElementHandle, GraphElement, GraphElementType, Material, Rgb, VisMode,
};

fn flat_node(color: &str) -> ElementHandle {
    ElementHandle::from_element(GraphElement::new(color), GraphElementType::Node)
}

fn shaded_node(base: &str, opacity: f32) -> ElementHandle {
    let mut mat = Material::new(Rgb::from_hex(base).unwrap());
    mat.opacity = opacity;
    ElementHandle::from_element(GraphElement::shaded(base, mat), GraphElementType::Node)
}

#[test]
fn flat_apply_then_remove_restores_original_color() {
    let node = flat_node("#336699");
    let batch = [node.clone()];
    apply_highlight(&batch, Rgb::from_hex("#ffff00"), VisMode::TwoD);
    assert_eq!(node.element.borrow().color, "#ffff00");
    assert_eq!(node.element.borrow().prev_color.as_deref(), Some("#336699"));

    apply_highlight(&batch, None, VisMode::TwoD);
    assert_eq!(node.element.borrow().color, "#336699");
    assert!(node.element.borrow().prev_color.is_none());
}

#[test]
fn flat_remove_without_prior_apply_keeps_current_color() {
    let node = flat_node("#abcdef");
    apply_highlight(&[node.clone()], None, VisMode::TwoD);
    assert_eq!(node.element.borrow().color, "#abcdef");
}

#[test]
fn shaded_apply_sets_highlight_color_and_full_opacity() {
    let node = shaded_node("#446688", 0.6);
    apply_highlight(&[node.clone()], Rgb::from_hex("#ff0000"), VisMode::ThreeD);

    let el = node.element.borrow();
    let mat = el.render_obj.as_ref().unwrap().borrow();
    assert_eq!(mat.color, Rgb::from_hex("#ff0000").unwrap());
    assert_eq!(mat.opacity, 1.0);
    assert_eq!(el.prev_opacity, Some(0.6));
    // the base color string is untouched in 3D mode
    assert_eq!(el.color, "#446688");
}

#[test]
fn shaded_apply_then_remove_restores_base_color_and_opacity() {
    let node = shaded_node("#446688", 0.6);
    let batch = [node.clone()];
    apply_highlight(&batch, Rgb::from_hex("#ff0000"), VisMode::ThreeD);
    apply_highlight(&batch, None, VisMode::ThreeD);

    let el = node.element.borrow();
    let mat = el.render_obj.as_ref().unwrap().borrow();
    assert_eq!(mat.color, Rgb::from_hex("#446688").unwrap());
    assert_eq!(mat.opacity, 0.6);
    assert!(el.prev_opacity.is_none());
}

#[test]
fn shaded_element_without_render_object_is_skipped() {
    // no render object: 3D operations must leave the element untouched
    let node = flat_node("#112233");
    apply_highlight(&[node.clone()], Rgb::from_hex("#ffffff"), VisMode::ThreeD);

    let el = node.element.borrow();
    assert_eq!(el.color, "#112233");
    assert!(el.prev_color.is_none());
    assert!(el.prev_opacity.is_none());
}

#[test]
fn batch_covers_nodes_and_edges() {
    let node = flat_node("#111111");
    let edge = ElementHandle::from_element(GraphElement::new("#222222"), GraphElementType::Edge);
    apply_highlight(
        &[node.clone(), edge.clone()],
        Rgb::from_hex("#00ff00"),
        VisMode::TwoD,
    );
    assert_eq!(node.element.borrow().color, "#00ff00");
    assert_eq!(edge.element.borrow().color, "#00ff00");
}
