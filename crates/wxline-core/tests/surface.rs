// File: crates/wxline-core/tests/surface.rs
// Purpose: SVG document tree operations and serialization.

use wxline_core::{DrawingSurface, SvgDocument};

#[test]
fn select_all_returns_descendants_in_document_order() {
    let mut doc = SvgDocument::new(10.0, 10.0);
    let root = doc.root();
    let a = doc.append(root, "g");
    let b = doc.append(a, "g");
    let c = doc.append(root, "g");
    let _t = doc.append(b, "text");
    assert_eq!(doc.select_all(root, "g"), vec![a, b, c]);
    assert_eq!(doc.select_all(a, "g"), vec![b]);
}

#[test]
fn remove_detaches_subtree_and_tolerates_repeats() {
    let mut doc = SvgDocument::new(10.0, 10.0);
    let root = doc.root();
    let outer = doc.append(root, "g");
    let inner = doc.append(outer, "g");
    let before = doc.live_count();

    doc.remove(outer);
    doc.remove(inner);
    doc.remove(outer);
    assert!(!doc.is_live(outer));
    assert!(!doc.is_live(inner));
    assert_eq!(doc.live_count(), before - 2);
    assert!(doc.children(root).is_empty());

    doc.remove(root);
    assert!(doc.is_live(root));
}

#[test]
fn serializes_attributes_and_escaped_text() {
    let mut doc = SvgDocument::new(20.0, 10.5);
    let root = doc.root();
    let t = doc.append(root, "text");
    doc.set_attr(t, "x", "1");
    doc.set_attr(t, "x", "2");
    doc.set_text(t, "A & B <C>");
    let p = doc.append(root, "path");
    doc.set_attr(p, "title", "say \"hi\"");

    assert_eq!(
        doc.to_svg_string(),
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"20\" height=\"10.5\">\
         <text x=\"2\">A &amp; B &lt;C&gt;</text>\
         <path title=\"say &quot;hi&quot;\"/></svg>"
    );
}

#[test]
fn removed_slots_are_reused() {
    let mut doc = SvgDocument::new(10.0, 10.0);
    let root = doc.root();
    for _ in 0..100 {
        let g = doc.append(root, "g");
        doc.append(g, "path");
        doc.remove(g);
    }
    assert_eq!(doc.live_count(), 1);
}
