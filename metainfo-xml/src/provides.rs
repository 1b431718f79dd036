//! `<provides>` and `<mimetypes>` blocks.

use log::debug;
use metainfo_core::{Component, ProvidedItem, ProvidedKind};

use crate::tree::Element;

/// Read the children of `<provides>` as provided items.
///
/// `firmware` needs a `type` of runtime or flashed and `dbus` a `type` of
/// system or user; anything else is dropped.
pub fn parse_provides(el: &Element) -> Vec<ProvidedItem> {
    el.child_elements()
        .filter_map(|child| {
            let type_attr = child.attr("type");
            let Some(kind) = ProvidedKind::from_element(&child.name, type_attr) else {
                debug!(
                    "Ignoring provided item <{}> with type {:?}",
                    child.name, type_attr
                );
                return None;
            };
            child.trimmed_text().map(|value| ProvidedItem::new(kind, value))
        })
        .collect()
}

/// Read a top-level `<mimetypes>` block as MIMETYPE items.
pub fn parse_mimetypes(el: &Element) -> Vec<ProvidedItem> {
    el.child_elements()
        .filter(|c| c.name == "mimetype")
        .filter_map(Element::trimmed_text)
        .map(|value| ProvidedItem::new(ProvidedKind::Mimetype, value))
        .collect()
}

/// `<mimetypes>` for the component's MIMETYPE items, if it has any.
pub fn write_mimetypes(cpt: &Component) -> Option<Element> {
    let mut block = Element::new("mimetypes");
    for value in cpt.provided_of(ProvidedKind::Mimetype) {
        block.push_element(Element::with_text("mimetype", value));
    }
    block.has_child_elements().then_some(block)
}

/// `<provides>` for every item that is not a MIMETYPE, if there are any.
pub fn write_provides(cpt: &Component) -> Option<Element> {
    let mut block = Element::new("provides");
    for item in cpt.provided.iter().filter(|i| i.kind != ProvidedKind::Mimetype) {
        let mut el = Element::with_text(item.kind.element_name(), item.value.as_str());
        if let Some(type_attr) = item.kind.type_attr() {
            el.set_attr("type", type_attr);
        }
        block.push_element(el);
    }
    block.has_child_elements().then_some(block)
}
