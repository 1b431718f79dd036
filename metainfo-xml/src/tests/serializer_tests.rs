use super::*;
use metainfo_core::{BundleKind, Icon, IconKind, Release, UrlKind};

fn editor() -> Component {
    let mut cpt = Component::new("org.example.Editor");
    cpt.kind = ComponentKind::Desktop;
    cpt.name.set("C", "Editor".to_string());
    cpt.name.set("de", "Bearbeiter".to_string());
    cpt.summary.set("C", "Edit text".to_string());
    cpt.description.set("C", "<p>A small editor.</p>".to_string());
    cpt.project_license = Some("MIT".into());
    cpt.pkgnames.push("editor".into());
    cpt.categories.push("Utility".into());
    cpt.keywords.entry("C").push("text".into());
    cpt.urls.insert(UrlKind::Homepage, "https://example.org".into());
    cpt.icons.push(Icon::new(IconKind::Stock, "editor"));
    cpt.bundles.insert(BundleKind::Flatpak, "app/org.example.Editor".into());
    cpt.releases.push(Release::new("1.0"));
    cpt
}

fn child_names(node: &Element) -> Vec<&str> {
    node.child_elements().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_emission_order() {
    let node = component_to_node(&editor(), ParserMode::Upstream);
    assert_eq!(node.attr("type"), Some("desktop"));
    assert_eq!(
        child_names(&node),
        vec![
            "id",
            "name",
            "name",
            "summary",
            "description",
            "project_license",
            "pkgname",
            "keywords",
            "categories",
            "url",
            "icon",
            "bundle",
            "releases",
        ]
    );
}

#[test]
fn test_generic_and_unknown_kinds_not_written() {
    let mut cpt = Component::new("a");
    assert_eq!(component_to_node(&cpt, ParserMode::Distro).attr("type"), None);
    cpt.kind = ComponentKind::Unknown;
    assert_eq!(component_to_node(&cpt, ParserMode::Distro).attr("type"), None);
}

#[test]
fn test_localized_entries_carry_xml_lang() {
    let node = component_to_node(&editor(), ParserMode::Distro);
    let names: Vec<Option<&str>> = node
        .child_elements()
        .filter(|c| c.name == "name")
        .map(|c| c.attr("xml:lang"))
        .collect();
    assert_eq!(names, vec![None, Some("de")]);
}

#[test]
fn test_serialize_upstream_document() {
    let xml = serialize_upstream(&editor()).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<component type=\"desktop\">"));
    assert!(xml.contains("<name xml:lang=\"de\">Bearbeiter</name>"));
    assert!(xml.contains("<bundle type=\"flatpak\">app/org.example.Editor</bundle>"));
    assert!(xml.contains("<release version=\"1.0\"/>"));
}

#[test]
fn test_serialize_distro_document() {
    let config = ParserConfig::new().origin("example-main");
    let xml = serialize_distro(&[editor(), Component::new("b")], &config)
        .unwrap()
        .unwrap();
    assert!(xml.contains("<components version=\"0.8\" origin=\"example-main\">"));
    assert_eq!(xml.matches("<component").count(), 3);

    assert_eq!(serialize_distro(&[], &config).unwrap(), None);
}

#[test]
fn test_serialize_distro_falls_back_to_shared_origin() {
    let mut a = editor();
    let mut b = Component::new("b");
    a.origin = Some("debian-main".into());
    b.origin = Some("debian-main".into());

    let config = ParserConfig::new();
    let xml = serialize_distro(&[a.clone(), b.clone()], &config).unwrap().unwrap();
    assert!(xml.contains("<components version=\"0.8\" origin=\"debian-main\">"));

    let xml = serialize_distro(&[a.clone(), b.clone()], &config.clone().origin("local"))
        .unwrap()
        .unwrap();
    assert!(xml.contains("origin=\"local\""));

    b.origin = Some("debian-contrib".into());
    let xml = serialize_distro(&[a, b], &config).unwrap().unwrap();
    assert!(xml.contains("<components version=\"0.8\">"));
}

#[test]
fn test_serialize_upstream_keeps_description_markup() {
    let mut cpt = Component::new("org.example.Editor");
    cpt.description.set(
        "C",
        "<p><em>x</em><code>y</code></p>\n<p>Fix <em>bug</em></p>".to_string(),
    );
    let xml = serialize_upstream(&cpt).unwrap();
    assert!(xml.contains(
        "\n  <description>\n    <p><em>x</em><code>y</code></p>\n    <p>Fix <em>bug</em></p>\n  </description>\n"
    ));
}
