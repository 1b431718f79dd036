use super::*;
use metainfo_core::ProvidedKind;

use crate::config::ParserConfig;
use crate::tree::parse_document;

const DESKTOP_APP: &str = r#"<component type="desktop">
  <id>org.example.Editor.desktop</id>
  <pkgname>editor</pkgname>
  <pkgname>editor-data</pkgname>
  <source_pkgname>editor-src</source_pkgname>
  <name>Editor</name>
  <name xml:lang="de">Bearbeiter</name>
  <name lang="fr">Éditeur</name>
  <summary>Edit text files</summary>
  <developer_name>Example Team</developer_name>
  <project_license>GPL-3.0+</project_license>
  <project_group>GNOME</project_group>
  <icon type="stock">accessories-text-editor</icon>
  <icon type="cached">editor_64.png</icon>
  <icon type="remote">icons/editor.png</icon>
  <icon type="sticker">nope</icon>
  <url type="homepage">https://example.org</url>
  <url type="bugtracker">https://example.org/bugs</url>
  <url type="forum">https://example.org/forum</url>
  <categories>
    <category>Utility</category>
    <category> </category>
    <category>TextEditor</category>
  </categories>
  <keywords>
    <keyword>text</keyword>
    <keyword xml:lang="de">Text</keyword>
    <keyword>editor</keyword>
  </keywords>
  <mimetypes>
    <mimetype>text/plain</mimetype>
  </mimetypes>
  <provides>
    <binary>editor</binary>
  </provides>
  <extends>org.example.Base</extends>
  <compulsory_for_desktop>GNOME</compulsory_for_desktop>
  <bundle type="flatpak">app/org.example.Editor/x86_64/stable</bundle>
  <bundle type="limba">editor-1.0</bundle>
  <bundle type="snap">editor</bundle>
  <languages>
    <lang percentage="96">de</lang>
    <lang>fr</lang>
    <lang percentage="lots">pt_BR</lang>
  </languages>
  <unheard_of>ignored</unheard_of>
</component>"#;

fn parse_with(xml: &str, config: &ParserConfig, mode: ParserMode) -> Result<Component, MetadataError> {
    let el = parse_document(xml).unwrap().unwrap();
    parse_component_node(&el, &ParseContext::new(config, mode), false)
}

#[test]
fn test_tag_dispatch_table() {
    assert_eq!(ComponentTag::from_name("compulsory_for_desktop"), Some(ComponentTag::CompulsoryForDesktop));
    assert_eq!(ComponentTag::from_name("languages"), Some(ComponentTag::Languages));
    assert_eq!(ComponentTag::from_name("component"), None);
}

#[test]
fn test_full_component() {
    let config = ParserConfig::new().locale("ALL").origin("example-main").default_priority(3);
    let cpt = parse_with(DESKTOP_APP, &config, ParserMode::Distro).unwrap();

    assert_eq!(cpt.id, "org.example.Editor.desktop");
    assert_eq!(cpt.kind, ComponentKind::Desktop);
    assert_eq!(cpt.pkgnames, vec!["editor", "editor-data"]);
    assert_eq!(cpt.source_pkgname.as_deref(), Some("editor-src"));
    assert_eq!(cpt.name.len(), 3);
    assert_eq!(cpt.name.get("fr").map(String::as_str), Some("Éditeur"));
    assert_eq!(cpt.summary(), Some("Edit text files"));
    assert_eq!(cpt.developer_name(), Some("Example Team"));
    assert_eq!(cpt.project_license.as_deref(), Some("GPL-3.0+"));
    assert_eq!(cpt.project_group.as_deref(), Some("GNOME"));

    assert_eq!(cpt.icons.len(), 3);
    assert_eq!(cpt.icons[0].name(), Some("accessories-text-editor"));
    assert_eq!(cpt.icons[1].filename(), Some("editor_64.png"));
    assert_eq!(cpt.icons[2].url(), Some("icons/editor.png"));

    assert_eq!(cpt.urls.len(), 2);
    assert_eq!(cpt.url(UrlKind::Bugtracker), Some("https://example.org/bugs"));

    assert_eq!(cpt.categories, vec!["Utility", "TextEditor"]);
    assert_eq!(cpt.keywords.get("C"), Some(&vec!["text".to_string(), "editor".to_string()]));
    assert_eq!(cpt.keywords.get("de"), Some(&vec!["Text".to_string()]));

    let mimes: Vec<&str> = cpt.provided_of(ProvidedKind::Mimetype).collect();
    assert_eq!(mimes, vec!["text/plain"]);
    assert_eq!(cpt.provided_of(ProvidedKind::Binary).count(), 1);

    assert_eq!(cpt.extends, vec!["org.example.Base"]);
    assert_eq!(cpt.compulsory_for_desktops, vec!["GNOME"]);

    assert_eq!(cpt.bundles.len(), 2);
    assert_eq!(cpt.bundle_id(BundleKind::Flatpak), Some("app/org.example.Editor/x86_64/stable"));
    assert_eq!(cpt.bundle_id(BundleKind::Limba), Some("editor-1.0"));

    assert_eq!(cpt.languages.get("de"), Some(&96));
    assert_eq!(cpt.languages.get("fr"), Some(&0));
    assert_eq!(cpt.languages.get("pt_BR"), Some(&0));

    assert_eq!(cpt.origin.as_deref(), Some("example-main"));
    assert_eq!(cpt.priority, 3);
}

#[test]
fn test_localized_fields_follow_active_locale() {
    let config = ParserConfig::new().locale("de_DE");
    let cpt = parse_with(DESKTOP_APP, &config, ParserMode::Distro).unwrap();
    let locales: Vec<&str> = cpt.name.locales().collect();
    assert_eq!(locales, vec!["C", "de_DE"]);
    assert_eq!(cpt.name(), Some("Bearbeiter"));
    assert_eq!(cpt.keywords(), ["Text".to_string()]);
}

#[test]
fn test_repeated_category_and_keyword_blocks_replace() {
    let xml = r#"<component><id>a</id>
  <categories><category>Office</category></categories>
  <keywords><keyword>old</keyword><keyword xml:lang="de">alt</keyword></keywords>
  <categories><category>Utility</category><category>TextEditor</category></categories>
  <keywords><keyword>new</keyword></keywords>
</component>"#;
    let config = ParserConfig::new().locale("ALL");
    let cpt = parse_with(xml, &config, ParserMode::Upstream).unwrap();
    assert_eq!(cpt.categories, vec!["Utility", "TextEditor"]);
    assert_eq!(cpt.keywords.get("C"), Some(&vec!["new".to_string()]));
    assert_eq!(cpt.keywords.get("de"), Some(&vec!["alt".to_string()]));
}

#[test]
fn test_later_translation_overwrites() {
    let xml = r#"<component><id>a</id><name>One</name><name>Two</name></component>"#;
    let cpt = parse_with(xml, &ParserConfig::new(), ParserMode::Upstream).unwrap();
    assert_eq!(cpt.name(), Some("Two"));
}

#[test]
fn test_remote_icon_uses_media_base() {
    let config = ParserConfig::new().media_baseurl("https://media.example.org");
    let cpt = parse_with(DESKTOP_APP, &config, ParserMode::Distro).unwrap();
    assert_eq!(cpt.icons[2].url(), Some("https://media.example.org/icons/editor.png"));
    // cached icons are file names, never URLs
    assert_eq!(cpt.icons[1].filename(), Some("editor_64.png"));
}

#[test]
fn test_legacy_id_type_sets_kind_upstream_only() {
    let xml = r#"<application><id type="desktop">org.example.Old.desktop</id></application>"#;
    let cpt = parse_with(xml, &ParserConfig::new(), ParserMode::Upstream).unwrap();
    assert_eq!(cpt.kind, ComponentKind::Desktop);

    let cpt = parse_with(xml, &ParserConfig::new(), ParserMode::Distro).unwrap();
    assert_eq!(cpt.kind, ComponentKind::Generic);

    let xml = r#"<component type="font"><id type="desktop">org.example.Font</id></component>"#;
    let cpt = parse_with(xml, &ParserConfig::new(), ParserMode::Upstream).unwrap();
    assert_eq!(cpt.kind, ComponentKind::Font);
}

#[test]
fn test_unknown_component_type() {
    let xml = r#"<component type="spaceship"><id>a</id></component>"#;
    let cpt = parse_with(xml, &ParserConfig::new(), ParserMode::Distro).unwrap();
    assert_eq!(cpt.kind, ComponentKind::Unknown);
}

#[test]
fn test_invalid_component_rejected_unless_allowed() {
    let xml = r#"<component type="console"><pkgname>tool</pkgname><name>Tool</name></component>"#;
    let err = parse_with(xml, &ParserConfig::new(), ParserMode::Distro).unwrap_err();
    match err {
        MetadataError::InvalidComponent(dump) => {
            assert!(dump.contains("console::tool"), "{dump}");
            assert!(dump.contains("<no id>"), "{dump}");
        }
        other => panic!("expected invalid component error, got {other:?}"),
    }

    let el = parse_document(xml).unwrap().unwrap();
    let config = ParserConfig::new();
    let cpt = parse_component_node(&el, &ParseContext::new(&config, ParserMode::Distro), true).unwrap();
    assert!(!cpt.is_valid());
    assert_eq!(cpt.name(), Some("Tool"));
}

#[test]
fn test_languages_gated_by_their_own_tag() {
    let el = parse_document(
        r#"<languages>
             <lang percentage="80">de</lang>
             <lang xml:lang="fr" percentage="50">fr</lang>
             <lang percentage="10"> </lang>
           </languages>"#,
    )
    .unwrap()
    .unwrap();
    let config = ParserConfig::new();
    let mut out = BTreeMap::new();
    parse_languages(&el, &ParseContext::new(&config, ParserMode::Distro), &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out.get("de"), Some(&80));
}
