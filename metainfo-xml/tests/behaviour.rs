use metainfo_xml::{MetadataError, ParserConfig, parse_distro, parse_upstream, resolve_locale};

#[test]
fn locale_resolution_matrix() {
    let cases = [
        (Some("de"), "de_DE", Some("de_DE")),
        (Some("de_DE"), "de_DE", Some("de_DE")),
        (Some("pt_BR"), "ALL", Some("pt_BR")),
        (None, "ALL", Some("C")),
        (None, "de_DE", Some("C")),
        (Some("fr"), "de_DE", None),
    ];
    for (lang, active, expected) in cases {
        let short = metainfo_core::locale_short(active);
        assert_eq!(
            resolve_locale(lang, active, short).as_deref(),
            expected,
            "lang {lang:?} under {active}"
        );
    }
}

#[test]
fn untagged_upstream_paragraphs_merge() {
    let xml = r#"<component>
      <id>org.example.A</id>
      <description>
        <p>One.</p>
        <p>Two.</p>
      </description>
    </component>"#;
    let cpt = parse_upstream(xml, &ParserConfig::new()).unwrap().unwrap();
    assert_eq!(cpt.description.len(), 1);
    assert_eq!(cpt.description(), Some("<p>One.</p>\n<p>Two.</p>"));
}

#[test]
fn dimensionless_image_depends_on_mode() {
    let component = r#"<component>
      <id>org.example.A</id>
      <screenshots>
        <screenshot>
          <image width="800" height="600">https://example.org/a.png</image>
          <image>https://example.org/b.png</image>
        </screenshot>
      </screenshots>
    </component>"#;
    let config = ParserConfig::new();

    let upstream = parse_upstream(component, &config).unwrap().unwrap();
    let images = &upstream.screenshots[0].images;
    assert_eq!(images.len(), 2);
    assert_eq!((images[1].width, images[1].height), (0, 0));

    let catalog = format!("<components>{component}</components>");
    let distro = parse_distro(&catalog, &config).unwrap();
    assert_eq!(distro[0].screenshots[0].images.len(), 1);
}

#[test]
fn timestamp_attribute_beats_date() {
    let xml = r#"<component>
      <id>org.example.A</id>
      <releases>
        <release version="1.0" date="2020-01-01T00:00:00Z" timestamp="1577836800"/>
        <release version="0.9" timestamp="1500000000" date="2020-01-01T00:00:00Z"/>
      </releases>
    </component>"#;
    let cpt = parse_upstream(xml, &ParserConfig::new()).unwrap().unwrap();
    assert_eq!(cpt.releases[0].timestamp, Some(1_577_836_800));
    assert_eq!(cpt.releases[1].timestamp, Some(1_500_000_000));
}

#[test]
fn catalog_to_single_component_entry_point_fails() {
    let err = parse_upstream(
        "<components><component><id>a</id></component></components>",
        &ParserConfig::new(),
    )
    .unwrap_err();
    assert!(matches!(err, MetadataError::UnexpectedFormatKind(_)));
}

#[test]
fn empty_input_yields_nothing() {
    let config = ParserConfig::new();
    assert_eq!(parse_upstream("", &config).unwrap(), None);
    assert_eq!(parse_distro("", &config).unwrap(), Vec::new());
}

#[test]
fn only_active_translation_is_kept() {
    let xml = r#"<component>
      <id>org.example.A</id>
      <name>Editor</name>
      <name xml:lang="de">Bearbeiter</name>
      <name xml:lang="fr">Éditeur</name>
      <summary lang="de">Texte bearbeiten</summary>
    </component>"#;
    let config = ParserConfig::new().locale("de_DE");
    let cpt = parse_upstream(xml, &config).unwrap().unwrap();
    assert_eq!(cpt.name.len(), 2);
    assert_eq!(cpt.name(), Some("Bearbeiter"));
    assert_eq!(cpt.summary.get("de_DE").map(String::as_str), Some("Texte bearbeiten"));
}
