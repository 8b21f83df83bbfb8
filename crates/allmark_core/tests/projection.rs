use allmark_core::{
    parse_tags, GeoInformation, Item, ItemCatalog, ItemType, Location, PrefixRoutes, Projector,
    RawContent, UNRECOGNIZED_TYPE_TITLE,
};
use chrono::{TimeZone, Utc};

fn item(route: &str, item_type: &str) -> Item {
    let mut item = Item::new(route, ItemType::from_name(item_type));
    item.title = route.to_string();
    item
}

fn sample_tree() -> Item {
    let mut root = item("root", "repository");

    let mut docs = item("docs", "document");
    docs.push_child(item("docs/intro", "document"));
    docs.push_child(item("docs/slides", "presentation"));

    let mut broken = item("broken", "unknown-type");
    broken.push_child(item("broken/hidden", "document"));

    let mut office = item("office", "location");
    office.meta_data.geo_data = GeoInformation {
        city: "Berlin".to_string(),
        country: "Germany".to_string(),
        ..GeoInformation::default()
    };

    root.push_child(docs);
    root.push_child(broken);
    root.push_child(item("news", "message"));
    root.push_child(office);
    root
}

#[test]
fn projection_node_count_matches_tree_minus_error_subtrees() {
    let root = sample_tree();
    let catalog = ItemCatalog::from_root(&root);
    let mut projector = Projector::new(&catalog, PrefixRoutes::new("/"), RawContent);

    let model = projector.project(&root);

    // `broken/hidden` sits below an error node and is not projected.
    assert_eq!(root.node_count(), 8);
    assert_eq!(model.node_count(), 7);
    assert_eq!(projector.cache().len(), 7);
}

#[test]
fn child_order_is_preserved() {
    let root = sample_tree();
    let catalog = ItemCatalog::from_root(&root);
    let mut projector = Projector::new(&catalog, PrefixRoutes::new("/"), RawContent);

    let model = projector.project(&root);
    let child_routes: Vec<&str> = model
        .children
        .iter()
        .map(|child| child.relative_route.as_str())
        .collect();
    assert_eq!(child_routes, vec!["docs", "broken", "news", "office"]);

    let nested: Vec<&str> = model.children[0]
        .children
        .iter()
        .map(|child| child.relative_route.as_str())
        .collect();
    assert_eq!(nested, vec!["docs/intro", "docs/slides"]);
    assert_eq!(model.children[0].children[1].item_type, "presentation");
    assert_eq!(model.children[0].children[1].level, 2);
}

#[test]
fn unknown_type_projects_to_error_leaf_with_real_routes() {
    let root = sample_tree();
    let broken = &root.children[1];
    let catalog = ItemCatalog::from_root(&root);
    let mut projector = Projector::new(&catalog, PrefixRoutes::new("https://example.com"), RawContent);

    let model = projector.project(broken);

    assert!(model.is_error());
    assert_eq!(model.title, UNRECOGNIZED_TYPE_TITLE);
    assert!(model.description.contains("unknown-type"));
    assert_eq!(model.relative_route, "broken");
    assert_eq!(model.absolute_route, "https://example.com/broken");
    assert!(model.children.is_empty());
    assert_eq!(model.node_count(), 1);
}

#[test]
fn nested_error_node_keeps_item_level() {
    let root = sample_tree();
    let catalog = ItemCatalog::from_root(&root);
    let mut projector = Projector::new(&catalog, PrefixRoutes::new("/"), RawContent);

    let model = projector.project(&root);
    let broken = &model.children[1];
    assert!(broken.is_error());
    assert_eq!(broken.level, 1);
}

#[test]
fn error_node_does_not_disturb_sibling_branches() {
    let root = sample_tree();
    let catalog = ItemCatalog::from_root(&root);
    let mut projector = Projector::new(&catalog, PrefixRoutes::new("/"), RawContent);

    let model = projector.project(&root);
    assert!(model.children[1].is_error());
    assert!(!model.children[2].is_error());
    assert_eq!(model.children[2].item_type, "message");
    assert_eq!(
        model.children[3].geo_location.place_name,
        "office, Berlin, Germany"
    );
}

#[test]
fn standard_projection_fills_every_field() {
    let mut doc = item("docs/intro", "document");
    doc.title = "Intro".to_string();
    doc.description = "Getting started".to_string();
    doc.raw_content = "Hello **world**".to_string();
    doc.meta_data.language = "de-DE".to_string();
    doc.meta_data.creation_date = Some(Utc.with_ymd_and_hms(2013, 4, 1, 9, 5, 3).unwrap());
    doc.meta_data.tags = parse_tags(&["Rust", "go", "rust"]).unwrap();

    let catalog = ItemCatalog::new();
    let renderer = |item: &allmark_core::Item| format!("<p>{}</p>", item.raw_content);
    let mut projector = Projector::new(&catalog, PrefixRoutes::new("/site/"), renderer);

    let model = projector.project(&doc);
    assert_eq!(model.title, "Intro");
    assert_eq!(model.description, "Getting started");
    assert_eq!(model.content, "<p>Hello **world**</p>");
    assert_eq!(model.language_tag, "de");
    assert_eq!(model.creation_date, "Monday, 01-Apr-13 09:05:03 UTC");
    assert_eq!(model.last_modified_date, "");
    assert_eq!(model.item_type, "document");
    assert_eq!(model.relative_route, "docs/intro");
    assert_eq!(model.absolute_route, "/site/docs/intro");

    let tags: Vec<(&str, &str)> = model
        .tags
        .iter()
        .map(|tag| (tag.name.as_str(), tag.absolute_route.as_str()))
        .collect();
    assert_eq!(
        tags,
        vec![
            ("rust", "/site/tags.html#rust"),
            ("go", "/site/tags.html#go"),
            ("rust", "/site/tags.html#rust"),
        ]
    );
    assert_eq!(model.geo_location.address, ", , , ");
    assert_eq!(model.geo_location.coordinates, "");
}

#[test]
fn unresolved_locations_are_skipped_in_order() {
    let mut root = item("root", "repository");
    root.meta_data.locations = vec![
        Location::new("places/berlin"),
        Location::new("places/atlantis"),
        Location::new("places/paris"),
    ];
    let mut places = item("places", "document");
    let mut berlin = item("places/berlin", "location");
    berlin.meta_data.geo_data.city = "Berlin".to_string();
    places.push_child(berlin);
    places.push_child(item("places/paris", "location"));

    let mut repository = root.clone();
    repository.push_child(places);
    let catalog = ItemCatalog::from_root(&repository);
    let mut projector = Projector::new(&catalog, PrefixRoutes::new("/"), RawContent);

    let model = projector.project(&repository);
    let locations: Vec<&str> = model
        .locations
        .iter()
        .map(|location| location.relative_route.as_str())
        .collect();
    assert_eq!(locations, vec!["places/berlin", "places/paris"]);
    assert_eq!(model.locations[0].geo_location.place_name, "places/berlin, Berlin, ");
    assert_eq!(model.locations[0].level, 2);
    assert!(model.locations.iter().all(|location| location.children.is_empty()));
}

#[test]
fn reprojection_overwrites_cache_with_equivalent_model() {
    let root = sample_tree();
    let catalog = ItemCatalog::from_root(&root);
    let mut projector = Projector::new(&catalog, PrefixRoutes::new("/"), RawContent);

    let first = projector.project(&root);
    let cached = projector.cached(root.id).expect("root should be cached");
    assert_eq!(*cached, *first);

    let second = projector.project(&root);
    assert_eq!(*second, *first);
    assert_eq!(projector.cache().len(), 7);

    let intro = &root.children[0].children[0];
    let cached_intro = projector.cached(intro.id).expect("child should be cached");
    assert_eq!(cached_intro.relative_route, "docs/intro");
}
