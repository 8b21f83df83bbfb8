//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `allmark_core` linkage by projecting a small built-in repository.
//! - Print the projected tree and the tag index as deterministic text.
//!
//! Usage: `allmark_cli [config.json]`. Logging starts only when
//! `ALLMARK_LOG_DIR` is set to an absolute path.

use allmark_core::{
    core_version, init_logging, parse_tags, GeoInformation, Item, ItemCatalog, ItemType,
    Location, PrefixRoutes, Projector, ProjectorConfig, RawContent, TagMap,
};
use log::info;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("allmark_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => ProjectorConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => ProjectorConfig::default(),
    };
    if let Ok(log_dir) = std::env::var("ALLMARK_LOG_DIR") {
        init_logging(&config.log_level, &log_dir)?;
    }

    let repository = sample_repository()?;
    let mut tags = TagMap::new();
    for item in repository.walk() {
        tags.add(item);
    }

    let catalog = ItemCatalog::from_root(&repository);
    let mut projector = Projector::new(
        &catalog,
        PrefixRoutes::new(config.base_url.as_str()),
        RawContent,
    )
    .with_fallback_language(config.fallback_language.as_str());
    let model = projector.project(&repository);
    info!(
        "event=cli_project module=cli status=ok nodes={} tags={}",
        model.node_count(),
        tags.len()
    );

    println!("allmark_core version={}", core_version());
    println!("{}", serde_json::to_string_pretty(&*model)?);
    for (tag, items) in tags.iter() {
        println!("tag {} items={}", tag, items.len());
    }
    Ok(())
}

fn sample_repository() -> Result<Item, Box<dyn Error>> {
    let mut root = Item::new("", ItemType::Repository);
    root.title = "Sample repository".to_string();
    root.meta_data.language = "en-US".to_string();

    let mut office = Item::new("locations/berlin", ItemType::Location);
    office.title = "Berlin Office".to_string();
    office.meta_data.geo_data = GeoInformation {
        street: "Alexanderplatz 1".to_string(),
        city: "Berlin".to_string(),
        postcode: "10178".to_string(),
        country: "Germany".to_string(),
        latitude: "52.5219".to_string(),
        longitude: "13.4132".to_string(),
        map_type: "roadmap".to_string(),
        zoom: 15,
    };

    let mut meetup = Item::new("documents/meetup", ItemType::Document);
    meetup.title = "Meetup".to_string();
    meetup.raw_content = "Monthly meetup notes.".to_string();
    meetup.meta_data.tags = parse_tags(&["Events", "Rust"])?;
    meetup.meta_data.locations = vec![Location::new("locations/berlin")];

    let mut slides = Item::new("documents/meetup/slides", ItemType::Presentation);
    slides.title = "Slides".to_string();
    slides.meta_data.tags = parse_tags(&["rust"])?;
    meetup.push_child(slides);

    root.push_child(meetup);
    root.push_child(office);
    Ok(root)
}
