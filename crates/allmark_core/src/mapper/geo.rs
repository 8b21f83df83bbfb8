//! Geo view derivation.
//!
//! # Invariants
//! - `place_name` is empty unless both title and city are set.
//! - `address` always joins four fields, empty ones included.
//! - `coordinates` is empty unless both latitude and longitude are set.

use crate::model::item::{GeoInformation, Item};
use crate::model::view::GeoView;

const FIELD_SEPARATOR: &str = ", ";

/// Derives the display-ready geo view of an item.
///
/// Items without geo data still get a view, with every field empty.
pub fn derive_geo_view(item: &Item) -> GeoView {
    let geo = &item.meta_data.geo_data;
    GeoView {
        place_name: place_name(&item.title, geo),
        address: address(geo),
        coordinates: coordinates(geo),

        street: geo.street.clone(),
        city: geo.city.clone(),
        postcode: geo.postcode.clone(),
        country: geo.country.clone(),
        latitude: geo.latitude.clone(),
        longitude: geo.longitude.clone(),
        map_type: geo.map_type.clone(),
        zoom: geo.zoom,
    }
}

fn place_name(title: &str, geo: &GeoInformation) -> String {
    if title.is_empty() || geo.city.is_empty() {
        return String::new();
    }
    [title, geo.city.as_str(), geo.country.as_str()].join(FIELD_SEPARATOR)
}

fn address(geo: &GeoInformation) -> String {
    [
        geo.street.as_str(),
        geo.postcode.as_str(),
        geo.city.as_str(),
        geo.country.as_str(),
    ]
    .join(FIELD_SEPARATOR)
}

fn coordinates(geo: &GeoInformation) -> String {
    if geo.latitude.is_empty() || geo.longitude.is_empty() {
        return String::new();
    }
    format!("{}; {}", geo.latitude, geo.longitude)
}

#[cfg(test)]
mod tests {
    use super::derive_geo_view;
    use crate::model::item::{GeoInformation, Item, ItemType};

    fn location(title: &str, geo: GeoInformation) -> Item {
        let mut item = Item::new("berlin-hq", ItemType::Location);
        item.title = title.to_string();
        item.meta_data.geo_data = geo;
        item
    }

    #[test]
    fn place_name_joins_title_city_and_country() {
        let item = location(
            "Berlin HQ",
            GeoInformation {
                city: "Berlin".to_string(),
                country: "Germany".to_string(),
                ..GeoInformation::default()
            },
        );
        assert_eq!(derive_geo_view(&item).place_name, "Berlin HQ, Berlin, Germany");
    }

    #[test]
    fn place_name_is_empty_without_title_or_city() {
        let no_city = location(
            "Berlin HQ",
            GeoInformation {
                country: "Germany".to_string(),
                ..GeoInformation::default()
            },
        );
        assert_eq!(derive_geo_view(&no_city).place_name, "");

        let no_title = location(
            "",
            GeoInformation {
                city: "Berlin".to_string(),
                ..GeoInformation::default()
            },
        );
        assert_eq!(derive_geo_view(&no_title).place_name, "");
    }

    #[test]
    fn place_name_keeps_empty_country_slot() {
        let item = location(
            "Office",
            GeoInformation {
                city: "Berlin".to_string(),
                ..GeoInformation::default()
            },
        );
        assert_eq!(derive_geo_view(&item).place_name, "Office, Berlin, ");
    }

    #[test]
    fn address_joins_all_fields_even_when_empty() {
        let item = location(
            "",
            GeoInformation {
                postcode: "10115".to_string(),
                city: "Berlin".to_string(),
                country: "Germany".to_string(),
                ..GeoInformation::default()
            },
        );
        assert_eq!(derive_geo_view(&item).address, ", 10115, Berlin, Germany");
        assert_eq!(
            derive_geo_view(&location("", GeoInformation::default())).address,
            ", , , "
        );
    }

    #[test]
    fn coordinates_need_both_values() {
        let both = location(
            "",
            GeoInformation {
                latitude: "52.5".to_string(),
                longitude: "13.4".to_string(),
                ..GeoInformation::default()
            },
        );
        assert_eq!(derive_geo_view(&both).coordinates, "52.5; 13.4");

        let latitude_only = location(
            "",
            GeoInformation {
                latitude: "52.5".to_string(),
                ..GeoInformation::default()
            },
        );
        assert_eq!(derive_geo_view(&latitude_only).coordinates, "");
    }

    #[test]
    fn raw_fields_pass_through() {
        let geo = GeoInformation {
            street: "Unter den Linden 1".to_string(),
            city: "Berlin".to_string(),
            postcode: "10117".to_string(),
            country: "Germany".to_string(),
            latitude: "52.51".to_string(),
            longitude: "13.39".to_string(),
            map_type: "satellite".to_string(),
            zoom: 14,
        };
        let view = derive_geo_view(&location("HQ", geo.clone()));

        assert_eq!(view.street, geo.street);
        assert_eq!(view.postcode, geo.postcode);
        assert_eq!(view.latitude, geo.latitude);
        assert_eq!(view.longitude, geo.longitude);
        assert_eq!(view.map_type, "satellite");
        assert_eq!(view.zoom, 14);
    }
}
