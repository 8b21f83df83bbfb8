//! Tag views attached to each projected item.

use crate::mapper::collaborators::RouteComputer;
use crate::model::item::Item;
use crate::model::view::TagView;

/// Builds one tag view per stored tag, in stored order.
///
/// Duplicates are passed through; nothing is sorted.
pub fn tag_views<T: RouteComputer + ?Sized>(item: &Item, routes: &T) -> Vec<TagView> {
    item.meta_data
        .tags
        .iter()
        .map(|tag| TagView {
            name: tag.name().to_string(),
            absolute_route: routes.tag_route(tag),
        })
        .collect()
}
