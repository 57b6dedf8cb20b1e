use tracing::debug;

use crate::model::{display_item_class, tag_combination, BaseEntry, BaseItem, BaseModMap, BucketKey};

/// Why a base item was left out of the map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OtherDomain,
    NoItemClass,
    NoName,
    NoTags,
    NotReleased,
}

/// Check a base item against the inclusion rules for `domain`
pub fn check_base(item: &BaseItem, domain: &str) -> Result<BucketKey, Rejection> {
    if item.domain != domain {
        return Err(Rejection::OtherDomain);
    }

    let item_class = display_item_class(&item.item_class);
    if item_class.is_empty() {
        return Err(Rejection::NoItemClass);
    }
    if item.display_name.is_empty() {
        return Err(Rejection::NoName);
    }
    if item.tags.is_empty() {
        return Err(Rejection::NoTags);
    }
    if !item.is_released() {
        return Err(Rejection::NotReleased);
    }

    Ok(BucketKey::new(item_class, tag_combination(&item.tags)))
}

/// Bucket the released base items of `domain` by item class and tag combination.
/// The returned buckets only have `bases` filled in.
pub fn classify_bases(items: &[BaseItem], domain: &str) -> BaseModMap {
    let mut map = BaseModMap::new();

    for item in items {
        match check_base(item, domain) {
            Ok(key) => map.bucket_mut(key).bases.push(BaseEntry::from(item)),
            Err(Rejection::OtherDomain) => {}
            Err(reason) => debug!(key = %item.key, ?reason, "skipping base item"),
        }
    }

    map
}
