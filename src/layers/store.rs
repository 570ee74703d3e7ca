use crate::core::category::Category;
use crate::data::locations::LocationRecord;
use crate::layers::group::{ClusterGroup, LayerGroup};
use crate::layers::marker::{border_width, marker_size, popup_html, Marker, MarkerIcon};

/// One ingested record plus its derived presentation. The entry list is
/// the single source of truth both render collections are rebuilt from.
#[derive(Debug, Clone)]
pub struct MarkerEntry {
    pub record: LocationRecord,
    pub color: &'static str,
    pub popup_html: String,
}

impl MarkerEntry {
    pub fn new(record: LocationRecord) -> Self {
        let color = record.category.color();
        let popup_html = popup_html(&record);
        Self {
            record,
            color,
            popup_html,
        }
    }

    /// Marker for the clustering-aware collection, at the fixed size.
    pub fn clustered_marker(&self) -> Marker {
        Marker::new(self.record.position, MarkerIcon::clustered(self.color))
            .with_popup(self.popup_html.clone())
    }

    /// Marker for the flat collection, at a zoom-derived size.
    pub fn flat_marker(&self, size: u32) -> Marker {
        Marker::new(
            self.record.position,
            MarkerIcon::new(self.color, size, border_width(size)),
        )
        .with_popup(self.popup_html.clone())
    }
}

/// The two render collections of one category, derived from its entries.
struct CategoryLayers {
    clustered: ClusterGroup,
    flat: LayerGroup,
    entries: Vec<MarkerEntry>,
}

impl CategoryLayers {
    fn new(category: Category) -> Self {
        Self {
            clustered: ClusterGroup::new(category),
            flat: LayerGroup::new(category),
            entries: Vec::new(),
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.clustered.clear();
        self.flat.clear();
    }
}

/// Owns, per category, one entry list and the two marker collections
/// derived from it. The collections never diverge in membership: the
/// clustered one is populated during [`ingest`](Self::ingest), the flat
/// one is materialized on demand by [`rebuild_flat`](Self::rebuild_flat)
/// because its marker size depends on the live zoom.
pub struct LayerGroupStore {
    // Indexed by Category, one slot per variant
    groups: [CategoryLayers; Category::COUNT],
}

impl LayerGroupStore {
    pub fn new() -> Self {
        Self {
            groups: Category::ALL.map(CategoryLayers::new),
        }
    }

    /// Loads a dataset, replacing any previous one. A second ingest
    /// clears all collections first so markers are never duplicated.
    pub fn ingest(&mut self, records: impl IntoIterator<Item = LocationRecord>) {
        self.clear();
        let mut total = 0usize;
        for record in records {
            let group = &mut self.groups[record.category.index()];
            let entry = MarkerEntry::new(record);
            group.clustered.add_marker(entry.clustered_marker());
            group.entries.push(entry);
            total += 1;
        }
        log::debug!("ingested {total} location records");
    }

    /// Clears each category's flat collection and repopulates it from
    /// the entries at the size for `zoom`. Idempotent; safe to call on
    /// every zoom change.
    pub fn rebuild_flat(&mut self, zoom: f64) {
        let size = marker_size(zoom);
        for group in &mut self.groups {
            group.flat.clear();
            for entry in &group.entries {
                group.flat.add_marker(entry.flat_marker(size));
            }
        }
    }

    /// Drops all entries and empties both collections of every category.
    pub fn clear(&mut self) {
        for group in &mut self.groups {
            group.clear();
        }
    }

    pub fn entries(&self, category: Category) -> &[MarkerEntry] {
        &self.groups[category.index()].entries
    }

    pub fn clustered(&self, category: Category) -> &ClusterGroup {
        &self.groups[category.index()].clustered
    }

    pub fn flat(&self, category: Category) -> &LayerGroup {
        &self.groups[category.index()].flat
    }

    /// Total entries across all categories.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.entries.is_empty())
    }
}

impl Default for LayerGroupStore {
    fn default() -> Self {
        Self::new()
    }
}
