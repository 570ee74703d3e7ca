use crate::core::category::Category;
use crate::data::locations::{DatasetStats, LocationRecord};
use crate::layers::store::LayerGroupStore;
use crate::layers::visibility::{ClusterMode, FilterSet, VisibilityController};
use crate::traits::MapSurface;

/// The external events the engine reacts to. One fires per page load
/// (dataset), the rest are user- or viewport-driven and may fire at any
/// frequency; each handler runs to completion before the next event.
#[derive(Debug, Clone)]
pub enum MapEvent {
    DatasetLoaded(Vec<LocationRecord>),
    FilterToggled(Category),
    ClusteringToggled(bool),
    ZoomChanged(f64),
}

/// Facade owning the marker-layer subsystem for one map viewport: the
/// surface handle, the per-category layer store and the visibility
/// controller. Discard it together with the viewport; collections are
/// never shared across viewport instances.
pub struct MarkerMap<S: MapSurface> {
    surface: S,
    store: LayerGroupStore,
    controller: VisibilityController,
    stats: DatasetStats,
}

impl<S: MapSurface> MarkerMap<S> {
    pub fn new(surface: S) -> Self {
        let zoom = surface.zoom();
        Self {
            surface,
            store: LayerGroupStore::new(),
            controller: VisibilityController::new(zoom),
            stats: DatasetStats::default(),
        }
    }

    /// Loads a dataset: computes the stat figures, ingests the records
    /// into the store and attaches the visible collections.
    pub fn load(&mut self, records: Vec<LocationRecord>) {
        self.stats = DatasetStats::from_records(&records);
        self.store.ingest(records);
        self.controller.sync(&mut self.store, &mut self.surface);
    }

    pub fn toggle_filter(&mut self, category: Category) {
        self.controller
            .toggle_filter(category, &mut self.store, &mut self.surface);
    }

    pub fn set_filter(&mut self, category: Category, enabled: bool) {
        self.controller
            .set_filter(category, enabled, &mut self.store, &mut self.surface);
    }

    pub fn set_clustering(&mut self, enabled: bool) {
        self.controller
            .set_clustering(enabled, &mut self.store, &mut self.surface);
    }

    pub fn notify_zoom(&mut self, zoom: f64) {
        self.controller.on_zoom_changed(zoom, &mut self.store);
    }

    /// Event-dispatch form of the four handlers above.
    pub fn handle_event(&mut self, event: MapEvent) {
        match event {
            MapEvent::DatasetLoaded(records) => self.load(records),
            MapEvent::FilterToggled(category) => self.toggle_filter(category),
            MapEvent::ClusteringToggled(enabled) => self.set_clustering(enabled),
            MapEvent::ZoomChanged(zoom) => self.notify_zoom(zoom),
        }
    }

    /// Detaches every collection; call on viewport teardown.
    pub fn detach_all(&mut self) {
        self.controller.detach_all(&mut self.surface);
    }

    pub fn stats(&self) -> DatasetStats {
        self.stats
    }

    pub fn filters(&self) -> &FilterSet {
        self.controller.filters()
    }

    pub fn mode(&self) -> ClusterMode {
        self.controller.mode()
    }

    pub fn store(&self) -> &LayerGroupStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Releases the surface handle, detaching everything first.
    pub fn into_surface(mut self) -> S {
        self.detach_all();
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::locations::parse_locations;
    use crate::layers::group::{LayerId, RenderMode};
    use crate::prelude::HashSet;

    struct FakeSurface {
        zoom: f64,
        attached: HashSet<LayerId>,
    }

    impl FakeSurface {
        fn new(zoom: f64) -> Self {
            Self {
                zoom,
                attached: HashSet::default(),
            }
        }
    }

    impl MapSurface for FakeSurface {
        fn add_layer(&mut self, id: LayerId) {
            self.attached.insert(id);
        }

        fn remove_layer(&mut self, id: LayerId) {
            self.attached.remove(&id);
        }

        fn zoom(&self) -> f64 {
            self.zoom
        }
    }

    fn sample_records() -> Vec<LocationRecord> {
        parse_locations(
            r#"[
                {"category":"Academic","lat":40.0,"lon":-74.0,"count":2,"city":"NYC","country":"US","domain":"a.edu"},
                {"category":"Healthcare","lat":51.5,"lon":-0.1,"count":1,"city":"London","country":"UK","domain":"b.org"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_load_attaches_and_computes_stats() {
        let mut map = MarkerMap::new(FakeSurface::new(2.0));
        map.handle_event(MapEvent::DatasetLoaded(sample_records()));

        assert_eq!(map.stats().locations, 2);
        assert_eq!(map.stats().countries, 2);
        assert_eq!(map.stats().domains, 3);
        // All five categories attach clustered, with or without markers
        assert_eq!(map.surface().attached.len(), Category::COUNT);
        assert!(map.mode().is_clustered());
    }

    #[test]
    fn test_event_dispatch_round_trip() {
        let mut map = MarkerMap::new(FakeSurface::new(2.0));
        map.handle_event(MapEvent::DatasetLoaded(sample_records()));

        map.handle_event(MapEvent::ClusteringToggled(false));
        assert!(map
            .surface()
            .attached
            .iter()
            .all(|id| id.mode == RenderMode::Flat));

        map.handle_event(MapEvent::ZoomChanged(18.0));
        assert_eq!(
            map.store().flat(Category::Academic).markers()[0]
                .icon()
                .diameter,
            14
        );

        map.handle_event(MapEvent::FilterToggled(Category::Healthcare));
        assert!(!map
            .surface()
            .attached
            .contains(&LayerId::new(Category::Healthcare, RenderMode::Flat)));
    }

    #[test]
    fn test_into_surface_detaches() {
        let mut map = MarkerMap::new(FakeSurface::new(2.0));
        map.load(sample_records());

        let surface = map.into_surface();
        assert!(surface.attached.is_empty());
    }
}
