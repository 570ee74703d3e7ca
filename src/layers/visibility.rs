use crate::core::category::Category;
use crate::layers::group::{LayerId, RenderMode};
use crate::layers::store::LayerGroupStore;
use crate::traits::MapSurface;

/// Rendering strategy state. Only the unclustered state reacts to zoom
/// changes; the clustering library regroups on its own while clustered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterMode {
    Clustered,
    Unclustered,
}

impl ClusterMode {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            ClusterMode::Clustered
        } else {
            ClusterMode::Unclustered
        }
    }

    pub fn is_clustered(self) -> bool {
        self == ClusterMode::Clustered
    }

    /// The collection kind shown while in this mode.
    pub fn render_mode(self) -> RenderMode {
        match self {
            ClusterMode::Clustered => RenderMode::Clustered,
            ClusterMode::Unclustered => RenderMode::Flat,
        }
    }
}

/// Per-category visibility switches, default all on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    enabled: [bool; Category::COUNT],
}

impl FilterSet {
    pub fn all_enabled() -> Self {
        Self {
            enabled: [true; Category::COUNT],
        }
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        self.enabled[category.index()]
    }

    pub fn set(&mut self, category: Category, enabled: bool) {
        self.enabled[category.index()] = enabled;
    }

    /// Flips one category and returns its new state.
    pub fn toggle(&mut self, category: Category) -> bool {
        let slot = &mut self.enabled[category.index()];
        *slot = !*slot;
        *slot
    }

    pub fn enabled_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(move |category| self.is_enabled(*category))
    }
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::all_enabled()
    }
}

/// Reconciles filter state, cluster mode and the last reported zoom
/// into the set of collections attached to the map surface.
///
/// Zoom flows in through [`on_zoom_changed`](Self::on_zoom_changed) and
/// is cached; filter and mode handlers deliberately use the cached value
/// rather than re-querying the surface, so they observe the zoom of the
/// last event cycle.
pub struct VisibilityController {
    filters: FilterSet,
    mode: ClusterMode,
    zoom: f64,
}

impl VisibilityController {
    pub fn new(initial_zoom: f64) -> Self {
        Self {
            filters: FilterSet::default(),
            mode: ClusterMode::Clustered,
            zoom: initial_zoom,
        }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn mode(&self) -> ClusterMode {
        self.mode
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Flips one category filter and reconciles.
    pub fn toggle_filter(
        &mut self,
        category: Category,
        store: &mut LayerGroupStore,
        surface: &mut dyn MapSurface,
    ) {
        let enabled = self.filters.toggle(category);
        log::debug!("filter {category} -> {enabled}");
        self.sync(store, surface);
    }

    pub fn set_filter(
        &mut self,
        category: Category,
        enabled: bool,
        store: &mut LayerGroupStore,
        surface: &mut dyn MapSurface,
    ) {
        if self.filters.is_enabled(category) == enabled {
            return;
        }
        self.filters.set(category, enabled);
        self.sync(store, surface);
    }

    /// Switches between clustered and unclustered rendering.
    pub fn set_clustering(
        &mut self,
        enabled: bool,
        store: &mut LayerGroupStore,
        surface: &mut dyn MapSurface,
    ) {
        let mode = ClusterMode::from_enabled(enabled);
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        log::debug!("cluster mode -> {mode:?}");
        self.sync(store, surface);
    }

    /// Zoom notification. While unclustered, flat markers are rebuilt in
    /// place at the new size; the collections stay attached throughout,
    /// so the transition never flickers. While clustered this is a no-op
    /// beyond caching the zoom.
    pub fn on_zoom_changed(&mut self, zoom: f64, store: &mut LayerGroupStore) {
        self.zoom = zoom;
        if self.mode == ClusterMode::Unclustered {
            store.rebuild_flat(zoom);
        }
    }

    /// Reconciliation pass: detach everything, rebuild flat markers if
    /// they are about to be shown, then attach the active collection of
    /// each filtered-in category.
    pub fn sync(&mut self, store: &mut LayerGroupStore, surface: &mut dyn MapSurface) {
        self.detach_all(surface);

        if self.mode == ClusterMode::Unclustered {
            store.rebuild_flat(self.zoom);
        }

        let mode = self.mode.render_mode();
        for category in self.filters.enabled_categories() {
            surface.add_layer(LayerId::new(category, mode));
        }
    }

    /// Detaches every collection of every category. Idempotent; also the
    /// teardown path when the viewport goes away.
    pub fn detach_all(&self, surface: &mut dyn MapSurface) {
        for category in Category::ALL {
            surface.remove_layer(LayerId::new(category, RenderMode::Clustered));
            surface.remove_layer(LayerId::new(category, RenderMode::Flat));
        }
    }
}
