use crate::constants::{
    CLUSTER_MARKER_BORDER, CLUSTER_MARKER_SIZE, MAX_MARKER_SIZE, MAX_ZOOM, MIN_MARKER_SIZE,
    MIN_ZOOM, THIN_BORDER_THRESHOLD,
};
use crate::core::geo::LatLng;
use crate::data::locations::LocationRecord;

/// Flat-marker diameter for a zoom level, in pixels.
///
/// Linear between [`MIN_ZOOM`] and [`MAX_ZOOM`], clamped to
/// [`MIN_MARKER_SIZE`]..=[`MAX_MARKER_SIZE`]. Pure and total; out-of-range
/// zooms clamp to the nearest end of the scale. Cluster icons do not use
/// this policy, they render at the fixed [`CLUSTER_MARKER_SIZE`].
pub fn marker_size(zoom: f64) -> u32 {
    let min = f64::from(MIN_MARKER_SIZE);
    let max = f64::from(MAX_MARKER_SIZE);
    let size = min + ((zoom - MIN_ZOOM) / (MAX_ZOOM - MIN_ZOOM)) * (max - min);
    size.round().min(max).max(min) as u32
}

/// Border width paired with a flat-marker diameter: a thin ring for the
/// smallest discs so they stay legible.
pub fn border_width(size: u32) -> u32 {
    if size <= THIN_BORDER_THRESHOLD {
        1
    } else {
        2
    }
}

/// Icon descriptor for a circular marker disc: category color, white
/// border, drop shadow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    pub color: &'static str,
    pub diameter: u32,
    pub border_width: u32,
}

impl MarkerIcon {
    pub fn new(color: &'static str, diameter: u32, border_width: u32) -> Self {
        Self {
            color,
            diameter,
            border_width,
        }
    }

    /// Fixed-size icon for markers in a clustering-aware collection.
    pub fn clustered(color: &'static str) -> Self {
        Self::new(color, CLUSTER_MARKER_SIZE, CLUSTER_MARKER_BORDER)
    }

    /// Zoom-sized icon for flat markers.
    pub fn flat(color: &'static str, zoom: f64) -> Self {
        let size = marker_size(zoom);
        Self::new(color, size, border_width(size))
    }

    /// Renders the icon as the host page's div markup.
    pub fn html(&self) -> String {
        format!(
            "<div style=\"background-color: {}; width: {}px; height: {}px; \
             border-radius: 50%; border: {}px solid white; \
             box-shadow: 0 2px 5px rgba(0,0,0,0.3);\"></div>",
            self.color, self.diameter, self.diameter, self.border_width
        )
    }
}

/// Popup markup shown when a marker is clicked: resolved display name,
/// city and country, domain count, and a category badge.
pub fn popup_html(record: &LocationRecord) -> String {
    let noun = if record.count == 1 { "domain" } else { "domains" };
    format!(
        "<div class=\"custom-popup\">\
         <h3>{}</h3>\
         <div class=\"location\">{}, {}</div>\
         <div><strong>{}</strong> {}</div>\
         <div class=\"category category-{}\">{}</div>\
         </div>",
        record.resolved_name(),
        record.city,
        record.country,
        record.count,
        noun,
        record.category.slug(),
        record.category
    )
}

/// A single visual marker: position, icon, popup.
#[derive(Debug, Clone)]
pub struct Marker {
    position: LatLng,
    icon: MarkerIcon,
    popup_html: String,
}

impl Marker {
    pub fn new(position: LatLng, icon: MarkerIcon) -> Self {
        Self {
            position,
            icon,
            popup_html: String::new(),
        }
    }

    pub fn with_popup(mut self, html: String) -> Self {
        self.popup_html = html;
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn icon(&self) -> &MarkerIcon {
        &self.icon
    }

    pub fn popup_html(&self) -> &str {
        &self.popup_html
    }
}
