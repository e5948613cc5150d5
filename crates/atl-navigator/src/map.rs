//! Interactive terminal map view state.

use std::str::FromStr;

use serde::Serialize;

use crate::data::AirportData;
use crate::error::Result;
use crate::lookup::{
    checkpoints_by_concourse, find_gate, flight_at_gate, gates_by_concourse, lounges_by_concourse,
};
use crate::model::{Concourse, Flight, Service, UnknownCode};
use crate::search::{map_search, MapItem};
use crate::walking::{estimate_walking_time, WalkingEstimate};

/// A toggleable marker layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Gate markers.
    Gates,
    /// Restaurants, cafes and bars.
    Dining,
    /// Shops and duty free.
    Shopping,
    /// Lounges.
    Lounges,
    /// Security checkpoints.
    Security,
    /// Every other service type.
    Services,
}

impl Layer {
    /// Every layer, in legend order.
    pub const ALL: [Layer; 6] = [
        Self::Gates,
        Self::Dining,
        Self::Shopping,
        Self::Lounges,
        Self::Security,
        Self::Services,
    ];

    /// Legend label.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Gates => "Gates",
            Self::Dining => "Dining",
            Self::Shopping => "Shopping",
            Self::Lounges => "Lounges",
            Self::Security => "Security",
            Self::Services => "Services",
        }
    }

    /// Marker color.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Gates => "#00D4FF",
            Self::Dining => "#FF6B35",
            Self::Shopping => "#9C27B0",
            Self::Lounges => "#FFD600",
            Self::Security => "#00C853",
            Self::Services => "#8B9CAD",
        }
    }

    /// Whether the layer is on when the map opens.
    #[must_use]
    pub fn enabled_by_default(self) -> bool {
        !matches!(self, Self::Services)
    }

    /// The layer a service is drawn on.
    #[must_use]
    pub fn for_service(service: &Service) -> Self {
        if service.service_type.is_dining() {
            Self::Dining
        } else if service.service_type.is_shopping() {
            Self::Shopping
        } else {
            Self::Services
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::Gates => 0,
            Self::Dining => 1,
            Self::Shopping => 2,
            Self::Lounges => 3,
            Self::Security => 4,
            Self::Services => 5,
        }
    }
}

impl FromStr for Layer {
    type Err = UnknownCode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCode::new("map layer", s))
    }
}

/// Zoom bounds and step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoomLimits {
    /// Smallest zoom factor.
    pub min: f64,
    /// Largest zoom factor.
    pub max: f64,
    /// Change per zoom click.
    pub step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 2.0,
            step: 0.1,
        }
    }
}

/// The selected map item, with the flight at the gate for gate selections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    /// What was selected.
    pub item: MapItem,
    /// The flight currently assigned to the gate, if any.
    pub current_flight: Option<Flight>,
}

/// View state of the terminal map over a borrowed data set.
#[derive(Debug, Clone)]
pub struct TerminalMap<'a> {
    data: &'a AirportData,
    concourse: Concourse,
    layers: [bool; 6],
    zoom: f64,
    limits: ZoomLimits,
    query: String,
    selection: Option<Selection>,
}

impl<'a> TerminalMap<'a> {
    /// Open the map on concourse A with default layers and zoom.
    #[must_use]
    pub fn new(data: &'a AirportData) -> Self {
        Self::with_settings(data, Concourse::A, ZoomLimits::default())
    }

    /// Open the map on `concourse` with the given zoom bounds.
    #[must_use]
    pub fn with_settings(data: &'a AirportData, concourse: Concourse, limits: ZoomLimits) -> Self {
        Self {
            data,
            concourse,
            layers: Layer::ALL.map(Layer::enabled_by_default),
            zoom: 1.0_f64.clamp(limits.min, limits.max),
            limits,
            query: String::new(),
            selection: None,
        }
    }

    /// The concourse on display.
    #[must_use]
    pub fn concourse(&self) -> Concourse {
        self.concourse
    }

    /// Switch concourse. Clears the selection.
    pub fn select_concourse(&mut self, concourse: Concourse) {
        if self.concourse != concourse {
            self.concourse = concourse;
            self.selection = None;
        }
    }

    /// Whether a layer is drawn.
    #[must_use]
    pub fn is_layer_enabled(&self, layer: Layer) -> bool {
        self.layers[layer.slot()]
    }

    /// Flip a layer; returns its new state.
    pub fn toggle_layer(&mut self, layer: Layer) -> bool {
        let slot = &mut self.layers[layer.slot()];
        *slot = !*slot;
        *slot
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Zoom in one step, up to the maximum.
    pub fn zoom_in(&mut self) -> f64 {
        self.zoom = round_zoom((self.zoom + self.limits.step).min(self.limits.max));
        self.zoom
    }

    /// Zoom out one step, down to the minimum.
    pub fn zoom_out(&mut self) -> f64 {
        self.zoom = round_zoom((self.zoom - self.limits.step).max(self.limits.min));
        self.zoom
    }

    /// Zoom as a whole percentage, e.g. `110%`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn zoom_label(&self) -> String {
        format!("{}%", (self.zoom * 100.0).round() as i64)
    }

    /// Current search text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Search results for the current text on the current concourse.
    #[must_use]
    pub fn search(&self) -> Vec<MapItem> {
        map_search(self.data, self.concourse, &self.query)
    }

    /// Markers on the current concourse for every enabled layer.
    #[must_use]
    pub fn visible_markers(&self) -> Vec<MapItem> {
        let mut markers = Vec::new();
        if self.is_layer_enabled(Layer::Gates) {
            markers.extend(
                gates_by_concourse(self.data.gates(), self.concourse)
                    .into_iter()
                    .cloned()
                    .map(MapItem::Gate),
            );
        }
        for layer in [Layer::Dining, Layer::Shopping, Layer::Services] {
            if self.is_layer_enabled(layer) {
                markers.extend(
                    self.data
                        .services()
                        .filter(|s| s.concourse == self.concourse && Layer::for_service(s) == layer)
                        .cloned()
                        .map(MapItem::Service),
                );
            }
        }
        if self.is_layer_enabled(Layer::Lounges) {
            markers.extend(
                lounges_by_concourse(self.data.lounges(), self.concourse)
                    .into_iter()
                    .cloned()
                    .map(MapItem::Lounge),
            );
        }
        if self.is_layer_enabled(Layer::Security) {
            markers.extend(
                checkpoints_by_concourse(self.data.checkpoints(), self.concourse)
                    .into_iter()
                    .cloned()
                    .map(MapItem::Security),
            );
        }
        markers
    }

    /// Select a gate by number, attaching the flight currently at it.
    pub fn select_gate(&mut self, number: &str) -> Option<&Selection> {
        let gate = find_gate(self.data.gates(), number)?.clone();
        let current_flight = flight_at_gate(self.data.flights(), &gate.number).cloned();
        tracing::debug!(
            gate = %gate.number,
            flight = current_flight.as_ref().map(|f| f.flight_number.as_str()),
            "Selected gate"
        );
        self.selection = Some(Selection {
            item: MapItem::Gate(gate),
            current_flight,
        });
        self.selection.as_ref()
    }

    /// Select any map item. Gates go through [`select_gate`](Self::select_gate).
    pub fn select(&mut self, item: MapItem) -> Option<&Selection> {
        if let MapItem::Gate(gate) = &item {
            let number = gate.number.clone();
            return self.select_gate(&number);
        }
        self.selection = Some(Selection {
            item,
            current_flight: None,
        });
        self.selection.as_ref()
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Drop the current selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Walking directions between two gates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GateNotFound`](crate::Error::GateNotFound) if either
    /// gate does not exist.
    pub fn directions(&self, from: &str, to: &str) -> Result<WalkingEstimate> {
        estimate_walking_time(self.data.gates(), from.trim(), to.trim())
    }
}

fn round_zoom(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
