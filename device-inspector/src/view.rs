use inspector_common::traits::SensorSample;
use inspector_common::types::sensors::N_SENSOR_KINDS;
use inspector_common::types::{Accuracy, Reading, SensorKind};

/// The on-screen text: one info region holding the snapshot and one live
/// region per sensor kind. Each new reading overwrites the region of its
/// kind; nothing is accumulated.
#[derive(Debug, Clone)]
pub struct InspectorView {
    info: String,
    regions: [String; N_SENSOR_KINDS],
}

impl Default for InspectorView {
    fn default() -> Self {
        Self {
            info: String::new(),
            regions: std::array::from_fn(|_| String::new()),
        }
    }
}

impl InspectorView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_info(&mut self, info: String) {
        self.info = info;
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    /// Formats `reading` and overwrites the region of its kind.
    pub fn apply(&mut self, reading: &Reading) {
        self.regions[usize::from(reading.kind())] = format_reading(reading);
    }

    pub fn region(&self, kind: SensorKind) -> &str {
        &self.regions[usize::from(kind)]
    }

    /// Accuracy changes are part of the stream contract but not rendered.
    pub fn accuracy_changed(&mut self, _kind: SensorKind, _accuracy: Accuracy) {}

    /// Full view text: the info region followed by one line per sensor
    /// region, in kind order. Regions without a reading yet render a dash.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.info.len() + 128);
        out.push_str(&self.info);
        if !self.info.is_empty() && !self.info.ends_with('\n') {
            out.push('\n');
        }
        for kind in SensorKind::ALL {
            let region = self.region(kind);
            if region.is_empty() {
                out.push_str(&format!("{}: -\n", kind));
            } else {
                out.push_str(region);
                out.push('\n');
            }
        }
        out
    }
}

fn format_reading(reading: &Reading) -> String {
    let kind = reading.kind();
    match reading {
        Reading::Proximity(sample) => format!("{}: {} cm", kind, sample.measurement().inner()),
        Reading::AmbientLight(sample) => format!("{}: {} lux", kind, sample.measurement().inner()),
        _ => format!("{}: {:?}", kind, reading.components()),
    }
}
