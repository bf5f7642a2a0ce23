//! The injected color configuration backing the fallback color assignment.

/// One hue of the chart palette: a ten swatch ramp indexed by intensity,
/// from 10 (lightest) to 100 (darkest) in steps of 10.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorFamily {
    swatches: [String; 10],
}

impl ColorFamily {
    pub(crate) const INTENSITY_STEP: u32 = 10;

    const SWATCH_COUNT: u32 = 10;

    pub fn new(swatches: [String; 10]) -> ColorFamily {
        Self { swatches }
    }

    /// Returns the swatch at the given intensity. Intensities outside the
    /// ramp clamp to the nearest swatch.
    pub fn swatch(&self, intensity: u32) -> &str {
        let step = (intensity / Self::INTENSITY_STEP).clamp(1, Self::SWATCH_COUNT);
        &self.swatches[step as usize - 1]
    }
}

/// The color configuration of a chart: ordered default color families that
/// are cycled per group, plus a separate ramp of muted colors for the
/// preview state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPalette {
    families: Vec<ColorFamily>,
    disabled: Vec<String>,
}

impl ChartPalette {
    /// The intensity of the first fallback assignment.
    pub(crate) const START_INTENSITY: u32 = 50;
    /// The upper bound of the intensity walk.
    pub(crate) const MAX_INTENSITY: u32 = 100;
    /// The restart point once the walk tops out.
    pub(crate) const WRAP_INTENSITY: u32 = 40;

    pub fn new(families: Vec<ColorFamily>, disabled: Vec<String>) -> ChartPalette {
        Self { families, disabled }
    }

    /// Returns the preview color for the group at `index`, cycling the
    /// disabled ramp. An empty ramp yields an empty color.
    pub fn disabled_color(&self, index: usize) -> &str {
        if self.disabled.is_empty() {
            return "";
        }

        &self.disabled[index % self.disabled.len()]
    }

    /// Returns the default color for the group at `index` at the given
    /// intensity, cycling the color families. An empty palette yields an
    /// empty color.
    pub fn fallback_color(&self, index: usize, intensity: u32) -> &str {
        if self.families.is_empty() {
            return "";
        }

        self.families[index % self.families.len()].swatch(intensity)
    }
}

impl Default for ChartPalette {
    /// The stock palette: seven IBM Design Language color families and a
    /// grey disabled ramp.
    fn default() -> ChartPalette {
        Self {
            families: vec![
                ColorFamily::new(BLUE.map(String::from)),
                ColorFamily::new(CYAN.map(String::from)),
                ColorFamily::new(GREEN.map(String::from)),
                ColorFamily::new(MAGENTA.map(String::from)),
                ColorFamily::new(PURPLE.map(String::from)),
                ColorFamily::new(RED.map(String::from)),
                ColorFamily::new(TEAL.map(String::from)),
            ],
            disabled: DISABLED.map(String::from).to_vec(),
        }
    }
}

const BLUE: [&str; 10] = [
    "#edf5ff", "#d0e2ff", "#a6c8ff", "#78a9ff", "#4589ff", "#0f62fe", "#0043ce", "#002d9c",
    "#001d6c", "#001141",
];

const CYAN: [&str; 10] = [
    "#e5f6ff", "#bae6ff", "#82cfff", "#33b1ff", "#1192e8", "#0072c3", "#00539a", "#003a6d",
    "#012749", "#061727",
];

const GREEN: [&str; 10] = [
    "#defbe6", "#a7f0ba", "#6fdc8c", "#42be65", "#24a148", "#198038", "#0e6027", "#044317",
    "#022d0d", "#071908",
];

const MAGENTA: [&str; 10] = [
    "#fff0f7", "#ffd6e8", "#ffafd2", "#ff7eb6", "#ee5396", "#d02670", "#9f1853", "#740937",
    "#510224", "#2a0a18",
];

const PURPLE: [&str; 10] = [
    "#f6f2ff", "#e8daff", "#d4bbff", "#be95ff", "#a56eff", "#8a3ffc", "#6929c4", "#491d8b",
    "#31135e", "#1c0f30",
];

const RED: [&str; 10] = [
    "#fff1f1", "#ffd7d9", "#ffb3b8", "#ff8389", "#fa4d56", "#da1e28", "#a2191f", "#750e13",
    "#520408", "#2d0709",
];

const TEAL: [&str; 10] = [
    "#d9fbfb", "#9ef0f0", "#3ddbd9", "#08bdba", "#009d9a", "#007d79", "#005d5d", "#004144",
    "#022b30", "#081a1c",
];

const DISABLED: [&str; 4] = ["#8d8d8d", "#a8a8a8", "#c6c6c6", "#e0e0e0"];
