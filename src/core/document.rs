use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "iphone销量";
pub const DEFAULT_SUBTEXT: &str = "纯属虚构";

/// Declarative option set handed to the rendering surface.
///
/// Field names serialize in the camelCase shape chart surfaces expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptionsDocument {
    pub title: Title,
    #[serde(default)]
    pub tooltip: Tooltip,
    pub legend: Legend,
    #[serde(default)]
    pub visual_map: VisualMap,
    #[serde(default)]
    pub toolbox: Toolbox,
    pub series: Vec<MapSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    #[serde(default)]
    pub subtext: String,
    #[serde(default = "default_center")]
    pub left: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub trigger: String,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            trigger: "item".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    #[serde(default = "default_vertical")]
    pub orient: String,
    #[serde(default = "default_left")]
    pub left: String,
    pub data: Vec<String>,
}

/// Continuous color scale mapping region values to shades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualMap {
    pub min: f64,
    pub max: f64,
    pub left: String,
    pub top: String,
    /// High label first, low label second.
    pub text: [String; 2],
    pub calculable: bool,
}

impl Default for VisualMap {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 2500.0,
            left: "left".to_owned(),
            top: "bottom".to_owned(),
            text: ["高".to_owned(), "低".to_owned()],
            calculable: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toolbox {
    pub show: bool,
    pub orient: String,
    pub left: String,
    pub top: String,
    pub feature: ToolboxFeatures,
}

impl Default for Toolbox {
    fn default() -> Self {
        Self {
            show: true,
            orient: "vertical".to_owned(),
            left: "right".to_owned(),
            top: "center".to_owned(),
            feature: ToolboxFeatures::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolboxFeatures {
    pub data_view: DataViewFeature,
    pub restore: EmptyFeature,
    pub save_as_image: EmptyFeature,
}

impl Default for ToolboxFeatures {
    fn default() -> Self {
        Self {
            data_view: DataViewFeature { read_only: false },
            restore: EmptyFeature {},
            save_as_image: EmptyFeature {},
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataViewFeature {
    pub read_only: bool,
}

/// Toolbox entry enabled by presence alone; serializes as `{}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyFeature {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    #[default]
    Map,
}

/// One choropleth series bound to a registered map by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSeries {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: SeriesKind,
    pub map_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roam: Option<bool>,
    #[serde(default)]
    pub label: SeriesLabel,
    pub data: Vec<RegionDatum>,
}

impl MapSeries {
    /// Value of the first datum named `region`.
    #[must_use]
    pub fn region_value(&self, region: &str) -> Option<u32> {
        self.data
            .iter()
            .find(|datum| datum.name == region)
            .map(|datum| datum.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesLabel {
    pub normal: LabelVisibility,
    pub emphasis: LabelVisibility,
}

impl Default for SeriesLabel {
    fn default() -> Self {
        Self {
            normal: LabelVisibility { show: true },
            emphasis: LabelVisibility { show: true },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelVisibility {
    pub show: bool,
}

/// Value attached to a named region. Names that match no map feature are
/// kept as-is; surfaces decide how to treat them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDatum {
    pub name: String,
    pub value: u32,
}

impl ChartOptionsDocument {
    /// Builds the three-series sales demo bound to `map_id`.
    ///
    /// Every region value is drawn once from `0..value_bound`.
    pub fn sales_demo<R: Rng + ?Sized>(
        map_id: &str,
        title: &str,
        value_bound: u32,
        rng: &mut R,
    ) -> Self {
        let bound = value_bound.max(1);
        let mut datum = |name: &str| RegionDatum {
            name: name.to_owned(),
            value: rng.gen_range(0..bound),
        };
        let series = vec![
            MapSeries {
                name: "iphone3".to_owned(),
                kind: SeriesKind::Map,
                map_type: map_id.to_owned(),
                roam: Some(false),
                label: SeriesLabel::default(),
                data: vec![datum("NO11"), datum("NO13"), datum("NO12")],
            },
            MapSeries {
                name: "iphone4".to_owned(),
                kind: SeriesKind::Map,
                map_type: map_id.to_owned(),
                roam: None,
                label: SeriesLabel::default(),
                data: vec![datum("NO12"), datum("NO12")],
            },
            MapSeries {
                name: "iphone5".to_owned(),
                kind: SeriesKind::Map,
                map_type: map_id.to_owned(),
                roam: None,
                label: SeriesLabel::default(),
                data: vec![datum("NO11"), datum("天津")],
            },
        ];

        Self {
            title: Title {
                text: title.to_owned(),
                subtext: DEFAULT_SUBTEXT.to_owned(),
                left: default_center(),
            },
            tooltip: Tooltip::default(),
            legend: Legend {
                orient: default_vertical(),
                left: default_left(),
                data: series.iter().map(|s| s.name.clone()).collect(),
            },
            visual_map: VisualMap::default(),
            toolbox: Toolbox::default(),
            series,
        }
    }

    /// Distinct map ids referenced by the series, in first-use order.
    #[must_use]
    pub fn map_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for series in &self.series {
            if !ids.contains(&series.map_type.as_str()) {
                ids.push(&series.map_type);
            }
        }
        ids
    }

    /// Region data of every series, for comparing values across updates.
    #[must_use]
    pub fn region_snapshot(&self) -> Vec<Vec<RegionDatum>> {
        self.series.iter().map(|s| s.data.clone()).collect()
    }

    /// Returns a copy with the title, first series name, and first legend
    /// entry set to `label`. Region data is left untouched.
    #[must_use]
    pub fn relabeled(&self, label: &str) -> Self {
        let mut next = self.clone();
        next.title.text = label.to_owned();
        if let Some(first) = next.series.first_mut() {
            first.name = label.to_owned();
        }
        match next.legend.data.first_mut() {
            Some(entry) => *entry = label.to_owned(),
            None => next.legend.data.push(label.to_owned()),
        }
        next
    }
}

fn default_center() -> String {
    "center".to_owned()
}

fn default_left() -> String {
    "left".to_owned()
}

fn default_vertical() -> String {
    "vertical".to_owned()
}
