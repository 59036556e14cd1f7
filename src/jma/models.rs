use serde::Deserialize;
use std::collections::BTreeMap;

// area.json
//  └── offices
//       └── "<code>"
//            └── name
//
// forecast/<code>.json  (array of reports)
//  └── [0]
//       ├── publishingOffice
//       ├── reportDatetime
//       └── timeSeries
//            └── [0]
//                 ├── timeDefines   [date, ...]
//                 └── areas
//                      └── [0]
//                           └── weathers  [text, ...]  aligned with timeDefines
//
// Everything is optional; the mapping layer decides what to do with holes.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AreaCatalog {
    #[serde(default)]
    pub offices: BTreeMap<String, OfficeInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfficeInfo {
    // `null` and missing both read as no name.
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub publishing_office: Option<String>,
    pub report_datetime: Option<String>,
    pub time_series: Option<Vec<TimeSeries>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    #[serde(default)]
    pub time_defines: Vec<String>,
    #[serde(default)]
    pub areas: Vec<ForecastArea>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ForecastArea {
    #[serde(default)]
    pub weathers: Vec<String>,
}
