//! Cached close-approach dataset loading.
//!
//! The cad.api response is columnar: a `fields` array naming columns and a
//! `data` array of string rows. Column positions are resolved by name once
//! per load so field reordering across API versions stays harmless.

use std::path::Path;

use crate::errors::CadError;

pub const CACHE_FILE: &str = "cad.customization.json";

#[derive(Debug)]
pub struct CloseApproach {
    pub time: String,
    pub dist_au: String,
    pub fullname: String,
}

#[derive(Debug)]
pub struct CadDataset {
    pub approaches: Vec<CloseApproach>,
}

pub fn load_cad_file(path: &Path) -> Result<CadDataset, CadError> {
    let text = std::fs::read_to_string(path)?;
    parse_cad_json(&text)
}

pub fn parse_cad_json(json: &str) -> Result<CadDataset, CadError> {
    let v: serde_json::Value = serde_json::from_str(json)?;

    let fields = v["fields"]
        .as_array()
        .ok_or(CadError::Malformed("missing 'fields' array"))?;
    let column = |name: &str| -> Result<usize, CadError> {
        fields
            .iter()
            .position(|f| f.as_str() == Some(name))
            .ok_or_else(|| CadError::MissingColumn(name.to_string()))
    };
    let cd_idx = column("cd")?;
    let dist_idx = column("dist")?;
    let fullname_idx = column("fullname")?;

    let data = v["data"]
        .as_array()
        .ok_or(CadError::Malformed("missing 'data' array"))?;

    let mut approaches = Vec::with_capacity(data.len());
    for row in data {
        let arr = match row.as_array() {
            Some(a) => a,
            None => continue,
        };
        let cell = |idx: usize| arr.get(idx).and_then(|v| v.as_str());
        let (time, dist_au, fullname) =
            match (cell(cd_idx), cell(dist_idx), cell(fullname_idx)) {
                (Some(t), Some(d), Some(n)) => (t, d, n),
                _ => continue,
            };
        approaches.push(CloseApproach {
            time: time.to_string(),
            dist_au: dist_au.to_string(),
            fullname: fullname.trim().to_string(),
        });
    }

    Ok(CadDataset { approaches })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_named_columns() {
        let json = r#"{
            "fields": ["des", "cd", "dist", "fullname"],
            "data": [["99942", "2029-Apr-13 21:46", "0.000254", "  99942 Apophis (2004 MN4)"]]
        }"#;
        let dataset = parse_cad_json(json).unwrap();
        assert_eq!(dataset.approaches.len(), 1);
        let a = &dataset.approaches[0];
        assert_eq!(a.time, "2029-Apr-13 21:46");
        assert_eq!(a.dist_au, "0.000254");
        assert_eq!(a.fullname, "99942 Apophis (2004 MN4)");
    }

    #[test]
    fn tolerates_field_reordering() {
        let json = r#"{
            "fields": ["fullname", "dist", "cd"],
            "data": [["433 Eros (A898 PA)", "0.174", "1900-Dec-27 01:07"]]
        }"#;
        let dataset = parse_cad_json(json).unwrap();
        let a = &dataset.approaches[0];
        assert_eq!(a.fullname, "433 Eros (A898 PA)");
        assert_eq!(a.dist_au, "0.174");
        assert_eq!(a.time, "1900-Dec-27 01:07");
    }

    #[test]
    fn missing_column_is_an_error() {
        let json = r#"{"fields": ["cd", "dist"], "data": []}"#;
        match parse_cad_json(json) {
            Err(CadError::MissingColumn(name)) => assert_eq!(name, "fullname"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn missing_top_level_keys_are_errors() {
        assert!(matches!(
            parse_cad_json(r#"{"data": []}"#),
            Err(CadError::Malformed(_))
        ));
        assert!(matches!(
            parse_cad_json(r#"{"fields": ["cd", "dist", "fullname"]}"#),
            Err(CadError::Malformed(_))
        ));
        assert!(matches!(parse_cad_json("not json"), Err(CadError::Json(_))));
    }

    #[test]
    fn drops_rows_with_missing_cells() {
        let json = r#"{
            "fields": ["cd", "dist", "fullname"],
            "data": [
                ["2010-Jan-01", "0.05", "good"],
                ["2010-Jan-02", "0.05"],
                "not a row",
                ["2010-Jan-03", null, "null dist"],
                ["2010-Jan-04", "0.07", "also good"]
            ]
        }"#;
        let dataset = parse_cad_json(json).unwrap();
        let names: Vec<&str> = dataset
            .approaches
            .iter()
            .map(|a| a.fullname.as_str())
            .collect();
        assert_eq!(names, ["good", "also good"]);
    }

    #[test]
    fn result_is_err_for_dataset_parse_failures() {
        let err = parse_cad_json(r#"{"fields": 7, "data": []}"#).unwrap_err();
        assert!(err.to_string().contains("fields"));
    }
}
