use serde::{Deserialize, Serialize};

use crate::types::{Audience, MeasurementId};

/// Canonical body measurements for one audience/size cell of the standard
/// anthropometric table. Absent fields mean the table has no opinion; garment
/// length on adult grids is a style choice, not anthropometry, so adult rows
/// carry circumferences only. Baby rows carry length (body height drives baby
/// sizing).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardMeasurements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bust: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

impl StandardMeasurements {
    pub fn get(&self, id: MeasurementId) -> Option<f64> {
        match id {
            MeasurementId::Bust => self.bust,
            MeasurementId::Waist => self.waist,
            MeasurementId::Hip => self.hip,
            MeasurementId::Length => self.length,
        }
    }
}

/// Lookup of canonical cm values by audience and size label. Pure data, no
/// logic; implementations decide where the data lives.
pub trait StandardTable {
    fn measurements(&self, audience: Audience, size_label: &str) -> Option<StandardMeasurements>;
}

/// Built-in table for the Brazilian market grids the engine ships.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrStandardTable;

fn adult(bust: f64, waist: f64, hip: f64) -> StandardMeasurements {
    StandardMeasurements { bust: Some(bust), waist: Some(waist), hip: Some(hip), length: None }
}

fn baby(length: f64) -> StandardMeasurements {
    StandardMeasurements { bust: None, waist: None, hip: None, length: Some(length) }
}

impl StandardTable for BrStandardTable {
    fn measurements(&self, audience: Audience, size_label: &str) -> Option<StandardMeasurements> {
        use Audience::*;
        let row = match (audience, size_label) {
            (Female, "PP") => adult(82.0, 64.0, 88.0),
            (Female, "P") => adult(86.0, 68.0, 92.0),
            (Female, "M") => adult(90.0, 72.0, 96.0),
            (Female, "G") => adult(94.0, 76.0, 100.0),
            (Female, "GG") => adult(98.0, 80.0, 104.0),

            (Female, "36") => adult(80.0, 62.0, 86.0),
            (Female, "38") => adult(84.0, 66.0, 90.0),
            (Female, "40") => adult(88.0, 70.0, 94.0),
            (Female, "42") => adult(92.0, 74.0, 98.0),
            (Female, "44") => adult(96.0, 78.0, 102.0),
            (Female, "46") => adult(100.0, 82.0, 106.0),

            (Female, "G1") => adult(108.0, 92.0, 114.0),
            (Female, "G2") => adult(112.0, 96.0, 118.0),
            (Female, "G3") => adult(116.0, 100.0, 122.0),
            (Female, "G4") => adult(120.0, 104.0, 126.0),
            (Female, "G5") => adult(124.0, 108.0, 130.0),

            (Male, "P") => adult(92.0, 78.0, 94.0),
            (Male, "M") => adult(96.0, 82.0, 98.0),
            (Male, "G") => adult(100.0, 86.0, 102.0),
            (Male, "GG") => adult(104.0, 90.0, 106.0),
            (Male, "XG") => adult(108.0, 94.0, 110.0),

            (Male, "38") => adult(92.0, 78.0, 94.0),
            (Male, "40") => adult(96.0, 82.0, 98.0),
            (Male, "42") => adult(100.0, 86.0, 102.0),
            (Male, "44") => adult(104.0, 90.0, 106.0),
            (Male, "46") => adult(108.0, 94.0, 110.0),
            (Male, "48") => adult(112.0, 98.0, 114.0),

            (Kids, "RN") => baby(50.0),
            (Kids, "3M") => baby(56.0),
            (Kids, "6M") => baby(62.0),
            (Kids, "9M") => baby(68.0),
            (Kids, "12M") => baby(74.0),

            (Kids, "2") => adult(54.0, 52.0, 56.0),
            (Kids, "4") => adult(58.0, 54.0, 60.0),
            (Kids, "6") => adult(62.0, 57.0, 65.0),
            (Kids, "8") => adult(66.0, 60.0, 70.0),

            (Kids, "10") => adult(74.0, 60.0, 78.0),
            (Kids, "12") => adult(78.0, 62.0, 82.0),
            (Kids, "14") => adult(82.0, 64.0, 86.0),
            (Kids, "16") => adult(86.0, 66.0, 90.0),

            _ => return None,
        };
        Some(row)
    }
}
