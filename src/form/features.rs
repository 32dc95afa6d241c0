use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Customer account attributes the model is trained on. The name doubles as
/// the input element id and the JSON key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    AccountWeeks,
    ContractRenewal,
    DataPlan,
    DataUsage,
    CustServCalls,
    DayMins,
    DayCalls,
    MonthlyCharge,
    OverageFee,
    RoamMins,
}

impl Feature {
    pub const ALL: [Feature; 10] = [
        Feature::AccountWeeks,
        Feature::ContractRenewal,
        Feature::DataPlan,
        Feature::DataUsage,
        Feature::CustServCalls,
        Feature::DayMins,
        Feature::DayCalls,
        Feature::MonthlyCharge,
        Feature::OverageFee,
        Feature::RoamMins,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Feature::AccountWeeks => "AccountWeeks",
            Feature::ContractRenewal => "ContractRenewal",
            Feature::DataPlan => "DataPlan",
            Feature::DataUsage => "DataUsage",
            Feature::CustServCalls => "CustServCalls",
            Feature::DayMins => "DayMins",
            Feature::DayCalls => "DayCalls",
            Feature::MonthlyCharge => "MonthlyCharge",
            Feature::OverageFee => "OverageFee",
            Feature::RoamMins => "RoamMins",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Canned customer profiles for trying the form out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplePreset {
    #[default]
    NotChurn,
    Churn,
}

impl SamplePreset {
    pub fn name(self) -> &'static str {
        match self {
            SamplePreset::NotChurn => "not_churn",
            SamplePreset::Churn => "churn",
        }
    }

    /// Literal field values, written as the text the inputs will hold.
    pub fn values(self) -> [(Feature, &'static str); 10] {
        match self {
            SamplePreset::NotChurn => [
                (Feature::AccountWeeks, "128"),
                (Feature::ContractRenewal, "1"),
                (Feature::DataPlan, "1"),
                (Feature::DataUsage, "2.7"),
                (Feature::CustServCalls, "1"),
                (Feature::DayMins, "265.1"),
                (Feature::DayCalls, "110"),
                (Feature::MonthlyCharge, "89"),
                (Feature::OverageFee, "9.87"),
                (Feature::RoamMins, "10"),
            ],
            SamplePreset::Churn => [
                (Feature::AccountWeeks, "65"),
                (Feature::ContractRenewal, "0"),
                (Feature::DataPlan, "0"),
                (Feature::DataUsage, "0.29"),
                (Feature::CustServCalls, "4"),
                (Feature::DayMins, "129.1"),
                (Feature::DayCalls, "137"),
                (Feature::MonthlyCharge, "44.9"),
                (Feature::OverageFee, "11.43"),
                (Feature::RoamMins, "12.7"),
            ],
        }
    }
}

impl FromStr for SamplePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "not_churn" => Ok(SamplePreset::NotChurn),
            "churn" => Ok(SamplePreset::Churn),
            other => Err(Error::UnknownPreset {
                name: other.to_string(),
            }),
        }
    }
}
