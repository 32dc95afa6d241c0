use super::Verdict;
use crate::{form::Feature, prediction::PredictionResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    /// Bold prefix such as `Alert:`.
    pub lead: Option<&'static str>,
    pub text: &'static str,
}

impl Recommendation {
    const fn plain(text: &'static str) -> Self {
        Self { lead: None, text }
    }

    const fn led(lead: &'static str, text: &'static str) -> Self {
        Self {
            lead: Some(lead),
            text,
        }
    }

    pub fn to_html(&self) -> String {
        match self.lead {
            Some(lead) => format!("<li><strong>{}</strong> {}</li>", lead, self.text),
            None => format!("<li>{}</li>", self.text),
        }
    }
}

const CHURN_ACTIONS: [Recommendation; 4] = [
    Recommendation::led(
        "Immediate Action Required:",
        "Contact customer retention team",
    ),
    Recommendation::plain("Review customer service interactions and resolve any issues"),
    Recommendation::plain("Offer personalized retention incentives or discounts"),
    Recommendation::plain("Schedule a follow-up call to understand concerns"),
];

const RETENTION_ACTIONS: [Recommendation; 4] = [
    Recommendation::plain("Customer appears satisfied - maintain current service quality"),
    Recommendation::plain("Consider upselling additional services or features"),
    Recommendation::plain("Send satisfaction survey to gather feedback"),
    Recommendation::plain("Reward loyalty with exclusive offers"),
];

pub const HIGH_SERVICE_CALLS: Recommendation = Recommendation::led(
    "Alert:",
    "High customer service calls detected - investigate issues",
);
pub const CONTRACT_NOT_RENEWED: Recommendation = Recommendation::led(
    "Alert:",
    "Contract not renewed - offer renewal incentives",
);
pub const HIGH_OVERAGE: Recommendation =
    Recommendation::plain("Consider upgrading customer to a higher plan to reduce overage fees");
pub const CONTRACT_RENEWED: Recommendation = Recommendation::led(
    "Positive:",
    "Contract renewed - customer shows commitment",
);
pub const LOW_SERVICE_CALLS: Recommendation = Recommendation::led(
    "Positive:",
    "Low customer service calls - good service experience",
);

/// Fixed actions for the verdict followed by the alerts the echoed inputs trigger.
/// Features that are missing or not numbers never trigger anything.
pub fn recommendations(verdict: Verdict, response: &PredictionResponse) -> Vec<Recommendation> {
    let feature = |f: Feature| response.feature(f.id());
    let mut list = Vec::with_capacity(7);

    match verdict {
        Verdict::Churn => {
            list.extend_from_slice(&CHURN_ACTIONS);
            if feature(Feature::CustServCalls).is_some_and(|calls| calls >= 4.0) {
                list.push(HIGH_SERVICE_CALLS);
            }
            if feature(Feature::ContractRenewal) == Some(0.0) {
                list.push(CONTRACT_NOT_RENEWED);
            }
            if feature(Feature::OverageFee).is_some_and(|fee| fee > 15.0) {
                list.push(HIGH_OVERAGE);
            }
        }
        Verdict::NotChurn => {
            list.extend_from_slice(&RETENTION_ACTIONS);
            if feature(Feature::ContractRenewal) == Some(1.0) {
                list.push(CONTRACT_RENEWED);
            }
            if feature(Feature::CustServCalls).is_some_and(|calls| calls <= 1.0) {
                list.push(LOW_SERVICE_CALLS);
            }
        }
    }

    list
}

pub fn to_html(list: &[Recommendation]) -> String {
    let mut html = String::from("<h4><i class=\"fas fa-lightbulb\"></i> Recommendations</h4><ul>");
    for item in list {
        html.push_str(&item.to_html());
    }
    html.push_str("</ul>");
    html
}
