//! Option catalogs for the project description form.
//!
//! Each catalog is an ordered list of suggestions. Nothing here is enforced:
//! the recommendation service matches on these exact strings, but the form
//! accepts free text for every select field.

use std::fmt;

use super::foundation::ValidationError;

pub const PROJECT_TYPES: &[&str] = &[
    "Web App",
    "Mobile App",
    "SaaS Platform",
    "Progressive Web App (PWA)",
    "CMS / Blog Platform",
    "Static Website / Portfolio",
    "REST / GraphQL API",
    "Microservices Architecture",
    "Browser Extension",
    "Desktop Application",
    "CLI Tool",
    "Data Science / ML Pipeline",
    "IoT System",
    "Robotics System",
    "Embedded System Software",
    "Device Driver",
    "Game",
];

pub const DOMAINS: &[&str] = &[
    "E-commerce",
    "Fintech",
    "Healthcare",
    "Education",
    "Social Media",
    "Entertainment & Media",
    "Logistics & Supply Chain",
    "Real Estate",
    "Travel & Hospitality",
    "Government & Public Sector",
    "Manufacturing",
    "Agriculture",
    "Energy & Utilities",
    "Gaming",
    "Developer Tools",
    "Scientific Research",
];

pub const SCALES: &[&str] = &[
    "Prototype / MVP",
    "Academic / Research Project",
    "Small (Hundreds of users)",
    "Medium (Thousands of users)",
    "Large (Millions of users)",
    "Enterprise (Global scale)",
];

pub const TEAM_SIZES: &[&str] = &[
    "Solo Developer",
    "Small Team (2-10)",
    "Mid-sized Team (10-50)",
    "Large Organization (50+)",
];

pub const BUDGETS: &[&str] = &[
    "Zero ($0) - Open Source only",
    "Tight / Bootstrapped",
    "Moderate",
    "High / Well-funded",
    "Enterprise / Unlimited",
];

pub const PRIORITIES: &[&str] = &[
    "Functionality & Correctness",
    "Performance & Efficiency",
    "Security & Privacy",
    "Scalability",
    "Development Speed",
    "Time-to-Market",
    "Maintainability",
    "Cost Efficiency",
    "Power & Resource Efficiency",
    "Hardware Integration",
    "Serverless",
];

/// The five free-text select fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ProjectType,
    Domain,
    ExpectedScale,
    TeamSize,
    Budget,
}

impl FormField {
    /// All select fields in form order.
    pub const ALL: [FormField; 5] = [
        FormField::ProjectType,
        FormField::Domain,
        FormField::ExpectedScale,
        FormField::TeamSize,
        FormField::Budget,
    ];

    /// JSON key used in the request body.
    pub fn key(&self) -> &'static str {
        match self {
            FormField::ProjectType => "project_type",
            FormField::Domain => "domain",
            FormField::ExpectedScale => "expected_scale",
            FormField::TeamSize => "team_size",
            FormField::Budget => "budget",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::ProjectType => "Project Type",
            FormField::Domain => "Domain",
            FormField::ExpectedScale => "Expected Scale",
            FormField::TeamSize => "Team Size",
            FormField::Budget => "Budget",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::ProjectType => "Select Project Type...",
            FormField::Domain => "Select Domain...",
            FormField::ExpectedScale => "Select Scale...",
            FormField::TeamSize => "Select Team Size...",
            FormField::Budget => "Select Budget...",
        }
    }

    /// Suggestions offered for this field.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FormField::ProjectType => PROJECT_TYPES,
            FormField::Domain => DOMAINS,
            FormField::ExpectedScale => SCALES,
            FormField::TeamSize => TEAM_SIZES,
            FormField::Budget => BUDGETS,
        }
    }

    /// Parses a JSON key or one of the short aliases used at the prompt.
    pub fn from_key(key: &str) -> Result<Self, ValidationError> {
        match key.trim().to_ascii_lowercase().as_str() {
            "project_type" | "type" => Ok(FormField::ProjectType),
            "domain" => Ok(FormField::Domain),
            "expected_scale" | "scale" => Ok(FormField::ExpectedScale),
            "team_size" | "team" => Ok(FormField::TeamSize),
            "budget" => Ok(FormField::Budget),
            other => Err(ValidationError::unknown_field(other)),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
