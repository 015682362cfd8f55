//! Results view: a pure projection of a `RecommendationResponse`.
//!
//! Nothing here owns state. `ResultsView::project` turns the payload into the
//! panels and cards a renderer draws, and `reset` produces the only event the
//! view can emit.

use super::recommendation::{
    format_score, Benefit, CategoryResult, DeploymentStrategy, RecommendationResponse,
    ScoredTechnology,
};

pub const VIEW_TITLE: &str = "Your Tech Stack";
pub const RESET_LABEL: &str = "Start New Project";
pub const DEPLOYMENT_HEADING: &str = "Recommended Deployment Strategy";
pub const PLATFORMS_HEADING: &str = "Target Platforms";
pub const ADVANTAGES_HEADING: &str = "Pro Advantages";
pub const WHY_HEADING: &str = "Why this?";
pub const NOTES_HEADING: &str = "Analysis Notes";
pub const ALTERNATIVES_HEADING: &str = "Close Alternatives";
pub const EMPTY_CATEGORY: &str = "No specific recommendation";

/// Alternatives shown per card.
pub const MAX_ALTERNATIVES: usize = 3;
/// Reasons shown in an alternative's hover detail.
pub const MAX_TOOLTIP_REASONS: usize = 2;

/// Accent bar color of a category card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryAccent {
    Frontend,
    Backend,
    Database,
    DevOps,
    Hardware,
    Default,
}

impl CategoryAccent {
    /// Looks up the accent for a category label. Unknown labels get `Default`.
    pub fn for_category(category: &str) -> Self {
        match category {
            "Frontend" => CategoryAccent::Frontend,
            "Backend" => CategoryAccent::Backend,
            "Database" => CategoryAccent::Database,
            "DevOps" => CategoryAccent::DevOps,
            "Hardware" => CategoryAccent::Hardware,
            _ => CategoryAccent::Default,
        }
    }

    pub fn gradient(&self) -> &'static str {
        match self {
            CategoryAccent::Frontend => "from-blue-400 to-cyan-400",
            CategoryAccent::Backend => "from-emerald-400 to-green-500",
            CategoryAccent::Database => "from-amber-400 to-orange-500",
            CategoryAccent::DevOps => "from-gray-400 to-gray-600",
            CategoryAccent::Hardware => "from-red-400 to-rose-500",
            CategoryAccent::Default => "from-indigo-400 to-purple-500",
        }
    }

    /// SGR color code used by the terminal renderer.
    pub fn ansi(&self) -> u8 {
        match self {
            CategoryAccent::Frontend => 36,
            CategoryAccent::Backend => 32,
            CategoryAccent::Database => 33,
            CategoryAccent::DevOps => 90,
            CategoryAccent::Hardware => 31,
            CategoryAccent::Default => 35,
        }
    }
}

/// Emitted by the results view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsEvent {
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentPanel {
    pub title: String,
    pub description: String,
    pub platforms: Vec<String>,
}

impl From<&DeploymentStrategy> for DeploymentPanel {
    fn from(strategy: &DeploymentStrategy) -> Self {
        Self {
            title: strategy.title.clone(),
            description: strategy.description.clone(),
            platforms: strategy.recommended_platforms.clone(),
        }
    }
}

/// The main list under a top pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryList {
    Advantages(Vec<Benefit>),
    Why(Vec<String>),
}

impl PrimaryList {
    pub fn heading(&self) -> &'static str {
        match self {
            PrimaryList::Advantages(_) => ADVANTAGES_HEADING,
            PrimaryList::Why(_) => WHY_HEADING,
        }
    }
}

/// Hover detail of an alternative tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub name: String,
    pub reasons: Vec<String>,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativeTag {
    pub id: String,
    pub name: String,
    pub tooltip: Tooltip,
}

impl From<&ScoredTechnology> for AlternativeTag {
    fn from(alt: &ScoredTechnology) -> Self {
        Self {
            id: alt.technology.id.clone(),
            name: alt.technology.name.clone(),
            tooltip: Tooltip {
                name: alt.technology.name.clone(),
                reasons: alt.reason.iter().take(MAX_TOOLTIP_REASONS).cloned().collect(),
                score: format_score(alt.score),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopPickPanel {
    pub name: String,
    pub description: String,
    pub primary: Option<PrimaryList>,
    pub analysis_notes: Option<Vec<String>>,
    pub alternatives: Vec<AlternativeTag>,
}

impl TopPickPanel {
    fn project(pick: &ScoredTechnology, alternatives: &[ScoredTechnology]) -> Self {
        let benefits = &pick.technology.key_benefits;
        let has_reasons = !pick.reason.is_empty();

        let primary = if !benefits.is_empty() {
            Some(PrimaryList::Advantages(
                benefits.iter().map(|b| Benefit::parse(b)).collect(),
            ))
        } else if has_reasons {
            Some(PrimaryList::Why(pick.reason.clone()))
        } else {
            None
        };

        // Reasons repeat under the advantages as notes; never under the why list.
        let analysis_notes = match primary {
            Some(PrimaryList::Advantages(_)) if has_reasons => Some(pick.reason.clone()),
            _ => None,
        };

        Self {
            name: pick.technology.name.clone(),
            description: pick.technology.description.clone(),
            primary,
            analysis_notes,
            alternatives: alternatives
                .iter()
                .take(MAX_ALTERNATIVES)
                .map(AlternativeTag::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody {
    TopPick(TopPickPanel),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCard {
    pub category: String,
    pub accent: CategoryAccent,
    pub body: CardBody,
}

impl From<&CategoryResult> for CategoryCard {
    fn from(result: &CategoryResult) -> Self {
        let body = match &result.top_pick {
            Some(pick) => CardBody::TopPick(TopPickPanel::project(pick, &result.alternatives)),
            None => CardBody::Empty,
        };
        Self {
            category: result.category.clone(),
            accent: CategoryAccent::for_category(&result.category),
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub project_name: String,
    pub deployment: Option<DeploymentPanel>,
    pub cards: Vec<CategoryCard>,
}

impl ResultsView {
    pub fn project(response: &RecommendationResponse) -> Self {
        Self {
            project_name: response.project_name.clone(),
            deployment: response.deployment_strategy.as_ref().map(DeploymentPanel::from),
            cards: response.results.iter().map(CategoryCard::from).collect(),
        }
    }

    /// The reset control.
    pub fn reset(&self) -> ResultsEvent {
        ResultsEvent::Reset
    }
}
