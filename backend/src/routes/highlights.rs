use serde::{Deserialize, Serialize};

// =========================================================
// Hidden gems / engagement types + routes
// =========================================================

/// Well-rated app with few reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenGem {
    pub rank: usize,
    pub app: String,
    pub rating: f64,
    pub reviews: f64,
    pub hidden_gem_score: f64,
}

/// App with many reviews per rating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementEntry {
    pub rank: usize,
    pub app: String,
    pub rating: f64,
    pub reviews: f64,
    /// `null` in JSON when the rating is 0
    pub engagement_score: f64,
}

/// Route path for hidden gems
pub const GET_HIDDEN_GEMS: &str = "/hidden-gems";

/// Route path for top engagement
pub const GET_TOP_ENGAGEMENT: &str = "/engagement";
