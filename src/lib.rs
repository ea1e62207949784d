pub mod models {
    pub mod analysis;
}
pub mod config {
    pub mod keywords;
}
pub mod analyzer {
    pub mod normalize;
    pub mod rules;
}

pub use analyzer::rules::analyze_message;
pub use models::analysis::{Analysis, AnalysisKind};
