// Core algorithm exports
pub mod education;
pub mod experience;
pub mod levels;
pub mod similarity;
pub mod skills;
pub mod titles;

pub use education::{EducationConfig, EducationMatcher};
pub use experience::{ExperienceConfig, ExperienceMatcher, FactorWeights, TitleWeights};
pub use levels::{infer_level, level_satisfies};
pub use similarity::{FuzzySimilarity, Similarity, Strategy};
pub use skills::{SkillConfig, SkillMatcher};
pub use titles::{TitleCatalog, TitleEntry};
