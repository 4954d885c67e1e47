use crate::models::SeniorityLevel;

/// Title keywords checked in order when inferring seniority
const LEVEL_KEYWORDS: &[(&[&str], SeniorityLevel)] = &[
    (&["senior", "sr"], SeniorityLevel::Senior),
    (&["junior", "jr"], SeniorityLevel::Junior),
    (&["lead"], SeniorityLevel::Lead),
    (&["principal"], SeniorityLevel::Principal),
    (&["staff"], SeniorityLevel::Staff),
];

impl SeniorityLevel {
    /// Ordinal rank in the level hierarchy (junior = 1 .. principal = 5)
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            SeniorityLevel::Junior => 1,
            SeniorityLevel::Staff => 2,
            SeniorityLevel::Senior => 3,
            SeniorityLevel::Lead => 4,
            SeniorityLevel::Principal => 5,
        }
    }
}

/// Whether a candidate's level meets the required level.
///
/// A missing level on either side is not penalized.
#[inline]
pub fn level_satisfies(required: Option<SeniorityLevel>, held: Option<SeniorityLevel>) -> bool {
    match (required, held) {
        (Some(required), Some(held)) => held.rank() >= required.rank(),
        _ => true,
    }
}

/// Infer seniority from a free-form title by keyword containment
pub fn infer_level(title: &str) -> Option<SeniorityLevel> {
    let title = title.to_lowercase();
    LEVEL_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| title.contains(kw)))
        .map(|(_, level)| *level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert!(SeniorityLevel::Junior.rank() < SeniorityLevel::Staff.rank());
        assert!(SeniorityLevel::Staff.rank() < SeniorityLevel::Senior.rank());
        assert!(SeniorityLevel::Senior.rank() < SeniorityLevel::Lead.rank());
        assert!(SeniorityLevel::Lead.rank() < SeniorityLevel::Principal.rank());
    }

    #[test]
    fn test_level_satisfies() {
        use SeniorityLevel::*;
        assert!(level_satisfies(Some(Senior), Some(Principal)));
        assert!(level_satisfies(Some(Senior), Some(Senior)));
        assert!(!level_satisfies(Some(Lead), Some(Staff)));
        assert!(level_satisfies(None, Some(Junior)));
        assert!(level_satisfies(Some(Principal), None));
    }

    #[test]
    fn test_infer_level() {
        assert_eq!(infer_level("Senior Data Engineer"), Some(SeniorityLevel::Senior));
        assert_eq!(infer_level("Jr. Developer"), Some(SeniorityLevel::Junior));
        assert_eq!(infer_level("Team Lead"), Some(SeniorityLevel::Lead));
        assert_eq!(infer_level("Principal Architect"), Some(SeniorityLevel::Principal));
        assert_eq!(infer_level("Staff Engineer"), Some(SeniorityLevel::Staff));
        assert_eq!(infer_level("Data Analyst"), None);
    }
}
