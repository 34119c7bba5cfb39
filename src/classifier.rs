//! Keyword-based expense category inference
//!
//! No model, no training data: a fixed table of keywords per category,
//! checked in a fixed precedence order against the lower-cased description.
//! The first category with any keyword present wins, and anything the table
//! does not recognize falls through to [`ExpenseCategory::Other`].

use crate::models::ExpenseCategory;

/// Keyword table in precedence order. `Other` is the implicit fallback and
/// deliberately has no keywords.
const KEYWORDS: &[(ExpenseCategory, &[&str])] = &[
    (
        ExpenseCategory::Food,
        &[
            "lunch",
            "dinner",
            "breakfast",
            "food",
            "restaurant",
            "cafe",
            "pizza",
            "burger",
        ],
    ),
    (
        ExpenseCategory::Transportation,
        &["bus", "train", "uber", "taxi", "gas", "parking", "metro"],
    ),
    (
        ExpenseCategory::Entertainment,
        &["movie", "game", "concert", "party", "streaming", "music"],
    ),
    (
        ExpenseCategory::Books,
        &["book", "textbook", "amazon", "study", "notes", "supplies"],
    ),
    (
        ExpenseCategory::Health,
        &["pharmacy", "doctor", "medicine", "gym", "health"],
    ),
];

/// Descriptions this short never trigger a suggestion; the user has barely
/// started typing.
pub const SUGGESTION_THRESHOLD: usize = 3;

/// Infer a category from a free-text expense description.
///
/// Matching is case-insensitive substring search. Ties are broken by
/// precedence: a description containing both a Food and a Transportation
/// keyword is Food, because Food is checked first. Total over all inputs -
/// the empty string is simply [`ExpenseCategory::Other`].
pub fn classify(description: &str) -> ExpenseCategory {
    let desc = description.to_lowercase();
    for (category, words) in KEYWORDS {
        if words.iter().any(|word| desc.contains(word)) {
            return *category;
        }
    }
    ExpenseCategory::Other
}

/// The auto-inference contract used while a description field is being
/// edited: suggest a category only once the text exceeds
/// [`SUGGESTION_THRESHOLD`] characters and only while no category has been
/// chosen by hand. Once `chosen` is set the suggestion stays off for the
/// rest of the edit, even if the text changes again.
pub fn suggest(description: &str, chosen: Option<ExpenseCategory>) -> Option<ExpenseCategory> {
    if chosen.is_some() {
        return None;
    }
    if description.chars().count() <= SUGGESTION_THRESHOLD {
        return None;
    }
    Some(classify(description))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_descriptions() {
        assert_eq!(classify("Lunch at cafeteria"), ExpenseCategory::Food);
        assert_eq!(classify("Bus ticket"), ExpenseCategory::Transportation);
        assert_eq!(classify("Movie tickets"), ExpenseCategory::Entertainment);
        assert_eq!(classify("Textbook rental"), ExpenseCategory::Books);
        assert_eq!(classify("Gym membership"), ExpenseCategory::Health);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("LUNCH AT CAFETERIA"), ExpenseCategory::Food);
        assert_eq!(classify("uBeR ride home"), ExpenseCategory::Transportation);
    }

    #[test]
    fn test_classify_falls_back_to_other() {
        assert_eq!(classify("Random gibberish xyz"), ExpenseCategory::Other);
        assert_eq!(classify(""), ExpenseCategory::Other);
    }

    #[test]
    fn test_classify_matches_substrings() {
        // "busy" contains "bus"; substring matching is the documented
        // behavior even when it is semantically wrong
        assert_eq!(classify("busy day snacks"), ExpenseCategory::Transportation);
    }

    #[test]
    fn test_precedence_food_beats_transportation() {
        // "lunch" (Food) and "bus" (Transportation) both match
        assert_eq!(classify("lunch on the bus"), ExpenseCategory::Food);
        assert_eq!(classify("bus ride to lunch"), ExpenseCategory::Food);
    }

    #[test]
    fn test_precedence_transportation_beats_entertainment() {
        assert_eq!(classify("taxi to the concert"), ExpenseCategory::Transportation);
    }

    #[test]
    fn test_suggest_requires_more_than_threshold() {
        assert_eq!(suggest("bus", None), None);
        assert_eq!(
            suggest("bus ticket", None),
            Some(ExpenseCategory::Transportation)
        );
    }

    #[test]
    fn test_suggest_defers_to_manual_choice() {
        assert_eq!(suggest("bus ticket", Some(ExpenseCategory::Other)), None);
    }

    #[test]
    fn test_suggest_on_unknown_text_is_other() {
        assert_eq!(suggest("zzzz", None), Some(ExpenseCategory::Other));
    }
}
