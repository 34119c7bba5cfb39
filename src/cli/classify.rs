//! Classify CLI command

use crate::classifier;
use crate::error::FinanceResult;

/// Print the inferred category for a description
pub fn handle_classify_command(description: &str) -> FinanceResult<()> {
    let category = classifier::classify(description);
    println!("Predicted category: {category}");
    Ok(())
}
