use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::LocalizedName;

/// Minimum similarity for a fuzzy name suggestion.
const FUZZY_THRESHOLD: f64 = 0.8;

/// A catalog entry the user can refer to by id or by name.
#[derive(Debug, Clone, Copy)]
pub struct Reference<'a> {
    pub id: &'a str,
    pub name: &'a LocalizedName,
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Exact match on id, then on any translated name (case-insensitive).
pub fn find_exact<'a>(candidates: &[Reference<'a>], input: &str) -> Option<&'a str> {
    let input = input.trim();
    candidates
        .iter()
        .find(|c| c.id == input)
        .or_else(|| candidates.iter().find(|c| c.name.matches(input)))
        .map(|c| c.id)
}

/// Candidates whose display name is similar to `input`, best first.
pub fn fuzzy_matches<'a>(
    candidates: &[Reference<'a>],
    input: &str,
    language: &str,
) -> Vec<(Reference<'a>, f64)> {
    let needle = input.trim().to_lowercase();
    let mut matches: Vec<(Reference<'a>, f64)> = candidates
        .iter()
        .map(|c| (*c, jaro_winkler(&c.name.resolve(language).to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    matches
}

/// Resolve what the user typed to a catalog id.
///
/// Falls back to a confirm or select prompt over fuzzy matches. Returns
/// `None` when nothing matches or the user declines every suggestion.
pub fn resolve_reference(
    candidates: &[Reference<'_>],
    input: &str,
    language: &str,
    kind: &str,
) -> Result<Option<String>> {
    if let Some(id) = find_exact(candidates, input) {
        return Ok(Some(id.to_string()));
    }

    let matches = fuzzy_matches(candidates, input, language);

    if matches.is_empty() {
        println!("No matching {} found for '{}'", kind, input);
        return Ok(None);
    }

    if matches.len() == 1 {
        let (reference, _) = matches[0];
        let confirm = prompt_yes_no(
            &format!("Did you mean '{}'?", reference.name.resolve(language)),
            true,
        )?;
        return Ok(confirm.then(|| reference.id.to_string()));
    }

    // Multiple matches - let user select
    let options: Vec<&Reference> = matches.iter().take(5).map(|(r, _)| r).collect();
    let mut labels: Vec<String> = options
        .iter()
        .map(|r| format!("{} ({})", r.name.resolve(language), r.id))
        .collect();
    labels.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt(format!("Which {} did you mean?", kind))
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options.get(selection).map(|r| r.id.to_string()))
}
