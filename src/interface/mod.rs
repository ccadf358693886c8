pub mod prompts;
pub mod render;

pub use prompts::{find_exact, fuzzy_matches, prompt_yes_no, resolve_reference, Reference};
pub use render::{display_order, display_unit_table};
