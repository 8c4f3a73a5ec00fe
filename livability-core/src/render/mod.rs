//! HTML fragments of the report regions.
//!
//! All functions are pure: rendering the same payload
//! always results in the same markup.

use maud::{html, Markup};

mod alternatives;
mod livability;
mod prediction;

pub use self::{alternatives::*, livability::*, prediction::*};

/// Shown if a searched place could not be resolved.
#[must_use]
pub fn place_not_found(query: &str) -> Markup {
    html! {
        li class="list-group-item text-warning" {
            "No details available for input: '" (query) "'"
        }
    }
}

fn list_item(text: &str) -> Markup {
    html! {
        li class="list-group-item" { (text) }
    }
}

fn danger_list_item(text: &str) -> Markup {
    html! {
        li class="list-group-item text-danger" { (text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_user_input() {
        let markup = place_not_found("<script>").into_string();
        assert!(markup.contains("&lt;script&gt;"));
        assert!(!markup.contains("<script>"));
    }
}
