//! Investment-type catalog and the custom-allocation checkbox rules.

use std::collections::HashSet;

/// One selectable investment type. The `id` is the wire value the backend
/// matches on; the `label` is what the checkbox shows.
pub struct InvestmentType {
    pub id: &'static str,
    pub label: &'static str,
}

pub const INVESTMENT_TYPES: [InvestmentType; 4] = [
    InvestmentType {
        id: "FIIs",
        label: "Fundos Imobiliários",
    },
    InvestmentType {
        id: "Ações",
        label: "Ações",
    },
    InvestmentType {
        id: "ETFs",
        label: "ETFs",
    },
    InvestmentType {
        id: "RendaFixa",
        label: "Renda Fixa",
    },
];

/// All types start selected, mirroring the server-side default distribution.
pub fn default_selection() -> HashSet<String> {
    INVESTMENT_TYPES
        .iter()
        .map(|tipo| tipo.id.to_string())
        .collect()
}

#[derive(Debug, PartialEq)]
pub enum ToggleOutcome {
    Toggled(HashSet<String>),
    /// Unchecking was refused: it would have left no type selected.
    LastRemaining,
}

/// Flips one type in the selection. The selection may never become empty.
pub fn toggle_type(selected: &HashSet<String>, tipo: &str) -> ToggleOutcome {
    let mut next = selected.clone();
    if next.contains(tipo) {
        if next.len() == 1 {
            return ToggleOutcome::LastRemaining;
        }
        next.remove(tipo);
    } else {
        next.insert(tipo.to_string());
    }
    ToggleOutcome::Toggled(next)
}

/// Selected wire ids in catalog order, for a stable request payload.
pub fn selected_ids(selected: &HashSet<String>) -> Vec<String> {
    INVESTMENT_TYPES
        .iter()
        .filter(|tipo| selected.contains(tipo.id))
        .map(|tipo| tipo.id.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_has_every_type() {
        let selected = default_selection();
        assert_eq!(selected.len(), INVESTMENT_TYPES.len());
        for tipo in &INVESTMENT_TYPES {
            assert!(selected.contains(tipo.id));
        }
    }

    #[test]
    fn unchecking_a_non_last_type_succeeds() {
        let selected = default_selection();
        match toggle_type(&selected, "ETFs") {
            ToggleOutcome::Toggled(next) => {
                assert!(!next.contains("ETFs"));
                assert_eq!(next.len(), 3);
            }
            ToggleOutcome::LastRemaining => panic!("should not be refused"),
        }
    }

    #[test]
    fn unchecking_the_last_type_is_refused() {
        let selected: HashSet<String> = ["Ações".to_string()].into_iter().collect();
        assert_eq!(toggle_type(&selected, "Ações"), ToggleOutcome::LastRemaining);
    }

    #[test]
    fn checking_an_unselected_type_adds_it() {
        let selected: HashSet<String> = ["Ações".to_string()].into_iter().collect();
        match toggle_type(&selected, "FIIs") {
            ToggleOutcome::Toggled(next) => {
                assert!(next.contains("FIIs"));
                assert!(next.contains("Ações"));
            }
            ToggleOutcome::LastRemaining => panic!("should not be refused"),
        }
    }

    #[test]
    fn selected_ids_follow_catalog_order() {
        let selected: HashSet<String> = ["RendaFixa".to_string(), "FIIs".to_string()]
            .into_iter()
            .collect();
        assert_eq!(selected_ids(&selected), vec!["FIIs", "RendaFixa"]);
    }
}
