//! User intents and their recognition in raw backend completions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The classified purpose of a user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Technical support question answered from documentation
    Support,
    /// Product availability or pricing question
    Sales,
    /// Order creation or order status request
    Ordering,
    /// Out of scope, escalate to a human agent
    Handover,
    Greeting,
    Thanks,
    Farewell,
}

const GREETING_WORDS: &[&str] = &["BONJOUR", "SALUT", "HELLO"];
const THANKS_WORDS: &[&str] = &["MERCI", "THANKS"];
const FAREWELL_WORDS: &[&str] = &["AU REVOIR", "BYE", "AUREVOIR"];
const SUPPORT_WORDS: &[&str] = &["SUPPORT"];
const ORDERING_WORDS: &[&str] = &["COMMANDE", "COMMANDER", "ACHAT"];
const SALES_WORDS: &[&str] = &["VENTE", "DISPONIBLE", "PRIX"];

/// Keyword groups in matching order. The first group with a hit wins.
const PRECEDENCE: &[(Intent, &[&str])] = &[
    (Intent::Greeting, GREETING_WORDS),
    (Intent::Thanks, THANKS_WORDS),
    (Intent::Farewell, FAREWELL_WORDS),
    (Intent::Support, SUPPORT_WORDS),
    (Intent::Ordering, ORDERING_WORDS),
    (Intent::Sales, SALES_WORDS),
];

impl Intent {
    pub const ALL: [Intent; 7] = [
        Intent::Support,
        Intent::Sales,
        Intent::Ordering,
        Intent::Handover,
        Intent::Greeting,
        Intent::Thanks,
        Intent::Farewell,
    ];

    /// Resolves a raw classification completion to an intent.
    ///
    /// This is substring matching over the upper-cased text, not a strict
    /// vocabulary match: a completion mentioning both a greeting word and
    /// "SUPPORT" is a greeting. Anything unmatched is a handover.
    pub fn from_completion(raw: &str) -> Intent {
        let upper = raw.trim().to_uppercase();
        PRECEDENCE
            .iter()
            .find(|(_, words)| words.iter().any(|word| upper.contains(word)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Handover)
    }

    /// Stable label used in traces and over the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Support => "SUPPORT",
            Intent::Sales => "SALES",
            Intent::Ordering => "ORDERING",
            Intent::Handover => "HANDOVER",
            Intent::Greeting => "GREETING",
            Intent::Thanks => "THANKS",
            Intent::Farewell => "FAREWELL",
        }
    }

    pub fn from_label(label: &str) -> Option<Intent> {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn vocabulary_labels_resolve_to_their_intent() {
        assert_eq!(Intent::from_completion("SUPPORT"), Intent::Support);
        assert_eq!(Intent::from_completion("VENTE"), Intent::Sales);
        assert_eq!(Intent::from_completion("COMMANDE"), Intent::Ordering);
        assert_eq!(Intent::from_completion("HANDOVER"), Intent::Handover);
        assert_eq!(Intent::from_completion("SALUTATION"), Intent::Greeting);
        assert_eq!(Intent::from_completion("REMERCIEMENT"), Intent::Thanks);
        assert_eq!(Intent::from_completion("AUREVOIR"), Intent::Farewell);
    }

    #[test]
    fn matching_is_case_insensitive_and_ignores_padding() {
        assert_eq!(Intent::from_completion("  vente\n"), Intent::Sales);
        assert_eq!(Intent::from_completion("Au revoir"), Intent::Farewell);
    }

    #[test]
    fn greeting_wins_over_support() {
        assert_eq!(
            Intent::from_completion("BONJOUR, c'est du SUPPORT"),
            Intent::Greeting
        );
    }

    #[test]
    fn support_wins_over_ordering_and_sales() {
        assert_eq!(
            Intent::from_completion("SUPPORT COMMANDE PRIX"),
            Intent::Support
        );
        assert_eq!(Intent::from_completion("ACHAT au meilleur PRIX"), Intent::Ordering);
    }

    #[test]
    fn price_and_availability_words_mean_sales() {
        assert_eq!(Intent::from_completion("DISPONIBLE ?"), Intent::Sales);
        assert_eq!(Intent::from_completion("prix"), Intent::Sales);
    }

    #[test]
    fn unmatched_completion_is_handover() {
        assert_eq!(Intent::from_completion("INCONNU"), Intent::Handover);
        assert_eq!(Intent::from_completion(""), Intent::Handover);
    }

    #[test]
    fn labels_round_trip() {
        for intent in Intent::ALL {
            assert_eq!(Intent::from_label(intent.label()), Some(intent));
        }
        assert_eq!(Intent::from_label("sales"), Some(Intent::Sales));
        assert_eq!(Intent::from_label("VENTE"), None);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Intent::Ordering).unwrap();
        assert_eq!(json, "\"ORDERING\"");
    }

    proptest! {
        #[test]
        fn greeting_word_always_takes_precedence(prefix in "[a-z ]{0,12}", suffix in "[a-z ]{0,12}") {
            let raw = format!("{prefix}bonjour{suffix} SUPPORT COMMANDE VENTE");
            prop_assert_eq!(Intent::from_completion(&raw), Intent::Greeting);
        }

        #[test]
        fn digits_only_completions_are_handover(raw in "[0-9 ]{0,24}") {
            prop_assert_eq!(Intent::from_completion(&raw), Intent::Handover);
        }
    }
}
