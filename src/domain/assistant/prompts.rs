//! Prompt templates for the classifier and the generating handlers.
//!
//! Each prompt is a system instruction plus a user message. Handlers that
//! consult documentation embed the retrieved context under a `CONTEXTE`
//! heading after the query.

/// A system instruction and the user message sent with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    fn new(system: &str, user: impl Into<String>) -> Self {
        Self {
            system: system.to_string(),
            user: user.into(),
        }
    }

    fn with_context(system: &str, query: &str, context: &str) -> Self {
        Self::new(system, format!("{query}\n\nCONTEXTE :\n{context}"))
    }

    /// Asks for exactly one label word describing the query.
    pub fn intent(query: &str) -> Self {
        Self::new(INTENT_SYSTEM, query)
    }

    pub fn support(query: &str, context: &str) -> Self {
        Self::with_context(SUPPORT_SYSTEM, query, context)
    }

    /// Free-text answer, or an inventory directive.
    pub fn sales(query: &str, context: &str) -> Self {
        Self::with_context(SALES_SYSTEM, query, context)
    }

    /// Free-text answer, or an order creation directive.
    pub fn order_creation(query: &str, context: &str) -> Self {
        Self::with_context(ORDER_CREATION_SYSTEM, query, context)
    }

    /// Order status directive. Query only, no context.
    pub fn order_status(query: &str) -> Self {
        Self::new(ORDER_STATUS_SYSTEM, query)
    }
}

// ============================================================================
// System instructions
// ============================================================================

const INTENT_SYSTEM: &str = "Tu es un détecteur d'intention pour un agent client. \
Analyse la requête et renvoie exactement un mot parmi : \
SUPPORT, VENTE, COMMANDE, HANDOVER, SALUTATION, REMERCIEMENT, AUREVOIR.";

const SUPPORT_SYSTEM: &str =
    "Tu es agent de support technique. Utilise le CONTEXTE pour répondre.";

const SALES_SYSTEM: &str = r#"Tu es agent commercial. Si tu souhaites vérifier le stock/prix d'un produit, retourne un JSON littéral : {"tool":"check_product_inventory","name":"nom_produit"}. Sinon, réponds normalement."#;

const ORDER_CREATION_SYSTEM: &str = r#"Tu es agent de commande. Si tu veux créer une commande, retourne un JSON littéral : {"tool":"create_order","order_details":{"customer_name":"...","customer_email":"...","address":"...","items":[{"product_id":1,"quantity":1}]}}. Sinon, réponds normalement."#;

const ORDER_STATUS_SYSTEM: &str = r#"Si l'utilisateur demande le statut d'une commande, retourne un JSON littéral : {"tool":"get_order_status","order_id":123}."#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assistant::Intent;

    #[test]
    fn intent_prompt_lists_every_label_word() {
        let prompt = Prompt::intent("Bonjour");

        for word in [
            "SUPPORT",
            "VENTE",
            "COMMANDE",
            "HANDOVER",
            "SALUTATION",
            "REMERCIEMENT",
            "AUREVOIR",
        ] {
            assert!(prompt.system.contains(word), "missing {word}");
        }
        assert_eq!(prompt.user, "Bonjour");
    }

    #[test]
    fn every_label_word_is_recognised_by_the_classifier() {
        let expected = [
            ("SUPPORT", Intent::Support),
            ("VENTE", Intent::Sales),
            ("COMMANDE", Intent::Ordering),
            ("HANDOVER", Intent::Handover),
            ("SALUTATION", Intent::Greeting),
            ("REMERCIEMENT", Intent::Thanks),
            ("AUREVOIR", Intent::Farewell),
        ];

        for (word, intent) in expected {
            assert_eq!(Intent::from_completion(word), intent);
        }
    }

    #[test]
    fn context_prompts_embed_query_then_context() {
        let prompt = Prompt::support("Mon PC ne démarre pas", "[faq.txt]\nVérifiez le câble.");

        assert_eq!(
            prompt.user,
            "Mon PC ne démarre pas\n\nCONTEXTE :\n[faq.txt]\nVérifiez le câble."
        );
    }

    #[test]
    fn directive_prompts_show_the_wire_shape() {
        assert!(Prompt::sales("q", "").system.contains(r#""tool":"check_product_inventory""#));
        assert!(Prompt::order_creation("q", "")
            .system
            .contains(r#""tool":"create_order""#));
        assert!(Prompt::order_status("q").system.contains(r#""tool":"get_order_status""#));
    }

    #[test]
    fn order_status_prompt_carries_no_context() {
        let prompt = Prompt::order_status("Où en est ma commande 12 ?");
        assert_eq!(prompt.user, "Où en est ma commande 12 ?");
    }
}
