// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du pipeline, par genre.
///
/// Toutes sont terminales pour l'appel en cours : l'expression entière
/// est rejetée, pas de résultat partiel, pas de valeur par défaut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Symbole non reconnu pendant la tokenisation.
    #[error("caractère inattendu: '{0}'")]
    CaractereInvalide(char),

    /// Groupement non équilibré : ')' orpheline ou '(' jamais fermée.
    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,

    /// Arrangement opérateurs/opérandes structurellement invalide
    /// (entrée vide, opérateur traînant, littéral décimal illisible…).
    #[error("expression invalide")]
    ExpressionInvalide,

    /// Diviseur comparant égal à zéro.
    #[error("division par zéro")]
    DivisionParZero,
}
