//! Calculatrice décimale — moteur d'évaluation d'expressions.
//!
//! Entrée : une chaîne infixe (chiffres, `.`, `+`, `-`, `*`/`×`,
//! `/`/`÷`, parenthèses, `%` postfixe, espaces).
//! Sortie : le résultat en décimal “plain”, ou une erreur par genre.
//!
//! ```
//! use calculatrice_decimale::eval_expression;
//!
//! assert_eq!(eval_expression("2+3*4").unwrap(), "14");
//! assert_eq!(eval_expression("10/3").unwrap(), "3.3333333333");
//! ```

pub mod noyau;

pub use noyau::{eval_expression, ErreurEval};
