//! Noyau décimal
//!
//! Organisation interne :
//! - jetons.rs  : tokenisation (moins unaire tranché ici, une fois)
//! - rpn.rs     : table des opérateurs + shunting-yard + pile d'évaluation
//! - decimal.rs : décimal exact (entier scalé + échelle)
//! - erreur.rs  : taxonomie d'erreurs
//! - eval.rs    : pipeline complet

pub mod decimal;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::eval_expression;
