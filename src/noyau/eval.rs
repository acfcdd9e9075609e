//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile décimale -> sans zéros finaux -> texte “plain”
//!
//! Pipeline pur et synchrone : aucune donnée partagée entre deux appels,
//! chaque invocation repart d'une chaîne et ne garde rien derrière elle.

use super::erreur::ErreurEval;
use super::jetons::{format_jetons, tokenize};
use super::rpn::{en_rpn, eval_rpn, TableOperateurs};

/// Étapes intermédiaires du calcul, en texte (affichage “démarche”).
#[derive(Default, Clone, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression et retourne le résultat en
/// décimal “plain” (pas de notation scientifique, pas de zéros
/// fractionnaires finaux, pas de '+' de tête).
pub fn eval_expression(expr_str: &str) -> Result<String, ErreurEval> {
    Ok(eval_expression_detaille(expr_str)?.0)
}

/// Comme [`eval_expression`], avec la démarche (jetons + RPN en texte).
pub fn eval_expression_detaille(expr_str: &str) -> Result<(String, Demarche), ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::ExpressionInvalide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    let jetons_txt = format_jetons(&jetons);

    // 2) RPN
    let table = TableOperateurs::standard();
    let rpn = en_rpn(&jetons, &table)?;
    let rpn_txt = format_jetons(&rpn);

    // 3) Pile décimale, puis normalisation du résultat
    let valeur = eval_rpn(&rpn)?;
    let texte = valeur.sans_zeros_finaux().to_string();

    Ok((
        texte,
        Demarche {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    ))
}
