// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur décimale
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN avec une pile de valeurs
//
// Règles:
// - Le moins unaire est un opérateur à part entière : précédence 3,
//   associatif à droite (donc "--5" se compose de l'intérieur).
// - '%' est postfixe : sortie directe, aucune interaction avec la pile
//   d'opérateurs (il s'applique à la valeur qui le précède).

use super::decimal::Decimal;
use super::erreur::ErreurEval;
use super::jetons::{OpBin, Tok};

/// Échelle fractionnaire des divisions (y compris /100 du pourcent).
const ECHELLE_DIVISION: usize = 10;

/* ------------------------ Table des opérateurs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug)]
pub struct InfoOp {
    pub precedence: i32,
    pub associativite: Associativite,
}

/// Précédences/associativités, figées une fois pour toutes et passées
/// par référence au convertisseur. Aucun état global mutable.
#[derive(Clone, Debug)]
pub struct TableOperateurs {
    plus: InfoOp,
    moins: InfoOp,
    fois: InfoOp,
    division: InfoOp,
    moins_unaire: InfoOp,
}

impl TableOperateurs {
    pub const fn standard() -> TableOperateurs {
        const GAUCHE: Associativite = Associativite::Gauche;
        TableOperateurs {
            plus: InfoOp {
                precedence: 1,
                associativite: GAUCHE,
            },
            moins: InfoOp {
                precedence: 1,
                associativite: GAUCHE,
            },
            fois: InfoOp {
                precedence: 2,
                associativite: GAUCHE,
            },
            division: InfoOp {
                precedence: 2,
                associativite: GAUCHE,
            },
            moins_unaire: InfoOp {
                precedence: 3,
                associativite: Associativite::Droite,
            },
        }
    }

    /// None pour tout jeton qui n'est pas un opérateur empilable.
    fn info(&self, t: &Tok) -> Option<InfoOp> {
        match t {
            Tok::Op(OpBin::Plus) => Some(self.plus),
            Tok::Op(OpBin::Minus) => Some(self.moins),
            Tok::Op(OpBin::Star) => Some(self.fois),
            Tok::Op(OpBin::Slash) => Some(self.division),
            Tok::MoinsUnaire => Some(self.moins_unaire),
            _ => None,
        }
    }
}

/* ------------------------ Infix -> RPN ------------------------ */

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [2, +, 3, *, 4]
///   rpn:    [2, 3, 4, *, +]
pub fn en_rpn(jetons: &[Tok], table: &TableOperateurs) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    for tok in jetons.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            // postfixe : sortie directe
            Tok::Pourcent => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu'à '(' ; son absence = groupement déséquilibré
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurEval::ParenthesesNonAppariees),
                    }
                }
            }

            Tok::Op(_) | Tok::MoinsUnaire => {
                let o1 = match table.info(&tok) {
                    Some(i) => i,
                    None => unreachable!(),
                };

                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la précédence/associativité exige de sortir l'opérateur
                //   du haut ('<' strict pour associatif à droite, '<=' sinon)
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    let o2 = match table.info(top) {
                        Some(i) => i,
                        None => break,
                    };

                    let doit_pop = match o1.associativite {
                        Associativite::Droite => o1.precedence < o2.precedence,
                        Associativite::Gauche => o1.precedence <= o2.precedence,
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err(ErreurEval::ParenthesesNonAppariees);
        }
        out.push(op);
    }

    Ok(out)
}

/* ------------------------ Évaluation RPN ------------------------ */

/// Évalue une RPN avec une pile de valeurs décimales.
///
/// - opérateur binaire : dépile b puis a (a est l'opérande *gauche* —
///   l'ordre compte pour - et /), applique, rempile
/// - moins unaire : dépile, nie, rempile
/// - pourcent : dépile, divise par 100 (échelle 10, zéros finaux
///   retirés avant rempilage), rempile
pub fn eval_rpn(rpn: &[Tok]) -> Result<Decimal, ErreurEval> {
    let mut pile: Vec<Decimal> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(litteral) => {
                let v = Decimal::parse(litteral).ok_or(ErreurEval::ExpressionInvalide)?;
                pile.push(v);
            }

            Tok::MoinsUnaire => {
                let v = pile.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                pile.push(-v);
            }

            Tok::Pourcent => {
                let v = pile.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                let cent = Decimal::entier(100);
                pile.push(v.div_arrondi(&cent, ECHELLE_DIVISION).sans_zeros_finaux());
            }

            Tok::Op(op) => {
                let b = pile.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                let a = pile.pop().ok_or(ErreurEval::ExpressionInvalide)?;

                let r = match op {
                    OpBin::Plus => a + b,
                    OpBin::Minus => a - b,
                    OpBin::Star => a * b,
                    OpBin::Slash => {
                        if b.est_zero() {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a.div_arrondi(&b, ECHELLE_DIVISION)
                    }
                };

                pile.push(r);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::ExpressionInvalide),
        }
    }

    if pile.len() != 1 {
        return Err(ErreurEval::ExpressionInvalide);
    }
    Ok(pile.pop().unwrap())
}
