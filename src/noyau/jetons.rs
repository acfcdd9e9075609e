// src/noyau/jetons.rs

use super::erreur::ErreurEval;

/// Opérateur binaire (genre, nommé par son glyphe canonique).
///
/// Les glyphes d'affichage × et ÷ sont normalisés dès la tokenisation
/// vers Star / Slash : un seul genre par opération ensuite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBin {
    Plus,
    Minus,
    Star,
    Slash,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    /// Littéral numérique, gardé tel quel (texte) jusqu'à l'évaluation.
    ///
    /// NOTE: le scan accepte plusieurs '.' dans un littéral ("1.2.3") ;
    /// la validité n'est tranchée qu'au parse décimal, côté évaluateur.
    Num(String),

    Op(OpBin),

    /// Moins *unaire*, décidé une fois pour toutes à l'émission
    /// (jamais réexaminé en aval).
    MoinsUnaire,

    /// Pourcent postfixe, toujours autonome (jamais collé au nombre).
    Pourcent,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - littéraux décimaux (ex: 12, 3.5)
/// - opérateurs + - * / (et les glyphes × ÷, normalisés)
/// - parenthèses ( )
/// - % postfixe
/// - espaces (ignorés, jamais émis)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs mono-caractère (hors '-')
        match c {
            '+' => {
                out.push(Tok::Op(OpBin::Plus));
                i += 1;
                continue;
            }
            '*' | '×' => {
                out.push(Tok::Op(OpBin::Star));
                i += 1;
                continue;
            }
            '/' | '÷' => {
                out.push(Tok::Op(OpBin::Slash));
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Pourcent);
                i += 1;
                continue;
            }
            _ => {}
        }

        // '-' : unaire en début d'expression, ou juste après '(' ou un
        // autre opérateur (y compris un moins unaire déjà émis).
        // Après un nombre, ')' ou '%' : soustraction binaire.
        if c == '-' {
            let unaire = matches!(
                out.last(),
                None | Some(Tok::LPar | Tok::Op(_) | Tok::MoinsUnaire)
            );
            out.push(if unaire {
                Tok::MoinsUnaire
            } else {
                Tok::Op(OpBin::Minus)
            });
            i += 1;
            continue;
        }

        // Littéral numérique : avale chiffres et '.' d'un seul tenant.
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        return Err(ErreurEval::CaractereInvalide(c));
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in jetons {
        let s = match t {
            Tok::Num(litt) => litt.clone(),

            Tok::Op(OpBin::Plus) => "+".to_string(),
            Tok::Op(OpBin::Minus) => "-".to_string(),
            Tok::Op(OpBin::Star) => "*".to_string(),
            Tok::Op(OpBin::Slash) => "/".to_string(),

            Tok::MoinsUnaire => "(-)".to_string(),
            Tok::Pourcent => "%".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
