// src/noyau/decimal.rs
//
// Décimal exact en base 10 : entier “scalé” + échelle explicite.
// valeur = mantisse / 10^echelle
//
// Pas de flottant binaire nulle part : l'arithmétique utilisateur reste
// exacte, seule la division impose un arrondi (échelle fixée, moitié
// vers le haut).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Nombre décimal à précision arbitraire et échelle explicite.
#[derive(Clone, Debug)]
pub struct Decimal {
    mantisse: BigInt,
    echelle: usize,
}

/* ------------------------ Construction ------------------------ */

impl Decimal {
    pub fn entier(n: i64) -> Decimal {
        Decimal {
            mantisse: BigInt::from(n),
            echelle: 0,
        }
    }

    /// Parse un littéral `chiffres[.chiffres]` (sans signe : le moins
    /// unaire est un jeton à part).
    ///
    /// Rejette ce que le scan a laissé passer : ".5", "5.", "1.2.3".
    pub fn parse(litteral: &str) -> Option<Decimal> {
        let (entier, frac) = match litteral.split_once('.') {
            Some((e, f)) => (e, f),
            None => (litteral, ""),
        };

        if entier.is_empty() || !entier.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // partie fractionnaire présente => non vide, chiffres seulement
        // (un deuxième '.' atterrit ici et fait échouer ce test)
        if litteral.contains('.') && (frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()))
        {
            return None;
        }

        let mantisse = BigInt::parse_bytes(format!("{entier}{frac}").as_bytes(), 10)?;
        Some(Decimal {
            mantisse,
            echelle: frac.len(),
        })
    }
}

/* ------------------------ Alignement d'échelles ------------------------ */

/// Ramène deux décimaux à une échelle commune (la plus grande des deux).
fn aligne(a: &Decimal, b: &Decimal) -> (BigInt, BigInt, usize) {
    match a.echelle.cmp(&b.echelle) {
        Ordering::Equal => (a.mantisse.clone(), b.mantisse.clone(), a.echelle),
        Ordering::Greater => {
            let mb = &b.mantisse * pow10(a.echelle - b.echelle);
            (a.mantisse.clone(), mb, a.echelle)
        }
        Ordering::Less => {
            let ma = &a.mantisse * pow10(b.echelle - a.echelle);
            (ma, b.mantisse.clone(), b.echelle)
        }
    }
}

/* ------------------------ Arithmétique ------------------------ */

impl Add for Decimal {
    type Output = Decimal;
    fn add(self, autre: Decimal) -> Decimal {
        let (ma, mb, e) = aligne(&self, &autre);
        Decimal {
            mantisse: ma + mb,
            echelle: e,
        }
    }
}

impl Sub for Decimal {
    type Output = Decimal;
    fn sub(self, autre: Decimal) -> Decimal {
        let (ma, mb, e) = aligne(&self, &autre);
        Decimal {
            mantisse: ma - mb,
            echelle: e,
        }
    }
}

impl Mul for Decimal {
    type Output = Decimal;
    fn mul(self, autre: Decimal) -> Decimal {
        Decimal {
            mantisse: self.mantisse * autre.mantisse,
            echelle: self.echelle + autre.echelle,
        }
    }
}

impl Neg for Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        Decimal {
            mantisse: -self.mantisse,
            echelle: self.echelle,
        }
    }
}

impl Decimal {
    pub fn est_zero(&self) -> bool {
        self.mantisse.is_zero()
    }

    /// Division à `echelle` décimales, arrondi “moitié vers le haut”
    /// (loin de zéro sur la grandeur, comme HALF_UP).
    ///
    /// Le diviseur ne doit pas être nul (vérifié par l'appelant).
    pub fn div_arrondi(&self, diviseur: &Decimal, echelle: usize) -> Decimal {
        // quotient*10^echelle = mantisse_a * 10^(echelle + e_b - e_a) / mantisse_b
        let exp = echelle as isize + diviseur.echelle as isize - self.echelle as isize;
        let (num, den) = if exp >= 0 {
            (&self.mantisse * pow10(exp as usize), diviseur.mantisse.clone())
        } else {
            (self.mantisse.clone(), &diviseur.mantisse * pow10((-exp) as usize))
        };

        let negatif = num.is_negative() != den.is_negative();
        let na = num.abs();
        let da = den.abs();

        let mut q = &na / &da;
        let reste = &na % &da;
        if &reste * 2u32 >= da {
            q += 1u32;
        }

        Decimal {
            mantisse: if negatif { -q } else { q },
            echelle,
        }
    }

    /// Retire les zéros fractionnaires finaux (6.00 -> 6, 0.50 -> 0.5).
    /// Ne touche jamais à la partie entière.
    pub fn sans_zeros_finaux(mut self) -> Decimal {
        let dix = BigInt::from(10);
        while self.echelle > 0 && (&self.mantisse % &dix).is_zero() {
            self.mantisse /= &dix;
            self.echelle -= 1;
        }
        self
    }
}

/* ------------------------ Égalité (valeur, pas représentation) ------------------------ */

impl PartialEq for Decimal {
    fn eq(&self, autre: &Decimal) -> bool {
        let (ma, mb, _) = aligne(self, autre);
        ma == mb
    }
}

impl Eq for Decimal {}

/* ------------------------ Affichage “plain” ------------------------ */

/// Décimal en clair : signe, partie entière, partie fractionnaire
/// complétée à gauche. Jamais de notation scientifique.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signe = if self.mantisse.is_negative() { "-" } else { "" };
        let abs = self.mantisse.abs();

        if self.echelle == 0 {
            return write!(f, "{signe}{abs}");
        }

        let scale = pow10(self.echelle);
        let int_part = &abs / &scale;
        let frac_part = &abs % &scale;

        let mut frac = frac_part.to_str_radix(10);
        while frac.len() < self.echelle {
            frac.insert(0, '0');
        }

        write!(f, "{signe}{int_part}.{frac}")
    }
}
