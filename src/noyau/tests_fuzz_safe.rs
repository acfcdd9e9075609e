//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - les expressions générées sont *bien formées* : la seule erreur
//!   admise est la division par zéro
//! - invariant clé : un résultat produit, ré-évalué, redonne le même texte

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::eval_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // littéraux valides seulement : chiffres[.chiffres]
    let entier = rng.pick(1000);
    if rng.coin() {
        let frac = rng.pick(100);
        format!("{entier}.{frac:02}")
    } else {
        format!("{entier}")
    }
}

fn gen_atome(rng: &mut Rng, depth: usize) -> String {
    let mut atome = if depth > 0 && rng.pick(3) == 0 {
        format!("({})", gen_expr(rng, depth - 1))
    } else {
        gen_nombre(rng)
    };

    if rng.pick(4) == 0 {
        atome.push('%');
    }
    if rng.pick(4) == 0 {
        atome = format!("-{atome}");
    }
    atome
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    let mut s = gen_atome(rng, depth);

    for _ in 0..rng.pick(3) {
        let op = match rng.pick(4) {
            0 => "+",
            1 => "-",
            2 => "*",
            _ => "/",
        };
        s = format!("{s}{op}{}", gen_atome(rng, depth));
    }
    s
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_forme_et_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);

        match eval_expression(&expr) {
            Ok(a) => {
                let b = eval_expression(&expr)
                    .unwrap_or_else(|e| panic!("indéterminisme: expr={expr:?} err={e}"));
                assert_eq!(a, b, "indéterminisme: expr={expr:?}");
                seen_ok += 1;
            }
            // bien formé => seule la division par zéro est admissible
            Err(ErreurEval::DivisionParZero) => {}
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }

    // On veut voir surtout des succès, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_resultat_reevaluable() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 2);
        let resultat = match eval_expression(&expr) {
            Ok(r) => r,
            Err(ErreurEval::DivisionParZero) => continue,
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        };

        // un résultat est un décimal “plain” : il se ré-évalue tel quel
        let relu = eval_expression(&resultat)
            .unwrap_or_else(|e| panic!("résultat illisible: {resultat:?} err={e}"));
        assert_eq!(relu, resultat, "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_chaine_longue_sans_recursion() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // le pipeline est itératif : une très longue chaîne d'opérateurs
    // ne doit pas menacer la pile d'appels
    let mut expr = String::from("1");
    for _ in 0..5000 {
        expr.push_str("+1");
    }

    budget(t0, max);
    assert_eq!(eval_expression(&expr).unwrap(), "5001");

    // idem pour une imbrication profonde de parenthèses
    let profonde = format!("{}7{}", "(".repeat(2000), ")".repeat(2000));
    assert_eq!(eval_expression(&profonde).unwrap(), "7");
}
