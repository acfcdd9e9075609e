// src/main.rs
//
// Calculatrice décimale — coquille console autour du noyau
// --------------------------------------------------------
// But:
// - arguments : chaque argument est une expression, évaluée puis affichée
// - sans argument : lit les expressions ligne à ligne sur stdin
// - --etapes : affiche aussi la démarche (jetons + RPN)
//
// Toute la logique vit dans src/noyau/ ; ici, entrée/sortie seulement.

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use calculatrice_decimale::noyau::eval::eval_expression_detaille;

fn evalue_et_affiche(expr: &str, etapes: bool) -> bool {
    match eval_expression_detaille(expr) {
        Ok((resultat, demarche)) => {
            if etapes {
                println!("jetons : {}", demarche.jetons);
                println!("rpn    : {}", demarche.rpn);
            }
            println!("{resultat}");
            true
        }
        Err(e) => {
            eprintln!("Erreur: {e}");
            false
        }
    }
}

fn main() -> ExitCode {
    let mut etapes = false;
    let mut exprs: Vec<String> = Vec::new();

    for arg in env::args().skip(1) {
        if arg == "--etapes" {
            etapes = true;
        } else {
            exprs.push(arg);
        }
    }

    let mut tout_ok = true;

    if exprs.is_empty() {
        // mode interactif : une expression par ligne, ligne vide pour sortir
        let stdin = io::stdin();
        loop {
            print!("> ");
            let _ = io::stdout().flush();

            let mut ligne = String::new();
            match stdin.lock().read_line(&mut ligne) {
                Ok(0) => break, // EOF
                Ok(_) => {}
                Err(_) => break,
            }

            let expr = ligne.trim();
            if expr.is_empty() {
                break;
            }
            tout_ok &= evalue_et_affiche(expr, etapes);
        }
    } else {
        for expr in &exprs {
            tout_ok &= evalue_et_affiche(expr, etapes);
        }
    }

    if tout_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
