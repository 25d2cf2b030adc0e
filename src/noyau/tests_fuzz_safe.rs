//! Tests fuzz safe : campagnes de génération à graine fixe.
//!
//! But : marteler générateur + imprimeur + analyseur + correcteur sans brûler la machine.
//! - RNG déterministe (ChaCha8, graines fixes)
//! - budget temps global
//! - invariants : validité nœud par nœud, unicité canonique, aller-retour des fichiers

use std::collections::HashSet;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::analyse::parse_expression;
use super::correcteur::grade_lines;
use super::expr::{Expr, Op};
use super::fraction::Fraction;
use super::generateur::{GenerationReport, GeneratorConfig, ProblemGenerator, MAX_OPERATORS};

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn campagne(count: usize, range: u32, seed: u64) -> GenerationReport {
    ProblemGenerator::new(
        GeneratorConfig::new(count, range),
        ChaCha8Rng::seed_from_u64(seed),
    )
    .generate()
}

/// Vérifie les contraintes nœud par nœud, indépendamment de Expr::is_valid.
/// Renvoie la valeur du sous-arbre.
fn verifie_noeuds(e: &Expr) -> Fraction {
    match e {
        Expr::Leaf(v) => {
            assert!(!v.is_negative(), "feuille négative: {v}");
            *v
        }
        Expr::Binary(op, a, b) => {
            let va = verifie_noeuds(a);
            let vb = verifie_noeuds(b);
            match op {
                Op::Sub => assert!(va >= vb, "soustraction négative: {e}"),
                Op::Div => {
                    assert!(!vb.is_zero(), "division par zéro: {e}");
                    let q = va.checked_div(&vb).unwrap();
                    assert!(!q.is_integer(), "quotient entier: {e}");
                }
                Op::Add | Op::Mul => {}
            }
            op.apply(&va, &vb).unwrap()
        }
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_validite_noeud_par_noeud() {
    let start = Instant::now();
    let max = Duration::from_secs(20);

    for seed in 0..40u64 {
        budget(start, max);
        let range = 2 + (seed % 12) as u32;
        let report = campagne(50, range, seed);

        for p in &report.problems {
            let v = verifie_noeuds(&p.expr);
            assert_eq!(v, p.answer, "seed={seed} expr={}", p.expr);
            assert!(p.expr.operator_count() <= MAX_OPERATORS as usize);
        }
    }
}

#[test]
fn fuzz_unicite_canonique() {
    let start = Instant::now();
    let max = Duration::from_secs(20);

    for seed in 100..120u64 {
        budget(start, max);
        let report = campagne(300, 10, seed);
        let uniques: HashSet<&str> = report
            .problems
            .iter()
            .map(|p| p.canonical.as_str())
            .collect();
        assert_eq!(uniques.len(), report.problems.len(), "seed={seed}");
    }
}

#[test]
fn fuzz_aller_retour_infixe() {
    let start = Instant::now();
    let max = Duration::from_secs(20);

    for seed in 200..230u64 {
        budget(start, max);
        for p in campagne(60, 20, seed).problems {
            let texte = p.expr.to_infix();
            let relu = parse_expression(&texte).unwrap_or_else(|e| panic!("{texte:?}: {e}"));
            assert_eq!(relu.eval().unwrap(), p.answer, "texte={texte:?}");
        }
    }
}

#[test]
fn fuzz_correction_des_fichiers_generes() {
    let start = Instant::now();
    let max = Duration::from_secs(20);

    for seed in 300..310u64 {
        budget(start, max);
        let report = campagne(100, 10, seed);
        let exercices: Vec<String> = report.problems.iter().map(|p| p.exercise_line()).collect();
        let reponses: Vec<String> = report.problems.iter().map(|p| p.answer_line()).collect();

        let note = grade_lines(&exercices, &reponses);
        assert_eq!(note.correct_count(), report.generated(), "seed={seed}");
        assert_eq!(note.wrong_count(), 0);

        // réponses décalées d'une unité : tout doit être faux
        let fausses: Vec<String> = report
            .problems
            .iter()
            .map(|p| {
                let decale = p.answer.checked_add(&Fraction::from_integer(1)).unwrap();
                format!("{}. {}", p.index, decale)
            })
            .collect();
        let note = grade_lines(&exercices, &fausses);
        assert_eq!(note.correct_count(), 0);
        assert_eq!(note.wrong_count(), report.generated());
    }
}

#[test]
fn fuzz_petites_bornes_ne_bloquent_pas() {
    let start = Instant::now();
    let max = Duration::from_secs(20);

    for range in 0..2u32 {
        budget(start, max);
        let config = GeneratorConfig {
            count: 1_000,
            range,
            max_attempts: 10_000,
            ..GeneratorConfig::default()
        };
        let report = ProblemGenerator::new(config, ChaCha8Rng::seed_from_u64(9)).generate();
        assert!(report.is_shortfall(), "range={range}");
        assert!(report.attempts <= 10_000);
    }
}
