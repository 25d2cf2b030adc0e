//! Tests de propriétés (proptest) : arithmétique exacte, texte, canon, aller-retour infixe.
//!
//! Les arbres tirés ici ne sont PAS filtrés par la validité : l'aller-retour
//! imprimeur -> analyseur doit tenir pour tout arbre à feuilles positives.

use std::cmp::Ordering;

use proptest::prelude::*;

use super::analyse::parse_expression;
use super::expr::{Expr, Op};
use super::format::parse_fraction;
use super::fraction::Fraction;

/* ------------------------ Stratégies ------------------------ */

fn fraction() -> impl Strategy<Value = Fraction> {
    (-1000i64..1000, 1i64..1000).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

fn fraction_positive() -> impl Strategy<Value = Fraction> {
    (0i64..1000, 1i64..50).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

fn op() -> impl Strategy<Value = Op> {
    prop::sample::select(Op::ALL.to_vec())
}

fn expr() -> impl Strategy<Value = Expr> {
    let feuille = fraction_positive().prop_map(Expr::leaf);
    feuille.prop_recursive(4, 16, 2, |inner| {
        (op(), inner.clone(), inner).prop_map(|(op, a, b)| Expr::binary(op, a, b))
    })
}

proptest! {
    #[test]
    fn ajout_puis_retrait(a in fraction(), b in fraction()) {
        let c = a.checked_add(&b).unwrap().checked_sub(&b).unwrap();
        prop_assert_eq!(c, a);
    }

    #[test]
    fn produit_puis_quotient(a in fraction(), b in fraction()) {
        prop_assume!(!b.is_zero());
        let c = a.checked_mul(&b).unwrap().checked_div(&b).unwrap();
        prop_assert_eq!(c, a);
    }

    #[test]
    fn toujours_reduite(n in -100_000i64..100_000, d in 1i64..100_000) {
        let x = Fraction::new(n, d).unwrap();
        prop_assert!(x.denom() > 0);
        prop_assert_eq!(gcd(x.numer().unsigned_abs(), x.denom().unsigned_abs()), 1);
    }

    #[test]
    fn ordre_par_produit_croise(a in fraction(), b in fraction()) {
        let gauche = i128::from(a.numer()) * i128::from(b.denom());
        let droite = i128::from(b.numer()) * i128::from(a.denom());
        prop_assert_eq!(a.cmp(&b), gauche.cmp(&droite));
        prop_assert_eq!(a == b, gauche.cmp(&droite) == Ordering::Equal);
    }

    #[test]
    fn aller_retour_texte(a in fraction()) {
        prop_assert_eq!(parse_fraction(&a.to_string()).unwrap(), a);
    }

    #[test]
    fn canon_invariant_par_commutation(a in expr(), b in expr(), addition in any::<bool>()) {
        let op = if addition { Op::Add } else { Op::Mul };
        let e1 = Expr::binary(op, a.clone(), b.clone());
        let e2 = Expr::binary(op, b, a);
        prop_assert_eq!(e1.canonical(), e2.canonical());
    }

    #[test]
    fn infixe_relu_a_l_identique(e in expr()) {
        let texte = e.to_infix();
        let relu = parse_expression(&texte).unwrap();
        prop_assert_eq!(&relu, &e, "texte={}", texte);
        prop_assert_eq!(relu.eval(), e.eval());
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}
