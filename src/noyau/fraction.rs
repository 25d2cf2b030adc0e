// src/noyau/fraction.rs
//
// Fraction exacte sur i64 (sans flottants).
// - toujours réduite : pgcd(|n|, d) = 1, d > 0, signe porté par le numérateur
// - immuable : chaque opération construit une nouvelle valeur
// - opérations vérifiées : dépassement i64 => ErreurNoyau::Overflow (jamais de panique)
//
// Ordre total : celui de num-rational (pas de multiplication croisée qui déborde).

use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Signed, Zero};

use super::erreur::{ErreurNoyau, Resultat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fraction(Rational64);

impl Fraction {
    /// Construit n/d réduit.
    /// d = 0 => DivisionByZero ; i64::MIN refusé (sa valeur absolue ne tient pas en i64).
    pub fn new(numer: i64, denom: i64) -> Resultat<Self> {
        if denom == 0 {
            return Err(ErreurNoyau::DivisionByZero);
        }
        if numer == i64::MIN || denom == i64::MIN {
            return Err(ErreurNoyau::Overflow);
        }
        Ok(Fraction(Rational64::new(numer, denom)))
    }

    pub fn from_integer(n: i64) -> Self {
        Fraction(Rational64::from_integer(n))
    }

    pub fn zero() -> Self {
        Fraction(Rational64::zero())
    }

    pub fn numer(&self) -> i64 {
        *self.0.numer()
    }

    pub fn denom(&self) -> i64 {
        *self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /* ------------------------ Arithmétique vérifiée ------------------------ */

    pub fn checked_add(&self, other: &Fraction) -> Resultat<Fraction> {
        self.0
            .checked_add(&other.0)
            .map(Fraction)
            .ok_or(ErreurNoyau::Overflow)
    }

    pub fn checked_sub(&self, other: &Fraction) -> Resultat<Fraction> {
        self.0
            .checked_sub(&other.0)
            .map(Fraction)
            .ok_or(ErreurNoyau::Overflow)
    }

    pub fn checked_mul(&self, other: &Fraction) -> Resultat<Fraction> {
        self.0
            .checked_mul(&other.0)
            .map(Fraction)
            .ok_or(ErreurNoyau::Overflow)
    }

    /// Division par la réciproque ; diviseur nul => DivisionByZero.
    pub fn checked_div(&self, other: &Fraction) -> Resultat<Fraction> {
        if other.is_zero() {
            return Err(ErreurNoyau::DivisionByZero);
        }
        self.0
            .checked_div(&other.0)
            .map(Fraction)
            .ok_or(ErreurNoyau::Overflow)
    }

    /// Décomposition d'affichage : (négatif?, partie entière, reste, dénominateur),
    /// le tout en valeur absolue.
    pub(crate) fn mixed_parts(&self) -> (bool, u64, u64, u64) {
        let n = self.numer().unsigned_abs();
        let d = self.denom().unsigned_abs();
        (self.is_negative(), n / d, n % d, d)
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Fraction::from_integer(n)
    }
}
