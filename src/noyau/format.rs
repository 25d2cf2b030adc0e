// src/noyau/format.rs
//
// Forme texte d'une Fraction (dans les deux sens).
// - entier         : "n"
// - fraction propre: "n/d"
// - nombre mixte   : "w'n/d"  (apostrophe simple, aucun espace)
//
// Le dénominateur est toujours affiché positif ; une valeur négative (jamais produite
// par un arbre valide) s'affiche signe + valeur absolue : "-1/2", "-2'1/2".

use std::fmt;
use std::str::FromStr;

use super::erreur::{ErreurNoyau, Resultat};
use super::fraction::Fraction;

/* ------------------------ Affichage ------------------------ */

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negatif, entier, reste, den) = self.mixed_parts();
        let signe = if negatif { "-" } else { "" };

        if reste == 0 {
            write!(f, "{signe}{entier}")
        } else if entier == 0 {
            write!(f, "{signe}{reste}/{den}")
        } else {
            write!(f, "{signe}{entier}'{reste}/{den}")
        }
    }
}

/* ------------------------ Lecture ------------------------ */

impl FromStr for Fraction {
    type Err = ErreurNoyau;

    fn from_str(s: &str) -> Resultat<Self> {
        parse_fraction(s)
    }
}

/// Inverse textuel de l'affichage : `'` (mixte) puis `/` (fraction) sinon entier.
/// Le couple numérateur/dénominateur non réduit passe par Fraction::new (normalisation).
pub fn parse_fraction(s: &str) -> Resultat<Fraction> {
    let (negatif, corps) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s),
    };

    let valeur = if let Some((entier, propre)) = corps.split_once('\'') {
        let (n, d) = propre
            .split_once('/')
            .ok_or_else(|| ErreurNoyau::MalformedNumber(s.to_string()))?;
        let entier = parse_naturel(entier, s)?;
        let n = parse_naturel(n, s)?;
        let d = parse_naturel(d, s)?;
        if d == 0 {
            return Err(ErreurNoyau::DivisionByZero);
        }
        let numer = entier
            .checked_mul(d)
            .and_then(|x| x.checked_add(n))
            .ok_or(ErreurNoyau::Overflow)?;
        Fraction::new(numer, d)?
    } else if let Some((n, d)) = corps.split_once('/') {
        Fraction::new(parse_naturel(n, s)?, parse_naturel(d, s)?)?
    } else {
        Fraction::from_integer(parse_naturel(corps, s)?)
    };

    if negatif {
        Fraction::zero().checked_sub(&valeur)
    } else {
        Ok(valeur)
    }
}

/// Chiffres ASCII seulement (pas de signe, pas d'espace).
fn parse_naturel(morceau: &str, complet: &str) -> Resultat<i64> {
    if morceau.is_empty() || !morceau.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErreurNoyau::MalformedNumber(complet.to_string()));
    }
    // que des chiffres : seule erreur possible = trop grand
    morceau.parse::<i64>().map_err(|_| ErreurNoyau::Overflow)
}
