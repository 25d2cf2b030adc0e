//! Noyau exact : exercices d'arithmétique sur fractions
//!
//! Organisation interne :
//! - erreur.rs     : ErreurNoyau (aucune n'est fatale)
//! - fraction.rs   : Fraction exacte i64, toujours réduite, opérations vérifiées
//! - format.rs     : forme texte "n" / "n/d" / "w'n/d" (affichage + lecture)
//! - expr.rs       : arbre Leaf/Binary : eval, validité, infixe
//! - canon.rs      : forme canonique (déduplication sous commutativité)
//! - jetons.rs     : découpage en jetons de la notation infixe
//! - analyse.rs    : descente récursive texte -> Expr
//! - generateur.rs : réservoir de feuilles + arbres aléatoires + boucle d'acceptation bornée
//! - correcteur.rs : correction ligne à ligne (juste / faux)

pub mod analyse;
pub mod canon;
pub mod correcteur;
pub mod erreur;
pub mod expr;
pub mod format;
pub mod fraction;
pub mod generateur;
pub mod jetons;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use correcteur::{grade_lines, GradeReport};
pub use generateur::{GenerationReport, GeneratorConfig, ProblemGenerator};
